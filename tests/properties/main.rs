//! Property-based tests: extractors and list operations on arbitrary input.

mod aggregation_props;
mod extraction_props;
mod weight_props;

//! Unit test suite entry point.

mod extraction_tests;
mod lab_workflow_tests;

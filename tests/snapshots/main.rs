//! Snapshot tests for user-facing text and machine output.

mod error_messages;
mod extraction_output;

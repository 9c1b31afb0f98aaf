//! In-memory integration tests for the board public API.
//!
//! Tests are organized into modules by functionality:
//! - `board_flow_tests`: task lifecycle, column projection, reload behaviour
//! - `comment_flow_tests`: comment lifecycle and ordering

mod in_memory {
    pub mod helpers;

    mod board_flow_tests;
    mod comment_flow_tests;
}

//! Unit tests for the state core.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod move_task_tests;
mod support;

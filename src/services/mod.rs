//! Application services orchestrating the state core.

mod task_board;

pub use task_board::{DEFAULT_COLUMN_TITLES, TaskBoardStore};

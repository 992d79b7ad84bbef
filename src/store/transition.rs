//! Transition requests applied by the store.

use super::DropResult;
use crate::domain::{Board, BoardId, Column, ColumnId, Task, TaskId};

/// A named, pure state-change request.
///
/// Requests are total: naming an absent target degrades to an identity
/// no-op rather than an error. Entity-carrying variants expect fully
/// formed entities; input validation happens before a request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Makes a board the displayed one.
    ///
    /// The id is not checked for existence; callers only pass known ids.
    SetCurrentBoard {
        /// Board to display.
        board_id: BoardId,
    },

    /// Inserts a board, appends it to the display order, and makes it the
    /// displayed board.
    AddBoard {
        /// Fully formed board to insert.
        board: Board,
    },

    /// Replaces a board's title and description.
    UpdateBoard {
        /// Target board.
        board_id: BoardId,
        /// Replacement title.
        title: String,
        /// Replacement description.
        description: String,
    },

    /// Removes a board and everything it owns.
    ///
    /// When the removed board was displayed, the first remaining board
    /// takes its place, or none when no board remains.
    DeleteBoard {
        /// Board to remove.
        board_id: BoardId,
    },

    /// Inserts a column and appends it to the board's display order.
    AddColumn {
        /// Owning board.
        board_id: BoardId,
        /// Fully formed column to insert.
        column: Column,
    },

    /// Replaces a column's title.
    UpdateColumn {
        /// Owning board.
        board_id: BoardId,
        /// Target column.
        column_id: ColumnId,
        /// Replacement title.
        title: String,
    },

    /// Removes a column; every task it referenced vanishes with it.
    DeleteColumn {
        /// Owning board.
        board_id: BoardId,
        /// Column to remove.
        column_id: ColumnId,
    },

    /// Appends a task to a column's lane and records it on the board.
    AddTask {
        /// Owning board.
        board_id: BoardId,
        /// Lane the task lands in.
        column_id: ColumnId,
        /// Fully formed task to insert.
        task: Task,
    },

    /// Replaces a task by id, forcing `updated_at` to the current time.
    ///
    /// An unknown task id is inserted rather than rejected.
    UpdateTask {
        /// Owning board.
        board_id: BoardId,
        /// Full replacement task.
        task: Task,
    },

    /// Removes a task id from a column's lane and the task from the board.
    DeleteTask {
        /// Owning board.
        board_id: BoardId,
        /// Lane the task is listed in.
        column_id: ColumnId,
        /// Task to remove.
        task_id: TaskId,
    },

    /// Reorders or relocates a task according to a drop result.
    MoveTask {
        /// Owning board.
        board_id: BoardId,
        /// Outcome of the drag gesture.
        drop: DropResult,
    },
}

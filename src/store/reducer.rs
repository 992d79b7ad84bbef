//! The pure transition function over the application state.
//!
//! [`apply`] is the only place mutation logic lives. It never fails and
//! never panics for any documented request; absent-target requests return
//! the input state unchanged. States are shared behind [`Arc`] so that
//! consumers detect change by pointer comparison: identity no-ops hand
//! back the same allocation, every effective transition a new one.

use super::{DropResult, Transition};
use crate::domain::{AppState, Board, BoardId, ColumnId, Task, TaskId};
use mockable::Clock;
use std::sync::Arc;

/// Computes the next state for a transition request.
///
/// The clock only feeds the forced `updated_at` refresh of
/// [`Transition::UpdateTask`]; every other request is independent of it.
#[must_use]
pub fn apply(state: &Arc<AppState>, transition: &Transition, clock: &impl Clock) -> Arc<AppState> {
    match transition {
        Transition::SetCurrentBoard { board_id } => set_current_board(state, board_id),
        Transition::AddBoard { board } => add_board(state, board),
        Transition::UpdateBoard {
            board_id,
            title,
            description,
        } => edit_board(state, board_id, |board| {
            board.set_details(title.clone(), description.clone());
        }),
        Transition::DeleteBoard { board_id } => delete_board(state, board_id),
        Transition::AddColumn { board_id, column } => edit_board(state, board_id, |board| {
            board.insert_column(column.clone());
        }),
        Transition::UpdateColumn {
            board_id,
            column_id,
            title,
        } => update_column(state, board_id, column_id, title),
        Transition::DeleteColumn {
            board_id,
            column_id,
        } => edit_board(state, board_id, |board| board.remove_column(column_id)),
        Transition::AddTask {
            board_id,
            column_id,
            task,
        } => add_task(state, board_id, column_id, task),
        Transition::UpdateTask { board_id, task } => update_task(state, board_id, task, clock),
        Transition::DeleteTask {
            board_id,
            column_id,
            task_id,
        } => delete_task(state, board_id, column_id, task_id),
        Transition::MoveTask { board_id, drop } => move_task(state, board_id, drop),
    }
}

/// Rebuilds the state with one board edited in place of the old one.
///
/// Returns the input state unchanged when the board is absent.
fn edit_board(
    state: &Arc<AppState>,
    board_id: &BoardId,
    edit: impl FnOnce(&mut Board),
) -> Arc<AppState> {
    if !state.boards().contains_key(board_id) {
        return Arc::clone(state);
    }
    let mut next = AppState::clone(state);
    if let Some(board) = next.board_mut(board_id) {
        edit(board);
    }
    Arc::new(next)
}

fn set_current_board(state: &Arc<AppState>, board_id: &BoardId) -> Arc<AppState> {
    let mut next = AppState::clone(state);
    next.set_current_board(Some(board_id.clone()));
    Arc::new(next)
}

fn add_board(state: &Arc<AppState>, board: &Board) -> Arc<AppState> {
    let board_id = board.id().clone();
    let mut next = AppState::clone(state);
    next.insert_board(board.clone());
    next.set_current_board(Some(board_id));
    Arc::new(next)
}

fn delete_board(state: &Arc<AppState>, board_id: &BoardId) -> Arc<AppState> {
    let was_current = state.current_board_id() == Some(board_id);
    let mut next = AppState::clone(state);
    next.remove_board(board_id);
    if was_current {
        next.set_current_board(next.board_order().first().cloned());
    }
    Arc::new(next)
}

fn update_column(
    state: &Arc<AppState>,
    board_id: &BoardId,
    column_id: &ColumnId,
    title: &str,
) -> Arc<AppState> {
    let known = state
        .board(board_id)
        .is_some_and(|board| board.column(column_id).is_some());
    if !known {
        return Arc::clone(state);
    }
    edit_board(state, board_id, |board| {
        board.set_column_title(column_id, title.to_owned());
    })
}

fn add_task(
    state: &Arc<AppState>,
    board_id: &BoardId,
    column_id: &ColumnId,
    task: &Task,
) -> Arc<AppState> {
    let known = state
        .board(board_id)
        .is_some_and(|board| board.column(column_id).is_some());
    if !known {
        return Arc::clone(state);
    }
    edit_board(state, board_id, |board| {
        board.attach_task(column_id, task.clone());
    })
}

fn update_task(
    state: &Arc<AppState>,
    board_id: &BoardId,
    task: &Task,
    clock: &impl Clock,
) -> Arc<AppState> {
    edit_board(state, board_id, |board| {
        let mut replacement = task.clone();
        replacement.touch(clock);
        board.upsert_task(replacement);
    })
}

fn delete_task(
    state: &Arc<AppState>,
    board_id: &BoardId,
    column_id: &ColumnId,
    task_id: &TaskId,
) -> Arc<AppState> {
    let known = state
        .board(board_id)
        .is_some_and(|board| board.column(column_id).is_some());
    if !known {
        return Arc::clone(state);
    }
    edit_board(state, board_id, |board| {
        board.detach_task(column_id, task_id);
    })
}

fn move_task(state: &Arc<AppState>, board_id: &BoardId, drop: &DropResult) -> Arc<AppState> {
    // A drag with no destination was cancelled.
    let Some(destination) = drop.destination() else {
        return Arc::clone(state);
    };
    let Some(board) = state.board(board_id) else {
        return Arc::clone(state);
    };

    let source = drop.source();
    if source.droppable_id() == destination.droppable_id() && source.index() == destination.index()
    {
        return Arc::clone(state);
    }
    if board.column(source.droppable_id()).is_none()
        || board.column(destination.droppable_id()).is_none()
    {
        return Arc::clone(state);
    }

    edit_board(state, board_id, |next_board| {
        next_board.relocate_task(
            drop.draggable_id(),
            source.droppable_id(),
            source.index(),
            destination.droppable_id(),
            destination.index(),
        );
    })
}

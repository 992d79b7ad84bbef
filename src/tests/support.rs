//! Shared fixtures and invariant checks for state-core tests.

use crate::domain::{AppState, Board, BoardId, Column, ColumnId, Task, TaskDraft, TaskId};
use crate::ports::{SlotResult, StateSlot};
use crate::store::{Transition, apply};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;

mockall::mock! {
    /// Scripted state slot for persistence-boundary tests.
    pub(crate) Slot {}

    impl StateSlot for Slot {
        fn load(&self) -> SlotResult<Option<AppState>>;
        fn save(&self, state: &AppState) -> SlotResult<()>;
    }
}

pub(crate) fn board_id(value: &str) -> BoardId {
    BoardId::new(value)
}

pub(crate) fn column_id(value: &str) -> ColumnId {
    ColumnId::new(value)
}

pub(crate) fn task_id(value: &str) -> TaskId {
    TaskId::new(value)
}

pub(crate) fn empty_state() -> Arc<AppState> {
    Arc::new(AppState::default())
}

pub(crate) fn sample_task(id: &str, clock: &impl Clock) -> Task {
    Task::with_id(
        TaskId::new(id),
        TaskDraft::new()
            .with_title(format!("Task {id}"))
            .with_created_by("ada"),
        None,
        clock,
    )
}

/// Board `b1` with lanes `c1 = [t1, t2]` and `c2 = []`, built through the
/// same transitions production code issues.
pub(crate) fn sample_state(clock: &impl Clock) -> Arc<AppState> {
    let board = Board::with_id(board_id("b1"), "Sprint board", "Two-lane fixture");
    let mut state = apply(&empty_state(), &Transition::AddBoard { board }, clock);
    for (id, title) in [("c1", "To Do"), ("c2", "In Progress")] {
        state = apply(
            &state,
            &Transition::AddColumn {
                board_id: board_id("b1"),
                column: Column::with_id(ColumnId::new(id), title),
            },
            clock,
        );
    }
    for id in ["t1", "t2"] {
        state = apply(
            &state,
            &Transition::AddTask {
                board_id: board_id("b1"),
                column_id: column_id("c1"),
                task: sample_task(id, clock),
            },
            clock,
        );
    }
    state
}

/// Returns a column's lane as owned ids for order assertions.
pub(crate) fn lane(state: &AppState, board: &str, column: &str) -> Vec<TaskId> {
    state
        .board(&board_id(board))
        .and_then(|b| b.column(&column_id(column)))
        .map(|c| c.task_ids().to_vec())
        .unwrap_or_default()
}

/// Asserts the referential invariants that must hold after every
/// transition: board and column orders are permutations of their map key
/// sets, and every lane entry names an existing task owned by exactly one
/// lane.
pub(crate) fn assert_consistent(state: &AppState) {
    assert_eq!(state.board_order().len(), state.boards().len());
    for id in state.board_order() {
        assert!(state.boards().contains_key(id), "boardOrder names {id} but boards does not hold it");
    }

    for board in state.boards().values() {
        assert_eq!(board.column_order().len(), board.columns().len());
        for id in board.column_order() {
            assert!(board.columns().contains_key(id), "columnOrder names {id} but columns does not hold it");
        }

        let mut referenced = BTreeSet::new();
        for column in board.columns().values() {
            for id in column.task_ids() {
                assert!(board.tasks().contains_key(id), "lane references missing task {id}");
                assert!(referenced.insert(id.clone()), "task {id} referenced by two lanes");
            }
        }
    }
}

//! Store handle tying transitions, mutation commands, and persistence
//! together.

use crate::domain::{AppState, Board, BoardId, Column, ColumnId, DomainError, Task, TaskDraft, TaskId};
use crate::ports::StateSlot;
use crate::store::{Transition, apply};
use log::{debug, warn};
use mockable::Clock;
use std::sync::Arc;

/// Titles of the columns every new board starts with.
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// The authoritative holder of application state.
///
/// Consumers receive an explicitly constructed handle rather than reaching
/// into ambient context, so misuse is unrepresentable. The handle is the
/// single writer: every transition is applied atomically and mirrored to
/// the state slot before the next one is accepted. Reads hand out the
/// current [`Arc`] snapshot; an unchanged pointer after a dispatch means
/// the request was an identity no-op.
pub struct TaskBoardStore<S, C>
where
    S: StateSlot,
    C: Clock + Send + Sync,
{
    slot: Arc<S>,
    clock: Arc<C>,
    state: Arc<AppState>,
}

impl<S, C> TaskBoardStore<S, C>
where
    S: StateSlot,
    C: Clock + Send + Sync,
{
    /// Opens the store from the slot's last-saved state.
    ///
    /// An empty slot starts from the seed state. An unreadable slot does
    /// too: the failure is logged and never propagated.
    #[must_use]
    pub fn open(slot: Arc<S>, clock: Arc<C>) -> Self {
        let state = match slot.load() {
            Ok(Some(saved)) => Arc::new(saved),
            Ok(None) => Arc::new(AppState::seed(&*clock)),
            Err(err) => {
                warn!("state slot unreadable, starting from seed data: {err}");
                Arc::new(AppState::seed(&*clock))
            }
        };
        Self { slot, clock, state }
    }

    /// Returns the current state snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Applies a transition and mirrors any resulting state to the slot.
    ///
    /// Saving is best-effort: a failure is logged and the in-memory state
    /// stays authoritative for the session. Identity no-ops skip the
    /// mirror entirely.
    pub fn dispatch(&mut self, transition: &Transition) -> Arc<AppState> {
        let next = apply(&self.state, transition, &*self.clock);
        if !Arc::ptr_eq(&next, &self.state) {
            self.state = Arc::clone(&next);
            self.mirror();
        }
        next
    }

    /// Creates a board with the three default columns and displays it.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyBoardTitle`] when the title is blank.
    pub fn create_board(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<BoardId, DomainError> {
        let board_title = title.into();
        if board_title.trim().is_empty() {
            return Err(DomainError::EmptyBoardTitle);
        }

        let mut board = Board::new(board_title, description);
        for column_title in DEFAULT_COLUMN_TITLES {
            board.insert_column(Column::new(column_title));
        }

        let board_id = board.id().clone();
        self.dispatch(&Transition::AddBoard { board });
        Ok(board_id)
    }

    /// Creates an empty column at the end of a board.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyColumnTitle`] when the title is blank.
    pub fn create_column(
        &mut self,
        board_id: &BoardId,
        title: impl Into<String>,
    ) -> Result<ColumnId, DomainError> {
        let column_title = title.into();
        if column_title.trim().is_empty() {
            return Err(DomainError::EmptyColumnTitle);
        }

        let column = Column::new(column_title);
        let column_id = column.id().clone();
        self.dispatch(&Transition::AddColumn {
            board_id: board_id.clone(),
            column,
        });
        Ok(column_id)
    }

    /// Creates a task from a draft at the end of a column's lane.
    ///
    /// Targets are not checked for existence here; a request naming an
    /// absent board or column degrades to a no-op in the store, and the
    /// returned id then names nothing.
    pub fn create_task(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        draft: TaskDraft,
    ) -> TaskId {
        let fallback_creator = self.state.first_user_id().cloned();
        let task = Task::from_draft(draft, fallback_creator.as_ref(), &*self.clock);
        let task_id = task.id().clone();
        self.dispatch(&Transition::AddTask {
            board_id: board_id.clone(),
            column_id: column_id.clone(),
            task,
        });
        task_id
    }

    fn mirror(&self) {
        match self.slot.save(&self.state) {
            Ok(()) => debug!("state mirrored to slot"),
            Err(err) => {
                warn!("state save failed, in-memory state stays authoritative: {err}");
            }
        }
    }
}

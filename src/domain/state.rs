//! Application state root and the fixed seed state.

use super::{Board, BoardId, Column, ColumnId, Priority, Task, TaskDraft, TaskId, User, UserId};
use chrono::Duration;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole application state tree.
///
/// There is exactly one instance per process. The state exclusively owns
/// all boards; `board_order` is a permutation of the board map's key set.
/// `current_board_id` is a weak reference and never implies ownership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    boards: BTreeMap<BoardId, Board>,
    board_order: Vec<BoardId>,
    current_board_id: Option<BoardId>,
    users: BTreeMap<UserId, User>,
}

impl AppState {
    /// Returns the board map.
    #[must_use]
    pub const fn boards(&self) -> &BTreeMap<BoardId, Board> {
        &self.boards
    }

    /// Returns the display order of boards.
    #[must_use]
    pub fn board_order(&self) -> &[BoardId] {
        &self.board_order
    }

    /// Returns the id of the displayed board, if any.
    #[must_use]
    pub const fn current_board_id(&self) -> Option<&BoardId> {
        self.current_board_id.as_ref()
    }

    /// Returns the user map.
    #[must_use]
    pub const fn users(&self) -> &BTreeMap<UserId, User> {
        &self.users
    }

    /// Looks up a board by id.
    #[must_use]
    pub fn board(&self, board_id: &BoardId) -> Option<&Board> {
        self.boards.get(board_id)
    }

    /// Returns the displayed board, if any.
    #[must_use]
    pub fn current_board(&self) -> Option<&Board> {
        self.current_board_id
            .as_ref()
            .and_then(|board_id| self.boards.get(board_id))
    }

    /// Iterates boards in display order.
    pub fn ordered_boards(&self) -> impl Iterator<Item = &Board> {
        self.board_order
            .iter()
            .filter_map(|board_id| self.boards.get(board_id))
    }

    /// Returns the first user id, the legacy fallback for task creators.
    #[must_use]
    pub fn first_user_id(&self) -> Option<&UserId> {
        self.users.keys().next()
    }

    pub(crate) fn set_current_board(&mut self, board_id: Option<BoardId>) {
        self.current_board_id = board_id;
    }

    /// Inserts a board and appends it to the display order.
    pub(crate) fn insert_board(&mut self, board: Board) {
        self.board_order.push(board.id().clone());
        self.boards.insert(board.id().clone(), board);
    }

    /// Removes a board; removing an absent id changes nothing.
    pub(crate) fn remove_board(&mut self, board_id: &BoardId) {
        self.boards.remove(board_id);
        self.board_order.retain(|id| id != board_id);
    }

    pub(crate) fn board_mut(&mut self, board_id: &BoardId) -> Option<&mut Board> {
        self.boards.get_mut(board_id)
    }

    /// Builds the fixed seed state: one demo board with the three default
    /// columns, three sample tasks, and two demo users.
    ///
    /// Seed task creators reference users by id string, an inconsistency
    /// inherited from the persisted layout; tasks created afterwards carry
    /// free-text names.
    #[must_use]
    pub fn seed(clock: &impl Clock) -> Self {
        let mut board = Board::with_id(
            BoardId::new("board-1"),
            "My First Board",
            "A sample board to get you started",
        );
        board.insert_column(Column::with_id(ColumnId::new("column-1"), "To Do"));
        board.insert_column(Column::with_id(ColumnId::new("column-2"), "In Progress"));
        board.insert_column(Column::with_id(ColumnId::new("column-3"), "Done"));

        board.attach_task(
            &ColumnId::new("column-1"),
            seed_task(
                "task-1",
                "Lay out the board view",
                "Sketch the lanes and card placement for the main screen.",
                Priority::High,
                7,
                clock,
            ),
        );
        board.attach_task(
            &ColumnId::new("column-1"),
            seed_task(
                "task-2",
                "Organise the project folders",
                "Split components, state, and styling into their own folders.",
                Priority::Medium,
                5,
                clock,
            ),
        );
        board.attach_task(
            &ColumnId::new("column-2"),
            seed_task(
                "task-3",
                "Draft the login screen",
                "A simple form with name and password fields.",
                Priority::Medium,
                3,
                clock,
            ),
        );

        let mut users = BTreeMap::new();
        users.insert(
            UserId::new("user-1"),
            User::new(UserId::new("user-1"), "Ada"),
        );
        users.insert(
            UserId::new("user-2"),
            User::new(UserId::new("user-2"), "Grace"),
        );

        let mut state = Self {
            users,
            ..Self::default()
        };
        state.insert_board(board);
        state.current_board_id = Some(BoardId::new("board-1"));
        state
    }
}

fn seed_task(
    id: &str,
    title: &str,
    description: &str,
    priority: Priority,
    due_in_days: i64,
    clock: &impl Clock,
) -> Task {
    let draft = TaskDraft::new()
        .with_title(title)
        .with_description(description)
        .with_priority(priority)
        .with_due_date(clock.utc() + Duration::days(due_in_days))
        .with_created_by("user-1")
        .with_assigned_to("user-2");
    Task::with_id(TaskId::new(id), draft, None, clock)
}

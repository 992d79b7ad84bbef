//! Entity model for the task board state tree.
//!
//! Boards own their columns and tasks; cross-references between entities
//! are id sequences rather than pointers, and all maps are keyed by id
//! newtypes. Entities are immutable to consumers: mutation happens only
//! through store transitions, which rebuild the containers they change.

mod board;
mod column;
mod error;
mod ids;
mod state;
mod task;
mod user;

pub use board::Board;
pub use column::Column;
pub use error::DomainError;
pub use ids::{BoardId, ColumnId, TaskId, UserId};
pub use state::AppState;
pub use task::{Priority, Task, TaskDraft};
pub use user::User;

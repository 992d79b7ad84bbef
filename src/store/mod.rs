//! The state store: transition requests and the pure function that
//! applies them.

mod drop_result;
mod reducer;
mod transition;

pub use drop_result::{DropPosition, DropReason, DropResult};
pub use reducer::apply;
pub use transition::Transition;

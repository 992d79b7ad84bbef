//! Drop-result descriptor emitted by the drag-and-drop collaborator.

use crate::domain::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A lane position named by a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPosition {
    droppable_id: ColumnId,
    index: usize,
}

impl DropPosition {
    /// Creates a position inside the named column.
    #[must_use]
    pub const fn new(droppable_id: ColumnId, index: usize) -> Self {
        Self {
            droppable_id,
            index,
        }
    }

    /// Returns the column the position lives in.
    #[must_use]
    pub const fn droppable_id(&self) -> &ColumnId {
        &self.droppable_id
    }

    /// Returns the index within the column's lane.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// How a drag gesture ended.
///
/// Recorded for completeness; cancellation is detected solely by an
/// absent destination, never by this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DropReason {
    /// The card was released over a droppable area.
    Drop,
    /// The gesture was abandoned.
    Cancel,
}

/// Terminal outcome of a drag gesture.
///
/// The gesture layer guarantees the descriptor is self-consistent: the
/// dragged id really is the id at the source position. The store does not
/// re-verify that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    draggable_id: TaskId,
    source: DropPosition,
    destination: Option<DropPosition>,
    reason: DropReason,
}

impl DropResult {
    /// Creates a completed-drop descriptor.
    #[must_use]
    pub const fn dropped(draggable_id: TaskId, source: DropPosition, destination: DropPosition) -> Self {
        Self {
            draggable_id,
            source,
            destination: Some(destination),
            reason: DropReason::Drop,
        }
    }

    /// Creates a cancelled-drag descriptor.
    #[must_use]
    pub const fn cancelled(draggable_id: TaskId, source: DropPosition) -> Self {
        Self {
            draggable_id,
            source,
            destination: None,
            reason: DropReason::Cancel,
        }
    }

    /// Returns the id of the dragged task.
    #[must_use]
    pub const fn draggable_id(&self) -> &TaskId {
        &self.draggable_id
    }

    /// Returns the position the drag started from.
    #[must_use]
    pub const fn source(&self) -> &DropPosition {
        &self.source
    }

    /// Returns the drop position, absent when the drag was cancelled.
    #[must_use]
    pub const fn destination(&self) -> Option<&DropPosition> {
        self.destination.as_ref()
    }

    /// Returns how the gesture ended.
    #[must_use]
    pub const fn reason(&self) -> DropReason {
        self.reason
    }
}

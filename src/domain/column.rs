//! Column entity: a named, ordered lane of task ids.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A lane of tasks within a board.
///
/// `task_ids` is ordered and duplicate-free; every id it holds must exist
/// in the owning board's task map. Order is significant, it is the display
/// and drag position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: ColumnId,
    title: String,
    task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column with a generated identifier.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(ColumnId::generate(), title)
    }

    /// Creates an empty column with a caller-provided identifier.
    #[must_use]
    pub fn with_id(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ordered task ids.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn push_task(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    pub(crate) fn remove_task(&mut self, task_id: &TaskId) {
        self.task_ids.retain(|id| id != task_id);
    }

    /// Removes the id at `index`; an out-of-range index removes nothing.
    pub(crate) fn remove_task_at(&mut self, index: usize) {
        if index < self.task_ids.len() {
            self.task_ids.remove(index);
        }
    }

    /// Inserts `task_id` at `index`, clamped to the end of the lane.
    pub(crate) fn insert_task_at(&mut self, index: usize, task_id: TaskId) {
        let slot = index.min(self.task_ids.len());
        self.task_ids.insert(slot, task_id);
    }
}

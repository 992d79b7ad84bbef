//! Board aggregate: columns, tasks, and their ordering.

use super::{BoardId, Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One user-visible workspace of columns and tasks.
///
/// The board exclusively owns its columns and tasks. `column_order` is a
/// permutation of the column map's key set, and every task id referenced
/// by a column exists in the task map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    id: BoardId,
    title: String,
    description: String,
    columns: BTreeMap<ColumnId, Column>,
    tasks: BTreeMap<TaskId, Task>,
    column_order: Vec<ColumnId>,
}

impl Board {
    /// Creates an empty board with a generated identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(BoardId::generate(), title, description)
    }

    /// Creates an empty board with a caller-provided identifier.
    #[must_use]
    pub fn with_id(
        id: BoardId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            columns: BTreeMap::new(),
            tasks: BTreeMap::new(),
            column_order: Vec::new(),
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> &BoardId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the column map.
    #[must_use]
    pub const fn columns(&self) -> &BTreeMap<ColumnId, Column> {
        &self.columns
    }

    /// Returns the task map.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeMap<TaskId, Task> {
        &self.tasks
    }

    /// Returns the display order of columns.
    #[must_use]
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    /// Looks up a column by id.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.get(column_id)
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Iterates columns in display order.
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|column_id| self.columns.get(column_id))
    }

    /// Returns the tasks of a column in lane order.
    ///
    /// Ids without a backing task are skipped; the store keeps that from
    /// happening, so in practice this yields one task per lane entry.
    #[must_use]
    pub fn tasks_in(&self, column_id: &ColumnId) -> Vec<&Task> {
        self.column(column_id).map_or_else(Vec::new, |column| {
            column
                .task_ids()
                .iter()
                .filter_map(|task_id| self.tasks.get(task_id))
                .collect()
        })
    }

    pub(crate) fn set_details(&mut self, title: String, description: String) {
        self.title = title;
        self.description = description;
    }

    /// Inserts a column and appends it to the display order.
    pub(crate) fn insert_column(&mut self, column: Column) {
        self.column_order.push(column.id().clone());
        self.columns.insert(column.id().clone(), column);
    }

    pub(crate) fn set_column_title(&mut self, column_id: &ColumnId, title: String) {
        if let Some(column) = self.columns.get_mut(column_id) {
            column.set_title(title);
        }
    }

    /// Removes a column; the tasks it referenced vanish with it.
    pub(crate) fn remove_column(&mut self, column_id: &ColumnId) {
        if let Some(column) = self.columns.remove(column_id) {
            for task_id in column.task_ids() {
                self.tasks.remove(task_id);
            }
        }
        self.column_order.retain(|id| id != column_id);
    }

    /// Appends a task to a column's lane and records it in the task map.
    pub(crate) fn attach_task(&mut self, column_id: &ColumnId, task: Task) {
        if let Some(column) = self.columns.get_mut(column_id) {
            column.push_task(task.id().clone());
            self.tasks.insert(task.id().clone(), task);
        }
    }

    /// Inserts or replaces a task entry without touching lane membership.
    pub(crate) fn upsert_task(&mut self, task: Task) {
        self.tasks.insert(task.id().clone(), task);
    }

    /// Removes a task id from a column's lane and the task map.
    pub(crate) fn detach_task(&mut self, column_id: &ColumnId, task_id: &TaskId) {
        if let Some(column) = self.columns.get_mut(column_id) {
            column.remove_task(task_id);
            self.tasks.remove(task_id);
        }
    }

    /// Relocates a task id between lane positions.
    ///
    /// Removal happens before insertion, so `destination_index` addresses
    /// the sequence with the moved id already gone. The task entity itself
    /// is untouched; only lane membership and order change.
    pub(crate) fn relocate_task(
        &mut self,
        task_id: &TaskId,
        source_column: &ColumnId,
        source_index: usize,
        destination_column: &ColumnId,
        destination_index: usize,
    ) {
        if source_column == destination_column {
            if let Some(column) = self.columns.get_mut(source_column) {
                column.remove_task_at(source_index);
                column.insert_task_at(destination_index, task_id.clone());
            }
            return;
        }

        if let Some(column) = self.columns.get_mut(source_column) {
            column.remove_task_at(source_index);
        }
        if let Some(column) = self.columns.get_mut(destination_column) {
            column.insert_task_at(destination_index, task_id.clone());
        }
    }
}

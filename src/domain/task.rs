//! Task entity, priority band, and the creation draft.

use super::{TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Urgency band shown on a task card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A unit of work on a board.
///
/// Tasks are owned by exactly one board and referenced by exactly one
/// column's ordered id sequence at a time. `updated_at` never precedes
/// `created_at` and is refreshed on every mutating edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
    created_by: String,
    assigned_to: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Partial user input for a new task.
///
/// Unspecified fields take defaults when the task is created: the title
/// falls back to [`Task::PLACEHOLDER_TITLE`], the priority to
/// [`Priority::Medium`], and optional fields to absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    due_date: Option<DateTime<Utc>>,
    created_by: Option<String>,
    assigned_to: Option<String>,
}

impl TaskDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the task title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority band.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the creator name.
    #[must_use]
    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }

    /// Sets the assignee name.
    #[must_use]
    pub fn with_assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }
}

impl Task {
    /// Title used when a draft supplies no title or an empty one.
    pub const PLACEHOLDER_TITLE: &'static str = "New Task";

    /// Creates a task from a draft with a generated identifier.
    ///
    /// `fallback_creator` stands in for an unset creator name; it is a
    /// legacy path, since callers always supply the creator today. When
    /// neither is present the creator degrades to an empty string.
    #[must_use]
    pub fn from_draft(draft: TaskDraft, fallback_creator: Option<&UserId>, clock: &impl Clock) -> Self {
        Self::with_id(TaskId::generate(), draft, fallback_creator, clock)
    }

    /// Creates a task from a draft with a caller-provided identifier.
    ///
    /// Used by the seed data, where identities are fixed.
    #[must_use]
    pub fn with_id(
        id: TaskId,
        draft: TaskDraft,
        fallback_creator: Option<&UserId>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        let created_by = draft
            .created_by
            .filter(|name| !name.is_empty())
            .or_else(|| fallback_creator.map(|user_id| user_id.as_str().to_owned()))
            .unwrap_or_default();

        Self {
            id,
            title: draft
                .title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| Self::PLACEHOLDER_TITLE.to_owned()),
            description: draft.description.unwrap_or_default(),
            priority: draft.priority.unwrap_or_default(),
            due_date: draft.due_date,
            created_by,
            assigned_to: draft.assigned_to,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
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

    /// Returns the priority band.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creator name.
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Returns the assignee name, if any.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-edit timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns a copy with a replaced title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns a copy with a replaced description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns a copy with a replaced priority band.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns a copy with a replaced due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Returns a copy with a replaced assignee.
    #[must_use]
    pub fn with_assigned_to(mut self, assigned_to: Option<String>) -> Self {
        self.assigned_to = assigned_to;
        self
    }

    /// Refreshes `updated_at` to the current clock time.
    pub(crate) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

//! Persistence port for the whole-state slot.

use crate::domain::AppState;
use std::sync::Arc;
use thiserror::Error;

/// Result type for slot operations.
pub type SlotResult<T> = Result<T, SlotError>;

/// Whole-state persistence contract.
///
/// One durable slot holds the entire state tree as a single payload; load
/// and save always transfer the full tree. Slot failures never reach UI
/// collaborators: the store handle logs and falls back (to seed data on
/// load, to the in-memory state on save).
pub trait StateSlot: Send + Sync {
    /// Returns the last-saved state, or `None` when the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] when the slot exists but cannot be read or
    /// decoded.
    fn load(&self) -> SlotResult<Option<AppState>>;

    /// Replaces the slot contents with the given state.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] when encoding or the underlying storage
    /// fails.
    fn save(&self, state: &AppState) -> SlotResult<()>;
}

/// Errors returned by state slot implementations.
#[derive(Debug, Error)]
pub enum SlotError {
    /// The state could not be serialized.
    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),

    /// The payload could not be parsed as a known state layout.
    #[error("failed to decode state: {0}")]
    Decode(#[source] serde_json::Error),

    /// The payload was written by a newer schema than this build knows.
    #[error("unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u32),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SlotError {
    /// Wraps a storage-layer error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

//! In-memory adapter for the state slot.

use super::codec;
use crate::domain::AppState;
use crate::ports::{SlotError, SlotResult, StateSlot};
use std::sync::{Arc, RwLock};

/// State slot held as one payload string in memory.
///
/// The payload round-trips through the same codec as durable slots, so
/// tests exercise the real encode/decode path; pre-filling a garbage
/// payload reproduces the corrupt-slot scenario.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlot {
    payload: Arc<RwLock<Option<String>>>,
}

impl InMemorySlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-filled with a raw payload.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Arc::new(RwLock::new(Some(payload.into()))),
        }
    }

    /// Returns a copy of the raw payload currently held.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Storage`] when the slot lock is poisoned.
    pub fn payload(&self) -> SlotResult<Option<String>> {
        let guard = self
            .payload
            .read()
            .map_err(|err| SlotError::storage(std::io::Error::other(err.to_string())))?;
        Ok(guard.clone())
    }
}

impl StateSlot for InMemorySlot {
    fn load(&self) -> SlotResult<Option<AppState>> {
        let guard = self
            .payload
            .read()
            .map_err(|err| SlotError::storage(std::io::Error::other(err.to_string())))?;
        guard
            .as_deref()
            .map(codec::decode)
            .transpose()
    }

    fn save(&self, state: &AppState) -> SlotResult<()> {
        let encoded = codec::encode(state)?;
        let mut guard = self
            .payload
            .write()
            .map_err(|err| SlotError::storage(std::io::Error::other(err.to_string())))?;
        *guard = Some(encoded);
        Ok(())
    }
}

//! JSON file adapter for the state slot.

use super::codec;
use crate::domain::AppState;
use crate::ports::{SlotError, SlotResult, StateSlot};
use cap_std::fs::Dir;
use std::io::ErrorKind;

/// Default file name of the persisted state slot.
pub const DEFAULT_SLOT_NAME: &str = "taskBoardState.json";

/// State slot stored as one JSON file inside a capability-scoped
/// directory.
///
/// The embedding shell decides where state lives by opening the directory
/// handle; this adapter can only ever touch its one file inside it.
#[derive(Debug)]
pub struct JsonFileSlot {
    dir: Dir,
    file_name: String,
}

impl JsonFileSlot {
    /// Creates a slot named [`DEFAULT_SLOT_NAME`] inside `dir`.
    #[must_use]
    pub fn new(dir: Dir) -> Self {
        Self::with_file_name(dir, DEFAULT_SLOT_NAME)
    }

    /// Creates a slot with a caller-chosen file name inside `dir`.
    #[must_use]
    pub fn with_file_name(dir: Dir, file_name: impl Into<String>) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
        }
    }
}

impl StateSlot for JsonFileSlot {
    fn load(&self) -> SlotResult<Option<AppState>> {
        let payload = match self.dir.read_to_string(&self.file_name) {
            Ok(payload) => payload,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SlotError::storage(err)),
        };
        codec::decode(&payload).map(Some)
    }

    fn save(&self, state: &AppState) -> SlotResult<()> {
        let payload = codec::encode(state)?;
        self.dir
            .write(&self.file_name, payload)
            .map_err(SlotError::storage)
    }
}

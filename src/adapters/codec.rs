//! Versioned JSON envelope shared by slot adapters.
//!
//! Persisted payloads carry an explicit `schemaVersion` tag so the layout
//! can evolve. Payloads written before the envelope existed are the bare
//! state tree; the decoder still accepts those. Payloads from a newer
//! schema are refused rather than guessed at.

use crate::domain::AppState;
use crate::ports::{SlotError, SlotResult};
use serde::{Deserialize, Serialize};

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodeEnvelope<'a> {
    schema_version: u32,
    state: &'a AppState,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DecodeEnvelope {
    schema_version: u32,
    state: AppState,
}

/// Serializes a state tree into the current envelope.
///
/// # Errors
///
/// Returns [`SlotError::Encode`] when serialization fails.
pub fn encode(state: &AppState) -> SlotResult<String> {
    serde_json::to_string(&EncodeEnvelope {
        schema_version: SCHEMA_VERSION,
        state,
    })
    .map_err(SlotError::Encode)
}

/// Parses a persisted payload into a state tree.
///
/// # Errors
///
/// Returns [`SlotError::Decode`] for unparseable payloads and
/// [`SlotError::UnsupportedSchemaVersion`] for payloads written by a
/// newer schema.
pub fn decode(payload: &str) -> SlotResult<AppState> {
    let value: serde_json::Value = serde_json::from_str(payload).map_err(SlotError::Decode)?;
    if value.get("schemaVersion").is_none() {
        // Pre-envelope payloads are the bare state tree.
        return serde_json::from_value(value).map_err(SlotError::Decode);
    }

    let envelope: DecodeEnvelope = serde_json::from_value(value).map_err(SlotError::Decode)?;
    if envelope.schema_version == SCHEMA_VERSION {
        Ok(envelope.state)
    } else {
        Err(SlotError::UnsupportedSchemaVersion(envelope.schema_version))
    }
}

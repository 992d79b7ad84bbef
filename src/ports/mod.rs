//! Port contracts for the state core.
//!
//! Ports define infrastructure-agnostic interfaces; the execution model
//! is single-threaded and synchronous, so they are plain traits.

pub mod state_slot;

pub use state_slot::{SlotError, SlotResult, StateSlot};

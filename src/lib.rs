//! Corkboard: reducer-driven state core for a columns/cards task board.
//!
//! This crate holds the full board/column/task state tree, applies pure
//! transition requests over it, and mirrors every effective change to a
//! local whole-state persistence slot.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: the entity model, with id-sequence cross-references
//!   instead of pointers
//! - **Store**: transition requests and the pure function applying them
//! - **Ports**: the persistence contract, infrastructure-agnostic
//! - **Adapters**: JSON file and in-memory slot implementations
//! - **Services**: the explicitly constructed store handle and its
//!   mutation commands
//!
//! Execution is single-threaded and synchronous: transitions are applied
//! atomically, never interleave, and produce a new top-level state value,
//! so consumers detect change by comparing state pointers.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod store;

#[cfg(test)]
mod tests;

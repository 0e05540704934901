//! # Groundwork Codec
//!
//! Wire-form adapters: the pieces that bind in-memory structures to
//! serialized representations.
//!
//! ## Contents
//!
//! - [`Envelope`] - a versioned, correlated wrapper for payloads that
//!   cross a process boundary
//! - [`adapters`] - `#[serde(with = ...)]` helpers for fields whose
//!   natural serde form is wrong for the wire (raw bytes, paths, maps
//!   with unstable iteration order)
//! - [`TreeDto`] - a flat `(path, value)` row list that round-trips a
//!   [`groundwork_trees::Tree`]

pub mod adapters;
pub mod envelope;
pub mod error;
pub mod tree_dto;

// Re-export main types
pub use envelope::Envelope;
pub use error::CodecError;
pub use tree_dto::{TreeDto, TreeRow};

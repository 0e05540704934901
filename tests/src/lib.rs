//! # Groundwork Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Shared builders: sample trees, bus event types
//! ├── integration/      # Cross-crate flows
//! │   ├── tree_flow.rs
//! │   └── lifecycle_flow.rs
//! └── properties.rs     # proptest invariants
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p groundwork-tests
//!
//! # By category
//! cargo test -p groundwork-tests integration::
//! cargo test -p groundwork-tests properties::
//!
//! # Benchmarks
//! cargo bench -p groundwork-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
pub mod properties;

//! # Integration Flows
//!
//! Cross-crate tests: trees riding the codec, mutations announced on the
//! bus, components managing shared infrastructure.

pub mod lifecycle_flow;
pub mod scaffold_flow;
pub mod tree_flow;

//! # Groundwork Runtime
//!
//! A component lifecycle registry: pluggable components register
//! themselves, declare what they depend on, and the registry starts them
//! in dependency order and stops them in reverse.
//!
//! ## Design
//!
//! - **Runtime registration**: components register on startup, no
//!   compile-time coupling between them
//! - **Dependency ordering**: `start_all` topologically sorts the
//!   declared dependencies; cycles are detected and rejected
//! - **Graceful degradation**: an optional component that fails to start
//!   is logged and skipped; a required one aborts startup
//! - **Health monitoring**: every component answers health probes
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut registry = ComponentRegistry::new();
//! registry.register(Box::new(Store::new()));
//! registry.register(Box::new(Api::new()));   // depends on "store"
//!
//! registry.start_all().await?;
//! // ...
//! registry.stop_all().await?;
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod component;
pub mod registry;

// Re-export main types
pub use component::{Component, ComponentError, ComponentErrorKind, ComponentStatus, DynComponent};
pub use registry::ComponentRegistry;

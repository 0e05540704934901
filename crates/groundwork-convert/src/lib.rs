//! # Groundwork Convert
//!
//! A runtime type-conversion registry. Conversions are registered as
//! closures keyed by the `(source, target)` type pair and dispatched by
//! `TypeId` - the registry is the single place that knows which
//! representation changes exist, instead of ad-hoc `From` impls scattered
//! across crates that may not own either type.
//!
//! ## Usage
//!
//! ```
//! use groundwork_convert::ConverterRegistry;
//!
//! let registry = ConverterRegistry::new();
//! registry.register(0, |port: &u16| Ok(format!("port {port}")));
//!
//! let text: String = registry.convert(&8080u16).unwrap();
//! assert_eq!(text, "port 8080");
//! ```
//!
//! Identity conversions need no registration: `convert::<T, T>` clones
//! the input. When several converters exist for one pair, the highest
//! priority wins; equal priority replaces (with a warning), mirroring
//! registry semantics elsewhere in the workspace.

pub mod registry;

// Re-export main types
pub use registry::{ConversionError, ConverterRegistry};

//! # Groundwork Quickstart
//!
//! Generates the skeleton of a new multi-crate workspace: a root
//! manifest with a shared dependency table, one library crate per
//! member, an optional CLI member, and a README. The layout mirrors the
//! conventions used across this repository, so generated projects start
//! from the same shape.
//!
//! ```no_run
//! use groundwork_quickstart::{ProjectSpec, Scaffolder};
//!
//! let spec = ProjectSpec::new("acme", ["acme-core", "acme-api"]).unwrap();
//! let created = Scaffolder::new().generate(&spec, "./acme").unwrap();
//! println!("wrote {} files", created.len());
//! ```

pub mod scaffold;
pub mod spec;

// Re-export main types
pub use scaffold::Scaffolder;
pub use spec::{ProjectSpec, ScaffoldError};

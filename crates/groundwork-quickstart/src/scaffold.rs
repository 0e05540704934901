//! # Workspace Scaffolder
//!
//! Writes the skeleton described by a [`ProjectSpec`] to disk.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::spec::{ProjectSpec, ScaffoldError};

/// Writes workspace skeletons to disk.
///
/// The scaffolder refuses to write into a non-empty target directory;
/// it never merges into or overwrites an existing project.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scaffolder;

impl Scaffolder {
    /// Create a scaffolder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate the workspace skeleton under `target_dir`.
    ///
    /// Returns the paths of all files created, in write order.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::TargetNotEmpty`] when `target_dir` exists and
    ///   contains anything
    /// - [`ScaffoldError::Io`] on filesystem failures
    pub fn generate(
        &self,
        spec: &ProjectSpec,
        target_dir: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>, ScaffoldError> {
        let target_dir = target_dir.as_ref();

        if target_dir.exists() && fs::read_dir(target_dir)?.next().is_some() {
            return Err(ScaffoldError::TargetNotEmpty(target_dir.to_path_buf()));
        }
        fs::create_dir_all(target_dir)?;

        let mut created = Vec::new();
        let mut write = |path: PathBuf, contents: String| -> Result<(), ScaffoldError> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, contents)?;
            info!(path = %path.display(), "Wrote");
            created.push(path);
            Ok(())
        };

        write(target_dir.join("Cargo.toml"), root_manifest(spec))?;
        write(target_dir.join("README.md"), readme(spec))?;

        for member in &spec.members {
            let crate_dir = target_dir.join("crates").join(member);
            write(crate_dir.join("Cargo.toml"), member_manifest(member))?;
            write(crate_dir.join("src/lib.rs"), member_lib(member))?;
        }

        if let Some(bin) = spec.bin_member() {
            let crate_dir = target_dir.join("crates").join(&bin);
            write(crate_dir.join("Cargo.toml"), bin_manifest(&bin))?;
            write(crate_dir.join("src/main.rs"), bin_main(&spec.name))?;
        }

        info!(
            workspace = spec.name.as_str(),
            files = created.len(),
            "Workspace skeleton generated"
        );
        Ok(created)
    }
}

fn root_manifest(spec: &ProjectSpec) -> String {
    let mut members = String::new();
    for member in &spec.members {
        let _ = writeln!(members, "    \"crates/{member}\",");
    }
    if let Some(bin) = spec.bin_member() {
        let _ = writeln!(members, "    \"crates/{bin}\",");
    }

    format!(
        r#"[workspace]
resolver = "2"
members = [
{members}]

[workspace.package]
version = "0.1.0"
edition = "{edition}"

[workspace.dependencies]
# Serialization
serde = {{ version = "1.0", features = ["derive"] }}

# Logging
tracing = "0.1"
tracing-subscriber = {{ version = "0.3", features = ["env-filter"] }}

# Error Handling
thiserror = "1.0"
anyhow = "1.0"
"#,
        members = members,
        edition = spec.edition,
    )
}

fn member_manifest(member: &str) -> String {
    format!(
        r#"[package]
name = "{member}"
version.workspace = true
edition.workspace = true

[dependencies]
serde.workspace = true
thiserror.workspace = true
tracing.workspace = true
"#
    )
}

fn member_lib(member: &str) -> String {
    format!(
        r#"//! # {member}

/// Placeholder so the crate builds; replace with real content.
#[must_use]
pub fn crate_name() -> &'static str {{
    "{member}"
}}

#[cfg(test)]
mod tests {{
    use super::*;

    #[test]
    fn test_crate_name() {{
        assert_eq!(crate_name(), "{member}");
    }}
}}
"#
    )
}

fn bin_manifest(bin: &str) -> String {
    format!(
        r#"[package]
name = "{bin}"
version.workspace = true
edition.workspace = true

[[bin]]
name = "{bin}"
path = "src/main.rs"

[dependencies]
anyhow.workspace = true
tracing.workspace = true
tracing-subscriber.workspace = true
"#
    )
}

fn bin_main(workspace: &str) -> String {
    format!(
        r#"//! # {workspace} CLI

use anyhow::Result;

fn main() -> Result<()> {{
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("hello from {workspace}");
    Ok(())
}}
"#
    )
}

fn readme(spec: &ProjectSpec) -> String {
    let mut out = format!("# {}\n\nGenerated workspace skeleton.\n\n## Members\n\n", spec.name);
    for member in &spec.members {
        let _ = writeln!(out, "- `crates/{member}`");
    }
    if let Some(bin) = spec.bin_member() {
        let _ = writeln!(out, "- `crates/{bin}` (binary)");
    }
    out
}

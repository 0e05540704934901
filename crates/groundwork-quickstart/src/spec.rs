//! # Project Specification
//!
//! What to generate: the workspace name, its member crates, and a few
//! knobs. Validation happens at construction, so a `ProjectSpec` in hand
//! is always scaffoldable.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from spec validation and scaffolding.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Names must be lowercase kebab-case starting with a letter.
    #[error("invalid crate name {0:?}: use lowercase kebab-case starting with a letter")]
    InvalidName(String),

    /// The same member was listed twice.
    #[error("duplicate member crate {0:?}")]
    DuplicateMember(String),

    /// A workspace needs at least one member.
    #[error("a workspace needs at least one member crate")]
    NoMembers,

    /// Refusing to scaffold over existing files.
    #[error("target directory {0:?} exists and is not empty")]
    TargetNotEmpty(PathBuf),

    /// Filesystem failure while writing the skeleton.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validated description of the workspace to generate.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    /// Workspace name, also used as the README title.
    pub name: String,
    /// Library member crate names.
    pub members: Vec<String>,
    /// Also generate a `<name>-cli` binary member.
    pub with_bin: bool,
    /// Rust edition for every generated manifest.
    pub edition: String,
}

impl ProjectSpec {
    /// Default Rust edition for generated crates.
    pub const DEFAULT_EDITION: &'static str = "2021";

    /// Create a spec for `name` with the given member crates.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::InvalidName`] for a malformed workspace or
    ///   member name
    /// - [`ScaffoldError::DuplicateMember`] when a member repeats
    /// - [`ScaffoldError::NoMembers`] when `members` is empty
    pub fn new<I, S>(name: &str, members: I) -> Result<Self, ScaffoldError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        validate_name(name)?;

        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        if members.is_empty() {
            return Err(ScaffoldError::NoMembers);
        }
        for (position, member) in members.iter().enumerate() {
            validate_name(member)?;
            if members[..position].contains(member) {
                return Err(ScaffoldError::DuplicateMember(member.clone()));
            }
        }

        Ok(Self {
            name: name.to_string(),
            members,
            with_bin: false,
            edition: Self::DEFAULT_EDITION.to_string(),
        })
    }

    /// Also generate a `<name>-cli` binary member.
    #[must_use]
    pub fn with_bin(mut self) -> Self {
        self.with_bin = true;
        self
    }

    /// Override the Rust edition.
    #[must_use]
    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = edition.into();
        self
    }

    /// Name of the binary member, when enabled.
    #[must_use]
    pub fn bin_member(&self) -> Option<String> {
        self.with_bin.then(|| format!("{}-cli", self.name))
    }
}

/// Check a crate name: lowercase kebab-case, starting with a letter,
/// no leading/trailing/double dashes.
fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    let well_formed = !name.is_empty()
        && name.chars().next().is_some_and(|c| c.is_ascii_lowercase())
        && !name.ends_with('-')
        && !name.contains("--")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if well_formed {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName(name.to_string()))
    }
}

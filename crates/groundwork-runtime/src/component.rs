//! # Component Contract
//!
//! The trait every pluggable component implements to participate in
//! lifecycle management.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Error type for component operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentError {
    /// Name of the component that encountered the error.
    pub component: String,
    /// Error kind.
    pub kind: ComponentErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl ComponentError {
    /// Create a new component error.
    pub fn new(
        component: impl Into<String>,
        kind: ComponentErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.component, self.kind, self.message)
    }
}

impl std::error::Error for ComponentError {}

/// Categories of component errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentErrorKind {
    /// Component failed to start.
    StartFailed,
    /// Component failed to shut down gracefully.
    StopFailed,
    /// A declared dependency is not registered or not healthy.
    MissingDependency,
    /// The declared dependencies contain a cycle.
    DependencyCycle,
}

impl fmt::Display for ComponentErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartFailed => write!(f, "StartFailed"),
            Self::StopFailed => write!(f, "StopFailed"),
            Self::MissingDependency => write!(f, "MissingDependency"),
            Self::DependencyCycle => write!(f, "DependencyCycle"),
        }
    }
}

/// Lifecycle state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentStatus {
    /// Component is not running.
    Stopped,
    /// Component is starting up.
    Starting,
    /// Component is running normally.
    Healthy,
    /// Component is running but degraded.
    Degraded,
    /// Component is shutting down.
    ShuttingDown,
    /// Component encountered an error.
    Error,
}

/// Contract for pluggable components managed by the registry.
#[async_trait]
pub trait Component: Send + Sync {
    /// Unique component name. Doubles as the dependency key.
    fn name(&self) -> &'static str;

    /// Names of components that must be started before this one.
    fn dependencies(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Optional components may fail to start without aborting the whole
    /// registry startup.
    fn optional(&self) -> bool {
        false
    }

    /// Start the component.
    async fn start(&self) -> Result<(), ComponentError>;

    /// Stop the component.
    async fn stop(&self) -> Result<(), ComponentError>;

    /// Probe the component's health.
    async fn health(&self) -> ComponentStatus {
        ComponentStatus::Healthy
    }
}

/// Boxed component, as stored by the registry.
pub type DynComponent = Box<dyn Component>;

//! # Component Registry
//!
//! Registration, dependency resolution and lifecycle management for
//! pluggable components.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::component::{
    Component, ComponentError, ComponentErrorKind, ComponentStatus, DynComponent,
};

/// Entry for a registered component.
struct Entry {
    /// The component instance.
    component: Arc<dyn Component>,
    /// Current status.
    status: ComponentStatus,
    /// Cached dependency names.
    dependencies: Vec<&'static str>,
    /// Cached optionality flag.
    optional: bool,
}

/// Central registry for all components.
///
/// Manages the lifecycle of pluggable components: start in dependency
/// order, stop in reverse, report health.
#[derive(Default)]
pub struct ComponentRegistry {
    /// Registered components by name.
    components: HashMap<String, Entry>,
    /// Order used by the last successful `start_all`.
    start_order: Vec<String>,
}

impl ComponentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component.
    ///
    /// The component is started later, when `start_all` is called.
    /// Registering a name twice replaces the earlier component.
    pub fn register(&mut self, component: DynComponent) {
        let name = component.name();
        info!(component = name, "Registering component");

        if self.components.contains_key(name) {
            warn!(component = name, "Component already registered, replacing");
        }

        let entry = Entry {
            dependencies: component.dependencies(),
            optional: component.optional(),
            component: Arc::from(component),
            status: ComponentStatus::Stopped,
        };
        self.components.insert(name.to_string(), entry);
    }

    /// Check whether a component is registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Current status of a component.
    #[must_use]
    pub fn status(&self, name: &str) -> Option<ComponentStatus> {
        self.components.get(name).map(|entry| entry.status)
    }

    /// Names of all registered components.
    #[must_use]
    pub fn registered_names(&self) -> Vec<String> {
        self.components.keys().cloned().collect()
    }

    /// Number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// `true` when no component is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Start all registered components in dependency order.
    ///
    /// A required component aborts startup when it fails to start or has
    /// an unmet dependency; an optional one is logged and skipped.
    ///
    /// # Errors
    ///
    /// - [`ComponentErrorKind::DependencyCycle`] when the declared
    ///   dependencies are circular
    /// - [`ComponentErrorKind::MissingDependency`] when a required
    ///   component depends on something unregistered or unhealthy
    /// - [`ComponentErrorKind::StartFailed`] when a required component's
    ///   `start` fails
    pub async fn start_all(&mut self) -> Result<(), ComponentError> {
        let order = self.compute_start_order()?;
        info!(count = order.len(), "Starting components in dependency order");

        for name in &order {
            let Some(entry) = self.components.get(name) else {
                continue;
            };
            let component = Arc::clone(&entry.component);
            let optional = entry.optional;
            let dependencies = entry.dependencies.clone();

            // All dependencies must have come up before this component.
            let unmet = dependencies.iter().find(|dep| {
                self.components
                    .get(**dep)
                    .map(|e| e.status != ComponentStatus::Healthy)
                    .unwrap_or(true)
            });
            if let Some(dep) = unmet {
                if optional {
                    warn!(
                        component = name.as_str(),
                        dependency = dep,
                        "Optional component skipped: unmet dependency"
                    );
                    continue;
                }
                return Err(ComponentError::new(
                    name.clone(),
                    ComponentErrorKind::MissingDependency,
                    format!("dependency {dep} is not registered or not healthy"),
                ));
            }

            self.set_status(name, ComponentStatus::Starting);
            info!(component = name.as_str(), "Starting component");

            if let Err(e) = component.start().await {
                self.set_status(name, ComponentStatus::Error);
                // Required components fail hard, optional ones just warn
                if !optional {
                    error!(component = name.as_str(), error = %e, "Required component failed to start");
                    return Err(e);
                }
                warn!(component = name.as_str(), error = %e, "Optional component failed to start");
                continue;
            }

            self.set_status(name, ComponentStatus::Healthy);
            info!(component = name.as_str(), "Component started");
        }

        self.start_order = order;
        info!("All components started");
        Ok(())
    }

    /// Stop all running components in reverse start order.
    ///
    /// Stop failures are logged and do not halt the sweep.
    pub async fn stop_all(&mut self) {
        info!("Stopping all components");

        for name in self.start_order.clone().iter().rev() {
            let Some(entry) = self.components.get(name) else {
                continue;
            };
            if entry.status != ComponentStatus::Healthy
                && entry.status != ComponentStatus::Degraded
            {
                continue;
            }
            let component = Arc::clone(&entry.component);

            self.set_status(name, ComponentStatus::ShuttingDown);
            info!(component = name.as_str(), "Stopping component");

            match component.stop().await {
                Ok(()) => {
                    self.set_status(name, ComponentStatus::Stopped);
                    info!(component = name.as_str(), "Component stopped");
                }
                Err(e) => {
                    self.set_status(name, ComponentStatus::Error);
                    error!(component = name.as_str(), error = %e, "Component failed to stop cleanly");
                    // Continue stopping others
                }
            }
        }

        info!("All components stopped");
    }

    /// Probe every component's health.
    pub async fn health_all(&self) -> HashMap<String, ComponentStatus> {
        let mut results = HashMap::new();
        for (name, entry) in &self.components {
            let status = if entry.status == ComponentStatus::Healthy
                || entry.status == ComponentStatus::Degraded
            {
                entry.component.health().await
            } else {
                entry.status
            };
            results.insert(name.clone(), status);
        }
        results
    }

    fn set_status(&mut self, name: &str, status: ComponentStatus) {
        if let Some(entry) = self.components.get_mut(name) {
            entry.status = status;
        }
    }

    /// Topological sort over the declared dependencies.
    fn compute_start_order(&self) -> Result<Vec<String>, ComponentError> {
        enum Mark {
            Visiting,
            Done,
        }

        fn visit(
            name: &str,
            components: &HashMap<String, Entry>,
            marks: &mut HashMap<String, Mark>,
            order: &mut Vec<String>,
        ) -> Result<(), ComponentError> {
            match marks.get(name) {
                Some(Mark::Done) => return Ok(()),
                Some(Mark::Visiting) => {
                    return Err(ComponentError::new(
                        name,
                        ComponentErrorKind::DependencyCycle,
                        "component participates in a dependency cycle",
                    ));
                }
                None => {}
            }
            marks.insert(name.to_string(), Mark::Visiting);

            if let Some(entry) = components.get(name) {
                for dep in &entry.dependencies {
                    visit(dep, components, marks, order)?;
                }
            }

            marks.insert(name.to_string(), Mark::Done);
            order.push(name.to_string());
            Ok(())
        }

        let mut order = Vec::new();
        let mut marks = HashMap::new();
        // Deterministic iteration keeps log output and error attribution
        // stable across runs.
        let mut names: Vec<&String> = self.components.keys().collect();
        names.sort();
        for name in names {
            visit(name, &self.components, &mut marks, &mut order)?;
        }
        // Unregistered dependency names end up in the order; drop them
        // here so start_all only sees real components.
        order.retain(|name| self.components.contains_key(name));
        Ok(order)
    }
}

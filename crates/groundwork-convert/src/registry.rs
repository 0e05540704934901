//! # Converter Registry
//!
//! Registration and `TypeId`-keyed dispatch of conversion closures.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from conversion operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// No converter is registered for the type pair.
    #[error("no converter registered from {from} to {to}")]
    NoConverter {
        /// Source type name.
        from: &'static str,
        /// Target type name.
        to: &'static str,
    },

    /// A registered converter rejected the input.
    #[error("conversion from {from} to {to} failed: {reason}")]
    Failed {
        /// Source type name.
        from: &'static str,
        /// Target type name.
        to: &'static str,
        /// What the converter reported.
        reason: String,
    },
}

impl ConversionError {
    /// Convenience constructor for converter bodies.
    #[must_use]
    pub fn failed<S, T>(reason: impl Into<String>) -> Self {
        Self::Failed {
            from: type_name::<S>(),
            to: type_name::<T>(),
            reason: reason.into(),
        }
    }
}

type ConverterFn = Box<dyn Fn(&dyn Any) -> Result<Box<dyn Any>, ConversionError> + Send + Sync>;

/// A registered converter and its priority.
struct Entry {
    priority: i32,
    convert: ConverterFn,
}

/// Central registry of runtime type conversions.
///
/// Keyed by the `(source, target)` `TypeId` pair. Thread-safe: interior
/// locking makes a shared `Arc<ConverterRegistry>` usable from any
/// thread.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: RwLock<HashMap<(TypeId, TypeId), Vec<Entry>>>,
}

impl ConverterRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a conversion from `S` to `T`.
    ///
    /// The highest-priority converter for a pair wins at dispatch.
    /// Registering at an already-taken priority replaces that converter
    /// (logged as a warning); distinct priorities coexist.
    pub fn register<S, T, F>(&self, priority: i32, f: F)
    where
        S: Any,
        T: Any,
        F: Fn(&S) -> Result<T, ConversionError> + Send + Sync + 'static,
    {
        let key = (TypeId::of::<S>(), TypeId::of::<T>());
        let boxed: ConverterFn = Box::new(move |input: &dyn Any| {
            let source = input.downcast_ref::<S>().ok_or_else(|| {
                ConversionError::failed::<S, T>("registry dispatched a mismatched source type")
            })?;
            f(source).map(|value| Box::new(value) as Box<dyn Any>)
        });

        let mut converters = self.converters.write();
        let entries = converters.entry(key).or_default();

        if entries.iter().any(|entry| entry.priority == priority) {
            warn!(
                from = type_name::<S>(),
                to = type_name::<T>(),
                priority,
                "Converter already registered at this priority, replacing"
            );
            entries.retain(|entry| entry.priority != priority);
        }

        debug!(
            from = type_name::<S>(),
            to = type_name::<T>(),
            priority,
            "Converter registered"
        );
        entries.push(Entry {
            priority,
            convert: boxed,
        });
        // Highest priority first.
        entries.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Convert a value to type `T`.
    ///
    /// Dispatches to the highest-priority registered converter for
    /// `(S, T)`. When none exists and `S` and `T` are the same type, the
    /// input is cloned (identity conversion).
    ///
    /// # Errors
    ///
    /// - [`ConversionError::NoConverter`] when the pair is unknown
    /// - [`ConversionError::Failed`] when the chosen converter rejects
    ///   the input
    pub fn convert<S, T>(&self, value: &S) -> Result<T, ConversionError>
    where
        S: Any,
        T: Any + Clone,
    {
        let key = (TypeId::of::<S>(), TypeId::of::<T>());

        {
            let converters = self.converters.read();
            if let Some(entry) = converters.get(&key).and_then(|entries| entries.first()) {
                let produced = (entry.convert)(value)?;
                return produced.downcast::<T>().map(|boxed| *boxed).map_err(|_| {
                    ConversionError::failed::<S, T>("converter produced an unexpected type")
                });
            }
        }

        // Identity: same type on both sides needs no registration.
        if let Some(same) = (value as &dyn Any).downcast_ref::<T>() {
            return Ok(same.clone());
        }

        Err(ConversionError::NoConverter {
            from: type_name::<S>(),
            to: type_name::<T>(),
        })
    }

    /// `true` when [`ConverterRegistry::convert`] can map `S` to `T`.
    #[must_use]
    pub fn can_convert<S: Any, T: Any>(&self) -> bool {
        let key = (TypeId::of::<S>(), TypeId::of::<T>());
        TypeId::of::<S>() == TypeId::of::<T>() || self.converters.read().contains_key(&key)
    }

    /// Total number of registered converters across all pairs.
    #[must_use]
    pub fn converter_count(&self) -> usize {
        self.converters.read().values().map(Vec::len).sum()
    }
}

//! # Bus Events and Filters
//!
//! An event type declares its topic through [`BusEvent`]; subscribers
//! select events with a [`TopicFilter`].

use std::fmt::Debug;
use std::hash::Hash;

/// An event that can ride the bus.
///
/// Events are cloned once per subscriber, so keep them cheap to clone
/// (or wrap large payloads in `Arc`).
pub trait BusEvent: Clone + Send + 'static {
    /// Topic key used for subscription filtering.
    type Topic: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// The topic this event belongs to.
    fn topic(&self) -> Self::Topic;
}

/// Filter for subscribing to specific topics.
///
/// An empty topic list matches every event.
#[derive(Debug, Clone)]
pub struct TopicFilter<T> {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<T>,
}

impl<T> Default for TopicFilter<T> {
    fn default() -> Self {
        Self { topics: Vec::new() }
    }
}

impl<T: Eq> TopicFilter<T> {
    /// A filter that accepts every event.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter for the given topics only.
    #[must_use]
    pub fn topics(topics: Vec<T>) -> Self {
        Self { topics }
    }

    /// Check whether an event topic matches this filter.
    #[must_use]
    pub fn matches(&self, topic: &T) -> bool {
        self.topics.is_empty() || self.topics.contains(topic)
    }
}

//! # Groundwork Bus
//!
//! A thin in-process event bus: multi-producer, multi-consumer
//! publish/subscribe with topic filtering, wrapped around
//! `tokio::sync::broadcast`.
//!
//! ## Shape
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │  Producer A  │                    │  Consumer B  │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! Any `Clone + Send` type can ride the bus; it only has to name its
//! topic via [`BusEvent`]. Subscribers pick a [`TopicFilter`] and receive
//! matching events through a [`Subscription`] handle or a
//! [`EventStream`].
//!
//! Publishing to a bus with no subscribers is not an error - the event is
//! dropped and logged.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod bus;
pub mod event;
pub mod subscriber;

// Re-export main types
pub use bus::{EventBus, EventPublisher};
pub use event::{BusEvent, TopicFilter};
pub use subscriber::{EventStream, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before backpressure.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;

//! # Payload Envelope
//!
//! The wrapper for payloads crossing a process boundary. Every envelope
//! carries a protocol version, a correlation id for matching
//! request/response pairs, and the production timestamp.
//!
//! Consumers check the version in [`Envelope::open`] before touching the
//! payload; an unsupported version is an error, never a panic.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CodecError;

/// Versioned, correlated wrapper for a serializable payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Protocol version. Checked by [`Envelope::open`] before the payload
    /// is handed out.
    pub version: u16,

    /// Unique identifier for correlating request/response pairs.
    pub correlation_id: Uuid,

    /// Unix timestamp (seconds) when the envelope was sealed.
    pub produced_at: u64,

    /// The wrapped payload.
    pub payload: T,
}

impl<T> Envelope<T> {
    /// Current protocol version.
    pub const CURRENT_VERSION: u16 = 1;

    /// Seal a payload into a new envelope with a fresh correlation id.
    #[must_use]
    pub fn seal(payload: T) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            correlation_id: Uuid::new_v4(),
            produced_at: current_timestamp(),
            payload,
        }
    }

    /// Seal a response payload, reusing the correlation id of the request
    /// it answers.
    #[must_use]
    pub fn seal_reply(payload: T, correlation_id: Uuid) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            correlation_id,
            produced_at: current_timestamp(),
            payload,
        }
    }

    /// Validate the version and return the payload.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnsupportedVersion`] when the envelope was sealed
    /// under a version this build does not understand.
    pub fn open(self) -> Result<T, CodecError> {
        if self.version != Self::CURRENT_VERSION {
            return Err(CodecError::UnsupportedVersion {
                found: self.version,
                supported: Self::CURRENT_VERSION,
            });
        }
        Ok(self.payload)
    }
}

/// Current Unix timestamp in seconds.
fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

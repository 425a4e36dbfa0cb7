//! Translation of configuration structs into S3 wire requests
//!
//! Each operation gets one method on [`RequestBuilder`], defined next to the
//! configuration struct it consumes. Builders never perform I/O. Bucket names
//! and object keys are always copied onto the request as given; every other
//! field goes through the builder's [`Presence`] policy.

use crate::presence::Presence;

/// Default page size for object listings when the caller sets none
pub const DEFAULT_MAX_KEYS: i32 = 1000;

/// Builds wire requests under a single presence policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestBuilder {
    presence: Presence,
}

impl RequestBuilder {
    /// Creates a builder applying the given presence policy
    #[must_use]
    pub const fn new(presence: Presence) -> Self {
        Self { presence }
    }

    /// The presence policy applied to optional fields
    #[must_use]
    pub const fn presence(&self) -> Presence {
        self.presence
    }
}

//! Field presence rules shared by every request builder
//!
//! A configuration field is either absent (`None`) or carries a value. The
//! [`Presence`] policy decides whether a value equal to its type's zero
//! (empty string, `false`, `0`, the Unix epoch) still counts as present.

use aws_sdk_s3::primitives::DateTime as WireDateTime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Values that have a zero/empty state meaning "not specified"
pub trait Blank {
    /// Returns `true` when the value is its type's zero value
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

macro_rules! impl_blank_for_integers {
    ($($ty:ty),*) => {
        $(
            impl Blank for $ty {
                fn is_blank(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_blank_for_integers!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

#[allow(clippy::float_cmp)]
impl Blank for f32 {
    fn is_blank(&self) -> bool {
        *self == 0.0
    }
}

#[allow(clippy::float_cmp)]
impl Blank for f64 {
    fn is_blank(&self) -> bool {
        *self == 0.0
    }
}

impl Blank for DateTime<Utc> {
    fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Returns the value when it is not blank, `None` otherwise
#[must_use]
pub fn present<T: Blank>(value: T) -> Option<T> {
    if value.is_blank() {
        None
    } else {
        Some(value)
    }
}

/// Converts a caller timestamp into the SDK's timestamp, keeping the instant
///
/// A leap second (sub-second nanos of one billion or more in chrono) is folded
/// into the start of the next second.
#[must_use]
pub fn wire_time(instant: DateTime<Utc>) -> WireDateTime {
    let secs = instant.timestamp();
    let nanos = instant.timestamp_subsec_nanos();

    if nanos >= NANOS_PER_SECOND {
        WireDateTime::from_secs_and_nanos(secs + 1, nanos - NANOS_PER_SECOND)
    } else {
        WireDateTime::from_secs_and_nanos(secs, nanos)
    }
}

/// How set-but-zero configuration values are treated
///
/// `Explicit` sends whatever the caller set, so `Some(false)` or `Some(0)`
/// reach the service. `OmitBlank` drops zero values even when set, which lets
/// callers treat `Some(String::new())` the same as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Every `Some` value is sent
    #[default]
    Explicit,
    /// Zero values are omitted even when set
    OmitBlank,
}

impl Presence {
    /// Applies the policy to an optional value
    #[must_use]
    pub fn keep<T: Blank>(self, value: Option<T>) -> Option<T> {
        match self {
            Self::Explicit => value,
            Self::OmitBlank => value.and_then(present),
        }
    }

    /// Applies the policy to a borrowed string field
    #[must_use]
    pub fn string(self, value: Option<&String>) -> Option<String> {
        self.keep(value.cloned())
    }

    /// Applies the policy to a string field and parses it into a protocol enum
    #[must_use]
    pub fn enumerated<E>(self, value: Option<&String>) -> Option<E>
    where
        E: for<'a> From<&'a str>,
    {
        self.string(value).map(|s| E::from(s.as_str()))
    }

    /// Applies the policy to a timestamp field and converts it for the wire
    #[must_use]
    pub fn instant(self, value: Option<DateTime<Utc>>) -> Option<WireDateTime> {
        self.keep(value).map(wire_time)
    }
}

/// A presence policy name that is neither `explicit` nor `omit_blank`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown presence policy: {0}")]
pub struct UnknownPresence(pub String);

impl std::str::FromStr for Presence {
    type Err = UnknownPresence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "explicit" => Ok(Self::Explicit),
            "omit_blank" | "omit-blank" => Ok(Self::OmitBlank),
            other => Err(UnknownPresence(other.to_string())),
        }
    }
}

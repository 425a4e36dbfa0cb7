//! Bucket and object facades over the AWS S3 SDK
//!
//! Callers describe an operation with a plain configuration struct whose
//! fields are all optional. Request builders translate it into the SDK's
//! wire request, setting only the fields that are present, and the facades
//! forward that request to a [`StorageClient`].
//!
//! ```no_run
//! use sthree::{objects::Get, Sthree};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let sthree = Sthree::from_env().await?;
//! let config = Get {
//!     if_match: Some("etag-123".to_string()),
//!     ..Get::default()
//! };
//! let object = sthree.objects("photos").get("img.png", Some(&config)).await?;
//! # let _ = object;
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Per-bucket configuration such as CORS
pub mod bucket;

/// Creating, deleting and listing buckets
pub mod buckets;

/// Object body helpers
pub mod body;

/// Root client
pub mod client;

/// Client configuration
pub mod config;

/// Get, put, upload, delete and list objects
pub mod objects;

/// Field presence rules
pub mod presence;

/// Wire request builders
pub mod request;

/// Presigned object requests
pub mod requests;

/// The storage client seam and its test double
pub mod storage;

pub use client::Sthree;
pub use config::{ClientConfig, ConfigError};
pub use presence::Presence;
pub use request::RequestBuilder;
pub use storage::StorageClient;

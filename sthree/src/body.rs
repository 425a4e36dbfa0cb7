//! Helpers for building object bodies

use aws_sdk_s3::primitives::ByteStream;
use serde::Serialize;
use thiserror::Error;

/// Result type for body encoding
pub type BodyResult<T> = Result<T, BodyError>;

/// Errors that can occur while encoding an object body
#[derive(Error, Debug)]
pub enum BodyError {
    /// Value could not be serialized as JSON
    #[error("Failed to encode JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes `value` as a JSON object body
///
/// Pair with `content_type: Some("application/json".into())` on the put
/// configuration; the body itself carries no content type.
///
/// # Errors
///
/// Returns [`BodyError::Json`] if `value` cannot be serialized
pub fn json<T: Serialize + ?Sized>(value: &T) -> BodyResult<ByteStream> {
    let bytes = serde_json::to_vec(value)?;
    Ok(ByteStream::from(bytes))
}

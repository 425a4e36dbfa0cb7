//! Error types for presigned requests

use aws_sdk_s3::{
    error::SdkError,
    operation::{
        delete_object::DeleteObjectError, get_object::GetObjectError, put_object::PutObjectError,
    },
    presigning::PresigningConfigError,
};
use thiserror::Error;

/// Result type for presigning operations
pub type PresignResult<T> = Result<T, PresignError>;

/// Errors that can occur while presigning a request
#[derive(Error, Debug)]
pub enum PresignError {
    /// Expiry is longer than one week
    #[error("Invalid presigning expiry: {0}")]
    InvalidExpiry(#[from] PresigningConfigError),

    /// Presigning a `GetObject` request failed
    #[error("Failed to presign GetObject: {0}")]
    GetObject(#[from] SdkError<GetObjectError>),

    /// Presigning a `PutObject` request failed
    #[error("Failed to presign PutObject: {0}")]
    PutObject(#[from] SdkError<PutObjectError>),

    /// Presigning a `DeleteObject` request failed
    #[error("Failed to presign DeleteObject: {0}")]
    DeleteObject(#[from] SdkError<DeleteObjectError>),
}

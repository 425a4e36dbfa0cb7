//! Presigned object requests
//!
//! Presigned requests are built by the same request builders as the direct
//! object operations, so a presigned get carries exactly the fields a direct
//! get with the same configuration would.

mod error;

use std::{sync::Arc, time::Duration};

use aws_sdk_s3::{
    presigning::{PresignedRequest, PresigningConfig},
    primitives::ByteStream,
};
use tracing::debug;

pub use error::{PresignError, PresignResult};

use crate::{
    objects::{Delete, Get, Put},
    request::RequestBuilder,
    storage::StorageClient,
};

/// Facade producing presigned requests for objects of one bucket
#[derive(Clone)]
pub struct Requests {
    client: Arc<dyn StorageClient>,
    requests: RequestBuilder,
    bucket: String,
}

impl Requests {
    /// Creates a presigning facade scoped to `bucket`
    #[must_use]
    pub fn new(client: Arc<dyn StorageClient>, requests: RequestBuilder, bucket: String) -> Self {
        Self {
            client,
            requests,
            bucket,
        }
    }

    /// The bucket this facade is scoped to
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Presigns a get-object request valid for `expires_in`
    ///
    /// # Errors
    ///
    /// Returns [`PresignError::InvalidExpiry`] if `expires_in` exceeds one week,
    /// or the SDK's error if signing fails
    pub async fn presign_get(
        &self,
        key: &str,
        expires_in: Duration,
        config: Option<&Get>,
    ) -> PresignResult<PresignedRequest> {
        debug!(
            "Presigning get for object: {}/{} expires in {:?}",
            self.bucket, key, expires_in
        );

        let presigning = PresigningConfig::expires_in(expires_in)?;
        let input = self.requests.get_object(&self.bucket, key, config);
        Ok(self.client.presign_get_object(input, presigning).await?)
    }

    /// Presigns a put-object request valid for `expires_in`
    ///
    /// The body is left empty; whoever uses the URL uploads it.
    ///
    /// # Errors
    ///
    /// Returns [`PresignError::InvalidExpiry`] if `expires_in` exceeds one week,
    /// or the SDK's error if signing fails
    pub async fn presign_put(
        &self,
        key: &str,
        expires_in: Duration,
        config: Option<&Put>,
    ) -> PresignResult<PresignedRequest> {
        debug!(
            "Presigning put for object: {}/{} expires in {:?}",
            self.bucket, key, expires_in
        );

        let presigning = PresigningConfig::expires_in(expires_in)?;
        let input = self
            .requests
            .put_object(&self.bucket, key, ByteStream::default(), config);
        Ok(self.client.presign_put_object(input, presigning).await?)
    }

    /// Presigns a delete-object request valid for `expires_in`
    ///
    /// # Errors
    ///
    /// Returns [`PresignError::InvalidExpiry`] if `expires_in` exceeds one week,
    /// or the SDK's error if signing fails
    pub async fn presign_delete(
        &self,
        key: &str,
        expires_in: Duration,
        config: Option<&Delete>,
    ) -> PresignResult<PresignedRequest> {
        debug!(
            "Presigning delete for object: {}/{} expires in {:?}",
            self.bucket, key, expires_in
        );

        let presigning = PresigningConfig::expires_in(expires_in)?;
        let input = self.requests.delete_object(&self.bucket, key, config);
        Ok(self.client.presign_delete_object(input, presigning).await?)
    }
}

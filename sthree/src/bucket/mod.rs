//! Operations on a single bucket's own configuration

mod cors;

use std::sync::Arc;

use aws_sdk_s3::{
    error::SdkError,
    operation::put_bucket_cors::{PutBucketCorsError, PutBucketCorsOutput},
};
use tracing::debug;

pub use cors::{Cors, CorsRule};

use crate::{objects::Objects, request::RequestBuilder, storage::StorageClient};

/// Facade scoped to one bucket
#[derive(Clone)]
pub struct Bucket {
    client: Arc<dyn StorageClient>,
    requests: RequestBuilder,
    name: String,
}

impl Bucket {
    /// Creates a facade for the bucket `name`
    #[must_use]
    pub fn new(client: Arc<dyn StorageClient>, requests: RequestBuilder, name: String) -> Self {
        Self {
            client,
            requests,
            name,
        }
    }

    /// The bucket this facade is scoped to
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Object operations inside this bucket
    #[must_use]
    pub fn objects(&self) -> Objects {
        Objects::new(Arc::clone(&self.client), self.requests, self.name.clone())
    }

    /// Replaces the bucket's CORS configuration
    ///
    /// # Errors
    ///
    /// Returns the SDK error from `PutBucketCors` unchanged
    pub async fn set_cors(
        &self,
        config: &Cors,
    ) -> Result<PutBucketCorsOutput, SdkError<PutBucketCorsError>> {
        debug!(
            "Setting {} CORS rules on bucket: {}",
            config.rules.len(),
            self.name
        );

        let input = match self.requests.put_bucket_cors(&self.name, config) {
            Ok(input) => input,
            Err(err) => return Err(SdkError::construction_failure(err)),
        };
        self.client.put_bucket_cors(input).await
    }
}

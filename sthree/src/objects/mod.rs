//! Object operations inside one bucket

mod delete;
mod get;
mod list;
mod put;

use std::sync::Arc;

use aws_sdk_s3::{
    error::SdkError,
    operation::{
        delete_object::{DeleteObjectError, DeleteObjectOutput},
        get_object::{GetObjectError, GetObjectOutput},
        list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output},
        put_object::{PutObjectError, PutObjectOutput},
    },
    primitives::ByteStream,
};
use tracing::debug;

pub use delete::Delete;
pub use get::Get;
pub use list::List;
pub use put::{ObjectDetails, Put, Upload};

use crate::{request::RequestBuilder, storage::StorageClient};

/// Facade over the objects of a single bucket
#[derive(Clone)]
pub struct Objects {
    client: Arc<dyn StorageClient>,
    requests: RequestBuilder,
    bucket: String,
}

impl Objects {
    /// Creates an object facade scoped to `bucket`
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

    /// Fetches the object at `key`
    ///
    /// # Errors
    ///
    /// Returns the SDK error from `GetObject` unchanged
    pub async fn get(
        &self,
        key: &str,
        config: Option<&Get>,
    ) -> Result<GetObjectOutput, SdkError<GetObjectError>> {
        debug!("Getting object: {}/{}", self.bucket, key);

        let input = self.requests.get_object(&self.bucket, key, config);
        self.client.get_object(input).await
    }

    /// Stores `body` at `key` in a single request
    ///
    /// # Errors
    ///
    /// Returns the SDK error from `PutObject` unchanged
    pub async fn put(
        &self,
        key: &str,
        body: ByteStream,
        config: Option<&Put>,
    ) -> Result<PutObjectOutput, SdkError<PutObjectError>> {
        debug!("Putting object: {}/{}", self.bucket, key);

        let input = self.requests.put_object(&self.bucket, key, body, config);
        self.client.put_object(input).await
    }

    /// Uploads `body` to `key` through the client's upload path
    ///
    /// # Errors
    ///
    /// Returns the SDK error from the upload unchanged
    pub async fn upload(
        &self,
        key: &str,
        body: ByteStream,
        config: Option<&Upload>,
    ) -> Result<PutObjectOutput, SdkError<PutObjectError>> {
        debug!("Uploading object: {}/{}", self.bucket, key);

        let input = self.requests.upload_object(&self.bucket, key, body, config);
        self.client.upload_object(input).await
    }

    /// Deletes the object at `key`
    ///
    /// # Errors
    ///
    /// Returns the SDK error from `DeleteObject` unchanged
    pub async fn delete(
        &self,
        key: &str,
        config: Option<&Delete>,
    ) -> Result<DeleteObjectOutput, SdkError<DeleteObjectError>> {
        debug!("Deleting object: {}/{}", self.bucket, key);

        let input = self.requests.delete_object(&self.bucket, key, config);
        self.client.delete_object(input).await
    }

    /// Lists one page of objects in the bucket
    ///
    /// # Errors
    ///
    /// Returns the SDK error from `ListObjectsV2` unchanged
    pub async fn list(
        &self,
        config: Option<&List>,
    ) -> Result<ListObjectsV2Output, SdkError<ListObjectsV2Error>> {
        debug!("Listing objects in bucket: {}", self.bucket);

        let input = self.requests.list_objects(&self.bucket, config);
        self.client.list_objects_v2(input).await
    }
}

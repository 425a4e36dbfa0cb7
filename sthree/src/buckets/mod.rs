//! Bucket collection operations: create, delete and list buckets

mod create;
mod delete;
mod list;

use std::sync::Arc;

use aws_sdk_s3::{
    error::SdkError,
    operation::{
        create_bucket::{CreateBucketError, CreateBucketOutput},
        delete_bucket::{DeleteBucketError, DeleteBucketOutput},
        list_buckets::{ListBucketsError, ListBucketsOutput},
    },
};
use tracing::debug;

pub use create::CreateBucket;

use crate::{objects::Objects, request::RequestBuilder, storage::StorageClient};

/// Facade over the caller's set of buckets
#[derive(Clone)]
pub struct Buckets {
    client: Arc<dyn StorageClient>,
    requests: RequestBuilder,
}

impl Buckets {
    /// Creates a bucket collection facade over a storage client
    #[must_use]
    pub fn new(client: Arc<dyn StorageClient>, requests: RequestBuilder) -> Self {
        Self { client, requests }
    }

    /// Creates a bucket named `name`
    ///
    /// # Errors
    ///
    /// Returns the SDK error from `CreateBucket` unchanged
    pub async fn create(
        &self,
        name: &str,
        config: Option<&CreateBucket>,
    ) -> Result<CreateBucketOutput, SdkError<CreateBucketError>> {
        debug!("Creating bucket: {}", name);

        let input = self.requests.create_bucket(name, config);
        self.client.create_bucket(input).await
    }

    /// Deletes the bucket named `name`
    ///
    /// # Errors
    ///
    /// Returns the SDK error from `DeleteBucket` unchanged
    pub async fn delete(
        &self,
        name: &str,
    ) -> Result<DeleteBucketOutput, SdkError<DeleteBucketError>> {
        debug!("Deleting bucket: {}", name);

        let input = self.requests.delete_bucket(name, None);
        self.client.delete_bucket(input).await
    }

    /// Deletes the bucket named `name` only if it belongs to account `owner`
    ///
    /// # Errors
    ///
    /// Returns the SDK error from `DeleteBucket` unchanged
    pub async fn delete_if_owner(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<DeleteBucketOutput, SdkError<DeleteBucketError>> {
        debug!("Deleting bucket: {} expected owner: {}", name, owner);

        let owner = owner.to_string();
        let input = self.requests.delete_bucket(name, Some(&owner));
        self.client.delete_bucket(input).await
    }

    /// Lists every bucket owned by the caller
    ///
    /// # Errors
    ///
    /// Returns the SDK error from `ListBuckets` unchanged
    pub async fn list(&self) -> Result<ListBucketsOutput, SdkError<ListBucketsError>> {
        debug!("Listing buckets");

        let input = self.requests.list_buckets();
        self.client.list_buckets(input).await
    }

    /// Object operations inside the bucket named `name`
    #[must_use]
    pub fn objects(&self, name: &str) -> Objects {
        Objects::new(Arc::clone(&self.client), self.requests, name.to_string())
    }
}

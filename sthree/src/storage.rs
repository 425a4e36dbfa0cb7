//! The storage client seam
//!
//! Facades talk to S3 through [`StorageClient`]. The trait takes fully-built
//! wire requests and hands back whatever the SDK returns.

use aws_sdk_s3::{
    error::SdkError,
    operation::{
        create_bucket::{builders::CreateBucketInputBuilder, CreateBucketError, CreateBucketOutput},
        delete_bucket::{builders::DeleteBucketInputBuilder, DeleteBucketError, DeleteBucketOutput},
        delete_object::{builders::DeleteObjectInputBuilder, DeleteObjectError, DeleteObjectOutput},
        get_object::{builders::GetObjectInputBuilder, GetObjectError, GetObjectOutput},
        list_buckets::{builders::ListBucketsInputBuilder, ListBucketsError, ListBucketsOutput},
        list_objects_v2::{
            builders::ListObjectsV2InputBuilder, ListObjectsV2Error, ListObjectsV2Output,
        },
        put_bucket_cors::{
            builders::PutBucketCorsInputBuilder, PutBucketCorsError, PutBucketCorsOutput,
        },
        put_object::{builders::PutObjectInputBuilder, PutObjectError, PutObjectOutput},
    },
    presigning::{PresignedRequest, PresigningConfig},
    Client as S3Client,
};

/// Operations the facades need from an S3 client
#[async_trait::async_trait]
pub trait StorageClient: Send + Sync {
    /// Creates a bucket
    async fn create_bucket(
        &self,
        input: CreateBucketInputBuilder,
    ) -> Result<CreateBucketOutput, SdkError<CreateBucketError>>;

    /// Deletes an empty bucket
    async fn delete_bucket(
        &self,
        input: DeleteBucketInputBuilder,
    ) -> Result<DeleteBucketOutput, SdkError<DeleteBucketError>>;

    /// Lists the buckets owned by the caller
    async fn list_buckets(
        &self,
        input: ListBucketsInputBuilder,
    ) -> Result<ListBucketsOutput, SdkError<ListBucketsError>>;

    /// Fetches an object
    async fn get_object(
        &self,
        input: GetObjectInputBuilder,
    ) -> Result<GetObjectOutput, SdkError<GetObjectError>>;

    /// Stores an object in a single request
    async fn put_object(
        &self,
        input: PutObjectInputBuilder,
    ) -> Result<PutObjectOutput, SdkError<PutObjectError>>;

    /// Uploads an object, possibly through a managed uploader
    async fn upload_object(
        &self,
        input: PutObjectInputBuilder,
    ) -> Result<PutObjectOutput, SdkError<PutObjectError>>;

    /// Deletes an object
    async fn delete_object(
        &self,
        input: DeleteObjectInputBuilder,
    ) -> Result<DeleteObjectOutput, SdkError<DeleteObjectError>>;

    /// Lists one page of objects
    async fn list_objects_v2(
        &self,
        input: ListObjectsV2InputBuilder,
    ) -> Result<ListObjectsV2Output, SdkError<ListObjectsV2Error>>;

    /// Replaces the CORS configuration of a bucket
    async fn put_bucket_cors(
        &self,
        input: PutBucketCorsInputBuilder,
    ) -> Result<PutBucketCorsOutput, SdkError<PutBucketCorsError>>;

    /// Presigns a get-object request
    async fn presign_get_object(
        &self,
        input: GetObjectInputBuilder,
        config: PresigningConfig,
    ) -> Result<PresignedRequest, SdkError<GetObjectError>>;

    /// Presigns a put-object request; the body is supplied by whoever uses the URL
    async fn presign_put_object(
        &self,
        input: PutObjectInputBuilder,
        config: PresigningConfig,
    ) -> Result<PresignedRequest, SdkError<PutObjectError>>;

    /// Presigns a delete-object request
    async fn presign_delete_object(
        &self,
        input: DeleteObjectInputBuilder,
        config: PresigningConfig,
    ) -> Result<PresignedRequest, SdkError<DeleteObjectError>>;
}

#[async_trait::async_trait]
impl StorageClient for S3Client {
    async fn create_bucket(
        &self,
        input: CreateBucketInputBuilder,
    ) -> Result<CreateBucketOutput, SdkError<CreateBucketError>> {
        input.send_with(self).await
    }

    async fn delete_bucket(
        &self,
        input: DeleteBucketInputBuilder,
    ) -> Result<DeleteBucketOutput, SdkError<DeleteBucketError>> {
        input.send_with(self).await
    }

    async fn list_buckets(
        &self,
        input: ListBucketsInputBuilder,
    ) -> Result<ListBucketsOutput, SdkError<ListBucketsError>> {
        input.send_with(self).await
    }

    async fn get_object(
        &self,
        input: GetObjectInputBuilder,
    ) -> Result<GetObjectOutput, SdkError<GetObjectError>> {
        input.send_with(self).await
    }

    async fn put_object(
        &self,
        input: PutObjectInputBuilder,
    ) -> Result<PutObjectOutput, SdkError<PutObjectError>> {
        input.send_with(self).await
    }

    // The SDK has no managed uploader, so uploads go out as one PutObject.
    async fn upload_object(
        &self,
        input: PutObjectInputBuilder,
    ) -> Result<PutObjectOutput, SdkError<PutObjectError>> {
        input.send_with(self).await
    }

    async fn delete_object(
        &self,
        input: DeleteObjectInputBuilder,
    ) -> Result<DeleteObjectOutput, SdkError<DeleteObjectError>> {
        input.send_with(self).await
    }

    async fn list_objects_v2(
        &self,
        input: ListObjectsV2InputBuilder,
    ) -> Result<ListObjectsV2Output, SdkError<ListObjectsV2Error>> {
        input.send_with(self).await
    }

    async fn put_bucket_cors(
        &self,
        input: PutBucketCorsInputBuilder,
    ) -> Result<PutBucketCorsOutput, SdkError<PutBucketCorsError>> {
        input.send_with(self).await
    }

    async fn presign_get_object(
        &self,
        input: GetObjectInputBuilder,
        config: PresigningConfig,
    ) -> Result<PresignedRequest, SdkError<GetObjectError>> {
        self.get_object()
            .set_bucket(input.get_bucket().clone())
            .set_key(input.get_key().clone())
            .set_checksum_mode(input.get_checksum_mode().clone())
            .set_expected_bucket_owner(input.get_expected_bucket_owner().clone())
            .set_if_match(input.get_if_match().clone())
            .set_if_modified_since(*input.get_if_modified_since())
            .set_if_none_match(input.get_if_none_match().clone())
            .set_if_unmodified_since(*input.get_if_unmodified_since())
            .set_part_number(*input.get_part_number())
            .set_range(input.get_range().clone())
            .set_request_payer(input.get_request_payer().clone())
            .set_response_cache_control(input.get_response_cache_control().clone())
            .set_response_content_disposition(input.get_response_content_disposition().clone())
            .set_response_content_encoding(input.get_response_content_encoding().clone())
            .set_response_content_language(input.get_response_content_language().clone())
            .set_response_content_type(input.get_response_content_type().clone())
            .set_response_expires(*input.get_response_expires())
            .set_sse_customer_algorithm(input.get_sse_customer_algorithm().clone())
            .set_sse_customer_key(input.get_sse_customer_key().clone())
            .set_sse_customer_key_md5(input.get_sse_customer_key_md5().clone())
            .set_version_id(input.get_version_id().clone())
            .presigned(config)
            .await
    }

    async fn presign_put_object(
        &self,
        input: PutObjectInputBuilder,
        config: PresigningConfig,
    ) -> Result<PresignedRequest, SdkError<PutObjectError>> {
        self.put_object()
            .set_bucket(input.get_bucket().clone())
            .set_key(input.get_key().clone())
            .set_acl(input.get_acl().clone())
            .set_bucket_key_enabled(*input.get_bucket_key_enabled())
            .set_cache_control(input.get_cache_control().clone())
            .set_checksum_algorithm(input.get_checksum_algorithm().clone())
            .set_checksum_crc32(input.get_checksum_crc32().clone())
            .set_checksum_crc32_c(input.get_checksum_crc32_c().clone())
            .set_checksum_sha1(input.get_checksum_sha1().clone())
            .set_checksum_sha256(input.get_checksum_sha256().clone())
            .set_content_disposition(input.get_content_disposition().clone())
            .set_content_encoding(input.get_content_encoding().clone())
            .set_content_language(input.get_content_language().clone())
            .set_content_md5(input.get_content_md5().clone())
            .set_content_type(input.get_content_type().clone())
            .set_expected_bucket_owner(input.get_expected_bucket_owner().clone())
            .set_expires(*input.get_expires())
            .set_grant_full_control(input.get_grant_full_control().clone())
            .set_grant_read(input.get_grant_read().clone())
            .set_grant_read_acp(input.get_grant_read_acp().clone())
            .set_grant_write_acp(input.get_grant_write_acp().clone())
            .set_metadata(input.get_metadata().clone())
            .set_object_lock_legal_hold_status(input.get_object_lock_legal_hold_status().clone())
            .set_object_lock_mode(input.get_object_lock_mode().clone())
            .set_object_lock_retain_until_date(*input.get_object_lock_retain_until_date())
            .set_request_payer(input.get_request_payer().clone())
            .set_server_side_encryption(input.get_server_side_encryption().clone())
            .set_sse_customer_algorithm(input.get_sse_customer_algorithm().clone())
            .set_sse_customer_key(input.get_sse_customer_key().clone())
            .set_sse_customer_key_md5(input.get_sse_customer_key_md5().clone())
            .set_ssekms_encryption_context(input.get_ssekms_encryption_context().clone())
            .set_ssekms_key_id(input.get_ssekms_key_id().clone())
            .set_storage_class(input.get_storage_class().clone())
            .set_tagging(input.get_tagging().clone())
            .set_website_redirect_location(input.get_website_redirect_location().clone())
            .presigned(config)
            .await
    }

    async fn presign_delete_object(
        &self,
        input: DeleteObjectInputBuilder,
        config: PresigningConfig,
    ) -> Result<PresignedRequest, SdkError<DeleteObjectError>> {
        self.delete_object()
            .set_bucket(input.get_bucket().clone())
            .set_key(input.get_key().clone())
            .set_bypass_governance_retention(*input.get_bypass_governance_retention())
            .set_expected_bucket_owner(input.get_expected_bucket_owner().clone())
            .set_mfa(input.get_mfa().clone())
            .set_request_payer(input.get_request_payer().clone())
            .set_version_id(input.get_version_id().clone())
            .presigned(config)
            .await
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! A recording [`StorageClient`] for tests

    use std::sync::Mutex;

    use aws_sdk_s3::{
        error::SdkError,
        operation::{
            create_bucket::{
                builders::CreateBucketInputBuilder, CreateBucketError, CreateBucketOutput,
            },
            delete_bucket::{
                builders::DeleteBucketInputBuilder, DeleteBucketError, DeleteBucketOutput,
            },
            delete_object::{
                builders::DeleteObjectInputBuilder, DeleteObjectError, DeleteObjectOutput,
            },
            get_object::{builders::GetObjectInputBuilder, GetObjectError, GetObjectOutput},
            list_buckets::{builders::ListBucketsInputBuilder, ListBucketsError, ListBucketsOutput},
            list_objects_v2::{
                builders::ListObjectsV2InputBuilder, ListObjectsV2Error, ListObjectsV2Output,
            },
            put_bucket_cors::{
                builders::PutBucketCorsInputBuilder, PutBucketCorsError, PutBucketCorsOutput,
            },
            put_object::{builders::PutObjectInputBuilder, PutObjectError, PutObjectOutput},
        },
        presigning::{PresignedRequest, PresigningConfig},
    };

    use super::StorageClient;

    /// A wire request captured by [`MockStorageClient`]
    #[derive(Debug)]
    pub enum RecordedRequest {
        /// `CreateBucket`
        CreateBucket(CreateBucketInputBuilder),
        /// `DeleteBucket`
        DeleteBucket(DeleteBucketInputBuilder),
        /// `ListBuckets`
        ListBuckets(ListBucketsInputBuilder),
        /// `GetObject`
        GetObject(GetObjectInputBuilder),
        /// `PutObject`
        PutObject(PutObjectInputBuilder),
        /// Upload through the uploader path
        UploadObject(PutObjectInputBuilder),
        /// `DeleteObject`
        DeleteObject(DeleteObjectInputBuilder),
        /// `ListObjectsV2`
        ListObjectsV2(ListObjectsV2InputBuilder),
        /// `PutBucketCors`
        PutBucketCors(PutBucketCorsInputBuilder),
        /// Presigned `GetObject`
        PresignGetObject(GetObjectInputBuilder, PresigningConfig),
        /// Presigned `PutObject`
        PresignPutObject(PutObjectInputBuilder, PresigningConfig),
        /// Presigned `DeleteObject`
        PresignDeleteObject(DeleteObjectInputBuilder, PresigningConfig),
    }

    /// Records every request and answers with empty outputs or a fixed failure
    ///
    /// Presigning always fails with a construction failure since the mock has
    /// no credentials to sign with; the request is still recorded.
    #[derive(Debug, Default)]
    pub struct MockStorageClient {
        requests: Mutex<Vec<RecordedRequest>>,
        failure: Option<String>,
    }

    impl MockStorageClient {
        /// Creates a mock that answers every call successfully
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a mock that fails every call with a construction failure
        #[must_use]
        pub fn failing(message: &str) -> Self {
            Self {
                requests: Mutex::default(),
                failure: Some(message.to_string()),
            }
        }

        /// Drains the requests recorded so far, oldest first
        ///
        /// # Panics
        ///
        /// Panics if the request log mutex is poisoned
        pub fn take_requests(&self) -> Vec<RecordedRequest> {
            std::mem::take(&mut *self.requests.lock().expect("request log poisoned"))
        }

        fn record<T, E>(&self, request: RecordedRequest, output: T) -> Result<T, SdkError<E>> {
            self.requests
                .lock()
                .expect("request log poisoned")
                .push(request);

            match &self.failure {
                Some(message) => Err(SdkError::construction_failure(message.clone())),
                None => Ok(output),
            }
        }

        fn record_presign<E>(
            &self,
            request: RecordedRequest,
        ) -> Result<PresignedRequest, SdkError<E>> {
            self.requests
                .lock()
                .expect("request log poisoned")
                .push(request);

            let message = self
                .failure
                .clone()
                .unwrap_or_else(|| "presigning is not supported by the mock client".to_string());
            Err(SdkError::construction_failure(message))
        }
    }

    #[async_trait::async_trait]
    impl StorageClient for MockStorageClient {
        async fn create_bucket(
            &self,
            input: CreateBucketInputBuilder,
        ) -> Result<CreateBucketOutput, SdkError<CreateBucketError>> {
            self.record(
                RecordedRequest::CreateBucket(input),
                CreateBucketOutput::builder().build(),
            )
        }

        async fn delete_bucket(
            &self,
            input: DeleteBucketInputBuilder,
        ) -> Result<DeleteBucketOutput, SdkError<DeleteBucketError>> {
            self.record(
                RecordedRequest::DeleteBucket(input),
                DeleteBucketOutput::builder().build(),
            )
        }

        async fn list_buckets(
            &self,
            input: ListBucketsInputBuilder,
        ) -> Result<ListBucketsOutput, SdkError<ListBucketsError>> {
            self.record(
                RecordedRequest::ListBuckets(input),
                ListBucketsOutput::builder().build(),
            )
        }

        async fn get_object(
            &self,
            input: GetObjectInputBuilder,
        ) -> Result<GetObjectOutput, SdkError<GetObjectError>> {
            self.record(
                RecordedRequest::GetObject(input),
                GetObjectOutput::builder().build(),
            )
        }

        async fn put_object(
            &self,
            input: PutObjectInputBuilder,
        ) -> Result<PutObjectOutput, SdkError<PutObjectError>> {
            self.record(
                RecordedRequest::PutObject(input),
                PutObjectOutput::builder().build(),
            )
        }

        async fn upload_object(
            &self,
            input: PutObjectInputBuilder,
        ) -> Result<PutObjectOutput, SdkError<PutObjectError>> {
            self.record(
                RecordedRequest::UploadObject(input),
                PutObjectOutput::builder().build(),
            )
        }

        async fn delete_object(
            &self,
            input: DeleteObjectInputBuilder,
        ) -> Result<DeleteObjectOutput, SdkError<DeleteObjectError>> {
            self.record(
                RecordedRequest::DeleteObject(input),
                DeleteObjectOutput::builder().build(),
            )
        }

        async fn list_objects_v2(
            &self,
            input: ListObjectsV2InputBuilder,
        ) -> Result<ListObjectsV2Output, SdkError<ListObjectsV2Error>> {
            self.record(
                RecordedRequest::ListObjectsV2(input),
                ListObjectsV2Output::builder().build(),
            )
        }

        async fn put_bucket_cors(
            &self,
            input: PutBucketCorsInputBuilder,
        ) -> Result<PutBucketCorsOutput, SdkError<PutBucketCorsError>> {
            self.record(
                RecordedRequest::PutBucketCors(input),
                PutBucketCorsOutput::builder().build(),
            )
        }

        async fn presign_get_object(
            &self,
            input: GetObjectInputBuilder,
            config: PresigningConfig,
        ) -> Result<PresignedRequest, SdkError<GetObjectError>> {
            self.record_presign(RecordedRequest::PresignGetObject(input, config))
        }

        async fn presign_put_object(
            &self,
            input: PutObjectInputBuilder,
            config: PresigningConfig,
        ) -> Result<PresignedRequest, SdkError<PutObjectError>> {
            self.record_presign(RecordedRequest::PresignPutObject(input, config))
        }

        async fn presign_delete_object(
            &self,
            input: DeleteObjectInputBuilder,
            config: PresigningConfig,
        ) -> Result<PresignedRequest, SdkError<DeleteObjectError>> {
            self.record_presign(RecordedRequest::PresignDeleteObject(input, config))
        }
    }
}

use std::collections::HashMap;

use aws_sdk_s3::{
    operation::put_object::{builders::PutObjectInputBuilder, PutObjectInput},
    primitives::ByteStream,
    types::{
        ChecksumAlgorithm, ObjectCannedAcl, ObjectLockLegalHoldStatus, ObjectLockMode,
        RequestPayer, ServerSideEncryption, StorageClass,
    },
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::RequestBuilder;

/// Attributes stored with an object on put and upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ObjectDetails {
    /// Canned ACL, e.g. `private`
    pub acl: Option<String>,
    /// Use an S3 Bucket Key for SSE-KMS
    pub bucket_key_enabled: Option<bool>,
    /// `Cache-Control` header
    pub cache_control: Option<String>,
    /// Algorithm used to compute the object checksum
    pub checksum_algorithm: Option<String>,
    /// Base64 CRC32 checksum
    pub checksum_crc32: Option<String>,
    /// Base64 CRC32C checksum
    pub checksum_crc32c: Option<String>,
    /// Base64 SHA-1 checksum
    pub checksum_sha1: Option<String>,
    /// Base64 SHA-256 checksum
    pub checksum_sha256: Option<String>,
    /// `Content-Disposition` header
    pub content_disposition: Option<String>,
    /// `Content-Encoding` header
    pub content_encoding: Option<String>,
    /// `Content-Language` header
    pub content_language: Option<String>,
    /// Base64 MD5 digest of the body
    pub content_md5: Option<String>,
    /// `Content-Type` header
    pub content_type: Option<String>,
    /// Account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
    /// Instant after which the object is no longer cacheable
    pub expires: Option<DateTime<Utc>>,
    /// Grantee with read, read ACP and write ACP permissions
    pub grant_full_control: Option<String>,
    /// Grantee allowed to read the object
    pub grant_read: Option<String>,
    /// Grantee allowed to read the object ACL
    pub grant_read_acp: Option<String>,
    /// Grantee allowed to write the object ACL
    pub grant_write_acp: Option<String>,
    /// User metadata stored as `x-amz-meta-*` headers
    pub metadata: HashMap<String, String>,
    /// Legal hold status, `ON` or `OFF`
    pub object_lock_legal_hold_status: Option<String>,
    /// Object Lock mode, `GOVERNANCE` or `COMPLIANCE`
    pub object_lock_mode: Option<String>,
    /// Instant the Object Lock retention expires
    pub object_lock_retain_until_date: Option<DateTime<Utc>>,
    /// `requester` to accept requester-pays charges
    pub request_payer: Option<String>,
    /// SSE-C algorithm, e.g. `AES256`
    pub sse_customer_algorithm: Option<String>,
    /// SSE-C key
    pub sse_customer_key: Option<String>,
    /// MD5 digest of the SSE-C key
    pub sse_customer_key_md5: Option<String>,
    /// Base64 JSON SSE-KMS encryption context
    pub ssekms_encryption_context: Option<String>,
    /// KMS key for SSE-KMS
    pub ssekms_key_id: Option<String>,
    /// Server-side encryption algorithm, e.g. `aws:kms`
    pub server_side_encryption: Option<String>,
    /// Storage class, e.g. `STANDARD_IA`
    pub storage_class: Option<String>,
    /// URL-encoded tag set, e.g. `team=media&env=prod`
    pub tagging: Option<String>,
    /// Redirect target when the bucket serves a website
    pub website_redirect_location: Option<String>,
}

/// Options for a single-request put
pub type Put = ObjectDetails;

/// Options for an upload through the client's uploader
pub type Upload = ObjectDetails;

impl RequestBuilder {
    /// Builds the `PutObject` request storing `body` at `bucket`/`key`
    ///
    /// Metadata is always sent, as an empty map when none is given.
    #[must_use]
    pub fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: ByteStream,
        config: Option<&Put>,
    ) -> PutObjectInputBuilder {
        let config = config.cloned().unwrap_or_default();
        let p = self.presence();

        PutObjectInput::builder()
            .bucket(bucket)
            .key(key)
            .body(body)
            .set_acl(p.enumerated::<ObjectCannedAcl>(config.acl.as_ref()))
            .set_bucket_key_enabled(p.keep(config.bucket_key_enabled))
            .set_cache_control(p.string(config.cache_control.as_ref()))
            .set_checksum_algorithm(
                p.enumerated::<ChecksumAlgorithm>(config.checksum_algorithm.as_ref()),
            )
            .set_checksum_crc32(p.string(config.checksum_crc32.as_ref()))
            .set_checksum_crc32_c(p.string(config.checksum_crc32c.as_ref()))
            .set_checksum_sha1(p.string(config.checksum_sha1.as_ref()))
            .set_checksum_sha256(p.string(config.checksum_sha256.as_ref()))
            .set_content_disposition(p.string(config.content_disposition.as_ref()))
            .set_content_encoding(p.string(config.content_encoding.as_ref()))
            .set_content_language(p.string(config.content_language.as_ref()))
            .set_content_md5(p.string(config.content_md5.as_ref()))
            .set_content_type(p.string(config.content_type.as_ref()))
            .set_expected_bucket_owner(p.string(config.expected_bucket_owner.as_ref()))
            .set_expires(p.instant(config.expires))
            .set_grant_full_control(p.string(config.grant_full_control.as_ref()))
            .set_grant_read(p.string(config.grant_read.as_ref()))
            .set_grant_read_acp(p.string(config.grant_read_acp.as_ref()))
            .set_grant_write_acp(p.string(config.grant_write_acp.as_ref()))
            .set_metadata(Some(config.metadata))
            .set_object_lock_legal_hold_status(p.enumerated::<ObjectLockLegalHoldStatus>(
                config.object_lock_legal_hold_status.as_ref(),
            ))
            .set_object_lock_mode(p.enumerated::<ObjectLockMode>(config.object_lock_mode.as_ref()))
            .set_object_lock_retain_until_date(p.instant(config.object_lock_retain_until_date))
            .set_request_payer(p.enumerated::<RequestPayer>(config.request_payer.as_ref()))
            .set_sse_customer_algorithm(p.string(config.sse_customer_algorithm.as_ref()))
            .set_sse_customer_key(p.string(config.sse_customer_key.as_ref()))
            .set_sse_customer_key_md5(p.string(config.sse_customer_key_md5.as_ref()))
            .set_ssekms_encryption_context(p.string(config.ssekms_encryption_context.as_ref()))
            .set_ssekms_key_id(p.string(config.ssekms_key_id.as_ref()))
            .set_server_side_encryption(
                p.enumerated::<ServerSideEncryption>(config.server_side_encryption.as_ref()),
            )
            .set_storage_class(p.enumerated::<StorageClass>(config.storage_class.as_ref()))
            .set_tagging(p.string(config.tagging.as_ref()))
            .set_website_redirect_location(p.string(config.website_redirect_location.as_ref()))
    }

    /// Builds the request handed to the client's uploader
    ///
    /// Uploads carry the same fields as a put; splitting the body into parts
    /// is up to the storage client.
    #[must_use]
    pub fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        body: ByteStream,
        config: Option<&Upload>,
    ) -> PutObjectInputBuilder {
        self.put_object(bucket, key, body, config)
    }
}

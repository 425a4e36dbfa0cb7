use aws_sdk_s3::{
    operation::get_object::{builders::GetObjectInputBuilder, GetObjectInput},
    types::{ChecksumMode, RequestPayer},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::RequestBuilder;

/// Options for fetching an object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Get {
    /// Set to `ENABLED` to have checksums returned
    pub checksum_mode: Option<String>,
    /// Account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
    /// Only return the object if its `ETag` matches
    pub if_match: Option<String>,
    /// Only return the object if modified after this instant
    pub if_modified_since: Option<DateTime<Utc>>,
    /// Only return the object if its `ETag` differs
    pub if_none_match: Option<String>,
    /// Only return the object if not modified after this instant
    pub if_unmodified_since: Option<DateTime<Utc>>,
    /// Part number to read, for multipart objects
    pub part_number: Option<i32>,
    /// Byte range, e.g. `bytes=0-99`
    pub range: Option<String>,
    /// `requester` to accept requester-pays charges
    pub request_payer: Option<String>,
    /// Overrides the response `Cache-Control` header
    pub response_cache_control: Option<String>,
    /// Overrides the response `Content-Disposition` header
    pub response_content_disposition: Option<String>,
    /// Overrides the response `Content-Encoding` header
    pub response_content_encoding: Option<String>,
    /// Overrides the response `Content-Language` header
    pub response_content_language: Option<String>,
    /// Overrides the response `Content-Type` header
    pub response_content_type: Option<String>,
    /// Overrides the response `Expires` header
    pub response_expires: Option<DateTime<Utc>>,
    /// SSE-C algorithm, e.g. `AES256`
    pub sse_customer_algorithm: Option<String>,
    /// SSE-C key
    pub sse_customer_key: Option<String>,
    /// MD5 digest of the SSE-C key
    pub sse_customer_key_md5: Option<String>,
    /// Version of the object to fetch
    pub version_id: Option<String>,
}

impl RequestBuilder {
    /// Builds the `GetObject` request for `bucket`/`key`
    #[must_use]
    pub fn get_object(&self, bucket: &str, key: &str, config: Option<&Get>) -> GetObjectInputBuilder {
        let config = config.cloned().unwrap_or_default();
        let p = self.presence();

        GetObjectInput::builder()
            .bucket(bucket)
            .key(key)
            .set_checksum_mode(p.enumerated::<ChecksumMode>(config.checksum_mode.as_ref()))
            .set_expected_bucket_owner(p.string(config.expected_bucket_owner.as_ref()))
            .set_if_match(p.string(config.if_match.as_ref()))
            .set_if_modified_since(p.instant(config.if_modified_since))
            .set_if_none_match(p.string(config.if_none_match.as_ref()))
            .set_if_unmodified_since(p.instant(config.if_unmodified_since))
            .set_part_number(p.keep(config.part_number))
            .set_range(p.string(config.range.as_ref()))
            .set_request_payer(p.enumerated::<RequestPayer>(config.request_payer.as_ref()))
            .set_response_cache_control(p.string(config.response_cache_control.as_ref()))
            .set_response_content_disposition(
                p.string(config.response_content_disposition.as_ref()),
            )
            .set_response_content_encoding(p.string(config.response_content_encoding.as_ref()))
            .set_response_content_language(p.string(config.response_content_language.as_ref()))
            .set_response_content_type(p.string(config.response_content_type.as_ref()))
            .set_response_expires(p.instant(config.response_expires))
            .set_sse_customer_algorithm(p.string(config.sse_customer_algorithm.as_ref()))
            .set_sse_customer_key(p.string(config.sse_customer_key.as_ref()))
            .set_sse_customer_key_md5(p.string(config.sse_customer_key_md5.as_ref()))
            .set_version_id(p.string(config.version_id.as_ref()))
    }
}

use aws_sdk_s3::{
    operation::list_objects_v2::{builders::ListObjectsV2InputBuilder, ListObjectsV2Input},
    types::{EncodingType, OptionalObjectAttributes, RequestPayer},
};
use serde::{Deserialize, Serialize};

use crate::request::{RequestBuilder, DEFAULT_MAX_KEYS};

/// Options for listing one page of objects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct List {
    /// Token from a previous truncated listing
    pub continuation_token: Option<String>,
    /// Character used to group keys into common prefixes
    pub delimiter: Option<String>,
    /// Encoding applied to keys in the response, e.g. `url`
    pub encoding_type: Option<String>,
    /// Account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
    /// Include the owner of each object
    pub fetch_owner: Option<bool>,
    /// Page size; unset or non-positive means 1000
    pub max_keys: Option<i32>,
    /// Extra attributes to return, e.g. `RestoreStatus`
    pub optional_object_attributes: Vec<String>,
    /// Only list keys starting with this prefix
    pub prefix: Option<String>,
    /// `requester` to accept requester-pays charges
    pub request_payer: Option<String>,
    /// Start listing after this key
    pub start_after: Option<String>,
}

impl RequestBuilder {
    /// Builds the `ListObjectsV2` request for `bucket`
    ///
    /// `max_keys` falls back to [`DEFAULT_MAX_KEYS`] when unset or not
    /// positive, whatever the presence policy.
    #[must_use]
    pub fn list_objects(&self, bucket: &str, config: Option<&List>) -> ListObjectsV2InputBuilder {
        let config = config.cloned().unwrap_or_default();
        let p = self.presence();

        let max_keys = config
            .max_keys
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_KEYS);

        let attributes: Vec<OptionalObjectAttributes> = config
            .optional_object_attributes
            .iter()
            .filter_map(|attr| p.enumerated(Some(attr)))
            .collect();

        ListObjectsV2Input::builder()
            .bucket(bucket)
            .max_keys(max_keys)
            .set_continuation_token(p.string(config.continuation_token.as_ref()))
            .set_delimiter(p.string(config.delimiter.as_ref()))
            .set_encoding_type(p.enumerated::<EncodingType>(config.encoding_type.as_ref()))
            .set_expected_bucket_owner(p.string(config.expected_bucket_owner.as_ref()))
            .set_fetch_owner(p.keep(config.fetch_owner))
            .set_optional_object_attributes((!attributes.is_empty()).then_some(attributes))
            .set_prefix(p.string(config.prefix.as_ref()))
            .set_request_payer(p.enumerated::<RequestPayer>(config.request_payer.as_ref()))
            .set_start_after(p.string(config.start_after.as_ref()))
    }
}

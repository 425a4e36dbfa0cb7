use aws_sdk_s3::{
    operation::delete_object::{builders::DeleteObjectInputBuilder, DeleteObjectInput},
    types::RequestPayer,
};
use serde::{Deserialize, Serialize};

use crate::request::RequestBuilder;

/// Options for deleting an object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Delete {
    /// Bypass Governance-mode Object Lock restrictions
    pub bypass_governance_retention: Option<bool>,
    /// Account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
    /// MFA device serial number, a space, and the current code
    pub mfa: Option<String>,
    /// `requester` to accept requester-pays charges
    pub request_payer: Option<String>,
    /// Version of the object to delete
    pub version_id: Option<String>,
}

impl RequestBuilder {
    /// Builds the `DeleteObject` request for `bucket`/`key`
    #[must_use]
    pub fn delete_object(
        &self,
        bucket: &str,
        key: &str,
        config: Option<&Delete>,
    ) -> DeleteObjectInputBuilder {
        let config = config.cloned().unwrap_or_default();
        let p = self.presence();

        DeleteObjectInput::builder()
            .bucket(bucket)
            .key(key)
            .set_bypass_governance_retention(p.keep(config.bypass_governance_retention))
            .set_expected_bucket_owner(p.string(config.expected_bucket_owner.as_ref()))
            .set_mfa(p.string(config.mfa.as_ref()))
            .set_request_payer(p.enumerated::<RequestPayer>(config.request_payer.as_ref()))
            .set_version_id(p.string(config.version_id.as_ref()))
    }
}

use aws_sdk_s3::{
    operation::create_bucket::{builders::CreateBucketInputBuilder, CreateBucketInput},
    types::{
        BucketCannedAcl, BucketInfo, BucketLocationConstraint, BucketType,
        CreateBucketConfiguration, DataRedundancy, LocationInfo, LocationType, ObjectOwnership,
    },
};
use serde::{Deserialize, Serialize};

use crate::request::RequestBuilder;

/// Options for creating a bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CreateBucket {
    /// Bucket type, e.g. `Directory`
    pub bucket_type: Option<String>,
    /// Canned ACL applied to the bucket
    pub acl: Option<String>,
    /// Grantee with read, write, read ACP and write ACP permissions
    pub grant_full_control: Option<String>,
    /// Grantee allowed to list the objects
    pub grant_read: Option<String>,
    /// Grantee allowed to read the bucket ACL
    pub grant_read_acp: Option<String>,
    /// Grantee allowed to create new objects
    pub grant_write: Option<String>,
    /// Grantee allowed to write the bucket ACL
    pub grant_write_acp: Option<String>,
    /// Enables S3 Object Lock for the new bucket
    pub object_lock_enabled_for_bucket: Option<bool>,
    /// Object ownership control, e.g. `BucketOwnerEnforced`
    pub object_ownership: Option<String>,
    /// Data redundancy for directory buckets, e.g. `SingleAvailabilityZone`
    pub data_redundancy: Option<String>,
    /// Name of the location the bucket is created in (availability zone id)
    pub location_name: Option<String>,
    /// Type of that location, e.g. `AvailabilityZone`
    pub location_type: Option<String>,
    /// Region the bucket is created in
    pub location_constraint: Option<String>,
}

impl RequestBuilder {
    /// Builds the `CreateBucket` request for `name`
    #[must_use]
    pub fn create_bucket(
        &self,
        name: &str,
        config: Option<&CreateBucket>,
    ) -> CreateBucketInputBuilder {
        let config = config.cloned().unwrap_or_default();
        let p = self.presence();

        CreateBucketInput::builder()
            .bucket(name)
            .set_acl(p.enumerated::<BucketCannedAcl>(config.acl.as_ref()))
            .set_grant_full_control(p.string(config.grant_full_control.as_ref()))
            .set_grant_read(p.string(config.grant_read.as_ref()))
            .set_grant_read_acp(p.string(config.grant_read_acp.as_ref()))
            .set_grant_write(p.string(config.grant_write.as_ref()))
            .set_grant_write_acp(p.string(config.grant_write_acp.as_ref()))
            .set_object_lock_enabled_for_bucket(p.keep(config.object_lock_enabled_for_bucket))
            .set_object_ownership(p.enumerated::<ObjectOwnership>(config.object_ownership.as_ref()))
            .set_create_bucket_configuration(self.bucket_configuration(&config))
    }

    // The configuration and each nested structure are only sent when at
    // least one of their fields is.
    fn bucket_configuration(&self, config: &CreateBucket) -> Option<CreateBucketConfiguration> {
        let p = self.presence();

        let constraint =
            p.enumerated::<BucketLocationConstraint>(config.location_constraint.as_ref());

        let location = match (
            p.string(config.location_name.as_ref()),
            p.enumerated::<LocationType>(config.location_type.as_ref()),
        ) {
            (None, None) => None,
            (name, kind) => Some(LocationInfo::builder().set_name(name).set_type(kind).build()),
        };

        let bucket = match (
            p.enumerated::<BucketType>(config.bucket_type.as_ref()),
            p.enumerated::<DataRedundancy>(config.data_redundancy.as_ref()),
        ) {
            (None, None) => None,
            (kind, redundancy) => Some(
                BucketInfo::builder()
                    .set_type(kind)
                    .set_data_redundancy(redundancy)
                    .build(),
            ),
        };

        if constraint.is_none() && location.is_none() && bucket.is_none() {
            return None;
        }

        Some(
            CreateBucketConfiguration::builder()
                .set_location_constraint(constraint)
                .set_location(location)
                .set_bucket(bucket)
                .build(),
        )
    }
}

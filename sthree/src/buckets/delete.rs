use aws_sdk_s3::operation::delete_bucket::{builders::DeleteBucketInputBuilder, DeleteBucketInput};

use crate::request::RequestBuilder;

impl RequestBuilder {
    /// Builds the `DeleteBucket` request, optionally guarded by the expected owner
    #[must_use]
    pub fn delete_bucket(
        &self,
        name: &str,
        expected_owner: Option<&String>,
    ) -> DeleteBucketInputBuilder {
        DeleteBucketInput::builder()
            .bucket(name)
            .set_expected_bucket_owner(self.presence().string(expected_owner))
    }
}

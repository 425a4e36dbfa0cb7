use aws_sdk_s3::operation::list_buckets::{builders::ListBucketsInputBuilder, ListBucketsInput};

use crate::request::RequestBuilder;

impl RequestBuilder {
    /// Builds the `ListBuckets` request
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn list_buckets(&self) -> ListBucketsInputBuilder {
        ListBucketsInput::builder()
    }
}

//! Root client handing out bucket and object facades

use std::sync::Arc;

use aws_config::SdkConfig;
use aws_sdk_s3::Client as S3Client;
use tracing::{info, instrument};

use crate::{
    bucket::Bucket,
    buckets::Buckets,
    config::{ClientConfig, ConfigResult},
    objects::Objects,
    presence::Presence,
    request::RequestBuilder,
    requests::Requests,
    storage::StorageClient,
};

/// Entry point wrapping one storage client
///
/// Every facade produced here shares the same client handle and presence
/// policy. Bucket names are passed through without validation.
#[derive(Clone)]
pub struct Sthree {
    client: Arc<dyn StorageClient>,
    requests: RequestBuilder,
}

impl Sthree {
    /// Wraps an already configured storage client
    #[must_use]
    pub fn new(client: Arc<dyn StorageClient>) -> Self {
        Self {
            client,
            requests: RequestBuilder::default(),
        }
    }

    /// Wraps an AWS SDK S3 client
    #[must_use]
    pub fn from_client(client: S3Client) -> Self {
        Self::new(Arc::new(client))
    }

    /// Builds an S3 client from `sdk_config` with `config` applied on top
    #[must_use]
    #[instrument(skip_all)]
    pub fn connect(sdk_config: &SdkConfig, config: &ClientConfig) -> Self {
        let s3_config = config.s3_config(sdk_config);

        info!(
            "S3 client configured: region={:?} endpoint={:?} path_style={} presence={:?}",
            s3_config.region().map(ToString::to_string),
            config.endpoint_url,
            config.force_path_style,
            config.presence
        );

        Self::from_client(S3Client::from_conf(s3_config)).with_presence(config.presence)
    }

    /// Builds an S3 client from `STHREE_*` environment variables and the
    /// default AWS provider chain
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::config::ConfigError) if an environment
    /// variable holds an invalid value
    pub async fn from_env() -> ConfigResult<Self> {
        let config = ClientConfig::from_env()?;
        let sdk_config = config.sdk_config().await;

        Ok(Self::connect(&sdk_config, &config))
    }

    /// Replaces the presence policy used by every facade created afterwards
    #[must_use]
    pub fn with_presence(mut self, presence: Presence) -> Self {
        self.requests = RequestBuilder::new(presence);
        self
    }

    /// The presence policy applied to request fields
    #[must_use]
    pub const fn presence(&self) -> Presence {
        self.requests.presence()
    }

    /// Operations on the caller's set of buckets
    #[must_use]
    pub fn buckets(&self) -> Buckets {
        Buckets::new(Arc::clone(&self.client), self.requests)
    }

    /// Operations on the configuration of bucket `name`
    #[must_use]
    pub fn bucket(&self, name: &str) -> Bucket {
        Bucket::new(Arc::clone(&self.client), self.requests, name.to_string())
    }

    /// Object operations inside bucket `name`
    #[must_use]
    pub fn objects(&self, name: &str) -> Objects {
        Objects::new(Arc::clone(&self.client), self.requests, name.to_string())
    }

    /// Presigned object requests for bucket `name`
    #[must_use]
    pub fn requests(&self, name: &str) -> Requests {
        Requests::new(Arc::clone(&self.client), self.requests, name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Get;
    use crate::storage::mock::{MockStorageClient, RecordedRequest};
    use aws_config::BehaviorVersion;
    use aws_sdk_s3::operation::get_object::builders::GetObjectInputBuilder;
    use pretty_assertions::assert_eq;

    fn recorded_get(client: &MockStorageClient) -> GetObjectInputBuilder {
        match client.take_requests().pop() {
            Some(RecordedRequest::GetObject(input)) => input,
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_object_facades_build_identical_requests() {
        let client = Arc::new(MockStorageClient::new());
        let sthree = Sthree::new(client.clone());
        let config = Get {
            range: Some("bytes=0-99".to_string()),
            version_id: Some("v1".to_string()),
            ..Get::default()
        };

        sthree
            .objects("photos")
            .get("img.png", Some(&config))
            .await
            .expect("get should succeed");
        let from_root = recorded_get(&client);

        sthree
            .buckets()
            .objects("photos")
            .get("img.png", Some(&config))
            .await
            .expect("get should succeed");
        let from_buckets = recorded_get(&client);

        sthree
            .bucket("photos")
            .objects()
            .get("img.png", Some(&config))
            .await
            .expect("get should succeed");
        let from_bucket = recorded_get(&client);

        assert_eq!(from_root, from_buckets);
        assert_eq!(from_root, from_bucket);
    }

    #[tokio::test]
    async fn test_with_presence_reaches_facades() {
        let client = Arc::new(MockStorageClient::new());
        let sthree = Sthree::new(client.clone()).with_presence(Presence::OmitBlank);
        let config = Get {
            range: Some(String::new()),
            ..Get::default()
        };

        sthree
            .objects("photos")
            .get("img.png", Some(&config))
            .await
            .expect("get should succeed");

        assert_eq!(sthree.presence(), Presence::OmitBlank);
        assert_eq!(recorded_get(&client).get_range(), &None);
    }

    #[test]
    fn test_facades_carry_scope() {
        let sthree = Sthree::new(Arc::new(MockStorageClient::new()));

        assert_eq!(sthree.bucket("photos").name(), "photos");
        assert_eq!(sthree.objects("videos").bucket(), "videos");
        assert_eq!(sthree.requests("docs").bucket(), "docs");
        assert_eq!(sthree.presence(), Presence::Explicit);
    }

    #[test]
    fn test_connect_takes_presence_from_config() {
        let sdk_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .build();
        let config = ClientConfig {
            region: Some("us-east-1".to_string()),
            presence: Presence::OmitBlank,
            ..ClientConfig::default()
        };

        let sthree = Sthree::connect(&sdk_config, &config);

        assert_eq!(sthree.presence(), Presence::OmitBlank);
    }
}

// Not every helper is used in every test, so we allow dead code
#![allow(dead_code)]

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use sthree::{ClientConfig, Sthree};

pub const LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
pub const LOCALSTACK_REGION: &str = "us-east-1";

/// Load test environment variables and initialize tracing
pub fn setup_test_env() {
    dotenvy::from_path(".env.example").ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Unique bucket name so parallel tests never collide
pub fn unique_bucket_name() -> String {
    format!("sthree-test-{}", uuid::Uuid::new_v4())
}

/// Client pointed at `LocalStack` with hardcoded test credentials
pub async fn localstack_client() -> Sthree {
    setup_test_env();

    let config = ClientConfig {
        region: Some(LOCALSTACK_REGION.to_string()),
        endpoint_url: Some(LOCALSTACK_ENDPOINT.to_string()),
        force_path_style: true,
        ..ClientConfig::default()
    };

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(LOCALSTACK_REGION))
        .credentials_provider(Credentials::from_keys("test", "test", None))
        .endpoint_url(LOCALSTACK_ENDPOINT)
        .load()
        .await;

    Sthree::connect(&sdk_config, &config)
}

/// A freshly created bucket that the test owns
pub struct TestBucket {
    pub sthree: Sthree,
    pub name: String,
}

impl TestBucket {
    pub async fn new() -> Self {
        let sthree = localstack_client().await;
        let name = unique_bucket_name();

        sthree
            .buckets()
            .create(&name, None)
            .await
            .expect("Failed to create test bucket");

        Self { sthree, name }
    }

    /// Deletes every object and then the bucket itself
    pub async fn cleanup(self) {
        let objects = self.sthree.objects(&self.name);
        let listing = objects.list(None).await.expect("Failed to list objects");

        for object in listing.contents() {
            if let Some(key) = object.key() {
                objects
                    .delete(key, None)
                    .await
                    .expect("Failed to delete object");
            }
        }

        self.sthree
            .buckets()
            .delete(&self.name)
            .await
            .expect("Failed to delete test bucket");
    }
}

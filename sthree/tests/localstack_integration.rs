mod common;

use std::{collections::HashMap, time::Duration};

use aws_sdk_s3::primitives::ByteStream;
use common::*;
use pretty_assertions::assert_eq;
use sthree::{
    body,
    bucket::{Cors, CorsRule},
    buckets::CreateBucket,
    objects::{Get, List, Put},
};

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_bucket_lifecycle() {
    let sthree = localstack_client().await;
    let name = unique_bucket_name();
    let config = CreateBucket {
        object_ownership: Some("BucketOwnerEnforced".to_string()),
        ..CreateBucket::default()
    };

    sthree
        .buckets()
        .create(&name, Some(&config))
        .await
        .expect("create should succeed");

    let listed = sthree.buckets().list().await.expect("list should succeed");
    assert!(listed
        .buckets()
        .iter()
        .any(|bucket| bucket.name() == Some(name.as_str())));

    sthree
        .buckets()
        .delete(&name)
        .await
        .expect("delete should succeed");
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_put_get_roundtrip_with_metadata() {
    let bucket = TestBucket::new().await;
    let objects = bucket.sthree.objects(&bucket.name);
    let config = Put {
        content_type: Some("text/plain".to_string()),
        metadata: HashMap::from([
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]),
        ..Put::default()
    };

    objects
        .put("notes/hello.txt", ByteStream::from_static(b"hello"), Some(&config))
        .await
        .expect("put should succeed");

    let object = objects
        .get("notes/hello.txt", None)
        .await
        .expect("get should succeed");
    assert_eq!(object.content_type(), Some("text/plain"));
    assert_eq!(object.metadata().and_then(|m| m.get("a")).map(String::as_str), Some("1"));
    let bytes = object
        .body
        .collect()
        .await
        .expect("body should read")
        .into_bytes();
    assert_eq!(&bytes[..], b"hello");

    bucket.cleanup().await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_get_with_range() {
    let bucket = TestBucket::new().await;
    let objects = bucket.sthree.objects(&bucket.name);

    objects
        .put("digits.txt", ByteStream::from_static(b"0123456789"), None)
        .await
        .expect("put should succeed");

    let config = Get {
        range: Some("bytes=2-4".to_string()),
        ..Get::default()
    };
    let object = objects
        .get("digits.txt", Some(&config))
        .await
        .expect("ranged get should succeed");
    let bytes = object
        .body
        .collect()
        .await
        .expect("body should read")
        .into_bytes();
    assert_eq!(&bytes[..], b"234");

    bucket.cleanup().await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_list_with_prefix_and_page_size() {
    let bucket = TestBucket::new().await;
    let objects = bucket.sthree.objects(&bucket.name);

    for key in ["a/1.txt", "a/2.txt", "a/3.txt", "b/1.txt"] {
        objects
            .upload(key, ByteStream::from_static(b"x"), None)
            .await
            .expect("upload should succeed");
    }

    let config = List {
        prefix: Some("a/".to_string()),
        max_keys: Some(2),
        ..List::default()
    };
    let page = objects
        .list(Some(&config))
        .await
        .expect("list should succeed");

    assert_eq!(page.contents().len(), 2);
    assert_eq!(page.is_truncated(), Some(true));

    let everything = objects.list(None).await.expect("list should succeed");
    assert_eq!(everything.contents().len(), 4);

    bucket.cleanup().await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_json_body_upload() {
    let bucket = TestBucket::new().await;
    let objects = bucket.sthree.objects(&bucket.name);
    let payload = serde_json::json!({ "name": "img.png", "size": 1024 });
    let config = Put {
        content_type: Some("application/json".to_string()),
        ..Put::default()
    };

    objects
        .put(
            "meta.json",
            body::json(&payload).expect("payload should encode"),
            Some(&config),
        )
        .await
        .expect("put should succeed");

    let object = objects
        .get("meta.json", None)
        .await
        .expect("get should succeed");
    let bytes = object
        .body
        .collect()
        .await
        .expect("body should read")
        .into_bytes();
    let decoded: serde_json::Value = serde_json::from_slice(&bytes).expect("valid JSON");
    assert_eq!(decoded, payload);

    bucket.cleanup().await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_set_cors() {
    let bucket = TestBucket::new().await;
    let config = Cors {
        rules: vec![
            CorsRule {
                allowed_methods: vec!["GET".to_string(), "PUT".to_string()],
                allowed_origins: vec!["https://example.com".to_string()],
                allowed_headers: vec!["*".to_string()],
                max_age_seconds: Some(3000),
                ..CorsRule::default()
            },
            CorsRule {
                allowed_methods: vec!["GET".to_string()],
                allowed_origins: vec!["*".to_string()],
                ..CorsRule::default()
            },
        ],
        ..Cors::default()
    };

    bucket
        .sthree
        .bucket(&bucket.name)
        .set_cors(&config)
        .await
        .expect("set_cors should succeed");

    bucket.cleanup().await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_presigned_get_points_at_endpoint() {
    let bucket = TestBucket::new().await;

    let presigned = bucket
        .sthree
        .requests(&bucket.name)
        .presign_get("img.png", Duration::from_secs(180), None)
        .await
        .expect("presign should succeed");

    assert_eq!(presigned.method(), "GET");
    assert!(presigned.uri().contains("localhost:4566"));
    assert!(presigned.uri().contains("img.png"));

    bucket.cleanup().await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_missing_object_error_passes_through() {
    let bucket = TestBucket::new().await;

    let err = bucket
        .sthree
        .objects(&bucket.name)
        .get("missing.png", None)
        .await
        .expect_err("missing object should fail");

    assert!(err
        .as_service_error()
        .is_some_and(aws_sdk_s3::operation::get_object::GetObjectError::is_no_such_key));

    bucket.cleanup().await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_from_env_reaches_localstack() {
    setup_test_env();

    let sthree = sthree::Sthree::from_env()
        .await
        .expect("environment should be valid");

    sthree
        .buckets()
        .list()
        .await
        .expect("list should succeed");
}

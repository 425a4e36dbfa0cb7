use aws_sdk_s3::{
    error::BuildError,
    operation::put_bucket_cors::{builders::PutBucketCorsInputBuilder, PutBucketCorsInput},
    types::{ChecksumAlgorithm, CorsConfiguration, CorsRule as WireCorsRule},
};
use serde::{Deserialize, Serialize};

use crate::request::RequestBuilder;

/// CORS configuration for a bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Cors {
    /// Rules in matching order; the service uses the first rule that matches
    pub rules: Vec<CorsRule>,
    /// Checksum algorithm used for the request payload
    pub checksum_algorithm: Option<String>,
    /// Base64 MD5 digest of the request payload
    pub content_md5: Option<String>,
    /// Account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
}

/// A single cross-origin access rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CorsRule {
    /// Rule identifier
    pub id: Option<String>,
    /// Headers allowed in preflight `Access-Control-Request-Headers`
    pub allowed_headers: Vec<String>,
    /// Allowed HTTP methods
    pub allowed_methods: Vec<String>,
    /// Allowed origins
    pub allowed_origins: Vec<String>,
    /// Response headers exposed to the browser
    pub expose_headers: Vec<String>,
    /// Seconds the browser may cache the preflight response
    pub max_age_seconds: Option<i32>,
}

impl RequestBuilder {
    /// Builds the `PutBucketCors` request for `bucket`
    ///
    /// The rules container is always sent, even when empty, and so are the
    /// allowed origins and methods of every rule; optional header lists are
    /// only sent when non-empty.
    ///
    /// # Errors
    ///
    /// Returns the SDK's `BuildError` if a required CORS member is missing,
    /// which cannot happen for requests built here
    pub fn put_bucket_cors(
        &self,
        bucket: &str,
        config: &Cors,
    ) -> Result<PutBucketCorsInputBuilder, BuildError> {
        let p = self.presence();

        let rules = config
            .rules
            .iter()
            .map(|rule| self.cors_rule(rule))
            .collect::<Result<Vec<_>, _>>()?;

        let configuration = CorsConfiguration::builder()
            .set_cors_rules(Some(rules))
            .build()?;

        Ok(PutBucketCorsInput::builder()
            .bucket(bucket)
            .cors_configuration(configuration)
            .set_checksum_algorithm(
                p.enumerated::<ChecksumAlgorithm>(config.checksum_algorithm.as_ref()),
            )
            .set_content_md5(p.string(config.content_md5.as_ref()))
            .set_expected_bucket_owner(p.string(config.expected_bucket_owner.as_ref())))
    }

    fn cors_rule(&self, rule: &CorsRule) -> Result<WireCorsRule, BuildError> {
        let p = self.presence();

        WireCorsRule::builder()
            .set_id(p.string(rule.id.as_ref()))
            .set_allowed_headers(non_empty(&rule.allowed_headers))
            .set_allowed_methods(Some(rule.allowed_methods.clone()))
            .set_allowed_origins(Some(rule.allowed_origins.clone()))
            .set_expose_headers(non_empty(&rule.expose_headers))
            .set_max_age_seconds(p.keep(rule.max_age_seconds))
            .build()
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presence::Presence;
    use pretty_assertions::assert_eq;

    fn rule(id: &str, origin: &str) -> CorsRule {
        CorsRule {
            id: Some(id.to_string()),
            allowed_methods: vec!["GET".to_string()],
            allowed_origins: vec![origin.to_string()],
            ..CorsRule::default()
        }
    }

    #[test]
    fn test_cors_rules_keep_order() {
        let config = Cors {
            rules: vec![
                rule("r1", "https://a.example"),
                rule("r2", "https://b.example"),
                rule("r3", "https://c.example"),
            ],
            ..Cors::default()
        };

        let request = RequestBuilder::default()
            .put_bucket_cors("photos", &config)
            .expect("request should build");

        let rules = request
            .get_cors_configuration()
            .as_ref()
            .expect("configuration should be present")
            .cors_rules();
        let ids: Vec<_> = rules.iter().filter_map(WireCorsRule::id).collect();
        let origins: Vec<_> = rules
            .iter()
            .map(|r| r.allowed_origins().to_vec())
            .collect();

        assert_eq!(ids, vec!["r1", "r2", "r3"]);
        assert_eq!(
            origins,
            vec![
                vec!["https://a.example".to_string()],
                vec!["https://b.example".to_string()],
                vec!["https://c.example".to_string()],
            ]
        );
    }

    #[test]
    fn test_cors_rule_fields() {
        let config = Cors {
            rules: vec![CorsRule {
                id: None,
                allowed_headers: vec!["*".to_string()],
                allowed_methods: vec!["PUT".to_string(), "POST".to_string()],
                allowed_origins: vec!["*".to_string()],
                expose_headers: Vec::new(),
                max_age_seconds: Some(3600),
            }],
            expected_bucket_owner: Some("111122223333".to_string()),
            ..Cors::default()
        };

        let request = RequestBuilder::default()
            .put_bucket_cors("photos", &config)
            .expect("request should build");
        let wire = &request
            .get_cors_configuration()
            .as_ref()
            .expect("configuration should be present")
            .cors_rules()[0];

        assert_eq!(request.get_bucket().as_deref(), Some("photos"));
        assert_eq!(
            request.get_expected_bucket_owner().as_deref(),
            Some("111122223333")
        );
        assert_eq!(request.get_checksum_algorithm(), &None);
        assert_eq!(wire.id, None);
        assert_eq!(wire.allowed_headers, Some(vec!["*".to_string()]));
        assert_eq!(wire.allowed_methods, vec!["PUT".to_string(), "POST".to_string()]);
        assert_eq!(wire.expose_headers, None);
        assert_eq!(wire.max_age_seconds, Some(3600));
    }

    #[test]
    fn test_cors_without_rules_sends_empty_container() {
        let request = RequestBuilder::default()
            .put_bucket_cors("photos", &Cors::default())
            .expect("request should build");

        let configuration = request
            .get_cors_configuration()
            .as_ref()
            .expect("configuration should be present");

        assert!(configuration.cors_rules().is_empty());
    }

    #[test]
    fn test_cors_omit_blank_drops_zero_max_age() {
        let config = Cors {
            rules: vec![CorsRule {
                max_age_seconds: Some(0),
                ..rule("r1", "*")
            }],
            ..Cors::default()
        };

        let request = RequestBuilder::new(Presence::OmitBlank)
            .put_bucket_cors("photos", &config)
            .expect("request should build");
        let wire = &request
            .get_cors_configuration()
            .as_ref()
            .expect("configuration should be present")
            .cors_rules()[0];

        assert_eq!(wire.max_age_seconds, None);
    }
}

//! Client configuration and AWS SDK setup

use std::{env, str::FromStr, time::Duration};

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, SdkConfig};
use aws_sdk_s3::config::Region;
use thiserror::Error;

use crate::presence::{Presence, UnknownPresence};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while reading configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be used
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue {
        /// Name of the offending variable
        var: &'static str,
        /// The raw value found
        value: String,
    },

    /// `STHREE_PRESENCE` names no known policy
    #[error("Invalid value for STHREE_PRESENCE: {0}")]
    InvalidPresence(#[from] UnknownPresence),
}

/// Settings applied to the underlying S3 client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Region override; the default provider chain decides when unset
    pub region: Option<String>,
    /// Endpoint override, e.g. `http://localhost:4566` for `LocalStack`
    pub endpoint_url: Option<String>,
    /// Address buckets as `endpoint/bucket` instead of `bucket.endpoint`
    pub force_path_style: bool,
    /// Total attempts per operation, including the first
    pub max_attempts: u32,
    /// Backoff before the first retry
    pub initial_backoff: Duration,
    /// Upper bound on a whole operation including retries
    pub operation_timeout: Duration,
    /// How set-but-zero configuration values are treated
    pub presence: Presence,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint_url: None,
            force_path_style: false,
            max_attempts: 3,
            initial_backoff: Duration::from_millis(50),
            operation_timeout: Duration::from_secs(30),
            presence: Presence::default(),
        }
    }
}

impl ClientConfig {
    /// Reads configuration from `STHREE_*` environment variables
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but cannot be parsed
    pub fn from_env() -> ConfigResult<Self> {
        let defaults = Self::default();

        let max_attempts = parse_var::<u32>("STHREE_MAX_ATTEMPTS")?.unwrap_or(defaults.max_attempts);
        if max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                var: "STHREE_MAX_ATTEMPTS",
                value: max_attempts.to_string(),
            });
        }

        Ok(Self {
            region: non_empty_var("STHREE_REGION"),
            endpoint_url: non_empty_var("STHREE_ENDPOINT_URL"),
            force_path_style: parse_flag("STHREE_FORCE_PATH_STYLE")?
                .unwrap_or(defaults.force_path_style),
            max_attempts,
            initial_backoff: defaults.initial_backoff,
            operation_timeout: parse_var::<u64>("STHREE_OPERATION_TIMEOUT_SECS")?
                .map_or(defaults.operation_timeout, Duration::from_secs),
            presence: non_empty_var("STHREE_PRESENCE")
                .map(|value| value.parse::<Presence>())
                .transpose()?
                .unwrap_or(defaults.presence),
        })
    }

    fn retry_config(&self) -> RetryConfig {
        RetryConfig::standard()
            .with_max_attempts(self.max_attempts)
            .with_initial_backoff(self.initial_backoff)
    }

    fn timeout_config(&self) -> TimeoutConfig {
        TimeoutConfig::builder()
            .operation_timeout(self.operation_timeout)
            .build()
    }

    /// Loads the shared AWS configuration with these retry and timeout settings
    pub async fn sdk_config(&self) -> SdkConfig {
        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(self.retry_config())
            .timeout_config(self.timeout_config());

        if let Some(region) = &self.region {
            config_builder = config_builder.region(Region::new(region.clone()));
        }

        if let Some(endpoint_url) = &self.endpoint_url {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// S3 service configuration derived from `sdk_config` with these settings on top
    #[must_use]
    pub fn s3_config(&self, sdk_config: &SdkConfig) -> aws_sdk_s3::Config {
        let s3_config: aws_sdk_s3::Config = sdk_config.into();
        let mut builder = s3_config.to_builder();

        builder.set_retry_config(Some(self.retry_config()));
        builder.set_timeout_config(Some(self.timeout_config()));

        if let Some(region) = &self.region {
            builder.set_region(Some(Region::new(region.clone())));
        }

        if let Some(endpoint_url) = &self.endpoint_url {
            builder.set_endpoint_url(Some(endpoint_url.clone()));
        }

        // Required by LocalStack and most S3-compatible stores
        // https://github.com/awslabs/aws-sdk-rust/discussions/874
        if self.force_path_style {
            builder.set_force_path_style(Some(true));
        }

        builder.build()
    }
}

fn non_empty_var(var: &'static str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

fn parse_var<T: FromStr>(var: &'static str) -> ConfigResult<Option<T>> {
    non_empty_var(var)
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidValue { var, value })
        })
        .transpose()
}

fn parse_flag(var: &'static str) -> ConfigResult<Option<bool>> {
    non_empty_var(var)
        .map(|value| match value.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue { var, value }),
        })
        .transpose()
}

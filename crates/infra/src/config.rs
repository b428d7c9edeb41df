//! Runtime configuration read from the environment.

use thiserror::Error;

use catalog_observability::{LogFormat, TracingConfig, UnknownLogFormat};

pub const DEFAULT_PAGE_SIZE_VAR: &str = "CATALOG_DEFAULT_PAGE_SIZE";
pub const MAX_PAGE_SIZE_VAR: &str = "CATALOG_MAX_PAGE_SIZE";
pub const IMAGE_BASE_LOCATION_VAR: &str = "CATALOG_IMAGE_BASE_LOCATION";
pub const LOG_FORMAT_VAR: &str = "CATALOG_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must not be blank")]
    Blank { key: &'static str },

    #[error("{key}: {source}")]
    InvalidLogFormat {
        key: &'static str,
        #[source]
        source: UnknownLogFormat,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
    /// Prefix of every stored image location.
    pub image_base_location: String,
    pub log_format: LogFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            image_base_location: "images".to_string(),
            log_format: LogFormat::Json,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys take their default;
    /// malformed ones are logged and also take their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut config = Self {
            default_page_size: setting(
                &lookup,
                DEFAULT_PAGE_SIZE_VAR,
                parse_page_size,
                defaults.default_page_size,
            ),
            max_page_size: setting(
                &lookup,
                MAX_PAGE_SIZE_VAR,
                parse_page_size,
                defaults.max_page_size,
            ),
            image_base_location: setting(
                &lookup,
                IMAGE_BASE_LOCATION_VAR,
                parse_location,
                defaults.image_base_location,
            ),
            log_format: setting(&lookup, LOG_FORMAT_VAR, parse_log_format, defaults.log_format),
        };

        if config.default_page_size > config.max_page_size {
            tracing::warn!(
                default_page_size = config.default_page_size,
                max_page_size = config.max_page_size,
                "default page size exceeds the maximum, capping it"
            );
            config.default_page_size = config.max_page_size;
        }
        config
    }

    pub fn tracing(&self) -> TracingConfig {
        TracingConfig {
            format: self.log_format,
            ..TracingConfig::default()
        }
    }
}

fn setting<T, F, P>(lookup: &F, key: &'static str, parse: P, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&'static str, &str) -> Result<T, ConfigError>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match parse(key, &raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring invalid setting, using default");
            default
        }
    }
}

fn parse_page_size(key: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        }),
    }
}

fn parse_location(key: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Blank { key });
    }
    Ok(trimmed.to_string())
}

fn parse_log_format(key: &'static str, raw: &str) -> Result<LogFormat, ConfigError> {
    raw.parse()
        .map_err(|source| ConfigError::InvalidLogFormat { key, source })
}

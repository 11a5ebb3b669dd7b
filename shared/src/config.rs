use std::env;

use zipper_atoms::archive::InlineEncoding;
use zipper_atoms::bundle::BundleSettings;
use zipper_atoms::publish::{PublishTarget, DEFAULT_KEY_PREFIX};
use zipper_atoms::request::SourceMode;

pub const IMAGE_BUCKET: &str = "IMAGE_BUCKET";
pub const AWS_REGION: &str = "AWS_REGION";
pub const FETCH_CONCURRENCY: &str = "FETCH_CONCURRENCY";
pub const INLINE_ENCODING: &str = "INLINE_ENCODING";
pub const KEY_PREFIX: &str = "KEY_PREFIX";

/// Deployment configuration, read once per cold start.
///
/// Credentials are deliberately absent: the S3 client picks them up from the
/// default provider chain (execution role or environment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bucket: String,
    pub region: String,
    pub fetch_concurrency: usize,
    pub inline_encoding: InlineEncoding,
    pub key_prefix: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| format!("{} must be set", name))
        };

        let bucket = required(IMAGE_BUCKET)?;
        let region = required(AWS_REGION)?;

        let fetch_concurrency = match lookup(FETCH_CONCURRENCY) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(format!(
                        "{} must be a positive integer, got '{}'",
                        FETCH_CONCURRENCY, raw
                    ))
                }
                Ok(n) => n,
            },
            None => 1,
        };

        let inline_encoding = match lookup(INLINE_ENCODING) {
            Some(raw) => raw.parse::<InlineEncoding>()?,
            None => InlineEncoding::default(),
        };

        let key_prefix = match lookup(KEY_PREFIX) {
            Some(raw) => parse_key_prefix(&raw)?,
            None => DEFAULT_KEY_PREFIX.to_string(),
        };

        Ok(Self {
            bucket,
            region,
            fetch_concurrency,
            inline_encoding,
            key_prefix,
        })
    }

    pub fn publish_target(&self) -> PublishTarget {
        PublishTarget::new(self.bucket.clone(), self.region.clone())
            .with_key_prefix(self.key_prefix.clone())
    }

    pub fn bundle_settings(&self, mode: SourceMode) -> BundleSettings {
        BundleSettings {
            mode,
            target: self.publish_target(),
            fetch_concurrency: self.fetch_concurrency,
        }
    }
}

/// Prefixes end up verbatim in the public URL, so only unreserved URL
/// characters and `/` are allowed.
fn parse_key_prefix(raw: &str) -> Result<String, String> {
    let prefix = raw.trim();
    if prefix.is_empty() {
        return Err(format!("{} must not be empty", KEY_PREFIX));
    }
    if let Some(bad) = prefix
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '/')))
    {
        return Err(format!(
            "{} contains '{}', only [A-Za-z0-9-_.~/] are allowed",
            KEY_PREFIX, bad
        ));
    }
    Ok(prefix.to_string())
}

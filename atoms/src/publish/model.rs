use chrono::{DateTime, Utc};

pub const DEFAULT_KEY_PREFIX: &str = "images_";
pub const KEY_SUFFIX: &str = ".zip";
const KEY_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Where archives are published. Comes from configuration, never from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub bucket: String,
    pub region: String,
    pub key_prefix: String,
}

impl PublishTarget {
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedArtifact {
    pub key: String,
    pub url: String,
}

/// `<prefix><YYYYMMDDHHMMSS>_<token>.zip`
///
/// The token keeps two uploads finishing in the same second from
/// overwriting each other.
pub fn object_key(prefix: &str, now: DateTime<Utc>, token: &str) -> String {
    format!(
        "{}{}_{}{}",
        prefix,
        now.format(KEY_TIMESTAMP_FORMAT),
        token,
        KEY_SUFFIX
    )
}

/// Eight lowercase hex characters from a fresh v4 UUID.
pub fn unique_token() -> String {
    let mut token = uuid::Uuid::new_v4().simple().to_string();
    token.truncate(8);
    token
}

/// The key is inserted as-is; configured prefixes are restricted to URL-safe
/// characters and the rest of the key is digits, hex and `_`.
pub fn public_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
}

use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client as S3Client;

use crate::config::AppConfig;
use crate::storage::S3ArchiveStore;

/// Everything a handler needs, built once per cold start and shared via `Arc`.
pub struct AppState {
    pub config: AppConfig,
    pub store: S3ArchiveStore,
}

impl AppState {
    pub async fn from_env() -> Result<Self, String> {
        let config = AppConfig::from_env()?;
        Ok(Self::with_config(config).await)
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        let store = S3ArchiveStore::new(S3Client::new(&aws_config), config.bucket.clone());

        tracing::info!(
            "⚙️ Configured bucket={} region={} fetch_concurrency={} inline_encoding={:?}",
            config.bucket,
            config.region,
            config.fetch_concurrency,
            config.inline_encoding
        );

        Self { config, store }
    }
}

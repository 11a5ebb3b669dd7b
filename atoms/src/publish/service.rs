use std::future::Future;

use chrono::{DateTime, Utc};

use super::model::{object_key, public_url, unique_token, PublishTarget, PublishedArtifact};
use crate::archive::Archive;
use crate::error::ZipperError;

/// Object storage that accepts a whole archive in one call.
///
/// Implementations must store the object publicly readable.
pub trait ArchiveStore {
    fn put_archive(
        &self,
        key: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<(), String>> + Send;
}

/// Upload `archive` under a fresh key and return where it can be fetched.
pub async fn publish_archive<S>(
    store: &S,
    target: &PublishTarget,
    archive: Archive,
) -> Result<PublishedArtifact, ZipperError>
where
    S: ArchiveStore + Sync,
{
    publish_archive_at(store, target, archive, Utc::now(), &unique_token()).await
}

pub async fn publish_archive_at<S>(
    store: &S,
    target: &PublishTarget,
    archive: Archive,
    now: DateTime<Utc>,
    token: &str,
) -> Result<PublishedArtifact, ZipperError>
where
    S: ArchiveStore + Sync,
{
    let key = object_key(&target.key_prefix, now, token);

    tracing::info!(
        "☁️ Uploading {} ({} bytes, {} entries) to bucket {}",
        key,
        archive.size(),
        archive.entry_count(),
        target.bucket
    );

    store
        .put_archive(&key, archive.into_bytes())
        .await
        .map_err(ZipperError::Publish)?;

    let url = public_url(&target.bucket, &target.region, &key);
    tracing::info!("✅ Archive published at {}", url);

    Ok(PublishedArtifact { key, url })
}

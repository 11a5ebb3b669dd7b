use crate::archive::{build_archive, ImageResolver};
use crate::error::ZipperError;
use crate::publish::{publish_archive, ArchiveStore, PublishTarget, PublishedArtifact};
use crate::request::{decode_sources, SourceMode};

/// Per-deployment settings for the decode → build → publish pipeline.
#[derive(Debug, Clone)]
pub struct BundleSettings {
    pub mode: SourceMode,
    pub target: PublishTarget,
    pub fetch_concurrency: usize,
}

/// Decode the body, build the archive and publish it.
/// Nothing reaches the store unless every source resolved.
pub async fn zip_and_publish<R, S>(
    settings: &BundleSettings,
    resolver: &R,
    store: &S,
    body: &[u8],
) -> Result<PublishedArtifact, ZipperError>
where
    R: ImageResolver + Sync,
    S: ArchiveStore + Sync,
{
    let sources = decode_sources(settings.mode, body)?;
    let archive = build_archive(resolver, &sources, settings.fetch_concurrency).await?;
    publish_archive(store, &settings.target, archive).await
}

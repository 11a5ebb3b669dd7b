use std::future::Future;
use std::io::{Cursor, Write};
use std::pin::pin;

use base64::Engine;
use futures::stream::{self, StreamExt};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::model::{Archive, ImageEntry, InlineEncoding};
use crate::error::ZipperError;

/// Turns one request string into image bytes.
///
/// Errors are plain cause strings; the builder wraps them into
/// `ZipperError::Fetch` with the entry index.
pub trait ImageResolver {
    fn resolve(
        &self,
        index: usize,
        source: &str,
    ) -> impl Future<Output = Result<Vec<u8>, String>> + Send;
}

/// Resolver for inline mode. No I/O happens here.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineResolver {
    pub encoding: InlineEncoding,
}

impl InlineResolver {
    pub fn new(encoding: InlineEncoding) -> Self {
        Self { encoding }
    }

    pub fn decode(&self, source: &str) -> Result<Vec<u8>, String> {
        match self.encoding {
            InlineEncoding::Raw => Ok(source.as_bytes().to_vec()),
            InlineEncoding::Base64 => base64::engine::general_purpose::STANDARD
                .decode(source)
                .map_err(|e| format!("invalid base64 image data: {}", e)),
        }
    }
}

impl ImageResolver for InlineResolver {
    async fn resolve(&self, _index: usize, source: &str) -> Result<Vec<u8>, String> {
        self.decode(source)
    }
}

/// In-memory ZIP writer: open, append entries, finish. Cannot be reopened.
pub struct ArchiveWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    entry_count: usize,
}

impl ArchiveWriter {
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            entry_count: 0,
        }
    }

    pub fn append(&mut self, entry: &ImageEntry) -> Result<(), ZipperError> {
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip.start_file(entry.name(), options).map_err(|e| {
            ZipperError::Archive(format!(
                "error creating zip entry for image {}: {}",
                entry.index, e
            ))
        })?;
        self.zip.write_all(&entry.bytes).map_err(|e| {
            ZipperError::Archive(format!(
                "error writing image {} to zip: {}",
                entry.index, e
            ))
        })?;
        self.entry_count += 1;
        Ok(())
    }

    /// Writes the central directory and hands back the finished buffer.
    pub fn finish(mut self) -> Result<Archive, ZipperError> {
        let cursor = self
            .zip
            .finish()
            .map_err(|e| ZipperError::Archive(format!("error closing zip writer: {}", e)))?;
        Ok(Archive::new(cursor.into_inner(), self.entry_count))
    }
}

impl Default for ArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve every source and pack it into a finalized archive.
///
/// Up to `concurrency` resolutions are in flight at once (minimum 1), but
/// entries are always written in input order. The first failure aborts the
/// build and drops whatever was written so far.
pub async fn build_archive<R>(
    resolver: &R,
    sources: &[String],
    concurrency: usize,
) -> Result<Archive, ZipperError>
where
    R: ImageResolver + Sync,
{
    let mut writer = ArchiveWriter::new();

    // Owned sources keep the stream future Send for any borrow of `sources`.
    let mut resolved = pin!(stream::iter(sources.iter().cloned().enumerate())
        .map(|(index, source)| async move {
            resolver
                .resolve(index, &source)
                .await
                .map(|bytes| ImageEntry { index, bytes })
                .map_err(|cause| ZipperError::Fetch { index, cause })
        })
        .buffered(concurrency.max(1)));

    while let Some(entry) = resolved.next().await {
        let entry = entry?;
        tracing::debug!("🖼️ Appending {} ({} bytes)", entry.name(), entry.bytes.len());
        writer.append(&entry)?;
    }

    let archive = writer.finish()?;
    tracing::info!(
        "🗜️ Built archive with {} entries ({} bytes)",
        archive.entry_count(),
        archive.size()
    );
    Ok(archive)
}

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client as S3Client;
use zipper_atoms::publish::ArchiveStore;

pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

/// Public-read archive uploads into one bucket.
#[derive(Debug, Clone)]
pub struct S3ArchiveStore {
    client: S3Client,
    bucket: String,
}

impl S3ArchiveStore {
    pub fn new(client: S3Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl ArchiveStore for S3ArchiveStore {
    async fn put_archive(&self, key: &str, body: Vec<u8>) -> Result<(), String> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .acl(ObjectCannedAcl::PublicRead)
            .content_type(ARCHIVE_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| format!("S3 put_object error: {}", DisplayErrorContext(&e)))?;

        Ok(())
    }
}

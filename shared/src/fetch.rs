use reqwest::Client;
use zipper_atoms::archive::ImageResolver;

/// Resolves URL-mode sources with a plain GET.
///
/// Transport defaults apply: no extra timeout, redirect or content-type
/// rules. Any non-2xx status is a failure.
#[derive(Debug, Clone, Default)]
pub struct HttpImageResolver {
    client: Client,
}

impl HttpImageResolver {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ImageResolver for HttpImageResolver {
    async fn resolve(&self, index: usize, source: &str) -> Result<Vec<u8>, String> {
        tracing::debug!("🌐 Fetching image {} from {}", index, source);

        let response = self
            .client
            .get(source)
            .send()
            .await
            .map_err(|e| format!("error fetching image {}: {}", index, e))?
            .error_for_status()
            .map_err(|e| format!("error fetching image {}: {}", index, e))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("error reading image {}: {}", index, e))?;

        Ok(bytes.to_vec())
    }
}

use lambda_http::Body;

use super::model::{ImageUrlsPayload, InlineImagesPayload, SourceMode};
use crate::error::ZipperError;

/// Raw bytes of a gateway body. An empty body decodes as an empty slice.
pub fn body_bytes(body: &Body) -> &[u8] {
    match body {
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
        Body::Empty => &[],
    }
}

/// Decode the ordered list of image sources for `mode`.
///
/// Anything other than a JSON object whose mode field is an array of
/// strings is a `BadRequest`. Unknown extra fields are ignored.
pub fn decode_sources(mode: SourceMode, body: &[u8]) -> Result<Vec<String>, ZipperError> {
    let sources = match mode {
        SourceMode::Url => serde_json::from_slice::<ImageUrlsPayload>(body)
            .map(|payload| payload.image_urls),
        SourceMode::Inline => serde_json::from_slice::<InlineImagesPayload>(body)
            .map(|payload| payload.images),
    }
    .map_err(|e| ZipperError::BadRequest(e.to_string()))?;

    tracing::info!(
        "📦 Decoded {} image source(s) from field {}",
        sources.len(),
        mode.field_name()
    );

    Ok(sources)
}

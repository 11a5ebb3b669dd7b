use serde::Deserialize;

/// How a deployment turns request strings into image bytes.
/// Fixed per Lambda, never chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Url,
    Inline,
}

impl SourceMode {
    /// JSON field that carries the source list in this mode
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Url => "imageUrls",
            Self::Inline => "images",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Inline => "inline",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageUrlsPayload {
    #[serde(rename = "imageUrls")]
    pub image_urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct InlineImagesPayload {
    pub images: Vec<String>,
}

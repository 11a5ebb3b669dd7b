use std::str::FromStr;

/// One resolved image, alive only until it is written into the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub index: usize,
    pub bytes: Vec<u8>,
}

impl ImageEntry {
    pub fn name(&self) -> String {
        entry_name(self.index)
    }
}

/// Entry names always use `.jpg`, whatever the payload actually is.
pub fn entry_name(index: usize) -> String {
    format!("image_{}.jpg", index)
}

/// A finalized ZIP file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    bytes: Vec<u8>,
    entry_count: usize,
}

impl Archive {
    pub(crate) fn new(bytes: Vec<u8>, entry_count: usize) -> Self {
        Self { bytes, entry_count }
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Size of the finished ZIP in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Contract for inline image strings. One encoding is active per deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InlineEncoding {
    /// The UTF-8 bytes of the string are the image.
    #[default]
    Raw,
    /// The string is standard-alphabet base64 with padding.
    Base64,
}

impl FromStr for InlineEncoding {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "base64" => Ok(Self::Base64),
            other => Err(format!(
                "unknown inline encoding '{}', expected 'raw' or 'base64'",
                other
            )),
        }
    }
}

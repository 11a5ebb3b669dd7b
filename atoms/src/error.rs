use lambda_http::http::StatusCode;
use thiserror::Error;

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const ERROR_CREATING_ZIP: &str = "Error creating zip file";
pub const ERROR_UPLOADING: &str = "Error uploading to S3";

/// Every way a zip request can fail.
///
/// The carried text is the cause and is only ever logged. Callers get the
/// fixed message from [`ZipperError::public_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZipperError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("error fetching image {index}: {cause}")]
    Fetch { index: usize, cause: String },

    #[error("archive error: {0}")]
    Archive(String),

    #[error("error uploading to S3: {0}")]
    Publish(String),
}

impl ZipperError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Fetch { .. } | Self::Archive(_) | Self::Publish(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Fetch and archive failures share one message.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => INVALID_REQUEST_BODY,
            Self::Fetch { .. } | Self::Archive(_) => ERROR_CREATING_ZIP,
            Self::Publish(_) => ERROR_UPLOADING,
        }
    }
}

// Re-export model types and service functions
pub mod model;
pub mod service;

pub use model::{
    object_key, public_url, unique_token, PublishTarget, PublishedArtifact, DEFAULT_KEY_PREFIX,
    KEY_SUFFIX,
};
pub use service::*;

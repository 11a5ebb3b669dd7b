//! AWS and HTTP plumbing shared by the zip Lambdas.

pub mod config;
pub mod fetch;
pub mod state;
pub mod storage;

pub use config::AppConfig;
pub use fetch::HttpImageResolver;
pub use state::AppState;
pub use storage::S3ArchiveStore;

// Re-export model types and service functions
pub mod model;
pub mod service;

pub use model::{entry_name, Archive, ImageEntry, InlineEncoding};
pub use service::*;

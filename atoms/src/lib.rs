//! Domain atoms for the image zipper: request decoding, archive building,
//! archive publishing and the HTTP pipeline that ties them together.
//!
//! Atoms never construct AWS or HTTP clients themselves. Collaborators are
//! passed in through the `ImageResolver` and `ArchiveStore` traits so each
//! Lambda decides how sources are resolved and where archives land.

pub mod archive;
pub mod bundle;
pub mod error;
pub mod publish;
pub mod request;

pub use error::ZipperError;

//! Image resources for solardocs documents.
//!
//! Records carry signatures, stamps and ID scans as inline data-URL blobs.
//! This crate resolves such sources to bytes through a [`ResourceProvider`],
//! decodes them into a form the PDF renderer can embed, and loads all images
//! of one document concurrently.
//!
//! ## Available Providers
//!
//! - [`InlineResourceProvider`]: data URLs and bare base64 payloads
//! - [`FilesystemResourceProvider`]: files below a base directory, with
//!   inline blobs still accepted

mod decode;
mod error;
mod filesystem;
mod inline;
mod loader;
mod provider;

pub use decode::{decode_image, DecodedImage, ImageData};
pub use error::ResourceError;
pub use filesystem::FilesystemResourceProvider;
pub use inline::{InlineImage, InlineResourceProvider};
pub use loader::{describe_source, load_images};
pub use provider::{ResourceProvider, SharedResourceData};

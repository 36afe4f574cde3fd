pub mod cli;
pub mod config;
pub mod error;
pub mod resolver;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
pub use resolver::{resolve_image_url, ImageResolver, ReferenceKind};

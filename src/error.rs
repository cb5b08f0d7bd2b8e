//! Error types for document generation.

use crate::render::RenderError;
use crate::resource::ResourceError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, DocError>;

/// Errors that can abort a single generation request.
///
/// Every variant is terminal for the request that produced it; nothing in the
/// crate retries.
#[derive(Error, Debug)]
pub enum DocError {
    /// Failed to write generated output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record file could not be read or did not match the schema
    #[error("failed to load record from {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    /// The record file extension is not a known structured format
    #[error("unsupported record format for {}; expected .json or .toml", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// An embedded resource (the company seal) could not be resolved
    #[error("failed to resolve {field} for {section} section: {source}")]
    Resource {
        section: &'static str,
        field: &'static str,
        #[source]
        source: ResourceError,
    },

    /// Opaque failure reported by the renderer
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A bundled locale catalog is malformed
    #[error("invalid locale catalog '{lang}': {message}")]
    Catalog { lang: String, message: String },
}

impl DocError {
    pub(crate) fn load(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        DocError::Load {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

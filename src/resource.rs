//! Resolution of embedded resources such as the company seal image.
//!
//! Composers never touch the filesystem directly; they ask a
//! [`ResourceProvider`] for bytes. A failed lookup is fatal for the
//! generation that asked for it.

use log::debug;
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Resource bytes, shared between the provider and the layout blocks.
pub type SharedResourceData = Arc<Vec<u8>>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },
}

/// Loads raw resource bytes by reference.
pub trait ResourceProvider: Debug {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;
}

/// Reads resources from disk with a plain synchronous read and no retry.
///
/// Relative references are resolved against the base directory, which is
/// normally the directory holding the record file. Absolute references are
/// used as given.
#[derive(Debug, Clone)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        FilesystemResourceProvider {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// A provider rooted next to the given record file.
    pub fn for_record<P: AsRef<Path>>(record_path: P) -> Self {
        let base = record_path
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        FilesystemResourceProvider::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base_path.join(candidate)
        }
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self.resolve(path);
        debug!("Reading resource {}", full_path.display());

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }
}

/// Pre-populated in-memory resources, handy for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceProvider {
    resources: HashMap<String, SharedResourceData>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.resources.insert(path.into(), Arc::new(bytes));
        self
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        self.resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }
}

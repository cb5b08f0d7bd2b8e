//! The renderer contract and a JSON renderer.
//!
//! Generation hands layout blocks to a [`Renderer`] in two phases: the header
//! rows are registered once, then body pages are added in order, then the
//! renderer is finished and returns the encoded output. Pagination, font
//! embedding and drawing are the renderer's concern.

use crate::layout::{Page, Row};
use log::debug;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Family name used when no custom family is configured.
pub const DEFAULT_FONT_FAMILY: &str = "default-font";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to encode document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("renderer I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render failed: {0}")]
    Other(String),
}

/// Font family plus optional per-style font files.
///
/// Absent paths mean the renderer's built-in font for that style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontConfig {
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold_italic: Option<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            family: DEFAULT_FONT_FAMILY.to_string(),
            normal: None,
            italic: None,
            bold: None,
            bold_italic: None,
        }
    }
}

impl FontConfig {
    pub fn uses_custom_fonts(&self) -> bool {
        self.normal.is_some()
            || self.italic.is_some()
            || self.bold.is_some()
            || self.bold_italic.is_some()
    }
}

/// A sink for composed layout blocks.
pub trait Renderer {
    /// Registers the rows repeated at the top of every page. Called once,
    /// before any page is added.
    fn register_header(&mut self, rows: &[Row]) -> Result<(), RenderError>;

    fn add_page(&mut self, page: Page) -> Result<(), RenderError>;

    /// Encodes everything received so far.
    fn finish(&mut self) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    fonts: &'a FontConfig,
    header: &'a [Row],
    pages: &'a [Page],
}

/// Writes the layout tree as pretty-printed JSON.
///
/// Useful for inspecting generated layouts and for feeding an external
/// drawing backend.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    fonts: FontConfig,
    header: Option<Vec<Row>>,
    pages: Vec<Page>,
}

impl JsonRenderer {
    pub fn new(fonts: FontConfig) -> Self {
        JsonRenderer {
            fonts,
            header: None,
            pages: Vec::new(),
        }
    }
}

impl Renderer for JsonRenderer {
    fn register_header(&mut self, rows: &[Row]) -> Result<(), RenderError> {
        if self.header.is_some() {
            return Err(RenderError::Other("header registered twice".to_string()));
        }
        debug!("Registering {} header rows", rows.len());
        self.header = Some(rows.to_vec());
        Ok(())
    }

    fn add_page(&mut self, page: Page) -> Result<(), RenderError> {
        debug!("Adding page with {} rows", page.rows().len());
        self.pages.push(page);
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>, RenderError> {
        let document = JsonDocument {
            fonts: &self.fonts,
            header: self.header.as_deref().unwrap_or_default(),
            pages: &self.pages,
        };
        let mut bytes = serde_json::to_vec_pretty(&document)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

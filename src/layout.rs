//! Renderer-agnostic layout blocks.
//!
//! A document body is a list of [`Row`]s. Each row holds [`Column`]s on a
//! 12-unit grid, and each column holds leaf [`Element`]s: styled text or raw
//! image bytes. Vertical positions (`top`) are offsets inside the row, in the
//! renderer's units.
//!
//! Blocks are built with consuming builder methods and expose only read
//! accessors afterwards, so nothing can change a block once it has been
//! handed to the assembler.

use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Width of the column grid every row is divided into.
pub const GRID_COLUMNS: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Color::rgb(0, 0, 0);
    pub const BLUE: Self = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Color::rgb(value, value, value)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Border {
    Bottom,
}

/// Cell decoration applied to a whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellStyle {
    pub border: Border,
    pub border_color: Color,
}

impl CellStyle {
    pub fn bottom_border(color: Color) -> Self {
        CellStyle {
            border: Border::Bottom,
            border_color: color,
        }
    }
}

/// Styling attributes of a text leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextProps {
    pub size: f32,
    pub top: f32,
    pub align: Align,
    pub style: FontStyle,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
}

impl TextProps {
    pub fn new(size: f32) -> Self {
        TextProps {
            size,
            top: 0.0,
            align: Align::Left,
            style: FontStyle::Normal,
            color: Color::BLACK,
            hyperlink: None,
        }
    }

    pub fn top(mut self, top: f32) -> Self {
        self.top = top;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    pub fn bold(mut self) -> Self {
        self.style = FontStyle::Bold;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn hyperlink(mut self, url: impl Into<String>) -> Self {
        self.hyperlink = Some(url.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    content: String,
    props: TextProps,
}

impl Text {
    pub fn new(content: impl Into<String>, props: TextProps) -> Self {
        Text {
            content: content.into(),
            props,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn props(&self) -> &TextProps {
        &self.props
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Recognizes the format from the leading magic bytes. Anything that is
    /// not JPEG is handed on as PNG.
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            ImageFormat::Jpeg
        } else {
            ImageFormat::Png
        }
    }
}

/// Placement of an image inside its column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectProps {
    /// Percentage of the column the image may occupy.
    pub percent: f32,
    pub left: f32,
    pub top: f32,
    pub center: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    #[serde(rename = "byte_len", serialize_with = "serialize_len")]
    bytes: Arc<Vec<u8>>,
    format: ImageFormat,
    rect: RectProps,
}

fn serialize_len<S: Serializer>(bytes: &Arc<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(bytes.len() as u64)
}

impl Image {
    pub fn new(bytes: Arc<Vec<u8>>, rect: RectProps) -> Self {
        let format = ImageFormat::sniff(&bytes);
        Image {
            bytes,
            format,
            rect,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn rect(&self) -> &RectProps {
        &self.rect
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    Text(Text),
    Image(Image),
}

impl Element {
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Element::Text(text) => Some(text),
            Element::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Element::Image(image) => Some(image),
            Element::Text(_) => None,
        }
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

impl From<Image> for Element {
    fn from(image: Image) -> Self {
        Element::Image(image)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    span: u8,
    elements: Vec<Element>,
}

impl Column {
    /// An empty column `span` grid units wide.
    pub fn new(span: u8) -> Self {
        Column {
            span,
            elements: Vec::new(),
        }
    }

    /// A column holding a single text leaf.
    pub fn text(span: u8, content: impl Into<String>, props: TextProps) -> Self {
        Column::new(span).add(Text::new(content, props))
    }

    pub fn add(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn extend<I>(mut self, elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.elements.extend(elements.into_iter().map(Into::into));
        self
    }

    pub fn span(&self) -> u8 {
        self.span
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<CellStyle>,
    columns: Vec<Column>,
}

impl Row {
    pub fn new(height: f32) -> Self {
        Row {
            height,
            style: None,
            columns: Vec::new(),
        }
    }

    /// A full-width row with one text leaf.
    pub fn text(height: f32, content: impl Into<String>, props: TextProps) -> Self {
        Row::new(height).add(Column::text(GRID_COLUMNS, content, props))
    }

    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn add(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn style(&self) -> Option<&CellStyle> {
        self.style.as_ref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Every text leaf in the row, left to right, top to bottom.
    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.columns
            .iter()
            .flat_map(|c| c.elements.iter())
            .filter_map(Element::as_text)
    }

    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.columns
            .iter()
            .flat_map(|c| c.elements.iter())
            .filter_map(Element::as_image)
    }
}

/// One page of body rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    rows: Vec<Row>,
}

impl Page {
    pub fn new(rows: Vec<Row>) -> Self {
        Page { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

//! # bizdoc
//!
//! Turns structured invoice and payment-statement records into localized,
//! renderer-agnostic layout blocks, and hands those blocks to a renderer.
//!
//! ## Design Principles
//!
//! - **Decimal money**: all amounts are `rust_decimal` values rounded to the
//!   currency's display precision (0 places for JPY, 2 otherwise)
//! - **Pure composers**: every section is a function of the record, its
//!   labels and the theme, returning immutable rows
//! - **Fixed order**: sections are concatenated in a fixed per-variant order
//! - **Fail whole**: a missing seal image or a render error aborts the
//!   generation; no partial document is produced
//!
//! ## Example
//!
//! ```no_run
//! use bizdoc::{record, Config, DocumentKind, FilesystemResourceProvider, Generator,
//!              JsonRenderer, Localizer};
//!
//! let record = record::load(DocumentKind::Invoice, "invoice.json").unwrap();
//! let localizer = Localizer::load().unwrap();
//! let config = Config::default().with_lang("ja");
//! let resources = FilesystemResourceProvider::for_record("invoice.json");
//!
//! let generator = Generator::new(&localizer, &config, &resources);
//! let mut renderer = JsonRenderer::new(config.fonts.clone());
//! let bytes = generator.generate(&record, &mut renderer).unwrap();
//! std::io::Write::write_all(&mut std::io::stdout(), &bytes).unwrap();
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod money;
pub mod record;
pub mod render;
pub mod resource;
pub mod sections;
pub mod style;

pub use config::{Config, Theme};
pub use document::{Document, Generator};
pub use error::{DocError, Result};
pub use i18n::Localizer;
pub use money::{Precision, TaxBreakdown};
pub use record::{DocumentKind, FinancialRecord, InvoiceRecord, PaymentStatementRecord};
pub use render::{FontConfig, JsonRenderer, RenderError, Renderer};
pub use resource::{
    FilesystemResourceProvider, InMemoryResourceProvider, ResourceError, ResourceProvider,
};

//! Document assembly.
//!
//! The [`Generator`] resolves labels for the configured language, runs the
//! section composers of the record's variant in their fixed order and hands
//! the result to a [`Renderer`]: header rows registered once, then the body
//! as a single page.

use crate::config::Config;
use crate::error::Result;
use crate::i18n::{InvoiceLabels, Localizer, StatementLabels};
use crate::layout::{Page, Row};
use crate::record::{DocumentKind, FinancialRecord, InvoiceRecord, PaymentStatementRecord};
use crate::render::Renderer;
use crate::resource::ResourceProvider;
use crate::sections;
use log::{debug, info};

/// A composed document, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    kind: DocumentKind,
    header: Vec<Row>,
    body: Page,
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Rows repeated at the top of every rendered page.
    pub fn header(&self) -> &[Row] {
        &self.header
    }

    pub fn body(&self) -> &Page {
        &self.body
    }
}

/// Composes documents from records.
///
/// Holds only shared, read-only collaborators; every call works on its own
/// record and returns its own blocks.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    localizer: &'a Localizer,
    config: &'a Config,
    resources: &'a dyn ResourceProvider,
}

impl<'a> Generator<'a> {
    pub fn new(
        localizer: &'a Localizer,
        config: &'a Config,
        resources: &'a dyn ResourceProvider,
    ) -> Self {
        Generator {
            localizer,
            config,
            resources,
        }
    }

    fn lang(&self) -> &str {
        self.localizer.effective_lang(&self.config.lang)
    }

    /// Composes every section of `record` in document order.
    pub fn assemble(&self, record: &FinancialRecord) -> Result<Document> {
        match record {
            FinancialRecord::Invoice(invoice) => self.assemble_invoice(invoice),
            FinancialRecord::PaymentStatement(statement) => self.assemble_statement(statement),
        }
    }

    /// Header, then bill-to, summary, details and payment instructions.
    pub fn assemble_invoice(&self, record: &InvoiceRecord) -> Result<Document> {
        let labels = InvoiceLabels::resolve(self.localizer, self.lang());
        let theme = &self.config.theme;

        let header = sections::invoice_header(record, &labels, theme, self.resources)?;
        let body = [
            sections::bill_to(&record.bill_to, &labels, theme),
            sections::invoice_summary(record, &labels, theme),
            sections::invoice_items(record, &labels, theme),
            sections::payment_instructions(&record.payment, &labels, theme),
        ]
        .concat();

        debug!(
            "Assembled invoice {}: {} header rows, {} body rows",
            record.base.id,
            header.len(),
            body.len()
        );
        Ok(Document {
            kind: DocumentKind::Invoice,
            header,
            body: Page::new(body),
        })
    }

    /// Header, then payer, payee, channel, summary and details.
    pub fn assemble_statement(&self, record: &PaymentStatementRecord) -> Result<Document> {
        let labels = StatementLabels::resolve(self.localizer, self.lang());
        let theme = &self.config.theme;

        let header = sections::statement_header(record, &labels, theme, self.resources)?;
        let body = [
            sections::payer(&record.payer, &labels, theme),
            sections::payee(&record.payee, &labels, theme),
            sections::channel(record, &labels, theme),
            sections::statement_summary(record, &labels, theme),
            sections::statement_items(record, &labels, theme),
        ]
        .concat();

        debug!(
            "Assembled payment statement {}: {} header rows, {} body rows",
            record.base.id,
            header.len(),
            body.len()
        );
        Ok(Document {
            kind: DocumentKind::PaymentStatement,
            header,
            body: Page::new(body),
        })
    }

    /// Assembles `record` and renders it. Nothing reaches the renderer when
    /// assembly fails.
    pub fn generate(&self, record: &FinancialRecord, renderer: &mut dyn Renderer) -> Result<Vec<u8>> {
        let document = self.assemble(record)?;
        info!("Rendering {} {}", document.kind, record.base().id);

        renderer.register_header(&document.header)?;
        renderer.add_page(document.body)?;
        Ok(renderer.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocError;
    use crate::render::{JsonRenderer, RenderError};
    use crate::resource::InMemoryResourceProvider;
    use crate::sections::fixtures;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn register_header(&mut self, rows: &[Row]) -> std::result::Result<(), RenderError> {
            self.calls.push(format!("header:{}", rows.len()));
            Ok(())
        }

        fn add_page(&mut self, page: Page) -> std::result::Result<(), RenderError> {
            self.calls.push(format!("page:{}", page.rows().len()));
            Ok(())
        }

        fn finish(&mut self) -> std::result::Result<Vec<u8>, RenderError> {
            self.calls.push("finish".to_string());
            Ok(b"done".to_vec())
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn register_header(&mut self, _rows: &[Row]) -> std::result::Result<(), RenderError> {
            Ok(())
        }

        fn add_page(&mut self, _page: Page) -> std::result::Result<(), RenderError> {
            Err(RenderError::Other("page too large".to_string()))
        }

        fn finish(&mut self) -> std::result::Result<Vec<u8>, RenderError> {
            Ok(Vec::new())
        }
    }

    fn first_texts(page: &Page) -> Vec<String> {
        page.rows()
            .iter()
            .filter_map(|row| row.texts().next())
            .map(|t| t.content().to_string())
            .collect()
    }

    #[test]
    fn test_invoice_section_order() {
        let localizer = Localizer::load().unwrap();
        let config = Config::default();
        let resources = InMemoryResourceProvider::new();
        let generator = Generator::new(&localizer, &config, &resources);

        let document = generator
            .assemble(&FinancialRecord::Invoice(fixtures::invoice()))
            .unwrap();
        assert_eq!(document.kind(), DocumentKind::Invoice);
        assert_eq!(document.header().len(), 2);

        let texts = first_texts(document.body());
        let position = |needle: &str| texts.iter().position(|t| t == needle).unwrap();
        assert!(position("BILL TO") < position("Summary"));
        assert!(position("Summary") < position("Details"));
        assert!(position("Details") < position("Payment Instructions"));
    }

    #[test]
    fn test_disabled_payment_is_omitted() {
        let localizer = Localizer::load().unwrap();
        let config = Config::default();
        let resources = InMemoryResourceProvider::new();
        let generator = Generator::new(&localizer, &config, &resources);

        let mut record = fixtures::invoice();
        record.payment.disabled = true;
        let document = generator.assemble_invoice(&record).unwrap();
        assert!(!first_texts(document.body()).contains(&"Payment Instructions".to_string()));
    }

    #[test]
    fn test_statement_section_order_in_japanese() {
        let localizer = Localizer::load().unwrap();
        let config = Config::default().with_lang("ja");
        let resources = InMemoryResourceProvider::new();
        let generator = Generator::new(&localizer, &config, &resources);

        let document = generator.assemble_statement(&fixtures::statement()).unwrap();
        assert_eq!(document.header().len(), 1);

        let texts = first_texts(document.body());
        let position = |needle: &str| texts.iter().position(|t| t == needle).unwrap();
        assert!(position("支払者") < position("受取人"));
        assert!(position("受取人") < position("支払経路"));
        assert!(position("支払経路") < position("概要"));
        assert!(position("概要") < position("明細"));
    }

    #[test]
    fn test_unknown_language_uses_english_labels() {
        let localizer = Localizer::load().unwrap();
        let config = Config::default().with_lang("fr");
        let resources = InMemoryResourceProvider::new();
        let generator = Generator::new(&localizer, &config, &resources);

        let document = generator.assemble_statement(&fixtures::statement()).unwrap();
        assert_eq!(first_texts(document.body())[0], "Payer");
    }

    #[test]
    fn test_generate_follows_two_phase_contract() {
        let localizer = Localizer::load().unwrap();
        let config = Config::default();
        let resources = InMemoryResourceProvider::new();
        let generator = Generator::new(&localizer, &config, &resources);
        let record = FinancialRecord::Invoice(fixtures::invoice());
        let body_rows = generator.assemble(&record).unwrap().body().rows().len();

        let mut renderer = RecordingRenderer::default();
        let bytes = generator.generate(&record, &mut renderer).unwrap();
        assert_eq!(bytes, b"done");
        assert_eq!(
            renderer.calls,
            vec![
                "header:2".to_string(),
                format!("page:{}", body_rows),
                "finish".to_string()
            ]
        );
    }

    #[test]
    fn test_seal_failure_reaches_no_renderer() {
        let localizer = Localizer::load().unwrap();
        let config = Config::default();
        let resources = InMemoryResourceProvider::new();
        let generator = Generator::new(&localizer, &config, &resources);

        let mut record = fixtures::statement();
        record.base.company.seal = Some("seal.png".to_string());
        let mut renderer = RecordingRenderer::default();
        let result = generator.generate(&FinancialRecord::from(record), &mut renderer);

        assert!(matches!(result, Err(DocError::Resource { .. })));
        assert!(renderer.calls.is_empty());
    }

    #[test]
    fn test_render_error_is_surfaced() {
        let localizer = Localizer::load().unwrap();
        let config = Config::default();
        let resources = InMemoryResourceProvider::new();
        let generator = Generator::new(&localizer, &config, &resources);

        let result = generator.generate(
            &FinancialRecord::Invoice(fixtures::invoice()),
            &mut FailingRenderer,
        );
        match result {
            Err(DocError::Render(RenderError::Other(message))) => {
                assert_eq!(message, "page too large")
            }
            other => panic!("Expected Render error, got {:?}", other),
        }
    }

    #[test]
    fn test_json_renderer_output() {
        let localizer = Localizer::load().unwrap();
        let config = Config::default();
        let resources = InMemoryResourceProvider::new();
        let generator = Generator::new(&localizer, &config, &resources);

        let mut renderer = JsonRenderer::new(config.fonts.clone());
        let bytes = generator
            .generate(&FinancialRecord::Invoice(fixtures::invoice()), &mut renderer)
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["header"].as_array().unwrap().len(), 2);
        assert_eq!(json["pages"].as_array().unwrap().len(), 1);
    }
}

//! Library-level generation tests.
//!
//! Records are loaded from `tests/data/` and run through the assembler; the
//! checks look at the composed rows rather than rendered bytes.

use bizdoc::layout::{Page, Row};
use bizdoc::money::{reconcile, Precision, TaxInput};
use bizdoc::{
    record, Config, DocError, DocumentKind, FilesystemResourceProvider, FinancialRecord,
    Generator, InMemoryResourceProvider, JsonRenderer, Localizer, ResourceError,
};
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn load(kind: DocumentKind, filename: &str) -> FinancialRecord {
    record::load(kind, format!("tests/data/{}", filename)).unwrap()
}

fn row_texts(row: &Row) -> Vec<&str> {
    row.texts().map(|t| t.content()).collect()
}

fn all_texts(page: &Page) -> Vec<String> {
    page.rows()
        .iter()
        .flat_map(|row| row.texts())
        .map(|t| t.content().to_string())
        .collect()
}

// ==================== Monetary properties ====================

#[test]
fn test_exclusive_mode_sums_for_many_inputs() {
    let p = Precision::TWO_PLACES;
    for cents in [1i64, 99, 1000, 123_456, 999_999, 10_000_001] {
        for rate in ["0.05", "0.08", "0.1", "0.19", "0.2125"] {
            let excl = Decimal::new(cents, 2);
            let b = reconcile(
                &TaxInput {
                    total_exclude_tax: Some(excl),
                    tax_rate: Some(dec(rate)),
                    ..TaxInput::default()
                },
                p,
            );
            assert_eq!(b.subtotal + b.tax, b.total, "{} @ {}", excl, rate);
            assert_eq!(b.subtotal, excl);
        }
    }
}

#[test]
fn test_inclusive_mode_round_trip_tolerance() {
    let p = Precision::TWO_PLACES;
    let unit = dec("0.01");
    for cents in [1i64, 107, 1100, 54_321, 1_000_000] {
        for rate in ["0.05", "0.08", "0.1", "0.19"] {
            let incl = Decimal::new(cents, 2);
            let b = reconcile(
                &TaxInput {
                    total_include_tax: Some(incl),
                    tax_rate: Some(dec(rate)),
                    ..TaxInput::default()
                },
                p,
            );
            let back = p.round_half_up(b.subtotal * (Decimal::ONE + dec(rate)));
            assert!((back - b.total).abs() <= unit, "{} @ {}", incl, rate);
        }
    }
}

#[test]
fn test_display_scale_by_currency_class() {
    let input = TaxInput {
        total_exclude_tax: Some(dec("1234.5678")),
        tax_rate: Some(dec("0.1")),
        ..TaxInput::default()
    };
    let yen = reconcile(&input, Precision::for_currency("JPY"));
    assert_eq!((yen.subtotal.scale(), yen.tax.scale(), yen.total.scale()), (0, 0, 0));

    let usd = reconcile(&input, Precision::for_currency("USD"));
    assert_eq!((usd.subtotal.scale(), usd.tax.scale(), usd.total.scale()), (2, 2, 2));
}

// ==================== Assembled documents ====================

#[test]
fn test_invoice_from_json_fixture() {
    let record = load(DocumentKind::Invoice, "invoice.json");
    let localizer = Localizer::load().unwrap();
    let config = Config::default();
    let resources = FilesystemResourceProvider::for_record("tests/data/invoice.json");

    let document = Generator::new(&localizer, &config, &resources)
        .assemble(&record)
        .unwrap();

    assert_eq!(document.kind(), DocumentKind::Invoice);
    assert_eq!(document.header()[0].images().count(), 1);

    let texts = all_texts(document.body());
    assert!(texts.contains(&"1000.00 USD".to_string()));
    assert!(texts.contains(&"100.00 USD".to_string()));
    assert!(texts.contains(&"1100.00 USD".to_string()));
}

#[test]
fn test_url_wins_over_url_list() {
    let record = load(DocumentKind::Invoice, "invoice.json");
    let localizer = Localizer::load().unwrap();
    let config = Config::default();
    let resources = FilesystemResourceProvider::for_record("tests/data/invoice.json");

    let document = Generator::new(&localizer, &config, &resources)
        .assemble(&record)
        .unwrap();

    let links: Vec<String> = document
        .body()
        .rows()
        .iter()
        .flat_map(|row| row.texts())
        .filter_map(|t| t.props().hyperlink.clone())
        .collect();
    // first item: url only; second item: both urls
    assert_eq!(
        links,
        vec![
            "https://acme.test/usage/hosting",
            "https://acme.test/tickets/1",
            "https://acme.test/tickets/2",
        ]
    );
}

#[test]
fn test_first_item_row_is_taller() {
    let record = load(DocumentKind::Invoice, "invoice.json");
    let localizer = Localizer::load().unwrap();
    let config = Config::default();
    let resources = FilesystemResourceProvider::for_record("tests/data/invoice.json");

    let document = Generator::new(&localizer, &config, &resources)
        .assemble(&record)
        .unwrap();
    let rows = document.body().rows();

    let find = |title: &str| {
        rows.iter()
            .find(|row| row_texts(row).contains(&title))
            .map(Row::height)
            .unwrap()
    };
    assert_eq!(find("Hosting") - find("Support"), 4.0);
}

#[test]
fn test_payment_rows_for_empty_and_disabled_payment() {
    let localizer = Localizer::load().unwrap();
    let config = Config::default();
    let resources = InMemoryResourceProvider::new();
    let generator = Generator::new(&localizer, &config, &resources);

    let disabled = load(DocumentKind::Invoice, "invoice_inclusive.toml");
    let document = generator.assemble(&disabled).unwrap();
    assert!(!all_texts(document.body()).contains(&"Payment Instructions".to_string()));

    let mut enabled = match disabled {
        FinancialRecord::Invoice(invoice) => invoice,
        other => panic!("Expected invoice, got {:?}", other.kind()),
    };
    enabled.payment.disabled = false;
    let document = generator.assemble_invoice(&enabled).unwrap();
    let rows = document.body().rows();
    let start = rows
        .iter()
        .position(|row| row_texts(row).first() == Some(&"Payment Instructions"))
        .unwrap();
    assert_eq!(rows.len() - start, 2);
    assert_eq!(row_texts(&rows[start + 1]), vec!["Method", "Bank"]);
}

#[test]
fn test_statement_from_toml_fixture() {
    let record = load(DocumentKind::PaymentStatement, "statement.toml");
    let localizer = Localizer::load().unwrap();
    let config = Config::default();
    let resources = FilesystemResourceProvider::for_record("tests/data/statement.toml");

    let document = Generator::new(&localizer, &config, &resources)
        .assemble(&record)
        .unwrap();
    let rows = document.body().rows();

    let royalties = rows
        .iter()
        .find(|row| row_texts(row).first() == Some(&"Royalties"))
        .unwrap();
    assert_eq!(row_texts(royalties), vec!["Royalties", "400.00 USD", "100.00 USD"]);
}

#[test]
fn test_missing_seal_is_a_resource_error() {
    let record = load(DocumentKind::Invoice, "invoice_missing_seal.json");
    let localizer = Localizer::load().unwrap();
    let config = Config::default();
    let resources = FilesystemResourceProvider::for_record("tests/data/invoice_missing_seal.json");
    let mut renderer = JsonRenderer::new(config.fonts.clone());

    let result = Generator::new(&localizer, &config, &resources).generate(&record, &mut renderer);
    match result {
        Err(DocError::Resource { field, source, .. }) => {
            assert_eq!(field, "company_seal");
            assert_eq!(source, ResourceError::NotFound("no-such-seal.png".to_string()));
        }
        other => panic!("Expected Resource error, got {:?}", other),
    }
}

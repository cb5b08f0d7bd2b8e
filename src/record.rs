//! Typed financial-document records and the file loader that produces them.
//!
//! Both document variants share [`DocumentBase`]; they differ only in the
//! sections they carry. Records are read-only inputs to generation.

use crate::error::{DocError, Result};
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// The two document variants the assembler knows how to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Invoice,
    PaymentStatement,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Invoice => f.write_str("invoice"),
            DocumentKind::PaymentStatement => f.write_str("payment statement"),
        }
    }
}

/// Issuing organization shown in the document header.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Organization {
    #[serde(default, rename = "company_name")]
    pub name: String,
    /// Multi-line postal address; lines are separated by `\n`.
    #[serde(default, rename = "company_address")]
    pub address: String,
    #[serde(default, rename = "company_email")]
    pub email: String,
    /// Path of a seal image, resolved through a resource provider.
    #[serde(default, rename = "company_seal")]
    pub seal: Option<String>,
}

/// Fields shared by every document variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentBase {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tax_number: String,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    #[serde(default)]
    pub currency: String,
    #[serde(flatten)]
    pub company: Organization,
}

/// An invoice: what is owed, for what, and how to pay it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvoiceRecord {
    #[serde(flatten)]
    pub base: DocumentBase,
    #[serde(flatten)]
    pub bill_to: BillTo,
    pub summary: InvoiceSummary,
    #[serde(default)]
    pub detail_items: Vec<InvoiceDetailItem>,
    #[serde(default)]
    pub payment: InvoicePayment,
}

/// Counterparty the invoice is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BillTo {
    #[serde(default, rename = "bill_to_company")]
    pub company: String,
    #[serde(default, rename = "bill_to_address")]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvoiceSummary {
    #[serde(with = "date_format")]
    pub period_start: NaiveDate,
    #[serde(with = "date_format")]
    pub period_end: NaiveDate,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub total_exclude_tax: Option<Decimal>,
    #[serde(default)]
    pub total_include_tax: Option<Decimal>,
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
    /// Explicit tax amount, used instead of `tax_rate` when positive.
    #[serde(default)]
    pub tax: Option<Decimal>,
}

/// One billed line. Document order is the order in the record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvoiceDetailItem {
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    /// Single reference link. Takes precedence over `urls`.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub total_exclude_tax: Option<Decimal>,
    #[serde(default)]
    pub total_include_tax: Option<Decimal>,
    #[serde(default)]
    pub tax: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InvoicePayment {
    pub disabled: bool,
    pub method: String,
    pub payment_id: String,
    pub receive_account_bank: String,
    pub receive_account_branch: String,
    pub receive_deposit_type: String,
    pub receive_account_number: String,
    pub receive_account_name: String,
    pub receive_account_swift: String,
    pub receive_account_routing: String,
}

/// A payment statement: what was paid out and what was withheld.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentStatementRecord {
    #[serde(flatten)]
    pub base: DocumentBase,
    #[serde(with = "date_format")]
    pub period_start: NaiveDate,
    #[serde(with = "date_format")]
    pub period_end: NaiveDate,
    #[serde(default)]
    pub payment_channel: String,
    #[serde(default)]
    pub payment_tx_id: String,
    #[serde(default)]
    pub payer: Party,
    #[serde(default)]
    pub payee: Party,
    #[serde(default)]
    pub detail_items: Vec<StatementDetailItem>,
}

/// Payer or payee of a statement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Party {
    pub name: String,
    #[serde(alias = "addr")]
    pub address: String,
    pub tax_number: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatementDetailItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    pub amount: Decimal,
    #[serde(default)]
    pub withholding_tax_rate: Decimal,
}

/// A loaded record of either variant.
#[derive(Debug, Clone, PartialEq)]
pub enum FinancialRecord {
    Invoice(InvoiceRecord),
    PaymentStatement(PaymentStatementRecord),
}

impl FinancialRecord {
    pub fn kind(&self) -> DocumentKind {
        match self {
            FinancialRecord::Invoice(_) => DocumentKind::Invoice,
            FinancialRecord::PaymentStatement(_) => DocumentKind::PaymentStatement,
        }
    }

    pub fn base(&self) -> &DocumentBase {
        match self {
            FinancialRecord::Invoice(record) => &record.base,
            FinancialRecord::PaymentStatement(record) => &record.base,
        }
    }
}

impl From<InvoiceRecord> for FinancialRecord {
    fn from(record: InvoiceRecord) -> Self {
        FinancialRecord::Invoice(record)
    }
}

impl From<PaymentStatementRecord> for FinancialRecord {
    fn from(record: PaymentStatementRecord) -> Self {
        FinancialRecord::PaymentStatement(record)
    }
}

/// Structured text formats a record can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Toml,
}

impl RecordFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(RecordFormat::Json),
            "toml" => Some(RecordFormat::Toml),
            _ => None,
        }
    }

    /// Parses `text` into any record type.
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> std::result::Result<T, String> {
        match self {
            RecordFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            RecordFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// Loads a record of the requested variant from `path`.
pub fn load(kind: DocumentKind, path: impl AsRef<Path>) -> Result<FinancialRecord> {
    let path = path.as_ref();
    match kind {
        DocumentKind::Invoice => load_invoice(path).map(FinancialRecord::from),
        DocumentKind::PaymentStatement => load_statement(path).map(FinancialRecord::from),
    }
}

pub fn load_invoice(path: impl AsRef<Path>) -> Result<InvoiceRecord> {
    read_record(path.as_ref())
}

pub fn load_statement(path: impl AsRef<Path>) -> Result<PaymentStatementRecord> {
    read_record(path.as_ref())
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = RecordFormat::from_path(path).ok_or_else(|| DocError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = fs::read_to_string(path).map_err(|e| DocError::load(path, e))?;
    debug!("Parsing {:?} record from {}", format, path.display());
    format.parse(&text).map_err(|e| DocError::load(path, e))
}

/// Dates are written `YYYY/MM/DD`; ISO `YYYY-MM-DD` is accepted as well.
pub(crate) mod date_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer};

    const FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

    pub fn parse(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| de::Error::custom(format!("invalid date '{}'", s)))
    }
}

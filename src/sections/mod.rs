//! Section composers.
//!
//! Each composer is a pure function of one part of a record, its localized
//! labels and the theme, returning an owned list of rows. Composers never
//! look at each other's output; the assembler concatenates them.

pub mod header;
pub mod items;
pub mod parties;
pub mod payment;
pub mod summary;

pub use header::{invoice_header, statement_header};
pub use items::{invoice_items, statement_items};
pub use parties::{bill_to, channel, payee, payer};
pub use payment::payment_instructions;
pub use summary::{invoice_summary, statement_summary};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::record::{
        BillTo, DocumentBase, InvoicePayment, InvoiceRecord, InvoiceSummary, Organization,
        Party, PaymentStatementRecord,
    };
    use chrono::NaiveDate;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn base(currency: &str) -> DocumentBase {
        DocumentBase {
            id: "DOC-1".to_string(),
            tax_number: "T-100".to_string(),
            date: date(2024, 2, 1),
            currency: currency.to_string(),
            company: Organization {
                name: "Acme Ltd.".to_string(),
                address: "1 Main St\nSpringfield".to_string(),
                email: "billing@acme.test".to_string(),
                seal: None,
            },
        }
    }

    pub fn invoice() -> InvoiceRecord {
        InvoiceRecord {
            base: base("USD"),
            bill_to: BillTo {
                company: "Globex".to_string(),
                address: "9 Side Rd".to_string(),
            },
            summary: InvoiceSummary {
                period_start: date(2024, 1, 1),
                period_end: date(2024, 1, 31),
                title: "January services".to_string(),
                total_exclude_tax: None,
                total_include_tax: None,
                tax_rate: None,
                tax: None,
            },
            detail_items: Vec::new(),
            payment: InvoicePayment::default(),
        }
    }

    pub fn statement() -> PaymentStatementRecord {
        PaymentStatementRecord {
            base: base("USD"),
            period_start: date(2024, 1, 1),
            period_end: date(2024, 1, 31),
            payment_channel: "Bank transfer".to_string(),
            payment_tx_id: "TX-42".to_string(),
            payer: Party {
                name: "Acme".to_string(),
                ..Party::default()
            },
            payee: Party {
                name: "Jane Doe".to_string(),
                ..Party::default()
            },
            detail_items: Vec::new(),
        }
    }
}

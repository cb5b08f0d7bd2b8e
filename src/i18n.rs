//! Localized display strings.
//!
//! A [`Localizer`] is built once with [`Localizer::load`] and passed by
//! reference; there is no global bundle. Lookup falls back from the requested
//! language to [`DEFAULT_LANG`], and from there to the message key itself.

use crate::error::{DocError, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;

/// Language every lookup falls back to.
pub const DEFAULT_LANG: &str = "en";

const BUNDLED_CATALOGS: [(&str, &str); 2] = [
    ("en", include_str!("locales/en.toml")),
    ("ja", include_str!("locales/ja.toml")),
];

/// Template data as `(placeholder, value)` pairs; `("Name", "x")` fills `{{.Name}}`.
pub type TemplateData<'a> = [(&'a str, &'a str)];

/// A catalog entry: either plain text or a table carrying an `other` form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Message {
    Plain(String),
    Forms { other: String },
}

impl Message {
    fn into_text(self) -> String {
        match self {
            Message::Plain(text) => text,
            Message::Forms { other } => other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Localizer {
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl Localizer {
    /// Parses the catalogs bundled with the crate.
    pub fn load() -> Result<Self> {
        Self::from_catalogs(BUNDLED_CATALOGS)
    }

    /// Builds a localizer from `(language, toml source)` pairs. The default
    /// language must be among them.
    pub fn from_catalogs<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut catalogs = HashMap::new();
        for (lang, source) in sources {
            let messages: HashMap<String, Message> =
                toml::from_str(source).map_err(|e| DocError::Catalog {
                    lang: lang.to_string(),
                    message: e.to_string(),
                })?;
            let messages = messages
                .into_iter()
                .map(|(key, message)| (key, message.into_text()))
                .collect();
            debug!("Loaded locale catalog '{}'", lang);
            catalogs.insert(lang.to_string(), messages);
        }

        if !catalogs.contains_key(DEFAULT_LANG) {
            return Err(DocError::Catalog {
                lang: DEFAULT_LANG.to_string(),
                message: "default language catalog is missing".to_string(),
            });
        }

        Ok(Localizer { catalogs })
    }

    pub fn supports(&self, lang: &str) -> bool {
        self.catalogs.contains_key(lang)
    }

    /// The language actually used for `lang`.
    pub fn effective_lang<'a>(&self, lang: &'a str) -> &'a str {
        if self.supports(lang) {
            lang
        } else {
            debug!("No catalog for '{}', using '{}'", lang, DEFAULT_LANG);
            DEFAULT_LANG
        }
    }

    /// Resolves `key` for `lang`, filling placeholders from `data`.
    pub fn resolve(&self, lang: &str, key: &str, data: Option<&TemplateData<'_>>) -> String {
        let text = self
            .lookup(lang, key)
            .or_else(|| self.lookup(DEFAULT_LANG, key))
            .map(str::to_string)
            .unwrap_or_else(|| {
                warn!("Missing message '{}' for '{}'", key, lang);
                key.to_string()
            });

        match data {
            Some(data) => fill_template(&text, data),
            None => text,
        }
    }

    /// Shorthand for [`resolve`](Self::resolve) without template data.
    pub fn t(&self, lang: &str, key: &str) -> String {
        self.resolve(lang, key, None)
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
        self.catalogs
            .get(lang)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}

/// Replaces each `{{.Name}}` placeholder with its value from `data`.
pub fn fill_template(template: &str, data: &TemplateData<'_>) -> String {
    data.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{{.{}}}}}", name), value)
    })
}

/// Labels used by the invoice composers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceLabels {
    pub date_range: String,
    pub id: String,
    pub tax_id: String,
    pub issue_date: String,
    pub period: String,
    pub bill_to: String,
    pub summary: String,
    pub summary_amount: String,
    pub vat: String,
    pub total_with_tax: String,
    pub details: String,
    pub details_vat: String,
    pub payment: String,
    pub payment_method: String,
    pub payment_id: String,
    pub bank_name: String,
    pub bank_branch: String,
    pub deposit_type: String,
    pub bank_account: String,
    pub account_name: String,
    pub swift: String,
    pub routing: String,
}

impl InvoiceLabels {
    pub fn resolve(localizer: &Localizer, lang: &str) -> Self {
        let t = |key: &str| localizer.t(lang, key);
        InvoiceLabels {
            date_range: t("DateRange"),
            id: t("InvoiceID"),
            tax_id: t("InvoiceTaxID"),
            issue_date: t("InvoiceIssueDate"),
            period: t("InvoicePeriod"),
            bill_to: t("InvoiceBillTo"),
            summary: t("InvoiceSummary"),
            summary_amount: t("InvoiceSummaryAmount"),
            vat: t("InvoiceSummaryVAT"),
            total_with_tax: t("InvoiceSummaryTotalWithTax"),
            details: t("InvoiceDetails"),
            details_vat: t("InvoiceDetailsVAT"),
            payment: t("InvoicePayment"),
            payment_method: t("InvoicePaymentMethod"),
            payment_id: t("InvoicePaymentID"),
            bank_name: t("InvoicePaymentBankName"),
            bank_branch: t("InvoicePaymentBankBranch"),
            deposit_type: t("InvoicePaymentBankDepositType"),
            bank_account: t("InvoicePaymentBankAccount"),
            account_name: t("InvoicePaymentBankAccountName"),
            swift: t("InvoicePaymentSwift"),
            routing: t("InvoicePaymentRouting"),
        }
    }
}

/// Labels used by the payment-statement composers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLabels {
    pub date_range: String,
    pub title: String,
    pub issue_date: String,
    pub period: String,
    pub tax_id: String,
    pub payer: String,
    pub payee: String,
    pub party_name: String,
    pub party_address: String,
    pub party_tax_id: String,
    pub party_contact: String,
    pub channel_title: String,
    pub channel: String,
    pub channel_tx_id: String,
    pub summary: String,
    pub summary_amount: String,
    pub revenue: String,
    pub withholding_tax: String,
    pub net_amount: String,
    pub details: String,
    pub details_amount: String,
    pub details_tax: String,
}

impl StatementLabels {
    pub fn resolve(localizer: &Localizer, lang: &str) -> Self {
        let t = |key: &str| localizer.t(lang, key);
        StatementLabels {
            date_range: t("DateRange"),
            title: t("PaymentStatementTitle"),
            issue_date: t("PaymentStatementIssueDate"),
            period: t("PaymentStatementPeriod"),
            tax_id: t("PaymentStatementTaxID"),
            payer: t("PaymentStatementPayer"),
            payee: t("PaymentStatementPayee"),
            party_name: t("PaymentStatementUserName"),
            party_address: t("PaymentStatementUserAddress"),
            party_tax_id: t("PaymentStatementUserTaxID"),
            party_contact: t("PaymentStatementUserContact"),
            channel_title: t("PaymentStatementChannelTitle"),
            channel: t("PaymentStatementChannel"),
            channel_tx_id: t("PaymentStatementChannelTxID"),
            summary: t("PaymentStatementSummary"),
            summary_amount: t("PaymentStatementSummaryAmount"),
            revenue: t("PaymentStatementSummaryRevenue"),
            withholding_tax: t("PaymentStatementWithholdingTax"),
            net_amount: t("PaymentStatementSummaryNetAmount"),
            details: t("PaymentStatementDetails"),
            details_amount: t("PaymentStatementDetailsAmount"),
            details_tax: t("PaymentStatementDetailsTax"),
        }
    }
}

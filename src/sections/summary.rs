//! Summary blocks. All figures come from the money module.

use crate::config::Theme;
use crate::i18n::{InvoiceLabels, StatementLabels};
use crate::layout::{Column, Row, TextProps};
use crate::money::{reconcile, statement_totals, Precision, TaxInput};
use crate::record::{InvoiceRecord, PaymentStatementRecord};
use crate::style::{bottom_border, format_money, section_title};

pub fn invoice_summary(record: &InvoiceRecord, labels: &InvoiceLabels, theme: &Theme) -> Vec<Row> {
    let currency = record.base.currency.as_str();
    let summary = &record.summary;
    let breakdown = reconcile(
        &TaxInput {
            total_exclude_tax: summary.total_exclude_tax,
            total_include_tax: summary.total_include_tax,
            tax: summary.tax,
            tax_rate: summary.tax_rate,
        },
        Precision::for_currency(currency),
    );

    let body = TextProps::new(9.0).color(theme.foreground);
    let total = TextProps::new(10.0).top(4.0).bold().color(theme.foreground);
    vec![
        section_title(theme, 10.0, &labels.summary, &labels.summary_amount),
        Row::new(12.0)
            .add(Column::text(8, summary.title.as_str(), body.clone().top(4.0)))
            .add(Column::text(
                4,
                format_money(breakdown.subtotal, currency),
                body.clone().top(4.0).right(),
            )),
        Row::new(8.0)
            .with_style(bottom_border(theme))
            .add(Column::text(6, labels.vat.as_str(), body.clone()))
            .add(Column::text(6, format_money(breakdown.tax, currency), body.right())),
        Row::new(10.0)
            .add(Column::text(6, labels.total_with_tax.as_str(), total.clone()))
            .add(Column::text(6, format_money(breakdown.total, currency), total.right())),
    ]
}

pub fn statement_summary(
    record: &PaymentStatementRecord,
    labels: &StatementLabels,
    theme: &Theme,
) -> Vec<Row> {
    let currency = record.base.currency.as_str();
    let totals = statement_totals(
        record
            .detail_items
            .iter()
            .map(|item| (item.amount, item.withholding_tax_rate)),
        Precision::for_currency(currency),
    );

    let body = TextProps::new(10.0).color(theme.foreground);
    let net = TextProps::new(12.0).top(4.0).bold().color(theme.foreground);
    vec![
        section_title(theme, 12.0, &labels.summary, &labels.summary_amount),
        Row::new(14.0)
            .add(Column::text(8, labels.revenue.as_str(), body.clone().top(4.0)))
            .add(Column::text(
                4,
                format_money(totals.gross, currency),
                body.clone().top(4.0).right(),
            )),
        Row::new(10.0)
            .with_style(bottom_border(theme))
            .add(Column::text(6, labels.withholding_tax.as_str(), body.clone()))
            .add(Column::text(
                6,
                format!("-{}", format_money(totals.withholding, currency)),
                body.right(),
            )),
        Row::new(16.0)
            .add(Column::text(6, labels.net_amount.as_str(), net.clone()))
            .add(Column::text(6, format_money(totals.net, currency), net.right())),
    ]
}

//! Line-item tables.
//!
//! The first item of a table is padded by [`FIRST_ITEM_PADDING`] so it sits
//! clear of the bordered heading; later items use the base height.
//!
//! [`FIRST_ITEM_PADDING`]: crate::style::FIRST_ITEM_PADDING

use crate::config::Theme;
use crate::i18n::{InvoiceLabels, StatementLabels};
use crate::layout::{Column, Row, TextProps};
use crate::money::{withholding, Precision};
use crate::record::{InvoiceDetailItem, InvoiceRecord, PaymentStatementRecord};
use crate::style::{bottom_border, format_date, format_money, item_geometry, section_title};
use log::debug;
use rust_decimal::Decimal;

const INVOICE_ITEM_HEIGHT: f32 = 6.0;
const STATEMENT_ITEM_HEIGHT: f32 = 8.0;
const NOTE_ROW_HEIGHT: f32 = 6.0;
const ITEM_SPACER: f32 = 2.0;

pub fn invoice_items(record: &InvoiceRecord, labels: &InvoiceLabels, theme: &Theme) -> Vec<Row> {
    let currency = record.base.currency.as_str();
    let precision = Precision::for_currency(currency);

    let mut rows = vec![section_title(theme, 10.0, &labels.details, "")];
    for (ix, item) in record.detail_items.iter().enumerate() {
        rows.extend(invoice_item(ix, item, currency, precision, labels, theme));
    }
    rows
}

fn invoice_item(
    ix: usize,
    item: &InvoiceDetailItem,
    currency: &str,
    precision: Precision,
    labels: &InvoiceLabels,
    theme: &Theme,
) -> Vec<Row> {
    let (padding, height) = item_geometry(ix, INVOICE_ITEM_HEIGHT);
    let props = TextProps::new(9.0).top(padding).color(theme.foreground);

    let mut main = Row::new(height)
        .add(Column::text(2, format_date(item.date), props.clone()))
        .add(Column::text(6, item.title.as_str(), props.clone()));
    if let Some(amount) = display_amount(item) {
        main = main.add(Column::text(
            4,
            format_money(precision.round_down(amount), currency),
            props.right(),
        ));
    }
    let mut rows = vec![main];

    if !item.desc.is_empty() {
        let note = TextProps::new(8.0).color(theme.secondary);
        let exclude = item.total_exclude_tax.unwrap_or_default();
        let tax = item.tax.unwrap_or_default();
        let row = Row::new(NOTE_ROW_HEIGHT).add(Column::new(2));
        let row = if is_positive(exclude) && is_positive(tax) {
            row.add(Column::text(6, item.desc.as_str(), note.clone()))
                .add(Column::text(
                    4,
                    format!(
                        "{}: {}",
                        labels.details_vat,
                        format_money(precision.round_down(tax), currency)
                    ),
                    note.right(),
                ))
        } else {
            row.add(Column::text(10, item.desc.as_str(), note))
        };
        rows.push(row);
    }

    rows.extend(link_rows(item, theme));
    rows.push(Row::new(ITEM_SPACER));
    rows
}

/// Tax-inclusive total when positive, else the tax-exclusive total when
/// positive, else nothing.
fn display_amount(item: &InvoiceDetailItem) -> Option<Decimal> {
    let include = item.total_include_tax.unwrap_or_default();
    let exclude = item.total_exclude_tax.unwrap_or_default();
    if is_positive(include) {
        Some(include)
    } else if is_positive(exclude) {
        Some(exclude)
    } else {
        None
    }
}

/// One row for `url` when set; otherwise one row per entry of `urls`.
fn link_rows(item: &InvoiceDetailItem, theme: &Theme) -> Vec<Row> {
    let links: Vec<&str> = if !item.url.is_empty() {
        if !item.urls.is_empty() {
            debug!("Item '{}' has both url and urls; showing url only", item.title);
        }
        vec![item.url.as_str()]
    } else {
        item.urls.iter().map(String::as_str).collect()
    };

    links
        .into_iter()
        .map(|url| {
            let props = TextProps::new(8.0).color(theme.link).hyperlink(url);
            Row::new(NOTE_ROW_HEIGHT)
                .add(Column::new(2))
                .add(Column::text(10, url, props))
        })
        .collect()
}

pub fn statement_items(
    record: &PaymentStatementRecord,
    labels: &StatementLabels,
    theme: &Theme,
) -> Vec<Row> {
    let currency = record.base.currency.as_str();
    let precision = Precision::for_currency(currency);

    let heading = TextProps::new(12.0).top(8.0).bold().color(theme.foreground);
    let mut rows = vec![Row::new(16.0)
        .with_style(bottom_border(theme))
        .add(Column::text(4, labels.details.as_str(), heading.clone()))
        .add(Column::text(4, labels.details_amount.as_str(), heading.clone().right()))
        .add(Column::text(4, labels.details_tax.as_str(), heading.right()))];

    for (ix, item) in record.detail_items.iter().enumerate() {
        let (padding, height) = item_geometry(ix, STATEMENT_ITEM_HEIGHT);
        let props = TextProps::new(10.0).top(padding).color(theme.foreground);
        let figures = withholding(item.amount, item.withholding_tax_rate, precision);

        rows.push(
            Row::new(height)
                .add(Column::text(4, item.title.as_str(), props.clone()))
                .add(Column::text(
                    4,
                    format_money(figures.net, currency),
                    props.clone().right(),
                ))
                .add(Column::text(4, format_money(figures.tax, currency), props.right())),
        );

        if !item.desc.is_empty() {
            rows.push(Row::text(
                NOTE_ROW_HEIGHT,
                item.desc.as_str(),
                TextProps::new(8.0).color(theme.secondary),
            ));
        }
    }
    rows
}

fn is_positive(value: Decimal) -> bool {
    value > Decimal::ZERO
}

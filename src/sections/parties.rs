//! Counterparty blocks: the invoice bill-to and the statement payer, payee
//! and payment channel.

use crate::config::Theme;
use crate::i18n::{InvoiceLabels, StatementLabels};
use crate::layout::{Column, Row, Text, TextProps, GRID_COLUMNS};
use crate::record::{BillTo, Party, PaymentStatementRecord};
use crate::style::{bottom_border, label_value_row, line_top, split_lines, LINE_STEP};

const PARTY_ROW_HEIGHT: f32 = 6.0;
const PARTY_TEXT_TOP: f32 = 2.0;

pub fn bill_to(bill_to: &BillTo, labels: &InvoiceLabels, theme: &Theme) -> Vec<Row> {
    let props = TextProps::new(9.0).color(theme.foreground);
    let lines = split_lines(&bill_to.address);

    let block = Column::new(8)
        .add(Text::new(bill_to.company.as_str(), props.clone().bold()))
        .extend(
            lines
                .iter()
                .enumerate()
                .map(|(ix, line)| Text::new(*line, props.clone().top(line_top(0.0, ix + 1)))),
        );
    let height = (LINE_STEP * (lines.len() + 1) as f32).max(12.0);

    vec![
        Row::text(
            8.0,
            labels.bill_to.as_str(),
            TextProps::new(10.0).bold().color(theme.foreground),
        ),
        Row::new(height).add(block),
    ]
}

pub fn payer(party: &Party, labels: &StatementLabels, theme: &Theme) -> Vec<Row> {
    party_rows(&labels.payer, party, labels, theme)
}

/// Payee rows, closed by a spacer before the channel section.
pub fn payee(party: &Party, labels: &StatementLabels, theme: &Theme) -> Vec<Row> {
    let mut rows = party_rows(&labels.payee, party, labels, theme);
    rows.push(Row::new(4.0));
    rows
}

fn party_rows(title: &str, party: &Party, labels: &StatementLabels, theme: &Theme) -> Vec<Row> {
    let props = TextProps::new(10.0).top(PARTY_TEXT_TOP).color(theme.foreground);
    vec![
        Row::text(
            14.0,
            title,
            TextProps::new(12.0).top(8.0).bold().color(theme.foreground),
        ),
        label_value_row(PARTY_ROW_HEIGHT, 4, &labels.party_name, &party.name, props.clone()),
        address_row(&labels.party_address, &party.address, props.clone()),
        label_value_row(
            PARTY_ROW_HEIGHT,
            4,
            &labels.party_tax_id,
            &party.tax_number,
            props.clone(),
        ),
        label_value_row(PARTY_ROW_HEIGHT, 4, &labels.party_contact, &party.contact, props),
    ]
}

/// Label/value row whose value column holds one text per address line; the
/// row grows by one line step per extra line.
fn address_row(label: &str, address: &str, props: TextProps) -> Row {
    let lines = split_lines(address);
    let first_top = props.top;
    let value = Column::new(GRID_COLUMNS - 4).extend(
        lines
            .iter()
            .enumerate()
            .map(|(ix, line)| Text::new(*line, props.clone().right().top(line_top(first_top, ix)))),
    );
    let height = PARTY_ROW_HEIGHT * lines.len().max(1) as f32;

    Row::new(height)
        .add(Column::text(4, label, props))
        .add(value)
}

pub fn channel(record: &PaymentStatementRecord, labels: &StatementLabels, theme: &Theme) -> Vec<Row> {
    let props = TextProps::new(10.0).top(4.0).color(theme.foreground);
    vec![
        Row::new(16.0).with_style(bottom_border(theme)).add(Column::text(
            8,
            labels.channel_title.as_str(),
            TextProps::new(12.0).top(8.0).bold().color(theme.foreground),
        )),
        label_value_row(10.0, 6, &labels.channel, &record.payment_channel, props.clone()),
        label_value_row(12.0, 6, &labels.channel_tx_id, &record.payment_tx_id, props),
    ]
}

//! Payment instructions for invoices.

use crate::config::Theme;
use crate::i18n::InvoiceLabels;
use crate::layout::{Row, TextProps};
use crate::record::InvoicePayment;
use crate::style::{label_value_row, section_title};
use log::debug;

/// Shown when the record leaves the payment method empty.
pub const DEFAULT_PAYMENT_METHOD: &str = "Bank";

/// Payment rows: a heading, the method row, then one row per non-empty
/// optional field in a fixed order. A disabled payment yields no rows.
pub fn payment_instructions(
    payment: &InvoicePayment,
    labels: &InvoiceLabels,
    theme: &Theme,
) -> Vec<Row> {
    if payment.disabled {
        debug!("Payment instructions disabled; omitting section");
        return Vec::new();
    }

    let props = TextProps::new(9.0).color(theme.foreground);
    let method = if payment.method.is_empty() {
        DEFAULT_PAYMENT_METHOD
    } else {
        payment.method.as_str()
    };

    let mut rows = vec![
        section_title(theme, 10.0, &labels.payment, ""),
        label_value_row(10.0, 2, &labels.payment_method, method, props.clone().top(4.0)),
    ];

    let optional = [
        (&labels.payment_id, &payment.payment_id),
        (&labels.bank_name, &payment.receive_account_bank),
        (&labels.bank_branch, &payment.receive_account_branch),
        (&labels.bank_account, &payment.receive_account_number),
        (&labels.deposit_type, &payment.receive_deposit_type),
        (&labels.account_name, &payment.receive_account_name),
        (&labels.swift, &payment.receive_account_swift),
        (&labels.routing, &payment.receive_account_routing),
    ];
    rows.extend(
        optional
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| label_value_row(6.0, 2, label, value, props.clone())),
    );
    rows
}

//! Shared styling and formatting helpers for the section composers.

use crate::config::Theme;
use crate::i18n::fill_template;
use crate::layout::{CellStyle, Column, Row, TextProps};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Vertical distance between consecutive lines of a multi-line field.
pub const LINE_STEP: f32 = 6.0;

/// Extra top padding and height given to the first line item of a list.
pub const FIRST_ITEM_PADDING: f32 = 4.0;

/// Display format of every date.
const DATE_FORMAT: &str = "%Y/%m/%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats an already-rounded amount followed by its currency label.
pub fn format_money(value: Decimal, currency: &str) -> String {
    let currency = currency.trim();
    if currency.is_empty() {
        value.to_string()
    } else {
        format!("{} {}", value, currency)
    }
}

/// Fills the localized date-range template.
pub fn format_period(template: &str, start: NaiveDate, end: NaiveDate) -> String {
    let start = format_date(start);
    let end = format_date(end);
    fill_template(template, &[("Start", start.as_str()), ("End", end.as_str())])
}

/// `"{label}: {value}"`, the header line format.
pub fn labelled(label: &str, value: &str) -> String {
    format!("{}: {}", label, value)
}

/// Splits a multi-line field into display lines.
///
/// A field that is blank after trimming yields no lines at all. Otherwise
/// every line is kept, blank ones included, so vertical spacing follows the
/// line count of the source text.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split('\n').map(str::trim).collect()
}

/// Top offset of line `index` in a block that starts at `first_top`.
pub fn line_top(first_top: f32, index: usize) -> f32 {
    first_top + LINE_STEP * index as f32
}

pub fn bottom_border(theme: &Theme) -> CellStyle {
    CellStyle::bottom_border(theme.border)
}

/// Bordered section heading: bold title on the left, optional bold caption
/// on the right.
pub fn section_title(theme: &Theme, size: f32, title: &str, caption: &str) -> Row {
    let props = TextProps::new(size).top(8.0).bold().color(theme.foreground);
    Row::new(16.0)
        .with_style(bottom_border(theme))
        .add(Column::text(8, title, props.clone()))
        .add(Column::text(4, caption, props.right()))
}

/// A two-column label/value row with the value right-aligned.
pub fn label_value_row(
    height: f32,
    label_span: u8,
    label: &str,
    value: &str,
    props: TextProps,
) -> Row {
    Row::new(height)
        .add(Column::text(label_span, label, props.clone()))
        .add(Column::text(
            crate::layout::GRID_COLUMNS - label_span,
            value,
            props.right(),
        ))
}

/// Row geometry for line item `index`: the first item is padded.
pub fn item_geometry(index: usize, base_height: f32) -> (f32, f32) {
    if index == 0 {
        (FIRST_ITEM_PADDING, base_height + FIRST_ITEM_PADDING)
    } else {
        (0.0, base_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Align, Border};
    use std::str::FromStr;

    #[test]
    fn test_split_lines_keeps_inner_blank_lines() {
        assert_eq!(split_lines("a\n\n b "), vec!["a", "", "b"]);
        assert_eq!(split_lines("single"), vec!["single"]);
    }

    #[test]
    fn test_split_lines_collapses_blank_field() {
        assert!(split_lines("").is_empty());
        assert!(split_lines(" \n \n").is_empty());
    }

    #[test]
    fn test_line_top_steps() {
        assert_eq!(line_top(16.0, 0), 16.0);
        assert_eq!(line_top(16.0, 2), 28.0);
    }

    #[test]
    fn test_format_helpers() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date), "2024/03/09");
        assert_eq!(format_money(Decimal::from_str("10.50").unwrap(), "USD"), "10.50 USD");
        assert_eq!(format_money(Decimal::from_str("7").unwrap(), " "), "7");
        assert_eq!(labelled("Tax ID", "T-1"), "Tax ID: T-1");
        assert_eq!(
            format_period("{{.Start}} - {{.End}}", date, date),
            "2024/03/09 - 2024/03/09"
        );
    }

    #[test]
    fn test_section_title_layout() {
        let row = section_title(&Theme::default(), 10.0, "Summary", "Amount");
        assert_eq!(row.height(), 16.0);
        assert_eq!(row.style().map(|s| s.border), Some(Border::Bottom));
        let texts: Vec<_> = row.texts().collect();
        assert_eq!(texts[0].content(), "Summary");
        assert_eq!(texts[1].props().align, Align::Right);
    }

    #[test]
    fn test_item_geometry() {
        assert_eq!(item_geometry(0, 6.0), (4.0, 10.0));
        assert_eq!(item_geometry(1, 6.0), (0.0, 6.0));
        assert_eq!(item_geometry(5, 8.0), (0.0, 8.0));
    }
}

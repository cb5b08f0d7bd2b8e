//! Document headers: issuer block on the left, document facts on the right.

use crate::config::Theme;
use crate::error::{DocError, Result};
use crate::i18n::{InvoiceLabels, StatementLabels};
use crate::layout::{Column, Image, RectProps, Row, Text, TextProps};
use crate::record::{InvoiceRecord, Organization, PaymentStatementRecord};
use crate::resource::ResourceProvider;
use crate::style::{
    bottom_border, format_date, format_period, labelled, line_top, split_lines, LINE_STEP,
};
use log::debug;

const INVOICE_HEADER_HEIGHT: f32 = 42.0;
const STATEMENT_HEADER_HEIGHT: f32 = 28.0;

const INVOICE_SEAL: RectProps = RectProps {
    percent: 20.0,
    left: 34.0,
    top: 7.0,
    center: false,
};

const STATEMENT_SEAL: RectProps = RectProps {
    percent: 32.0,
    left: 0.0,
    top: 16.0,
    center: false,
};

/// Header rows of an invoice, followed by a spacer row.
///
/// Fails when the record names a seal image that cannot be loaded.
pub fn invoice_header(
    record: &InvoiceRecord,
    labels: &InvoiceLabels,
    theme: &Theme,
    resources: &dyn ResourceProvider,
) -> Result<Vec<Row>> {
    let base = &record.base;
    let fg = theme.foreground;

    let mut left = Column::new(6);
    if let Some(seal) = load_seal(&base.company, resources, INVOICE_SEAL)? {
        left = left.add(seal);
    }
    left = left.add(Text::new(
        base.company.name.as_str(),
        TextProps::new(14.0).top(8.0).bold().color(fg),
    ));
    let (issuer, _) = issuer_lines(&base.company, 16.0, TextProps::new(9.0).color(fg));
    left = left.extend(issuer);

    let facts = TextProps::new(9.0).right().color(fg);
    let period = format_period(
        &labels.date_range,
        record.summary.period_start,
        record.summary.period_end,
    );
    let right = Column::new(6).extend([
        Text::new(labelled(&labels.id, &base.id), facts.clone().top(16.0)),
        Text::new(labelled(&labels.tax_id, &base.tax_number), facts.clone().top(22.0)),
        Text::new(
            labelled(&labels.issue_date, &format_date(base.date)),
            facts.clone().top(28.0),
        ),
        Text::new(labelled(&labels.period, &period), facts.top(34.0)),
    ]);

    Ok(vec![
        Row::new(INVOICE_HEADER_HEIGHT)
            .with_style(bottom_border(theme))
            .add(left)
            .add(right),
        Row::new(6.0),
    ])
}

/// Header row of a payment statement. The row grows when the issuer block
/// needs more room than the default height.
pub fn statement_header(
    record: &PaymentStatementRecord,
    labels: &StatementLabels,
    theme: &Theme,
    resources: &dyn ResourceProvider,
) -> Result<Vec<Row>> {
    let base = &record.base;
    let fg = theme.foreground;

    let mut left = Column::new(6);
    if let Some(seal) = load_seal(&base.company, resources, STATEMENT_SEAL)? {
        left = left.add(seal);
    }
    left = left.add(Text::new(
        labels.title.as_str(),
        TextProps::new(14.0).top(8.0).bold().color(fg),
    ));

    left = left.add(Text::new(
        base.company.name.as_str(),
        TextProps::new(9.0).top(16.0).bold().color(fg),
    ));
    let (issuer, last_top) = issuer_lines(
        &base.company,
        16.0 + LINE_STEP,
        TextProps::new(9.0).color(fg),
    );
    left = left.extend(issuer);

    let facts = TextProps::new(10.0).right().color(fg);
    let period = format_period(&labels.date_range, record.period_start, record.period_end);
    let right = Column::new(6).extend([
        Text::new(
            labelled(&labels.issue_date, &format_date(base.date)),
            facts.clone().top(9.0),
        ),
        Text::new(labelled(&labels.period, &period), facts.clone().top(16.0)),
        Text::new(labelled(&labels.tax_id, &base.tax_number), facts.top(23.0)),
    ]);

    let height = STATEMENT_HEADER_HEIGHT.max(last_top + LINE_STEP + 2.0);
    Ok(vec![Row::new(height)
        .with_style(bottom_border(theme))
        .add(left)
        .add(right)])
}

/// Address lines followed by the email line, starting at `first_top`.
/// Returns the texts and the top offset of the last line written.
fn issuer_lines(org: &Organization, first_top: f32, props: TextProps) -> (Vec<Text>, f32) {
    let lines = split_lines(&org.address);
    let mut texts: Vec<Text> = lines
        .iter()
        .enumerate()
        .map(|(ix, line)| Text::new(*line, props.clone().top(line_top(first_top, ix))))
        .collect();

    let email_top = line_top(first_top, lines.len());
    texts.push(Text::new(org.email.as_str(), props.top(email_top)));
    (texts, email_top)
}

fn load_seal(
    org: &Organization,
    resources: &dyn ResourceProvider,
    rect: RectProps,
) -> Result<Option<Image>> {
    let path = match org.seal.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => path,
        _ => return Ok(None),
    };

    debug!("Loading company seal from {}", path);
    let bytes = resources.load(path).map_err(|source| DocError::Resource {
        section: "header",
        field: "company_seal",
        source,
    })?;
    Ok(Some(Image::new(bytes, rect)))
}

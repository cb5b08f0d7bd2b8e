//! Monetary derivation for documents.
//!
//! All arithmetic is done in `rust_decimal` and rounded to the display
//! precision of the document's currency. Two rounding modes are in play and
//! they are deliberately kept apart:
//!
//! - **round down** (toward zero) for subtotal/total display values and for
//!   invoice line-item amounts,
//! - **round half up** (midpoint away from zero) when a tax amount is
//!   normalized and for payment-statement figures.
//!
//! Nothing here fails: absent inputs count as zero and overflow or a zero
//! divisor degrade to a documented fallback.

use log::warn;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Currency codes that have no minor unit.
const ZERO_DECIMAL_CURRENCIES: [&str; 2] = ["JPY", "円"];

/// Number of fractional digits a currency is displayed with.
///
/// # Examples
///
/// ```
/// use bizdoc::money::Precision;
///
/// assert_eq!(Precision::for_currency("USD").places(), 2);
/// assert_eq!(Precision::for_currency("jpy").places(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision(u32);

impl Precision {
    /// Two fractional digits, the default for every currency with cents.
    pub const TWO_PLACES: Self = Precision(2);

    /// Zero fractional digits.
    pub const ZERO_PLACES: Self = Precision(0);

    /// Selects the precision for a currency code. The code is only a label;
    /// no conversion is ever performed.
    pub fn for_currency(code: &str) -> Self {
        let code = code.trim();
        if ZERO_DECIMAL_CURRENCIES
            .iter()
            .any(|c| c.eq_ignore_ascii_case(code))
        {
            Self::ZERO_PLACES
        } else {
            Self::TWO_PLACES
        }
    }

    pub fn places(self) -> u32 {
        self.0
    }

    /// Truncates toward zero and pins the scale to exactly `places` digits.
    pub fn round_down(self, value: Decimal) -> Decimal {
        self.round_with(value, RoundingStrategy::ToZero)
    }

    /// Rounds half away from zero and pins the scale to exactly `places` digits.
    pub fn round_half_up(self, value: Decimal) -> Decimal {
        self.round_with(value, RoundingStrategy::MidpointAwayFromZero)
    }

    fn round_with(self, value: Decimal, strategy: RoundingStrategy) -> Decimal {
        let mut rounded = value.round_dp_with_strategy(self.0, strategy);
        rounded.rescale(self.0);
        rounded
    }
}

/// Partial tax information as supplied by a record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaxInput {
    pub total_exclude_tax: Option<Decimal>,
    pub total_include_tax: Option<Decimal>,
    /// Explicit tax amount; wins over `tax_rate` in tax-exclusive mode.
    pub tax: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
}

/// A reconciled `(subtotal, tax, total)` triple, already display-rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Derives a consistent subtotal/tax/total from whichever fields are present.
///
/// - A positive tax-exclusive total fixes the subtotal; tax is the explicit
///   amount when positive, otherwise `subtotal * rate`, both rounded half up.
/// - Otherwise the tax-inclusive total fixes the total and the subtotal is
///   backed out as `total / (1 + rate)`.
///
/// # Examples
///
/// ```
/// use bizdoc::money::{reconcile, Precision, TaxInput};
/// use rust_decimal::Decimal;
///
/// let input = TaxInput {
///     total_include_tax: Some(Decimal::new(110000, 2)),
///     tax_rate: Some(Decimal::new(10, 2)),
///     ..TaxInput::default()
/// };
/// let b = reconcile(&input, Precision::TWO_PLACES);
/// assert_eq!(b.subtotal.to_string(), "1000.00");
/// assert_eq!(b.tax.to_string(), "100.00");
/// assert_eq!(b.total.to_string(), "1100.00");
/// ```
pub fn reconcile(input: &TaxInput, precision: Precision) -> TaxBreakdown {
    let exclude = input.total_exclude_tax.unwrap_or_default();
    let include = input.total_include_tax.unwrap_or_default();
    let explicit_tax = input.tax.unwrap_or_default();
    let rate = input.tax_rate.unwrap_or_default();

    if exclude.is_sign_positive() && !exclude.is_zero() {
        let tax = if explicit_tax.is_sign_positive() && !explicit_tax.is_zero() {
            precision.round_half_up(explicit_tax)
        } else {
            precision.round_half_up(checked_mul(exclude, rate))
        };
        let total = precision.round_down(checked_add(exclude, tax));
        return TaxBreakdown {
            subtotal: precision.round_down(exclude),
            tax,
            total,
        };
    }

    let total = precision.round_down(include);
    let divisor = checked_add(Decimal::ONE, rate);
    let subtotal = match total.checked_div(divisor) {
        Some(value) => precision.round_half_up(value),
        None => {
            warn!("tax rate {} leaves no divisor; treating total as untaxed", rate);
            total
        }
    };
    TaxBreakdown {
        subtotal,
        tax: precision.round_down(checked_sub(total, subtotal)),
        total,
    }
}

/// Withholding deducted from one gross payment-statement line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Withholding {
    pub tax: Decimal,
    pub net: Decimal,
}

/// Computes `tax = amount * rate` and `net = amount - tax`, rounded half up.
pub fn withholding(amount: Decimal, rate: Decimal, precision: Precision) -> Withholding {
    let tax = checked_mul(amount, rate);
    Withholding {
        tax: precision.round_half_up(tax),
        net: precision.round_half_up(checked_sub(amount, tax)),
    }
}

/// Gross, withheld and net totals over every statement line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatementTotals {
    pub gross: Decimal,
    pub withholding: Decimal,
    pub net: Decimal,
}

/// Sums `(amount, withholding_rate)` pairs before rounding anything.
pub fn statement_totals<I>(lines: I, precision: Precision) -> StatementTotals
where
    I: IntoIterator<Item = (Decimal, Decimal)>,
{
    let (gross, withheld) = lines
        .into_iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(gross, withheld), (amount, rate)| {
            (
                checked_add(gross, amount),
                checked_add(withheld, checked_mul(amount, rate)),
            )
        });

    StatementTotals {
        gross: precision.round_half_up(gross),
        withholding: precision.round_half_up(withheld),
        net: precision.round_half_up(checked_sub(gross, withheld)),
    }
}

fn checked_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        warn!("decimal overflow multiplying {} by {}; using zero", a, b);
        Decimal::ZERO
    })
}

fn checked_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        warn!("decimal overflow adding {} and {}; using zero", a, b);
        Decimal::ZERO
    })
}

fn checked_sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| {
        warn!("decimal overflow subtracting {} from {}; using zero", b, a);
        Decimal::ZERO
    })
}

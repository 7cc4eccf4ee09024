//! pt-BR number formatting for cards and tables.
//!
//! All functions are total: `None` and non-finite input map to a fixed
//! fallback string. Ties round away from zero, as the browser's pt-BR
//! locale formatting does.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction digits used by [`format_percent`] when the caller has no preference.
pub const DEFAULT_PERCENT_DIGITS: usize = 2;

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const MAX_NUMBER_FRACTION_DIGITS: usize = 3;

/// `1234.5` → `"R$ 1.234,50"`, `None` → `"R$ 0,00"`.
pub fn format_currency(value: Option<f64>) -> String {
    let Some(value) = finite(value) else {
        return "R$ 0,00".to_string();
    };
    let body = format_decimal(value.abs(), 2, 2);
    if value < 0.0 && !is_zero_text(&body) {
        format!("-R$ {body}")
    } else {
        format!("R$ {body}")
    }
}

/// `9876543.0` → `"9.876.543"`, at most three fraction digits, `None` → `"0"`.
pub fn format_number(value: Option<f64>) -> String {
    let Some(value) = finite(value) else {
        return "0".to_string();
    };
    signed(value, format_decimal(value.abs(), 0, MAX_NUMBER_FRACTION_DIGITS))
}

/// `0.1234` with 2 digits → `"12,34%"`, `None` → `"0%"`.
pub fn format_percent(value: Option<f64>, fraction_digits: usize) -> String {
    let Some(value) = finite(value) else {
        return "0%".to_string();
    };
    let scaled = value * 100.0;
    let body = format_decimal(scaled.abs(), fraction_digits, fraction_digits);
    format!("{}%", signed(scaled, body))
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|number| number.is_finite())
}

fn signed(value: f64, body: String) -> String {
    if value < 0.0 && !is_zero_text(&body) {
        format!("-{body}")
    } else {
        body
    }
}

fn is_zero_text(body: &str) -> bool {
    body.chars().all(|c| !c.is_ascii_digit() || c == '0')
}

/// Render a non-negative value with grouped integer digits and between
/// `min_fraction` and `max_fraction` decimals (trailing zeros trimmed).
fn format_decimal(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    let rendered = round_half_away(value, max_fraction);
    let (integer, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));

    let mut fraction = fraction.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut out = group_thousands(integer);
    if !fraction.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(&fraction);
    }
    out
}

/// Exact binary value of `value` rounded to `fraction` digits, ties away
/// from zero. Magnitudes beyond `Decimal`'s range keep std formatting.
fn round_half_away(value: f64, fraction: usize) -> String {
    match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded = decimal
                .round_dp_with_strategy(fraction as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.fraction$}")
        }
        None => format!("{value:.fraction$}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(digit);
    }
    out
}

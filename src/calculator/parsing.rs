//! Permissive numeric coercion for the calculator's free-text fields.
//!
//! The bill amount and custom percentage come straight from text fields.
//! Anything that does not read as a plain or scientific decimal number is
//! treated as zero rather than rejected, so typing never blocks a calculation.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

lazy_static! {
    /// Optional sign, digits with an optional fraction, or a bare fraction.
    /// Captures: sign, integer part, fractional part.
    static ref PLAIN_DECIMAL: Regex = Regex::new(
        r"^([+-]?)(\d*)(?:\.(\d*))?$"
    ).unwrap();

    /// A plain decimal followed by an exponent.
    /// Captures: sign, integer part, fractional part, exponent.
    static ref SCIENTIFIC: Regex = Regex::new(
        r"^([+-]?)(\d*)(?:\.(\d*))?[eE]([+-]?\d+)$"
    ).unwrap();
}

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: usize = 28;

/// Most significant digits a `Decimal` mantissa can hold.
const MAX_DIGITS: usize = 29;

/// Coerce user text into a decimal, falling back to zero.
///
/// Accepts `"50"`, `"50.00"`, `".5"`, `"5."`, `"+5"`, `"-5"` and `"1e3"`.
/// Whitespace, separators, symbols, empty text and out-of-range values all
/// yield `0`. This never fails.
pub fn coerce_decimal(text: &str) -> Decimal {
    match parse_decimal(text) {
        Some(value) => value,
        None => {
            tracing::trace!(text, "coercing non-numeric text to zero");
            Decimal::ZERO
        }
    }
}

/// Strict counterpart of [`coerce_decimal`]: `None` when the text is not a number.
///
/// Digits beyond what a `Decimal` can represent are dropped from the fraction.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    if let Some(caps) = SCIENTIFIC.captures(text) {
        let integer = &caps[2];
        let fraction = caps.get(3).map_or("", |m| m.as_str());
        let exponent: i64 = caps[4].parse().ok()?;
        let (integer, fraction) = shift_point(integer, fraction, exponent)?;
        return from_parts(&caps[1] == "-", &integer, &fraction);
    }

    let caps = PLAIN_DECIMAL.captures(text)?;
    let fraction = caps.get(3).map_or("", |m| m.as_str());
    from_parts(&caps[1] == "-", &caps[2], fraction)
}

/// Move the decimal point of `integer.fraction` by `exponent` places.
///
/// Returns `None` when there are no digits or the value cannot fit.
fn shift_point(integer: &str, fraction: &str, exponent: i64) -> Option<(String, String)> {
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let digits = format!("{}{}", integer, fraction);
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(("0".to_string(), String::new()));
    }

    // Position of the point within `digits` after shifting.
    let point = (integer.len() as i64).checked_add(exponent)?;
    let leading_zeros = (digits.len() - significant.len()) as i64;
    if point - leading_zeros > MAX_DIGITS as i64 {
        return None;
    }
    if point < -(MAX_SCALE as i64) {
        return Some(("0".to_string(), String::new()));
    }

    if point <= 0 {
        let zeros = "0".repeat((-point) as usize);
        return Some(("0".to_string(), format!("{}{}", zeros, digits)));
    }

    let point = point as usize;
    if point >= digits.len() {
        let zeros = "0".repeat(point - digits.len());
        Some((format!("{}{}", digits, zeros), String::new()))
    } else {
        Some((digits[..point].to_string(), digits[point..].to_string()))
    }
}

/// Build a decimal from sign, integer digits and fraction digits.
///
/// The fraction is cut to what the mantissa can still hold; an integer part
/// that is out of range yields `None`.
fn from_parts(negative: bool, integer: &str, fraction: &str) -> Option<Decimal> {
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let integer = integer.trim_start_matches('0');
    let room = if integer.is_empty() {
        MAX_SCALE
    } else {
        MAX_SCALE.min(MAX_DIGITS.saturating_sub(integer.len()))
    };
    let fraction = &fraction[..fraction.len().min(room)];

    let mut normalized = String::with_capacity(integer.len() + fraction.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if integer.is_empty() { "0" } else { integer });
    if !fraction.is_empty() {
        normalized.push('.');
        normalized.push_str(fraction);
    }

    Decimal::from_str(&normalized).ok()
}

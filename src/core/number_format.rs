use std::fmt;
use std::iter;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Upper bound accepted for display precision.
///
/// Matches the range hosts accept for fixed-point number formatting.
pub const MAX_PRECISION: u8 = 100;

/// Precision applied when a view is first created.
pub const DEFAULT_PRECISION: u8 = 2;

/// Validated number of digits after the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Precision(u8);

impl Precision {
    /// Validates a raw precision request coming from the UI layer.
    pub fn new(raw: i64) -> ChartResult<Self> {
        if raw < 0 {
            return Err(ChartError::InvalidArgument(format!(
                "precision must be >= 0, got {raw}"
            )));
        }
        if raw > i64::from(MAX_PRECISION) {
            return Err(ChartError::InvalidArgument(format!(
                "precision must be <= {MAX_PRECISION}, got {raw}"
            )));
        }
        Ok(Self(raw as u8))
    }

    #[must_use]
    pub fn digits(self) -> u8 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(DEFAULT_PRECISION)
    }
}

impl TryFrom<i64> for Precision {
    type Error = ChartError;

    fn try_from(raw: i64) -> ChartResult<Self> {
        Self::new(raw)
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn format_non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

fn pad_fraction(mut text: String, precision: usize) -> String {
    if precision == 0 {
        return text;
    }
    let fraction_len = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    if fraction_len == 0 {
        text.push('.');
    }
    text.extend(iter::repeat_n('0', precision.saturating_sub(fraction_len)));
    text
}

/// Largest scale a `Decimal` holds without silently rounding.
const DECIMAL_SCALE_LIMIT: usize = 28;

/// Rounds plain decimal text (no exponent) to `digits` fractional digits,
/// half away from zero, padding with zeros.
fn round_decimal_text(text: &str, digits: usize) -> String {
    let (sign, magnitude) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = magnitude.split_once('.').unwrap_or((magnitude, ""));
    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(iter::repeat(b'0')).take(digits))
        .collect();
    let mut integer_len = integer.len();

    if fraction.as_bytes().get(digits).is_some_and(|next| *next >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            integer_len += 1;
        }
    }

    let (whole, fraction) = kept.split_at(integer_len);
    let mut out = String::with_capacity(sign.len() + kept.len() + 1);
    out.push_str(sign);
    out.extend(whole.iter().copied().map(char::from));
    if digits > 0 {
        out.push('.');
        out.extend(fraction.iter().copied().map(char::from));
    }
    out
}

/// Formats `value` with exactly `precision` fractional digits.
///
/// Rounding starts from the shortest decimal text that round-trips to `value`
/// and resolves ties away from zero, so `5.005` at two digits reads `5.01`.
#[must_use]
pub fn format_fixed(value: f64, precision: Precision) -> String {
    if !value.is_finite() {
        return format_non_finite(value).to_owned();
    }
    let digits = usize::from(precision.digits());
    let text = if value == 0.0 {
        "0".to_owned()
    } else {
        value.to_string()
    };

    let fraction_len = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    if digits <= DECIMAL_SCALE_LIMIT && fraction_len <= DECIMAL_SCALE_LIMIT {
        if let Ok(decimal) = Decimal::from_str(&text) {
            let rounded = decimal.round_dp_with_strategy(
                u32::from(precision.digits()),
                RoundingStrategy::MidpointAwayFromZero,
            );
            return pad_fraction(rounded.to_string(), digits);
        }
    }
    // Scales or magnitudes a `Decimal` cannot carry are rounded on the text.
    round_decimal_text(&text, digits)
}

/// Renders a number the way a plain host-side `toString` would: shortest
/// round-trip text, no exponent, no negative zero.
#[must_use]
pub fn format_plain(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value).to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}

/// Integer part of `floor(value)` as text.
#[must_use]
pub fn format_floor(value: f64) -> String {
    format_plain(value.floor())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: i64) -> Precision {
        Precision::new(raw).expect("valid precision")
    }

    #[test]
    fn fixed_rounds_half_away_from_zero() {
        assert_eq!(format_fixed(5.005, p(2)), "5.01");
        assert_eq!(format_fixed(-5.005, p(2)), "-5.01");
        assert_eq!(format_fixed(2.5, p(0)), "3");
        assert_eq!(format_fixed(-2.5, p(0)), "-3");
    }

    #[test]
    fn fixed_pads_missing_fraction_digits() {
        assert_eq!(format_fixed(5.0, p(3)), "5.000");
        assert_eq!(format_fixed(0.1, p(4)), "0.1000");
        assert_eq!(format_fixed(12.0, p(0)), "12");
    }

    #[test]
    fn fixed_handles_values_outside_decimal_range() {
        assert_eq!(
            format_fixed(1e30, p(1)),
            "1000000000000000000000000000000.0"
        );
        assert_eq!(
            format_fixed(1e29, p(2)),
            "100000000000000000000000000000.00"
        );
        assert_eq!(
            format_fixed(-1e29, p(0)),
            "-100000000000000000000000000000"
        );
        assert_eq!(format_fixed(f64::NAN, p(2)), "NaN");
        assert_eq!(format_fixed(f64::NEG_INFINITY, p(2)), "-Infinity");
    }

    #[test]
    fn fixed_keeps_digits_beyond_decimal_scale() {
        assert_eq!(
            format_fixed(1e-29, p(30)),
            format!("0.{}10", "0".repeat(28))
        );
        assert_eq!(
            format_fixed(1.2345678901234566e-13, p(30)),
            "0.000000000000123456789012345660"
        );
        assert_eq!(
            format_fixed(3.0000000000000005e-14, p(29)),
            "0.00000000000003000000000000001"
        );
        assert_eq!(format_fixed(0.1, p(100)), format!("0.1{}", "0".repeat(99)));
        assert_eq!(format_fixed(2.5, p(29)), format!("2.5{}", "0".repeat(28)));
    }

    #[test]
    fn fixed_rounds_long_fractions_half_away_from_zero() {
        assert_eq!(
            format_fixed(9.5e-29, p(29)),
            format!("0.{}10", "0".repeat(27))
        );
        assert_eq!(
            format_fixed(-9.5e-29, p(29)),
            format!("-0.{}10", "0".repeat(27))
        );
        assert_eq!(format_fixed(-0.0, p(30)), format!("0.{}", "0".repeat(30)));
    }

    #[test]
    fn text_rounding_carries_into_the_integer_part() {
        assert_eq!(round_decimal_text("9.96", 1), "10.0");
        assert_eq!(round_decimal_text("-0.5", 0), "-1");
        assert_eq!(round_decimal_text("0.449", 1), "0.4");
        assert_eq!(round_decimal_text("12", 2), "12.00");
    }

    #[test]
    fn plain_and_floor_drop_negative_zero() {
        assert_eq!(format_plain(-0.0), "0");
        assert_eq!(format_floor(-0.0), "0");
        assert_eq!(format_floor(-0.5), "-1");
        assert_eq!(format_plain(4.5), "4.5");
    }

    #[test]
    fn precision_bounds_are_enforced() {
        assert!(Precision::new(-1).is_err());
        assert!(Precision::new(101).is_err());
        assert_eq!(Precision::new(100).map(Precision::digits).ok(), Some(100));
        assert_eq!(Precision::default().digits(), DEFAULT_PRECISION);
    }
}

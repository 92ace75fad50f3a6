//! Whole-number conversion and input validation.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::NumeralError;
use super::lexicon;
use super::triplet::render_triplet;
use super::types::{Numeral, PlaceValue, Region};

/// Largest number that can be converted.
pub const MAX_NUMBER: u64 = 999_999_999_999;

/// Convert `n` into its word tokens for the given region.
///
/// Returns [`NumeralError::OutOfRange`] when `n` exceeds [`MAX_NUMBER`].
pub fn to_words(n: u64, region: Region) -> Result<Numeral, NumeralError> {
    if n > MAX_NUMBER {
        return Err(NumeralError::OutOfRange(n.to_string()));
    }

    let mut words = Vec::new();
    let mut rank = 0;
    for place in PlaceValue::DESCENDING {
        let group = place.group_of(n);
        if group == 0 {
            continue;
        }
        rank += 1;
        let rendered = render_triplet(group, rank);
        tracing::trace!(?place, group, rank, words = ?rendered, "rendered group");
        words.extend(rendered);
        words.extend(place.word());
    }

    if words.is_empty() {
        words.push(lexicon::digit_word(0));
    }

    let words: Vec<&'static str> = words.into_iter().map(|w| region.localize(w)).collect();
    tracing::debug!(n, %region, tokens = words.len(), "converted number");

    Ok(Numeral::new(region, words))
}

/// Convert `n` into a space-separated Vietnamese numeral.
///
/// ```rust
/// use docso::{Region, convert};
///
/// assert_eq!(convert(21, Region::North).unwrap(), "hai mươi mốt");
/// assert_eq!(convert(105, Region::South).unwrap(), "một trăm lẻ năm");
/// ```
pub fn convert(n: u64, region: Region) -> Result<String, NumeralError> {
    Ok(to_words(n, region)?.to_string())
}

/// Convert a signed integer. Negative values are rejected as invalid input.
pub fn convert_signed(n: i64, region: Region) -> Result<String, NumeralError> {
    let n = u64::try_from(n)
        .map_err(|_| NumeralError::InvalidInput(format!("{n} is negative")))?;
    convert(n, region)
}

/// Convert a decimal value that must be a whole, non-negative number.
///
/// Trailing zero fractions such as `12.00` are accepted.
pub fn convert_decimal(n: Decimal, region: Region) -> Result<String, NumeralError> {
    convert(decimal_to_u64(n)?, region)
}

/// Parse both the number text and the region tag, then convert.
///
/// The region tag is checked first, so an invalid tag is reported even when
/// the number is also invalid.
///
/// The number must be plain decimal text: an optional sign, ASCII digits,
/// and an optional `.` followed by digits. Exponents (`1e3`), underscores
/// (`1_000`) and thousands separators (`1,000`) are rejected as
/// [`NumeralError::InvalidInput`]. Whole numbers too long to parse are
/// reported as [`NumeralError::OutOfRange`].
pub fn convert_str(input: &str, region: &str) -> Result<String, NumeralError> {
    let region = Region::from_str(region)?;
    convert(parse_number(input)?, region)
}

/// Parse number text into a convertible integer.
pub(crate) fn parse_number(input: &str) -> Result<u64, NumeralError> {
    let trimmed = input.trim();
    let canonical = canonical_number_text(trimmed)
        .ok_or_else(|| NumeralError::InvalidInput(format!("{trimmed:?} is not a number")))?;

    // `from_str_exact` fails instead of rounding past 28 fraction digits.
    match Decimal::from_str_exact(&canonical) {
        Ok(value) => decimal_to_u64(value),
        Err(_) if canonical.starts_with('-') => Err(NumeralError::InvalidInput(format!(
            "{trimmed:?} is negative"
        ))),
        Err(_) if canonical.contains('.') => Err(NumeralError::InvalidInput(format!(
            "{trimmed:?} is not an integer"
        ))),
        Err(_) => Err(NumeralError::OutOfRange(canonical)),
    }
}

/// Canonical form of plain decimal text: `[-]digits[.digits]` without a
/// plus sign, leading integer zeros or trailing fraction zeros.
///
/// Returns `None` for anything else.
fn canonical_number_text(text: &str) -> Option<String> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.is_none_or(all_digits) {
        return None;
    }

    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };
    let frac_part = frac_part
        .map(|f| f.trim_end_matches('0'))
        .filter(|f| !f.is_empty());

    let mut canonical = String::with_capacity(text.len());
    if negative {
        canonical.push('-');
    }
    canonical.push_str(int_part);
    if let Some(frac_part) = frac_part {
        canonical.push('.');
        canonical.push_str(frac_part);
    }
    Some(canonical)
}

fn decimal_to_u64(n: Decimal) -> Result<u64, NumeralError> {
    if !n.fract().is_zero() {
        return Err(NumeralError::InvalidInput(format!("{n} is not an integer")));
    }
    if n < Decimal::ZERO {
        return Err(NumeralError::InvalidInput(format!("{n} is negative")));
    }
    if n > Decimal::from(MAX_NUMBER) {
        return Err(NumeralError::OutOfRange(n.trunc().normalize().to_string()));
    }
    n.to_u64()
        .ok_or_else(|| NumeralError::InvalidInput(format!("{n} is not representable")))
}

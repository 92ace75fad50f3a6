//! Conversion settings bound to a default region.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::NumeralError;
use super::formatter;
use super::types::{Numeral, Region};

/// Conversion settings, bound to a default region.
///
/// Deserializes from any serde format; missing fields fall back to
/// [`Converter::default`].
///
/// ```rust
/// use docso::{ConverterBuilder, Region};
///
/// let converter = ConverterBuilder::new().region(Region::South).build();
/// assert_eq!(converter.convert(1_001).unwrap(), "một ngàn không trăm lẻ một");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Converter {
    /// Regional spelling applied to every conversion.
    pub region: Region,
}

impl Converter {
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    /// Token form of [`Converter::convert`].
    pub fn to_words(&self, n: u64) -> Result<Numeral, NumeralError> {
        formatter::to_words(n, self.region)
    }

    pub fn convert(&self, n: u64) -> Result<String, NumeralError> {
        formatter::convert(n, self.region)
    }

    pub fn convert_signed(&self, n: i64) -> Result<String, NumeralError> {
        formatter::convert_signed(n, self.region)
    }

    pub fn convert_decimal(&self, n: Decimal) -> Result<String, NumeralError> {
        formatter::convert_decimal(n, self.region)
    }

    /// Parse number text and convert it with the configured region.
    pub fn convert_str(&self, input: &str) -> Result<String, NumeralError> {
        formatter::convert(formatter::parse_number(input)?, self.region)
    }
}

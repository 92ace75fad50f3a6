//! Fluent construction of converter settings.

use std::str::FromStr;

use super::converter::Converter;
use super::error::NumeralError;
use super::types::Region;

/// Builder for [`Converter`].
///
/// ```
/// use docso::core::*;
///
/// let converter = ConverterBuilder::new()
///     .region_tag("south")
///     .unwrap()
///     .build();
/// assert_eq!(converter.region, Region::South);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    region: Region,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Set the region from its configuration tag ("north" / "south").
    pub fn region_tag(self, tag: &str) -> Result<Self, NumeralError> {
        Ok(self.region(Region::from_str(tag)?))
    }

    pub fn build(self) -> Converter {
        Converter::new(self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_north() {
        assert_eq!(ConverterBuilder::new().build().region, Region::North);
    }

    #[test]
    fn region_from_tag() {
        let converter = ConverterBuilder::new().region_tag("SOUTH").unwrap().build();
        assert_eq!(converter.region, Region::South);
    }

    #[test]
    fn unknown_tag_rejected() {
        let err = ConverterBuilder::new().region_tag("central").unwrap_err();
        assert_eq!(err, NumeralError::InvalidRegion("central".into()));
    }
}

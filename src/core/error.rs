use thiserror::Error;

/// Errors that can occur while converting a number to its Vietnamese numeral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumeralError {
    /// The value is negative, fractional, or not a number at all.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The value is larger than 999,999,999,999.
    #[error("out of range: {0} is greater than 999,999,999,999")]
    OutOfRange(String),

    /// The region tag is neither "north" nor "south".
    #[error("invalid region: {0:?} (expected \"north\" or \"south\")")]
    InvalidRegion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = NumeralError::OutOfRange("1000000000000".into());
        assert_eq!(
            err.to_string(),
            "out of range: 1000000000000 is greater than 999,999,999,999"
        );

        let err = NumeralError::InvalidRegion("central".into());
        assert_eq!(
            err.to_string(),
            "invalid region: \"central\" (expected \"north\" or \"south\")"
        );

        let err = NumeralError::InvalidInput("-3 is negative".into());
        assert_eq!(err.to_string(), "invalid input: -3 is negative");
    }
}

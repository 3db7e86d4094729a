//! IMO number validation.
//!
//! An IMO number is the 7-digit identifier assigned to a ship under the
//! International Maritime Organization scheme. All lookups enter the engine
//! through [`ImoNumber::parse`], so the rest of the code only ever sees a
//! well-formed identifier.

use std::fmt;

use thiserror::Error;

use crate::config::{CACHE_KEY_PREFIX, IMO_LENGTH};

/// Validation failures for raw IMO input.
///
/// Each variant carries a human-readable reason suitable for a 400 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImoValidationError {
    /// The input was empty or absent.
    #[error("IMO number is required")]
    Required,

    /// The input was present but not a 7-digit string.
    #[error("IMO number must be exactly 7 digits (got {provided:?})")]
    NotSevenDigits {
        /// The offending input, echoed back for diagnostics.
        provided: String,
    },
}

/// A validated 7-digit IMO number.
///
/// Immutable once constructed; the inner string is guaranteed to be exactly
/// seven ASCII digits. Construction is only possible through [`parse`].
///
/// [`parse`]: ImoNumber::parse
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImoNumber(String);

impl ImoNumber {
    /// Parses and validates a raw IMO string.
    ///
    /// Rules: the input must be non-empty, exactly 7 characters long, and
    /// consist solely of ASCII digits `0`-`9`. There is no numeric parsing,
    /// so non-ASCII digits and signs are rejected rather than coerced, and
    /// leading zeros are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ImoValidationError`] describing the violation.
    pub fn parse(input: &str) -> Result<Self, ImoValidationError> {
        if input.is_empty() {
            return Err(ImoValidationError::Required);
        }
        if input.len() != IMO_LENGTH || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ImoValidationError::NotSevenDigits {
                provided: input.to_string(),
            });
        }
        Ok(ImoNumber(input.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the cache key for this identifier (`vessel_<imo>`).
    pub fn cache_key(&self) -> String {
        format!("{}{}", CACHE_KEY_PREFIX, self.0)
    }
}

impl fmt::Display for ImoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_seven_digits() {
        let imo = ImoNumber::parse("1234567").expect("valid IMO should parse");
        assert_eq!(imo.as_str(), "1234567");
        assert_eq!(imo.to_string(), "1234567");
    }

    #[test]
    fn test_parse_preserves_leading_zeros() {
        let imo = ImoNumber::parse("0000042").expect("leading zeros are allowed");
        assert_eq!(imo.as_str(), "0000042");
    }

    #[test]
    fn test_parse_empty_is_required_error() {
        assert_eq!(ImoNumber::parse(""), Err(ImoValidationError::Required));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        for input in ["1", "123456", "12345678", "123456789012"] {
            let err = ImoNumber::parse(input).unwrap_err();
            assert_eq!(
                err,
                ImoValidationError::NotSevenDigits {
                    provided: input.to_string()
                },
                "input {:?} should be rejected for length",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        for input in ["abcdefg", "123456a", "12 4567", "123-456", "+123456", "-123456"] {
            assert!(
                ImoNumber::parse(input).is_err(),
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII; they must not pass.
        assert!(ImoNumber::parse("١٢٣٤٥٦٧").is_err());
        // Fullwidth digits likewise.
        assert!(ImoNumber::parse("１２３４５６７").is_err());
    }

    #[test]
    fn test_cache_key_format() {
        let imo = ImoNumber::parse("9321483").unwrap();
        assert_eq!(imo.cache_key(), "vessel_9321483");
    }

    #[test]
    fn test_error_messages_are_human_readable() {
        assert_eq!(
            ImoValidationError::Required.to_string(),
            "IMO number is required"
        );
        let err = ImoNumber::parse("123").unwrap_err();
        assert!(err.to_string().contains("exactly 7 digits"));
        assert!(err.to_string().contains("123"));
    }
}

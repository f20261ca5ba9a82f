use thiserror::Error;

use crate::pattern::PatternError;

/// Represents errors that can occur while building a SimpleTime engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimpleTimeError {
    /// No pattern was supplied to the config builder
    #[error("Pattern must be set before building a SimpleTime config")]
    MissingPattern,
    /// No locale was supplied to the config builder
    #[error("Locale must be set before building a SimpleTime config")]
    MissingLocale,
    /// The pattern could not be compiled
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),
    /// The locale tag could not be understood
    #[error("Invalid locale tag {0:?}")]
    InvalidLocale(String),
    /// The timezone name is not in the IANA database
    #[error("Unknown time zone {0:?}")]
    UnknownTimeZone(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SimpleTimeError::MissingPattern.to_string(),
            "Pattern must be set before building a SimpleTime config"
        );
        assert_eq!(
            SimpleTimeError::UnknownTimeZone("Mars/Olympus".into()).to_string(),
            "Unknown time zone \"Mars/Olympus\""
        );
        assert_eq!(
            SimpleTimeError::InvalidPattern(PatternError::UnsupportedField('Q')).to_string(),
            "Invalid pattern: Unsupported pattern letter 'Q'"
        );
    }

    #[test]
    fn test_error_from_pattern_error() {
        let err: SimpleTimeError = PatternError::UnterminatedQuote.into();
        assert_eq!(
            err,
            SimpleTimeError::InvalidPattern(PatternError::UnterminatedQuote)
        );
    }
}

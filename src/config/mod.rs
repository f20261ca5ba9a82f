//! Configuration for a SimpleTime engine

mod builder;

use std::sync::Arc;

use chrono_tz::Tz;

pub use builder::SimpleTimeConfigBuilder;

use crate::error::SimpleTimeError;
use crate::locale::Locale;
use crate::pattern::Pattern;
use crate::phrasing::Phrasing;

/// Full ISO 8601 with microseconds and a colon-separated offset,
/// e.g. `2016-01-21T17:07:18.134000+00:00`
pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd'T'HH:mm:ss.SSSSSSXXXXX";

/// Immutable engine configuration: pattern, locale, timezone and wording
#[derive(Debug, Clone)]
pub struct SimpleTimeConfig {
    pattern: Pattern,
    locale: Locale,
    time_zone: Tz,
    phrasing: Arc<dyn Phrasing>,
}

impl SimpleTimeConfig {
    /// Create a new configuration builder
    pub fn builder() -> SimpleTimeConfigBuilder {
        SimpleTimeConfigBuilder::new()
    }

    /// The default pattern with the host's locale and timezone
    pub fn from_env() -> Result<Self, SimpleTimeError> {
        Self::builder()
            .pattern(DEFAULT_PATTERN)
            .locale(Locale::from_env())
            .build()
    }

    #[inline(always)]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline(always)]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    #[inline(always)]
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    #[inline(always)]
    pub fn phrasing(&self) -> &dyn Phrasing {
        self.phrasing.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_uses_default_pattern() {
        let config = SimpleTimeConfig::from_env().unwrap();
        assert_eq!(config.pattern().as_str(), DEFAULT_PATTERN);
    }

    #[test]
    fn test_builder_requires_pattern_and_locale() {
        let err = SimpleTimeConfig::builder()
            .locale(Locale::en_us())
            .build()
            .unwrap_err();
        assert_eq!(err, SimpleTimeError::MissingPattern);

        let err = SimpleTimeConfig::builder()
            .pattern(DEFAULT_PATTERN)
            .build()
            .unwrap_err();
        assert_eq!(err, SimpleTimeError::MissingLocale);
    }
}

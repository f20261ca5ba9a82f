//! SimpleTimeConfig builder for constructing configuration

use std::collections::HashMap;
use std::sync::Arc;

use chrono_tz::Tz;

use super::SimpleTimeConfig;
use crate::error::SimpleTimeError;
use crate::locale::Locale;
use crate::pattern::Pattern;
use crate::phrasing::{DefaultPhrasing, EnglishPhrasing, Phrasing};

/// Builder for SimpleTimeConfig
#[derive(Debug, Default)]
pub struct SimpleTimeConfigBuilder {
    pattern: Option<String>,
    locale: Option<Locale>,
    time_zone: Option<Tz>,
    phrasing: HashMap<String, Arc<dyn Phrasing>>,
}

impl SimpleTimeConfigBuilder {
    /// Create an empty builder; pattern and locale must be set before `build`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern used for parsing and for the canonical UTC string
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the locale for user-facing strings
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Set the locale from a tag such as `en-US` or `de_DE.UTF-8`
    pub fn locale_tag(self, tag: &str) -> Result<Self, SimpleTimeError> {
        Ok(self.locale(Locale::parse(tag)?))
    }

    /// Set the timezone for localized output and day boundaries.
    /// Defaults to the host timezone.
    pub const fn time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    /// Set the timezone by IANA name, e.g. `America/New_York`
    pub fn time_zone_name(self, name: &str) -> Result<Self, SimpleTimeError> {
        let time_zone = name
            .parse::<Tz>()
            .map_err(|_| SimpleTimeError::UnknownTimeZone(name.to_string()))?;
        Ok(self.time_zone(time_zone))
    }

    /// Register the wording used for locales of `language` (e.g. `"fr"`)
    pub fn phrasing(mut self, language: &str, phrasing: Arc<dyn Phrasing>) -> Self {
        self.phrasing.insert(language.to_ascii_lowercase(), phrasing);
        self
    }

    /// Build the final SimpleTimeConfig
    pub fn build(mut self) -> Result<SimpleTimeConfig, SimpleTimeError> {
        let source = self.pattern.ok_or(SimpleTimeError::MissingPattern)?;
        let locale = self.locale.ok_or(SimpleTimeError::MissingLocale)?;
        let pattern = Pattern::compile(&source)?;
        let time_zone = self.time_zone.unwrap_or_else(host_time_zone);

        let phrasing = self
            .phrasing
            .remove(locale.language())
            .unwrap_or_else(|| default_phrasing(locale.language()));

        Ok(SimpleTimeConfig {
            pattern,
            locale,
            time_zone,
            phrasing,
        })
    }
}

fn default_phrasing(language: &str) -> Arc<dyn Phrasing> {
    match language {
        "en" => Arc::new(EnglishPhrasing),
        _ => Arc::new(DefaultPhrasing),
    }
}

/// The host timezone, or UTC when it cannot be determined
pub(crate) fn host_time_zone() -> Tz {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse().ok())
        .unwrap_or(chrono_tz::UTC)
}

//! Locale formatting profile

use chrono::{DateTime, TimeZone};

use crate::locale::{Locale, LocaleData};
use crate::pattern::{Pattern, PatternError};

/// The three localized styles, compiled once per locale
#[derive(Debug, Clone)]
pub struct FormattingProfile {
    time: Pattern,
    date: Pattern,
    date_time: Pattern,
    locale_data: &'static LocaleData,
}

impl FormattingProfile {
    /// Compile the short time, medium date and medium date + short time
    /// patterns for `locale`
    pub fn for_locale(locale: &Locale) -> Result<Self, PatternError> {
        let locale_data = locale.data();
        let date_time = locale_data
            .datetime_pattern
            .replace("{1}", locale_data.date_medium)
            .replace("{0}", locale_data.time_short);

        Ok(Self {
            time: Pattern::compile(locale_data.time_short)?,
            date: Pattern::compile(locale_data.date_medium)?,
            date_time: Pattern::compile(&date_time)?,
            locale_data,
        })
    }

    #[inline]
    pub fn time_pattern(&self) -> &Pattern {
        &self.time
    }

    #[inline]
    pub fn date_pattern(&self) -> &Pattern {
        &self.date
    }

    #[inline]
    pub fn date_time_pattern(&self) -> &Pattern {
        &self.date_time
    }

    #[inline]
    pub(crate) fn locale_data(&self) -> &'static LocaleData {
        self.locale_data
    }

    pub(crate) fn format_time<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> String {
        self.time.format(dt, self.locale_data)
    }

    pub(crate) fn format_date<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> String {
        self.date.format(dt, self.locale_data)
    }

    pub(crate) fn format_date_time<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> String {
        self.date_time.format(dt, self.locale_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile(tag: &str) -> FormattingProfile {
        FormattingProfile::for_locale(&tag.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_every_baked_locale_compiles() {
        for tag in ["en-US", "en-GB", "de", "fr", "es", "ja"] {
            assert!(
                FormattingProfile::for_locale(&tag.parse().unwrap()).is_ok(),
                "locale {tag}"
            );
        }
    }

    #[test]
    fn test_en_us_styles() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 45).unwrap();
        let profile = profile("en-US");

        assert_eq!(profile.format_time(&dt), "2:30 PM");
        assert_eq!(profile.format_date(&dt), "Mar 15, 2024");
        assert_eq!(profile.format_date_time(&dt), "Mar 15, 2024, 2:30 PM");
        assert_eq!(profile.date_time_pattern().as_str(), "MMM d, y, h:mm a");
    }

    #[test]
    fn test_other_locale_styles() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 9, 5, 0).unwrap();

        assert_eq!(profile("de-DE").format_date_time(&dt), "05.03.2024, 09:05");
        assert_eq!(profile("en-GB").format_date_time(&dt), "5 Mar 2024, 09:05");
        assert_eq!(profile("fr").format_date_time(&dt), "5 mars 2024 09:05");
        assert_eq!(profile("es").format_date_time(&dt), "5 mar 2024, 9:05");
        assert_eq!(profile("ja").format_date_time(&dt), "2024/03/05 9:05");
    }
}

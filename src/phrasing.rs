//! Locale-keyed wording for relative and day-relative strings
//!
//! The config picks one [`Phrasing`] per engine from the locale's language.
//! English gets [`EnglishPhrasing`]; every other language falls back to
//! [`DefaultPhrasing`] unless the caller registers its own.

use std::fmt;

use crate::relative::RelativeSpan;

/// Where an instant falls relative to the local day boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    /// At or after today's local midnight
    Today,
    /// Between yesterday's and today's local midnight
    Yesterday,
    Earlier,
}

impl Day {
    /// Classify `instant` against today's and yesterday's local midnights
    pub fn classify(instant: i64, today_midnight: i64, yesterday_midnight: i64) -> Self {
        if instant >= today_midnight {
            Day::Today
        } else if instant >= yesterday_midnight {
            Day::Yesterday
        } else {
            Day::Earlier
        }
    }
}

/// Wording policy for one language
pub trait Phrasing: fmt::Debug + Send + Sync {
    /// Phrase an instant on `day`, given its short localized time and its
    /// localized date and time
    fn day(&self, day: Day, time: &str, date_time: &str) -> String {
        match day {
            Day::Today => time.to_string(),
            Day::Yesterday | Day::Earlier => date_time.to_string(),
        }
    }

    /// Phrase a past duration
    fn relative(&self, span: RelativeSpan) -> String {
        span.to_string()
    }
}

/// No day words: time only for today, full date and time otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPhrasing;

impl Phrasing for DefaultPhrasing {}

/// "Today at ..." and "Yesterday at ..."
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPhrasing;

impl Phrasing for EnglishPhrasing {
    fn day(&self, day: Day, time: &str, date_time: &str) -> String {
        match day {
            Day::Today => format!("Today at {time}"),
            Day::Yesterday => format!("Yesterday at {time}"),
            Day::Earlier => date_time.to_string(),
        }
    }
}

//! The SimpleTime engine
//!
//! Split into modules by concern:
//! - `parse` - Text and snowflake to epoch milliseconds
//! - `canonical` - Canonical UTC and custom-pattern strings
//! - `localized` - Locale date, time and date + time styles
//! - `relative` - "Time ago" and Today/Yesterday strings

mod canonical;
mod localized;
mod parse;
mod relative;

use chrono::DateTime;
use chrono_tz::Tz;
use once_cell::sync::Lazy;

use crate::clock::{Clock, SystemClock};
use crate::config::SimpleTimeConfig;
use crate::error::SimpleTimeError;
use crate::profile::FormattingProfile;

static GLOBAL: Lazy<Result<SimpleTime, SimpleTimeError>> = Lazy::new(SimpleTime::from_env);

/// Time conversion and formatting engine.
///
/// Every operation is a read-only function of the config, the profile and
/// the clock, so one engine can be shared across threads.
#[derive(Debug)]
pub struct SimpleTime<C = SystemClock> {
    config: SimpleTimeConfig,
    profile: FormattingProfile,
    clock: C,
}

impl SimpleTime {
    /// Create an engine on the system clock
    pub fn new(config: SimpleTimeConfig) -> Result<Self, SimpleTimeError> {
        Self::with_clock(config, SystemClock)
    }

    /// Create an engine with the default pattern, host locale and host timezone
    pub fn from_env() -> Result<Self, SimpleTimeError> {
        Self::new(SimpleTimeConfig::from_env()?)
    }

    /// Process-wide engine built by [`SimpleTime::from_env`] on first use
    pub fn global() -> Result<&'static Self, SimpleTimeError> {
        GLOBAL.as_ref().map_err(Clone::clone)
    }
}

impl<C: Clock> SimpleTime<C> {
    /// Create an engine with a custom clock
    pub fn with_clock(config: SimpleTimeConfig, clock: C) -> Result<Self, SimpleTimeError> {
        let profile = FormattingProfile::for_locale(config.locale())?;
        tracing::trace!(
            locale = %config.locale(),
            time_zone = config.time_zone().name(),
            pattern = config.pattern().as_str(),
            "built SimpleTime engine"
        );
        Ok(Self {
            config,
            profile,
            clock,
        })
    }

    #[inline(always)]
    pub fn config(&self) -> &SimpleTimeConfig {
        &self.config
    }

    #[inline(always)]
    pub fn profile(&self) -> &FormattingProfile {
        &self.profile
    }

    /// Current time in epoch milliseconds
    #[inline(always)]
    pub fn current_time_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// An instant as a date/time in the configured timezone
    #[inline]
    pub(crate) fn local(&self, instant: i64) -> Option<DateTime<Tz>> {
        DateTime::from_timestamp_millis(instant)
            .map(|dt| dt.with_timezone(&self.config.time_zone()))
    }
}

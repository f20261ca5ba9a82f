//! Text and snowflake parsing
//!
//! Parse failures are silent and return epoch zero.

use tracing::debug;

use super::SimpleTime;
use crate::clock::Clock;
use crate::pattern::Pattern;
use crate::snowflake;

impl<C: Clock> SimpleTime<C> {
    /// Parse text in the configured pattern into epoch milliseconds.
    ///
    /// Returns `0` for `None`, malformed text or out-of-range fields.
    pub fn parse_date<'a>(&self, text: impl Into<Option<&'a str>>) -> i64 {
        match text.into() {
            Some(text) => self.parse_with(text, self.config.pattern()),
            None => 0,
        }
    }

    /// Parse text in an ad hoc pattern, with the same fallback as
    /// [`SimpleTime::parse_date`]. An invalid pattern also yields `0`.
    pub fn parse_date_with<'a>(&self, text: impl Into<Option<&'a str>>, pattern: &str) -> i64 {
        let Some(text) = text.into() else {
            return 0;
        };
        match Pattern::compile(pattern) {
            Ok(pattern) => self.parse_with(text, &pattern),
            Err(err) => {
                debug!(pattern, %err, "invalid parse pattern, falling back to epoch zero");
                0
            }
        }
    }

    /// Decode the instant embedded in a snowflake; `None` counts as `0`
    #[inline]
    pub fn parse_snowflake(&self, id: impl Into<Option<i64>>) -> i64 {
        snowflake::parse_snowflake(id)
    }

    fn parse_with(&self, text: &str, pattern: &Pattern) -> i64 {
        pattern
            .parse(text, &self.config.time_zone(), self.profile.locale_data())
            .unwrap_or_else(|| {
                debug!(
                    text,
                    pattern = pattern.as_str(),
                    "unparseable date, falling back to epoch zero"
                );
                0
            })
    }
}

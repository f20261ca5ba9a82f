//! # SimpleTime
//!
//! Convert between ISO 8601 timestamps, snowflake IDs and epoch milliseconds,
//! and render instants for people.
//!
//! - 🕰️ Canonical UTC strings (`2016-01-21T17:07:18.134000+00:00`)
//! - ❄️ Snowflake timestamp decoding
//! - 🌍 Locale date and time styles
//! - ⏳ "5 minutes ago" and "Yesterday at 5:07 PM"
//!
//! Parsing never fails loudly: malformed input yields epoch zero. Formatting
//! a missing instant yields `None`.

#![forbid(unsafe_code)]

mod clock;
mod config;
mod engine;
mod error;
mod locale;
mod pattern;
mod phrasing;
mod profile;
mod relative;
pub mod snowflake;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{SimpleTimeConfig, SimpleTimeConfigBuilder, DEFAULT_PATTERN};
pub use engine::SimpleTime;
pub use error::SimpleTimeError;
pub use locale::Locale;
pub use pattern::{Pattern, PatternError};
pub use phrasing::{Day, DefaultPhrasing, EnglishPhrasing, Phrasing};
pub use profile::FormattingProfile;
pub use relative::{RelativeSpan, TimeUnit};
pub use snowflake::{SnowflakeExtractor, SnowflakeParts, SNOWFLAKE_EPOCH};

// Re-export the timezone type used by the config
pub use chrono_tz::Tz;

//! "Time ago" and Today/Yesterday strings

use chrono::{NaiveDate, TimeDelta, TimeZone};

use super::SimpleTime;
use crate::clock::Clock;
use crate::phrasing::Day;
use crate::relative::RelativeSpan;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

impl<C: Clock> SimpleTime<C> {
    /// Humanized time elapsed since `instant`, e.g. `5 minutes ago`.
    ///
    /// A future instant is measured against itself, so it reads as
    /// `moments ago`. `None` yields `None`.
    pub fn to_relative_time(&self, instant: impl Into<Option<i64>>) -> Option<String> {
        let instant = instant.into()?;
        let reference = self.current_time_millis().max(instant);
        let span = RelativeSpan::from_elapsed(reference.saturating_sub(instant));
        Some(self.config.phrasing().relative(span))
    }

    /// Day-relative string: `Today at 5:07 PM`, `Yesterday at 5:07 PM`, or
    /// the localized date and time. Wording depends on the locale's
    /// phrasing. `None` yields `None`.
    pub fn to_readable_time_string(&self, instant: impl Into<Option<i64>>) -> Option<String> {
        let instant = instant.into()?;
        let dt = self.local(instant)?;
        let day = Day::classify(instant, self.today_midnight(), self.yesterday_midnight());

        let time = self.profile.format_time(&dt);
        let date_time = self.profile.format_date_time(&dt);
        Some(self.config.phrasing().day(day, &time, &date_time))
    }

    /// Epoch milliseconds of today's midnight in the configured timezone
    pub fn today_midnight(&self) -> i64 {
        let now = self.current_time_millis();
        self.local(now)
            .and_then(|local_now| self.start_of_day(local_now.date_naive()))
            .unwrap_or(now)
    }

    /// Epoch milliseconds of yesterday's midnight in the configured timezone.
    ///
    /// Yesterday may be 23 or 25 hours long across a DST change.
    pub fn yesterday_midnight(&self) -> i64 {
        let now = self.current_time_millis();
        self.local(now)
            .and_then(|local_now| local_now.date_naive().pred_opt())
            .and_then(|date| self.start_of_day(date))
            .unwrap_or_else(|| self.today_midnight().saturating_sub(DAY_MS))
    }

    /// First existing local instant of `date`
    fn start_of_day(&self, date: NaiveDate) -> Option<i64> {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        let time_zone = self.config.time_zone();

        // A DST gap may swallow midnight; the day then starts where the gap ends
        (0..=12)
            .find_map(|quarter| {
                let local = midnight + TimeDelta::minutes(quarter * 15);
                time_zone.from_local_datetime(&local).earliest()
            })
            .map(|dt| dt.timestamp_millis())
    }
}

//! Reading text back through a [`Pattern`]

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};

use super::{Field, Item, Pattern};
use crate::locale::LocaleData;

/// Upper bound on digits read by a greedy numeric field
const MAX_DIGITS: usize = 9;

/// Field values collected while walking the pattern
#[derive(Debug, Default)]
struct Parsed {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour24: Option<u32>,
    hour12: Option<u32>,
    pm: Option<bool>,
    minute: Option<u32>,
    second: Option<u32>,
    nanos: Option<u32>,
    offset: Option<i32>,
}

impl Pattern {
    /// Parse `text` into epoch milliseconds.
    ///
    /// The whole input must match. Text without an offset field is read as
    /// local time in `tz`; a local time skipped by a DST gap does not parse.
    pub(crate) fn parse<Tz: TimeZone>(
        &self,
        text: &str,
        tz: &Tz,
        locale_data: &LocaleData,
    ) -> Option<i64> {
        let mut parsed = Parsed::default();
        let mut rest = text;

        for (index, item) in self.items.iter().enumerate() {
            rest = match item {
                Item::Literal(literal) => rest.strip_prefix(literal.as_str())?,
                Item::Field { field, width } => {
                    // Adjacent numeric fields can only be split by width
                    let fixed = matches!(
                        self.items.get(index + 1),
                        Some(Item::Field { field: next, width: next_width })
                            if next.is_numeric(*next_width)
                    );
                    parsed.read(rest, *field, *width, fixed, locale_data)?
                }
            };
        }

        if !rest.is_empty() {
            return None;
        }
        parsed.resolve(tz)
    }
}

impl Parsed {
    fn read<'a>(
        &mut self,
        input: &'a str,
        field: Field,
        width: usize,
        fixed: bool,
        locale_data: &LocaleData,
    ) -> Option<&'a str> {
        if !field.is_numeric(width) {
            return self.read_text(input, field, locale_data);
        }

        // Years before 0 carry a sign, as the formatter writes them
        let (negative, input) = match input.strip_prefix('-') {
            Some(unsigned) if field == Field::Year && width != 2 => (true, unsigned),
            _ => (false, input),
        };

        let max = if fixed { width.min(MAX_DIGITS) } else { MAX_DIGITS };
        let (digits, rest) = take_digits(input, max)?;
        if fixed && digits.len() != width {
            return None;
        }
        let value: u32 = digits.parse().ok()?;

        match field {
            Field::Year if width == 2 && digits.len() == 2 => {
                self.year = Some(expand_two_digit_year(value));
            }
            Field::Year => {
                let year = i32::try_from(value).ok()?;
                self.year = Some(if negative { -year } else { year });
            }
            Field::Month => self.month = Some(value),
            Field::Day => self.day = Some(value),
            Field::Hour24 => self.hour24 = Some(value),
            Field::Hour12 => self.hour12 = Some(value),
            Field::Minute => self.minute = Some(value),
            Field::Second => self.second = Some(value),
            Field::Fraction => {
                let scale = 10u32.pow((MAX_DIGITS - digits.len()) as u32);
                self.nanos = Some(value * scale);
            }
            Field::Weekday | Field::AmPm | Field::IsoOffset | Field::RfcOffset => return None,
        }
        Some(rest)
    }

    fn read_text<'a>(
        &mut self,
        input: &'a str,
        field: Field,
        locale_data: &LocaleData,
    ) -> Option<&'a str> {
        match field {
            Field::Month => {
                let (index, rest) =
                    match_name(input, &locale_data.months_wide, &locale_data.months_abbr)?;
                self.month = Some(index as u32 + 1);
                Some(rest)
            }
            // The weekday is implied by the date, so it is only consumed
            Field::Weekday => {
                match_name(input, &locale_data.days_wide, &locale_data.days_abbr).map(|(_, r)| r)
            }
            Field::AmPm => {
                if let Some(rest) = strip_name(input, locale_data.am) {
                    self.pm = Some(false);
                    Some(rest)
                } else {
                    let rest = strip_name(input, locale_data.pm)?;
                    self.pm = Some(true);
                    Some(rest)
                }
            }
            Field::IsoOffset | Field::RfcOffset => {
                let (secs, rest) = parse_offset(input)?;
                self.offset = Some(secs);
                Some(rest)
            }
            _ => None,
        }
    }

    fn resolve<Tz: TimeZone>(self, tz: &Tz) -> Option<i64> {
        let date = NaiveDate::from_ymd_opt(
            self.year.unwrap_or(1970),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
        )?;

        let hour = match (self.hour24, self.hour12) {
            (Some(hour), _) => hour,
            (None, Some(hour)) if (1..=12).contains(&hour) => {
                hour % 12 + if self.pm == Some(true) { 12 } else { 0 }
            }
            (None, Some(_)) => return None,
            (None, None) => 0,
        };

        let time = NaiveTime::from_hms_nano_opt(
            hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.nanos.unwrap_or(0),
        )?;
        let local = date.and_time(time);

        let instant = match self.offset {
            Some(secs) => FixedOffset::east_opt(secs)?
                .from_local_datetime(&local)
                .single()?
                .timestamp_millis(),
            None => tz.from_local_datetime(&local).earliest()?.timestamp_millis(),
        };
        Some(instant)
    }
}

/// Two-digit years: 00-68 are 20xx, 69-99 are 19xx
fn expand_two_digit_year(yy: u32) -> i32 {
    let yy = yy as i32;
    if yy < 69 {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// Split off up to `max` leading ASCII digits; at least one is required
fn take_digits(input: &str, max: usize) -> Option<(&str, &str)> {
    let len = input
        .bytes()
        .take(max)
        .take_while(u8::is_ascii_digit)
        .count();
    (len > 0).then(|| input.split_at(len))
}

/// Case-insensitive `strip_prefix`
fn strip_name<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }
    let prefix = input.get(..name.len())?;
    (prefix.to_lowercase() == name.to_lowercase()).then(|| &input[name.len()..])
}

/// Longest case-insensitive match of `input` against either name list,
/// returning the matched index within its list
fn match_name<'a>(input: &'a str, wide: &[&str], abbr: &[&str]) -> Option<(usize, &'a str)> {
    wide.iter()
        .enumerate()
        .chain(abbr.iter().enumerate())
        .filter_map(|(index, name)| strip_name(input, name).map(|rest| (index, rest)))
        .min_by_key(|(_, rest)| rest.len())
}

/// Parse a UTC offset: `Z`, `GMT`, or `[GMT]±HH[[:]MM[[:]SS]]`
fn parse_offset(input: &str) -> Option<(i32, &str)> {
    if let Some(rest) = input.strip_prefix(['Z', 'z']) {
        return Some((0, rest));
    }

    let (gmt, input) = match input.strip_prefix("GMT") {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let sign = match input.chars().next() {
        Some('+') => 1,
        Some('-') => -1,
        // Bare "GMT"
        _ if gmt => return Some((0, input)),
        _ => return None,
    };

    let (hours, mut rest) = take_two_digits(&input[1..])?;
    let mut minutes = 0;
    let mut seconds = 0;

    if let Some((mm, after)) = take_separated_pair(rest) {
        minutes = mm;
        rest = after;
        if let Some((ss, after)) = take_separated_pair(rest) {
            seconds = ss;
            rest = after;
        }
    }

    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }
    Some((sign * (hours * 3600 + minutes * 60 + seconds) as i32, rest))
}

/// `MM` or `:MM`
fn take_separated_pair(input: &str) -> Option<(u32, &str)> {
    take_two_digits(input.strip_prefix(':').unwrap_or(input))
}

fn take_two_digits(input: &str) -> Option<(u32, &str)> {
    let (digits, rest) = take_digits(input, 2)?;
    if digits.len() != 2 {
        return None;
    }
    Some((digits.parse().ok()?, rest))
}

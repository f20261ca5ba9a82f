//! Rendering a [`Pattern`] against a date/time

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

use super::{Field, Item, Pattern};
use crate::locale::LocaleData;

impl Pattern {
    /// Format a date/time, taking names and day periods from `locale_data`
    pub(crate) fn format<Tz: TimeZone>(
        &self,
        dt: &DateTime<Tz>,
        locale_data: &LocaleData,
    ) -> String {
        let mut result = String::with_capacity(self.source.len() * 2);

        for item in &self.items {
            match item {
                Item::Literal(text) => result.push_str(text),
                Item::Field { field, width } => {
                    format_field(&mut result, dt, *field, *width, locale_data)
                }
            }
        }

        result
    }
}

fn format_field<Tz: TimeZone>(
    result: &mut String,
    dt: &DateTime<Tz>,
    field: Field,
    width: usize,
    locale_data: &LocaleData,
) {
    match field {
        Field::Year => format_year(result, dt.year(), width),
        Field::Month => {
            let index = dt.month0() as usize;
            match width {
                1 | 2 => format_number(result, dt.month(), width),
                3 => result.push_str(locale_data.months_abbr[index]),
                _ => result.push_str(locale_data.months_wide[index]),
            }
        }
        Field::Day => format_number(result, dt.day(), width),
        Field::Weekday => {
            let index = dt.weekday().num_days_from_sunday() as usize;
            if width <= 3 {
                result.push_str(locale_data.days_abbr[index]);
            } else {
                result.push_str(locale_data.days_wide[index]);
            }
        }
        Field::Hour24 => format_number(result, dt.hour(), width),
        Field::Hour12 => {
            let (_, hour12) = dt.hour12();
            format_number(result, hour12, width);
        }
        Field::AmPm => {
            let (is_pm, _) = dt.hour12();
            result.push_str(if is_pm { locale_data.pm } else { locale_data.am });
        }
        Field::Minute => format_number(result, dt.minute(), width),
        Field::Second => format_number(result, dt.second(), width),
        Field::Fraction => format_fraction(result, dt.nanosecond() % 1_000_000_000, width),
        Field::IsoOffset => {
            let secs = dt.offset().fix().local_minus_utc();
            match width {
                1 => format_offset(result, secs, false, true),
                2 | 4 => format_offset(result, secs, false, false),
                _ => format_offset(result, secs, true, false),
            }
        }
        Field::RfcOffset => {
            let secs = dt.offset().fix().local_minus_utc();
            match width {
                1..=3 => format_offset(result, secs, false, false),
                4 => {
                    result.push_str("GMT");
                    if secs != 0 {
                        format_offset(result, secs, true, false);
                    }
                }
                _ => format_offset(result, secs, true, false),
            }
        }
    }
}

/// Format year based on pattern width
fn format_year(result: &mut String, year: i32, width: usize) {
    if width == 2 {
        // 2-digit year
        format_number(result, (year % 100).unsigned_abs(), 2);
    } else {
        if year < 0 {
            result.push('-');
        }
        format_number(result, year.unsigned_abs(), width);
    }
}

/// Fractional seconds truncated (or zero-extended) to `width` digits
fn format_fraction(result: &mut String, nanos: u32, width: usize) {
    let mut buf = itoa::Buffer::new();
    let digits = buf.format(nanos);
    let mut padded = [b'0'; 9];
    padded[9 - digits.len()..].copy_from_slice(digits.as_bytes());

    for &b in padded.iter().take(width) {
        result.push(b as char);
    }
    for _ in 9..width {
        result.push('0');
    }
}

/// Format a UTC offset as `+HH[:]MM[[:]SS]`.
///
/// With `minutes_optional`, a whole-hour offset renders as `+HH` only.
fn format_offset(result: &mut String, offset_secs: i32, colon: bool, minutes_optional: bool) {
    result.push(if offset_secs < 0 { '-' } else { '+' });
    let abs = offset_secs.unsigned_abs();
    let (hours, minutes, seconds) = (abs / 3600, abs % 3600 / 60, abs % 60);

    format_number(result, hours, 2);
    if minutes_optional && minutes == 0 && seconds == 0 {
        return;
    }
    if colon {
        result.push(':');
    }
    format_number(result, minutes, 2);
    if seconds != 0 {
        if colon {
            result.push(':');
        }
        format_number(result, seconds, 2);
    }
}

/// Format a number with optional zero-padding
fn format_number(result: &mut String, value: u32, min_width: usize) {
    let mut buf = itoa::Buffer::new();
    let s = buf.format(value);
    for _ in s.len()..min_width {
        result.push('0');
    }
    result.push_str(s);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::cldr;
    use chrono::{FixedOffset, Utc};

    fn make_dt(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec).unwrap()
    }

    fn fmt<Tz: TimeZone>(dt: &DateTime<Tz>, pattern: &str) -> String {
        Pattern::compile(pattern).unwrap().format(dt, cldr::root())
    }

    #[test]
    fn test_format_canonical() {
        let dt = DateTime::from_timestamp_millis(1453396038134).unwrap();
        assert_eq!(
            fmt(&dt, "yyyy-MM-dd'T'HH:mm:ss.SSSSSSXXXXX"),
            "2016-01-21T17:07:18.134000+00:00"
        );
    }

    #[test]
    fn test_format_year_widths() {
        let dt = make_dt(2024, 3, 15, 10, 30, 45);
        assert_eq!(fmt(&dt, "y"), "2024");
        assert_eq!(fmt(&dt, "yy"), "24");
        assert_eq!(fmt(&dt, "yyyyyy"), "002024");

        let early = make_dt(7, 1, 1, 0, 0, 0);
        assert_eq!(fmt(&early, "yy"), "07");
        assert_eq!(fmt(&early, "yyyy"), "0007");
    }

    #[test]
    fn test_format_month_and_weekday_names() {
        // March 15, 2024 is a Friday
        let dt = make_dt(2024, 3, 15, 10, 30, 45);
        assert_eq!(fmt(&dt, "M"), "3");
        assert_eq!(fmt(&dt, "MM"), "03");
        assert_eq!(fmt(&dt, "MMM"), "Mar");
        assert_eq!(fmt(&dt, "MMMM"), "March");
        assert_eq!(fmt(&dt, "E"), "Fri");
        assert_eq!(fmt(&dt, "EEEE"), "Friday");

        let de = cldr::lookup(&"de".parse().unwrap());
        let pattern = Pattern::compile("EEEE, d. MMMM y").unwrap();
        assert_eq!(pattern.format(&dt, de), "Freitag, 15. März 2024");
    }

    #[test]
    fn test_format_hours() {
        let afternoon = make_dt(2024, 3, 15, 14, 5, 9);
        assert_eq!(fmt(&afternoon, "H:mm:ss"), "14:05:09");
        assert_eq!(fmt(&afternoon, "h:m:s a"), "2:5:9 PM");

        let midnight = make_dt(2024, 3, 15, 0, 0, 0);
        assert_eq!(fmt(&midnight, "hh a"), "12 AM");
        assert_eq!(fmt(&midnight, "HH"), "00");
    }

    #[test]
    fn test_format_fraction_widths() {
        let dt = DateTime::from_timestamp_millis(1453396038134).unwrap();
        assert_eq!(fmt(&dt, "S"), "1");
        assert_eq!(fmt(&dt, "SSS"), "134");
        assert_eq!(fmt(&dt, "SSSSSSSSSSS"), "13400000000");
    }

    #[test]
    fn test_format_offsets() {
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let dt = make_dt(2024, 3, 15, 10, 0, 0).with_timezone(&ist);
        assert_eq!(fmt(&dt, "X"), "+0530");
        assert_eq!(fmt(&dt, "XX"), "+0530");
        assert_eq!(fmt(&dt, "XXX"), "+05:30");
        assert_eq!(fmt(&dt, "Z"), "+0530");
        assert_eq!(fmt(&dt, "ZZZZ"), "GMT+05:30");
        assert_eq!(fmt(&dt, "ZZZZZ"), "+05:30");

        let pst = FixedOffset::west_opt(8 * 3600).unwrap();
        let dt = make_dt(2024, 3, 15, 10, 0, 0).with_timezone(&pst);
        assert_eq!(fmt(&dt, "X"), "-08");
        assert_eq!(fmt(&dt, "XXXXX"), "-08:00");

        let utc = make_dt(2024, 3, 15, 10, 0, 0);
        assert_eq!(fmt(&utc, "XXXXX"), "+00:00");
        assert_eq!(fmt(&utc, "ZZZZ"), "GMT");
    }

    #[test]
    fn test_format_is_idempotent() {
        let dt = make_dt(2024, 3, 15, 10, 30, 45);
        let pattern = Pattern::compile("EEEE d MMMM y HH:mm").unwrap();
        assert_eq!(
            pattern.format(&dt, cldr::root()),
            pattern.format(&dt, cldr::root())
        );
    }
}

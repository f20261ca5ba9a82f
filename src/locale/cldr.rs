//! Baked CLDR locale data for date/time formatting.
//!
//! A small subset of the Unicode CLDR patterns and symbols, enough for the
//! medium date and short time styles without pulling in ICU.
//!
//! Data sourced from: https://github.com/unicode-org/cldr-json

use super::Locale;

/// Locale-specific date/time formatting data
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleData {
    /// Medium date pattern, e.g. "MMM d, y"
    pub date_medium: &'static str,
    /// Short time pattern, e.g. "h:mm a"
    pub time_short: &'static str,
    /// Pattern gluing date and time together ("{1}" date, "{0}" time)
    pub datetime_pattern: &'static str,
    pub months_wide: [&'static str; 12],
    pub months_abbr: [&'static str; 12],
    /// Weekday names, 0 = Sunday
    pub days_wide: [&'static str; 7],
    pub days_abbr: [&'static str; 7],
    pub am: &'static str,
    pub pm: &'static str,
}

/// Get locale data for a locale, falling back by language and then to en-US
pub fn lookup(locale: &Locale) -> &'static LocaleData {
    match (locale.language(), locale.region()) {
        ("en", Some("GB" | "AU" | "NZ" | "IE")) => &EN_GB,
        ("en", _) => &EN_US,
        ("de", _) => &DE,
        ("fr", _) => &FR,
        ("es", _) => &ES,
        ("ja", _) => &JA,
        _ => &EN_US,
    }
}

/// Symbols used for the canonical representation, independent of locale
pub fn root() -> &'static LocaleData {
    &EN_US
}

const EN_MONTHS_WIDE: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const EN_DAYS_WIDE: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const EN_DAYS_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// English (US) - en-US
static EN_US: LocaleData = LocaleData {
    date_medium: "MMM d, y",
    time_short: "h:mm a",
    datetime_pattern: "{1}, {0}",
    months_wide: EN_MONTHS_WIDE,
    months_abbr: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    days_wide: EN_DAYS_WIDE,
    days_abbr: EN_DAYS_ABBR,
    am: "AM",
    pm: "PM",
};

// English (GB) - en-GB
static EN_GB: LocaleData = LocaleData {
    date_medium: "d MMM y",
    time_short: "HH:mm",
    datetime_pattern: "{1}, {0}",
    months_wide: EN_MONTHS_WIDE,
    months_abbr: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
    ],
    days_wide: EN_DAYS_WIDE,
    days_abbr: EN_DAYS_ABBR,
    am: "am",
    pm: "pm",
};

// German - de
static DE: LocaleData = LocaleData {
    date_medium: "dd.MM.y",
    time_short: "HH:mm",
    datetime_pattern: "{1}, {0}",
    months_wide: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    months_abbr: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    days_wide: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    days_abbr: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    am: "AM",
    pm: "PM",
};

// French - fr
static FR: LocaleData = LocaleData {
    date_medium: "d MMM y",
    time_short: "HH:mm",
    datetime_pattern: "{1} {0}",
    months_wide: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    months_abbr: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    days_wide: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    days_abbr: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    am: "AM",
    pm: "PM",
};

// Spanish - es
static ES: LocaleData = LocaleData {
    date_medium: "d MMM y",
    time_short: "H:mm",
    datetime_pattern: "{1}, {0}",
    months_wide: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    months_abbr: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    days_wide: [
        "domingo",
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
    ],
    days_abbr: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
    am: "a.\u{a0}m.",
    pm: "p.\u{a0}m.",
};

// Japanese - ja
static JA: LocaleData = LocaleData {
    date_medium: "y/MM/dd",
    time_short: "H:mm",
    datetime_pattern: "{1} {0}",
    months_wide: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    months_abbr: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    days_wide: [
        "日曜日",
        "月曜日",
        "火曜日",
        "水曜日",
        "木曜日",
        "金曜日",
        "土曜日",
    ],
    days_abbr: ["日", "月", "火", "水", "木", "金", "土"],
    am: "午前",
    pm: "午後",
};

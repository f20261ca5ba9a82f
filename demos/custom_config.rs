use std::sync::Arc;

use simpletime::{
    Day, Phrasing, RelativeSpan, SimpleTime, SimpleTimeConfig, SnowflakeExtractor, TimeUnit,
};

/// German day words
#[derive(Debug)]
struct GermanPhrasing;

impl Phrasing for GermanPhrasing {
    fn day(&self, day: Day, time: &str, date_time: &str) -> String {
        match day {
            Day::Today => format!("Heute um {time}"),
            Day::Yesterday => format!("Gestern um {time}"),
            Day::Earlier => date_time.to_string(),
        }
    }

    fn relative(&self, span: RelativeSpan) -> String {
        let (one, many) = match span.unit {
            TimeUnit::Moments => return "gerade eben".to_string(),
            TimeUnit::Minute => ("Minute", "Minuten"),
            TimeUnit::Hour => ("Stunde", "Stunden"),
            TimeUnit::Day => ("Tag", "Tagen"),
            TimeUnit::Week => ("Woche", "Wochen"),
            TimeUnit::Month => ("Monat", "Monaten"),
            TimeUnit::Year => ("Jahr", "Jahren"),
        };
        let unit = if span.quantity == 1 { one } else { many };
        format!("vor {} {}", span.quantity, unit)
    }
}

fn main() {
    // A date-only pattern, German symbols and Berlin day boundaries
    let config = SimpleTimeConfig::builder()
        .pattern("dd.MM.yyyy HH:mm")
        .locale_tag("de-DE")
        .unwrap()
        .time_zone_name("Europe/Berlin")
        .unwrap()
        .phrasing("de", Arc::new(GermanPhrasing))
        .build()
        .unwrap();

    let time = SimpleTime::new(config).unwrap();

    println!("Engine configuration:");
    println!("  Pattern: {}", time.config().pattern());
    println!("  Locale: {}", time.config().locale());
    println!("  Time zone: {}", time.config().time_zone().name());
    println!("  Date style: {}", time.profile().date_pattern());
    println!("  Time style: {}", time.profile().time_pattern());

    // Text without an offset is read in Berlin time
    let millis = time.parse_date("21.01.2016 18:07");
    println!("\nParsed: {} ms since epoch", millis);
    println!("  Canonical: {}", time.to_utc_string(millis).unwrap());
    println!("  Localized: {}", time.format_localized_date_time(millis).unwrap());
    println!("  Readable: {}", time.to_readable_time_string(millis).unwrap());
    println!("  Relative: {}", time.to_relative_time(millis).unwrap());
    println!(
        "  Custom: {}",
        time.format_custom(millis, "EEEE, d. MMMM y").unwrap()
    );

    // Snowflake components
    let extractor = SnowflakeExtractor::default();
    let id = extractor.lowest_for(millis).unwrap();
    let parts = extractor.decompose(id);
    println!("\nLowest snowflake at that instant: {}", id);
    println!("  Timestamp: {}", parts.timestamp);
    println!("  Worker: {}", parts.worker_id);
    println!("  Process: {}", parts.process_id);
    println!("  Increment: {}", parts.increment);
}

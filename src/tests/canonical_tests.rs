//! Canonical UTC and custom pattern tests

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{
        assert_starts_with, engine_at, utc_engine_at, SAMPLE_MILLIS, SAMPLE_TEXT,
    };
    use crate::*;
    use rand::Rng;

    /// 1900-01-01 to 2100-01-01
    const RANGE: std::ops::Range<i64> = -2_208_988_800_000..4_102_444_800_000;

    #[test]
    fn test_sample_round_trip() {
        let time = utc_engine_at(SAMPLE_MILLIS);
        let millis = time.parse_date(SAMPLE_TEXT);
        assert_eq!(time.to_utc_string(millis).as_deref(), Some(SAMPLE_TEXT));
    }

    #[test]
    fn test_random_round_trips() {
        let time = utc_engine_at(SAMPLE_MILLIS);
        let mut rng = rand::rng();

        for _ in 0..2000 {
            let millis = rng.random_range(RANGE);
            let text = time.to_utc_string(millis).unwrap();
            assert_eq!(time.parse_date(text.as_str()), millis, "text {text}");
            assert_eq!(time.to_utc_string(time.parse_date(text.as_str())), Some(text));
        }
    }

    #[test]
    fn test_canonical_is_utc_regardless_of_config() {
        let tokyo = engine_at(SAMPLE_MILLIS, "ja-JP", "Asia/Tokyo");
        let berlin = engine_at(SAMPLE_MILLIS, "de-DE", "Europe/Berlin");
        assert_eq!(tokyo.to_utc_string(SAMPLE_MILLIS).as_deref(), Some(SAMPLE_TEXT));
        assert_eq!(berlin.to_utc_string(SAMPLE_MILLIS).as_deref(), Some(SAMPLE_TEXT));
    }

    #[test]
    fn test_years_before_zero_round_trip() {
        let time = utc_engine_at(SAMPLE_MILLIS);
        let text = "-0003-11-27T00:00:00.000000+00:00";
        let millis = time.parse_date(text);
        assert_ne!(millis, 0);
        assert_eq!(time.to_utc_string(millis).as_deref(), Some(text));
    }

    #[test]
    fn test_canonical_missing_instant() {
        let time = utc_engine_at(SAMPLE_MILLIS);
        assert_eq!(time.to_utc_string(None), None);
        assert_eq!(time.to_utc_string(i64::MAX), None);
    }

    #[test]
    fn test_epoch_and_pre_epoch_instants() {
        let time = utc_engine_at(SAMPLE_MILLIS);
        assert_eq!(
            time.to_utc_string(0i64).as_deref(),
            Some("1970-01-01T00:00:00.000000+00:00")
        );
        assert_eq!(
            time.to_utc_string(-1i64).as_deref(),
            Some("1969-12-31T23:59:59.999000+00:00")
        );
    }

    #[test]
    fn test_current_time_utc_string_uses_clock() {
        let time = utc_engine_at(SAMPLE_MILLIS);
        assert_eq!(time.current_time_utc_string(), SAMPLE_TEXT);
    }

    #[test]
    fn test_current_time_utc_string_on_system_clock() {
        let config = SimpleTimeConfig::builder()
            .pattern(DEFAULT_PATTERN)
            .locale(Locale::en_us())
            .build()
            .unwrap();
        let time = SimpleTime::new(config).unwrap();
        let text = time.current_time_utc_string();
        assert!(text.ends_with("+00:00"));
        assert_starts_with(Some(text), "20");
    }

    #[test]
    fn test_custom_pattern_uses_zone_and_locale() {
        let new_york = engine_at(SAMPLE_MILLIS, "en-US", "America/New_York");
        assert_eq!(
            new_york
                .format_custom(SAMPLE_MILLIS, "EEEE, MMMM d 'at' h:mm a XXX")
                .as_deref(),
            Some("Thursday, January 21 at 12:07 PM -05:00")
        );

        let berlin = engine_at(SAMPLE_MILLIS, "de-DE", "Europe/Berlin");
        assert_eq!(
            berlin.format_custom(SAMPLE_MILLIS, "EEEE, d. MMMM y HH:mm").as_deref(),
            Some("Donnerstag, 21. Januar 2016 18:07")
        );
    }

    #[test]
    fn test_custom_pattern_failures() {
        let time = utc_engine_at(SAMPLE_MILLIS);
        assert_eq!(time.format_custom(None, "yyyy"), None);
        assert_eq!(time.format_custom(SAMPLE_MILLIS, "yyyy 'oops"), None);
        assert_eq!(time.format_custom(SAMPLE_MILLIS, "qqq"), None);
    }

    #[test]
    fn test_format_with_precompiled_pattern() {
        let time = utc_engine_at(SAMPLE_MILLIS);
        let pattern = Pattern::compile("yyyyMMdd").unwrap();
        assert_eq!(time.format_with(SAMPLE_MILLIS, &pattern).as_deref(), Some("20160121"));
        assert_eq!(
            time.format_with(SAMPLE_MILLIS, &pattern),
            time.format_with(SAMPLE_MILLIS, &pattern)
        );
    }
}

use simpletime::SimpleTime;

fn main() {
    // Default pattern, host locale and host timezone
    let time = SimpleTime::global().unwrap();

    let test_time = "2016-01-21T17:07:18.134000+00:00";
    let millis = time.parse_date(test_time);
    let test_time_again = time.to_utc_string(millis).unwrap();

    println!("Parsed: {} -> {}", test_time, millis);
    println!("Canonical: {}", test_time_again);
    assert_eq!(test_time, test_time_again);

    println!(
        "Now: {}",
        time.to_relative_time(time.current_time_millis()).unwrap()
    );
    println!("Sample: {}", time.to_relative_time(millis).unwrap());
    println!("Sample: {}", time.to_readable_time_string(millis).unwrap());
    println!("Current time: {}", time.current_time_utc_string());

    // Snowflake IDs carry their creation time
    let snowflake: i64 = 175_928_847_299_117_063;
    println!(
        "Snowflake {} was created at {}",
        snowflake,
        time.to_utc_string(time.parse_snowflake(snowflake)).unwrap()
    );
}

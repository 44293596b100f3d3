use super::*;
use chrono::{FixedOffset, Utc};

#[test]
fn digital_readout_is_zero_padded_24_hour() {
    let time = TimeOfDay::from_millis(47_109_000);
    assert_eq!((time.hour(), time.minute(), time.second()), (13, 5, 9));
    assert_eq!(time.to_string(), "13:05:09");
    assert_eq!(TimeOfDay::from_millis(0).to_string(), "00:00:00");
    assert_eq!(TimeOfDay::from_hms(23, 59, 59).to_string(), "23:59:59");
}

#[test]
fn sub_second_millis_do_not_round_up() {
    let time = TimeOfDay::from_millis(47_109_999);
    assert_eq!(time.to_string(), "13:05:09");
    assert_eq!(time.millis(), 47_109_999);
}

#[test]
fn from_hms_matches_millis() {
    assert_eq!(TimeOfDay::from_hms(13, 5, 9).millis(), 47_109_000);
}

#[test]
fn start_of_day_is_local_midnight() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 13, 5, 9).unwrap();
    let midnight = start_of_day(&now).expect("midnight exists in UTC");
    assert_eq!((now - midnight).num_milliseconds(), 47_109_000);

    let zone = FixedOffset::east_opt(5 * 3600).unwrap();
    let shifted = now.with_timezone(&zone);
    let midnight = start_of_day(&shifted).expect("midnight exists");
    assert_eq!((shifted - midnight).num_milliseconds(), 65_109_000);
}

#[test]
fn system_source_reports_a_time_within_one_day() {
    let time = SystemTimeSource.time_of_day();
    assert!(time.millis() < 25 * 3600 * 1000);
    assert!(time.hour() < 24);
}

#[test]
fn fixed_source_is_constant() {
    let source = FixedTimeSource(TimeOfDay::from_hms(1, 2, 3));
    assert_eq!(source.time_of_day(), source.time_of_day());
}

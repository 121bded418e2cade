use missionctl::utils::datetime;

const MINUTE: i64 = 60_000;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

#[test]
fn test_under_a_minute_is_just_now() {
    let now = 1_000_000_000;
    assert_eq!(datetime::relative_between_ms(now, now), "Just now");
    assert_eq!(datetime::relative_between_ms(now - 59_000, now), "Just now");
}

#[test]
fn test_future_timestamps_read_just_now() {
    let now = 1_000_000_000;
    assert_eq!(datetime::relative_between_ms(now + 5 * MINUTE, now), "Just now");
}

#[test]
fn test_minutes_bucket() {
    let now = 1_000_000_000;
    assert_eq!(datetime::relative_between_ms(now - MINUTE, now), "1m ago");
    assert_eq!(datetime::relative_between_ms(now - 5 * MINUTE, now), "5m ago");
    assert_eq!(datetime::relative_between_ms(now - 59 * MINUTE, now), "59m ago");
}

#[test]
fn test_hours_bucket() {
    let now = 1_000_000_000;
    assert_eq!(datetime::relative_between_ms(now - HOUR, now), "1h ago");
    assert_eq!(datetime::relative_between_ms(now - 3 * HOUR, now), "3h ago");
    assert_eq!(datetime::relative_between_ms(now - 24 * HOUR + MINUTE, now), "23h ago");
}

#[test]
fn test_days_bucket() {
    let now = 2_000_000_000;
    assert_eq!(datetime::relative_between_ms(now - DAY, now), "1d ago");
    assert_eq!(datetime::relative_between_ms(now - 2 * DAY, now), "2d ago");
    assert_eq!(datetime::relative_between_ms(now - 30 * DAY, now), "30d ago");
}

#[test]
fn test_partial_minutes_round_down() {
    let now = 1_000_000_000;
    assert_eq!(datetime::relative_between_ms(now - 90_000, now), "1m ago");
}

#[test]
fn test_now_ms_is_monotonic_enough() {
    let a = datetime::now_ms();
    let b = datetime::now_ms();
    assert!(b >= a);
}

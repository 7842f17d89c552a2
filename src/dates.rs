use chrono::{DateTime, Datelike, Timelike, Utc};

/// whole calendar months elapsed from `start` to `end`, 0 when `end <= start`
///
/// a month only counts once the day-of-month has been reached; on the same
/// day-of-month the time-of-day decides.
pub fn whole_months_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    if end <= start {
        return 0;
    }

    let mut months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);

    if end.day() < start.day()
        || (end.day() == start.day() && seconds_of_day(end) < seconds_of_day(start))
    {
        months -= 1;
    }

    months.max(0) as u32
}

fn seconds_of_day(dt: DateTime<Utc>) -> u32 {
    dt.num_seconds_from_midnight()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_same_instant_is_zero() {
        let t = date(2024, 3, 15);
        assert_eq!(whole_months_between(t, t), 0);
    }

    #[test]
    fn test_end_before_start_is_zero() {
        assert_eq!(whole_months_between(date(2024, 5, 1), date(2024, 2, 1)), 0);
    }

    #[test]
    fn test_partial_month_does_not_count() {
        assert_eq!(whole_months_between(date(2024, 1, 15), date(2024, 2, 14)), 0);
        assert_eq!(whole_months_between(date(2024, 1, 15), date(2024, 2, 15)), 1);
        assert_eq!(whole_months_between(date(2024, 1, 15), date(2024, 2, 16)), 1);
    }

    #[test]
    fn test_year_boundary() {
        assert_eq!(whole_months_between(date(2023, 11, 3), date(2024, 2, 3)), 3);
        assert_eq!(whole_months_between(date(2022, 6, 1), date(2024, 6, 1)), 24);
    }

    #[test]
    fn test_leap_day_anchor() {
        // feb 29 anchor: the first whole month completes on march 29
        assert_eq!(whole_months_between(date(2024, 2, 29), date(2024, 3, 28)), 0);
        assert_eq!(whole_months_between(date(2024, 2, 29), date(2024, 3, 29)), 1);
    }

    #[test]
    fn test_time_of_day_on_same_day() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let almost = Utc.with_ymd_and_hms(2024, 2, 15, 11, 59, 59).unwrap();
        let exactly = Utc.with_ymd_and_hms(2024, 2, 15, 12, 0, 0).unwrap();
        assert_eq!(whole_months_between(start, almost), 0);
        assert_eq!(whole_months_between(start, exactly), 1);
    }
}

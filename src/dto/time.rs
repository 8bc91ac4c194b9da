//! Relative-time rendering for the "last modified" column.

use chrono::NaiveDateTime;

/// Renders how long ago `then` happened relative to `now` as
/// `"<n> <unit> ago"`, using the largest whole unit that fits: days, else
/// hours, else minutes, else seconds. The count is never fractional and only
/// the seconds bucket may render `0`; a `then` in the future clamps to
/// `"0 seconds ago"`.
pub fn relative_since(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let seconds = now.signed_duration_since(then).num_seconds().max(0);

    let (count, unit) = if seconds >= 86_400 {
        (seconds / 86_400, "days")
    } else if seconds >= 3_600 {
        (seconds / 3_600, "hours")
    } else if seconds >= 60 {
        (seconds / 60, "minutes")
    } else {
        (seconds, "seconds")
    };

    format!("{count} {unit} ago")
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_ninety_minutes_renders_hours() {
        let now = base();
        let then = now - Duration::minutes(90);
        assert_eq!(relative_since(then, now), "1 hours ago");
    }

    #[test]
    fn test_twenty_five_hours_renders_days() {
        let now = base();
        let then = now - Duration::hours(25);
        assert_eq!(relative_since(then, now), "1 days ago");
    }

    #[test]
    fn test_sub_minute_renders_seconds() {
        let now = base();
        assert_eq!(relative_since(now - Duration::seconds(45), now), "45 seconds ago");
        assert_eq!(relative_since(now, now), "0 seconds ago");
    }

    #[test]
    fn test_minutes_bucket() {
        let now = base();
        let then = now - Duration::seconds(5 * 60 + 30);
        assert_eq!(relative_since(then, now), "5 minutes ago");
    }

    #[test]
    fn test_future_timestamp_clamps_to_zero_seconds() {
        let now = base();
        let then = now + Duration::hours(2);
        assert_eq!(relative_since(then, now), "0 seconds ago");
    }
}

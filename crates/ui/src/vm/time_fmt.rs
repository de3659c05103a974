use chrono::{DateTime, NaiveDate, Utc};

/// Short reader-facing date, e.g. "Jun 14, 2024".
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Weekday label for the activity strip, e.g. "Fri".
#[must_use]
pub fn day_label(day: NaiveDate) -> String {
    day.format("%a").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_a_short_date() {
        let date = Utc.with_ymd_and_hms(2024, 6, 14, 18, 30, 0).unwrap();
        assert_eq!(format_date(date), "Jun 14, 2024");
    }

    #[test]
    fn weekday_labels_are_short() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        assert_eq!(day_label(day), "Fri");
    }
}

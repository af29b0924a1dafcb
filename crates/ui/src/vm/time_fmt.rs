use chrono::NaiveDate;

/// Countdown label, minutes not capped at an hour ("90:00", "05:07").
#[must_use]
pub fn format_countdown(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_pads_both_fields() {
        assert_eq!(format_countdown(5400), "90:00");
        assert_eq!(format_countdown(307), "05:07");
        assert_eq!(format_countdown(0), "00:00");
    }

    #[test]
    fn date_is_short_and_unambiguous() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
        assert_eq!(format_date(date), "05 Sep 2025");
    }
}

use chrono::NaiveDate;

/// This is the standard way of converting a date to a log key in moodline.
pub fn date_to_log_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns the previous calendar day.
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().expect("Beginning of time should never happen")
}

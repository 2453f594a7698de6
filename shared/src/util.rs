use chrono::{DateTime, Days, Local, LocalResult, NaiveDate, TimeZone};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Millisecond window `[start, end)` covering the local calendar day of `at`.
pub fn day_window_millis(at: DateTime<Local>) -> (i64, i64) {
    let day = at.date_naive();
    let next = day.checked_add_days(Days::new(1)).unwrap_or(day);
    (local_midnight_millis(day), local_midnight_millis(next))
}

fn local_midnight_millis(day: NaiveDate) -> i64 {
    let midnight = day.and_hms_opt(0, 0, 0).unwrap_or_default();
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(t) => t.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        // Midnight skipped by a DST jump: fall back to the UTC reading of the wall clock
        LocalResult::None => midnight.and_utc().timestamp_millis(),
    }
}

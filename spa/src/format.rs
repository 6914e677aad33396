use anyhow::Context;
use chrono::{DateTime, FixedOffset, Utc};

const TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Session time range in the browser's local timezone, UTC when the offset
/// cannot be read from js.
pub fn session_time_range(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    let offset = browser_offset().unwrap_or_else(|error| {
        log::warn!("Fail to read browser timezone offset, rendering UTC, error={error}");
        utc_offset()
    });
    range_with_offset(start, end, &offset)
}

/// Like [`session_time_range`] but tolerating the nullable timestamps of
/// reservation rows.
pub fn reservation_time_range(
    start: &Option<DateTime<Utc>>,
    end: &Option<DateTime<Utc>>,
) -> String {
    match (start, end) {
        (Some(start), Some(end)) => session_time_range(start, end),
        _ => "—".to_owned(),
    }
}

fn range_with_offset(start: &DateTime<Utc>, end: &DateTime<Utc>, offset: &FixedOffset) -> String {
    format!(
        "{} — {}",
        start.with_timezone(offset).format(TIME_FORMAT),
        end.with_timezone(offset).format(TIME_FORMAT)
    )
}

fn utc_offset() -> FixedOffset {
    FixedOffset::east_opt(0).expect("zero offset is valid")
}

// js reports the offset in minutes behind UTC.
fn browser_offset() -> anyhow::Result<FixedOffset> {
    let offset_in_minutes = web_sys::js_sys::Date::new_0().get_timezone_offset() as i32;
    FixedOffset::west_opt(offset_in_minutes * 60)
        .with_context(|| format!("invalid timezone offset from js: {offset_in_minutes}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn range_renders_in_the_given_offset() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 1, 11, 30, 0).unwrap();
        let madrid = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(
            range_with_offset(&start, &end, &madrid),
            "01/03/2025 11:00 — 01/03/2025 12:30"
        );
    }

    #[test]
    fn range_crossing_midnight_keeps_both_dates() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 23, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 2, 0, 30, 0).unwrap();
        assert_eq!(
            range_with_offset(&start, &end, &utc_offset()),
            "01/03/2025 23:30 — 02/03/2025 00:30"
        );
    }

    #[test]
    fn reservation_range_degrades_on_missing_timestamps() {
        let start = Some(Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap());
        assert_eq!(reservation_time_range(&start, &None), "—");
        assert_eq!(reservation_time_range(&None, &None), "—");
    }
}

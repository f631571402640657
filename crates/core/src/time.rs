//! Civil-day arithmetic in the account's home timezone.
//!
//! Monobank statements are queried by epoch-second windows, but the
//! report is about a calendar day as the account holder experiences it.
//! All boundaries are therefore computed directly in [`TIMEZONE`] with
//! `chrono-tz`, which keeps them correct across DST shifts and
//! month/year rollovers.

use chrono::{DateTime, Days, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The fixed civil timezone all day boundaries are computed in.
pub const TIMEZONE: Tz = chrono_tz::Europe::Kyiv;

/// Half-open `[start, end)` window of epoch seconds covering one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

/// The window for the current civil day in [`TIMEZONE`].
pub fn today_range() -> TimeRange {
    day_range(local_today())
}

/// The window for the previous civil day in [`TIMEZONE`].
pub fn yesterday_range() -> TimeRange {
    day_range(local_today() - Days::new(1))
}

/// The `[midnight, next midnight)` window for one civil day.
pub fn day_range(date: NaiveDate) -> TimeRange {
    TimeRange {
        start: midnight(date).timestamp(),
        end: midnight(date + Days::new(1)).timestamp(),
    }
}

/// Format an epoch timestamp as `DD.MM.YYYY` in [`TIMEZONE`].
pub fn format_date(epoch: i64) -> String {
    DateTime::from_timestamp(epoch, 0)
        .map(|dt| dt.with_timezone(&TIMEZONE).format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

fn local_today() -> NaiveDate {
    Utc::now().with_timezone(&TIMEZONE).date_naive()
}

fn midnight(date: NaiveDate) -> DateTime<Tz> {
    let mut wall = date.and_time(NaiveTime::MIN);
    loop {
        match TIMEZONE.from_local_datetime(&wall) {
            LocalResult::Single(dt) => return dt,
            // Fall-back transition: the earlier instant starts the day.
            LocalResult::Ambiguous(dt, _) => return dt,
            // Spring-forward gap swallowed midnight (never happens in
            // Kyiv, whose shifts are at 03:00): the day starts at the
            // first valid wall-clock instant after it.
            LocalResult::None => wall += chrono::Duration::hours(1),
        }
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, warn};

use crate::model::game::Game;

/// Parse the calendar date of a game. Accepts a bare `YYYY-MM-DD` or an ISO-8601
/// date-time, in which case only the date part (in the stated offset) is kept.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() { return None; }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for pat in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"].iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, pat) { return Some(dt.date()); }
    }
    None
}

/// Parse a free-form wall-clock time such as `7:00`, `19:30`, `7:00 PM` or `7pm`.
///
/// With an AM/PM suffix the hour must be 1-12 (`12 AM` is midnight, `12 PM` is noon),
/// without one it is read as a 24-hour clock. Seconds are accepted and dropped.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let upper = s.trim().to_ascii_uppercase();
    let (clock, pm) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), Some(true))
    } else {
        (upper.as_str(), None)
    };

    let mut fields = clock.split(':');
    let hour = parse_field(fields.next()?)?;
    let minute = match fields.next() {
        Some(m) => parse_field(m)?,
        None => 0,
    };
    if let Some(sec) = fields.next() {
        parse_field(sec)?;
    }
    if fields.next().is_some() { return None; }

    let hour = match pm {
        Some(pm) => {
            if !(1..=12).contains(&hour) { return None; }
            hour % 12 + if pm { 12 } else { 0 }
        }
        None => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn parse_field(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) { return None; }
    s.parse().ok()
}

/// Combine a game's date and optional time into a local wall-clock instant.
///
/// Never fails: an unreadable date falls back to the Unix epoch and a missing or
/// unreadable time to midnight of the date.
pub fn scheduled_at(game: &Game) -> NaiveDateTime {
    let date = parse_date(&game.date).unwrap_or_else(|| {
        warn!(game_id = %game.id, date = %game.date, "Unparseable game date; using epoch");
        NaiveDate::default()
    });
    let time = match game.time.as_deref() {
        Some(raw) => parse_time(raw).unwrap_or_else(|| {
            debug!(game_id = %game.id, time = %raw, "Unparseable game time; using midnight");
            NaiveTime::MIN
        }),
        None => NaiveTime::MIN,
    };
    date.and_time(time)
}

/// Date as shown on schedule cards, e.g. `Sat Oct 18, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %b %e, %Y").to_string()
}

/// Time as shown on schedule cards, e.g. `7:00 PM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

//! Named relative-time presentation ("5 minutes ago", "yesterday").

use chrono::{DateTime, Utc};

use super::locale::{Locale, RelativeUnit};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Describe `date` relative to `now` using the largest unit that fits,
/// truncating toward zero.
pub fn relative(date: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let delta = now.signed_duration_since(date).num_seconds();
    let past = delta >= 0;
    let secs = delta.unsigned_abs();

    if secs == 0 {
        return locale.now_phrase().to_string();
    }

    let (count, unit) = if secs < MINUTE {
        (secs, RelativeUnit::Second)
    } else if secs < HOUR {
        (secs / MINUTE, RelativeUnit::Minute)
    } else if secs < DAY {
        (secs / HOUR, RelativeUnit::Hour)
    } else {
        let days = secs / DAY;
        if days == 1 {
            return locale.adjacent_day_phrase(past).to_string();
        } else if days < 7 {
            (days, RelativeUnit::Day)
        } else if days < 30 {
            (days / 7, RelativeUnit::Week)
        } else if days < 365 {
            (days / 30, RelativeUnit::Month)
        } else {
            (days / 365, RelativeUnit::Year)
        }
    };

    locale.relative_phrase(count, unit, past)
}

//! Locale-aware date labels for graph axes and tooltips.
//!
//! TRADE-OFFS
//! ==========
//! Only the two shipped locales are supported, with their short date (`L`) and
//! short time (`LT`) layouts hard-coded. The browser's UTC offset and current
//! year are captured once per render in a [`LocalClock`] so the formatting
//! functions stay pure.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::{OffsetDateTime, UtcOffset};

use super::i18n::Locale;

/// Wall-clock context used to localize timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalClock {
    pub offset: UtcOffset,
    pub current_year: i32,
}

impl LocalClock {
    /// Clock of the current environment: browser local time, UTC elsewhere.
    pub fn now() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let date = js_sys::Date::new_0();
            // getTimezoneOffset is positive west of UTC.
            #[allow(clippy::cast_possible_truncation)]
            let offset_seconds = -(date.get_timezone_offset() * 60.0) as i32;
            Self {
                offset: UtcOffset::from_whole_seconds(offset_seconds).unwrap_or(UtcOffset::UTC),
                current_year: i32::try_from(date.get_full_year()).unwrap_or(0),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self { offset: UtcOffset::UTC, current_year: OffsetDateTime::now_utc().year() }
        }
    }

    /// Convert a millisecond timestamp to local time.
    pub fn local(&self, timestamp_ms: i64) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(timestamp_ms) * 1_000_000)
            .ok()
            .map(|dt| dt.to_offset(self.offset))
    }
}

/// Short date: `MM/DD/YYYY` in English, `DD/MM/YYYY` in French.
pub fn short_date(dt: OffsetDateTime, locale: Locale) -> String {
    let (day, month, year) = (dt.day(), u8::from(dt.month()), dt.year());
    match locale {
        Locale::En => format!("{month:02}/{day:02}/{year:04}"),
        Locale::Fr => format!("{day:02}/{month:02}/{year:04}"),
    }
}

/// Short time: `h:mm AM` in English, `HH:mm` in French.
pub fn short_time(dt: OffsetDateTime, locale: Locale) -> String {
    let (hour, minute) = (dt.hour(), dt.minute());
    match locale {
        Locale::En => {
            let meridiem = if hour < 12 { "AM" } else { "PM" };
            let hour12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{hour12}:{minute:02} {meridiem}")
        }
        Locale::Fr => format!("{hour:02}:{minute:02}"),
    }
}

/// `DD/MM` label used on the x axis regardless of locale.
pub fn axis_tick_label(dt: OffsetDateTime) -> String {
    format!("{:02}/{:02}", dt.day(), u8::from(dt.month()))
}

/// Remove `year` from a formatted date along with one adjoining separator.
///
/// Drops the character before the first occurrence of the year unless it is
/// a `.`, the year itself, and the character after it unless that one ends
/// a line.
pub fn strip_year(formatted: &str, year: i32) -> String {
    let year = year.to_string();
    let Some(idx) = formatted.find(&year) else {
        return formatted.to_owned();
    };

    let start = formatted[..idx]
        .chars()
        .next_back()
        .filter(|c| *c != '.')
        .map_or(idx, |c| idx - c.len_utf8());
    let after_year = idx + year.len();
    let end = formatted[after_year..]
        .chars()
        .next()
        .filter(|c| !is_line_terminator(*c))
        .map_or(after_year, |c| after_year + c.len_utf8());

    format!("{}{}", &formatted[..start], &formatted[end..])
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// `day` and `time` parameters of the graph tooltip date message.
pub fn tooltip_date_parts(timestamp_ms: i64, locale: Locale, clock: &LocalClock) -> (String, String) {
    match clock.local(timestamp_ms) {
        Some(dt) => (strip_year(&short_date(dt, locale), clock.current_year), short_time(dt, locale)),
        None => (String::new(), String::new()),
    }
}

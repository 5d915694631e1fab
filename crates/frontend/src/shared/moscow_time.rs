//! Localization of server-rendered UTC timestamps.
//!
//! The backend writes raw UTC timestamps (microsecond precision, no zone
//! suffix) into elements marked with the `utc-time` class. They are
//! rewritten in place as Moscow wall-clock time.

use chrono::{FixedOffset, NaiveDateTime};
use web_sys::Document;

/// Text shown when the source cannot be parsed as a timestamp.
const INVALID_DATE: &str = "Invalid Date";

/// `YYYY-MM-DDTHH:MM:SS.mmm` — the prefix kept from the backend text;
/// anything past millisecond precision is dropped.
const UTC_PREFIX_LEN: usize = 23;
const UTC_PREFIX_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Moscow is UTC+3 the year round (no DST since 2014).
const MOSCOW_UTC_OFFSET_SECS: i32 = 3 * 3600;

/// Convert backend UTC text into Moscow wall-clock text.
///
/// `"2024-01-02T03:04:05.123456"` becomes `"02.01.2024, 06:04:05"`.
/// Text without a well-formed 23-character prefix renders as
/// `"Invalid Date"` with no error reported, same as the browser's `Date`
/// would show it.
pub fn localize_utc_text(text: &str) -> String {
    let Some(prefix) = text.get(..UTC_PREFIX_LEN) else {
        return INVALID_DATE.to_string();
    };
    let Ok(utc) = NaiveDateTime::parse_from_str(prefix, UTC_PREFIX_FORMAT) else {
        return INVALID_DATE.to_string();
    };
    let Some(moscow) = FixedOffset::east_opt(MOSCOW_UTC_OFFSET_SECS) else {
        return INVALID_DATE.to_string();
    };
    utc.and_utc()
        .with_timezone(&moscow)
        .format("%d.%m.%Y, %H:%M:%S")
        .to_string()
}

/// Rewrite the text of every `.utc-time` element in the document.
pub fn decorate_utc_times(document: &Document) {
    let Ok(elements) = document.query_selector_all(".utc-time") else {
        return;
    };
    for index in 0..elements.length() {
        let Some(node) = elements.item(index) else {
            continue;
        };
        let source = node.text_content().unwrap_or_default();
        node.set_text_content(Some(&localize_utc_text(&source)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_utc_to_moscow() {
        assert_eq!(
            localize_utc_text("2024-01-02T03:04:05.123456"),
            "02.01.2024, 06:04:05"
        );
    }

    #[test]
    fn crosses_midnight_and_year() {
        assert_eq!(
            localize_utc_text("2024-12-31T23:30:00.000"),
            "01.01.2025, 02:30:00"
        );
    }

    #[test]
    fn short_text_is_invalid_date() {
        assert_eq!(localize_utc_text("2024-01-02"), "Invalid Date");
        assert_eq!(localize_utc_text(""), "Invalid Date");
    }

    #[test]
    fn garbage_of_full_length_is_invalid_date() {
        assert_eq!(localize_utc_text("not a timestamp at all!"), "Invalid Date");
    }

    #[test]
    fn multibyte_text_does_not_panic() {
        assert_eq!(
            localize_utc_text("данные отсутствуют в базе"),
            "Invalid Date"
        );
        // byte 23 falls inside the multibyte character here
        assert_eq!(localize_utc_text("2024-01-02T03:04:05.12цц"), "Invalid Date");
    }
}

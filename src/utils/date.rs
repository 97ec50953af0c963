use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

/// Canonical presentation order for weekdays.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Full English name for the weekday of a date.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Date-only formats accepted after the configured preferred format.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Timestamp formats accepted as a last resort; the time part is dropped.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Best-effort date parsing. Tries the preferred format first, then the
/// fixed fallback lists. Returns None for anything unparseable.
pub fn parse_date(s: &str, preferred: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, preferred) {
        return Some(d);
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    None
}

/// Restrict the canonical weekday ordering to the names actually present,
/// preserving Monday-first order. Absent weekdays are omitted, not
/// zero-filled.
pub fn order_present_weekdays<I>(present: I) -> Vec<&'static str>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = [false; 7];
    for name in present {
        if let Some(idx) = WEEKDAYS.iter().position(|w| *w == name.as_ref()) {
            seen[idx] = true;
        }
    }

    WEEKDAYS
        .iter()
        .enumerate()
        .filter(|(i, _)| seen[*i])
        .map(|(_, w)| *w)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_and_slash_dates() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(parse_date("2024-01-02", "%Y-%m-%d"), Some(d));
        assert_eq!(parse_date("2024/01/02", "%Y-%m-%d"), Some(d));
        assert_eq!(parse_date("01/02/2024", "%Y-%m-%d"), Some(d));
    }

    #[test]
    fn preferred_format_wins_for_ambiguous_input() {
        // with a day-first preferred format 02.01 is Jan 2nd
        let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(parse_date("02.01.2024", "%d.%m.%Y"), Some(d));
    }

    #[test]
    fn drops_time_component() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_date("2024-03-15 09:30:00", "%Y-%m-%d"), Some(d));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date("not a date", "%Y-%m-%d"), None);
        assert_eq!(parse_date("", "%Y-%m-%d"), None);
        assert_eq!(parse_date("2024-13-40", "%Y-%m-%d"), None);
    }

    #[test]
    fn weekday_name_matches_date() {
        // 2024-01-01 was a Monday
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(weekday_name(d), "Monday");
        assert_eq!(weekday_name(d.succ_opt().unwrap()), "Tuesday");
    }

    #[test]
    fn orders_weekdays_monday_first() {
        let out = order_present_weekdays(["Sunday", "Tuesday", "Monday"]);
        assert_eq!(out, vec!["Monday", "Tuesday", "Sunday"]);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let out = order_present_weekdays(["Funday", "Friday"]);
        assert_eq!(out, vec!["Friday"]);
    }
}

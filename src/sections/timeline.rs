//! Date helpers for dated entries (experience, education).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const PRESENT: &str = "Present";

const ONGOING_WORDS: &[&str] = &["present", "current", "now", "ongoing"];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }
    // Partial dates: "2021-06", "2021", "June 2021", "Jun 2021"
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
        return Some(d);
    }
    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        return NaiveDate::parse_from_str(&format!("{}-01-01", raw), "%Y-%m-%d").ok();
    }
    NaiveDate::parse_from_str(&format!("1 {}", raw), "%d %B %Y").ok()
}

/// `Mon YYYY`, `Present` for blank or "ongoing" words, the raw text otherwise.
pub fn format_month_year(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || ONGOING_WORDS.contains(&trimmed.to_lowercase().as_str()) {
        return PRESENT.to_string();
    }
    match parse_date(trimmed) {
        Some(d) => d.format("%b %Y").to_string(),
        None => raw.to_string(),
    }
}

/// "Jan 2020 - Mar 2022" or "Jan 2020 - Present".
pub fn date_range(start: &str, end: Option<&str>, current: bool) -> String {
    let end = match end {
        Some(e) if !current => format_month_year(e),
        _ => PRESENT.to_string(),
    };
    if start.trim().is_empty() {
        return end;
    }
    format!("{} - {}", format_month_year(start), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates() {
        assert_eq!(format_month_year("2020-01-15"), "Jan 2020");
        assert_eq!(format_month_year("2021-06"), "Jun 2021");
        assert_eq!(format_month_year("2019"), "Jan 2019");
        assert_eq!(format_month_year("2022-03-01T09:30:00Z"), "Mar 2022");
        assert_eq!(format_month_year("2022-03-01T09:30:00"), "Mar 2022");
    }

    #[test]
    fn month_names() {
        assert_eq!(format_month_year("September 2018"), "Sep 2018");
        assert_eq!(format_month_year("Sep 2018"), "Sep 2018");
    }

    #[test]
    fn unparseable_is_verbatim() {
        assert_eq!(format_month_year("Summer '19"), "Summer '19");
        assert_eq!(format_month_year("2020-13-45"), "2020-13-45");
    }

    #[test]
    fn blank_and_ongoing_are_present() {
        assert_eq!(format_month_year(""), "Present");
        assert_eq!(format_month_year("  "), "Present");
        assert_eq!(format_month_year("Current"), "Present");
    }

    #[test]
    fn ranges() {
        assert_eq!(date_range("2020-01-01", None, false), "Jan 2020 - Present");
        assert_eq!(date_range("2020-01-01", Some(""), false), "Jan 2020 - Present");
        assert_eq!(
            date_range("2020-01-01", Some("2022-03-01"), false),
            "Jan 2020 - Mar 2022"
        );
        assert_eq!(
            date_range("2020-01-01", Some("2022-03-01"), true),
            "Jan 2020 - Present"
        );
        assert_eq!(date_range("", Some("2022-03-01"), false), "Mar 2022");
    }
}

//! Date rendering for the printed forms.

use chrono::{DateTime, Datelike, NaiveDate};

/// Parses the date formats the forms send: `YYYY-MM-DD` or a full RFC 3339
/// timestamp.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()))
}

/// `d/m/yyyy` without padding. Empty input stays empty and anything
/// unparseable is printed as given.
pub fn format_date(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    match parse_date(input) {
        Some(date) => short_date(date),
        None => input.to_string(),
    }
}

pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// `1st`, `2nd`, `3rd`, `4th`, ..., `11th`, `12th`, `13th`, `21st`.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// `5th day of March 2024`.
pub fn long_date(date: NaiveDate) -> String {
    format!("{} day of {}", ordinal(date.day()), date.format("%B %Y"))
}

/// The agreement date in long form, falling back to `today` when the
/// record has no usable date.
pub fn agreement_date(input: &str, today: NaiveDate) -> String {
    long_date(parse_date(input).unwrap_or(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn short_dates_are_unpadded() {
        assert_eq!(format_date("2024-03-05"), "5/3/2024");
        assert_eq!(format_date("2023-12-25T10:00:00Z"), "25/12/2023");
    }

    #[test]
    fn unusable_dates_pass_through() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("   "), "");
        assert_eq!(format_date("next monday"), "next monday");
    }

    #[test]
    fn ordinals() {
        let rendered: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31].into_iter().map(ordinal).collect();
        assert_eq!(
            rendered,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "31st"]
        );
    }

    #[test]
    fn agreement_date_falls_back_to_today() {
        let today = date(2024, 3, 5);
        assert_eq!(agreement_date("2024-01-22", today), "22nd day of January 2024");
        assert_eq!(agreement_date("", today), "5th day of March 2024");
        assert_eq!(agreement_date("sometime", today), "5th day of March 2024");
    }
}

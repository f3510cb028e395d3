//! Small pure helpers for rendering dataset fields.

use chrono::{DateTime, NaiveDate};

/// Format a dataset timestamp as `01 Jan 2024`. Accepts RFC 3339 or a
/// plain `YYYY-MM-DD` date; anything else is shown as received.
pub fn format_dataset_date(raw: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%d %b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }
    raw.to_string()
}

/// Shorten `text` to at most `max_chars` characters, appending `...`
/// when anything was cut. Counts characters, not bytes, so multibyte
/// labels cannot split mid-character.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let prefix: String = text.chars().take(max_chars).collect();
    format!("{}...", prefix.trim_end())
}

/// Compact rendering of a comma-separated geography value: the first
/// location plus how many more there are. The full value is kept for the
/// hover tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeographySummary {
    pub display: String,
    pub extra_count: usize,
    pub full: String,
}

impl GeographySummary {
    pub fn from_raw(raw: &str) -> Self {
        let locations: Vec<&str> = raw
            .split(',')
            .map(|location| location.trim())
            .filter(|location| !location.is_empty())
            .collect();
        match locations.split_first() {
            Some((first, rest)) => GeographySummary {
                display: first.to_string(),
                extra_count: rest.len(),
                full: raw.to_string(),
            },
            None => GeographySummary {
                display: raw.to_string(),
                extra_count: 0,
                full: raw.to_string(),
            },
        }
    }

    pub fn has_more(&self) -> bool {
        self.extra_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_and_plain_dates() {
        assert_eq!(
            format_dataset_date("2024-03-09T12:30:00+05:30"),
            "09 Mar 2024"
        );
        assert_eq!(format_dataset_date("2021-11-01"), "01 Nov 2021");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_dataset_date("circa 1998"), "circa 1998");
        assert_eq!(format_dataset_date(""), "");
    }

    #[test]
    fn truncation_is_character_safe() {
        assert_eq!(truncate_label("short", 20), "short");
        assert_eq!(truncate_label("a very long sector name", 10), "a very lon...");
        // Multibyte labels keep whole characters.
        assert_eq!(truncate_label("Ciudad de México", 9), "Ciudad de...");
    }

    #[test]
    fn geography_summary_splits_on_commas() {
        let summary = GeographySummary::from_raw("India, Nepal, Bhutan");
        assert_eq!(summary.display, "India");
        assert_eq!(summary.extra_count, 2);
        assert!(summary.has_more());
        assert_eq!(summary.full, "India, Nepal, Bhutan");
    }

    #[test]
    fn single_location_has_no_overflow() {
        let summary = GeographySummary::from_raw("Global");
        assert_eq!(summary.display, "Global");
        assert!(!summary.has_more());
    }
}

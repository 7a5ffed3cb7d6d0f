//! Date formatting for console output and date presets for report filters

use chrono::{Duration, Local, NaiveDate};

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let hhmm: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, hhmm);
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// `YYYY-MM-DD`, the form the store expects in filters
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Predefined date ranges offered by the report screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Last7Days,
    Last30Days,
}

impl DatePreset {
    /// `(from, to)` relative to `today`; both bounds inclusive
    pub fn range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let from = match self {
            DatePreset::Today => today,
            DatePreset::Last7Days => today - Duration::days(7),
            DatePreset::Last30Days => today - Duration::days(30),
        };
        (from, today)
    }
}

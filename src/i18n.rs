//! Locale support for date display
//!
//! Only what the widgets need: a date pattern and the first day of the week.

use chrono::{NaiveDate, Weekday};
use std::fmt;

/// Locale information for formatting and display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Language code (ISO 639-1): "en", "de", "ja", etc.
    pub language: String,

    /// Optional region code (ISO 3166-1): "US", "GB", "DE", etc.
    pub region: Option<String>,

    /// Date format string (e.g., "%Y-%m-%d", "%d/%m/%Y")
    pub date_format: String,

    /// First column of a month grid
    pub week_start: Weekday,
}

impl Locale {
    /// Create a new locale from language and optional region
    pub fn new(language: impl Into<String>, region: Option<String>) -> Self {
        let language = language.into();

        let date_format = match language.as_str() {
            "en" if region.as_deref() == Some("US") => "%m/%d/%Y",
            "en" => "%d/%m/%Y",
            "ja" | "zh" | "ko" => "%Y-%m-%d",
            _ => "%d.%m.%Y",
        }
        .to_string();

        let week_start = match (language.as_str(), region.as_deref()) {
            ("en", Some("US" | "CA")) | ("ja" | "ko" | "he", _) | ("pt", Some("BR")) => {
                Weekday::Sun
            }
            _ => Weekday::Mon,
        };

        Locale {
            language,
            region,
            date_format,
            week_start,
        }
    }

    /// Parse locale from string like "en-US", "de-DE", "ja"
    pub fn from_string(locale_str: &str) -> Self {
        if locale_str.is_empty() {
            return Self::default();
        }

        let parts: Vec<&str> = locale_str.split(['-', '_']).collect();
        let language = parts
            .first()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .unwrap_or_else(|| "en".to_string());
        let region = parts.get(1).map(|s| s.to_uppercase());

        Self::new(language, region)
    }

    /// Detect locale from environment
    pub fn from_env() -> Self {
        match std::env::var("LANG") {
            // LANG is typically like "en_US.UTF-8"
            Ok(lang) => Self::from_string(lang.split('.').next().unwrap_or_default()),
            Err(_) => Self::default(),
        }
    }

    /// Set the strftime pattern used by [`Locale::format_date`]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set the first day of the week
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Format a date with this locale's pattern
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en", Some("US".to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref region) = self.region {
            write!(f, "{}-{}", self.language, region)
        } else {
            write!(f, "{}", self.language)
        }
    }
}

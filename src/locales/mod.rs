//! Localization module
//!
//! Locale negotiation and the display formats of a search response: grouped
//! integers, remediation effort, relative ages and wire date-times.

use chrono::{DateTime, Utc};

/// Supported locales with their thousands separator
pub const SUPPORTED_LOCALES: &[(&str, &str, char)] = &[
    ("en", "English", ','),
    ("de", "Deutsch", '.'),
    ("fr", "Français", '\u{a0}'),
    ("es", "Español", '.'),
    ("it", "Italiano", '.'),
    ("pt", "Português", '.'),
    ("nl", "Nederlands", '.'),
    ("pl", "Polski", '\u{a0}'),
    ("ru", "Русский", '\u{a0}'),
    ("ja", "日本語", ','),
    ("zh", "中文", ','),
    ("ko", "한국어", ','),
];

pub const DEFAULT_LOCALE: &str = "en";

fn base_code(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

/// Whether a locale (or its base language) is supported
pub fn is_supported(code: &str) -> bool {
    let base = base_code(code);
    SUPPORTED_LOCALES.iter().any(|(c, _, _)| c.eq_ignore_ascii_case(base))
}

/// Parse Accept-Language header and return best matching locale
pub fn parse_accept_language(header: &str) -> Option<String> {
    // Parse header like "en-US,en;q=0.9,de;q=0.8"
    let mut locales: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut parts = part.trim().split(';');
            let lang = parts.next()?.trim().to_string();
            if lang.is_empty() {
                return None;
            }

            let quality = parts
                .next()
                .and_then(|q| q.trim().strip_prefix("q=").and_then(|v| v.parse().ok()))
                .unwrap_or(1.0);

            Some((lang, quality))
        })
        .collect();

    // Stable sort keeps header order between equal weights
    locales.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    locales
        .into_iter()
        .map(|(lang, _)| base_code(&lang).to_lowercase())
        .find(|base| is_supported(base))
}

/// Display formats of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    /// Length of a working day, used to express debt in days
    pub hours_per_day: i64,
}

impl Default for Formatter {
    fn default() -> Self {
        Self { hours_per_day: 8 }
    }
}

impl Formatter {
    pub fn new(hours_per_day: i64) -> Self {
        Self {
            hours_per_day: hours_per_day.max(1),
        }
    }

    /// Integer with the locale's thousands separator, e.g. `12,345`
    pub fn format_integer(&self, value: usize, locale: &str) -> String {
        let base = base_code(locale);
        let separator = SUPPORTED_LOCALES
            .iter()
            .find(|(c, _, _)| c.eq_ignore_ascii_case(base))
            .map(|(_, _, sep)| *sep)
            .unwrap_or(',');

        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(c);
        }
        out
    }

    /// Short duration format of a remediation effort in minutes: `1d 2h 30min`
    pub fn format_debt(&self, minutes: i64) -> String {
        let minutes = minutes.max(0);
        let minutes_per_day = self.hours_per_day.max(1).saturating_mul(60);
        let days = minutes / minutes_per_day;
        let hours = (minutes % minutes_per_day) / 60;
        let mins = minutes % 60;

        let mut parts = Vec::new();
        if days > 0 {
            parts.push(format!("{}d", days));
        }
        if hours > 0 {
            parts.push(format!("{}h", hours));
        }
        // Minutes are noise once the effort spans days
        if mins > 0 && days == 0 {
            parts.push(format!("{}min", mins));
        }

        if parts.is_empty() {
            "0min".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// Age of a date relative to `now`, e.g. `3 days`
    pub fn format_age(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let minutes = (now - date).num_minutes().max(0);
        let hours = minutes / 60;
        let days = hours / 24;
        let months = days / 30;
        let years = days / 365;

        match () {
            _ if minutes < 1 => "less than a minute".to_string(),
            _ if minutes == 1 => "a minute".to_string(),
            _ if minutes < 45 => format!("{} minutes", minutes),
            _ if minutes < 90 => "an hour".to_string(),
            _ if hours < 24 => format!("{} hours", hours.max(2)),
            _ if hours < 48 => "a day".to_string(),
            _ if days < 30 => format!("{} days", days),
            _ if days < 60 => "a month".to_string(),
            _ if days < 365 => format!("{} months", months),
            _ if years < 2 => "a year".to_string(),
            _ => format!("{} years", years),
        }
    }

    /// Wire format of dates: `2013-05-01T13:00:00+0000`
    pub fn format_datetime(&self, date: DateTime<Utc>) -> String {
        date.format("%Y-%m-%dT%H:%M:%S%z").to_string()
    }
}

//! Quarter label derivation.
//!
//! Providers are inconsistent about where the fiscal quarter shows up: the
//! page title, the URL slug, or only the report date. [`derive_quarter`]
//! tries each source in a fixed order and returns the first hit, normalized
//! to the `"Q<1-4> <year>"` form.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Label used when no strategy produces a quarter.
pub const UNKNOWN_QUARTER: &str = "Unknown Quarter";

/// Derive a `"Q<1-4> <year>"` label from the page title, source URL, and
/// date text, in that priority order.
///
/// Strategies, first match wins:
/// 1. `Q<n> <year>` or `Quarter <n> <year>` in the title
/// 2. `/q<n>-<year>/` path segment in the URL
/// 3. A long-form date (`"May 22, 2024"`, full or abbreviated month) in the
///    date text, mapped to a calendar quarter
/// 4. A `<year>-<month>-<day>-` prefix segment in the URL, mapped the same way
/// 5. [`UNKNOWN_QUARTER`]
pub fn derive_quarter(title: &str, url: &str, date_text: &str) -> String {
    if let Some(label) = quarter_from_title(title) {
        return label;
    }
    if let Some(label) = quarter_from_url_slug(url) {
        return label;
    }
    if let Some(label) = quarter_from_date_text(date_text) {
        return label;
    }
    if let Some(label) = quarter_from_url_date(url) {
        return label;
    }
    UNKNOWN_QUARTER.to_string()
}

fn quarter_from_title(title: &str) -> Option<String> {
    let re = Regex::new(r"(?i)(q[1-4]|quarter [1-4])\s*(\d{4})").ok()?;
    let caps = re.captures(title)?;
    // "Quarter 2" and "q2" both end in the quarter digit
    let digit = caps.get(1)?.as_str().chars().last()?;
    Some(format!("Q{} {}", digit, &caps[2]))
}

fn quarter_from_url_slug(url: &str) -> Option<String> {
    let re = Regex::new(r"(?i)/q([1-4])-(\d{4})/").ok()?;
    let caps = re.captures(url)?;
    Some(format!("Q{} {}", &caps[1], &caps[2]))
}

fn quarter_from_date_text(date_text: &str) -> Option<String> {
    let re = Regex::new(r"(\w{3,9} \d{1,2}, \d{4})").ok()?;
    let date_str = re.captures(date_text)?.get(1)?.as_str().to_string();

    for format in ["%B %d, %Y", "%b %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(&date_str, format) {
            return Some(format!(
                "Q{} {}",
                quarter_of_month(date.month()),
                date.year()
            ));
        }
    }
    None
}

fn quarter_from_url_date(url: &str) -> Option<String> {
    let re = Regex::new(r"/(\d{4})-(\d{2})-\d{2}-").ok()?;
    let caps = re.captures(url)?;
    let month: u32 = caps[2].parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(format!("Q{} {}", quarter_of_month(month), &caps[1]))
}

fn quarter_of_month(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

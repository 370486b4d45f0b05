//! Transcript extraction from a fetched article page.
//!
//! Every field has an ordered selector chain and a default, so a missing
//! or moved element can never fail the extraction; only the transport
//! layer produces errors.

use super::ProviderSettings;
use calltone_domain::{ParagraphFilter, TranscriptRecord, derive_quarter};
use scraper::{Html, Selector};
use tracing::debug;

/// Title selectors in priority order.
const TITLE_SELECTORS: [&str; 3] = ["h1.font-bold", "h1.title", "h1"];

/// Date selectors in priority order.
const DATE_SELECTORS: [&str; 3] = ["time", "span.text-tertiary-text", "span.date"];

/// Body container selectors in priority order.
const BODY_SELECTORS: [&str; 5] = [
    "div.article-content",
    "div.break-words",
    "div.article-body",
    "article",
    "div.content",
];

/// Extract a [`TranscriptRecord`] from article-page HTML.
///
/// `url` is the page's own URL; it participates in quarter derivation.
pub fn extract_transcript(
    html: &str,
    url: &str,
    settings: &ProviderSettings,
    filter: &ParagraphFilter,
) -> TranscriptRecord {
    let document = Html::parse_document(html);

    let title = first_selector_text(&document, &TITLE_SELECTORS)
        .unwrap_or_else(|| format!("{} Earnings Call", settings.company));

    let date = extract_date(&document).unwrap_or_else(|| "Unknown Date".to_string());

    let quarter = derive_quarter(&title, url, &date);
    debug!("Extracted '{}' ({}) from {}", quarter, date, url);

    let body = extract_body(&document, filter);
    TranscriptRecord::new(quarter, date, body)
}

/// First non-empty text among the given selectors.
fn first_selector_text(document: &Html, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Report date: a machine-readable `datetime` attribute wins over visible
/// text, taking only the date part before any time separator.
fn extract_date(document: &Html) -> Option<String> {
    for selector_str in DATE_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            if let Some(datetime) = element.value().attr("datetime") {
                let date = datetime.split('T').next().unwrap_or(datetime);
                return Some(date.to_string());
            }
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Paragraphs of the first matching content container, cleaned and joined.
fn extract_body(document: &Html, filter: &ParagraphFilter) -> String {
    let Ok(paragraph) = Selector::parse("p") else {
        return String::new();
    };

    for selector_str in BODY_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(container) = document.select(&selector).next() {
            let paragraphs: Vec<String> = container
                .select(&paragraph)
                .map(|p| p.text().collect::<String>())
                .collect();
            return filter.clean_body(paragraphs.iter().map(String::as_str));
        }
    }

    String::new()
}

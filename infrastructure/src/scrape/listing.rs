//! Transcript URL resolution from the provider listing page.
//!
//! Strategies in order:
//! 1. Card elements (`article.card`, then `div.card`), taking each card's
//!    transcript link or, failing that, its first link
//! 2. A full-page link scan matching the transcript path and the company
//!    name in the visible text
//!
//! Relative links are absolutized against the provider origin; the result
//! is capped at `limit` URLs in listing order.

use super::ProviderSettings;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Cards examined per listing page; bounds the search on busy pages.
const MAX_CARDS: usize = 8;

/// Resolve up to `limit` absolute transcript URLs from listing-page HTML.
///
/// Returns an empty vector when every strategy comes up dry; the caller
/// decides whether that is an error.
pub fn resolve_transcript_urls(
    html: &str,
    settings: &ProviderSettings,
    limit: usize,
) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut urls = Vec::new();

    for card in candidate_cards(&document).into_iter().take(MAX_CARDS) {
        if let Some(href) = card_link(card, &settings.transcript_path) {
            let url = absolutize(&href, &settings.origin);
            debug!("Found transcript link: {}", url);
            urls.push(url);
        }
    }

    if urls.is_empty() {
        warn!("Card selectors found no links, scanning all page links");
        urls = scan_all_links(&document, settings);
    }

    urls.truncate(limit);
    urls
}

/// Card candidates: primary selector first, secondary when it matches nothing.
fn candidate_cards(document: &Html) -> Vec<ElementRef<'_>> {
    for selector_str in ["article.card", "div.card"] {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        let cards: Vec<_> = document.select(&selector).collect();
        if !cards.is_empty() {
            return cards;
        }
    }
    Vec::new()
}

/// The card's transcript link, or its first link of any kind.
fn card_link(card: ElementRef<'_>, transcript_path: &str) -> Option<String> {
    let any_link = Selector::parse("a").ok()?;

    let link = card
        .select(&any_link)
        .find(|a| {
            a.value()
                .attr("href")
                .is_some_and(|href| href.contains(transcript_path))
        })
        .or_else(|| card.select(&any_link).next())?;

    let href = link.value().attr("href")?;
    (!href.is_empty()).then(|| href.to_string())
}

/// Last-resort scan: any link whose href matches the transcript path and
/// whose visible text mentions the company.
fn scan_all_links(document: &Html, settings: &ProviderSettings) -> Vec<String> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };
    let company = settings.company.to_lowercase();

    document
        .select(&selector)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let text = a.text().collect::<Vec<_>>().join(" ").to_lowercase();
            (href.contains(&settings.transcript_path) && text.contains(&company))
                .then(|| absolutize(href, &settings.origin))
        })
        .collect()
}

fn absolutize(href: &str, origin: &str) -> String {
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        href.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ProviderSettings {
        ProviderSettings::default()
    }

    fn card(href: &str, label: &str) -> String {
        format!(r#"<article class="card"><a href="{href}">{label}</a></article>"#)
    }

    #[test]
    fn test_primary_card_selector() {
        let html = format!(
            "<html><body>{}{}</body></html>",
            card("/earnings-call-transcripts/q1-2025/nvda/", "NVIDIA Q1 2025"),
            card("/earnings-call-transcripts/q4-2024/nvda/", "NVIDIA Q4 2024"),
        );
        let urls = resolve_transcript_urls(&html, &settings(), 4);
        assert_eq!(
            urls,
            vec![
                "https://www.fool.com/earnings-call-transcripts/q1-2025/nvda/",
                "https://www.fool.com/earnings-call-transcripts/q4-2024/nvda/",
            ]
        );
    }

    #[test]
    fn test_secondary_card_selector_when_no_articles() {
        let html = r#"<html><body>
            <div class="card"><a href="/earnings-call-transcripts/q2-2024/nvda/">NVIDIA</a></div>
        </body></html>"#;
        let urls = resolve_transcript_urls(html, &settings(), 4);
        assert_eq!(urls.len(), 1);
        assert!(urls[0].starts_with("https://www.fool.com/"));
    }

    #[test]
    fn test_card_without_transcript_link_takes_first_link() {
        let html = r#"<html><body>
            <article class="card"><a href="/some/other/page/">NVIDIA news</a></article>
        </body></html>"#;
        let urls = resolve_transcript_urls(html, &settings(), 4);
        assert_eq!(urls, vec!["https://www.fool.com/some/other/page/"]);
    }

    #[test]
    fn test_absolute_links_kept_as_is() {
        let html = r#"<html><body>
            <article class="card"><a href="https://elsewhere.com/earnings-call-transcripts/x/">x</a></article>
        </body></html>"#;
        let urls = resolve_transcript_urls(html, &settings(), 4);
        assert_eq!(urls, vec!["https://elsewhere.com/earnings-call-transcripts/x/"]);
    }

    #[test]
    fn test_fallback_scan_requires_company_in_text() {
        let html = r#"<html><body>
            <a href="/earnings-call-transcripts/q3-2024/acme/">Acme Q3 2024 call</a>
            <a href="/earnings-call-transcripts/q3-2024/nvda/">NVIDIA Q3 2024 call</a>
            <a href="/news/nvidia-update/">NVIDIA update</a>
        </body></html>"#;
        let urls = resolve_transcript_urls(html, &settings(), 4);
        assert_eq!(
            urls,
            vec!["https://www.fool.com/earnings-call-transcripts/q3-2024/nvda/"]
        );
    }

    #[test]
    fn test_result_capped_at_limit() {
        let cards: String = (0..6)
            .map(|i| card(&format!("/earnings-call-transcripts/q{i}/"), "NVIDIA"))
            .collect();
        let html = format!("<html><body>{cards}</body></html>");
        let urls = resolve_transcript_urls(&html, &settings(), 4);
        assert_eq!(urls.len(), 4);
    }

    #[test]
    fn test_card_search_bounded() {
        let cards: String = (0..12)
            .map(|i| card(&format!("/earnings-call-transcripts/q{i}/"), "NVIDIA"))
            .collect();
        let html = format!("<html><body>{cards}</body></html>");
        let urls = resolve_transcript_urls(&html, &settings(), 100);
        assert_eq!(urls.len(), MAX_CARDS);
    }

    #[test]
    fn test_empty_page_yields_no_urls() {
        assert!(resolve_transcript_urls("<html><body></body></html>", &settings(), 4).is_empty());
    }
}

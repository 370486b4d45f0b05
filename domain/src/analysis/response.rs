//! Structured-field extraction from free-form model responses.
//!
//! Models are asked for strict JSON but routinely wrap it in prose or
//! markdown fences, or drop the braces entirely. [`extract_json_fields`]
//! recovers a field mapping with three layered strategies. Pure text
//! processing, no I/O.
//!
//! # Strategies
//!
//! | Order | Strategy | Recovers from |
//! |-------|----------|---------------|
//! | 1 | Whole trimmed response as JSON | Clean compliance |
//! | 2 | Leftmost `{` … rightmost `}` substring | Prose/fence wrapping |
//! | 3 | Per-field regex scraping | Missing or broken braces |

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

/// The extractor found nothing usable in the response.
///
/// Always caught at the analyzer boundary and mapped to field defaults;
/// never fatal.
#[derive(Error, Debug)]
pub enum ResponseParseError {
    #[error("no parsable fields in model response")]
    NoFields,
}

/// Extract a non-empty JSON field mapping from a model response.
///
/// Tries each strategy in order and returns the first non-empty mapping.
pub fn extract_json_fields(response: &str) -> Result<Map<String, Value>, ResponseParseError> {
    if let Some(fields) = parse_whole(response) {
        return Ok(fields);
    }
    if let Some(fields) = parse_braced_span(response) {
        return Ok(fields);
    }
    if let Some(fields) = scrape_fields(response) {
        return Ok(fields);
    }
    Err(ResponseParseError::NoFields)
}

/// Strategy 1: the entire trimmed response is a JSON object.
fn parse_whole(response: &str) -> Option<Map<String, Value>> {
    as_nonempty_object(serde_json::from_str(response.trim()).ok()?)
}

/// Strategy 2: parse the span from the leftmost `{` to the rightmost `}`.
fn parse_braced_span(response: &str) -> Option<Map<String, Value>> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end < start {
        return None;
    }
    as_nonempty_object(serde_json::from_str(&response[start..=end]).ok()?)
}

/// Strategy 3: scrape known fields with regexes, ignoring JSON structure.
fn scrape_fields(response: &str) -> Option<Map<String, Value>> {
    let mut fields = Map::new();

    if let Ok(re) = Regex::new(r#"(?i)"sentiment"\s*:\s*"(positive|neutral|negative)""#)
        && let Some(caps) = re.captures(response)
    {
        fields.insert(
            "sentiment".to_string(),
            Value::String(caps[1].to_lowercase()),
        );
    }

    if let Ok(re) = Regex::new(r#""confidence"\s*:\s*([0-9.]+)"#)
        && let Some(caps) = re.captures(response)
        && let Ok(confidence) = caps[1].parse::<f64>()
        && let Some(number) = serde_json::Number::from_f64(confidence)
    {
        fields.insert("confidence".to_string(), Value::Number(number));
    }

    if let Ok(re) = Regex::new(r#""themes"\s*:\s*\[([^\]]+)\]"#)
        && let Some(caps) = re.captures(response)
        && let Ok(quoted) = Regex::new(r#""([^"]+)""#)
    {
        let themes: Vec<Value> = quoted
            .captures_iter(&caps[1])
            .map(|c| Value::String(c[1].to_string()))
            .collect();
        if !themes.is_empty() {
            fields.insert("themes".to_string(), Value::Array(themes));
        }
    }

    (!fields.is_empty()).then_some(fields)
}

fn as_nonempty_object(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    }
}

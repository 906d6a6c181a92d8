use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no JSON object found in model output")]
pub struct ExtractionError;

static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```(?:json)?\s*\n?(.*?)\n?\s*```$").unwrap());

/// Recovers the JSON object from raw model output.
///
/// Strips a surrounding markdown fence, then falls back to the span between
/// the first `{` and the last `}`. Braces are not balanced: a stray `}` in
/// trailing prose widens the span.
pub fn extract_json_object(raw: &str) -> Result<&str, ExtractionError> {
    let mut text = raw.trim();

    if let Some(body) = FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str())
        .filter(|body| !body.is_empty())
    {
        text = body.trim();
    }

    if text.starts_with('{') && text.ends_with('}') {
        return Ok(text);
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&text[start..=end]),
        _ => Err(ExtractionError),
    }
}

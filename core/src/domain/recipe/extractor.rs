use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// Upper bound on candidate spans handed to the JSON parser.
const MAX_PARSE_ATTEMPTS: usize = 64;

/// Extracts the JSON object embedded in free-form provider output.
///
/// The whole text is tried first. Otherwise every balanced `{...}` span is
/// collected in a single pass and tried in opening order, so an outer object
/// wins over its children and the children are still tried when the outer
/// span does not parse.
pub fn extract_json_object(raw: &str) -> Result<Value, CoreError> {
    let text = raw.trim();

    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let mut first_error: Option<String> = None;

    for (start, end) in balanced_spans(text).into_iter().take(MAX_PARSE_ATTEMPTS) {
        match serde_json::from_str::<Value>(&text[start..=end]) {
            Ok(value @ Value::Object(_)) => return Ok(value),
            Ok(_) => {}
            Err(e) => {
                first_error.get_or_insert_with(|| e.to_string());
            }
        }
    }

    Err(CoreError::ParseError {
        message: first_error.unwrap_or_else(|| "no JSON object found in response".to_string()),
        raw: raw.to_string(),
    })
}

/// Byte ranges of every closed `{...}` span, ordered by opening brace.
///
/// String literals are only tracked inside an open span. A stray `}` is
/// ignored and an unclosed `{` never yields a span.
fn balanced_spans(text: &str) -> Vec<(usize, usize)> {
    let mut open: Vec<usize> = Vec::new();
    let mut spans = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' if !open.is_empty() => in_string = true,
            '{' => open.push(i),
            '}' => {
                if let Some(start) = open.pop() {
                    spans.push((start, i));
                }
            }
            _ => {}
        }
    }

    spans.sort_unstable_by_key(|&(start, _)| start);
    spans
}

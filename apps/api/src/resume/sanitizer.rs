//! Response Sanitizer — turns untrusted completion output into a candidate JSON value.
//!
//! The output is a candidate only: it may still miss keys or carry wrong types,
//! and must go through the normalizer before use.

use serde_json::Value;
use thiserror::Error;

use crate::resume::models::ResumeRecord;

/// The completion output could not be parsed as JSON.
///
/// Always carries the fully-defaulted empty record so the caller can continue.
#[derive(Debug, Error)]
#[error("completion output is not valid JSON: {source}")]
pub struct MalformedCompletion {
    #[source]
    pub source: serde_json::Error,
    pub fallback: Value,
}

impl MalformedCompletion {
    fn new(source: serde_json::Error) -> Self {
        Self {
            source,
            fallback: empty_candidate(),
        }
    }

    pub fn into_fallback(self) -> Value {
        self.fallback
    }
}

/// The empty record as a JSON value: every string `""`, every list `[]`.
pub fn empty_candidate() -> Value {
    serde_json::to_value(ResumeRecord::default()).unwrap_or(Value::Null)
}

/// Strips code-fence markers and whitespace, then parses the remainder strictly.
pub fn sanitize_completion(raw: &str) -> Result<Value, MalformedCompletion> {
    serde_json::from_str(strip_code_fences(raw)).map_err(MalformedCompletion::new)
}

/// Strips a leading code-fence marker (with an optional `json` tag) and a trailing one.
fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(stripped) = text.strip_prefix("```") {
        text = stripped
            .strip_prefix("json")
            .or_else(|| stripped.strip_prefix("JSON"))
            .unwrap_or(stripped)
            .trim_start();
    }
    if let Some(stripped) = text.strip_suffix("```") {
        text = stripped.trim_end();
    }
    text
}

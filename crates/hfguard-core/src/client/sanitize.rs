//! Remote error text sanitization
//!
//! Error bodies from the inference service end up in logs and attempt
//! traces. Anything resembling a credential is redacted and long bodies
//! are truncated first.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const MAX_ERROR_TEXT_CHARS: usize = 512;
const REDACTED: &str = "[REDACTED]";

static BEARER_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bBearer\s+[A-Za-z0-9._\-+/=]{8,}").expect("valid bearer token regex")
});

static HF_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bhf_[A-Za-z0-9]{4,}").expect("valid hf token regex"));

static KEY_VALUE_SECRET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(api[_-]?key|access[_-]?token|token|secret|password|authorization)\b\s*[:=]\s*["']?[^"',\s}]+"#,
    )
    .expect("valid key/value secret regex")
});

/// Redact secrets and cap the length of a remote error message
pub fn sanitize_error_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "<empty error message>".to_string();
    }

    cap_length(redact_inline_secrets(trimmed))
}

/// Pull the `error` field out of a JSON error body, sanitized.
///
/// The Inference API sends either `{"error": "..."}` or
/// `{"error": ["...", "..."]}`. Returns `None` for anything else.
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let message = match value.get("error")? {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    };
    Some(sanitize_error_text(&message))
}

fn redact_inline_secrets(input: &str) -> String {
    let redacted = BEARER_TOKEN_RE.replace_all(input, "Bearer [REDACTED]");
    let redacted = HF_TOKEN_RE.replace_all(&redacted, REDACTED);
    KEY_VALUE_SECRET_RE
        .replace_all(&redacted, "$1=[REDACTED]")
        .into_owned()
}

fn cap_length(input: String) -> String {
    let char_count = input.chars().count();
    if char_count <= MAX_ERROR_TEXT_CHARS {
        return input;
    }

    let truncated: String = input.chars().take(MAX_ERROR_TEXT_CHARS).collect();
    format!("{}... [{} more chars]", truncated, char_count - MAX_ERROR_TEXT_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_key_value_secrets() {
        let sanitized = sanitize_error_text("request rejected: api_key=abc123xyz, retry later");
        assert!(!sanitized.contains("abc123xyz"));
        assert!(sanitized.contains("api_key=[REDACTED]"));
        assert!(sanitized.ends_with("retry later"));
    }

    #[test]
    fn redacts_tokens_inside_extracted_error() {
        let body = br#"{"error":"Authorization header is invalid: hf_leakedTokenValue9"}"#;
        let message = extract_error_message(body).unwrap();
        assert!(!message.contains("hf_leakedTokenValue9"));
        assert!(message.starts_with("Authorization header is invalid"));
    }

    #[test]
    fn redacts_hf_tokens_in_plain_text() {
        let sanitized = sanitize_error_text("Invalid credentials in Authorization header hf_AbCdEf12345");
        assert!(!sanitized.contains("hf_AbCdEf12345"));

        let sanitized = sanitize_error_text("Authorization: Bearer hf_verysecretvalue");
        assert!(!sanitized.contains("verysecretvalue"));
    }

    #[test]
    fn truncates_long_bodies() {
        let raw = "x".repeat(2_000);
        let sanitized = sanitize_error_text(&raw);
        assert!(sanitized.ends_with("... [1488 more chars]"));
    }

    #[test]
    fn extracts_error_field() {
        assert_eq!(
            extract_error_message(br#"{"error":"Model gpt2 is currently loading","estimated_time":20.0}"#),
            Some("Model gpt2 is currently loading".to_string())
        );
        assert_eq!(
            extract_error_message(br#"{"error":["a","b"]}"#),
            Some("a; b".to_string())
        );
        assert_eq!(extract_error_message(b"<html>502</html>"), None);
        assert_eq!(extract_error_message(br#"{"message":"x"}"#), None);
    }
}

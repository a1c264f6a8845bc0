//! Response decoding per request kind

use super::output::{GeneratedImage, GeneratedOutput, sniff_image_mime};
use super::sanitize::{extract_error_message, sanitize_error_text};
use super::transport::InferenceResponse;
use crate::error::{GuardError, GuardResult};
use crate::policy::RequestKind;
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use serde_json::Value;

/// Turn a raw response into the output for `kind`.
///
/// Every failure here is a `TransientRemote` attributed to `model`; the
/// fallback loop moves on to the next candidate.
pub(crate) fn decode_response(
    kind: RequestKind,
    model: &str,
    response: &InferenceResponse,
) -> GuardResult<GeneratedOutput> {
    if !response.is_success() {
        let detail = extract_error_message(&response.body)
            .or_else(|| plain_text_detail(&response.body))
            .unwrap_or_else(|| response.status_text().to_string());
        return Err(GuardError::transient_with_status(
            model,
            format!("HF error ({}): {}", response.status, detail),
            response.status,
        ));
    }

    match kind {
        RequestKind::Chat => decode_chat(model, &response.body).map(GeneratedOutput::Text),
        RequestKind::Image => {
            decode_image(model, response.content_type.as_deref(), &response.body)
                .map(GeneratedOutput::Image)
        }
    }
}

/// Non-JSON error bodies: plain text is kept (sanitized), markup is dropped
fn plain_text_detail(body: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(body).ok()?.trim();
    if text.is_empty() || text.starts_with('<') || text.starts_with('{') || text.starts_with('[') {
        return None;
    }
    Some(sanitize_error_text(text))
}

/// `[{"generated_text": "..."}]` → the text of the first element
fn decode_chat(model: &str, body: &[u8]) -> GuardResult<String> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| GuardError::transient(model, format!("malformed JSON response: {}", e)))?;

    value
        .as_array()
        .and_then(|items| items.first())
        .and_then(|first| first.get("generated_text"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or_else(|| GuardError::transient(model, "response has no generated_text"))
}

/// Raw image bytes, a base64 string, `{"bytes": [...]}` or a bare byte array
fn decode_image(
    model: &str,
    content_type: Option<&str>,
    body: &[u8],
) -> GuardResult<GeneratedImage> {
    let declared_image = content_type.is_some_and(|ct| ct.trim().starts_with("image/"));

    let bytes = if declared_image || sniff_image_mime(body).is_some() {
        body.to_vec()
    } else {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            GuardError::transient(model, format!("image response is neither an image nor JSON: {}", e))
        })?;
        bytes_from_json(model, &value)?
    };

    if bytes.is_empty() {
        return Err(GuardError::transient(model, "empty image payload"));
    }

    Ok(GeneratedImage::from_bytes(bytes, content_type))
}

fn bytes_from_json(model: &str, value: &Value) -> GuardResult<Vec<u8>> {
    match value {
        Value::String(encoded) => decode_base64(model, encoded),
        Value::Object(map) => match map.get("bytes") {
            Some(Value::Array(items)) => byte_array(model, items),
            Some(Value::String(encoded)) => decode_base64(model, encoded),
            _ => Err(GuardError::transient(model, "unsupported image format")),
        },
        Value::Array(items) => byte_array(model, items),
        _ => Err(GuardError::transient(model, "unsupported image format")),
    }
}

fn decode_base64(model: &str, encoded: &str) -> GuardResult<Vec<u8>> {
    let payload = match encoded.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => encoded,
    };
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    let mut last_error = None;
    for engine in [&STANDARD, &STANDARD_NO_PAD, &URL_SAFE, &URL_SAFE_NO_PAD] {
        match engine.decode(compact.as_bytes()) {
            Ok(bytes) => return Ok(bytes),
            Err(e) => last_error = Some(e),
        }
    }

    Err(GuardError::transient(
        model,
        match last_error {
            Some(e) => format!("invalid base64 image: {}", e),
            None => "invalid base64 image".to_string(),
        },
    ))
}

fn byte_array(model: &str, items: &[Value]) -> GuardResult<Vec<u8>> {
    items
        .iter()
        .map(|item| {
            item.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| GuardError::transient(model, "image byte array contains a non-byte value"))
        })
        .collect()
}

//! Error classification for user-friendly messages

use super::user_messages::ErrorCategory;

/// Classify a failed remote attempt by status code, then by message text
pub(super) fn classify_remote_failure(
    message: &str,
    status_code: Option<u16>,
) -> (ErrorCategory, String, Vec<String>) {
    match status_code {
        Some(401) | Some(403) => (
            ErrorCategory::Authentication,
            "Hugging Face rejected the token".to_string(),
            vec![
                "Check that your Hugging Face token is correct".to_string(),
                "Ensure the token has inference permissions".to_string(),
            ],
        ),
        Some(404) => (
            ErrorCategory::ResourceUnavailable,
            "Model not found".to_string(),
            vec!["The model may have been removed from the Inference API".to_string()],
        ),
        Some(429) => (
            ErrorCategory::RateLimit,
            "Too many requests".to_string(),
            vec![
                "Wait a moment and try again".to_string(),
                "Free-tier tokens have a per-hour request quota".to_string(),
            ],
        ),
        Some(503) => (
            ErrorCategory::ResourceUnavailable,
            "Model is loading".to_string(),
            vec!["Cold models can take a minute to load; try again shortly".to_string()],
        ),
        Some(500..=599) => (
            ErrorCategory::Network,
            "Hugging Face server error".to_string(),
            vec!["Try again in a few moments".to_string()],
        ),
        _ => {
            let message_lower = message.to_lowercase();
            if message_lower.contains("timeout") || message_lower.contains("timed out") {
                (
                    ErrorCategory::Network,
                    "Request timed out".to_string(),
                    vec!["Check your internet connection".to_string()],
                )
            } else if message_lower.contains("connect") || message_lower.contains("dns") {
                (
                    ErrorCategory::Network,
                    "Cannot reach Hugging Face".to_string(),
                    vec![
                        "Check your internet connection".to_string(),
                        "Verify proxy and firewall settings".to_string(),
                    ],
                )
            } else {
                (
                    ErrorCategory::InvalidResponse,
                    "Unexpected model response".to_string(),
                    vec!["The next model in the list will be tried automatically".to_string()],
                )
            }
        }
    }
}

/// Classify configuration errors
pub(super) fn classify_config_error(message: &str) -> (String, Vec<String>) {
    let message_lower = message.to_lowercase();

    if message_lower.contains("read") || message_lower.contains("not found") {
        (
            "Configuration file unreadable".to_string(),
            vec!["Check the path passed with --config".to_string()],
        )
    } else if message_lower.contains("parse") {
        (
            "Invalid configuration".to_string(),
            vec![
                "Check the syntax of your configuration file".to_string(),
                "The format is chosen by extension: .json, .toml, .yaml".to_string(),
            ],
        )
    } else {
        (
            "Configuration rejected".to_string(),
            vec![
                "Model lists must be non-empty and free of duplicates".to_string(),
                "Allowed domains must be lowercase hostnames".to_string(),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_take_precedence() {
        let (category, _, _) = classify_remote_failure("connection reset", Some(401));
        assert_eq!(category, ErrorCategory::Authentication);

        let (category, title, _) = classify_remote_failure("", Some(503));
        assert_eq!(category, ErrorCategory::ResourceUnavailable);
        assert_eq!(title, "Model is loading");
    }

    #[test]
    fn test_message_fallback() {
        let (category, _, _) = classify_remote_failure("operation timed out", None);
        assert_eq!(category, ErrorCategory::Network);

        let (category, _, _) = classify_remote_failure("missing generated_text", None);
        assert_eq!(category, ErrorCategory::InvalidResponse);
    }
}

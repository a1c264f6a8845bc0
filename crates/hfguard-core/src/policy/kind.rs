//! Request kinds

use crate::error::GuardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of generation request. Selects the model list and the
/// response decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Text generation; responses carry `generated_text`
    Chat,
    /// Image generation; responses are image bytes or base64
    Image,
}

impl RequestKind {
    /// All kinds, in display order
    pub const ALL: [RequestKind; 2] = [RequestKind::Chat, RequestKind::Image];

    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Image => "image",
        }
    }

    /// Pick a kind for free-form user input.
    ///
    /// Any keyword found (case-insensitive substring) selects `Image`,
    /// otherwise `Chat`.
    pub fn detect<S: AsRef<str>>(input: &str, image_keywords: &[S]) -> Self {
        let input_lower = input.to_lowercase();
        let is_image = image_keywords
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .any(|k| input_lower.contains(&k));

        if is_image { Self::Image } else { Self::Chat }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestKind {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(Self::Chat),
            "image" => Ok(Self::Image),
            other => Err(GuardError::unsupported_kind(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_names_only() {
        assert_eq!("chat".parse::<RequestKind>().unwrap(), RequestKind::Chat);
        assert_eq!("image".parse::<RequestKind>().unwrap(), RequestKind::Image);

        let err = "Chat".parse::<RequestKind>().unwrap_err();
        assert_eq!(err, GuardError::unsupported_kind("Chat"));
        assert!("audio".parse::<RequestKind>().is_err());
        assert!("".parse::<RequestKind>().is_err());
    }

    #[test]
    fn test_detect() {
        let keywords = ["imagen", "dibuja", "photo"];
        assert_eq!(
            RequestKind::detect("Dibuja un gato con alas", &keywords),
            RequestKind::Image
        );
        assert_eq!(
            RequestKind::detect("A PHOTO of a forest", &keywords),
            RequestKind::Image
        );
        assert_eq!(
            RequestKind::detect("Explain transformers", &keywords),
            RequestKind::Chat
        );
        assert_eq!(RequestKind::detect("anything", &[""]), RequestKind::Chat);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&RequestKind::Image).unwrap();
        assert_eq!(json, "\"image\"");
        let kind: RequestKind = serde_json::from_str("\"chat\"").unwrap();
        assert_eq!(kind, RequestKind::Chat);
    }
}

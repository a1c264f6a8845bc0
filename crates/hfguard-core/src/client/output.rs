//! Generation outputs

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

/// Fallback MIME type when neither the bytes nor the response say otherwise
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Result of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum GeneratedOutput {
    /// Generated text from a chat model
    Text(String),
    /// Image from an image model
    Image(GeneratedImage),
}

impl GeneratedOutput {
    /// Displayable form: the text itself, or a `data:` URI for images
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Image(image) => image.to_data_uri(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&GeneratedImage> {
        match self {
            Self::Image(image) => Some(image),
            Self::Text(_) => None,
        }
    }
}

/// Decoded image payload.
///
/// Byte-array and base64 responses both end up here, so two responses
/// carrying the same picture compare equal regardless of encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedImage {
    pub mime_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl GeneratedImage {
    /// Wrap raw bytes. The MIME type is sniffed from the bytes first, then
    /// taken from `declared` if it is an `image/*` type.
    pub fn from_bytes(bytes: Vec<u8>, declared: Option<&str>) -> Self {
        let mime_type = sniff_image_mime(&bytes)
            .map(str::to_string)
            .or_else(|| {
                declared
                    .map(|d| d.split(';').next().unwrap_or(d).trim().to_lowercase())
                    .filter(|d| d.starts_with("image/"))
            })
            .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());

        Self { mime_type, bytes }
    }

    /// `data:<mime>;base64,<payload>` URI suitable for an `<img src>`
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    /// File extension matching the MIME type
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" => "jpg",
            "image/gif" => "gif",
            "image/webp" => "webp",
            _ => "png",
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Identify common image formats by magic bytes
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_sniff() {
        assert_eq!(sniff_image_mime(&PNG_HEADER), Some("image/png"));
        assert_eq!(sniff_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(sniff_image_mime(b"RIFF\0\0\0\0WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_image_mime(b"{\"error\":1}"), None);
    }

    #[test]
    fn test_mime_resolution_order() {
        let png = GeneratedImage::from_bytes(PNG_HEADER.to_vec(), Some("image/jpeg"));
        assert_eq!(png.mime_type, "image/png");

        let declared = GeneratedImage::from_bytes(vec![1, 2, 3], Some("image/JPEG; q=1"));
        assert_eq!(declared.mime_type, "image/jpeg");
        assert_eq!(declared.extension(), "jpg");

        let unknown = GeneratedImage::from_bytes(vec![1, 2, 3], Some("application/json"));
        assert_eq!(unknown.mime_type, DEFAULT_IMAGE_MIME);
    }

    #[test]
    fn test_data_uri() {
        let image = GeneratedImage::from_bytes(vec![1, 2, 3], None);
        assert_eq!(image.to_data_uri(), "data:image/png;base64,AQID");
        assert_eq!(
            GeneratedOutput::Image(image).to_display_string(),
            "data:image/png;base64,AQID"
        );
        assert_eq!(
            GeneratedOutput::Text("hi".into()).to_display_string(),
            "hi"
        );
    }
}

//! Inference client
//!
//! Tries the allowed models for a request kind in preference order,
//! returning the first success. Policy violations abort immediately;
//! transient remote failures move on to the next model.

mod credential;
mod decode;
mod fallback;
mod interface;
mod outcome;
mod output;
mod sanitize;
mod transport;

#[cfg(test)]
mod tests;

pub use credential::{Credential, mask_token};
pub use fallback::FallbackClient;
pub use interface::{RequestResult, SecureInterface};
pub use outcome::{AttemptOutcome, AttemptRecord, AttemptStatus, Generation};
pub use output::{DEFAULT_IMAGE_MIME, GeneratedImage, GeneratedOutput, sniff_image_mime};
pub use sanitize::{extract_error_message, sanitize_error_text};
pub use transport::{
    HttpTransport, InferencePayload, InferenceRequest, InferenceResponse, InferenceTransport,
};

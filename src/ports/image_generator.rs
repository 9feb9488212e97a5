//! Image generator port for the external generative model.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// A request to generate an image from a text prompt.
///
/// The model identifier is fixed at adapter construction, so the request
/// carries only the prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    /// The text prompt describing the desired image.
    pub prompt: String,
}

/// One fragment of the model's reply, in wire order.
///
/// Image payloads stay base64-encoded here; decoding happens only where
/// raw bytes are actually needed (the file persistence boundary).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyPart {
    /// Free-text commentary emitted alongside the image.
    Text {
        /// The commentary text.
        text: String,
    },
    /// An inline binary payload.
    Image {
        /// Base64-encoded image bytes, exactly as received.
        data: String,
        /// MIME type of the payload (e.g., `"image/png"`).
        mime_type: String,
    },
}

/// The consulted candidate's parts, in the order the model produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReply {
    /// Reply fragments in wire order.
    pub parts: Vec<ReplyPart>,
}

/// Boxed future type returned by [`ImageGenerator::generate`].
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<GenerationReply, GenError>> + Send + 'a>>;

/// Generates images from text prompts via an external API.
pub trait ImageGenerator: Send + Sync {
    /// Generate a reply for the given request.
    fn generate(&self, request: &PromptRequest) -> GenerateFuture<'_>;
}

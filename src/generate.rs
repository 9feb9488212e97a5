//! The core prompt-to-image transformation.
//!
//! Walks the model's reply parts in order: text parts are surfaced as
//! diagnostics, inline image parts become the output artifact. When the
//! reply carries several inline parts, the last one wins.

use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::output::write_image;
use crate::ports::image_generator::{ImageGenerator, PromptRequest, ReplyPart};

/// A base64-encoded image as returned to request/response callers.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// Base64 payload, exactly as received from the model.
    pub data: String,
    /// MIME type reported for the payload.
    pub mime_type: String,
}

/// Generate an image for `prompt` and persist it at `path`.
///
/// The file is overwritten if it already exists. The write completes
/// before the function returns.
///
/// # Errors
///
/// Returns [`GenError::NoImage`] when the reply carries no inline image
/// part (nothing is written), or any generation/decode/write failure.
pub async fn generate_to_file(
    generator: &dyn ImageGenerator,
    prompt: &str,
    path: &Path,
) -> Result<PathBuf, GenError> {
    let image = generate_encoded(generator, prompt).await?;
    write_image(path, &image.data)?;
    Ok(path.to_path_buf())
}

/// Generate an image for `prompt` and return it base64-encoded.
///
/// The payload is returned exactly as received, without a decode round
/// trip. Serves the request/response boundary.
///
/// # Errors
///
/// Returns [`GenError::NoImage`] when the reply carries no inline image
/// part, or any generation failure.
pub async fn generate_encoded(
    generator: &dyn ImageGenerator,
    prompt: &str,
) -> Result<EncodedImage, GenError> {
    let request = PromptRequest { prompt: prompt.to_string() };
    let reply = generator.generate(&request).await?;

    let mut image: Option<EncodedImage> = None;
    for part in reply.parts {
        match part {
            ReplyPart::Text { text } => {
                tracing::info!(target: "picgen::generate", "model commentary: {text}");
            }
            // Last inline part wins when the model returns several.
            ReplyPart::Image { data, mime_type } => {
                image = Some(EncodedImage { data, mime_type });
            }
        }
    }

    image.ok_or(GenError::NoImage)
}

//! Unified error type for picgen.

use thiserror::Error;

/// Errors that can occur during image generation.
#[derive(Debug, Error)]
pub enum GenError {
    /// No API key was configured.
    #[error("Missing Gemini API key. Set GEMINI_API_KEY or add it to the config file.")]
    MissingApiKey,

    /// The model response carried no candidates.
    #[error("No candidates returned from the generative model")]
    NoCandidate,

    /// The consulted candidate carried no inline image data.
    #[error("Model response contained no image data")]
    NoImage,

    /// The API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An image payload was not valid base64.
    #[error("Invalid base64 image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),
}

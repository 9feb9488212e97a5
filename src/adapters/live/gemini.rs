//! Live adapter for the Gemini image generation API.

use reqwest::Client;
use serde::Deserialize;

use crate::error::GenError;
use crate::ports::image_generator::{
    GenerateFuture, GenerationReply, ImageGenerator, PromptRequest, ReplyPart,
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// The image generation model used when no override is given.
pub const DEFAULT_MODEL: &str = "nano-banana-pro-preview";

/// Live Gemini image generator that calls the Google AI API.
pub struct GeminiGenerator {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiGenerator {
    /// Create a new Gemini generator bound to the given API key and the
    /// default model.
    ///
    /// # Errors
    ///
    /// Fails with [`GenError::MissingApiKey`] when the key is empty. The
    /// check runs before any HTTP client is constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GenError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(GenError::MissingApiKey);
        }
        Ok(Self { client: Client::new(), api_key, model: DEFAULT_MODEL.to_string() })
    }

    /// Override the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl ImageGenerator for GeminiGenerator {
    fn generate(&self, request: &PromptRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);

            // No generation parameters beyond the prompt are exposed.
            let body = serde_json::json!({
                "contents": [{
                    "parts": [{"text": request.prompt}]
                }]
            });

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()
                .await?;

            let status = response.status();
            let response_text = response.text().await?;

            if !status.is_success() {
                return Err(GenError::Api { status: status.as_u16(), message: response_text });
            }

            let parsed: GeminiResponse = serde_json::from_str(&response_text).map_err(|e| {
                GenError::Api { status: 200, message: format!("Failed to parse response: {e}") }
            })?;

            // Only the first candidate is consulted.
            let candidate = parsed.candidates.into_iter().next().ok_or(GenError::NoCandidate)?;

            let parts = candidate
                .content
                .parts
                .into_iter()
                .filter_map(|part| {
                    if let Some(inline) = part.inline_data {
                        Some(ReplyPart::Image { data: inline.data, mime_type: inline.mime_type })
                    } else {
                        part.text.map(|text| ReplyPart::Text { text })
                    }
                })
                .collect();

            Ok(GenerationReply { parts })
        })
    }
}

// --- Gemini API response types ---

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: GeminiContent,
}

#[derive(Deserialize, Default)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    text: Option<String>,
    inline_data: Option<GeminiInlineData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

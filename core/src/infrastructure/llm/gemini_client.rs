use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::{common::entities::app_errors::CoreError, scan::ports::TextExtractor};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const LABEL_PROMPT: &str = "Read the food product label in this image. \
Reply in exactly this format and nothing else:\n\
PRODUCT: [product name]\n\
INGREDIENTS: [the full ingredient list as printed, comma separated]\n\
If the image shows no ingredient list, reply with the single word NONE.";

/// Reads product labels through Gemini's multimodal `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiTextExtractor {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

/// Guesses the upload's format from its magic bytes. Unknown data is sent as
/// JPEG, the common case for phone cameras.
pub fn sniff_mime_type(image_data: &[u8]) -> &'static str {
    match image_data {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "image/jpeg",
    }
}

fn response_text(response: GeminiResponse) -> Result<String, CoreError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("none") {
        return Err(CoreError::Extraction(
            "no label text found in image".to_string(),
        ));
    }

    Ok(text.to_string())
}

impl GeminiTextExtractor {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            client: Client::new(),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<GeminiResponse, CoreError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                CoreError::Extraction(format!("label reader unavailable: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::Extraction(format!(
                "label reader returned {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            CoreError::Extraction(format!("unreadable label reader response: {}", e))
        })
    }
}

impl TextExtractor for GeminiTextExtractor {
    async fn extract(&self, image_data: Vec<u8>) -> Result<String, CoreError> {
        let mime_type = sniff_mime_type(&image_data);
        info!(mime_type, size = image_data.len(), "reading label");

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: LABEL_PROMPT.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: general_purpose::STANDARD.encode(&image_data),
                        },
                    },
                ],
            }],
        };

        let response = self.call_gemini_api(request).await?;
        response_text(response)
    }
}

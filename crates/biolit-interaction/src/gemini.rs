//! Direct REST client for the Gemini `generateContent` endpoint.
//!
//! One HTTPS call per user action: system instruction + user content
//! (and optionally an inline image part or a web-search tool), returning
//! plain text plus any grounding citations. No retries, no cancellation;
//! a failed call surfaces once.

use biolit_core::{BiolitError, GroundingSource};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Thin client owning the HTTP connection pool and the API key.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Sends one generateContent request to the given model.
    pub async fn generate(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, BiolitError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| BiolitError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status.as_u16(), body_text));
        }

        response
            .json()
            .await
            .map_err(|err| BiolitError::Network(format!("Failed to parse response: {err}")))
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            parts: vec![Part::Text { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPayload {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

/// The web-search grounding tool (`{"googleSearch": {}}`).
#[derive(Debug, Serialize)]
pub struct Tool {
    #[serde(rename = "googleSearch")]
    pub google_search: EmptyConfig,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: EmptyConfig {},
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmptyConfig {}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<ContentResponse>,
    #[serde(rename = "groundingMetadata")]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct ContentResponse {
    #[serde(default)]
    pub parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
pub struct PartResponse {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingMetadata {
    #[serde(rename = "groundingChunks")]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingChunk {
    pub web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
pub struct WebChunk {
    pub title: Option<String>,
    pub uri: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Pulls the first text part out of the first candidate.
pub fn extract_text(response: GenerateContentResponse) -> Result<String, BiolitError> {
    response
        .candidates
        .and_then(|mut candidates| {
            if candidates.is_empty() {
                None
            } else {
                Some(candidates.remove(0))
            }
        })
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or(BiolitError::EmptyResponse)
}

/// Collects web grounding citations from the first candidate, if any.
pub fn extract_grounding_sources(response: &GenerateContentResponse) -> Option<Vec<GroundingSource>> {
    let chunks = response
        .candidates
        .as_ref()?
        .first()?
        .grounding_metadata
        .as_ref()?
        .grounding_chunks
        .as_ref()?;

    let sources: Vec<GroundingSource> = chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| {
            Some(GroundingSource {
                title: web.title.clone()?,
                uri: web.uri.clone()?,
            })
        })
        .collect();

    if sources.is_empty() {
        None
    } else {
        Some(sources)
    }
}

/// Maps a non-success HTTP response to the shared error type, preferring
/// the Google error-body `STATUS: message` shape when parseable.
pub fn map_http_error(status: u16, body: String) -> BiolitError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    BiolitError::Api { status, message }
}

/// Strips a surrounding markdown code fence from a plain-text response.
pub fn strip_code_fences(content: &str) -> String {
    let trimmed = content.trim();
    let without_open = if let Some(rest) = trimmed.strip_prefix("```") {
        // Drop the language tag up to the first newline
        match rest.split_once('\n') {
            Some((_, body)) => body,
            None => rest.trim_start_matches(|c: char| c.is_alphanumeric()),
        }
    } else {
        trimmed
    };
    without_open.trim_end_matches("```").trim().to_string()
}

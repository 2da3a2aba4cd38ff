//! The research gateway: one entry point from mode + input to model text.
//!
//! Replaces per-mode call functions with data-driven dispatch: the mode
//! registry supplies tier, temperature, output contract and grounding
//! policy; the instruction store supplies the persona; the request
//! supplies the prompt and any image payload.

use crate::gemini::{
    extract_grounding_sources, extract_text, strip_code_fences, Content, GeminiClient,
    GenerateContentRequest, GenerationConfig, InlineDataPayload, Part, ThinkingConfig, Tool,
};
use crate::instructions;
use crate::request::ModeRequest;
use biolit_core::config::{AppConfig, THINKING_BUDGET};
use biolit_core::{AppMode, BiolitError, GroundingSource, ModelTier, OutputContract};

/// A successful gateway call.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    /// Model output, fence-stripped for plain-text modes.
    pub content: String,
    /// Web citations when grounding was attached and returned any.
    pub grounding_sources: Option<Vec<GroundingSource>>,
}

/// Gateway over the Gemini client, configured once per process.
#[derive(Clone)]
pub struct ResearchGateway {
    client: GeminiClient,
    config: AppConfig,
}

impl ResearchGateway {
    pub fn new(api_key: impl Into<String>, config: AppConfig) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            config,
        }
    }

    /// Runs one mode invocation against the hosted model.
    ///
    /// Stub modes are refused with [`BiolitError::UnsupportedMode`]
    /// before any network traffic.
    pub async fn generate(
        &self,
        mode: AppMode,
        request: &ModeRequest,
    ) -> Result<GatewayResponse, BiolitError> {
        let spec = mode.spec();
        let instruction =
            instructions::system_instruction(mode).ok_or(BiolitError::UnsupportedMode(mode))?;

        let body = build_request(mode, request, instruction)?;
        let model = self.config.model_for(spec.tier);

        tracing::debug!(%mode, model, "dispatching model call");
        let response = self.client.generate(model, &body).await?;

        let grounding_sources = extract_grounding_sources(&response);
        let mut content = extract_text(response)?;
        if spec.output == OutputContract::PlainText {
            content = strip_code_fences(&content);
        }

        tracing::debug!(%mode, chars = content.len(), "model call succeeded");
        Ok(GatewayResponse {
            content,
            grounding_sources,
        })
    }
}

/// Assembles the wire request for a mode invocation.
///
/// Exposed within the crate so the shape can be tested without a client.
pub(crate) fn build_request(
    mode: AppMode,
    request: &ModeRequest,
    instruction: &str,
) -> Result<GenerateContentRequest, BiolitError> {
    let spec = mode.spec();
    let prompt = request.prompt_text(mode);

    let mut parts = Vec::new();
    if mode == AppMode::ImageAnalyzer {
        let image = request
            .image
            .as_ref()
            .ok_or_else(|| BiolitError::config("No image data provided."))?;
        parts.push(Part::InlineData {
            inline_data: InlineDataPayload {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            },
        });
    }
    parts.push(Part::Text { text: prompt });

    let generation_config = GenerationConfig {
        temperature: spec.temperature,
        response_mime_type: match spec.output {
            OutputContract::Json => Some("application/json".to_string()),
            OutputContract::PlainText | OutputContract::Markdown => None,
        },
        thinking_config: match spec.tier {
            ModelTier::ProThinking => Some(ThinkingConfig {
                thinking_budget: THINKING_BUDGET,
            }),
            ModelTier::Flash => None,
        },
    };

    let tools = if spec.grounding.applies_to(&request.input) {
        vec![Tool::google_search()]
    } else {
        Vec::new()
    };

    Ok(GenerateContentRequest {
        contents: vec![Content::user(parts)],
        system_instruction: Some(Content::system(instruction)),
        generation_config: Some(generation_config),
        tools,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ImageAttachment;

    #[tokio::test]
    async fn stub_modes_are_refused_before_any_network_call() {
        let gateway = ResearchGateway::new("test-key", AppConfig::default());
        for mode in [
            AppMode::WordArchitect,
            AppMode::VoiceAssistant,
            AppMode::CitationManager,
            AppMode::FormulationChemist,
        ] {
            let err = gateway
                .generate(mode, &ModeRequest::text("anything"))
                .await
                .unwrap_err();
            assert!(matches!(err, BiolitError::UnsupportedMode(m) if m == mode));
        }
    }

    #[test]
    fn screener_request_asks_for_json_and_thinking() {
        let request = ModeRequest::text("abstract text");
        let body = build_request(
            AppMode::AbstractScreener,
            &request,
            instructions::SCREENER_SYSTEM_INSTRUCTION,
        )
        .unwrap();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["generationConfig"]["temperature"], 0.1);
        assert!(json["generationConfig"].get("thinkingConfig").is_some());
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn flash_grounded_request_carries_search_tool_without_thinking() {
        let request = ModeRequest::text("labs in Warsaw, injectable hydrogels");
        let body = build_request(
            AppMode::LabScout,
            &request,
            instructions::LAB_SCOUT_SYSTEM_INSTRUCTION,
        )
        .unwrap();
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["tools"][0].get("googleSearch").is_some());
        assert!(json["generationConfig"].get("thinkingConfig").is_none());
    }

    #[test]
    fn analyst_grounds_only_short_inputs() {
        let short = ModeRequest::text("injectable hydrogels");
        let body = build_request(
            AppMode::CriticalAnalyst,
            &short,
            instructions::ANALYST_SYSTEM_INSTRUCTION,
        )
        .unwrap();
        assert_eq!(body.tools.len(), 1);

        let long = ModeRequest::text("d".repeat(400));
        let body = build_request(
            AppMode::CriticalAnalyst,
            &long,
            instructions::ANALYST_SYSTEM_INSTRUCTION,
        )
        .unwrap();
        assert!(body.tools.is_empty());
    }

    #[test]
    fn image_mode_requires_an_attachment() {
        let request = ModeRequest::text("what is this?");
        let err = build_request(
            AppMode::ImageAnalyzer,
            &request,
            instructions::IMAGE_SYSTEM_INSTRUCTION,
        )
        .unwrap_err();
        assert!(matches!(err, BiolitError::Config(_)));

        let request = request.with_image(ImageAttachment {
            mime_type: "image/jpeg".into(),
            data: "Zm9v".into(),
        });
        let body = build_request(
            AppMode::ImageAnalyzer,
            &request,
            instructions::IMAGE_SYSTEM_INSTRUCTION,
        )
        .unwrap();
        // Image part precedes the text part
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["contents"][0]["parts"][0].get("inlineData").is_some());
        assert_eq!(json["contents"][0]["parts"][1]["text"], "what is this?");
    }
}

//! Per-mode request shaping.
//!
//! A [`ModeRequest`] carries everything a mode's input form collects:
//! the main text, optional secondary criteria, study-type restrictions,
//! and an optional image attachment. `prompt_text` composes the final
//! user-content prompt the way each mode expects it.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use biolit_core::{AppMode, BiolitError};
use std::fs;
use std::path::Path;

/// Criteria used by the abstract screener when the user supplies none.
pub const DEFAULT_SCREENING_CRITERIA: &str = "Scientific validity and relevance to the topic.";

/// Prompt used by the image analyzer when the user supplies no text.
pub const DEFAULT_IMAGE_PROMPT: &str =
    "Analyze this image in the context of biomaterials research. Extract text and explain figures.";

/// An image payload, base64-encoded client-side before the model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub mime_type: String,
    pub data: String,
}

impl ImageAttachment {
    /// Reads and encodes a local image file.
    ///
    /// The MIME type is guessed from the extension, defaulting to PNG.
    pub fn from_path(path: &Path) -> Result<Self, BiolitError> {
        let bytes = fs::read(path)?;
        let mime_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| "image/png".to_string());
        Ok(Self {
            mime_type,
            data: BASE64_STANDARD.encode(bytes),
        })
    }
}

/// User input for one mode invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeRequest {
    /// Main input text (topic, abstract, methods section, ...).
    pub input: String,
    /// Secondary input: screening criteria for the abstract screener.
    pub criteria: Option<String>,
    /// Study-type restrictions for the query builder.
    pub study_types: Vec<String>,
    /// Image attachment for the image analyzer.
    pub image: Option<ImageAttachment>,
}

impl ModeRequest {
    pub fn text(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.criteria = Some(criteria.into());
        self
    }

    pub fn with_study_types(mut self, study_types: Vec<String>) -> Self {
        self.study_types = study_types;
        self
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }

    /// Composes the user-content prompt for a mode.
    pub fn prompt_text(&self, mode: AppMode) -> String {
        match mode {
            AppMode::QueryBuilder if !self.study_types.is_empty() => format!(
                "Topic: {}\n\nRestrict results to these study types: {}. \
                 Apply appropriate field tags (e.g., [pt] for PubMed).",
                self.input,
                self.study_types.join(", ")
            ),
            AppMode::AbstractScreener => {
                let criteria = self
                    .criteria
                    .as_deref()
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or(DEFAULT_SCREENING_CRITERIA);
                format!("Criteria:\n{}\n\nAbstract:\n{}", criteria, self.input)
            }
            AppMode::ImageAnalyzer if self.input.trim().is_empty() => {
                DEFAULT_IMAGE_PROMPT.to_string()
            }
            _ => self.input.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_input_passes_through() {
        let request = ModeRequest::text("alginate gels");
        assert_eq!(request.prompt_text(AppMode::LabScout), "alginate gels");
    }

    #[test]
    fn query_builder_appends_study_types() {
        let request = ModeRequest::text("chitosan scaffolds")
            .with_study_types(vec!["RCT".into(), "Review".into()]);
        let prompt = request.prompt_text(AppMode::QueryBuilder);
        assert!(prompt.starts_with("Topic: chitosan scaffolds"));
        assert!(prompt.contains("RCT, Review"));
        // Study types only apply to the query builder
        assert_eq!(request.prompt_text(AppMode::PicoProtocol), "chitosan scaffolds");
    }

    #[test]
    fn screener_defaults_criteria() {
        let request = ModeRequest::text("We fabricated...");
        let prompt = request.prompt_text(AppMode::AbstractScreener);
        assert!(prompt.starts_with(&format!("Criteria:\n{}", DEFAULT_SCREENING_CRITERIA)));
        assert!(prompt.ends_with("Abstract:\nWe fabricated..."));
    }

    #[test]
    fn screener_uses_supplied_criteria() {
        let request = ModeRequest::text("abstract").with_criteria("In vivo only");
        let prompt = request.prompt_text(AppMode::AbstractScreener);
        assert!(prompt.contains("Criteria:\nIn vivo only"));
    }

    #[test]
    fn image_analyzer_defaults_empty_prompt() {
        let request = ModeRequest::text("  ");
        assert_eq!(request.prompt_text(AppMode::ImageAnalyzer), DEFAULT_IMAGE_PROMPT);
        let request = ModeRequest::text("What is the pore size?");
        assert_eq!(
            request.prompt_text(AppMode::ImageAnalyzer),
            "What is the pore size?"
        );
    }

    #[test]
    fn image_attachment_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("figure.png");
        fs::write(&path, [0x89, 0x50, 0x4e, 0x47]).unwrap();
        let attachment = ImageAttachment::from_path(&path).unwrap();
        assert_eq!(attachment.mime_type, "image/png");
        assert_eq!(attachment.data, BASE64_STANDARD.encode([0x89, 0x50, 0x4e, 0x47]));
    }
}

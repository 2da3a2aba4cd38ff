//! The closed mode enumeration and its registry.
//!
//! A mode is one self-contained research-assistant feature (for example
//! the abstract screener) pairing a system instruction with an input
//! shape and an output renderer. The set is closed: every persisted
//! record carries exactly one of these tags, and both the gateway and
//! the renderer dispatch are total over the enumeration.
//!
//! Per-mode behavior lives in a lookup table ([`ModeSpec`]) rather than
//! sequential branching: model tier, sampling temperature, output
//! contract, grounding policy, continue-target and implementation status
//! are all data.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// All research-assistant modes.
///
/// Serde tags match the persisted storage format of result records
/// (`"QUERY_BUILDER"`, `"ML_DEEP_LEARNING_ARCHITECT"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum AppMode {
    QueryBuilder,
    PicoProtocol,
    AbstractScreener,
    DataExtractor,
    CriticalAnalyst,
    IsoComplianceAuditor,
    NoveltyGenerator,
    ImageAnalyzer,
    ResourceScout,
    OpenAccessFinder,
    LabScout,
    ProtocolTroubleshooter,
    AcademicEmailDrafter,
    #[serde(rename = "ML_DEEP_LEARNING_ARCHITECT")]
    #[strum(serialize = "ML_DEEP_LEARNING_ARCHITECT")]
    MlArchitect,
    PptArchitect,
    #[serde(rename = "PRECISION_SEARCH_COMMANDER")]
    #[strum(serialize = "PRECISION_SEARCH_COMMANDER")]
    PrecisionSearch,
    WordArchitect,
    VoiceAssistant,
    CitationManager,
    FormulationChemist,
}

/// Which hosted model a mode calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Fast model, no extended thinking.
    Flash,
    /// Pro model with a thinking budget attached.
    ProThinking,
}

/// The format contract the system instruction imposes on the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputContract {
    /// A single raw string (markdown code fences are stripped).
    PlainText,
    /// Markdown prose.
    Markdown,
    /// A JSON document (the request asks for `application/json`).
    Json,
}

/// Whether web-search grounding is attached to the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundingPolicy {
    Never,
    Always,
    /// Grounding only when the input looks like a broad topic rather
    /// than a pasted data dump (shorter than 150 characters).
    WhenShortInput,
}

impl GroundingPolicy {
    /// Input-length threshold below which `WhenShortInput` grounds.
    pub const SHORT_INPUT_LEN: usize = 150;

    /// Resolves the policy against a concrete input.
    ///
    /// The threshold counts characters, not bytes, so short non-ASCII
    /// topics are not misclassified as data dumps.
    pub fn applies_to(self, input: &str) -> bool {
        match self {
            GroundingPolicy::Never => false,
            GroundingPolicy::Always => true,
            GroundingPolicy::WhenShortInput => input.chars().count() < Self::SHORT_INPUT_LEN,
        }
    }
}

/// Static per-mode behavior record.
#[derive(Debug, Clone, Copy)]
pub struct ModeSpec {
    pub mode: AppMode,
    /// Short human label for listings and card headers.
    pub label: &'static str,
    /// One-line description shown in the mode listing.
    pub description: &'static str,
    pub tier: ModelTier,
    pub temperature: f32,
    pub output: OutputContract,
    pub grounding: GroundingPolicy,
    /// Mode the result card offers to continue into, if any.
    pub continue_target: Option<AppMode>,
    /// Declared modes without a backing model call stay selectable but
    /// are refused by the gateway.
    pub implemented: bool,
}

impl AppMode {
    /// Returns the behavior record for this mode.
    ///
    /// Total over the enumeration: adding a variant without a spec is a
    /// compile error.
    pub fn spec(self) -> ModeSpec {
        match self {
            AppMode::QueryBuilder => ModeSpec {
                mode: self,
                label: "Boolean Query Builder",
                description: "Translate a research topic into a PubMed/Scopus search string",
                tier: ModelTier::Flash,
                temperature: 0.2,
                output: OutputContract::PlainText,
                grounding: GroundingPolicy::Never,
                continue_target: Some(AppMode::PicoProtocol),
                implemented: true,
            },
            AppMode::PicoProtocol => ModeSpec {
                mode: self,
                label: "PICO Protocol Designer",
                description: "Define PICOs criteria for a systematic review protocol",
                tier: ModelTier::ProThinking,
                temperature: 0.4,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: true,
            },
            AppMode::AbstractScreener => ModeSpec {
                mode: self,
                label: "Abstract Screener",
                description: "Screen an abstract against inclusion/exclusion criteria",
                tier: ModelTier::ProThinking,
                temperature: 0.1,
                output: OutputContract::Json,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: true,
            },
            AppMode::DataExtractor => ModeSpec {
                mode: self,
                label: "Data Extractor",
                description: "Pull quantitative biomaterials parameters out of a methods section",
                tier: ModelTier::ProThinking,
                temperature: 0.1,
                output: OutputContract::Json,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: true,
            },
            AppMode::CriticalAnalyst => ModeSpec {
                mode: self,
                label: "Critical Analyst",
                description: "Editorial-level critical synthesis of a topic or data dump",
                tier: ModelTier::ProThinking,
                temperature: 0.3,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::WhenShortInput,
                continue_target: Some(AppMode::NoveltyGenerator),
                implemented: true,
            },
            AppMode::IsoComplianceAuditor => ModeSpec {
                mode: self,
                label: "ISO Compliance Auditor",
                description: "Audit a methods section against ISO 10993 / ASTM clauses",
                tier: ModelTier::ProThinking,
                temperature: 0.2,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: true,
            },
            AppMode::NoveltyGenerator => ModeSpec {
                mode: self,
                label: "Novelty Generator",
                description: "Propose novel research ideas from analyzed papers",
                tier: ModelTier::ProThinking,
                temperature: 0.7,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: true,
            },
            AppMode::ImageAnalyzer => ModeSpec {
                mode: self,
                label: "Image Analyzer",
                description: "Describe and transcribe biomedical images and figures",
                tier: ModelTier::ProThinking,
                temperature: 0.3,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: true,
            },
            AppMode::ResourceScout => ModeSpec {
                mode: self,
                label: "Resource Scout",
                description: "Recommend the best databases for a query with direct links",
                tier: ModelTier::Flash,
                temperature: 0.3,
                output: OutputContract::Json,
                grounding: GroundingPolicy::Always,
                continue_target: None,
                implemented: true,
            },
            AppMode::OpenAccessFinder => ModeSpec {
                mode: self,
                label: "Open Access Finder",
                description: "Find free, legal full-text sources for a topic",
                tier: ModelTier::Flash,
                temperature: 0.1,
                output: OutputContract::Json,
                grounding: GroundingPolicy::Always,
                continue_target: None,
                implemented: true,
            },
            AppMode::LabScout => ModeSpec {
                mode: self,
                label: "Lab Scout",
                description: "Locate active research labs by topic and region",
                tier: ModelTier::Flash,
                temperature: 0.4,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Always,
                continue_target: None,
                implemented: true,
            },
            AppMode::ProtocolTroubleshooter => ModeSpec {
                mode: self,
                label: "Protocol Troubleshooter",
                description: "Diagnose a failed synthesis or fabrication experiment",
                tier: ModelTier::ProThinking,
                temperature: 0.5,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: true,
            },
            AppMode::AcademicEmailDrafter => ModeSpec {
                mode: self,
                label: "Academic Email Drafter",
                description: "Draft a personalized email to a professor or researcher",
                tier: ModelTier::Flash,
                temperature: 0.4,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: true,
            },
            AppMode::MlArchitect => ModeSpec {
                mode: self,
                label: "ML/DL Architect",
                description: "Design a machine-learning pipeline for a research problem",
                tier: ModelTier::ProThinking,
                temperature: 0.3,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: true,
            },
            AppMode::PptArchitect => ModeSpec {
                mode: self,
                label: "Slide Architect",
                description: "Turn raw results into a structured slide outline",
                tier: ModelTier::Flash,
                temperature: 0.3,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: true,
            },
            AppMode::PrecisionSearch => ModeSpec {
                mode: self,
                label: "Precision Search Commander",
                description: "Build filtered boolean queries with direct search URLs",
                tier: ModelTier::Flash,
                temperature: 0.2,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Always,
                continue_target: None,
                implemented: true,
            },
            AppMode::WordArchitect => ModeSpec {
                mode: self,
                label: "Word Architect",
                description: "Format research content into a manuscript layout",
                tier: ModelTier::ProThinking,
                temperature: 0.3,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: false,
            },
            AppMode::VoiceAssistant => ModeSpec {
                mode: self,
                label: "Voice Assistant",
                description: "Spoken research assistant",
                tier: ModelTier::Flash,
                temperature: 0.3,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: false,
            },
            AppMode::CitationManager => ModeSpec {
                mode: self,
                label: "Citation Manager",
                description: "Manage and format citations",
                tier: ModelTier::Flash,
                temperature: 0.3,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: false,
            },
            AppMode::FormulationChemist => ModeSpec {
                mode: self,
                label: "Formulation Chemist",
                description: "Formulation design assistant",
                tier: ModelTier::Flash,
                temperature: 0.3,
                output: OutputContract::Markdown,
                grounding: GroundingPolicy::Never,
                continue_target: None,
                implemented: false,
            },
        }
    }

    /// Whether the gateway has a backing model call for this mode.
    pub fn is_implemented(self) -> bool {
        self.spec().implemented
    }

    /// Short human label for listings and card headers.
    pub fn label(self) -> &'static str {
        self.spec().label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_mode_has_a_spec() {
        for mode in AppMode::iter() {
            let spec = mode.spec();
            assert_eq!(spec.mode, mode);
            assert!(!spec.label.is_empty());
            assert!(spec.temperature > 0.0 && spec.temperature <= 1.0);
        }
    }

    #[test]
    fn stub_set_is_exactly_the_declared_stubs() {
        let stubs: Vec<AppMode> = AppMode::iter().filter(|m| !m.is_implemented()).collect();
        assert_eq!(
            stubs,
            vec![
                AppMode::WordArchitect,
                AppMode::VoiceAssistant,
                AppMode::CitationManager,
                AppMode::FormulationChemist,
            ]
        );
    }

    #[test]
    fn serde_tags_match_storage_format() {
        let tag = serde_json::to_string(&AppMode::MlArchitect).unwrap();
        assert_eq!(tag, "\"ML_DEEP_LEARNING_ARCHITECT\"");
        let tag = serde_json::to_string(&AppMode::PrecisionSearch).unwrap();
        assert_eq!(tag, "\"PRECISION_SEARCH_COMMANDER\"");
        let mode: AppMode = serde_json::from_str("\"ISO_COMPLIANCE_AUDITOR\"").unwrap();
        assert_eq!(mode, AppMode::IsoComplianceAuditor);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        let mode: AppMode = "query_builder".parse().unwrap();
        assert_eq!(mode, AppMode::QueryBuilder);
        assert_eq!(mode.to_string(), "QUERY_BUILDER");
    }

    #[test]
    fn continue_targets() {
        assert_eq!(
            AppMode::QueryBuilder.spec().continue_target,
            Some(AppMode::PicoProtocol)
        );
        assert_eq!(
            AppMode::CriticalAnalyst.spec().continue_target,
            Some(AppMode::NoveltyGenerator)
        );
        assert_eq!(AppMode::LabScout.spec().continue_target, None);
    }

    #[test]
    fn grounding_policy_resolution() {
        assert!(GroundingPolicy::Always.applies_to(""));
        assert!(!GroundingPolicy::Never.applies_to("anything"));
        assert!(GroundingPolicy::WhenShortInput.applies_to("injectable hydrogels"));
        assert!(!GroundingPolicy::WhenShortInput.applies_to(&"x".repeat(200)));
    }

    #[test]
    fn short_input_threshold_counts_characters_not_bytes() {
        // 100 Persian characters take ~200 bytes in UTF-8 but are still
        // a short topic, not a pasted data dump
        let topic = "ه".repeat(100);
        assert!(topic.len() >= GroundingPolicy::SHORT_INPUT_LEN);
        assert!(GroundingPolicy::WhenShortInput.applies_to(&topic));

        let long = "ه".repeat(150);
        assert!(!GroundingPolicy::WhenShortInput.applies_to(&long));
    }
}

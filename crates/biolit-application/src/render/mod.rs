//! Terminal result rendering.
//!
//! One renderer per output contract: plain-text modes get a copyable
//! query card, markdown modes go through the lightweight line renderer,
//! JSON modes are deserialized into typed cards. Any JSON payload that
//! fails to parse falls back to a raw-text card so a result is never
//! swallowed.

mod markdown;
mod structured;

use biolit_core::{AppMode, ResultRecord};
use colored::Colorize;

/// Renders an archived or freshly generated record for the terminal.
///
/// Total over the mode enumeration: a new mode without a rendering arm
/// is a compile error.
pub fn render(record: &ResultRecord) -> String {
    let spec = record.mode.spec();

    let body = match record.mode {
        AppMode::QueryBuilder => query_card(&record.content),
        AppMode::AbstractScreener => structured::render_screening(&record.content)
            .unwrap_or_else(|| unparsed_card(&record.content)),
        AppMode::DataExtractor => structured::render_extraction(&record.content)
            .unwrap_or_else(|| unparsed_card(&record.content)),
        AppMode::ResourceScout => structured::render_resource_scout(&record.content)
            .unwrap_or_else(|| unparsed_card(&record.content)),
        AppMode::OpenAccessFinder => structured::render_open_access(&record.content)
            .unwrap_or_else(|| unparsed_card(&record.content)),
        AppMode::PicoProtocol
        | AppMode::CriticalAnalyst
        | AppMode::IsoComplianceAuditor
        | AppMode::NoveltyGenerator
        | AppMode::ImageAnalyzer
        | AppMode::LabScout
        | AppMode::ProtocolTroubleshooter
        | AppMode::AcademicEmailDrafter
        | AppMode::MlArchitect
        | AppMode::PptArchitect
        | AppMode::PrecisionSearch => markdown::render_markdown(&record.content),
        // Declared modes without a backing model call never produce
        // content, but archived blobs may still carry their tag.
        AppMode::WordArchitect
        | AppMode::VoiceAssistant
        | AppMode::CitationManager
        | AppMode::FormulationChemist => raw_card(&record.content),
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n{}\n",
        spec.label.bold().cyan(),
        "─".repeat(spec.label.len().max(24)).dimmed()
    ));
    out.push_str(&body);
    if !out.ends_with('\n') {
        out.push('\n');
    }

    if let Some(sources) = &record.grounding_sources {
        if !sources.is_empty() {
            out.push_str(&format!("\n{}\n", "Sources".bold().underline()));
            for source in sources {
                out.push_str(&format!(
                    "  {} {}\n    {}\n",
                    "•".dimmed(),
                    source.title,
                    source.uri.blue()
                ));
            }
        }
    }

    if let Some(target) = spec.continue_target {
        out.push_str(&format!(
            "\n{}\n",
            format!("Continue with {} (/continue)", target.spec().label).dimmed()
        ));
    }

    out
}

/// Copyable search-string card for the query builder.
fn query_card(content: &str) -> String {
    format!("{}\n", content.trim().green().bold())
}

/// Plain fallback for stub tags.
fn raw_card(content: &str) -> String {
    format!("{}\n", content.trim())
}

/// Raw fallback when a structured payload fails to parse.
fn unparsed_card(content: &str) -> String {
    format!(
        "{}\n{}\n",
        "Could not parse the structured response; raw output follows.".yellow(),
        content.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use biolit_core::GroundingSource;
    use strum::IntoEnumIterator;

    #[test]
    fn dispatch_is_total_and_never_panics() {
        for mode in AppMode::iter() {
            let record = ResultRecord::new(mode, "query", "completely unstructured {{{", None);
            let rendered = render(&record);
            assert!(!rendered.is_empty(), "{mode} rendered nothing");
        }
    }

    #[test]
    fn malformed_json_falls_back_to_raw_text() {
        let record = ResultRecord::new(AppMode::AbstractScreener, "abs", "not json at all", None);
        assert!(render(&record).contains("not json at all"));
    }

    #[test]
    fn screening_payload_renders_decision() {
        let content = r#"{"decision":"INCLUDE","reason":"Meets criteria.","confidence_score":0.95}"#;
        let record = ResultRecord::new(AppMode::AbstractScreener, "abs", content, None);
        let rendered = render(&record);
        assert!(rendered.contains("INCLUDE"));
        assert!(rendered.contains("Meets criteria."));
    }

    #[test]
    fn grounding_sources_listed_in_footer() {
        let sources = vec![GroundingSource {
            title: "Nature Materials".into(),
            uri: "https://example.org/paper".into(),
        }];
        let record = ResultRecord::new(AppMode::LabScout, "labs", "### Seoul", Some(sources));
        let rendered = render(&record);
        assert!(rendered.contains("Nature Materials"));
        assert!(rendered.contains("https://example.org/paper"));
    }

    #[test]
    fn continue_hint_only_for_chained_modes() {
        let chained = ResultRecord::new(AppMode::QueryBuilder, "q", "(A) AND (B)", None);
        assert!(render(&chained).contains("/continue"));

        let terminal = ResultRecord::new(AppMode::LabScout, "q", "text", None);
        assert!(!render(&terminal).contains("/continue"));
    }
}

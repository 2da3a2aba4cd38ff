//! Typed cards for JSON-contract modes.
//!
//! Each renderer deserializes the payload into the shape its system
//! instruction demands and returns `None` on any parse failure, letting
//! the caller fall back to raw text.

use std::collections::BTreeMap;

use biolit_interaction::gemini::strip_code_fences;
use colored::Colorize;
use serde::Deserialize;

/// Screener verdict: include/exclude with a 1-10 confidence.
#[derive(Debug, Deserialize)]
struct ScreeningData {
    decision: String,
    reason: String,
    /// The model emits either a bare number or a quoted one.
    confidence_score: serde_json::Value,
}

pub fn render_screening(content: &str) -> Option<String> {
    let data: ScreeningData = serde_json::from_str(&strip_code_fences(content)).ok()?;
    let decision = if data.decision == "INCLUDE" {
        data.decision.green().bold()
    } else {
        data.decision.red().bold()
    };
    Some(format!(
        "Decision:   {}\nConfidence: {}/10\nReason:     {}\n",
        decision,
        scalar_text(&data.confidence_score),
        data.reason
    ))
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct QuantitativeProperties {
    porosity: Option<String>,
    mechanical_strength: Option<String>,
    degradation_rate: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExtractionData {
    material_composition: String,
    fabrication_method: String,
    #[serde(default)]
    quantitative_properties: QuantitativeProperties,
    biological_result: String,
}

pub fn render_extraction(content: &str) -> Option<String> {
    let data: ExtractionData = serde_json::from_str(&strip_code_fences(content)).ok()?;
    let props = &data.quantitative_properties;
    Some(format!(
        "{}  {}\n{}  {}\n{}\n  Porosity:            {}\n  Mechanical strength: {}\n  Degradation rate:    {}\n{}  {}\n",
        "Material:".bold(),
        data.material_composition,
        "Fabrication:".bold(),
        data.fabrication_method,
        "Quantitative properties:".bold(),
        props.porosity.as_deref().unwrap_or("N/A"),
        props.mechanical_strength.as_deref().unwrap_or("N/A"),
        props.degradation_rate.as_deref().unwrap_or("N/A"),
        "Biological result:".bold(),
        data.biological_result
    ))
}

#[derive(Debug, Deserialize)]
struct Recommendation {
    name: String,
    reason: String,
}

#[derive(Debug, Deserialize)]
struct ResourceScoutData {
    analysis: String,
    recommendations: Vec<Recommendation>,
    #[serde(default)]
    links: BTreeMap<String, String>,
}

pub fn render_resource_scout(content: &str) -> Option<String> {
    let data: ResourceScoutData = serde_json::from_str(&strip_code_fences(content)).ok()?;
    let mut out = format!("{}\n", data.analysis);
    if !data.recommendations.is_empty() {
        out.push_str(&format!("\n{}\n", "Recommended databases".bold()));
        for rec in &data.recommendations {
            out.push_str(&format!("  • {}: {}\n", rec.name.bold(), rec.reason));
        }
    }
    if !data.links.is_empty() {
        out.push_str(&format!("\n{}\n", "Direct search links".bold()));
        for (name, url) in &data.links {
            out.push_str(&format!("  {}: {}\n", name, url.blue()));
        }
    }
    Some(out)
}

/// One open-access hit: `source_type` is PMC, DOAJ, Journal_OA, or
/// Repository.
#[derive(Debug, Deserialize)]
struct OpenAccessEntry {
    title: String,
    journal: String,
    url: String,
    #[serde(default)]
    open_access: bool,
    #[serde(default)]
    source_type: String,
}

pub fn render_open_access(content: &str) -> Option<String> {
    let entries: Vec<OpenAccessEntry> = serde_json::from_str(&strip_code_fences(content)).ok()?;
    if entries.is_empty() {
        return Some("No open-access articles found for this topic.\n".to_string());
    }
    let mut out = String::new();
    for entry in &entries {
        let badge = if entry.open_access { "OA".green() } else { "?".yellow() };
        out.push_str(&format!(
            "[{}] {}\n    {} · {}\n    {}\n",
            badge,
            entry.title.bold(),
            entry.journal,
            entry.source_type,
            entry.url.blue()
        ));
    }
    Some(out)
}

fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screening_accepts_numeric_and_string_confidence() {
        colored::control::set_override(false);
        let numeric = r#"{"decision":"INCLUDE","reason":"On topic.","confidence_score":9}"#;
        assert!(render_screening(numeric).unwrap().contains("9/10"));

        let quoted = r#"{"decision":"EXCLUDE","reason":"Off topic.","confidence_score":"3"}"#;
        assert!(render_screening(quoted).unwrap().contains("3/10"));
    }

    #[test]
    fn screening_rejects_garbage() {
        assert!(render_screening("## markdown, not json").is_none());
    }

    #[test]
    fn extraction_fills_missing_properties_with_na() {
        colored::control::set_override(false);
        let content = r#"{
            "material_composition": "PCL/gelatin blend",
            "fabrication_method": "Electrospinning",
            "quantitative_properties": {"porosity": "82%"},
            "biological_result": "Viability above 90% at day 7."
        }"#;
        let rendered = render_extraction(content).unwrap();
        assert!(rendered.contains("PCL/gelatin blend"));
        assert!(rendered.contains("82%"));
        assert!(rendered.contains("N/A"));
    }

    #[test]
    fn extraction_tolerates_code_fences() {
        let content = "```json\n{\"material_composition\":\"Alginate\",\"fabrication_method\":\"Casting\",\"biological_result\":\"N/A\"}\n```";
        assert!(render_extraction(content).unwrap().contains("Alginate"));
    }

    #[test]
    fn resource_scout_lists_links() {
        colored::control::set_override(false);
        let content = r#"{
            "analysis": "PubMed covers this best.",
            "recommendations": [{"name": "PubMed", "reason": "Biomedical focus"}],
            "links": {"pubmed": "https://pubmed.ncbi.nlm.nih.gov/?term=hydrogel"}
        }"#;
        let rendered = render_resource_scout(content).unwrap();
        assert!(rendered.contains("PubMed"));
        assert!(rendered.contains("https://pubmed.ncbi.nlm.nih.gov/?term=hydrogel"));
    }

    #[test]
    fn open_access_renders_each_entry() {
        colored::control::set_override(false);
        let content = r#"[
            {"title": "Injectable hydrogels", "journal": "Biomaterials Research",
             "url": "https://example.org/1", "open_access": true, "source_type": "DOAJ"}
        ]"#;
        let rendered = render_open_access(content).unwrap();
        assert!(rendered.contains("Injectable hydrogels"));
        assert!(rendered.contains("DOAJ"));
    }

    #[test]
    fn open_access_empty_array_reports_no_hits() {
        assert!(render_open_access("[]").unwrap().contains("No open-access"));
    }
}

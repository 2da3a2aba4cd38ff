//! Minimal line-oriented markdown rendering for the terminal.
//!
//! Covers exactly what the model emits in markdown modes: ATX headings,
//! unordered lists, fenced code blocks, and `**bold**` spans. Anything
//! else passes through verbatim.

use colored::Colorize;

pub fn render_markdown(content: &str) -> String {
    let mut out = String::new();
    let mut in_code_block = false;

    for line in content.lines() {
        if line.trim_start().starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            out.push_str(&format!("    {}\n", line.dimmed()));
            continue;
        }

        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("### ") {
            out.push_str(&format!("{}\n", rest.bold()));
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            out.push_str(&format!("{}\n", rest.bold().cyan()));
        } else if let Some(rest) = trimmed.strip_prefix("# ") {
            out.push_str(&format!("{}\n", rest.bold().cyan().underline()));
        } else if let Some(rest) = trimmed.strip_prefix("- ") {
            out.push_str(&format!("  • {}\n", render_spans(rest)));
        } else if let Some(rest) = trimmed.strip_prefix("* ") {
            out.push_str(&format!("  • {}\n", render_spans(rest)));
        } else {
            out.push_str(&format!("{}\n", render_spans(line)));
        }
    }

    out
}

/// Renders `**bold**` spans; odd delimiters pass through unchanged.
fn render_spans(line: &str) -> String {
    let parts: Vec<&str> = line.split("**").collect();
    if parts.len() < 3 || parts.len() % 2 == 0 {
        return line.to_string();
    }
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 1 {
            out.push_str(&format!("{}", part.bold()));
        } else {
            out.push_str(part);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_lists_are_reshaped() {
        colored::control::set_override(false);
        let rendered = render_markdown("## Findings\n- first point\n- second point");
        assert!(rendered.contains("Findings"));
        assert!(rendered.contains("• first point"));
        assert!(rendered.contains("• second point"));
        assert!(!rendered.contains("## "));
    }

    #[test]
    fn code_fences_are_indented_and_delimiters_dropped() {
        colored::control::set_override(false);
        let rendered = render_markdown("```python\nimport torch\n```");
        assert!(rendered.contains("    import torch"));
        assert!(!rendered.contains("```"));
    }

    #[test]
    fn bold_spans_survive_without_asterisks() {
        colored::control::set_override(false);
        let rendered = render_markdown("Use **PEGDA** as the base.");
        assert!(rendered.contains("PEGDA"));
        assert!(!rendered.contains("**"));
    }

    #[test]
    fn unbalanced_delimiters_pass_through() {
        colored::control::set_override(false);
        let rendered = render_markdown("a ** stray marker");
        assert!(rendered.contains("a ** stray marker"));
    }
}

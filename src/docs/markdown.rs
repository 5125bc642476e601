//! Markdown analysis: ATX headings become sections, everything else is
//! body text. Fenced code blocks are kept in the text (code identifiers
//! are worth indexing) but `#` lines inside them are not headings.

use crate::docs::{DocAnalysis, Section};

pub fn analyze(content: &str) -> DocAnalysis {
    let mut doc = DocAnalysis::default();
    let mut text = String::with_capacity(content.len());
    let mut in_fence = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            text.push_str(line);
            text.push('\n');
            continue;
        }
        if !in_fence {
            if let Some(title) = heading_text(trimmed) {
                if doc.title.is_none() {
                    doc.title = Some(title.to_string());
                }
                // Titles feed the title-term map, not the body text.
                doc.sections.push(Section::new(title));
                continue;
            }
        }
        text.push_str(line);
        text.push('\n');
    }

    doc.text = text;
    doc
}

/// Extract the text of an ATX heading (`#` through `######`).
fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if rest.is_empty() {
        return None;
    }
    if !rest.starts_with(' ') {
        return None;
    }
    let title = rest.trim().trim_end_matches('#').trim_end();
    if title.is_empty() { None } else { Some(title) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_become_sections() {
        let doc = analyze("# Usage\n\nSome text.\n\n## Installation\n\npip install it\n");
        assert_eq!(doc.title.as_deref(), Some("Usage"));
        assert_eq!(
            doc.sections,
            vec![Section::new("Usage"), Section::new("Installation")]
        );
        assert_eq!(doc.sections[1].anchor, "installation");
    }

    #[test]
    fn test_hash_in_fence_is_not_a_heading() {
        let doc = analyze("# Title\n\n```sh\n# comment\n```\n");
        assert_eq!(doc.sections.len(), 1);
    }

    #[test]
    fn test_hash_without_space_is_not_a_heading() {
        let doc = analyze("#tag\n");
        assert!(doc.sections.is_empty());
        assert!(doc.title.is_none());
    }

    #[test]
    fn test_closing_hashes_trimmed() {
        assert_eq!(heading_text("## Usage ##"), Some("Usage"));
    }
}

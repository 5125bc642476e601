//! reStructuredText analysis: section titles, domain directives, body
//! text. This is a line-oriented scan, not a full reST parser; it covers
//! the subset that determines index content.

use crate::docs::{ApiObject, DocAnalysis, ObjType, Section};

/// Characters valid as reST section adornments.
const ADORNMENT_CHARS: &str = "=-`:'\"~^_*+#<>!$%&(),./;?@[\\]{|}";

pub fn analyze(content: &str) -> DocAnalysis {
    let lines: Vec<&str> = content.lines().collect();
    let mut doc = DocAnalysis::default();
    let mut text = String::with_capacity(content.len());
    let mut module = String::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        // Overline form: adornment / title / matching adornment.
        if is_adornment(line)
            && i + 2 < lines.len()
            && !lines[i + 1].trim().is_empty()
            && !is_adornment(lines[i + 1])
            && is_matching_adornment(lines[i + 2], line, lines[i + 1])
        {
            // Titles feed the title-term map, not the body text.
            push_section(&mut doc, lines[i + 1].trim());
            i += 3;
            continue;
        }

        // Underline form: title / adornment at least as long as the title.
        if !line.trim().is_empty()
            && !is_adornment(line)
            && i + 1 < lines.len()
            && is_adornment(lines[i + 1])
            && lines[i + 1].len() >= line.trim_end().len()
        {
            push_section(&mut doc, line.trim());
            i += 2;
            continue;
        }

        // Explicit markup: directives and comments.
        if let Some(body) = line.trim_start().strip_prefix(".. ") {
            if let Some((directive, argument)) = split_directive(body) {
                match directive {
                    "module" | "py:module" | "currentmodule" | "py:currentmodule" => {
                        module = argument.to_string();
                    }
                    _ => {
                        if let Some(objtype) = ObjType::from_directive(directive) {
                            if let Some(name) = signature_name(argument) {
                                doc.objects.push(ApiObject {
                                    module: module.clone(),
                                    objtype,
                                    name,
                                });
                            }
                        }
                    }
                }
            }
            // Directive and comment lines are markup, not prose.
            i += 1;
            continue;
        }

        text.push_str(line);
        text.push('\n');
        i += 1;
    }

    doc.text = text;
    doc
}

fn push_section(doc: &mut DocAnalysis, title: &str) {
    if doc.title.is_none() {
        doc.title = Some(title.to_string());
    }
    doc.sections.push(Section::new(title));
}

/// A non-empty line made of one repeated adornment character, at least
/// two characters long.
fn is_adornment(line: &str) -> bool {
    let line = line.trim_end();
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    line.len() >= 2 && ADORNMENT_CHARS.contains(first) && chars.all(|c| c == first)
}

fn is_matching_adornment(line: &str, overline: &str, title: &str) -> bool {
    is_adornment(line)
        && line.trim_end().starts_with(
            overline
                .trim_end()
                .chars()
                .next()
                .unwrap_or('\0'),
        )
        && line.trim_end().len() >= title.trim().len()
}

/// Split `py:function:: create_meal_df(n=5)` into directive name and
/// argument.
fn split_directive(body: &str) -> Option<(&str, &str)> {
    let (name, rest) = body.split_once("::")?;
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some((name, rest.trim()))
}

/// Extract the object name from a directive signature, dropping any
/// parameter list or annotation.
fn signature_name(signature: &str) -> Option<String> {
    let name = signature
        .split(|c: char| c == '(' || c.is_whitespace())
        .next()?
        .trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

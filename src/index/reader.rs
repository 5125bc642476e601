use crate::index::types::SearchIndex;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// The JavaScript call that wraps the JSON payload in a `searchindex.js`
/// file.
const WRAPPER_PREFIX: &str = "Search.setIndex(";

/// Load a search index from disk.
///
/// Accepts both the wrapped form (`Search.setIndex({...})`, the file a
/// generator ships next to its HTML) and a bare JSON document.
pub fn load_index(path: &Path) -> Result<SearchIndex> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index file: {}", path.display()))?;
    parse_index(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse index content, auto-detecting the JS wrapper.
pub fn parse_index(content: &str) -> Result<SearchIndex> {
    let trimmed = content.trim_start_matches('\u{feff}').trim();
    if trimmed.starts_with(WRAPPER_PREFIX) {
        parse_js(trimmed)
    } else {
        parse_json(trimmed)
    }
}

/// Parse the wrapped `Search.setIndex({...})` form.
pub fn parse_js(content: &str) -> Result<SearchIndex> {
    let trimmed = content.trim_start_matches('\u{feff}').trim();
    let Some(rest) = trimmed.strip_prefix(WRAPPER_PREFIX) else {
        bail!("Missing `{WRAPPER_PREFIX}` wrapper");
    };

    // The payload ends at the last closing parenthesis; anything after it
    // may only be a semicolon.
    let Some(close) = memchr::memrchr(b')', rest.as_bytes()) else {
        bail!("Unterminated `{WRAPPER_PREFIX}` call");
    };
    let tail = rest[close + 1..].trim();
    if !tail.is_empty() && tail != ";" {
        bail!("Unexpected trailing content after index payload: {tail:?}");
    }

    parse_json(&rest[..close])
}

/// Parse a bare JSON index document.
pub fn parse_json(content: &str) -> Result<SearchIndex> {
    serde_json::from_str(content).context("Malformed index JSON")
}

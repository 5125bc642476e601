use crate::index::types::SearchIndex;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize an index as the wrapped `searchindex.js` form consumed by
/// the stock client-side search script.
///
/// Output is compact JSON with sorted keys (the maps are ordered), so
/// regenerating from the same sources is byte-for-byte reproducible.
pub fn to_js_string(index: &SearchIndex) -> Result<String> {
    let json = serde_json::to_string(index).context("Failed to serialize index")?;
    Ok(format!("Search.setIndex({json})"))
}

/// Serialize an index as a bare JSON document, optionally pretty-printed
/// for diffing.
pub fn to_json_string(index: &SearchIndex, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(index)
    } else {
        serde_json::to_string(index)
    };
    json.context("Failed to serialize index")
}

/// Write an index to disk in the wrapped form.
pub fn write_js(index: &SearchIndex, path: &Path) -> Result<()> {
    let content = to_js_string(index)?;
    write_file(path, &content)
}

/// Write an index to disk as bare JSON.
pub fn write_json(index: &SearchIndex, path: &Path, pretty: bool) -> Result<()> {
    let content = to_json_string(index, pretty)?;
    write_file(path, &content)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create index file: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(content.as_bytes())
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write index file: {}", path.display()))
}

use crate::index::reader::load_index;
use anyhow::Result;
use std::path::Path;

/// Display summary statistics for an index file.
pub fn show_stats(path: &Path) -> Result<()> {
    let index = load_index(path)?;

    println!("Index Statistics");
    println!("================");
    println!();
    println!("File:             {}", path.display());
    if let Ok(meta) = std::fs::metadata(path) {
        println!("File size:        {}", format_size(meta.len()));
    }
    println!("Documents:        {}", index.doc_count());
    println!("Titles indexed:   {}", index.alltitles.len());
    println!("Terms:            {}", index.terms.len());
    println!("Title terms:      {}", index.titleterms.len());
    println!("Index entries:    {}", index.indexentries.len());

    let object_count: usize = index.objects.values().map(Vec::len).sum();
    println!("API objects:      {object_count}");

    if !index.objtypes.is_empty() {
        println!();
        println!("Object types:");
        for (idx, objtype) in &index.objtypes {
            let count = index
                .objects
                .values()
                .flatten()
                .filter(|entry| entry.type_idx().to_string() == *idx)
                .count();
            println!("  {objtype:20} {count}");
        }
    }

    if !index.envversion.is_empty() {
        println!();
        println!("Environment versions:");
        for (name, version) in &index.envversion {
            println!("  {name:30} {version}");
        }
    }

    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} bytes")
    }
}

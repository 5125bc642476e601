use crate::docs::{self, DocAnalysis, DocKind, ObjType};
use crate::index::types::{
    DocId, GENERATOR_ENV_VERSION, GENERATOR_KEY, IndexEntryRef, ObjName, ObjectEntry, Postings,
    SearchIndex, TitleRef,
};
use crate::utils::extract_terms;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// What one source file contributes to the index (computed in parallel).
struct ProcessedDoc {
    docname: String,
    filename: String,
    analysis: DocAnalysis,
    terms: Vec<String>,
    title_terms: Vec<String>,
}

/// Build an index wholesale from a documentation source tree.
///
/// Collects `.rst`, `.md`, and `.txt` files (skipping hidden and
/// underscore-prefixed directories such as `_build`), analyzes them in
/// parallel, and merges the results deterministically: documents are
/// ordered by docname, map keys sort themselves.
pub fn build_index(source_root: &Path) -> Result<SearchIndex> {
    let files = collect_source_files(source_root)?;

    let processed: Vec<ProcessedDoc> = files
        .par_iter()
        .map(|rel_path| process_doc(source_root, rel_path))
        .collect::<Result<Vec<_>>>()?;

    Ok(merge(processed))
}

/// Find source documents under the root, ordered by docname.
fn collect_source_files(source_root: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(source_root)
        .hidden(true)
        .filter_entry(|entry| {
            // Generator convention: _build, _static, _templates and
            // friends hold output and assets, not source documents.
            !entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with('_'))
                || entry.depth() == 0
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.context("Failed to walk source tree")?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        let recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(DocKind::from_extension)
            .is_some();
        if !recognized {
            continue;
        }
        let rel = path
            .strip_prefix(source_root)
            .unwrap_or(path)
            .to_path_buf();
        files.push(rel);
    }

    files.sort_by_key(|path| docname_of(path));
    Ok(files)
}

/// Docname: the relative path without extension, `/`-separated.
fn docname_of(rel_path: &Path) -> String {
    let stem = rel_path.with_extension("");
    stem.components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join("/")
}

fn process_doc(source_root: &Path, rel_path: &Path) -> Result<ProcessedDoc> {
    let full_path = source_root.join(rel_path);
    let content = fs::read_to_string(&full_path)
        .with_context(|| format!("Failed to read source file: {}", full_path.display()))?;

    let kind = rel_path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(DocKind::from_extension)
        .context("Unrecognized source file type")?;

    let analysis = docs::analyze(kind, &content);

    let mut terms: Vec<String> = extract_terms(&analysis.text).into_iter().collect();
    terms.sort_unstable();

    let mut title_text = String::new();
    for section in &analysis.sections {
        title_text.push_str(&section.title);
        title_text.push('\n');
    }
    let mut title_terms: Vec<String> = extract_terms(&title_text).into_iter().collect();
    title_terms.sort_unstable();

    let filename = rel_path
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join("/");

    Ok(ProcessedDoc {
        docname: docname_of(rel_path),
        filename,
        analysis,
        terms,
        title_terms,
    })
}

fn merge(processed: Vec<ProcessedDoc>) -> SearchIndex {
    let mut index = SearchIndex::default();
    index
        .envversion
        .insert(GENERATOR_KEY.to_string(), GENERATOR_ENV_VERSION);

    // Object type table: distinct types, sorted, numbered from zero.
    let obj_types: BTreeSet<ObjType> = processed
        .iter()
        .flat_map(|doc| doc.analysis.objects.iter().map(|obj| obj.objtype))
        .collect();
    let type_indices: BTreeMap<ObjType, u32> = obj_types
        .iter()
        .enumerate()
        .map(|(i, ty)| (*ty, i as u32))
        .collect();
    for (ty, idx) in &type_indices {
        let key = idx.to_string();
        index.objnames.insert(
            key.clone(),
            ObjName("py".into(), ty.type_name().into(), ty.label().into()),
        );
        index.objtypes.insert(key, format!("py:{}", ty.type_name()));
    }

    let mut terms: BTreeMap<String, Vec<DocId>> = BTreeMap::new();
    let mut title_terms: BTreeMap<String, Vec<DocId>> = BTreeMap::new();

    for (doc_id, doc) in processed.into_iter().enumerate() {
        let doc_id = doc_id as DocId;

        index.docnames.push(doc.docname);
        index.filenames.push(doc.filename);
        index
            .titles
            .push(doc.analysis.title.clone().unwrap_or_default());

        for section in &doc.analysis.sections {
            let anchor = (!section.anchor.is_empty()).then(|| section.anchor.clone());
            index
                .alltitles
                .entry(section.title.clone())
                .or_default()
                .push(TitleRef(doc_id, anchor));
        }

        for term in doc.terms {
            terms.entry(term).or_default().push(doc_id);
        }
        for term in doc.title_terms {
            title_terms.entry(term).or_default().push(doc_id);
        }

        for obj in &doc.analysis.objects {
            let type_idx = type_indices[&obj.objtype];
            index
                .objects
                .entry(obj.module.clone())
                .or_default()
                .push(ObjectEntry(doc_id, type_idx, 1, String::new(), obj.name.clone()));

            let anchor = if obj.module.is_empty() {
                obj.name.clone()
            } else {
                format!("{}.{}", obj.module, obj.name)
            };
            index
                .indexentries
                .entry(obj.entry_text())
                .or_default()
                .push(IndexEntryRef(doc_id, anchor, false));
        }
    }

    index.terms = terms
        .into_iter()
        .map(|(term, docs)| (term, Postings::from(docs)))
        .collect();
    index.titleterms = title_terms
        .into_iter()
        .map(|(term, docs)| (term, Postings::from(docs)))
        .collect();

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::Section;

    fn doc(docname: &str, filename: &str, analysis: DocAnalysis, terms: &[&str]) -> ProcessedDoc {
        ProcessedDoc {
            docname: docname.into(),
            filename: filename.into(),
            analysis,
            terms: terms.iter().map(|s| s.to_string()).collect(),
            title_terms: Vec::new(),
        }
    }

    #[test]
    fn test_merge_postings() {
        let a = doc("api", "api.rst", DocAnalysis::default(), &["datafram", "usag"]);
        let b = doc("usage", "usage.rst", DocAnalysis::default(), &["usag"]);
        let ix = merge(vec![a, b]);

        assert_eq!(ix.docnames, vec!["api", "usage"]);
        assert_eq!(ix.terms["datafram"], Postings::One(0));
        assert_eq!(ix.terms["usag"], Postings::Many(vec![0, 1]));
    }

    #[test]
    fn test_merge_object_tables() {
        let mut analysis = DocAnalysis::default();
        analysis.title = Some("API".into());
        analysis.sections.push(Section::new("API"));
        analysis.objects.push(crate::docs::ApiObject {
            module: "pkg".into(),
            objtype: ObjType::Function,
            name: "run".into(),
        });

        let ix = merge(vec![doc("api", "api.rst", analysis, &[])]);

        assert_eq!(ix.objtypes["0"], "py:function");
        assert_eq!(ix.objnames["0"].label(), "Python function");
        let entry = &ix.objects["pkg"][0];
        assert_eq!(entry.name(), "run");
        assert_eq!(entry.anchor("pkg"), "pkg.run");
        assert!(ix.indexentries.contains_key("run() (in module pkg)"));
    }

    #[test]
    fn test_docname_of_nested_path() {
        assert_eq!(
            docname_of(Path::new("generated/pkg.empty.rst")),
            "generated/pkg.empty"
        );
    }
}

//! Structural well-formedness checks for a loaded index.
//!
//! Errors are violations of the format's referential invariants: every
//! document id must index into the document tables, and every object's
//! type index must resolve through `objnames`/`objtypes`. Warnings flag
//! oddities a generator would not normally emit (unsorted postings,
//! empty terms) that a stock search widget tolerates.

use crate::index::types::{DocId, GENERATOR_KEY, SearchIndex};
use std::fmt;

/// How bad a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable machine-readable name of the check.
    pub check: &'static str,
    pub message: String,
}

impl Diagnostic {
    fn error(check: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            check,
            message,
        }
    }

    fn warning(check: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            check,
            message,
        }
    }
}

/// All findings for one index.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// True when no errors were found (warnings are allowed).
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Run every check against an index.
pub fn validate(index: &SearchIndex) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_doc_tables(index, &mut report);
    check_title_refs(index, &mut report);
    check_term_postings(index, &mut report);
    check_objects(index, &mut report);
    check_index_entries(index, &mut report);
    check_envversion(index, &mut report);

    report
}

/// `docnames`, `filenames`, and `titles` are parallel tables.
fn check_doc_tables(index: &SearchIndex, report: &mut ValidationReport) {
    let docs = index.docnames.len();
    if index.filenames.len() != docs {
        report.push(Diagnostic::error(
            "doc-tables",
            format!(
                "filenames has {} entries but docnames has {}",
                index.filenames.len(),
                docs
            ),
        ));
    }
    if index.titles.len() != docs {
        report.push(Diagnostic::error(
            "doc-tables",
            format!(
                "titles has {} entries but docnames has {}",
                index.titles.len(),
                docs
            ),
        ));
    }
}

fn doc_range_error(index: &SearchIndex, table: &'static str, key: &str, doc: DocId) -> Diagnostic {
    Diagnostic::error(
        "doc-range",
        format!(
            "{table} entry {key:?} references document {doc}, but only {} documents exist",
            index.doc_count()
        ),
    )
}

fn check_title_refs(index: &SearchIndex, report: &mut ValidationReport) {
    for (title, refs) in &index.alltitles {
        if refs.is_empty() {
            report.push(Diagnostic::warning(
                "empty-postings",
                format!("alltitles entry {title:?} has no locations"),
            ));
        }
        for title_ref in refs {
            if !index.contains_doc(title_ref.doc()) {
                report.push(doc_range_error(index, "alltitles", title, title_ref.doc()));
            }
        }
    }
}

fn check_term_postings(index: &SearchIndex, report: &mut ValidationReport) {
    for (table, map) in [("terms", &index.terms), ("titleterms", &index.titleterms)] {
        for (term, postings) in map {
            if term.is_empty() {
                report.push(Diagnostic::warning(
                    "empty-term",
                    format!("{table} contains an empty-string term"),
                ));
            }
            if postings.is_empty() {
                report.push(Diagnostic::warning(
                    "empty-postings",
                    format!("{table} entry {term:?} has no documents"),
                ));
            }
            for doc in postings.doc_ids() {
                if !index.contains_doc(doc) {
                    report.push(doc_range_error(index, table, term, doc));
                }
            }

            let docs: Vec<DocId> = postings.doc_ids().collect();
            if docs.windows(2).any(|w| w[0] >= w[1]) {
                report.push(Diagnostic::warning(
                    "unsorted-postings",
                    format!("{table} entry {term:?} has unsorted or duplicate documents"),
                ));
            }
        }
    }
}

fn check_objects(index: &SearchIndex, report: &mut ValidationReport) {
    // objnames and objtypes describe the same table.
    for key in index.objnames.keys() {
        if !index.objtypes.contains_key(key) {
            report.push(Diagnostic::error(
                "object-type-tables",
                format!("objnames key {key:?} is missing from objtypes"),
            ));
        }
    }
    for key in index.objtypes.keys() {
        if !index.objnames.contains_key(key) {
            report.push(Diagnostic::error(
                "object-type-tables",
                format!("objtypes key {key:?} is missing from objnames"),
            ));
        }
    }
    for key in index.objnames.keys() {
        if key.parse::<u32>().is_err() {
            report.push(Diagnostic::warning(
                "objname-key",
                format!("objnames key {key:?} is not a decimal type index"),
            ));
        }
    }

    for (module, entries) in &index.objects {
        for entry in entries {
            if !index.contains_doc(entry.doc()) {
                report.push(doc_range_error(index, "objects", module, entry.doc()));
            }
            let type_key = entry.type_idx().to_string();
            if !index.objnames.contains_key(&type_key) || !index.objtypes.contains_key(&type_key) {
                report.push(Diagnostic::error(
                    "object-type",
                    format!(
                        "objects entry {:?} in module {module:?} uses unknown type index {}",
                        entry.name(),
                        entry.type_idx()
                    ),
                ));
            }
        }
    }
}

fn check_index_entries(index: &SearchIndex, report: &mut ValidationReport) {
    for (entry_text, refs) in &index.indexentries {
        if refs.is_empty() {
            report.push(Diagnostic::warning(
                "empty-postings",
                format!("indexentries entry {entry_text:?} has no locations"),
            ));
        }
        for entry_ref in refs {
            if !index.contains_doc(entry_ref.doc()) {
                report.push(doc_range_error(
                    index,
                    "indexentries",
                    entry_text,
                    entry_ref.doc(),
                ));
            }
        }
    }
}

fn check_envversion(index: &SearchIndex, report: &mut ValidationReport) {
    if !index.envversion.contains_key(GENERATOR_KEY) {
        report.push(Diagnostic::warning(
            "envversion",
            "envversion does not record the core generator version".to_string(),
        ));
    }
}

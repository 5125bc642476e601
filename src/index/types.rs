use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position of a document in the `docnames`/`filenames`/`titles` tables.
pub type DocId = u32;

/// Environment version recorded for the core generator, used by consumers
/// to invalidate stale indexes wholesale.
pub const GENERATOR_ENV_VERSION: u32 = 61;

/// Key under which the generator version is recorded in `envversion`.
pub const GENERATOR_KEY: &str = "sphinx";

/// A complete search index document: the JSON payload of a
/// `searchindex.js` file.
///
/// All maps are `BTreeMap` so serialization iterates keys in sorted
/// order, matching the generator's sorted-key output and keeping writes
/// deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchIndex {
    /// Section/page title text -> locations where that title appears.
    pub alltitles: BTreeMap<String, Vec<TitleRef>>,
    /// Document identifiers (source-relative paths without extension).
    pub docnames: Vec<String>,
    /// Tool/extension name -> integer format version, for invalidation.
    pub envversion: BTreeMap<String, u32>,
    /// Source filenames, parallel to `docnames`.
    pub filenames: Vec<String>,
    /// Index entry text -> target locations.
    pub indexentries: BTreeMap<String, Vec<IndexEntryRef>>,
    /// Module name -> API objects documented under it.
    pub objects: BTreeMap<String, Vec<ObjectEntry>>,
    /// Object type index (as decimal string) -> `[domain, type, label]`.
    pub objnames: BTreeMap<String, ObjName>,
    /// Object type index (as decimal string) -> `"domain:type"`.
    pub objtypes: BTreeMap<String, String>,
    /// Stemmed body word -> documents containing it.
    pub terms: BTreeMap<String, Postings>,
    /// Page titles, parallel to `docnames`.
    pub titles: Vec<String>,
    /// Stemmed title word -> documents whose titles contain it.
    pub titleterms: BTreeMap<String, Postings>,
}

impl SearchIndex {
    /// Number of documents in the index.
    pub fn doc_count(&self) -> usize {
        self.docnames.len()
    }

    /// Whether a document id is a valid index into the document tables.
    pub fn contains_doc(&self, doc: DocId) -> bool {
        (doc as usize) < self.docnames.len()
    }
}

/// A posting list. The generator compacts single-document postings to a
/// bare integer, so both `5` and `[5, 7]` must parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postings {
    One(DocId),
    Many(Vec<DocId>),
}

impl Postings {
    /// Documents referenced by this posting list, in stored order.
    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        match self {
            Postings::One(doc) => std::slice::from_ref(doc).iter().copied(),
            Postings::Many(docs) => docs.iter().copied(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Postings::One(_) => 1,
            Postings::Many(docs) => docs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Postings::Many(docs) if docs.is_empty())
    }
}

impl From<Vec<DocId>> for Postings {
    /// Builds the compact form: a singleton list becomes a bare integer.
    fn from(mut docs: Vec<DocId>) -> Self {
        if docs.len() == 1 {
            Postings::One(docs.remove(0))
        } else {
            Postings::Many(docs)
        }
    }
}

/// A `[doc-id, anchor]` pair in `alltitles`. The anchor is `null` for
/// titles with no same-page fragment (e.g. toctree captions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRef(pub DocId, pub Option<String>);

impl TitleRef {
    pub fn doc(&self) -> DocId {
        self.0
    }

    pub fn anchor(&self) -> Option<&str> {
        self.1.as_deref()
    }
}

/// A `[doc-id, anchor, main-flag]` triple in `indexentries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntryRef(pub DocId, pub String, pub bool);

impl IndexEntryRef {
    pub fn doc(&self) -> DocId {
        self.0
    }

    pub fn anchor(&self) -> &str {
        &self.1
    }

    /// Whether this is the entry's primary location.
    pub fn is_main(&self) -> bool {
        self.2
    }
}

/// A `[doc-id, type-idx, priority, anchor, name]` record in `objects`.
///
/// An empty anchor means the fragment is `module.name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEntry(pub DocId, pub u32, pub i32, pub String, pub String);

impl ObjectEntry {
    pub fn doc(&self) -> DocId {
        self.0
    }

    pub fn type_idx(&self) -> u32 {
        self.1
    }

    pub fn priority(&self) -> i32 {
        self.2
    }

    pub fn name(&self) -> &str {
        &self.4
    }

    /// Resolve the anchor fragment, applying the empty-anchor shorthand.
    pub fn anchor(&self, module: &str) -> String {
        if self.3.is_empty() {
            if module.is_empty() {
                self.4.clone()
            } else {
                format!("{}.{}", module, self.4)
            }
        } else {
            self.3.clone()
        }
    }
}

/// A `[domain, type, display label]` triple in `objnames`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjName(pub String, pub String, pub String);

impl ObjName {
    pub fn domain(&self) -> &str {
        &self.0
    }

    pub fn type_name(&self) -> &str {
        &self.1
    }

    pub fn label(&self) -> &str {
        &self.2
    }
}

//! Lightweight analysis of documentation source files.
//!
//! The builder does not render documents; it only needs the pieces the
//! search index stores: the page title, section headings (with their
//! anchor fragments), API object directives, and the body text to feed
//! the term index.

pub mod markdown;
pub mod rst;

use crate::utils::slugify;

/// What a single source document contributes to the index.
#[derive(Debug, Clone, Default)]
pub struct DocAnalysis {
    /// Page title (first heading), if any.
    pub title: Option<String>,
    /// All headings, page title included.
    pub sections: Vec<Section>,
    /// API objects declared via domain directives.
    pub objects: Vec<ApiObject>,
    /// Prose fed to the term index.
    pub text: String,
}

/// A heading and its anchor fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub anchor: String,
}

impl Section {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            anchor: slugify(title),
        }
    }
}

/// An API object declared by a `.. py:function::`-style directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiObject {
    /// Enclosing module (from `.. module::` / `.. currentmodule::`).
    pub module: String,
    pub objtype: ObjType,
    /// Dotted name relative to the module.
    pub name: String,
}

impl ApiObject {
    /// The index entry text the generator's Python domain produces for
    /// this object, e.g. `create_meal_df() (in module compatsphinxext)`.
    pub fn entry_text(&self) -> String {
        match self.objtype {
            ObjType::Function => format!("{}() (in module {})", self.name, self.module),
            ObjType::Class => format!("{} (class in {})", self.name, self.module),
            ObjType::Exception => format!("{} (exception in {})", self.name, self.module),
            ObjType::Method => match self.name.rsplit_once('.') {
                Some((parent, tail)) => {
                    format!("{}() ({}.{} method)", tail, self.module, parent)
                }
                None => format!("{}() (in module {})", self.name, self.module),
            },
            ObjType::Attribute | ObjType::Data => {
                format!("{} (in module {})", self.name, self.module)
            }
        }
    }
}

/// Object types of the Python domain that the builder recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ObjType {
    Attribute,
    Class,
    Data,
    Exception,
    Function,
    Method,
}

impl ObjType {
    /// Map a directive name (`function`, `py:function`, ...) to its type.
    pub fn from_directive(directive: &str) -> Option<Self> {
        let name = directive.strip_prefix("py:").unwrap_or(directive);
        match name {
            "attribute" => Some(ObjType::Attribute),
            "class" => Some(ObjType::Class),
            "data" => Some(ObjType::Data),
            "exception" => Some(ObjType::Exception),
            "function" => Some(ObjType::Function),
            "method" => Some(ObjType::Method),
            _ => None,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            ObjType::Attribute => "attribute",
            ObjType::Class => "class",
            ObjType::Data => "data",
            ObjType::Exception => "exception",
            ObjType::Function => "function",
            ObjType::Method => "method",
        }
    }

    /// Display label stored in `objnames`.
    pub fn label(self) -> &'static str {
        match self {
            ObjType::Attribute => "Python attribute",
            ObjType::Class => "Python class",
            ObjType::Data => "Python data",
            ObjType::Exception => "Python exception",
            ObjType::Function => "Python function",
            ObjType::Method => "Python method",
        }
    }
}

/// Source formats the builder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Rst,
    Markdown,
    Plain,
}

impl DocKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "rst" => Some(DocKind::Rst),
            "md" | "markdown" => Some(DocKind::Markdown),
            "txt" => Some(DocKind::Plain),
            _ => None,
        }
    }
}

/// Analyze one source document.
pub fn analyze(kind: DocKind, content: &str) -> DocAnalysis {
    match kind {
        DocKind::Rst => rst::analyze(content),
        DocKind::Markdown => markdown::analyze(content),
        DocKind::Plain => analyze_plain(content),
    }
}

/// Plain text: the first non-empty line doubles as the title.
fn analyze_plain(content: &str) -> DocAnalysis {
    let title = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string);

    let sections = title.iter().map(|t| Section::new(t)).collect();

    DocAnalysis {
        title,
        sections,
        objects: Vec::new(),
        text: content.to_string(),
    }
}

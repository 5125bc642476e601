//! # sidx - Documentation Search Index Toolkit
//!
//! sidx parses, validates, builds, and writes the static search indexes
//! (`searchindex.js`) that documentation generators ship next to their
//! HTML output to power client-side search without a server round-trip.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - The typed index model, reader, writer, builder, stats
//! - [`validate`] - Referential-consistency checks over a loaded index
//! - [`docs`] - Source document analysis (titles, sections, directives)
//! - [`output`] - Colorized report formatting
//! - [`utils`] - Tokenization, Porter stemming, anchor slugification
//!
//! ## Quick Start
//!
//! ```no_run
//! use sidx::index::load_index;
//! use sidx::validate::validate;
//! use std::path::Path;
//!
//! let index = load_index(Path::new("docs/_build/html/searchindex.js")).unwrap();
//! let report = validate(&index);
//!
//! for diagnostic in &report.diagnostics {
//!     println!("{}: {}", diagnostic.severity, diagnostic.message);
//! }
//! assert!(report.is_ok());
//! ```
//!
//! ## Format
//!
//! The index is a single JSON object wrapped in a `Search.setIndex(...)`
//! JavaScript call. Document ids are positions in the parallel
//! `docnames`/`filenames`/`titles` tables; `terms` and `titleterms` map
//! stemmed words to posting lists (compacted to a bare integer for a
//! single document); `objects`/`objnames`/`objtypes` cross-reference API
//! objects to their defining page and anchor.

pub mod docs;
pub mod index;
pub mod output;
pub mod utils;
pub mod validate;

//! End-to-end tests: build an index from a fixture documentation tree,
//! validate it, and round-trip it through the writer and reader.

use sidx::index::{Postings, build_index, parse_index, to_js_string};
use sidx::validate::validate;
use std::fs;
use std::path::PathBuf;

/// Create an isolated fixture tree with a few documentation sources.
fn create_fixture_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("sidx_test_fixtures")
        .join(format!("{}_{}", tag, std::process::id()));

    // Clean up any existing directory
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("generated")).expect("Failed to create fixture dir");
    fs::create_dir_all(dir.join("_build")).expect("Failed to create fixture dir");

    fs::write(
        dir.join("api.rst"),
        "\
API reference
=============

.. module:: mealpkg

Top-level functions
-------------------

.. py:function:: create_meal_df(n=5, country='italy')

   Return a table of ingredients and meals.
",
    )
    .unwrap();

    fs::write(
        dir.join("generated/mealpkg.reindex.rst"),
        "\
mealpkg.reindex
===============

.. currentmodule:: mealpkg

.. py:function:: reindex(df)

   Drop rows with no matching ingredients.
",
    )
    .unwrap();

    fs::write(
        dir.join("usage.md"),
        "# Usage\n\nInstallation notes and usage examples.\n\n## Installation\n\nRun the installer.\n",
    )
    .unwrap();

    // Anything under _build is generator output, never source.
    fs::write(dir.join("_build/ignored.rst"), "Ignored\n=======\n").unwrap();

    dir
}

#[test]
fn test_build_produces_consistent_index() {
    let dir = create_fixture_dir("consistent");
    let ix = build_index(&dir).unwrap();

    // Documents are ordered by docname; _build is excluded.
    assert_eq!(
        ix.docnames,
        vec!["api", "generated/mealpkg.reindex", "usage"]
    );
    assert_eq!(
        ix.filenames,
        vec!["api.rst", "generated/mealpkg.reindex.rst", "usage.md"]
    );
    assert_eq!(
        ix.titles,
        vec!["API reference", "mealpkg.reindex", "Usage"]
    );

    let report = validate(&ix);
    assert!(report.is_ok(), "{:?}", report.diagnostics);
    assert_eq!(report.warning_count(), 0, "{:?}", report.diagnostics);
}

#[test]
fn test_build_term_and_title_maps() {
    let dir = create_fixture_dir("terms");
    let ix = build_index(&dir).unwrap();

    // Body words are stemmed: "ingredients" -> "ingredi" on both pages
    // that mention them.
    assert_eq!(ix.terms["ingredi"], Postings::Many(vec![0, 1]));
    assert_eq!(ix.terms["instal"], Postings::One(2));

    // Section titles land in alltitles with slug anchors and in
    // titleterms as stems.
    let api_refs = &ix.alltitles["API reference"];
    assert_eq!(api_refs.len(), 1);
    assert_eq!(api_refs[0].doc(), 0);
    assert_eq!(api_refs[0].anchor(), Some("api-reference"));

    assert_eq!(ix.titleterms["usag"], Postings::One(2));
    assert_eq!(ix.titleterms["instal"], Postings::One(2));

    // Markup is not prose: directive names stay out of the term map.
    assert!(!ix.terms.contains_key("py"));
}

#[test]
fn test_build_object_cross_references() {
    let dir = create_fixture_dir("objects");
    let ix = build_index(&dir).unwrap();

    let entries = &ix.objects["mealpkg"];
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name(), "create_meal_df");
    assert_eq!(entries[0].anchor("mealpkg"), "mealpkg.create_meal_df");
    assert_eq!(ix.objtypes["0"], "py:function");
    assert_eq!(ix.objnames["0"].label(), "Python function");

    let entry = &ix.indexentries["reindex() (in module mealpkg)"];
    assert_eq!(entry[0].doc(), 1);
    assert_eq!(entry[0].anchor(), "mealpkg.reindex");
    assert!(!entry[0].is_main());
}

#[test]
fn test_write_then_reparse_is_identity() {
    let dir = create_fixture_dir("roundtrip");
    let ix = build_index(&dir).unwrap();

    let js = to_js_string(&ix).unwrap();
    assert!(js.starts_with("Search.setIndex("));

    let reparsed = parse_index(&js).unwrap();
    assert_eq!(reparsed, ix);
}

#[test]
fn test_parse_real_artifact_shape() {
    // A trimmed-down copy of a real generator artifact, exercising the
    // null-anchor, scalar-posting, and object-tuple forms together.
    let artifact = r#"Search.setIndex({"alltitles": {"API reference": [[0, "api-reference"]], "Contents:": [[1, null]]}, "docnames": ["api", "index"], "envversion": {"sphinx": 61, "sphinx.ext.intersphinx": 1}, "filenames": ["api.rst", "index.rst"], "indexentries": {"empty() (in module pkg)": [[0, "pkg.empty", false]]}, "objects": {"pkg": [[0, 0, 1, "", "empty"]]}, "objnames": {"0": ["py", "function", "Python function"]}, "objtypes": {"0": "py:function"}, "terms": {"18": 1, "datafram": [0, 1]}, "titles": ["API reference", "Welcome"], "titleterms": {"api": 0}})"#;

    let ix = parse_index(artifact).unwrap();
    assert_eq!(ix.doc_count(), 2);
    assert_eq!(ix.alltitles["Contents:"][0].anchor(), None);
    assert_eq!(ix.terms["18"], Postings::One(1));
    assert_eq!(ix.objects["pkg"][0].anchor("pkg"), "pkg.empty");

    let report = validate(&ix);
    assert!(report.is_ok(), "{:?}", report.diagnostics);

    // Re-emitting preserves the compact wrapped form.
    let emitted = to_js_string(&ix).unwrap();
    assert_eq!(parse_index(&emitted).unwrap(), ix);
}

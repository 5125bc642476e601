//! Index-construction benchmarks on a synthetic documentation tree.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{Criterion, criterion_group, criterion_main};
use sidx::index::build_index;
use sidx::utils::{extract_terms, stem};
use std::fs;
use std::path::PathBuf;

const PAGE: &str = "\
Usage notes
===========

.. module:: mealpkg

.. py:function:: create_meal_df(n=5, country='italy')

   Return a table of ingredients and meals. The ingredients are
   selected by country and reindexed against the compatibility table.
   Installation instructions and usage examples follow below.
";

fn synthetic_tree(pages: usize) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("sidx_bench")
        .join(format!("tree_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create bench tree");

    for i in 0..pages {
        fs::write(dir.join(format!("page{i:04}.rst")), PAGE).expect("Failed to write bench page");
    }
    dir
}

fn bench_stemmer(c: &mut Criterion) {
    let words = [
        "installation",
        "compatibility",
        "ingredients",
        "reindexed",
        "create_meal_df",
        "usage",
    ];
    c.bench_function("stem_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(stem(word));
            }
        })
    });
}

fn bench_tokenizer(c: &mut Criterion) {
    let text = PAGE.repeat(50);
    c.bench_function("extract_terms_50_pages", |b| {
        b.iter(|| std::hint::black_box(extract_terms(&text)))
    });
}

fn bench_build(c: &mut Criterion) {
    let tree = synthetic_tree(200);
    c.bench_function("build_index_200_docs", |b| {
        b.iter(|| std::hint::black_box(build_index(&tree).expect("build failed")))
    });
    let _ = fs::remove_dir_all(&tree);
}

criterion_group!(benches, bench_stemmer, bench_tokenizer, bench_build);
criterion_main!(benches);

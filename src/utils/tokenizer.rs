use crate::utils::stemmer::stem;
use rustc_hash::FxHashSet;

/// Maximum word length to index. Longer runs are almost always embedded
/// hashes or base64 blobs, not prose.
const MAX_WORD_LENGTH: usize = 128;

/// English stopwords used by the index generator. Filtering is applied to
/// the *stemmed* form, which is why stems like `thi` (from "this") still
/// land in the index while "the" does not. Must stay sorted for binary
/// search.
const STOPWORDS: &[&str] = &[
    "a", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "near", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
    "these", "they", "this", "to", "was", "will", "with",
];

fn is_stopword(word: &str) -> bool {
    STOPWORDS.binary_search(&word).is_ok()
}

/// Split text into index words: maximal runs of alphanumerics and
/// underscores, so identifiers like `create_meal_df` stay whole.
pub fn extract_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            current.push(ch);
        } else if !current.is_empty() {
            if current.len() <= MAX_WORD_LENGTH {
                words.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if !current.is_empty() && current.len() <= MAX_WORD_LENGTH {
        words.push(current);
    }

    words
}

/// Reduce text to its set of searchable terms: extract words, stem them,
/// drop stopwords.
///
/// A word whose stem is a stopword is kept in its original spelling when
/// that spelling itself passes the filter. This mirrors the generator and
/// is why capitalized forms like `No` and `The` show up in real indexes
/// while their lowercase occurrences do not.
pub fn extract_terms(text: &str) -> FxHashSet<String> {
    let mut terms = FxHashSet::default();
    for word in extract_words(text) {
        let stemmed = stem(&word);
        if !is_stopword(&stemmed) {
            terms.insert(stemmed);
        } else if !is_stopword(&word) {
            terms.insert(word);
        }
    }
    terms
}

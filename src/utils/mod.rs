//! Text-processing utilities shared by the builder and the validator.
//!
//! ## Modules
//!
//! - [`tokenizer`] - Word extraction and stopword filtering
//! - [`stemmer`] - Porter stemming (the generator's English stemmer)
//! - [`slug`] - Section-title anchor slugification
//!
//! ## Key Functions
//!
//! ```
//! use sidx::utils::{extract_terms, slugify, stem};
//!
//! assert_eq!(stem("installation"), "instal");
//! assert_eq!(slugify("API reference"), "api-reference");
//! assert!(extract_terms("pandas compatibility").contains("compat"));
//! ```

pub mod slug;
pub mod stemmer;
pub mod tokenizer;

pub use slug::*;
pub use stemmer::*;
pub use tokenizer::*;

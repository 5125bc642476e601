pub mod build;
pub mod reader;
pub mod stats;
pub mod types;
pub mod writer;

pub use build::build_index;
pub use reader::{load_index, parse_index};
pub use types::*;
pub use writer::{to_js_string, to_json_string, write_js, write_json};

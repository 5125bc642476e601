/// Turn a section title into its anchor fragment: lowercase, alphanumeric
/// runs kept, everything else collapsed to single hyphens.
///
/// `"API reference"` becomes `api-reference`; `"Welcome to proj’s docs!"`
/// becomes `welcome-to-proj-s-docs`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_title() {
        assert_eq!(slugify("API reference"), "api-reference");
        assert_eq!(slugify("Top-level functions"), "top-level-functions");
    }

    #[test]
    fn test_punctuation_collapsed() {
        assert_eq!(
            slugify("Welcome to compat\u{2019}s documentation!"),
            "welcome-to-compat-s-documentation"
        );
        assert_eq!(slugify("Contents:"), "contents");
    }

    #[test]
    fn test_leading_trailing_trimmed() {
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
        assert_eq!(slugify("!!!"), "");
    }
}

//! The knowledge core: question kinds, the in-memory fact store, and the
//! section-based text codec used by load and save.

pub mod codec;
pub mod store;
pub mod types;

/// Case-insensitive token equality, codepoint by codepoint.
///
/// This is the one comparison used everywhere tokens meet: keyword
/// recognition, entity lookup, and section-header matching. No prefix or
/// fuzzy matching, no normalization beyond case folding.
pub fn tokens_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::tokens_match;

    #[test]
    fn case_insensitive_equality() {
        assert!(tokens_match("WHAT", "what"));
        assert!(tokens_match("Sun", "sUN"));
        assert!(tokens_match("", ""));
    }

    #[test]
    fn no_prefix_matching() {
        assert!(!tokens_match("what", "whatever"));
        assert!(!tokens_match("sunset", "sun"));
    }

    #[test]
    fn non_ascii_case_folding() {
        assert!(tokens_match("Åland", "åland"));
        assert!(!tokens_match("Åland", "aland"));
    }
}

//! First-token intent classification.

use crate::knowledge::tokens_match;

/// The fixed set of intents an utterance can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Exit,
    Smalltalk,
    Load,
    Question,
    Reset,
    Save,
    Unrecognized,
}

const EXIT_WORDS: &[&str] = &["exit", "quit"];
const SMALLTALK_WORDS: &[&str] = &["hello", "hi", "bye", "goodbye", "target", "how", "it's"];
const QUESTION_WORDS: &[&str] = &["what", "where", "who"];

fn is_any(token: &str, words: &[&str]) -> bool {
    words.iter().any(|w| tokens_match(token, w))
}

/// Map the first token of an utterance to an intent.
///
/// Categories are consulted in a fixed priority order; the first match wins.
pub fn classify(token: &str) -> Intent {
    if is_any(token, EXIT_WORDS) {
        Intent::Exit
    } else if is_any(token, SMALLTALK_WORDS) {
        Intent::Smalltalk
    } else if tokens_match(token, "load") {
        Intent::Load
    } else if is_any(token, QUESTION_WORDS) {
        Intent::Question
    } else if tokens_match(token, "reset") {
        Intent::Reset
    } else if tokens_match(token, "save") {
        Intent::Save
    } else {
        Intent::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_their_intent() {
        assert_eq!(classify("exit"), Intent::Exit);
        assert_eq!(classify("quit"), Intent::Exit);
        assert_eq!(classify("hello"), Intent::Smalltalk);
        assert_eq!(classify("it's"), Intent::Smalltalk);
        assert_eq!(classify("load"), Intent::Load);
        assert_eq!(classify("what"), Intent::Question);
        assert_eq!(classify("where"), Intent::Question);
        assert_eq!(classify("who"), Intent::Question);
        assert_eq!(classify("reset"), Intent::Reset);
        assert_eq!(classify("save"), Intent::Save);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("EXIT"), Intent::Exit);
        assert_eq!(classify("What"), Intent::Question);
        assert_eq!(classify("GoodBye"), Intent::Smalltalk);
    }

    #[test]
    fn anything_else_is_unrecognized() {
        assert_eq!(classify("when"), Intent::Unrecognized);
        assert_eq!(classify("loadfile"), Intent::Unrecognized);
        assert_eq!(classify(""), Intent::Unrecognized);
    }
}

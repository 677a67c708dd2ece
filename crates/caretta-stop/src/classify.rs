//! Character classification for caret-stop detection.
//!
//! Word runs are defined by classes, not by a dictionary: a **word**
//! character is a letter, digit, or underscore; **whitespace** is any blank
//! character (the source is a flat sequence, so line endings are ordinary
//! whitespace here); everything else — operators, brackets, punctuation — is
//! **other**. A stop mode only ever asks "is this side of the offset inside
//! a word run?", so the three-way split is the whole vocabulary.
//!
//! [`classify_coarse`] collapses the distinction between word and other:
//! only whitespace separates runs. That is the whitespace-delimited flavor
//! of navigation (Vim's WORD as opposed to word).
//!
//! Classification applies to a cluster's base character; trailing combining
//! marks never shift a cluster's class.

/// Character class for caret-stop detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Blank characters (space, tab, line endings, other Unicode whitespace).
    Whitespace,
    /// Letters, digits, underscore.
    Word,
    /// Non-blank, non-word characters (operators, brackets, punctuation).
    Other,
}

impl CharClass {
    /// True for [`CharClass::Word`].
    #[inline]
    #[must_use]
    pub const fn is_word(self) -> bool {
        matches!(self, Self::Word)
    }
}

/// Classify a character for word-run detection.
#[must_use]
pub fn classify(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_alphanumeric() || ch == '_' {
        CharClass::Word
    } else {
        CharClass::Other
    }
}

/// Classify a character for whitespace-delimited runs.
/// Only blank vs non-blank matters — all non-blank chars are one class.
#[must_use]
pub fn classify_coarse(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Word
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_word_chars() {
        assert_eq!(classify('a'), CharClass::Word);
        assert_eq!(classify('Z'), CharClass::Word);
        assert_eq!(classify('0'), CharClass::Word);
        assert_eq!(classify('9'), CharClass::Word);
        assert_eq!(classify('_'), CharClass::Word);
    }

    #[test]
    fn classify_whitespace_chars() {
        assert_eq!(classify(' '), CharClass::Whitespace);
        assert_eq!(classify('\t'), CharClass::Whitespace);
        assert_eq!(classify('\n'), CharClass::Whitespace);
        assert_eq!(classify('\u{00A0}'), CharClass::Whitespace); // NBSP
    }

    #[test]
    fn classify_other_chars() {
        assert_eq!(classify('.'), CharClass::Other);
        assert_eq!(classify(','), CharClass::Other);
        assert_eq!(classify('!'), CharClass::Other);
        assert_eq!(classify('+'), CharClass::Other);
        assert_eq!(classify('='), CharClass::Other);
        assert_eq!(classify('('), CharClass::Other);
    }

    #[test]
    fn classify_unicode_letters_are_word() {
        assert_eq!(classify('é'), CharClass::Word);
        assert_eq!(classify('ñ'), CharClass::Word);
        assert_eq!(classify('中'), CharClass::Word);
        assert_eq!(classify('ü'), CharClass::Word);
    }

    #[test]
    fn classify_supplementary_plane() {
        // Mathematical letters are letters; emoji are symbols.
        assert_eq!(classify('𝕏'), CharClass::Word);
        assert_eq!(classify('😀'), CharClass::Other);
    }

    #[test]
    fn classify_coarse_merges_other_into_word() {
        assert_eq!(classify_coarse('.'), CharClass::Word);
        assert_eq!(classify_coarse('!'), CharClass::Word);
        assert_eq!(classify_coarse('a'), CharClass::Word);
        assert_eq!(classify_coarse(' '), CharClass::Whitespace);
        assert_eq!(classify_coarse('\n'), CharClass::Whitespace);
    }

    #[test]
    fn is_word_helper() {
        assert!(CharClass::Word.is_word());
        assert!(!CharClass::Whitespace.is_word());
        assert!(!CharClass::Other.is_word());
    }
}

//! Character sources — read-only indexed access to a text sequence.
//!
//! A [`CharSource`] is the only thing the caret-stop locator knows about a
//! document: a finite length and the character starting at each index. The
//! index unit depends on the adapter — one Unicode scalar for char-based
//! sources, one `u16` code unit for [`Utf16Source`] — and every offset the
//! locator produces is in the source's own units.
//!
//! # Design choices
//!
//! - **ropey adapters are first-class.** Our buffer layer stores text in a
//!   [`ropey::Rope`]; a locator that could only read flat slices would force
//!   an O(n) copy on every keystroke-driven query. `Rope` and `RopeSlice`
//!   implement `CharSource` directly via `len_chars`/`char`.
//!
//! - **UTF-16 is decoded at the seam.** [`Utf16Source`] resolves surrogate
//!   pairs itself, so the locator upstairs can step whole characters without
//!   knowing the encoding. An unpaired surrogate decodes as `U+FFFD` and
//!   occupies one unit — a standalone character, never an error, so every
//!   scan terminates with a defined answer.
//!
//! - **Out-of-bounds reads are a caller bug.** `char_at` panics past the end
//!   like `ropey::Rope::char` and slice indexing do. The locator clamps every
//!   offset before reading.

use ropey::{Rope, RopeSlice};

/// A read-only, indexed character sequence of known finite length.
///
/// Indices range over `[0, len)` and count *index units*: chars for the
/// slice and rope adapters, `u16` code units for [`Utf16Source`]. The width
/// methods describe how many units one encoded character occupies; adapters
/// whose unit is a whole scalar keep the defaults.
pub trait CharSource {
    /// Number of index units in the source.
    fn len(&self) -> usize;

    /// True when the source holds no text.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The character starting at `index` (for multi-unit encodings, the
    /// fully decoded character — never half of one).
    ///
    /// # Panics
    ///
    /// May panic if `index >= self.len()`.
    fn char_at(&self, index: usize) -> char;

    /// Units occupied by the encoded character starting at `index`.
    #[inline]
    fn width_at(&self, _index: usize) -> usize {
        1
    }

    /// Units occupied by the encoded character ending at `index`.
    ///
    /// `index` must be an encoded-character boundary greater than zero.
    #[inline]
    fn width_before(&self, _index: usize) -> usize {
        1
    }

    /// Start of the encoded character containing `index` (identity when
    /// `index` is already a boundary).
    #[inline]
    fn floor_char(&self, index: usize) -> usize {
        index
    }
}

// ---------------------------------------------------------------------------
// Char-unit adapters
// ---------------------------------------------------------------------------

impl CharSource for [char] {
    #[inline]
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        self[index]
    }
}

impl CharSource for Vec<char> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        self[index]
    }
}

impl CharSource for Rope {
    #[inline]
    fn len(&self) -> usize {
        self.len_chars()
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        self.char(index)
    }
}

impl CharSource for RopeSlice<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.len_chars()
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        self.char(index)
    }
}

// ---------------------------------------------------------------------------
// UTF-16 adapter
// ---------------------------------------------------------------------------

/// A character source over UTF-16 code units.
///
/// Offsets count `u16` units, so a supplementary-plane character occupies
/// two. A lone high or low surrogate is treated as a standalone one-unit
/// character that decodes as `U+FFFD` — malformed input degrades to a
/// defined answer instead of a failure.
#[derive(Debug, Clone, Copy)]
pub struct Utf16Source<'a> {
    units: &'a [u16],
}

impl<'a> Utf16Source<'a> {
    /// Wrap a slice of UTF-16 code units.
    #[must_use]
    pub const fn new(units: &'a [u16]) -> Self {
        Self { units }
    }

    /// The underlying code units.
    #[must_use]
    pub const fn units(&self) -> &'a [u16] {
        self.units
    }
}

const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Decode a valid surrogate pair into its supplementary-plane character.
fn decode_pair(high: u16, low: u16) -> char {
    let scalar =
        0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl CharSource for Utf16Source<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.units.len()
    }

    fn char_at(&self, index: usize) -> char {
        let unit = self.units[index];
        if is_high_surrogate(unit) {
            if let Some(&low) = self.units.get(index + 1) {
                if is_low_surrogate(low) {
                    return decode_pair(unit, low);
                }
            }
            return char::REPLACEMENT_CHARACTER;
        }
        if is_low_surrogate(unit) {
            // Unpaired low surrogate — standalone.
            return char::REPLACEMENT_CHARACTER;
        }
        char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn width_at(&self, index: usize) -> usize {
        if is_high_surrogate(self.units[index])
            && self.units.get(index + 1).copied().is_some_and(is_low_surrogate)
        {
            2
        } else {
            1
        }
    }

    fn width_before(&self, index: usize) -> usize {
        if index >= 2
            && is_low_surrogate(self.units[index - 1])
            && is_high_surrogate(self.units[index - 2])
        {
            2
        } else {
            1
        }
    }

    fn floor_char(&self, index: usize) -> usize {
        if index > 0
            && index < self.units.len()
            && is_low_surrogate(self.units[index])
            && is_high_surrogate(self.units[index - 1])
        {
            index - 1
        } else {
            index
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // -- Char-unit adapters --------------------------------------------------

    #[test]
    fn slice_length_and_access() {
        let text = chars("word");
        let src: &[char] = &text;
        assert_eq!(src.len(), 4);
        assert!(!src.is_empty());
        assert_eq!(src.char_at(0), 'w');
        assert_eq!(src.char_at(3), 'd');
    }

    #[test]
    fn vec_delegates_to_slice() {
        let text = chars("hi");
        assert_eq!(CharSource::len(&text), 2);
        assert_eq!(text.char_at(1), 'i');
    }

    #[test]
    fn empty_slice() {
        let text: Vec<char> = Vec::new();
        assert_eq!(CharSource::len(&text), 0);
        assert!(CharSource::is_empty(&text));
    }

    #[test]
    fn char_units_have_unit_widths() {
        let text = chars("aé中");
        let src: &[char] = &text;
        assert_eq!(src.width_at(0), 1);
        assert_eq!(src.width_at(2), 1);
        assert_eq!(src.width_before(1), 1);
        assert_eq!(src.floor_char(2), 2);
    }

    #[test]
    fn rope_counts_chars_not_bytes() {
        let rope = Rope::from_str("café");
        assert_eq!(CharSource::len(&rope), 4);
        assert_eq!(rope.char_at(3), 'é');
    }

    #[test]
    fn rope_slice_adapter() {
        let rope = Rope::from_str("hello world");
        let slice = rope.slice(6..);
        assert_eq!(CharSource::len(&slice), 5);
        assert_eq!(slice.char_at(0), 'w');
    }

    // -- UTF-16 decoding -----------------------------------------------------

    #[test]
    fn utf16_bmp_characters() {
        // "ab" — plain BMP text, one unit each.
        let units = [0x0061, 0x0062];
        let src = Utf16Source::new(&units);
        assert_eq!(src.len(), 2);
        assert_eq!(src.char_at(0), 'a');
        assert_eq!(src.char_at(1), 'b');
        assert_eq!(src.width_at(0), 1);
    }

    #[test]
    fn utf16_surrogate_pair_decodes_as_one_character() {
        // "a𝕏b" — U+1D54F encodes as the pair D835 DD4F.
        let units = [0x0061, 0xD835, 0xDD4F, 0x0062];
        let src = Utf16Source::new(&units);
        assert_eq!(src.len(), 4);
        assert_eq!(src.char_at(1), '𝕏');
        assert_eq!(src.width_at(1), 2);
        assert_eq!(src.width_before(3), 2);
        assert_eq!(src.char_at(3), 'b');
    }

    #[test]
    fn utf16_floor_char_resolves_mid_pair() {
        let units = [0x0061, 0xD835, 0xDD4F, 0x0062];
        let src = Utf16Source::new(&units);
        assert_eq!(src.floor_char(2), 1); // low unit → start of pair
        assert_eq!(src.floor_char(1), 1);
        assert_eq!(src.floor_char(3), 3);
    }

    #[test]
    fn utf16_unpaired_high_surrogate_is_standalone() {
        let units = [0x0061, 0xD800, 0x0062];
        let src = Utf16Source::new(&units);
        assert_eq!(src.char_at(1), char::REPLACEMENT_CHARACTER);
        assert_eq!(src.width_at(1), 1);
        assert_eq!(src.width_before(2), 1);
    }

    #[test]
    fn utf16_unpaired_low_surrogate_is_standalone() {
        let units = [0xDC00, 0x0061];
        let src = Utf16Source::new(&units);
        assert_eq!(src.char_at(0), char::REPLACEMENT_CHARACTER);
        assert_eq!(src.width_at(0), 1);
        // Not preceded by a high surrogate, so nothing to floor to.
        assert_eq!(src.floor_char(0), 0);
    }

    #[test]
    fn utf16_trailing_high_surrogate() {
        // High surrogate at the very end has no partner to absorb.
        let units = [0x0061, 0xD835];
        let src = Utf16Source::new(&units);
        assert_eq!(src.char_at(1), char::REPLACEMENT_CHARACTER);
        assert_eq!(src.width_at(1), 1);
    }

    #[test]
    fn utf16_emoji_pair() {
        // 😀 U+1F600 → D83D DE00.
        let units = [0xD83D, 0xDE00];
        let src = Utf16Source::new(&units);
        assert_eq!(src.char_at(0), '😀');
        assert_eq!(src.width_at(0), 2);
    }
}

//! The caret-stop locator.
//!
//! Given a character source, an offset, and a [`StopMode`], find the next or
//! previous offset the caret may rest at:
//!
//! | Mode | Stops at |
//! |------|----------|
//! | [`StopMode::Character`] | every logical-character boundary |
//! | [`StopMode::WordStart`] | the first character of each word run |
//! | [`StopMode::WordBorder`] | both edges of each word run |
//!
//! # Offsets
//!
//! Input offsets are signed. A caret that drifted outside the document (say,
//! after an external edit) is clamped — anything below 0 scans forward from
//! the very start, anything past the end scans backward from the very end —
//! so repeated navigation commands always get a sane answer. Results are
//! `Some(offset)` in `[0, len]`, or `None` once no stop remains in the
//! requested direction. `None` is a normal terminal condition (word-left at
//! the start of a document), not an error.
//!
//! # Word runs
//!
//! A word run is a maximal span of [`CharClass::Word`] characters. The two
//! word modes only ever compare word-ness on each side of a candidate
//! offset, with the document edge counting as non-word: `WordStart` wants a
//! word after and none before, `WordBorder` wants the two sides to disagree.
//! A seam between whitespace and punctuation borders no word run and is not
//! a stop.
//!
//! # Logical characters
//!
//! Candidates advance cluster-by-cluster via [`caretta_text::cluster`], so
//! no mode ever yields an offset inside a surrogate pair or a
//! base+combining-mark cluster, and word-ness is always judged on a
//! cluster's base character.
//!
//! Each query is one bounded scan: O(len) worst case, O(1) auxiliary state,
//! nothing retained across calls.

use caretta_text::cluster::{floor_boundary, next_boundary, prev_boundary};
use caretta_text::source::CharSource;

use crate::classify::{CharClass, classify};

/// Positioning mode — which offsets qualify as caret stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopMode {
    /// Every logical-character boundary is a stop.
    Character,
    /// Only the first character of a word run is a stop.
    WordStart,
    /// Any offset where word-ness changes is a stop, including document
    /// edges adjacent to a word run.
    WordBorder,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// The next caret stop strictly after `offset`, or `None` if no stop
/// remains toward the end of the document.
#[must_use]
pub fn next_stop<S: CharSource + ?Sized>(
    src: &S,
    offset: isize,
    mode: StopMode,
) -> Option<usize> {
    next_stop_with(src, offset, mode, classify)
}

/// The previous caret stop strictly before `offset`, or `None` if no stop
/// remains toward the start of the document.
#[must_use]
pub fn prev_stop<S: CharSource + ?Sized>(
    src: &S,
    offset: isize,
    mode: StopMode,
) -> Option<usize> {
    prev_stop_with(src, offset, mode, classify)
}

/// The single dispatching entry point: the next stop in the requested
/// direction from `offset`, or `None` on exhaustion.
#[must_use]
pub fn caret_stop<S: CharSource + ?Sized>(
    src: &S,
    offset: isize,
    backward: bool,
    mode: StopMode,
) -> Option<usize> {
    if backward {
        prev_stop(src, offset, mode)
    } else {
        next_stop(src, offset, mode)
    }
}

/// [`next_stop`] with a caller-chosen classification table.
///
/// Pass [`crate::classify::classify_coarse`] for whitespace-delimited runs,
/// or any other `fn(char) -> CharClass`.
#[must_use]
pub fn next_stop_with<S: CharSource + ?Sized>(
    src: &S,
    offset: isize,
    mode: StopMode,
    classify_fn: fn(char) -> CharClass,
) -> Option<usize> {
    let len = src.len();
    let mut cand = match usize::try_from(offset) {
        // Below the document — scan from the very first boundary.
        Err(_) => 0,
        // At or past the end — nothing lies strictly ahead.
        Ok(o) if o >= len => return None,
        // The first boundary strictly after the (cluster-snapped) offset.
        Ok(o) => next_boundary(src, floor_boundary(src, o)),
    };
    loop {
        if qualifies(src, cand, mode, classify_fn) {
            return Some(cand);
        }
        if cand >= len {
            return None;
        }
        cand = next_boundary(src, cand);
    }
}

/// [`prev_stop`] with a caller-chosen classification table.
#[must_use]
pub fn prev_stop_with<S: CharSource + ?Sized>(
    src: &S,
    offset: isize,
    mode: StopMode,
    classify_fn: fn(char) -> CharClass,
) -> Option<usize> {
    let len = src.len();
    // At or below the document start — nothing lies strictly behind.
    let Ok(offset) = usize::try_from(offset) else {
        return None;
    };
    if offset == 0 {
        return None;
    }
    let mut cand = if offset > len {
        len
    } else {
        let floor = floor_boundary(src, offset);
        if floor < offset {
            // Mid-cluster input — the cluster start is already strictly before.
            floor
        } else {
            prev_boundary(src, floor)
        }
    };
    loop {
        if qualifies(src, cand, mode, classify_fn) {
            return Some(cand);
        }
        if cand == 0 {
            return None;
        }
        cand = prev_boundary(src, cand);
    }
}

/// True when `offset` is a valid caret stop for `mode`.
///
/// An offset inside a cluster, or past the end of the document, is never a
/// stop.
#[must_use]
pub fn is_stop<S: CharSource + ?Sized>(src: &S, offset: usize, mode: StopMode) -> bool {
    offset <= src.len()
        && floor_boundary(src, offset) == offset
        && qualifies(src, offset, mode, classify)
}

/// Iterate over every caret stop of `src` for `mode`, front to back.
#[must_use]
pub fn stops<S: CharSource + ?Sized>(src: &S, mode: StopMode) -> CaretStops<'_, S> {
    CaretStops {
        src,
        mode,
        pos: -1,
    }
}

/// Iterator over the caret stops of a source. See [`stops`].
#[derive(Debug)]
pub struct CaretStops<'a, S: ?Sized> {
    src: &'a S,
    mode: StopMode,
    /// Offset the last yielded stop was found from; starts just before the
    /// document.
    pos: isize,
}

impl<S: CharSource + ?Sized> Iterator for CaretStops<'_, S> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let stop = next_stop(self.src, self.pos, self.mode)?;
        self.pos = isize::try_from(stop).unwrap_or(isize::MAX);
        Some(stop)
    }
}

// Exhaustion is stable: once `next_stop` answers `None` from a boundary it
// answers `None` from that boundary forever.
impl<S: CharSource + ?Sized> std::iter::FusedIterator for CaretStops<'_, S> {}

// ---------------------------------------------------------------------------
// Qualification
// ---------------------------------------------------------------------------

/// Does a cluster boundary qualify as a stop under `mode`?
fn qualifies<S: CharSource + ?Sized>(
    src: &S,
    offset: usize,
    mode: StopMode,
    classify_fn: fn(char) -> CharClass,
) -> bool {
    match mode {
        StopMode::Character => true,
        StopMode::WordStart => {
            word_after(src, offset, classify_fn) && !word_before(src, offset, classify_fn)
        }
        StopMode::WordBorder => {
            word_after(src, offset, classify_fn) != word_before(src, offset, classify_fn)
        }
    }
}

/// Word-ness of the character starting at `offset`; the end edge is non-word.
fn word_after<S: CharSource + ?Sized>(
    src: &S,
    offset: usize,
    classify_fn: fn(char) -> CharClass,
) -> bool {
    offset < src.len() && classify_fn(src.char_at(offset)).is_word()
}

/// Word-ness of the cluster ending at `offset`; the start edge is non-word.
fn word_before<S: CharSource + ?Sized>(
    src: &S,
    offset: usize,
    classify_fn: fn(char) -> CharClass,
) -> bool {
    offset > 0 && classify_fn(src.char_at(prev_boundary(src, offset))).is_word()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

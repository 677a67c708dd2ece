//! # caretta-text — character sources for caretta
//!
//! The read-only text seam the caret-stop locator scans:
//!
//! - **[`source`]** — the `CharSource` trait (indexed character access and a
//!   known finite length) with adapters for char slices, [`ropey`] ropes,
//!   and UTF-16 code-unit slices
//! - **[`cluster`]** — logical-character stepping that never splits a
//!   surrogate pair or a base+combining-mark cluster
//!
//! A source is borrowed for the duration of one query and never mutated.
//! Editing, undo history, and rendering all live with the caller.

pub mod cluster;
pub mod source;

//! # caretta-stop — caret-stop location
//!
//! Where may the caret rest? Given a read-only character source and an
//! offset, this crate computes the next or previous valid caret stop under a
//! positioning mode:
//!
//! - **[`classify`]** — three-way character classification (whitespace /
//!   word / other) and the coarse whitespace-only variant
//! - **[`stop`]** — the locator: `StopMode`, forward/backward queries, the
//!   single dispatching entry point, and an iterator over all stops
//!
//! Every query is a self-contained bounded scan over a borrowed
//! [`caretta_text::source::CharSource`] — no state survives a call, no I/O
//! happens, and exhaustion is an ordinary `None`, not an error.
//!
//! ```
//! use caretta_stop::stop::{next_stop, StopMode};
//!
//! let text: Vec<char> = " word".chars().collect();
//! assert_eq!(next_stop(&text, -1, StopMode::Character), Some(0));
//! assert_eq!(next_stop(&text, -1, StopMode::WordStart), Some(1));
//! ```

pub mod classify;
pub mod stop;

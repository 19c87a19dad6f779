//! `sortvis-engine` — sorting algorithms as resumable state machines.
//!
//! This crate is `#![no_std]` and never allocates. It provides:
//! - the [`SortStrategy`] contract: `reset`, `step`, `active_index`,
//!   `is_sorted`, `name`
//! - six variants: [`Bubble`], [`Insertion`], [`Selection`], [`Gnome`],
//!   [`Bogo`], [`Miracle`]
//! - [`Algorithm`] / [`AnySorter`] / [`Roster`] for choosing a variant by
//!   name or index
//! - [`Session`], a strategy bound to a borrowed key buffer
//!
//! Every `step` performs one bounded unit of work and returns immediately,
//! so a caller can pace progress at any cadence (e.g. once per frame).

#![no_std]

use core::fmt;

/// Index reported by [`SortStrategy::active_index`] when no element is of
/// interest (empty sequence, cursor parked outside the sequence, Bogo, Miracle).
pub const ACTIVE_SENTINEL: usize = 0;

mod strategy;
pub use strategy::{is_ascending, SortStrategy};

mod bubble;
pub use bubble::Bubble;

mod insertion;
pub use insertion::Insertion;

mod selection;
pub use selection::Selection;

mod gnome;
pub use gnome::Gnome;

mod bogo;
pub use bogo::Bogo;

mod miracle;
pub use miracle::Miracle;

mod catalog;
pub use catalog::{Algorithm, AnySorter, ParseAlgorithmError, Roster};

mod session;
pub use session::Session;

/// Contract violations — the caller used a strategy outside its lifecycle.
///
/// These are programming errors in the driver, not runtime conditions.
/// They are reported instead of touching stale or missing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// `step`, `active_index` or `is_sorted` called before any `reset`.
    Unbound,
    /// The keys passed in differ in length from the keys last bound by `reset`.
    LengthMismatch { bound: usize, given: usize },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::Unbound => f.write_str("strategy used before reset"),
            SortError::LengthMismatch { bound, given } => write!(
                f,
                "strategy bound to {bound} keys but was given {given}"
            ),
        }
    }
}

impl core::error::Error for SortError {}

/// Result type for strategy operations — `Result<T, SortError>`.
pub type SortResult<T> = Result<T, SortError>;

/// The single primitive operation performed by one call to
/// [`SortStrategy::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Two keys compared, nothing moved.
    Compare { left: usize, right: usize },
    /// Two keys compared and exchanged (Selection: the end-of-scan exchange).
    Swap { left: usize, right: usize },
    /// One key copied one slot to the right (Insertion).
    Shift { from: usize, to: usize },
    /// A key lifted out of the sequence to be inserted (Insertion).
    Capture { at: usize },
    /// The lifted key written back (Insertion).
    Place { at: usize },
    /// Pass or cursor bookkeeping, no key touched.
    Advance,
    /// A full random permutation of the sequence (Bogo).
    Shuffle,
    /// Nothing to do: already complete, or the variant never works.
    Idle,
}

impl Step {
    /// Whether this step may have written to the key buffer.
    pub fn mutates(self) -> bool {
        matches!(
            self,
            Step::Swap { .. } | Step::Shift { .. } | Step::Place { .. } | Step::Shuffle
        )
    }
}

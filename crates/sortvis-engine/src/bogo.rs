//! Bogo sort: shuffle the whole sequence until it happens to be ordered.
//!
//! Its primitive step is a complete Fisher–Yates shuffle, and completion is a
//! full scan of the keys. No progress state exists besides the generator.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::strategy::{is_ascending, Binding};
use crate::{SortResult, SortStrategy, Step, ACTIVE_SENTINEL};

/// Bogo sort over generator `R` (seedable xoshiro by default).
#[derive(Debug, Clone)]
pub struct Bogo<R = Xoshiro256PlusPlus> {
    binding: Binding,
    rng: R,
}

impl Bogo {
    /// Deterministic shuffles from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<R: Rng> Bogo<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            binding: Binding::unbound(),
            rng,
        }
    }

    fn shuffle(&mut self, keys: &mut [i32]) {
        for i in (1..keys.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            keys.swap(i, j);
        }
    }
}

impl<R: Rng> SortStrategy for Bogo<R> {
    fn name(&self) -> &'static str {
        "Bogo"
    }

    fn reset(&mut self, keys: &[i32]) {
        self.binding.bind(keys);
    }

    fn step(&mut self, keys: &mut [i32]) -> SortResult<Step> {
        self.binding.check(keys)?;
        if is_ascending(keys) {
            return Ok(Step::Idle);
        }
        self.shuffle(keys);
        Ok(Step::Shuffle)
    }

    fn active_index(&self) -> SortResult<usize> {
        self.binding.len()?;
        Ok(ACTIVE_SENTINEL)
    }

    fn is_sorted(&self, keys: &[i32]) -> SortResult<bool> {
        self.binding.check(keys)?;
        Ok(is_ascending(keys))
    }
}

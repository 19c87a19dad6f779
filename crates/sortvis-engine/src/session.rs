//! A strategy bound to a borrowed key buffer.
//!
//! `Session` is the argument-free form of the contract: binding resets the
//! strategy against the keys, and both stay mutably borrowed until the
//! session is dropped. A new binding, and therefore a new `reset`, is the
//! only way to hand the strategy different keys.

use crate::{SortResult, SortStrategy, Step};

pub struct Session<'a, S: SortStrategy + ?Sized> {
    strategy: &'a mut S,
    keys: &'a mut [i32],
}

impl<'a, S: SortStrategy + ?Sized> Session<'a, S> {
    /// Reset `strategy` against `keys` and hold both.
    pub fn bind(strategy: &'a mut S, keys: &'a mut [i32]) -> Self {
        strategy.reset(keys);
        Self { strategy, keys }
    }

    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn step(&mut self) -> SortResult<Step> {
        self.strategy.step(&mut *self.keys)
    }

    pub fn active_index(&self) -> SortResult<usize> {
        self.strategy.active_index()
    }

    pub fn is_sorted(&self) -> SortResult<bool> {
        self.strategy.is_sorted(&*self.keys)
    }

    /// Read-only view of the keys, for rendering between steps.
    pub fn keys(&self) -> &[i32] {
        &*self.keys
    }

    /// Step until complete or until `budget` steps were spent; returns the
    /// number of steps performed.
    pub fn run(&mut self, budget: usize) -> SortResult<usize> {
        let mut steps = 0;
        while steps < budget && !self.is_sorted()? {
            self.step()?;
            steps += 1;
        }
        Ok(steps)
    }
}

//! Miracle sort: waits for the keys to sort themselves.
//!
//! `step` never touches the keys and `is_sorted` reports completion as soon
//! as the strategy is bound, whatever the actual order. Callers must not read
//! "sorted" as "ordered" for this variant.

use crate::strategy::Binding;
use crate::{SortResult, SortStrategy, Step, ACTIVE_SENTINEL};

#[derive(Debug, Clone, Default)]
pub struct Miracle {
    binding: Binding,
}

impl Miracle {
    pub const fn new() -> Self {
        Self {
            binding: Binding::unbound(),
        }
    }
}

impl SortStrategy for Miracle {
    fn name(&self) -> &'static str {
        "Miracle"
    }

    fn reset(&mut self, keys: &[i32]) {
        self.binding.bind(keys);
    }

    fn step(&mut self, keys: &mut [i32]) -> SortResult<Step> {
        self.binding.check(keys)?;
        Ok(Step::Idle)
    }

    fn active_index(&self) -> SortResult<usize> {
        self.binding.len()?;
        Ok(ACTIVE_SENTINEL)
    }

    fn is_sorted(&self, keys: &[i32]) -> SortResult<bool> {
        self.binding.check(keys)?;
        Ok(true)
    }
}

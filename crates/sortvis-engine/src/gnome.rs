//! Gnome sort: a single cursor that walks forward over ordered pairs and
//! steps back after each swap.

use crate::strategy::{highlight, Binding};
use crate::{SortResult, SortStrategy, Step};

#[derive(Debug, Clone)]
pub struct Gnome {
    binding: Binding,
    cursor: usize,
}

impl Gnome {
    pub const fn new() -> Self {
        Self {
            binding: Binding::unbound(),
            cursor: 1,
        }
    }
}

impl Default for Gnome {
    fn default() -> Self {
        Self::new()
    }
}

impl SortStrategy for Gnome {
    fn name(&self) -> &'static str {
        "Gnome"
    }

    fn reset(&mut self, keys: &[i32]) {
        self.binding.bind(keys);
        self.cursor = 1;
    }

    fn step(&mut self, keys: &mut [i32]) -> SortResult<Step> {
        let len = self.binding.check(keys)?;
        if self.cursor >= len {
            return Ok(Step::Idle);
        }
        // Walked back to the front: bounce without comparing.
        if self.cursor == 0 {
            self.cursor = 1;
            return Ok(Step::Advance);
        }
        let (left, right) = (self.cursor - 1, self.cursor);
        if keys[right] >= keys[left] {
            self.cursor += 1;
            Ok(Step::Compare { left, right })
        } else {
            keys.swap(left, right);
            self.cursor -= 1;
            Ok(Step::Swap { left, right })
        }
    }

    fn active_index(&self) -> SortResult<usize> {
        Ok(highlight(self.cursor, self.binding.len()?))
    }

    fn is_sorted(&self, keys: &[i32]) -> SortResult<bool> {
        Ok(self.cursor >= self.binding.check(keys)?)
    }
}

//! Bubble sort, one comparison per step.
//!
//! `pass` counts completed passes (each parks the largest remaining key at
//! the end); `cursor` is the left side of the next comparison. Reaching the
//! unsorted boundary costs one extra `Advance` step that starts a new pass.

use crate::strategy::{highlight, Binding};
use crate::{SortResult, SortStrategy, Step};

#[derive(Debug, Clone, Default)]
pub struct Bubble {
    binding: Binding,
    pass: usize,
    cursor: usize,
}

impl Bubble {
    pub const fn new() -> Self {
        Self {
            binding: Binding::unbound(),
            pass: 0,
            cursor: 0,
        }
    }

    #[inline]
    fn done(&self, len: usize) -> bool {
        self.pass + 1 >= len
    }
}

impl SortStrategy for Bubble {
    fn name(&self) -> &'static str {
        "Bubble"
    }

    fn reset(&mut self, keys: &[i32]) {
        self.binding.bind(keys);
        self.pass = 0;
        self.cursor = 0;
    }

    fn step(&mut self, keys: &mut [i32]) -> SortResult<Step> {
        let len = self.binding.check(keys)?;
        if self.done(len) {
            return Ok(Step::Idle);
        }
        // Unsorted boundary is `len - pass - 1`; `done` guarantees it is >= 1.
        if self.cursor + self.pass + 1 < len {
            let (left, right) = (self.cursor, self.cursor + 1);
            self.cursor += 1;
            if keys[left] > keys[right] {
                keys.swap(left, right);
                Ok(Step::Swap { left, right })
            } else {
                Ok(Step::Compare { left, right })
            }
        } else {
            self.cursor = 0;
            self.pass += 1;
            Ok(Step::Advance)
        }
    }

    fn active_index(&self) -> SortResult<usize> {
        Ok(highlight(self.cursor, self.binding.len()?))
    }

    fn is_sorted(&self, keys: &[i32]) -> SortResult<bool> {
        Ok(self.done(self.binding.check(keys)?))
    }
}

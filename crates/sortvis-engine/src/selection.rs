//! Selection sort: one comparison per step while scanning for the minimum,
//! then one exchange step that extends the sorted prefix.

use crate::strategy::{highlight, Binding};
use crate::{SortResult, SortStrategy, Step};

#[derive(Debug, Clone)]
pub struct Selection {
    binding: Binding,
    /// Length of the sorted prefix.
    boundary: usize,
    scan: usize,
    min_index: usize,
}

impl Selection {
    pub const fn new() -> Self {
        Self {
            binding: Binding::unbound(),
            boundary: 0,
            scan: 1,
            min_index: 0,
        }
    }

    #[inline]
    fn done(&self, len: usize) -> bool {
        self.boundary + 1 >= len
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl SortStrategy for Selection {
    fn name(&self) -> &'static str {
        "Selection"
    }

    fn reset(&mut self, keys: &[i32]) {
        self.binding.bind(keys);
        self.boundary = 0;
        self.scan = 1;
        self.min_index = 0;
    }

    fn step(&mut self, keys: &mut [i32]) -> SortResult<Step> {
        let len = self.binding.check(keys)?;
        if self.done(len) {
            return Ok(Step::Idle);
        }
        if self.scan < len {
            let step = Step::Compare {
                left: self.min_index,
                right: self.scan,
            };
            if keys[self.scan] < keys[self.min_index] {
                self.min_index = self.scan;
            }
            self.scan += 1;
            Ok(step)
        } else {
            let (left, right) = (self.boundary, self.min_index);
            keys.swap(left, right);
            self.boundary += 1;
            self.min_index = self.boundary;
            self.scan = self.boundary + 1;
            Ok(Step::Swap { left, right })
        }
    }

    fn active_index(&self) -> SortResult<usize> {
        Ok(highlight(self.boundary, self.binding.len()?))
    }

    fn is_sorted(&self, keys: &[i32]) -> SortResult<bool> {
        Ok(self.done(self.binding.check(keys)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_then_exchange() {
        let mut keys = [3, 1, 2];
        let mut selection = Selection::new();
        selection.reset(&keys);

        assert_eq!(
            selection.step(&mut keys),
            Ok(Step::Compare { left: 0, right: 1 })
        );
        // Minimum moved to index 1, so the next comparison is against it.
        assert_eq!(
            selection.step(&mut keys),
            Ok(Step::Compare { left: 1, right: 2 })
        );
        assert_eq!(selection.active_index(), Ok(0));
        assert_eq!(selection.step(&mut keys), Ok(Step::Swap { left: 0, right: 1 }));
        assert_eq!(keys, [1, 3, 2]);
        assert_eq!(selection.active_index(), Ok(1));

        assert_eq!(
            selection.step(&mut keys),
            Ok(Step::Compare { left: 1, right: 2 })
        );
        assert_eq!(selection.step(&mut keys), Ok(Step::Swap { left: 1, right: 2 }));
        assert_eq!(keys, [1, 2, 3]);
        assert_eq!(selection.is_sorted(&keys), Ok(true));
        assert_eq!(selection.active_index(), Ok(2));
    }

    #[test]
    fn exchange_in_place_keeps_keys() {
        let mut keys = [1, 2];
        let mut selection = Selection::new();
        selection.reset(&keys);
        selection.step(&mut keys).unwrap();
        assert_eq!(selection.step(&mut keys), Ok(Step::Swap { left: 0, right: 0 }));
        assert_eq!(keys, [1, 2]);
        assert_eq!(selection.is_sorted(&keys), Ok(true));
    }

    #[test]
    fn step_count_is_quadratic() {
        let mut keys = [5, 4, 3, 2, 1];
        let mut selection = Selection::new();
        selection.reset(&keys);
        let mut steps = 0;
        while !selection.is_sorted(&keys).unwrap() {
            selection.step(&mut keys).unwrap();
            steps += 1;
        }
        // n(n-1)/2 comparisons plus n-1 exchanges.
        assert_eq!(steps, 10 + 4);
        assert_eq!(keys, [1, 2, 3, 4, 5]);
    }
}

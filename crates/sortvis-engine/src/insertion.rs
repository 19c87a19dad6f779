//! Insertion sort, one shift per step.
//!
//! Lifting the key, each shift, and writing the key back are separate steps.
//! `gap` is the slot the held key would land in; the comparison cursor is
//! `gap - 1`, and a `gap` of 0 means the cursor has run off the left end.

use crate::strategy::{highlight, Binding};
use crate::{SortResult, SortStrategy, Step, ACTIVE_SENTINEL};

#[derive(Debug, Clone)]
pub struct Insertion {
    binding: Binding,
    /// Next unsorted index; everything left of it is ordered.
    next: usize,
    gap: usize,
    held: Option<i32>,
}

impl Insertion {
    pub const fn new() -> Self {
        Self {
            binding: Binding::unbound(),
            next: 1,
            gap: 1,
            held: None,
        }
    }
}

impl Default for Insertion {
    fn default() -> Self {
        Self::new()
    }
}

impl SortStrategy for Insertion {
    fn name(&self) -> &'static str {
        "Insertion"
    }

    fn reset(&mut self, keys: &[i32]) {
        self.binding.bind(keys);
        self.next = 1;
        self.gap = 1;
        self.held = None;
    }

    fn step(&mut self, keys: &mut [i32]) -> SortResult<Step> {
        let len = self.binding.check(keys)?;
        if self.next >= len {
            return Ok(Step::Idle);
        }
        let Some(key) = self.held else {
            self.held = Some(keys[self.next]);
            self.gap = self.next;
            return Ok(Step::Capture { at: self.next });
        };
        let gap = self.gap;
        if gap > 0 && keys[gap - 1] > key {
            keys[gap] = keys[gap - 1];
            self.gap -= 1;
            Ok(Step::Shift {
                from: gap - 1,
                to: gap,
            })
        } else {
            keys[gap] = key;
            self.held = None;
            self.next += 1;
            Ok(Step::Place { at: gap })
        }
    }

    fn active_index(&self) -> SortResult<usize> {
        let len = self.binding.len()?;
        Ok(self
            .gap
            .checked_sub(1)
            .map_or(ACTIVE_SENTINEL, |cursor| highlight(cursor, len)))
    }

    fn is_sorted(&self, keys: &[i32]) -> SortResult<bool> {
        Ok(self.next >= self.binding.check(keys)?)
    }

    /// Drops the held key into the gap, which otherwise still holds a copy
    /// of its left neighbour after a shift.
    fn release(&mut self, keys: &mut [i32]) -> SortResult<()> {
        self.binding.check(keys)?;
        if let Some(key) = self.held.take() {
            keys[self.gap] = key;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SortError;

    #[test]
    fn two_key_trace() {
        let mut keys = [2, 1];
        let mut insertion = Insertion::new();
        insertion.reset(&keys);

        assert_eq!(insertion.step(&mut keys), Ok(Step::Capture { at: 1 }));
        assert_eq!(insertion.active_index(), Ok(0));
        assert_eq!(keys, [2, 1]);

        assert_eq!(insertion.step(&mut keys), Ok(Step::Shift { from: 0, to: 1 }));
        assert_eq!(keys, [2, 2]);
        // Cursor ran off the left end.
        assert_eq!(insertion.active_index(), Ok(ACTIVE_SENTINEL));

        assert_eq!(insertion.step(&mut keys), Ok(Step::Place { at: 0 }));
        assert_eq!(keys, [1, 2]);
        assert_eq!(insertion.is_sorted(&keys), Ok(true));
    }

    #[test]
    fn key_already_in_place_is_placed_without_shifting() {
        let mut keys = [1, 2];
        let mut insertion = Insertion::new();
        insertion.reset(&keys);
        assert_eq!(insertion.step(&mut keys), Ok(Step::Capture { at: 1 }));
        assert_eq!(insertion.step(&mut keys), Ok(Step::Place { at: 1 }));
        assert_eq!(insertion.is_sorted(&keys), Ok(true));
        assert_eq!(insertion.step(&mut keys), Ok(Step::Idle));
    }

    #[test]
    fn equal_keys_do_not_shift() {
        let mut keys = [5, 5, 5];
        let mut insertion = Insertion::new();
        insertion.reset(&keys);
        let mut steps = 0;
        while !insertion.is_sorted(&keys).unwrap() {
            let step = insertion.step(&mut keys).unwrap();
            assert!(!matches!(step, Step::Shift { .. }));
            steps += 1;
        }
        // Capture + Place for each of the two unsorted keys.
        assert_eq!(steps, 4);
    }

    #[test]
    fn reset_drops_held_key() {
        let mut keys = [3, 2, 1];
        let mut insertion = Insertion::new();
        insertion.reset(&keys);
        insertion.step(&mut keys).unwrap();
        insertion.step(&mut keys).unwrap();
        assert_eq!(keys, [3, 3, 1]);

        let mut fresh = [2, 1];
        insertion.reset(&fresh);
        assert_eq!(insertion.step(&mut fresh), Ok(Step::Capture { at: 1 }));
    }

    #[test]
    fn release_mid_shift_restores_keys() {
        let mut keys = [3, 2, 1];
        let mut insertion = Insertion::new();
        insertion.reset(&keys);
        insertion.step(&mut keys).unwrap();
        assert_eq!(insertion.step(&mut keys), Ok(Step::Shift { from: 0, to: 1 }));
        assert_eq!(keys, [3, 3, 1]);

        insertion.release(&mut keys).unwrap();
        assert_eq!(keys, [2, 3, 1]);
        // Nothing left in hand: a second release is a no-op.
        insertion.release(&mut keys).unwrap();
        assert_eq!(keys, [2, 3, 1]);
    }

    #[test]
    fn release_after_capture_only_writes_key_back() {
        let mut keys = [1, 4, 2];
        let mut insertion = Insertion::new();
        insertion.reset(&keys);
        insertion.step(&mut keys).unwrap();
        insertion.release(&mut keys).unwrap();
        assert_eq!(keys, [1, 4, 2]);
    }

    #[test]
    fn mismatched_length_is_rejected() {
        let mut insertion = Insertion::new();
        insertion.reset(&[1, 2, 3]);
        assert_eq!(
            insertion.step(&mut [1, 2]),
            Err(SortError::LengthMismatch { bound: 3, given: 2 })
        );
    }
}

//! The strategy contract shared by every variant.
//!
//! A strategy never owns the keys. `reset` records the length of the
//! sequence it is bound to; `step` and `is_sorted` borrow the keys for the
//! duration of the call and check that they still have that length. The
//! borrow checker therefore guarantees a strategy cannot retain the buffer
//! between calls, and the length check guarantees no stale index survives a
//! change of buffer without a `reset`.

use crate::{SortError, SortResult, Step, ACTIVE_SENTINEL};

/// A sorting algorithm re-expressed as a resumable state machine.
pub trait SortStrategy {
    /// Fixed human-readable identifier ("Bubble", "Insertion", ...).
    fn name(&self) -> &'static str;

    /// Bind to `keys` and return to the starting configuration.
    ///
    /// Discards all in-progress state. This is the only way to restart a
    /// strategy or to move it onto a different sequence.
    fn reset(&mut self, keys: &[i32]);

    /// Perform exactly one primitive operation on `keys`.
    ///
    /// Returns [`Step::Idle`] once the strategy is complete; calling again is
    /// always safe and leaves `keys` untouched.
    ///
    /// # Errors
    /// - `Unbound` if `reset` was never called
    /// - `LengthMismatch` if `keys` is not the length bound by `reset`
    fn step(&mut self, keys: &mut [i32]) -> SortResult<Step>;

    /// Index currently of interest, for highlighting.
    ///
    /// Always `< len`, or [`ACTIVE_SENTINEL`] when nothing is of interest.
    ///
    /// # Errors
    /// Returns `Unbound` if `reset` was never called.
    fn active_index(&self) -> SortResult<usize>;

    /// Whether the strategy has reached its terminal condition.
    ///
    /// Derived from progress state on every call, never cached. Only Bogo
    /// inspects `keys`; the others use it for the length check alone.
    ///
    /// # Errors
    /// Same as [`step`](SortStrategy::step).
    fn is_sorted(&self, keys: &[i32]) -> SortResult<bool>;

    /// Write back anything the strategy holds outside `keys`, so the buffer
    /// is a permutation of the bound keys again before another strategy
    /// takes over. Progress state is otherwise untouched; follow with
    /// `reset` before stepping again.
    ///
    /// # Errors
    /// Same as [`step`](SortStrategy::step).
    fn release(&mut self, _keys: &mut [i32]) -> SortResult<()> {
        Ok(())
    }
}

/// `true` if every adjacent pair of `keys` is non-descending.
pub fn is_ascending(keys: &[i32]) -> bool {
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Length of the sequence last bound by `reset`, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Binding {
    len: Option<usize>,
}

impl Binding {
    pub(crate) const fn unbound() -> Self {
        Self { len: None }
    }

    pub(crate) fn bind(&mut self, keys: &[i32]) {
        self.len = Some(keys.len());
    }

    pub(crate) fn len(&self) -> SortResult<usize> {
        self.len.ok_or(SortError::Unbound)
    }

    /// Bound length, after checking `keys` still matches it.
    pub(crate) fn check(&self, keys: &[i32]) -> SortResult<usize> {
        let bound = self.len()?;
        if keys.len() != bound {
            return Err(SortError::LengthMismatch {
                bound,
                given: keys.len(),
            });
        }
        Ok(bound)
    }
}

/// Maps a cursor to a displayable index: itself when inside the sequence,
/// the sentinel otherwise.
#[inline]
pub(crate) fn highlight(cursor: usize, len: usize) -> usize {
    if cursor < len {
        cursor
    } else {
        ACTIVE_SENTINEL
    }
}

//! Per-run counts of primitive operations.

use std::fmt;

use sortvis_engine::Step;

/// How many steps of each kind a run has performed since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub comparisons: u64,
    pub swaps: u64,
    pub shifts: u64,
    pub captures: u64,
    pub placements: u64,
    pub advances: u64,
    pub shuffles: u64,
    pub idle: u64,
}

impl Tally {
    pub fn record(&mut self, step: Step) {
        let counter = match step {
            Step::Compare { .. } => &mut self.comparisons,
            Step::Swap { .. } => &mut self.swaps,
            Step::Shift { .. } => &mut self.shifts,
            Step::Capture { .. } => &mut self.captures,
            Step::Place { .. } => &mut self.placements,
            Step::Advance => &mut self.advances,
            Step::Shuffle => &mut self.shuffles,
            Step::Idle => &mut self.idle,
        };
        *counter += 1;
    }

    /// Total number of steps recorded.
    pub fn steps(&self) -> u64 {
        self.comparisons
            + self.swaps
            + self.shifts
            + self.captures
            + self.placements
            + self.advances
            + self.shuffles
            + self.idle
    }

    /// Steps that wrote to the keys.
    pub fn writes(&self) -> u64 {
        self.swaps + self.shifts + self.placements + self.shuffles
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} steps ({} comparisons, {} swaps, {} shifts, {} captures, {} placements, \
             {} advances, {} shuffles, {} idle)",
            self.steps(),
            self.comparisons,
            self.swaps,
            self.shifts,
            self.captures,
            self.placements,
            self.advances,
            self.shuffles,
            self.idle
        )
    }
}

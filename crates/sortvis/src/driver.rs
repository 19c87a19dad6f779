//! The driver loop: owns the keys and every strategy, and paces `step`.
//!
//! The driver is the only mutator of the key buffer between sorts (refill
//! on [`reshuffle`](Driver::reshuffle)); during a sort only the selected
//! strategy writes to it, one `step` per due tick. Every path that changes
//! the selected strategy or the keys ends in a `reset`.

use std::time::Duration;

use anyhow::Result;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use sortvis_engine::{Algorithm, AnySorter, Roster, SortStrategy, Step};

use crate::keys::fill_keys;
use crate::options::{clamp_step_delay, DriverOptions};
use crate::tally::Tally;

/// Read-only snapshot handed to the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub keys: &'a [i32],
    pub active_index: usize,
    pub sorted: bool,
    pub paused: bool,
    pub algorithm: Algorithm,
    pub steps: u64,
}

pub struct Driver {
    keys: Vec<i32>,
    roster: Roster,
    selected: Algorithm,
    rng: Xoshiro256PlusPlus,
    max_height: i32,
    step_delay: Duration,
    timer: Duration,
    paused: bool,
    tally: Tally,
    seed: u64,
}

impl Driver {
    /// Generate the keys and bind the selected strategy to them.
    ///
    /// # Errors
    /// Fails if the options cannot produce valid keys (see [`fill_keys`]).
    pub fn new(options: &DriverOptions) -> Result<Self> {
        let seed = options.seed.unwrap_or_else(rand::random);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut keys = vec![0; options.size];
        fill_keys(&mut keys, options.max_height, &mut rng)?;

        let mut roster = Roster::new(rng.next_u64());
        roster.get_mut(options.algorithm).reset(&keys);

        Ok(Self {
            keys,
            roster,
            selected: options.algorithm,
            rng,
            max_height: options.max_height,
            step_delay: clamp_step_delay(options.step_delay),
            timer: Duration::ZERO,
            paused: options.start_paused,
            tally: Tally::default(),
            seed,
        })
    }

    /// Seed actually used for key generation.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn keys(&self) -> &[i32] {
        &self.keys
    }

    pub fn selected(&self) -> Algorithm {
        self.selected
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Change the cadence; the value is clamped like the speed slider.
    pub fn set_step_delay(&mut self, delay: Duration) {
        self.step_delay = clamp_step_delay(delay);
    }

    pub fn is_sorted(&self) -> Result<bool> {
        Ok(self.active().is_sorted(&self.keys)?)
    }

    /// Advance the clock by `elapsed` and step once if a step is due.
    ///
    /// A step is due when the driver is running, the strategy is not done,
    /// and at least one step delay has accumulated. Only one step is taken
    /// per tick however much time has passed.
    pub fn tick(&mut self, elapsed: Duration) -> Result<Option<Step>> {
        self.timer = self.timer.saturating_add(elapsed);
        if self.paused || self.is_sorted()? || self.timer < self.step_delay {
            return Ok(None);
        }
        self.timer = Duration::ZERO;
        self.step_once().map(Some)
    }

    /// Step the selected strategy once, regardless of pause and cadence.
    pub fn step_once(&mut self) -> Result<Step> {
        let step = self.roster.get_mut(self.selected).step(&mut self.keys)?;
        self.tally.record(step);
        Ok(step)
    }

    /// Switch to `algorithm` and bind it to the current keys.
    ///
    /// The outgoing strategy first hands back any key it is holding, then
    /// the keys are left as they are, so a half-sorted buffer stays
    /// half-sorted under the new strategy.
    pub fn select(&mut self, algorithm: Algorithm) -> Result<()> {
        self.roster.get_mut(self.selected).release(&mut self.keys)?;
        self.selected = algorithm;
        self.restart();
        Ok(())
    }

    /// Refill the keys with fresh random heights and restart the selected
    /// strategy on them.
    pub fn reshuffle(&mut self) -> Result<()> {
        fill_keys(&mut self.keys, self.max_height, &mut self.rng)?;
        self.restart();
        Ok(())
    }

    /// Snapshot for display. Callable at any time, before or between steps.
    pub fn frame(&self) -> Result<Frame<'_>> {
        let active = self.active();
        Ok(Frame {
            keys: &self.keys,
            active_index: active.active_index()?,
            sorted: active.is_sorted(&self.keys)?,
            paused: self.paused,
            algorithm: self.selected,
            steps: self.tally.steps(),
        })
    }

    fn active(&self) -> &AnySorter {
        self.roster.get(self.selected)
    }

    fn restart(&mut self) {
        self.roster.get_mut(self.selected).reset(&self.keys);
        self.timer = Duration::ZERO;
        self.tally = Tally::default();
    }
}

//! sortvis — step-by-step sorting visualiser.
//!
//! This crate is the driver side of [`sortvis_engine`]: it owns the key
//! buffer and one instance of every strategy, paces calls into `step`, and
//! renders frames as text.

pub mod driver;
pub mod keys;
pub mod options;
pub mod render;
pub mod tally;

// Re-export key types for convenience
pub use anyhow::{Context, Result};
pub use driver::{Driver, Frame};
pub use options::DriverOptions;
pub use tally::Tally;

/// How a headless run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The strategy reached its terminal condition.
    Sorted,
    /// The step budget ran out first.
    BudgetExhausted,
}

/// Drive `driver` on a virtual clock until it is sorted or `budget` steps
/// were taken.
///
/// Every tick advances the clock by exactly one step delay, so each tick is
/// due and no real time passes. `on_step` sees the driver after every step.
pub fn run_headless<F>(driver: &mut Driver, budget: u64, mut on_step: F) -> Result<RunOutcome>
where
    F: FnMut(&Driver) -> Result<()>,
{
    driver.set_paused(false);
    let delay = driver.step_delay();
    loop {
        if driver.is_sorted()? {
            return Ok(RunOutcome::Sorted);
        }
        if driver.tally().steps() >= budget {
            return Ok(RunOutcome::BudgetExhausted);
        }
        if driver.tick(delay)?.is_some() {
            on_step(driver)?;
        }
    }
}

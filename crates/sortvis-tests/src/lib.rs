//! Shared helpers for the behavioural tests and benchmarks.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use sortvis_engine::{Algorithm, AnySorter, SortStrategy, Step};

/// The variants that are guaranteed to terminate.
pub const COMPARISON_SORTS: [Algorithm; 4] = [
    Algorithm::Bubble,
    Algorithm::Insertion,
    Algorithm::Selection,
    Algorithm::Gnome,
];

/// `len` seeded keys in `lo..=hi`.
pub fn random_keys(len: usize, lo: i32, hi: i32, seed: u64) -> Vec<i32> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(lo..=hi)).collect()
}

/// Every step a run performed, in order.
#[derive(Debug, Default)]
pub struct Trace {
    pub steps: Vec<Step>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn count(&self, pred: impl Fn(&Step) -> bool) -> usize {
        self.steps.iter().filter(|s| pred(s)).count()
    }
}

/// Reset `strategy` on `keys` and step until sorted, failing past `budget`.
pub fn run_to_completion<S: SortStrategy + ?Sized>(
    strategy: &mut S,
    keys: &mut [i32],
    budget: usize,
) -> Result<Trace, String> {
    strategy.reset(keys);
    let mut trace = Trace::default();
    while !strategy.is_sorted(keys).map_err(|e| e.to_string())? {
        if trace.len() >= budget {
            return Err(format!("{} exceeded {budget} steps", strategy.name()));
        }
        trace
            .steps
            .push(strategy.step(keys).map_err(|e| e.to_string())?);
    }
    Ok(trace)
}

/// Fresh sorter for `algorithm` with a fixed seed.
pub fn sorter(algorithm: Algorithm) -> AnySorter {
    AnySorter::new(algorithm, 0x5eed)
}

/// Upper bound on steps for the quadratic variants on `n` keys.
pub fn quadratic_budget(n: usize) -> usize {
    2 * n * n + 2 * n + 2
}

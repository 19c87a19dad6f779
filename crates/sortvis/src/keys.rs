//! Random key generation.
//!
//! Keys model bar heights and are always strictly positive: key `i` is
//! `i + h` with `h` uniform in `1..=max_height`, so the bars trend upward
//! slightly with their position before shuffling by chance.

use anyhow::{ensure, Result};
use rand::Rng;

/// Fill `keys` with fresh random bar heights.
///
/// # Errors
/// Fails if `max_height < 1` or a key would overflow `i32`.
pub fn fill_keys<R: Rng + ?Sized>(keys: &mut [i32], max_height: i32, rng: &mut R) -> Result<()> {
    ensure!(max_height >= 1, "max height must be at least 1, got {max_height}");
    ensure!(
        i32::try_from(keys.len())
            .ok()
            .and_then(|len| len.checked_add(max_height))
            .is_some(),
        "{} keys of height up to {max_height} overflow i32",
        keys.len()
    );
    for (i, key) in keys.iter_mut().enumerate() {
        *key = i as i32 + rng.gen_range(1..=max_height);
    }
    Ok(())
}

//! Weighted random sector selection

use rand::Rng;

use crate::error::{WheelError, WheelResult};
use crate::sector::{Sector, total_weight};

/// Pick a winning sector index from the thread-local RNG
pub fn select_winning_sector(sectors: &[Sector]) -> WheelResult<usize> {
    select_winning_sector_with(&mut rand::rng(), sectors)
}

/// Pick a winning sector index with probability `weight_i / Σweight`.
///
/// Draws once in `[0, total)` and walks the sectors in order, returning the
/// first index where the running remainder drops to zero or below.
pub fn select_winning_sector_with<R: Rng + ?Sized>(
    rng: &mut R,
    sectors: &[Sector],
) -> WheelResult<usize> {
    if sectors.is_empty() {
        return Err(WheelError::InvalidInput(
            "cannot select from an empty sector list".into(),
        ));
    }

    let total = total_weight(sectors);
    let mut remainder = rng.random::<f64>() * total;

    for (index, sector) in sectors.iter().enumerate() {
        remainder -= sector.effective_weight();
        if remainder <= 0.0 {
            return Ok(index);
        }
    }

    // Rounding left a sliver above zero
    Ok(0)
}

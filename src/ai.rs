// Opponent targeting: uniform random choice among cells not yet attacked.

use log::trace;
use rand::Rng;

use crate::{
    board::Board,
    common::{AttackResult, BoardError},
};

/// Pick a random cell of `target` that has not been attacked.
///
/// Random draws are bounded by the number of cells on the board; after that
/// the first unattacked cell in row-major order is chosen. Fails with
/// [`BoardError::BoardExhausted`] when every cell has been attacked.
pub fn choose_target<R: Rng + ?Sized>(
    target: &Board,
    rng: &mut R,
) -> Result<(usize, usize), BoardError> {
    let size = target.size();
    for _ in 0..size * size {
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        if target.cell(row, col).is_some_and(|c| !c.attacked()) {
            return Ok((row, col));
        }
    }
    trace!("random draws exhausted, scanning for an open cell");
    target
        .unattacked_cells()
        .next()
        .ok_or(BoardError::BoardExhausted)
}

/// Choose a target with [`choose_target`] and fire at it.
pub fn choose_and_attack<R: Rng + ?Sized>(
    target: &mut Board,
    rng: &mut R,
) -> Result<((usize, usize), AttackResult), BoardError> {
    let (row, col) = choose_target(target, rng)?;
    let result = target.attack(row, col);
    Ok(((row, col), result))
}

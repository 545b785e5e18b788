//! Player trait and implementations
//!
//! - AiPlayer: scripted opponent firing at random open cells
//! - CliPlayer: interactive player reading coordinates from text input

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{AttackResult, BoardError},
    ship::Ship,
};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing ships on its own board
/// - Selecting targets on the opponent board
/// - Handling feedback from attacks
pub trait Player {
    /// Place the fleet onto the provided board. Random by default.
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &mut [Ship],
    ) -> Result<(), BoardError> {
        board.place_all(fleet, rng)
    }

    /// Called once at the start of each of the player's turns.
    fn begin_turn(&mut self, _own: &Board, _target: &Board) -> anyhow::Result<()> {
        Ok(())
    }

    /// Choose the next coordinate to fire at on `target`.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)>;

    /// Inform the player of the result of its last attack. `OutOfBounds` and
    /// `AlreadyAttacked` are followed by another call to `select_target`.
    fn handle_guess_result(
        &mut self,
        _coord: (usize, usize),
        _result: AttackResult,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    /// Inform the player of an opponent attack against its board.
    fn handle_opponent_guess(
        &mut self,
        _coord: (usize, usize),
        _result: AttackResult,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;

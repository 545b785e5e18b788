use rand::rngs::SmallRng;

use crate::{ai, board::Board};

use super::Player;

/// Scripted opponent that fires at uniformly random open cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        Ok(ai::choose_target(target, rng)?)
    }
}

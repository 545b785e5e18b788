//! Turn controller: both boards, alternating turns and the end of the game.

use anyhow::ensure;
use log::{debug, info};
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::{
    board::Board,
    common::{AttackResult, BoardError},
    config::GameConfig,
    player::Player,
};

/// Current status of a game, seen from the first player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Shots fired by one side that consumed a turn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShotStats {
    pub shots: usize,
    pub hits: usize,
}

impl ShotStats {
    fn record(&mut self, result: AttackResult) {
        if result.is_valid() {
            self.shots += 1;
        }
        if result == AttackResult::Hit {
            self.hits += 1;
        }
    }
}

/// A two-sided game. The first player (usually the human) moves first.
pub struct Game {
    config: GameConfig,
    player_board: Board,
    opponent_board: Board,
    player_stats: ShotStats,
    opponent_stats: ShotStats,
    rounds: usize,
    ready: bool,
}

impl Game {
    /// Validate `config` and create two empty boards.
    pub fn new(config: GameConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            player_board: Board::new(config.board_size)?,
            opponent_board: Board::new(config.board_size)?,
            config,
            player_stats: ShotStats::default(),
            opponent_stats: ShotStats::default(),
            rounds: 0,
            ready: false,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board holding the first player's ships.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// Board holding the opponent's ships.
    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    pub fn player_stats(&self) -> ShotStats {
        self.player_stats
    }

    pub fn opponent_stats(&self) -> ShotStats {
        self.opponent_stats
    }

    /// Completed rounds (one attack by each side).
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Let each player place a fresh copy of the fleet on its board.
    ///
    /// Both boards are committed together, and only once: a failed setup
    /// leaves them empty and a second call is rejected.
    pub fn setup<P, O>(
        &mut self,
        player: &mut P,
        opponent: &mut O,
        rng: &mut SmallRng,
    ) -> Result<(), BoardError>
    where
        P: Player + ?Sized,
        O: Player + ?Sized,
    {
        if self.ready {
            return Err(BoardError::FleetAlreadyPlaced);
        }
        let mut player_board = self.player_board.clone();
        let mut fleet = self.config.ships();
        player.place_ships(rng, &mut player_board, &mut fleet)?;
        let mut opponent_board = self.opponent_board.clone();
        let mut fleet = self.config.ships();
        opponent.place_ships(rng, &mut opponent_board, &mut fleet)?;
        debug!("fleets placed: {:?}", self.config.fleet);
        self.player_board = player_board;
        self.opponent_board = opponent_board;
        self.ready = true;
        Ok(())
    }

    /// Fire at the opponent's board on behalf of the first player.
    pub fn fire_at_opponent(&mut self, row: usize, col: usize) -> AttackResult {
        let result = self.opponent_board.attack(row, col);
        self.player_stats.record(result);
        result
    }

    /// Fire at the first player's board on behalf of the opponent.
    pub fn fire_at_player(&mut self, row: usize, col: usize) -> AttackResult {
        let result = self.player_board.attack(row, col);
        self.opponent_stats.record(result);
        result
    }

    pub fn status(&self) -> GameStatus {
        if !self.ready {
            GameStatus::InProgress
        } else if self.opponent_board.all_sunk() {
            GameStatus::Won
        } else if self.player_board.all_sunk() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Play one round: the first player attacks until it lands a valid shot,
    /// then, unless that ended the game, the opponent does the same.
    pub fn play_round<P, O>(
        &mut self,
        player: &mut P,
        opponent: &mut O,
        rng: &mut SmallRng,
    ) -> anyhow::Result<GameStatus>
    where
        P: Player + ?Sized,
        O: Player + ?Sized,
    {
        ensure!(self.ready, "ships must be placed before playing");

        player.begin_turn(&self.player_board, &self.opponent_board)?;
        loop {
            let (row, col) = player.select_target(rng, &self.opponent_board)?;
            let result = self.fire_at_opponent(row, col);
            debug!("player fired at ({}, {}): {:?}", row, col, result);
            player.handle_guess_result((row, col), result)?;
            if result.is_valid() {
                opponent.handle_opponent_guess((row, col), result)?;
                break;
            }
        }
        if self.opponent_board.all_sunk() {
            self.rounds += 1;
            return Ok(GameStatus::Won);
        }

        opponent.begin_turn(&self.opponent_board, &self.player_board)?;
        loop {
            let (row, col) = opponent.select_target(rng, &self.player_board)?;
            let result = self.fire_at_player(row, col);
            debug!("opponent fired at ({}, {}): {:?}", row, col, result);
            opponent.handle_guess_result((row, col), result)?;
            if result.is_valid() {
                player.handle_opponent_guess((row, col), result)?;
                break;
            }
        }
        self.rounds += 1;
        Ok(self.status())
    }

    /// Play rounds until one side has no ships left.
    pub fn run<P, O>(
        &mut self,
        player: &mut P,
        opponent: &mut O,
        rng: &mut SmallRng,
    ) -> anyhow::Result<GameStatus>
    where
        P: Player + ?Sized,
        O: Player + ?Sized,
    {
        loop {
            let status = self.play_round(player, opponent, rng)?;
            if status != GameStatus::InProgress {
                info!(
                    "game over after {} rounds: {:?} (player {:?}, opponent {:?})",
                    self.rounds, status, self.player_stats, self.opponent_stats
                );
                return Ok(status);
            }
        }
    }
}

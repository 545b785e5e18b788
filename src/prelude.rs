//! Commonly used types and utilities for ease of import.

pub use crate::{
    choose_and_attack, coord::format_coord, coord::parse_coord, AiPlayer, AttackResult, Board,
    BoardError, CliPlayer, Game, GameConfig, GameStatus, Orientation, Player, Ship,
};

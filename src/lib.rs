mod ai;
mod board;
mod cell;
mod common;
mod config;
pub mod coord;
mod game;
mod logging;
pub mod player;
pub mod prelude;
mod ship;

pub use ai::*;
pub use board::*;
pub use cell::Cell;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::{init_logging, LOG_ENV};
pub use player::{AiPlayer, CliPlayer, Player};
pub use ship::*;

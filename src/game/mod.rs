/// Gravity fed board with placement and win detection.
pub mod board;
/// Tiles, runs, move outcomes and players.
pub mod components;
/// Errors produced by the game.
pub mod error;
mod game;
/// Parsing of terminal commands.
pub mod input;

pub use game::Game;

#![warn(missing_docs)]
//! Connect 4 game crate
/// Board, players and the turn loop.
pub mod game;
pub use game::{
    board::{Board, StandardBoard, COLUMNS, ROWS},
    components::{Direction, Outcome, Player, Players, Run, TileType},
    error::{Error, GameResult, WrongMove},
    input::Input,
    Game,
};

/// A move the board refused. The board is left unchanged and the same player
/// is expected to try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WrongMove {
    /// Every slot in the column is taken.
    #[error("column {0} is already full")]
    ColumnFull(usize),
    /// The column is outside the board.
    #[error("column {0} does not exist")]
    InvalidColumn(usize),
    /// Tried to place `TileType::Empty`.
    #[error("cannot place an empty tile")]
    EmptyTile,
    /// The round already has a winner or ended in a draw.
    #[error("the round is over")]
    RoundOver,
}

/// All the possible recoverable errors produced by the game.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The board rejected a placement.
    #[error("wrong move: {0}")]
    WrongMove(#[from] WrongMove),
    /// A line of user input that is not a command.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),
    /// Board dimensions too small, or a position outside the board.
    #[error("invalid board dimensions or position")]
    InvalidDim,
    /// Not enough players, or a player without a tile.
    #[error("a game needs at least two players with non-empty tiles")]
    NoPlayer,
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// If the error is a recoverable wrong move.
    pub fn is_wrong_move(&self) -> bool {
        matches!(self, Error::WrongMove(_))
    }
}

/// Result type making use of custom errors.
pub type GameResult<T> = Result<T, Error>;

use super::error::{Error, GameResult};

/// The type of tiles that can be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    /// No token in the cell.
    #[default]
    Empty,
    /// Yellow player's token.
    Yellow,
    /// Red player's token.
    Red,
}

impl TileType {
    /// Every player tile, in turn order.
    pub const PLAYERS: [TileType; 2] = [TileType::Yellow, TileType::Red];

    /// Single character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            TileType::Empty => '.',
            TileType::Yellow => 'Y',
            TileType::Red => 'R',
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            TileType::Empty => "Empty",
            TileType::Yellow => "Yellow",
            TileType::Red => "Red",
        }
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Direction a run extends in from its anchor.
///
/// Rows grow downwards (row 0 is the top of the board), so `dy = -1` walks up
/// towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Same row, increasing column.
    Right,
    /// Same column, decreasing row.
    Down,
    /// Increasing column, decreasing row.
    RightDiagonal,
    /// Decreasing column, decreasing row.
    LeftDiagonal,
}

impl Direction {
    /// All four directions checked from every anchor.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::RightDiagonal,
        Direction::LeftDiagonal,
    ];

    /// Step `(dx, dy)` between consecutive cells of a run.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::RightDiagonal => (1, -1),
            Direction::LeftDiagonal => (-1, -1),
        }
    }
}

/// Four aligned cells holding the same tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// The tile filling the run.
    pub tile: TileType,
    /// Direction from the anchor.
    pub direction: Direction,
    /// `(x, y)` positions, anchor first.
    pub cells: [(usize, usize); 4],
}

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No winner yet, the next player moves.
    Continue,
    /// The move completed a run.
    Win(Run),
    /// The board is full and nobody won.
    Draw,
}

/// A single player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Name shown in prompts.
    pub name: String,
    /// Rounds won.
    pub score: usize,
    /// Tile dropped by this player.
    pub tile: TileType,
}

impl Player {
    /// Player named after its tile.
    pub fn from_tile(tile: TileType) -> Self {
        Self {
            name: tile.name().to_string(),
            score: 0,
            tile,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Struct containing the players, taking turns round-robin.
#[derive(Debug, Clone)]
pub struct Players {
    players: Vec<Player>,
    active: usize,
    first: usize,
}

impl Players {
    /// Create a new player set.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoPlayer` if there are fewer than two players or a
    /// player uses `TileType::Empty`.
    pub fn new(players: Vec<Player>) -> GameResult<Self> {
        if players.len() < 2 || players.iter().any(|p| p.tile == TileType::Empty) {
            return Err(Error::NoPlayer);
        }
        Ok(Self {
            players,
            active: 0,
            first: 0,
        })
    }

    /// One player per tile, named after the tile.
    pub fn from_tiles(tiles: &[TileType]) -> GameResult<Self> {
        Self::new(tiles.iter().copied().map(Player::from_tile).collect())
    }

    /// Get the current active player.
    pub fn active(&self) -> &Player {
        &self.players[self.active]
    }

    /// Pass the turn to the next player.
    pub fn advance(&mut self) {
        self.active = (self.active + 1) % self.players.len();
    }

    /// Add a point to the active player.
    pub fn scored(&mut self) {
        self.players[self.active].score += 1;
    }

    /// Rotate the starting player and make them active for a new round.
    pub fn next_round(&mut self) {
        self.first = (self.first + 1) % self.players.len();
        self.active = self.first;
    }

    /// All players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}

use super::{
    components::{Direction, Outcome, Run, TileType},
    error::{Error, GameResult, WrongMove},
};

/// Number of columns of a standard board.
pub const COLUMNS: usize = 7;
/// Number of rows of a standard board.
pub const ROWS: usize = 6;
/// Tiles in a winning run.
const RUN_LEN: usize = 4;

/// The classic 7 x 6 board.
pub type StandardBoard = Board<COLUMNS, ROWS>;

/// Gravity fed grid of `W` columns and `H` rows.
///
/// Row 0 is the top row. Tiles fall to the highest free row index of their
/// column, so non-empty cells of a column are always contiguous from the
/// bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<const W: usize, const H: usize> {
    board: [[TileType; W]; H],
}

impl<const W: usize, const H: usize> Board<W, H> {
    /// Create a new, empty board.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if the width or height is smaller than 4.
    pub fn new() -> GameResult<Self> {
        if W < RUN_LEN || H < RUN_LEN {
            return Err(Error::InvalidDim);
        }
        Ok(Self {
            board: [[TileType::default(); W]; H],
        })
    }

    /// Drop a tile in the given column. The column is zero indexed.
    ///
    /// Returns the row the tile landed in.
    ///
    /// # Errors
    ///
    /// Returns `WrongMove::InvalidColumn` if the column is outside the board.
    ///
    /// Returns `WrongMove::EmptyTile` if the tile is `TileType::Empty`.
    ///
    /// Returns `WrongMove::ColumnFull` if there is no free slot left in the
    /// column. The board is unchanged on every error.
    pub fn add_to_column(&mut self, col: usize, tile: TileType) -> GameResult<usize> {
        if col >= W {
            return Err(WrongMove::InvalidColumn(col).into());
        } else if tile == TileType::Empty {
            return Err(WrongMove::EmptyTile.into());
        }
        let filled = self.column_height(col);
        if filled >= H {
            return Err(WrongMove::ColumnFull(col).into());
        }
        let row = H - filled - 1;
        self.board[row][col] = tile;
        log::trace!("placed {tile} at column {col}, row {row}");
        Ok(row)
    }

    /// Scan the whole board for four aligned tiles.
    ///
    /// Every cell is tried as the anchor of a run in each of the four
    /// directions. Returns the first winning run found.
    pub fn check_winning_combination(&self) -> Option<Run> {
        for y in 0..H {
            for x in 0..W {
                for direction in Direction::ALL {
                    if let Some(run) = self.run_at(x, y, direction) {
                        log::debug!("{} wins with {:?}", run.tile, run.cells);
                        return Some(run);
                    }
                }
            }
        }
        None
    }

    /// Look for a winning run passing through `(x, y)` only.
    ///
    /// After a move on a board without a winner this gives the same answer as
    /// `check_winning_combination` when called with the landing cell.
    pub fn winning_run_through(&self, x: usize, y: usize) -> Option<Run> {
        if x >= W || y >= H || self.board[y][x] == TileType::Empty {
            return None;
        }
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            for back in 0..RUN_LEN as isize {
                let ax = x as isize - back * dx;
                let ay = y as isize - back * dy;
                let Some((ax, ay)) = Self::in_bounds(ax, ay) else {
                    continue;
                };
                if let Some(run) = self.run_at(ax, ay, direction) {
                    return Some(run);
                }
            }
        }
        None
    }

    /// Place a tile and check the result of the move.
    ///
    /// # Errors
    ///
    /// Same as `add_to_column`.
    pub fn play(&mut self, col: usize, tile: TileType) -> GameResult<Outcome> {
        let row = self.add_to_column(col, tile)?;
        if let Some(run) = self.winning_run_through(col, row) {
            return Ok(Outcome::Win(run));
        }
        if self.is_full() {
            log::debug!("board full, draw");
            return Ok(Outcome::Draw);
        }
        Ok(Outcome::Continue)
    }

    /// Run anchored at `(x, y)` going in `direction`, if it wins.
    fn run_at(&self, x: usize, y: usize, direction: Direction) -> Option<Run> {
        let tile = self.board[y][x];
        if tile == TileType::Empty {
            return None;
        }
        let (dx, dy) = direction.delta();
        let mut cells = [(x, y); RUN_LEN];
        for (step, cell) in cells.iter_mut().enumerate().skip(1) {
            let step = step as isize;
            let (cx, cy) = Self::in_bounds(x as isize + step * dx, y as isize + step * dy)?;
            if self.board[cy][cx] != tile {
                return None;
            }
            *cell = (cx, cy);
        }
        Some(Run {
            tile,
            direction,
            cells,
        })
    }

    fn in_bounds(x: isize, y: isize) -> Option<(usize, usize)> {
        if x < 0 || y < 0 || x >= W as isize || y >= H as isize {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Reset the board to its original state.
    pub fn reset(&mut self) {
        self.board = [[TileType::default(); W]; H]
    }

    /// Get the type of tile at position (x, y).
    pub fn get(&self, x: usize, y: usize) -> GameResult<TileType> {
        if x >= W || y >= H {
            return Err(Error::InvalidDim);
        }

        Ok(self.board[y][x])
    }

    /// All cells as `(x, y, tile)`, top row first, left to right.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, TileType)> + '_ {
        self.board
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &t)| (x, y, t)))
    }

    /// Number of tiles in a column. Zero for columns outside the board.
    pub fn column_height(&self, col: usize) -> usize {
        if col >= W {
            return 0;
        }
        self.board
            .iter()
            .filter(|row| row[col] != TileType::Empty)
            .count()
    }

    /// Check if a column can't take another tile.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= W || self.board[0][col] != TileType::Empty
    }

    /// Check if every column is full.
    pub fn is_full(&self) -> bool {
        (0..W).all(|col| self.is_column_full(col))
    }

    /// Columns that still accept a tile.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..W).filter(|&col| !self.is_column_full(col)).collect()
    }
}

impl<const W: usize, const H: usize> std::fmt::Display for Board<W, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#")?;
        for x in 0..W {
            if x < 10 {
                write!(f, "-{x}-")?;
            } else if x < 100 {
                write!(f, "{x}-")?;
            } else {
                write!(f, "{x}")?;
            }
        }
        writeln!(f, "#")?;
        for row in &self.board {
            write!(f, "|")?;
            for tile in row {
                write!(f, " {} ", tile.symbol())?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "#")?;
        for _ in 0..W {
            write!(f, "---")?;
        }
        writeln!(f, "#")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Y: TileType = TileType::Yellow;
    const R: TileType = TileType::Red;

    fn board() -> StandardBoard {
        StandardBoard::new().unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board();
        assert!(board.cells().all(|(_, _, t)| t == TileType::Empty));
        assert_eq!(board.cells().count(), COLUMNS * ROWS);
        assert_eq!(board.check_winning_combination(), None);
    }

    #[test]
    fn test_too_small_board() {
        assert!(matches!(Board::<3, 6>::new(), Err(Error::InvalidDim)));
        assert!(matches!(Board::<7, 3>::new(), Err(Error::InvalidDim)));
        assert!(Board::<4, 4>::new().is_ok());
    }

    #[test]
    fn test_gravity() {
        let mut board = board();
        assert_eq!(board.add_to_column(3, Y).unwrap(), ROWS - 1);
        assert_eq!(board.add_to_column(3, R).unwrap(), ROWS - 2);
        assert_eq!(board.get(3, ROWS - 1).unwrap(), Y);
        assert_eq!(board.get(3, ROWS - 2).unwrap(), R);
        assert_eq!(board.get(3, ROWS - 3).unwrap(), TileType::Empty);
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = board();
        for _ in 0..ROWS {
            board.add_to_column(0, R).unwrap();
        }
        let before = board.clone();
        let err = board.add_to_column(0, Y).unwrap_err();
        assert!(matches!(err, Error::WrongMove(WrongMove::ColumnFull(0))));
        assert_eq!(board, before);
        assert!(board.is_column_full(0));
        assert!(!board.valid_columns().contains(&0));
    }

    #[test]
    fn test_invalid_column_and_tile() {
        let mut board = board();
        assert!(matches!(
            board.add_to_column(COLUMNS, Y),
            Err(Error::WrongMove(WrongMove::InvalidColumn(COLUMNS)))
        ));
        assert!(matches!(
            board.add_to_column(0, TileType::Empty),
            Err(Error::WrongMove(WrongMove::EmptyTile))
        ));
        assert_eq!(board, StandardBoard::new().unwrap());
    }

    #[test]
    fn test_three_then_four_in_first_column() {
        let mut board = board();
        for _ in 0..3 {
            board.add_to_column(0, Y).unwrap();
        }
        assert_eq!(board.check_winning_combination(), None);
        board.add_to_column(0, Y).unwrap();
        let run = board.check_winning_combination().unwrap();
        assert_eq!(run.tile, Y);
        assert_eq!(run.direction, Direction::Down);
    }

    #[test]
    fn test_three_in_second_column() {
        let mut board = board();
        for _ in 0..3 {
            board.add_to_column(1, Y).unwrap();
        }
        assert_eq!(board.check_winning_combination(), None);
    }

    #[test]
    fn test_first_row_win() {
        let mut board = board();
        for col in 0..3 {
            board.add_to_column(col, Y).unwrap();
        }
        assert_eq!(board.check_winning_combination(), None);
        board.add_to_column(3, Y).unwrap();
        let run = board.check_winning_combination().unwrap();
        assert_eq!(run.direction, Direction::Right);
        assert_eq!(
            run.cells,
            [(0, ROWS - 1), (1, ROWS - 1), (2, ROWS - 1), (3, ROWS - 1)]
        );
    }

    #[test]
    fn test_interrupted_row_is_no_win() {
        let mut board = board();
        for col in [0, 1, 3, 4] {
            board.add_to_column(col, Y).unwrap();
        }
        board.add_to_column(2, R).unwrap();
        assert_eq!(board.check_winning_combination(), None);
    }

    #[test]
    fn test_right_diagonal_win() {
        // /
        let mut board = board();
        board.add_to_column(0, R).unwrap();
        board.add_to_column(1, Y).unwrap();
        board.add_to_column(1, R).unwrap();
        board.add_to_column(2, Y).unwrap();
        board.add_to_column(2, Y).unwrap();
        board.add_to_column(2, R).unwrap();
        board.add_to_column(3, Y).unwrap();
        board.add_to_column(3, Y).unwrap();
        board.add_to_column(3, Y).unwrap();
        assert_eq!(board.check_winning_combination(), None);
        board.add_to_column(3, R).unwrap();
        let run = board.check_winning_combination().unwrap();
        assert_eq!(run.tile, R);
        assert_eq!(run.direction, Direction::RightDiagonal);
    }

    #[test]
    fn test_left_diagonal_win() {
        // \
        let mut board = board();
        board.add_to_column(6, R).unwrap();
        board.add_to_column(5, Y).unwrap();
        board.add_to_column(5, R).unwrap();
        board.add_to_column(4, Y).unwrap();
        board.add_to_column(4, Y).unwrap();
        board.add_to_column(4, R).unwrap();
        board.add_to_column(3, Y).unwrap();
        board.add_to_column(3, Y).unwrap();
        board.add_to_column(3, Y).unwrap();
        assert_eq!(board.check_winning_combination(), None);
        let row = board.add_to_column(3, R).unwrap();
        let run = board.check_winning_combination().unwrap();
        assert_eq!(run.tile, R);
        assert_eq!(run.direction, Direction::LeftDiagonal);
        assert_eq!(board.winning_run_through(3, row), Some(run));
    }

    #[test]
    fn test_local_check_finds_middle_of_row() {
        let mut board = board();
        for col in [0, 1, 3] {
            board.add_to_column(col, R).unwrap();
        }
        let row = board.add_to_column(2, R).unwrap();
        let run = board.winning_run_through(2, row).unwrap();
        assert_eq!(run.cells[0], (0, ROWS - 1));
        assert_eq!(board.winning_run_through(2, 0), None);
    }

    #[test]
    fn test_play_outcomes() {
        let mut board = board();
        for _ in 0..3 {
            assert_eq!(board.play(5, Y).unwrap(), Outcome::Continue);
        }
        assert!(matches!(board.play(5, Y).unwrap(), Outcome::Win(run) if run.tile == Y));
    }

    #[test]
    fn test_play_draw() {
        // Columns alternate in blocks of two rows so no four line up.
        let mut board = Board::<4, 4>::new().unwrap();
        let pattern = [[Y, Y, R, R], [R, R, Y, Y], [Y, Y, R, R], [R, R, Y, Y]];
        let mut last = Outcome::Continue;
        for (col, tiles) in pattern.iter().enumerate() {
            for &tile in tiles {
                last = board.play(col, tile).unwrap();
            }
        }
        assert_eq!(last, Outcome::Draw);
        assert!(board.is_full());
        assert_eq!(board.check_winning_combination(), None);
    }

    #[test]
    fn test_reset() {
        let mut board = board();
        board.add_to_column(2, R).unwrap();
        board.reset();
        assert_eq!(board, StandardBoard::new().unwrap());
    }

    #[test]
    fn test_display() {
        let mut board = Board::<4, 4>::new().unwrap();
        board.add_to_column(1, Y).unwrap();
        board.add_to_column(1, R).unwrap();
        let expected = "#-0--1--2--3-#\n\
                        | .  .  .  . |\n\
                        | .  .  .  . |\n\
                        | .  R  .  . |\n\
                        | .  Y  .  . |\n\
                        #------------#\n";
        assert_eq!(board.to_string(), expected);
    }
}

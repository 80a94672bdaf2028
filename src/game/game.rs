use std::io::{BufRead, Write};

use crate::game::{
    board::Board,
    components::{Outcome, Players, TileType},
    error::{Error, GameResult, WrongMove},
    input::Input,
};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    Quit,
}

/// Game manager struct.
#[derive(Debug)]
pub struct Game<const W: usize, const H: usize> {
    board: Board<W, H>,
    players: Players,
    finished: bool,
}

impl<const W: usize, const H: usize> Game<W, H> {
    /// Create a new game manager instance with one player per tile in
    /// `TileType::PLAYERS`.
    ///
    /// # Errors
    ///
    /// Returns an error if the height or width constants are smaller than 4.
    pub fn new() -> GameResult<Self> {
        Self::with_players(Players::from_tiles(&TileType::PLAYERS)?)
    }

    /// Create a game with a custom player set.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if the height or width constants are
    /// smaller than 4.
    pub fn with_players(players: Players) -> GameResult<Self> {
        Ok(Self {
            board: Board::new()?,
            players,
            finished: false,
        })
    }

    /// The board of the current round.
    pub fn board(&self) -> &Board<W, H> {
        &self.board
    }

    /// The players and their scores.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Let the active player drop a tile in `col`.
    ///
    /// The turn passes to the next player only on `Outcome::Continue`. A win
    /// is credited to the active player, who stays active so the caller can
    /// announce them.
    ///
    /// # Errors
    ///
    /// A wrong move leaves the board and the active player unchanged.
    ///
    /// Returns `WrongMove::RoundOver` once the round was won or drawn, until
    /// `new_round` is called.
    pub fn play_turn(&mut self, col: usize) -> GameResult<Outcome> {
        if self.finished {
            return Err(WrongMove::RoundOver.into());
        }
        let outcome = self.board.play(col, self.players.active().tile)?;
        match outcome {
            Outcome::Continue => self.players.advance(),
            Outcome::Win(_) => {
                self.players.scored();
                self.finished = true;
            }
            Outcome::Draw => self.finished = true,
        }
        Ok(outcome)
    }

    /// Empty the board and hand the first move to the next player in line.
    pub fn new_round(&mut self) {
        self.board.reset();
        self.finished = false;
        self.players.next_round();
    }

    /// Play one round, reading commands from `input`.
    fn play_round<R: BufRead, O: Write>(
        &mut self,
        input: &mut R,
        output: &mut O,
    ) -> GameResult<RoundEnd> {
        log::info!("starting round, {} begins", self.players.active());
        loop {
            write!(output, "{}", self.board)?;
            writeln!(
                output,
                "Player {} turn (number 0 to {}, for every column):",
                self.players.active(),
                W - 1
            )?;

            let col = match Input::read_from(input) {
                Ok(Input::Col(col)) => col,
                Ok(Input::Quit) => return Ok(RoundEnd::Quit),
                Ok(Input::Help) => {
                    writeln!(
                        output,
                        "Place a piece in a column by typing a number between 0 and {}",
                        W - 1
                    )?;
                    writeln!(output, "Type quit to stop the round")?;
                    continue;
                }
                Ok(i) => {
                    writeln!(output, "Try again (invalid position): {i:?}")?;
                    continue;
                }
                Err(Error::InvalidInput(s)) => {
                    writeln!(output, "Try again (invalid position): {s:?}")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match self.play_turn(col) {
                Ok(Outcome::Continue) => (),
                Ok(Outcome::Win(run)) => {
                    write!(output, "{}", self.board)?;
                    writeln!(output, "Player {} won", self.players.active())?;
                    log::info!("{} won with {:?}", self.players.active(), run.cells);
                    return Ok(RoundEnd::Finished);
                }
                Ok(Outcome::Draw) => {
                    write!(output, "{}", self.board)?;
                    writeln!(output, "Draw")?;
                    log::info!("round ended in a draw");
                    return Ok(RoundEnd::Finished);
                }
                Err(Error::WrongMove(e)) => {
                    log::debug!("rejected move: {e}");
                    writeln!(output, "Try again (wrong move): {e}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn write_scores<O: Write>(&self, output: &mut O) -> GameResult<()> {
        let scores: Vec<String> = self
            .players
            .iter()
            .map(|p| format!("{}'s score: {}", p, p.score))
            .collect();
        writeln!(output, "\n{}", scores.join("\t"))?;
        Ok(())
    }

    /// Run the game until the players quit or input ends.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading input or writing output fails.
    pub fn run<R: BufRead, O: Write>(&mut self, input: &mut R, output: &mut O) -> GameResult<()> {
        let names: Vec<&str> = self.players.iter().map(|p| p.name.as_str()).collect();
        writeln!(output, "Starting game with players: {}", names.join(", "))?;

        loop {
            if self.play_round(input, output)? == RoundEnd::Quit {
                break;
            }
            self.write_scores(output)?;
            self.new_round();

            loop {
                writeln!(output, "Start new round? [Y/n]\t(type \"help\" for help page)")?;
                match Input::read_from(input) {
                    Ok(Input::Enter) | Ok(Input::Yes) => break,
                    Ok(Input::No) | Ok(Input::Quit) => return Ok(()),
                    Ok(Input::Help) => {
                        writeln!(output, "Commands")?;
                        writeln!(output, "  help\t\t\tshow this page")?;
                        writeln!(output, "  yes\t\t\tstart a new round")?;
                        writeln!(output, "  no\t\t\tquit")?;
                        writeln!(output, "  quit\t\t\tquit")?;
                    }
                    Ok(_) | Err(Error::InvalidInput(_)) => writeln!(output, "Invalid")?,
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(())
    }
}

use std::{io::BufRead, str::FromStr};

use super::error::{Error, GameResult};

/// The different types of io input the game can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A zero indexed column.
    Col(usize),
    /// An empty line.
    Enter,
    /// Confirm.
    Yes,
    /// Decline.
    No,
    /// Stop the round or the game. Also produced on end of input.
    Quit,
    /// Show the help page.
    Help,
}

impl Input {
    /// Read and parse one line.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails and `Error::InvalidInput` if the
    /// line is not a command.
    pub fn read_from<R: BufRead>(reader: &mut R) -> GameResult<Self> {
        let mut buf = String::new();
        if reader.read_line(&mut buf)? == 0 {
            return Ok(Self::Quit);
        }
        Self::from_str(&buf)
    }
}

impl FromStr for Input {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "" => Ok(Self::Enter),
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            "stop" | "exit" | "quit" | "s" | "e" | "q" => Ok(Self::Quit),
            "help" | "h" | "?" => Ok(Self::Help),
            col if !col.is_empty() && col.bytes().all(|b| b.is_ascii_digit()) => col
                .parse::<usize>()
                .map(Self::Col)
                .map_err(|_| Error::InvalidInput(col.to_string())),
            str => Err(Error::InvalidInput(str.to_string())),
        }
    }
}

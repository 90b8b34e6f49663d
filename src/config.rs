use crate::error::Error;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fmt;
use std::str::FromStr;

pub const USAGE: &str = "Usage: games [chess|tictactoe] [--seed <number>]";

/// Which game to play.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum GameKind {
    Chess,
    TicTacToe,
}

impl FromStr for GameKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "chess" => Ok(GameKind::Chess),
            "2" | "tictactoe" | "tic-tac-toe" | "ttt" => Ok(GameKind::TicTacToe),
            _ => Err(Error::InvalidArgument { arg: s.to_owned() }),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GameKind::Chess => write!(f, "Chess"),
            GameKind::TicTacToe => write!(f, "Tic-Tac-Toe"),
        }
    }
}

/// Command-line options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Play this game once instead of showing the menu.
    pub game: Option<GameKind>,
    /// Seed for the coin toss deciding who starts at Tic-Tac-Toe.
    pub seed: Option<u64>,
}

impl Options {
    /// Parse the arguments following the program name.
    ///
    /// ```
    /// use games::{GameKind, Options};
    ///
    /// let options = Options::parse(vec!["tictactoe".to_owned(), "--seed".to_owned(), "3".to_owned()]).unwrap();
    /// assert_eq!(options.game, Some(GameKind::TicTacToe));
    /// assert_eq!(options.seed, Some(3));
    /// ```
    pub fn parse<I>(args: I) -> Result<Options, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().ok_or_else(|| Error::InvalidArgument {
                        arg: "--seed requires a number".to_owned(),
                    })?;
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| Error::InvalidArgument { arg: value.clone() })?;
                    options.seed = Some(seed);
                }
                _ if options.game.is_none() && !arg.starts_with('-') => {
                    options.game = Some(arg.parse()?);
                }
                _ => return Err(Error::InvalidArgument { arg: arg.clone() }),
            }
        }

        Ok(options)
    }

    /// The random number generator for this run.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }
}

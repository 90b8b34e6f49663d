use crate::error::Error;
use crate::piece::Piece;
use crate::square::Square;
use std::fmt;
use std::str::FromStr;

/// Represent a ChessMove in memory
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Eq, PartialOrd, Ord, PartialEq, Default, Debug, Hash)]
pub struct ChessMove {
    source: Square,
    dest: Square,
    promotion: Option<Piece>,
}

impl ChessMove {
    /// Create a new chess move, given a source `Square`, a destination `Square`, and an optional
    /// promotion `Piece`
    #[inline]
    pub fn new(source: Square, dest: Square, promotion: Option<Piece>) -> ChessMove {
        ChessMove {
            source,
            dest,
            promotion,
        }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }

    /// Get the promotion piece (maybe).
    #[inline]
    pub fn get_promotion(&self) -> Option<Piece> {
        self.promotion
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.promotion {
            None => write!(f, "{}{}", self.source, self.dest),
            Some(x) => write!(f, "{}{}{}", self.source, self.dest, x),
        }
    }
}

impl FromStr for ChessMove {
    type Err = Error;

    /// Parse a move such as `e2e4` or `e7e8q`.
    ///
    /// ```
    /// use games::{ChessMove, Piece, Square};
    ///
    /// let mv: ChessMove = "e7e8q".parse().expect("valid move");
    /// assert_eq!(mv.get_source(), "e7".parse::<Square>().unwrap());
    /// assert_eq!(mv.get_promotion(), Some(Piece::Queen));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMove {
            input: s.to_owned(),
        };
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 && chars.len() != 5 {
            return Err(invalid());
        }

        let source: String = chars[0..2].iter().collect();
        let dest: String = chars[2..4].iter().collect();
        let source = Square::from_str(&source).map_err(|_| invalid())?;
        let dest = Square::from_str(&dest).map_err(|_| invalid())?;

        let promotion = match chars.get(4) {
            None => None,
            Some('q') => Some(Piece::Queen),
            Some('r') => Some(Piece::Rook),
            Some('n') => Some(Piece::Knight),
            Some('b') => Some(Piece::Bishop),
            Some(_) => return Err(invalid()),
        };

        Ok(ChessMove::new(source, dest, promotion))
    }
}

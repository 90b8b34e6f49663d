use crate::color::Color;
use crate::error::Error;
use std::fmt;

/// Represent a chess piece as a very simple enum
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Ord, PartialOrd, Copy, Clone, Debug, Hash)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How many piece types are there?
pub const NUM_PIECES: usize = 6;

/// An array representing each piece type, in order of ascending value.
pub const ALL_PIECES: [Piece; NUM_PIECES] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

/// How many ways can I promote?
pub const NUM_PROMOTION_PIECES: usize = 4;

/// What pieces can I promote to?
pub const PROMOTION_PIECES: [Piece; NUM_PROMOTION_PIECES] =
    [Piece::Queen, Piece::Knight, Piece::Rook, Piece::Bishop];

impl Piece {
    /// Convert the `Piece` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The uppercase letter of this piece.
    #[inline]
    pub fn to_char(&self) -> char {
        match *self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        }
    }

    /// Convert a piece with a color to a string.  White pieces are uppercase, black pieces are
    /// lowercase.
    ///
    /// ```
    /// use games::{Piece, Color};
    ///
    /// assert_eq!(Piece::King.to_string(Color::White), "K");
    /// assert_eq!(Piece::Knight.to_string(Color::Black), "n");
    /// ```
    #[inline]
    pub fn to_string(&self, color: Color) -> String {
        let piece = format!("{}", self);
        match color {
            Color::White => piece.to_uppercase(),
            Color::Black => piece,
        }
    }

    /// The two letter name printed on the board, color first (`WP`, `BK`, ...).
    ///
    /// ```
    /// use games::{Piece, Color};
    ///
    /// assert_eq!(Piece::Queen.name(Color::Black), "BQ");
    /// ```
    #[inline]
    pub fn name(&self, color: Color) -> String {
        format!("{}{}", color.to_char(), self.to_char())
    }

    /// Parse a piece letter, in either case.
    #[inline]
    pub fn from_char(c: char) -> Result<Piece, Error> {
        match c.to_ascii_uppercase() {
            'P' => Ok(Piece::Pawn),
            'N' => Ok(Piece::Knight),
            'B' => Ok(Piece::Bishop),
            'R' => Ok(Piece::Rook),
            'Q' => Ok(Piece::Queen),
            'K' => Ok(Piece::King),
            _ => Err(Error::InvalidPiece { piece: c }),
        }
    }

    /// Does this piece slide along rays until it is blocked?
    #[inline]
    pub fn is_slider(&self) -> bool {
        matches!(*self, Piece::Bishop | Piece::Rook | Piece::Queen)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char().to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip_through_from_char() {
        for piece in ALL_PIECES.iter() {
            assert_eq!(Piece::from_char(piece.to_char()).unwrap(), *piece);
        }
        assert!(Piece::from_char('x').is_err());
    }

    #[test]
    fn only_bishop_rook_and_queen_slide() {
        let sliders: Vec<Piece> = ALL_PIECES.iter().cloned().filter(Piece::is_slider).collect();
        assert_eq!(sliders, vec![Piece::Bishop, Piece::Rook, Piece::Queen]);
    }
}

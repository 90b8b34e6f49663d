use crate::board::Board;
use crate::color::Color;
use crate::error::Error;
use crate::file::{File, ALL_FILES};
use crate::piece::Piece;
use crate::rank::{Rank, ALL_RANKS};
use crate::square::Square;

use std::str::FromStr;

impl Board {
    /// Write the piece placement and side to move as the first two FEN fields.
    ///
    /// ```
    /// use games::Board;
    ///
    /// assert_eq!(
    ///     Board::default().to_fen(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"
    /// );
    /// ```
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for rank in ALL_RANKS.iter().rev() {
            let mut count = 0;
            for file in ALL_FILES.iter() {
                match self[Square::make_square(*rank, *file)] {
                    Some((piece, color)) => {
                        if count != 0 {
                            fen.push_str(&count.to_string());
                            count = 0;
                        }
                        fen.push_str(&piece.to_string(color));
                    }
                    None => count += 1,
                }
            }
            if count != 0 {
                fen.push_str(&count.to_string());
            }
            if *rank != Rank::First {
                fen.push('/');
            }
        }
        fen.push_str(match self.side_to_move() {
            Color::White => " w",
            Color::Black => " b",
        });
        fen
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Read a FEN string.  Only the placement and the side to move matter here; castling, en
    /// passant and the move clocks may follow but are ignored.
    ///
    /// ```
    /// use games::{Board, Color};
    ///
    /// let board: Board = "4k3/8/8/8/8/8/4P3/4K3 b KQkq - 0 1".parse().expect("valid fen");
    /// assert_eq!(board.side_to_move(), Color::Black);
    /// assert!("4k3/8/8 w".parse::<Board>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFen {
            fen: value.to_string(),
        };

        let mut tokens = value.split_whitespace();
        let placement = tokens.next().ok_or_else(invalid)?;
        let side = match tokens.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(_) => return Err(invalid()),
        };

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(invalid());
        }

        let mut board = Board::empty(side);
        for (row, rank) in rows.iter().zip(ALL_RANKS.iter().rev()) {
            let mut file = 0;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(invalid());
                    }
                    file += skip as usize;
                } else {
                    if file >= 8 {
                        return Err(invalid());
                    }
                    let piece = Piece::from_char(c).map_err(|_| invalid())?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    board.set_piece(
                        Square::make_square(*rank, File::from_index(file)),
                        piece,
                        color,
                    );
                    file += 1;
                }
            }
            if file != 8 {
                return Err(invalid());
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_from_fen() {
        let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(board, Board::default());
    }

    #[test]
    fn writes_what_it_reads() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b";
        assert_eq!(Board::from_str(fen).unwrap().to_fen(), fen);
    }

    #[test]
    fn rejects_bad_fen() {
        assert!(Board::from_str("").is_err());
        assert!(Board::from_str("8/8/8/8/8/8/8/9 w").is_err());
        assert!(Board::from_str("8/8/8/8/8/8/8/7 w").is_err());
        assert!(Board::from_str("8/8/8/8/8/8/8/7x w").is_err());
        assert!(Board::from_str("8/8/8/8/8/8/8/8 x").is_err());
        assert!(Board::from_str("8/8/8/8/8/8/8/8p w").is_err());
    }
}

use crate::chess_move::ChessMove;
use crate::color::{Color, ALL_COLORS};
use crate::error::Error;
use crate::file::ALL_FILES;
use crate::movegen::pseudo_legal_dests;
use crate::piece::{Piece, PROMOTION_PIECES};
use crate::rank::ALL_RANKS;
use crate::square::{all_squares, Square, NUM_SQUARES};
use log::debug;
use std::fmt;
use std::ops::Index;

/// What is the status of this board position?
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum BoardStatus {
    Ongoing,
    /// A king has been taken.  Check is never detected, so this is how a game of chess ends.
    KingCaptured { winner: Color },
}

/// A representation of a chess board: an 8x8 grid of optional pieces and the side to move.
///
/// White starts on the first two ranks (`y = 0` and `y = 1`), black on the last two.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    pieces: [Option<(Piece, Color)>; NUM_SQUARES],
    side_to_move: Color,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// Construct a board with no pieces on it.
    ///
    /// ```
    /// use games::{Board, Color, Piece, Square};
    ///
    /// let mut board = Board::empty(Color::White);
    /// let e4: Square = "e4".parse().unwrap();
    /// board.set_piece(e4, Piece::Knight, Color::Black);
    /// assert_eq!(board[e4], Some((Piece::Knight, Color::Black)));
    /// ```
    pub fn empty(side_to_move: Color) -> Board {
        Board {
            pieces: [None; NUM_SQUARES],
            side_to_move,
        }
    }

    /// Who's turn is it?
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// What piece is on a particular `Square`?  Is there even one?
    ///
    /// ```
    /// use games::{Board, Piece, Square};
    ///
    /// let board = Board::default();
    /// assert_eq!(board.piece_on(Square::from_coordinates(3, 0).unwrap()), Some(Piece::Queen));
    /// assert_eq!(board.piece_on(Square::from_coordinates(3, 3).unwrap()), None);
    /// ```
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.pieces[square.to_index()].map(|(piece, _)| piece)
    }

    /// What color piece is on a particular square?
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.pieces[square.to_index()].map(|(_, color)| color)
    }

    /// Put a piece on a square, replacing whatever was there.
    pub fn set_piece(&mut self, square: Square, piece: Piece, color: Color) -> &mut Self {
        self.pieces[square.to_index()] = Some((piece, color));
        self
    }

    /// Remove whatever is on a square.
    pub fn clear_square(&mut self, square: Square) -> &mut Self {
        self.pieces[square.to_index()] = None;
        self
    }

    /// Set the side to move.
    pub fn set_side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    /// Where is the king of this color, if it is still on the board?
    pub fn king_square(&self, color: Color) -> Option<Square> {
        all_squares().find(|sq| self[*sq] == Some((Piece::King, color)))
    }

    /// Every occupied square together with what stands on it.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece, Color)> + '_ {
        all_squares().filter_map(move |sq| self[sq].map(|(piece, color)| (sq, piece, color)))
    }

    /// Is the game over?
    ///
    /// ```
    /// use games::{Board, BoardStatus};
    ///
    /// assert_eq!(Board::default().status(), BoardStatus::Ongoing);
    /// ```
    pub fn status(&self) -> BoardStatus {
        let me = self.side_to_move;
        if self.king_square(me).is_none() {
            BoardStatus::KingCaptured { winner: !me }
        } else if self.king_square(!me).is_none() {
            BoardStatus::KingCaptured { winner: me }
        } else {
            BoardStatus::Ongoing
        }
    }

    /// Would moving from `source` to `dest` put a pawn on its last rank?
    pub fn is_promotion(&self, source: Square, dest: Square) -> bool {
        match self[source] {
            Some((Piece::Pawn, color)) => dest.get_rank() == color.to_their_backrank(),
            _ => false,
        }
    }

    /// Check a move against the side to move and the movement pattern of the piece, explaining
    /// why it is rejected.
    ///
    /// The mover's own king may be left under attack: only pseudo-legality is verified.
    pub fn check_move(&self, m: ChessMove) -> Result<(), Error> {
        let source = m.get_source();
        let color = match self.color_on(source) {
            None => {
                return Err(Error::EmptySquare {
                    square: source.to_string(),
                })
            }
            Some(color) => color,
        };
        if color != self.side_to_move {
            return Err(Error::NotYourPiece {
                square: source.to_string(),
            });
        }

        if !pseudo_legal_dests(self, source).contains(&m.get_dest()) {
            return Err(Error::IllegalMove);
        }

        let promotes = self.is_promotion(source, m.get_dest());
        match m.get_promotion() {
            Some(piece) if promotes && PROMOTION_PIECES.contains(&piece) => Ok(()),
            None if !promotes => Ok(()),
            _ => Err(Error::IllegalMove),
        }
    }

    /// Is this move pseudo-legal for the side to move?
    ///
    /// ```
    /// use games::{Board, ChessMove};
    ///
    /// let board = Board::default();
    /// assert!(board.legal("e2e4".parse::<ChessMove>().unwrap()));
    /// assert!(!board.legal("e2e5".parse::<ChessMove>().unwrap()));
    /// // black has to wait for white
    /// assert!(!board.legal("e7e5".parse::<ChessMove>().unwrap()));
    /// ```
    #[inline]
    pub fn legal(&self, m: ChessMove) -> bool {
        self.check_move(m).is_ok()
    }

    /// Make a chess move onto a new board.
    ///
    /// The move is not validated; use `legal` or `check_move` first.
    ///
    /// ```
    /// use games::{Board, ChessMove, Color, Piece, Square};
    ///
    /// let board = Board::default().make_move_new("b1c3".parse::<ChessMove>().unwrap());
    /// assert_eq!(board.piece_on("c3".parse::<Square>().unwrap()), Some(Piece::Knight));
    /// assert_eq!(board.side_to_move(), Color::Black);
    /// ```
    #[inline]
    pub fn make_move_new(&self, m: ChessMove) -> Board {
        let mut result = *self;
        self.make_move(m, &mut result);
        result
    }

    /// Make a chess move onto an already allocated `Board`.
    pub fn make_move(&self, m: ChessMove, result: &mut Board) {
        *result = *self;
        let source = m.get_source();
        let dest = m.get_dest();

        if let Some((piece, color)) = self[source] {
            let placed = match m.get_promotion() {
                Some(promotion) if piece == Piece::Pawn => promotion,
                _ => piece,
            };
            if let Some((captured, captured_color)) = self[dest] {
                debug!(
                    "{} takes {} on {}",
                    piece.name(color),
                    captured.name(captured_color),
                    dest
                );
            }
            result.pieces[source.to_index()] = None;
            result.pieces[dest.to_index()] = Some((placed, color));
        }

        result.side_to_move = !self.side_to_move;
    }
}

impl Index<Square> for Board {
    type Output = Option<(Piece, Color)>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.pieces[index.to_index()]
    }
}

/// The standard starting position, white to move.
impl Default for Board {
    fn default() -> Board {
        let mut board = Board::empty(Color::White);
        for color in ALL_COLORS.iter() {
            for (file, piece) in ALL_FILES.iter().zip(BACK_RANK.iter()) {
                board.set_piece(
                    Square::make_square(color.to_my_backrank(), *file),
                    *piece,
                    *color,
                );
                board.set_piece(
                    Square::make_square(color.to_second_rank(), *file),
                    Piece::Pawn,
                    *color,
                );
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in ALL_RANKS.iter().rev() {
            write!(f, "{} ", rank.to_index())?;
            for file in ALL_FILES.iter() {
                match self[Square::make_square(*rank, *file)] {
                    Some((piece, color)) => write!(f, " {}", piece.name(color))?,
                    None => write!(f, " ..")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in ALL_FILES.iter() {
            write!(f, "  {}", file.to_index())?;
        }
        Ok(())
    }
}

use crate::board::{Board, BoardStatus};
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::piece::{Piece, PROMOTION_PIECES};
use crate::square::{all_squares, Square};
use arrayvec::ArrayVec;
use std::iter::ExactSizeIterator;

/// A queen in the middle of an empty board reaches 27 squares, the most any piece can.
pub const MAX_DESTS: usize = 27;

/// Every square one piece can reach from where it stands.
pub type DestList = ArrayVec<Square, MAX_DESTS>;

/// Unit steps along files and ranks, as `(dx, dy)`.
pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Unit steps along the diagonals.
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// A queen slides like a rook and a bishop.
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
];

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
];

/// Generate the pseudo-legal destinations (moves that *may* leave you in check) for the piece
/// standing on `src`.  An empty square has none.
///
/// ```
/// use games::{pseudo_legal_dests, Board, Square};
///
/// let board = Board::default();
/// let knight: Square = "g1".parse().unwrap();
/// let mut dests: Vec<String> = pseudo_legal_dests(&board, knight)
///     .iter()
///     .map(|sq| sq.to_string())
///     .collect();
/// dests.sort();
/// assert_eq!(dests, vec!["f3", "h3"]);
/// ```
pub fn pseudo_legal_dests(board: &Board, src: Square) -> DestList {
    let mut dests = DestList::new();
    if let Some((piece, color)) = board[src] {
        match piece {
            Piece::Pawn => pawn_dests(board, src, color, &mut dests),
            Piece::Knight => step_dests(board, src, color, &KNIGHT_DELTAS, &mut dests),
            Piece::Bishop => ray_dests(board, src, color, &BISHOP_DIRS, &mut dests),
            Piece::Rook => ray_dests(board, src, color, &ROOK_DIRS, &mut dests),
            Piece::Queen => ray_dests(board, src, color, &QUEEN_DIRS, &mut dests),
            Piece::King => step_dests(board, src, color, &KING_DELTAS, &mut dests),
        }
    }
    dests
}

/// Extend each ray until it runs off the board or hits a piece.  An enemy piece is a capture
/// and ends the ray; a friendly piece ends it one square earlier.
fn ray_dests(board: &Board, src: Square, color: Color, dirs: &[(i8, i8)], dests: &mut DestList) {
    for &(dx, dy) in dirs {
        let mut current = src.offset(dx, dy);
        while let Some(sq) = current {
            match board.color_on(sq) {
                None => dests.push(sq),
                Some(c) => {
                    if c != color {
                        dests.push(sq);
                    }
                    break;
                }
            }
            current = sq.offset(dx, dy);
        }
    }
}

fn step_dests(board: &Board, src: Square, color: Color, deltas: &[(i8, i8)], dests: &mut DestList) {
    for &(dx, dy) in deltas {
        if let Some(sq) = src.offset(dx, dy) {
            if board.color_on(sq) != Some(color) {
                dests.push(sq);
            }
        }
    }
}

/// Pawns step forward onto empty squares only (twice from their starting rank) and capture one
/// square diagonally forward.
fn pawn_dests(board: &Board, src: Square, color: Color, dests: &mut DestList) {
    let dy = color.forward();

    if let Some(one) = src.offset(0, dy) {
        if board[one].is_none() {
            dests.push(one);
            if src.get_rank() == color.to_second_rank() {
                if let Some(two) = one.offset(0, dy) {
                    if board[two].is_none() {
                        dests.push(two);
                    }
                }
            }
        }
    }

    for &dx in [-1, 1].iter() {
        if let Some(sq) = src.offset(dx, dy) {
            if board.color_on(sq) == Some(!color) {
                dests.push(sq);
            }
        }
    }
}

/// An iterator over every pseudo-legal move of the side to move.
///
/// Pawn moves onto the last rank are listed once per promotion piece.
///
/// ```
/// use games::{Board, MoveGen};
///
/// let movegen = MoveGen::new_pseudo_legal(&Board::default());
/// assert_eq!(movegen.len(), 20);
/// ```
pub struct MoveGen {
    moves: std::vec::IntoIter<ChessMove>,
}

impl MoveGen {
    /// Create a new `MoveGen` structure for the side to move on `board`.
    pub fn new_pseudo_legal(board: &Board) -> MoveGen {
        let color = board.side_to_move();
        let mut moves = Vec::new();

        for src in all_squares().filter(|sq| board.color_on(*sq) == Some(color)) {
            for &dest in pseudo_legal_dests(board, src).iter() {
                if board.is_promotion(src, dest) {
                    for promotion in PROMOTION_PIECES.iter() {
                        moves.push(ChessMove::new(src, dest, Some(*promotion)));
                    }
                } else {
                    moves.push(ChessMove::new(src, dest, None));
                }
            }
        }

        MoveGen {
            moves: moves.into_iter(),
        }
    }

    /// Count the positions reachable in exactly `depth` moves.  The search does not continue
    /// past a captured king.
    pub fn perft(board: &Board, depth: usize) -> usize {
        if depth == 0 {
            return 1;
        }
        if board.status() != BoardStatus::Ongoing {
            return 0;
        }

        let mut result = Board::empty(board.side_to_move());
        let mut count = 0;
        for m in MoveGen::new_pseudo_legal(board) {
            board.make_move(m, &mut result);
            count += MoveGen::perft(&result, depth - 1);
        }
        count
    }
}

impl ExactSizeIterator for MoveGen {
    fn len(&self) -> usize {
        self.moves.len()
    }
}

impl Iterator for MoveGen {
    type Item = ChessMove;

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.moves.size_hint()
    }

    fn next(&mut self) -> Option<ChessMove> {
        self.moves.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Rank;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn dests(board: &Board, s: &str) -> Vec<String> {
        let mut result: Vec<String> = pseudo_legal_dests(board, sq(s))
            .iter()
            .map(|d| d.to_string())
            .collect();
        result.sort();
        result
    }

    fn lone(piece: Piece, on: &str) -> Board {
        let mut board = Board::empty(Color::White);
        board.set_piece(sq(on), piece, Color::White);
        board
    }

    #[test]
    fn perft_from_the_start() {
        let board = Board::default();
        assert_eq!(MoveGen::perft(&board, 1), 20);
        assert_eq!(MoveGen::perft(&board, 2), 400);
        assert_eq!(MoveGen::perft(&board, 3), 8902);
    }

    #[test]
    fn empty_square_has_no_moves() {
        assert!(pseudo_legal_dests(&Board::default(), sq("e4")).is_empty());
    }

    #[test]
    fn queen_in_the_center_fills_the_list() {
        assert_eq!(dests(&lone(Piece::Queen, "d4"), "d4").len(), MAX_DESTS);
    }

    #[test]
    fn rook_rays_stop_at_pieces() {
        let mut board = lone(Piece::Rook, "a1");
        board
            .set_piece(sq("a4"), Piece::Pawn, Color::White)
            .set_piece(sq("c1"), Piece::Pawn, Color::Black);
        assert_eq!(dests(&board, "a1"), vec!["a2", "a3", "b1", "c1"]);
    }

    #[test]
    fn bishop_rays_stop_at_pieces() {
        let mut board = lone(Piece::Bishop, "c1");
        board
            .set_piece(sq("d2"), Piece::Pawn, Color::White)
            .set_piece(sq("a3"), Piece::Knight, Color::Black);
        assert_eq!(dests(&board, "c1"), vec!["a3", "b2"]);
    }

    #[test]
    fn knight_offsets_are_correct() {
        assert_eq!(
            dests(&lone(Piece::Knight, "d4"), "d4"),
            vec!["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"]
        );
        assert_eq!(dests(&lone(Piece::Knight, "a1"), "a1"), vec!["b3", "c2"]);
        assert_eq!(dests(&lone(Piece::Knight, "h8"), "h8"), vec!["f7", "g6"]);
    }

    #[test]
    fn king_steps_one_square_each_way() {
        assert_eq!(
            dests(&lone(Piece::King, "e4"), "e4"),
            vec!["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"]
        );
        assert_eq!(dests(&lone(Piece::King, "h1"), "h1"), vec!["g1", "g2", "h2"]);
    }

    #[test]
    fn king_cannot_take_its_own_pieces() {
        let board = Board::default();
        assert!(dests(&board, "e1").is_empty());
        assert!(dests(&board, "d1").is_empty());
    }

    #[test]
    fn pawn_pushes_and_captures() {
        let mut board = Board::default();
        assert_eq!(dests(&board, "e2"), vec!["e3", "e4"]);
        assert_eq!(dests(&board, "e7"), vec!["e5", "e6"]);

        board.set_piece(sq("e3"), Piece::Knight, Color::Black);
        board.set_piece(sq("d3"), Piece::Knight, Color::Black);
        board.set_piece(sq("f3"), Piece::Knight, Color::White);
        assert_eq!(dests(&board, "e2"), vec!["d3"]);
    }

    #[test]
    fn pawn_double_step_needs_both_squares_empty() {
        let mut board = Board::default();
        board.set_piece(sq("a4"), Piece::Knight, Color::Black);
        assert_eq!(dests(&board, "a2"), vec!["a3"]);
    }

    #[test]
    fn pawn_only_double_steps_from_its_start_rank() {
        let mut board = lone(Piece::Pawn, "c3");
        board.set_piece(sq("h6"), Piece::Pawn, Color::Black);
        assert_eq!(dests(&board, "c3"), vec!["c4"]);
        assert_eq!(dests(&board, "h6"), vec!["h5"]);
    }

    #[test]
    fn pawns_on_the_edge_do_not_look_off_the_board() {
        let board = lone(Piece::Pawn, "h8");
        assert!(dests(&board, "h8").is_empty());
        let board = lone(Piece::Pawn, "a2");
        assert_eq!(dests(&board, "a2"), vec!["a3", "a4"]);
    }

    #[test]
    fn promotions_expand_to_four_moves() {
        let mut board = lone(Piece::Pawn, "g7");
        board.set_piece(sq("h8"), Piece::Rook, Color::Black);
        let moves: Vec<ChessMove> = MoveGen::new_pseudo_legal(&board).collect();
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.get_promotion().is_some()));
        assert!(moves.iter().all(|m| board.legal(*m)));
    }

    #[test]
    fn only_the_side_to_move_generates() {
        let mut board = Board::default();
        board.set_side_to_move(Color::Black);
        assert!(MoveGen::new_pseudo_legal(&board).all(|m| m.get_source().get_rank() >= Rank::Seventh));
    }
}

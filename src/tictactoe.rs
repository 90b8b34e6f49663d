use crate::error::Error;
use log::debug;
use rand::Rng;
use std::fmt;
use std::ops::Not;

/// The mark a Tic-Tac-Toe player puts on the table.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Mark {
    X,
    O,
}

impl Not for Mark {
    type Output = Mark;

    #[inline]
    fn not(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Mark {
    /// Flip a coin for who goes first.
    pub fn toss<R: Rng + ?Sized>(rng: &mut R) -> Mark {
        if rng.gen_bool(0.5) {
            Mark::X
        } else {
            Mark::O
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Where does the game stand after a mark has been placed?
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Outcome {
    Ongoing,
    Winner(Mark),
    Draw,
}

/// Every row, column and diagonal, as `(row, column)` cells.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A 3x3 table and whose turn it is.  Rows are counted from the top, columns from the left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicTacToe {
    cells: [[Option<Mark>; 3]; 3],
    turn: Mark,
}

impl TicTacToe {
    /// An empty table, `first` to play.
    pub fn new(first: Mark) -> TicTacToe {
        TicTacToe {
            cells: [[None; 3]; 3],
            turn: first,
        }
    }

    /// An empty table where a coin toss decides who starts.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> TicTacToe {
        TicTacToe::new(Mark::toss(rng))
    }

    /// Clear the table for another round.
    pub fn reset(&mut self, first: Mark) {
        self.cells = [[None; 3]; 3];
        self.turn = first;
    }

    /// Who places the next mark?
    #[inline]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// What is in a cell?
    pub fn cell(&self, row: usize, column: usize) -> Result<Option<Mark>, Error> {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .ok_or(Error::OutOfBounds {
                x: column as i64,
                y: row as i64,
            })
    }

    /// Put the current player's mark in a cell.  The turn passes to the other player unless
    /// this ended the game.
    ///
    /// ```
    /// use games::{Mark, Outcome, TicTacToe};
    ///
    /// let mut game = TicTacToe::new(Mark::X);
    /// assert_eq!(game.place(1, 1).unwrap(), Outcome::Ongoing);
    /// assert_eq!(game.turn(), Mark::O);
    /// assert!(game.place(1, 1).is_err());
    /// assert!(game.place(3, 0).is_err());
    /// ```
    pub fn place(&mut self, row: usize, column: usize) -> Result<Outcome, Error> {
        if self.outcome() != Outcome::Ongoing {
            return Err(Error::GameOver);
        }
        if self.cell(row, column)?.is_some() {
            return Err(Error::CellOccupied);
        }

        self.cells[row][column] = Some(self.turn);
        debug!("{} placed on ({}, {})", self.turn, row, column);

        let outcome = self.outcome();
        if outcome == Outcome::Ongoing {
            self.turn = !self.turn;
        }
        Ok(outcome)
    }

    /// Does any row, column or diagonal hold three equal marks?
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = *line;
            match self.cells[a.0][a.1] {
                Some(m) if self.cells[b.0][b.1] == Some(m) && self.cells[c.0][c.1] == Some(m) => {
                    Some(m)
                }
                _ => None,
            }
        })
    }

    /// Are all nine cells taken?
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(mark) => Outcome::Winner(mark),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "_______")?;
        for row in self.cells.iter() {
            write!(f, "|")?;
            for cell in row.iter() {
                match cell {
                    Some(mark) => write!(f, "{}|", mark)?,
                    None => write!(f, " |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "_______")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn play(game: &mut TicTacToe, cells: &[(usize, usize)]) -> Outcome {
        let mut outcome = Outcome::Ongoing;
        for &(row, column) in cells {
            outcome = game.place(row, column).unwrap();
        }
        outcome
    }

    #[test]
    fn row_win() {
        let mut game = TicTacToe::new(Mark::X);
        let outcome = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(outcome, Outcome::Winner(Mark::X));
        assert_eq!(game.turn(), Mark::X);
        match game.place(2, 2) {
            Err(Error::GameOver) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn column_win() {
        let mut game = TicTacToe::new(Mark::O);
        let outcome = play(&mut game, &[(0, 2), (0, 0), (1, 2), (1, 1), (2, 2)]);
        assert_eq!(outcome, Outcome::Winner(Mark::O));
    }

    #[test]
    fn anti_diagonal_win() {
        let mut game = TicTacToe::new(Mark::X);
        let outcome = play(&mut game, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
        assert_eq!(outcome, Outcome::Winner(Mark::X));
    }

    #[test]
    fn full_table_without_a_line_is_a_draw() {
        let mut game = TicTacToe::new(Mark::X);
        // X O X
        // X O O
        // O X X
        let outcome = play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(outcome, Outcome::Draw);
        assert!(game.is_full());
    }

    #[test]
    fn occupied_and_out_of_range_cells() {
        let mut game = TicTacToe::new(Mark::X);
        game.place(2, 1).unwrap();
        match game.place(2, 1) {
            Err(Error::CellOccupied) => {}
            other => panic!("unexpected {:?}", other),
        }
        match game.place(0, 3) {
            Err(Error::OutOfBounds { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(game.turn(), Mark::O);
    }

    #[test]
    fn reset_clears_the_table() {
        let mut game = TicTacToe::new(Mark::X);
        game.place(0, 0).unwrap();
        game.reset(Mark::O);
        assert_eq!(game, TicTacToe::new(Mark::O));
    }

    #[test]
    fn both_players_get_to_start() {
        let mut rng = SmallRng::seed_from_u64(7);
        let firsts: Vec<Mark> = (0..64).map(|_| TicTacToe::random(&mut rng).turn()).collect();
        assert!(firsts.contains(&Mark::X));
        assert!(firsts.contains(&Mark::O));
    }

    #[test]
    fn display_draws_the_table() {
        let mut game = TicTacToe::new(Mark::X);
        play(&mut game, &[(0, 0), (1, 1)]);
        assert_eq!(
            game.to_string(),
            "_______\n|X| | |\n_______\n| |O| |\n_______\n| | | |\n_______\n"
        );
    }
}

use crate::board::{Board, BoardStatus};
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::error::Error;
use log::{debug, info};
use std::fmt;
use std::str::FromStr;

/// Contains all actions supported within the game
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Eq)]
pub enum Action {
    MakeMove(ChessMove),
    OfferDraw(Color),
    AcceptDraw,
    Resign(Color),
}

/// What was the result of this game?
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum GameResult {
    /// White took the black king.
    WhiteWins,
    WhiteResigns,
    /// Black took the white king.
    BlackWins,
    BlackResigns,
    DrawAccepted,
}

impl GameResult {
    /// Who won, if anybody?
    pub fn winner(&self) -> Option<Color> {
        match *self {
            GameResult::WhiteWins | GameResult::BlackResigns => Some(Color::White),
            GameResult::BlackWins | GameResult::WhiteResigns => Some(Color::Black),
            GameResult::DrawAccepted => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GameResult::WhiteWins => write!(f, "White captured the king. White wins!"),
            GameResult::BlackWins => write!(f, "Black captured the king. Black wins!"),
            GameResult::WhiteResigns => write!(f, "White resigns. Black wins!"),
            GameResult::BlackResigns => write!(f, "Black resigns. White wins!"),
            GameResult::DrawAccepted => write!(f, "Draw agreed."),
        }
    }
}

/// A game of chess between two players: the starting position plus everything that happened
/// since.
#[derive(Clone, Debug)]
pub struct Game {
    start_pos: Board,
    moves: Vec<Action>,
}

impl Game {
    /// Create a new `Game` with the initial position.
    ///
    /// ```
    /// use games::{Game, Board};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.current_position(), Board::default());
    /// ```
    pub fn new() -> Game {
        Game::new_with_board(Board::default())
    }

    /// Create a new `Game` with a specific starting position.
    pub fn new_with_board(board: Board) -> Game {
        Game {
            start_pos: board,
            moves: vec![],
        }
    }

    /// Get all actions made in this game (moves, draw offers, resignations)
    pub fn actions(&self) -> &Vec<Action> {
        &self.moves
    }

    /// What is the status of this game?
    ///
    /// ```
    /// use games::Game;
    ///
    /// let game = Game::new();
    /// assert!(game.result().is_none());
    /// ```
    pub fn result(&self) -> Option<GameResult> {
        match self.current_position().status() {
            BoardStatus::KingCaptured {
                winner: Color::White,
            } => Some(GameResult::WhiteWins),
            BoardStatus::KingCaptured {
                winner: Color::Black,
            } => Some(GameResult::BlackWins),
            BoardStatus::Ongoing => match self.moves.last() {
                Some(Action::AcceptDraw) => Some(GameResult::DrawAccepted),
                Some(Action::Resign(Color::White)) => Some(GameResult::WhiteResigns),
                Some(Action::Resign(Color::Black)) => Some(GameResult::BlackResigns),
                _ => None,
            },
        }
    }

    /// Get the current position on the board from the `Game` object.
    pub fn current_position(&self) -> Board {
        let mut copy = self.start_pos;

        for x in self.moves.iter() {
            if let Action::MakeMove(m) = *x {
                copy = copy.make_move_new(m);
            }
        }

        copy
    }

    /// Make a chess move on the board.
    ///
    /// ```
    /// use games::{Game, ChessMove, Color};
    ///
    /// let mut game = Game::new();
    /// game.make_move("e2e4".parse::<ChessMove>().unwrap()).expect("white moves first");
    /// assert!(game.make_move("d2d4".parse::<ChessMove>().unwrap()).is_err());
    /// assert_eq!(game.side_to_move(), Color::Black);
    /// ```
    pub fn make_move(&mut self, chess_move: ChessMove) -> Result<(), Error> {
        if self.result().is_some() {
            return Err(Error::GameOver);
        }
        let position = self.current_position();
        position.check_move(chess_move)?;
        debug!("{} plays {}", position.side_to_move(), chess_move);
        self.moves.push(Action::MakeMove(chess_move));
        if let Some(result) = self.result() {
            info!("{}", result);
        }
        Ok(())
    }

    /// Who's turn is it to move?
    pub fn side_to_move(&self) -> Color {
        self.current_position().side_to_move()
    }

    /// Offer a draw to my opponent.  `color` is the player who offered the draw.  The draw must be
    /// accepted before my opponent moves.
    pub fn offer_draw(&mut self, color: Color) -> bool {
        if self.result().is_some() {
            return false;
        }
        self.moves.push(Action::OfferDraw(color));
        true
    }

    /// Accept a draw offer from my opponent.
    ///
    /// ```
    /// use games::{Game, ChessMove, Color};
    ///
    /// let mut game = Game::new();
    /// game.offer_draw(Color::White);
    /// assert_eq!(game.accept_draw(), true);
    ///
    /// let mut game2 = Game::new();
    /// game2.offer_draw(Color::White);
    /// game2.make_move("e2e4".parse::<ChessMove>().unwrap()).unwrap();
    /// assert_eq!(game2.accept_draw(), false);
    /// ```
    pub fn accept_draw(&mut self) -> bool {
        if self.result().is_some() {
            return false;
        }
        if let Some(Action::OfferDraw(_)) = self.moves.last() {
            self.moves.push(Action::AcceptDraw);
            info!("{}", GameResult::DrawAccepted);
            return true;
        }
        false
    }

    /// `color` resigns the game
    pub fn resign(&mut self, color: Color) -> bool {
        if self.result().is_some() {
            return false;
        }
        self.moves.push(Action::Resign(color));
        info!("{} resigns", color);
        true
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = Error;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Ok(Game::new_with_board(Board::from_str(fen)?))
    }
}

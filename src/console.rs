//! Text prompts for both games.  Everything goes through a `BufRead` and a `Write`, so the loops
//! run the same against a terminal or an in-memory script.

use crate::chess_move::ChessMove;
use crate::config::{GameKind, Options};
use crate::error::Error;
use crate::game::{Game, GameResult};
use crate::piece::{Piece, PROMOTION_PIECES};
use crate::square::Square;
use crate::tictactoe::{Mark, Outcome, TicTacToe};
use log::{info, warn};
use rand::Rng;
use std::fmt::Display;
use std::io::{BufRead, Write};

const SOURCE_PROMPT: &str = "Select a piece to move by typing the coordinates with a comma(x,y):";
const TARGET_PROMPT: &str = "Select a square to move into by typing the coordinates with a comma(x,y):";
const PROMOTION_PROMPT: &str = "Choose what to promote Q (Queen), R (Rook), B (Bishop), N (Knight): ";
const ROW_PROMPT: &str = "Select row number from top to bottom(0,1,2): ";
const COLUMN_PROMPT: &str = "Select column number from left to right(0,1,2): ";
const MENU: &str = "Choose a game: 1) Chess  2) Tic-Tac-Toe  q) Quit";

/// Parse a square typed as `x,y` (column then row, counted from 0).  Algebraic notation such as
/// `e2` is accepted too.
///
/// ```
/// use games::parse_coordinates;
///
/// assert_eq!(parse_coordinates(" 4, 1").unwrap().to_string(), "e2");
/// assert_eq!(parse_coordinates("e2").unwrap().to_string(), "e2");
/// assert!(parse_coordinates("4;1").is_err());
/// assert!(parse_coordinates("8,0").is_err());
/// ```
pub fn parse_coordinates(input: &str) -> Result<Square, Error> {
    let input = input.trim();
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() != 2 {
        return input.parse::<Square>().map_err(|_| Error::InvalidCoordinates {
            input: input.to_owned(),
        });
    }

    let invalid = || Error::InvalidCoordinates {
        input: input.to_owned(),
    };
    let x = parts[0].trim().parse::<i64>().map_err(|_| invalid())?;
    let y = parts[1].trim().parse::<i64>().map_err(|_| invalid())?;
    Square::from_coordinates(x, y).ok_or(Error::OutOfBounds { x, y })
}

/// What a chess player typed at the first prompt of a turn.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Selection {
    Square(Square),
    Resign,
    OfferDraw,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Console<R, W> {
        Console { input, output }
    }

    /// Give back the writer, mostly so tests can look at what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say<D: Display>(&mut self, line: D) -> Result<(), Error> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one trimmed line.  End of input is an error: nobody is left to answer.
    fn read_line(&mut self) -> Result<String, Error> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_owned())
    }

    /// Keep asking until something non-empty is typed.
    fn ask(&mut self, prompt: &str) -> Result<String, Error> {
        loop {
            self.say(prompt)?;
            let line = self.read_line()?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.say("You have to type something!")?;
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, Error> {
        let answer = self.ask(prompt)?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    fn select(&mut self, prompt: &str, allow_commands: bool) -> Result<Selection, Error> {
        loop {
            let line = self.ask(prompt)?;
            if allow_commands {
                match line.to_ascii_lowercase().as_str() {
                    "resign" => return Ok(Selection::Resign),
                    "draw" => return Ok(Selection::OfferDraw),
                    _ => {}
                }
            }
            match parse_coordinates(&line) {
                Ok(square) => return Ok(Selection::Square(square)),
                Err(Error::OutOfBounds { x, y }) => {
                    warn!("({}, {}) is off the board", x, y);
                    self.say("Choose a point inside the board!")?;
                }
                Err(e) => {
                    warn!("{}", e);
                    self.say("Invalid input! Please enter coordinates in the format: x,y")?;
                }
            }
        }
    }

    fn ask_promotion(&mut self) -> Result<Piece, Error> {
        let answer = self.ask(PROMOTION_PROMPT)?;
        let choice = answer
            .chars()
            .next()
            .and_then(|c| Piece::from_char(c).ok())
            .filter(|piece| PROMOTION_PIECES.contains(piece));
        match choice {
            Some(piece) => Ok(piece),
            None => {
                self.say("Invalid choice. Defaulting to Queen.")?;
                Ok(Piece::Queen)
            }
        }
    }

    /// Play one game of chess from the starting position.
    pub fn play_chess(&mut self) -> Result<GameResult, Error> {
        self.play_chess_game(Game::new())
    }

    /// Play chess from wherever `game` currently stands until it has a result.
    pub fn play_chess_game(&mut self, mut game: Game) -> Result<GameResult, Error> {
        self.say(game.current_position())?;

        loop {
            if let Some(result) = game.result() {
                self.say(result)?;
                return Ok(result);
            }

            let side = game.side_to_move();
            self.say(format!("{}'s turn!", side))?;

            let source = match self.select(SOURCE_PROMPT, true)? {
                Selection::Square(square) => square,
                Selection::Resign => {
                    game.resign(side);
                    continue;
                }
                Selection::OfferDraw => {
                    game.offer_draw(side);
                    let prompt = format!("{} offers a draw. {}, do you accept? (y/n)", side, !side);
                    if self.ask_yes_no(&prompt)? {
                        game.accept_draw();
                    } else {
                        self.say("Draw declined.")?;
                    }
                    continue;
                }
            };

            let position = game.current_position();
            let (x, y) = source.to_coordinates();
            match position[source] {
                None => {
                    self.say("There is no piece there!")?;
                    continue;
                }
                Some((_, color)) if color != side => {
                    self.say("That piece belongs to the other player!")?;
                    continue;
                }
                Some((piece, color)) => {
                    self.say(format!(
                        "You selected the piece '{}' at ({}, {}).",
                        piece.name(color),
                        x,
                        y
                    ))?;
                }
            }

            let dest = match self.select(TARGET_PROMPT, false)? {
                Selection::Square(square) => square,
                _ => continue,
            };
            let (x, y) = dest.to_coordinates();
            self.say(format!("You try to move into ({}, {}).", x, y))?;

            let mut chess_move = ChessMove::new(source, dest, None);
            if position.is_promotion(source, dest)
                && position.legal(ChessMove::new(source, dest, Some(Piece::Queen)))
            {
                let promotion = self.ask_promotion()?;
                chess_move = ChessMove::new(source, dest, Some(promotion));
            }

            match game.make_move(chess_move) {
                Ok(()) => self.say(game.current_position())?,
                Err(e) => {
                    warn!("{} rejected: {}", chess_move, e);
                    self.say(e)?;
                }
            }
        }
    }

    /// Play one round of Tic-Tac-Toe; the coin toss uses `rng`.
    pub fn play_tictactoe<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<Outcome, Error> {
        let mut game = TicTacToe::random(rng);
        self.play_tictactoe_game(&mut game)
    }

    /// Play Tic-Tac-Toe on `game` until someone wins or the table fills up.
    pub fn play_tictactoe_game(&mut self, game: &mut TicTacToe) -> Result<Outcome, Error> {
        self.say(format!("{} starts!", game.turn()))?;

        loop {
            self.say(format!("Player {}'s turn!", game.turn()))?;
            self.say("-------------------------------------------------------")?;

            let (row, column) = loop {
                let row = self.ask_index(ROW_PROMPT, "Only rows 0, 1 and 2 can be used!")?;
                let column = self.ask_index(COLUMN_PROMPT, "Only columns 0, 1 and 2 can be used!")?;
                if game.cell(row, column)?.is_none() {
                    break (row, column);
                }
                self.say("That place is not empty!")?;
            };

            let outcome = game.place(row, column)?;
            self.say(&*game)?;

            match outcome {
                Outcome::Winner(mark) => {
                    info!("{} wins at Tic-Tac-Toe", mark);
                    self.say(format!("Winner is Player {}!", mark))?;
                    return Ok(outcome);
                }
                Outcome::Draw => {
                    info!("Tic-Tac-Toe ends in a draw");
                    self.say("Draw!")?;
                    return Ok(outcome);
                }
                Outcome::Ongoing => {}
            }
        }
    }

    /// Ask for a row or column number between 0 and 2.
    fn ask_index(&mut self, prompt: &str, out_of_range: &str) -> Result<usize, Error> {
        loop {
            let line = self.ask(prompt)?;
            match line.parse::<i64>() {
                Ok(index @ 0..=2) => return Ok(index as usize),
                Ok(_) => self.say(out_of_range)?,
                Err(_) => {
                    warn!("not a number: {:?}", line);
                    self.say("Please type a number!")?;
                }
            }
        }
    }

    /// Play whatever `options` asks for: one game if one was named, otherwise the menu until
    /// the players quit.  Running out of input counts as quitting.
    pub fn run<G: Rng + ?Sized>(&mut self, options: &Options, rng: &mut G) -> Result<(), Error> {
        let result = match options.game {
            Some(kind) => self.play(kind, rng),
            None => self.menu(rng),
        };
        match result {
            Err(Error::InputClosed) => {
                info!("input closed, leaving");
                Ok(())
            }
            other => other,
        }
    }

    fn play<G: Rng + ?Sized>(&mut self, kind: GameKind, rng: &mut G) -> Result<(), Error> {
        info!("starting {}", kind);
        match kind {
            GameKind::Chess => self.play_chess().map(|_| ()),
            GameKind::TicTacToe => self.play_tictactoe(rng).map(|_| ()),
        }
    }

    /// The Tic-Tac-Toe table is kept between rounds and cleared after each one.
    fn menu<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<(), Error> {
        let mut table = TicTacToe::random(rng);
        loop {
            let choice = self.ask(MENU)?;
            if choice.eq_ignore_ascii_case("q") || choice.eq_ignore_ascii_case("quit") {
                return Ok(());
            }
            match choice.parse::<GameKind>() {
                Ok(GameKind::TicTacToe) => {
                    info!("starting {}", GameKind::TicTacToe);
                    self.play_tictactoe_game(&mut table)?;
                    table.reset(Mark::toss(rng));
                }
                Ok(kind) => self.play(kind, rng)?,
                Err(_) => self.say("Unknown choice!")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    /// A seed whose coin toss gives `first` the opening move.
    fn rng_starting(first: Mark) -> SmallRng {
        (0..)
            .map(SmallRng::seed_from_u64)
            .find(|rng| TicTacToe::random(&mut rng.clone()).turn() == first)
            .unwrap()
    }

    #[test]
    fn coordinates() {
        assert_eq!(parse_coordinates("0,0").unwrap().to_string(), "a1");
        assert_eq!(parse_coordinates("7 , 7").unwrap().to_string(), "h8");
        match parse_coordinates("-1,3") {
            Err(Error::OutOfBounds { x: -1, y: 3 }) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse_coordinates("1,2,3").is_err());
        assert!(parse_coordinates("a,b").is_err());
        assert!(parse_coordinates("").is_err());
    }

    #[test]
    fn chess_reprompts_on_bad_input() {
        let mut c = console("\nfoo\n9,9\n4,1\n4,3\nresign\n");
        assert_eq!(c.play_chess().unwrap(), GameResult::BlackResigns);
        let out = printed(c);
        assert!(out.contains("You have to type something!"));
        assert!(out.contains("Invalid input! Please enter coordinates in the format: x,y"));
        assert!(out.contains("Choose a point inside the board!"));
        assert!(out.contains("You selected the piece 'WP' at (4, 1)."));
        assert!(out.contains("You try to move into (4, 3)."));
        assert_eq!(out.matches("White's turn").count(), 1);
        assert!(out.contains("Black's turn!"));
        assert!(out.contains("Black resigns. White wins!"));
    }

    #[test]
    fn chess_rejects_wrong_pieces_and_moves() {
        let mut c = console("4,4\n4,6\n0,0\n0,5\nresign\n");
        assert_eq!(c.play_chess().unwrap(), GameResult::WhiteResigns);
        let out = printed(c);
        assert!(out.contains("There is no piece there!"));
        assert!(out.contains("That piece belongs to the other player!"));
        assert!(out.contains("Piece cannot move there!"));
        assert!(!out.contains("Black's turn!"));
    }

    #[test]
    fn chess_ends_when_a_king_falls() {
        let game: Game = "4k3/8/8/8/8/8/4q3/4K3 b".parse().unwrap();
        let mut c = console("4,1\n4,0\n");
        assert_eq!(c.play_chess_game(game).unwrap(), GameResult::BlackWins);
        assert!(printed(c).contains("Black captured the king. Black wins!"));
    }

    #[test]
    fn chess_promotion_prompt() {
        let game: Game = "4k3/P7/8/8/8/8/8/4K3 w".parse().unwrap();
        let mut c = console("0,6\n0,7\nx\nresign\n");
        assert_eq!(c.play_chess_game(game).unwrap(), GameResult::BlackResigns);
        let out = printed(c);
        assert!(out.contains("Invalid choice. Defaulting to Queen."));
        assert!(out.contains("WQ"));

        let game: Game = "4k3/P7/8/8/8/8/8/4K3 w".parse().unwrap();
        let mut c = console("0,6\n0,7\nn\nresign\n");
        c.play_chess_game(game).unwrap();
        let out = printed(c);
        assert!(out.contains("WN"));
    }

    #[test]
    fn chess_draw_offer() {
        let mut c = console("draw\nn\ndraw\ny\n");
        assert_eq!(c.play_chess().unwrap(), GameResult::DrawAccepted);
        let out = printed(c);
        assert!(out.contains("White offers a draw. Black, do you accept? (y/n)"));
        assert!(out.contains("Draw declined."));
        assert!(out.contains("Draw agreed."));
    }

    #[test]
    fn chess_stops_when_input_ends() {
        let mut c = console("4,1\n");
        match c.play_chess() {
            Err(Error::InputClosed) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn tictactoe_win() {
        let mut rng = rng_starting(Mark::X);
        let mut c = console("0\n0\n1\n0\n0\n1\n1\n1\n0\n2\n");
        assert_eq!(c.play_tictactoe(&mut rng).unwrap(), Outcome::Winner(Mark::X));
        let out = printed(c);
        assert!(out.starts_with("X starts!\nPlayer X's turn!\n"));
        assert!(out.contains("|X|X|X|"));
        assert!(out.contains("Winner is Player X!"));
    }

    #[test]
    fn tictactoe_reprompts_until_a_draw() {
        let mut rng = rng_starting(Mark::O);
        // O X O
        // O O X
        // X O X
        let script = "-1\n3\nx\n1\n1\n\
                      1\n5\n1\n\
                      0\n1\n0\n0\n2\n2\n0\n2\n2\n0\n2\n1\n1\n2\n1\n0\n";
        let mut c = console(script);
        assert_eq!(c.play_tictactoe(&mut rng).unwrap(), Outcome::Draw);
        let out = printed(c);
        assert!(out.contains("O starts!"));
        assert_eq!(out.matches("Only rows 0, 1 and 2 can be used!").count(), 2);
        assert_eq!(out.matches("Please type a number!").count(), 1);
        assert!(out.contains("Only columns 0, 1 and 2 can be used!"));
        assert!(out.contains("That place is not empty!"));
        assert!(out.contains("|O|X|O|"));
        assert!(out.ends_with("Draw!\n"));
    }

    #[test]
    fn menu_plays_until_quit() {
        let mut rng = rng_starting(Mark::X);
        let options = Options::default();
        let mut c = console("3\n1\nresign\n2\n0\n0\n1\n0\n0\n1\n1\n1\n0\n2\nq\n");
        c.run(&options, &mut rng).unwrap();
        let out = printed(c);
        assert!(out.contains("Unknown choice!"));
        assert!(out.contains("White resigns. Black wins!"));
        assert!(out.contains("Winner is Player X!"));
    }

    #[test]
    fn menu_clears_the_table_between_rounds() {
        let mut rng = rng_starting(Mark::X);
        let options = Options::default();
        let mut c = console("2\n0\n0\n1\n0\n0\n1\n1\n1\n0\n2\n2\n0\n0\n1\n0\n");
        c.run(&options, &mut rng).unwrap();
        let out = printed(c);
        assert_eq!(out.matches("starts!").count(), 2);
        assert_eq!(out.matches("Winner is Player X!").count(), 1);
        assert!(!out.contains("That place is not empty!"));
    }

    #[test]
    fn running_out_of_input_is_quitting() {
        let mut rng = SmallRng::seed_from_u64(0);
        let options = Options {
            game: Some(GameKind::Chess),
            seed: None,
        };
        let mut c = console("");
        assert!(c.run(&options, &mut rng).is_ok());
    }
}

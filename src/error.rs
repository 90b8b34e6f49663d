use failure::Fail;
use std::io;

/// Sometimes, bad stuff happens.
#[derive(Debug, Fail)]
pub enum Error {
    /// The FEN string is invalid
    #[fail(display = "Invalid FEN string: {}", fen)]
    InvalidFen { fen: String },

    /// The coordinates could not be parsed as `x,y`
    #[fail(display = "Invalid coordinates: {:?}", input)]
    InvalidCoordinates { input: String },

    /// An invalid square was parsed from a string
    #[fail(display = "The string specified does not contain a valid algebraic notation square")]
    InvalidSquare,

    /// The requested position lies outside the board
    #[fail(display = "Position ({}, {}) is outside the board", x, y)]
    OutOfBounds { x: i64, y: i64 },

    /// An invalid rank was parsed from a string
    #[fail(display = "The string specified does not contain a valid rank")]
    InvalidRank,

    /// An invalid file was parsed from a string
    #[fail(display = "The string specified does not contain a valid file")]
    InvalidFile,

    /// An invalid piece letter was given
    #[fail(display = "Unknown piece: {:?}", piece)]
    InvalidPiece { piece: char },

    /// The move string could not be parsed
    #[fail(display = "Invalid move string: {:?}", input)]
    InvalidMove { input: String },

    /// The selected square does not hold a piece
    #[fail(display = "There is no piece on {}", square)]
    EmptySquare { square: String },

    /// The selected piece does not belong to the side to move
    #[fail(display = "The piece on {} belongs to the other player", square)]
    NotYourPiece { square: String },

    /// The piece cannot reach the destination square
    #[fail(display = "Piece cannot move there!")]
    IllegalMove,

    /// A Tic-Tac-Toe cell is already taken
    #[fail(display = "That place is not empty!")]
    CellOccupied,

    /// No more moves are accepted
    #[fail(display = "The game is already over")]
    GameOver,

    /// A command-line argument was not understood
    #[fail(display = "Unrecognized argument: {}", arg)]
    InvalidArgument { arg: String },

    /// Standard input was closed while waiting for a player
    #[fail(display = "Input closed")]
    InputClosed,

    /// Reading from or writing to the console failed
    #[fail(display = "Console I/O failed: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

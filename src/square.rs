use crate::color::Color;
use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
use std::fmt;
use std::str::FromStr;

/// Represent a square on the chess board
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Ord, Eq, PartialOrd, Copy, Clone, Debug, Hash, Default)]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

impl Square {
    /// Make a square given a rank and a file
    ///
    /// ```
    /// use games::{Square, Rank, File};
    ///
    /// let sq = Square::make_square(Rank::Second, File::E);
    /// assert_eq!(sq.to_string(), "e2");
    /// ```
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square(((rank.to_index() as u8) << 3) | (file.to_index() as u8))
    }

    /// Make a square from console coordinates: `x` is the column (file) and `y` the row (rank),
    /// both counted from 0.  Anything outside the board returns `None`.
    ///
    /// ```
    /// use games::Square;
    ///
    /// assert_eq!(Square::from_coordinates(4, 1).map(|s| s.to_string()), Some("e2".to_owned()));
    /// assert_eq!(Square::from_coordinates(8, 0), None);
    /// assert_eq!(Square::from_coordinates(-1, 3), None);
    /// ```
    #[inline]
    pub fn from_coordinates(x: i64, y: i64) -> Option<Square> {
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Square::make_square(
                Rank::from_index(y as usize),
                File::from_index(x as usize),
            ))
        } else {
            None
        }
    }

    /// Return the rank given this square.
    #[inline]
    pub fn get_rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize)
    }

    /// Return the file given this square.
    #[inline]
    pub fn get_file(&self) -> File {
        File::from_index((self.0 & 7) as usize)
    }

    /// The `(x, y)` console coordinates of this square.
    #[inline]
    pub fn to_coordinates(&self) -> (i8, i8) {
        (self.get_file().to_index() as i8, self.get_rank().to_index() as i8)
    }

    /// Step `dx` files and `dy` ranks away.  If that leaves the board, return `None`.
    ///
    /// ```
    /// use games::Square;
    ///
    /// let a1 = Square::from_coordinates(0, 0).unwrap();
    /// assert_eq!(a1.offset(1, 2), Square::from_coordinates(1, 2));
    /// assert_eq!(a1.offset(-1, 0), None);
    /// ```
    #[inline]
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Square> {
        let (x, y) = self.to_coordinates();
        Square::from_coordinates(x as i64 + dx as i64, y as i64 + dy as i64)
    }

    /// If there is a square "forward", given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Square> {
        self.offset(0, color.forward())
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    /// Convert an index from 0 to 63 back into a square.  Larger numbers wrap around.
    #[inline]
    pub fn from_index(i: usize) -> Square {
        Square((i & 63) as u8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.get_file().to_char(),
            self.get_rank().to_index() + 1
        )
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                let file = file.to_string().parse::<File>().map_err(|_| Error::InvalidSquare)?;
                let rank = rank.to_string().parse::<Rank>().map_err(|_| Error::InvalidSquare)?;
                Ok(Square::make_square(rank, file))
            }
            _ => Err(Error::InvalidSquare),
        }
    }
}

/// A list of every square on the chessboard.
pub fn all_squares() -> impl Iterator<Item = Square> {
    (0..NUM_SQUARES).map(Square::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_match_algebraic() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!(e2.to_coordinates(), (4, 1));
        assert_eq!(Square::from_coordinates(7, 7).unwrap().to_string(), "h8");
    }

    #[test]
    fn offsets_never_wrap_around_the_edge() {
        let h4: Square = "h4".parse().unwrap();
        assert_eq!(h4.offset(1, 0), None);
        assert_eq!(h4.offset(2, 1), None);
        let a8: Square = "a8".parse().unwrap();
        assert_eq!(a8.offset(0, 1), None);
        assert_eq!(a8.offset(-1, -1), None);
        let b1: Square = "b1".parse().unwrap();
        assert_eq!(b1.offset(127, 0), None);
        assert_eq!(b1.offset(i8::MIN, i8::MAX), None);
    }

    #[test]
    fn invalid_squares() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
        assert!("é1".parse::<Square>().is_err());
    }

    #[test]
    fn forward_depends_on_color() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!(e2.forward(Color::White), "e3".parse().ok());
        assert_eq!(e2.forward(Color::Black), "e1".parse().ok());
        let e1: Square = "e1".parse().unwrap();
        assert_eq!(e1.forward(Color::Black), None);
    }
}

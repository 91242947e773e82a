use crate::board::Board;
use std::fmt::Formatter;
use std::str::FromStr;
use thiserror::Error;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Location {
    x: i8,
    y: i8,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub from: Location,
    pub to: Location,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
#[error("coordinates range from a1 to i10")]
pub struct ParseLocationError;

impl Location {
    pub fn from_xy(x: i8, y: i8) -> Option<Self> {
        if (0..Board::WIDTH).contains(&x) && (0..Board::HEIGHT).contains(&y) {
            Some(Self { x, y })
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index > i8::MAX as usize {
            return None;
        }
        let x = index as i8 % Board::WIDTH;
        let y = index as i8 / Board::WIDTH;
        Self::from_xy(x, y)
    }

    pub fn shift_x(&self, dx: i8) -> Option<Self> {
        Self::from_xy(self.x + dx, self.y)
    }

    pub fn shift_y(&self, dy: i8) -> Option<Self> {
        Self::from_xy(self.x, self.y + dy)
    }

    pub fn shift_xy(&self, dx: i8, dy: i8) -> Option<Self> {
        Self::from_xy(self.x + dx, self.y + dy)
    }

    pub fn index(&self) -> usize {
        (self.x + self.y * Board::WIDTH) as usize
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Whether this cell lies inside either palace: the center three
    /// columns of each side's back three rows.
    pub fn in_palace(&self) -> bool {
        (3..=5).contains(&self.x) && ((0..=2).contains(&self.y) || (7..=9).contains(&self.y))
    }

    /// Whether this cell is on a palace diagonal line: the four corners
    /// and the center of a palace, where diagonal steps are permitted.
    pub fn on_palace_diagonal(&self) -> bool {
        self.in_palace() && {
            let center_y = if self.y <= 2 { 1 } else { 8 };
            (self.x - 4).abs() == (self.y - center_y).abs()
        }
    }
}

impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column = chars.next().ok_or(ParseLocationError)?;
        let x = (column.to_ascii_lowercase() as u8).wrapping_sub(b'a') as i8;
        let row: i32 = chars.as_str().parse().map_err(|_| ParseLocationError)?;
        if !(1..=Board::HEIGHT as i32).contains(&row) {
            return Err(ParseLocationError);
        }
        Self::from_xy(x, row as i8 - 1).ok_or(ParseLocationError)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y + 1)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

use std::fmt::{Display, Formatter};
use std::num::NonZeroI8;
use std::str::FromStr;
use thiserror::Error;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Color {
    Red,
    Blue,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
#[error("colors are \"red\" and \"blue\"")]
pub struct ParseColorError;

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Row delta for this color's forward direction: Red starts on rows
    /// 1-4 and advances down the board, Blue starts on rows 7-10 and
    /// advances up.
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Blue => -1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.opponent()
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            _ => Err(ParseColorError),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(i8)]
pub enum PieceKind {
    General,
    Guard,
    Horse,
    Elephant,
    Chariot,
    Cannon,
    Soldier,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Piece {
    data: NonZeroI8,
}

impl Piece {
    pub fn from_kind(kind: PieceKind, color: Color) -> Self {
        let data = NonZeroI8::new(kind as i8 + 1).unwrap();
        let data = match color {
            Color::Red => data,
            Color::Blue => -data,
        };
        Self { data }
    }

    pub fn color(&self) -> Color {
        if self.data.is_positive() {
            Color::Red
        } else {
            Color::Blue
        }
    }

    pub fn kind(&self) -> PieceKind {
        let data = self.data.abs().get() - 1;
        unsafe { std::mem::transmute(data) }
    }

    pub fn code(&self) -> &'static str {
        match self.kind() {
            PieceKind::General => "GN",
            PieceKind::Guard => "GD",
            PieceKind::Horse => "HS",
            PieceKind::Elephant => "EP",
            PieceKind::Chariot => "CH",
            PieceKind::Cannon => "CN",
            PieceKind::Soldier => "SD",
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.color() {
            Color::Red => write!(f, "\x1B[31mR{}\x1B[0m", self.code()),
            Color::Blue => write!(f, "B{}", self.code()),
        }
    }
}

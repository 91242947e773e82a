pub mod board;
pub mod game;
pub mod location;
pub mod piece;

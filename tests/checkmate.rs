use janggi::board::Board;
use janggi::game::{Game, GameState};
use janggi::location::Location;
use janggi::piece::{Color, Piece, PieceKind};

fn at(s: &str) -> Location {
    s.parse().unwrap()
}

fn board(pieces: &[(&str, PieceKind, Color)]) -> Board {
    let mut board = Board::new();
    for &(cell, kind, color) in pieces {
        board[at(cell)] = Some(Piece::from_kind(kind, color));
    }
    board
}

use Color::{Blue, Red};
use PieceKind::{Chariot, General};

// The scripted game from README.md: Blue builds a mating net around the
// red palace while Red shuffles a chariot and passes. Each pair is one
// Blue move followed by Red's reply.
const SCRIPT: [(&str, &str); 35] = [
    ("c7", "c6"),
    ("a1", "a2"),
    ("c6", "c5"),
    ("a2", "a1"),
    ("c5", "c4"), // takes a soldier
    ("a1", "a1"), // red passes
    ("c4", "c3"),
    ("a1", "a1"),
    ("e7", "d7"),
    ("a1", "a1"),
    ("d7", "d6"),
    ("a1", "a1"),
    ("d6", "d5"),
    ("a1", "a1"),
    ("d5", "d4"),
    ("a1", "a1"),
    ("d4", "d3"),
    ("a1", "a1"),
    ("g7", "g6"),
    ("a1", "a1"),
    ("h10", "g8"),
    ("a1", "a1"),
    ("g8", "f6"),
    ("a1", "a1"),
    ("f6", "g4"), // takes a soldier
    ("a1", "a1"),
    ("i7", "h7"),
    ("a1", "a1"),
    ("i10", "i4"), // takes a soldier
    ("a1", "a1"),
    ("i4", "i3"),
    ("a1", "a1"),
    ("i3", "h3"), // takes a cannon
    ("a1", "a1"),
    ("h3", "e3"), // checkmate
];

#[test]
fn scripted_game_ends_in_a_blue_win() {
    let mut game = Game::new();

    // red cannot open the game
    assert!(!game.make_move("c1", "d3"));

    for (index, (from, to)) in SCRIPT.iter().enumerate() {
        assert!(game.make_move(from, to), "move {index}: {from} {to}");
        assert!(
            !game.is_in_check("blue".parse().unwrap()),
            "move {index} left blue in check"
        );
    }

    assert_eq!(game.game_state(), GameState::BlueWon);
    assert_eq!(game.game_state().as_str(), "BLUE_WON");
    assert!(game.is_in_check(Red));

    // the turn freezes on the winner and nothing moves any more
    assert_eq!(game.turn(), Blue);
    let frozen = game.board().clone();
    assert!(!game.make_move("a1", "a2"));
    assert!(!game.make_move("e2", "f2"));
    assert!(!game.make_move("g6", "g5"));
    assert_eq!(*game.board(), frozen);
    assert_eq!(game.game_state(), GameState::BlueWon);
}

#[test]
fn mid_script_state_is_unfinished() {
    let mut game = Game::new();
    for (from, to) in &SCRIPT[..SCRIPT.len() - 1] {
        assert!(game.make_move(from, to));
        assert_eq!(game.game_state(), GameState::Unfinished);
    }
    assert!(!game.is_in_check(Red));
    assert!(!game.is_in_check(Blue));
}

#[test]
fn two_chariots_and_a_file_ladder_mate() {
    // the lone red general is fenced on the d and f files; the chariot
    // check on the e file leaves no cell of the palace safe
    let b = board(&[
        ("e2", General, Red),
        ("a8", Chariot, Blue),
        ("d5", Chariot, Blue),
        ("f5", Chariot, Blue),
        ("e9", General, Blue),
    ]);
    let mut game = Game::with_board(b, Blue);

    assert!(game.make_move("a8", "e8"));
    assert_eq!(game.game_state(), GameState::BlueWon);
    assert_eq!(game.turn(), Blue);
    assert!(!game.make_move("e2", "f2"));
}

#[test]
fn check_with_an_open_file_is_not_mate() {
    let b = board(&[
        ("e2", General, Red),
        ("a8", Chariot, Blue),
        ("d5", Chariot, Blue),
        ("e9", General, Blue),
    ]);
    let mut game = Game::with_board(b, Blue);

    assert!(game.make_move("a8", "e8"));
    assert_eq!(game.game_state(), GameState::Unfinished);
    assert!(game.is_in_check(Red));
    assert_eq!(game.turn(), Red);

    // passing cannot answer the check, stepping aside can
    assert!(!game.make_move("e2", "e2"));
    assert!(game.make_move("e2", "f2"));
    assert!(!game.is_in_check(Red));
    assert_eq!(game.turn(), Blue);
}

use janggi::game::{Game, GameState};
use std::io;

fn main() {
    env_logger::init();
    let mut game = Game::new();

    loop {
        println!("{game}");
        if game.game_state() != GameState::Unfinished {
            break;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).unwrap() == 0 {
            break;
        }
        let input = input.trim().to_ascii_lowercase();
        if input.is_empty() {
            continue;
        }

        let mut tokens = input.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(from), Some(to)) => {
                if !game.make_move(from, to) {
                    println!("illegal move");
                }
            }
            _ => println!("enter a move like: c7 c6 (origin twice passes the turn)"),
        }
    }
}

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Write};

use gomoku_core::{Game, GameStatus, Player, Position, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH};

mod display;
use display::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut game = Game::new(DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, Player::Black)?;

    let stdin = stdin();

    println!("Welcome to Gomoku\n");
    println!(
        "First to {} in a row wins. Enter moves as 'row col', 0 to {}.\n",
        game.win_length(),
        game.board().size() - 1
    );

    // game loop
    loop {
        display(&game).expect("Failed to draw board!");

        match game.status() {
            GameStatus::InProgress => {
                print!("{} to move > ", game.turn());
                stdout().flush().expect("failed to flush to stdout!");

                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    // stdin closed
                    break;
                }

                let mut numbers = input_str.split_whitespace().map(|n| n.parse::<i32>());
                let position = match (numbers.next(), numbers.next()) {
                    (Some(Ok(row)), Some(Ok(col))) => Position::new(row, col),
                    _ => {
                        println!("Could not read a move from '{}'", input_str.trim());
                        continue;
                    }
                };

                if let Err(err) = game.make_move(position) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end state
            GameStatus::Won(player) => {
                println!("{} won!", player);
                break;
            }
        }
    }
    Ok(())
}

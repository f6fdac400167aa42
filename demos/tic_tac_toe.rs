extern crate minimax_lib;

use minimax_lib::board::{Board, GameOutcome};
use minimax_lib::boards::tic_tac_toe::{Mark, TicTacToeBoard};
use minimax_lib::minimax;
use std::io::{self, BufRead, Write};

/// A terminal front end: the human plays 'X' and moves first, the AI plays 'O'
/// and answers every human move with an exhaustive minimax search.
fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut board = TicTacToeBoard::new(Mark::O);

    println!("Tic-Tac-Toe. You are X; cells are numbered 0-8, row by row.");

    loop {
        println!("\n{board}");
        print!("Your move (0-8): ");
        io::stdout().flush().unwrap();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return, // EOF
        };

        let cell = match line.trim().parse::<u8>() {
            Ok(cell) => cell,
            Err(_) => {
                println!("Please enter a cell index between 0 and 8.");
                continue;
            }
        };

        if let Err(err) = board.try_place(cell) {
            println!("{err}");
            continue;
        }

        if handle_game_over(&mut board, &mut lines) {
            continue;
        }

        if let Some(reply) = minimax::best_move(&mut board) {
            board.perform_move(&reply);
            println!("AI plays {reply}.");
        }

        handle_game_over(&mut board, &mut lines);
    }
}

/// Announces a terminal outcome and offers a restart. Returns `true` if the game ended.
fn handle_game_over(
    board: &mut TicTacToeBoard,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> bool {
    // Outcome is reported relative to the AI, which searches for 'O'.
    let message = match board.get_outcome() {
        GameOutcome::InProgress => return false,
        GameOutcome::Win => "AI wins",
        GameOutcome::Lose => "You win!",
        GameOutcome::Draw => "It's a draw!",
    };

    println!("\n{board}");
    println!("{message}");
    print!("Play again? (y/n): ");
    io::stdout().flush().unwrap();

    match lines.next() {
        Some(Ok(answer)) if answer.trim().eq_ignore_ascii_case("y") => {
            *board = TicTacToeBoard::new(Mark::O);
            true
        }
        _ => std::process::exit(0),
    }
}

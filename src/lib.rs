//! A small and simple library for minimax game-tree search.
//!
//! This library provides an exhaustive depth-first implementation of the minimax algorithm.
//! Minimax computes the exact game-theoretic value of every available move, which makes it
//! the natural choice for small, fully-enumerable turn-based games such as Tic-Tac-Toe.
//! The library is designed around a [`board::Board`] trait so the search stays independent
//! of any particular game's rules.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
//! use minimax_lib::minimax;
//!
//! // Create a new Tic-Tac-Toe board; 'X' moves first and is the searching player
//! let mut board = TicTacToeBoard::default();
//!
//! // Compute the optimal move for the side to move
//! let best_move = minimax::best_move(&mut board);
//!
//! println!("The best move is: {:?}", best_move);
//! ```

/// Contains the `Board` trait and related enums that define the interface for a game.
pub mod board;
/// Contains pre-made implementations of the `Board` trait for common games.
pub mod boards;
/// The core module of the library, containing the minimax search implementation.
pub mod minimax;

use crate::board::{Board, GameOutcome, Player};
use std::fmt;

/// The 8 winning triples of the 3x3 grid: 3 rows, 3 columns, 2 diagonals.
///
/// Cells are indexed 0-8 in row-major order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One of the two marks a player places on the board.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the mark of the other player.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Errors returned when a front end tries to place a mark on an invalid cell.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell index {0} is out of range (expected 0-8)")]
    OutOfRange(u8),

    #[error("cell {0} is already occupied")]
    Occupied(u8),
}

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The board is represented by a 9-element array, where each element corresponds to a cell.
/// A move is represented by a `u8` from 0 to 8. The outcome is recomputed from the cells on
/// every query; nothing is cached, so `perform_move`/`undo_move` cycles can never leave a
/// stale result behind.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TicTacToeBoard {
    root_player: Mark,
    current_player: Mark,
    field: [Option<Mark>; 9],
}

impl TicTacToeBoard {
    /// Creates an empty board. `root_player` is the mark the minimax search maximizes for;
    /// 'X' always moves first.
    pub fn new(root_player: Mark) -> Self {
        Self {
            root_player,
            current_player: Mark::X,
            field: [None; 9],
        }
    }

    /// Creates a board from an arbitrary cell layout, with `current_player` to move.
    ///
    /// Useful for setting up mid-game positions; no legality check is performed on the
    /// distribution of marks.
    pub fn from_cells(field: [Option<Mark>; 9], current_player: Mark, root_player: Mark) -> Self {
        Self {
            root_player,
            current_player,
            field,
        }
    }

    /// Rebinds the search perspective to `mark`, e.g. before searching on the other
    /// player's behalf.
    pub fn set_root_player(&mut self, mark: Mark) {
        self.root_player = mark;
    }

    /// Returns the mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.current_player
    }

    /// Returns the mark holding a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in WINNING_LINES {
            if self.field[a].is_some() && self.field[a] == self.field[b] && self.field[a] == self.field[c] {
                return self.field[a];
            }
        }
        None
    }

    /// Returns `true` if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.field.iter().all(|x| x.is_some())
    }

    /// Places the current player's mark on `cell` after validating it, then passes the turn.
    ///
    /// This is the entry point for front ends, which cannot guarantee that a user-selected
    /// cell is empty. The search itself uses the unchecked [`Board::perform_move`].
    pub fn try_place(&mut self, cell: u8) -> Result<(), MoveError> {
        if cell > 8 {
            return Err(MoveError::OutOfRange(cell));
        }
        if self.field[cell as usize].is_some() {
            return Err(MoveError::Occupied(cell));
        }
        self.perform_move(&cell);
        Ok(())
    }
}

impl Default for TicTacToeBoard {
    /// Creates a new Tic-Tac-Toe board with player 'X' starting and searched for.
    fn default() -> Self {
        TicTacToeBoard::new(Mark::X)
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.field[row * 3 + col] {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, ".")?,
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Board for TicTacToeBoard {
    type Move = u8;

    fn get_current_player(&self) -> Player {
        match self.current_player == self.root_player {
            true => Player::Me,
            false => Player::Other,
        }
    }

    fn get_outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(mark) if mark == self.root_player => GameOutcome::Win,
            Some(_) => GameOutcome::Lose,
            None if self.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    fn get_available_moves(&self) -> Vec<Self::Move> {
        if self.get_outcome() != GameOutcome::InProgress {
            return Vec::new();
        }

        self.field
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_none())
            .map(|(i, _)| i as u8)
            .collect()
    }

    fn perform_move(&mut self, b_move: &Self::Move) {
        self.field[*b_move as usize] = Some(self.current_player);
        self.current_player = self.current_player.opponent();
    }

    fn undo_move(&mut self, b_move: &Self::Move) {
        self.field[*b_move as usize] = None;
        self.current_player = self.current_player.opponent();
    }

    fn get_hash(&self) -> u128 {
        let mut hash = 0;
        for (i, &cell) in self.field.iter().enumerate() {
            let cell_value = match cell {
                None => 0,
                Some(Mark::X) => 1,
                Some(Mark::O) => 2,
            };
            hash += cell_value * 3u128.pow(i as u32);
        }
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a cell array from a 9-character string, 'X'/'O' for marks, anything
    /// else for empty.
    fn cells(s: &str) -> [Option<Mark>; 9] {
        let mut field = [None; 9];
        for (i, c) in s.chars().enumerate() {
            field[i] = match c {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
        field
    }

    #[test]
    fn detects_every_winning_line() {
        for line in WINNING_LINES {
            let mut field = [None; 9];
            for cell in line {
                field[cell] = Some(Mark::X);
            }

            let board = TicTacToeBoard::from_cells(field, Mark::O, Mark::X);
            assert_eq!(board.winner(), Some(Mark::X), "line {line:?}");
            assert_eq!(board.get_outcome(), GameOutcome::Win, "line {line:?}");

            let board = TicTacToeBoard::from_cells(field, Mark::O, Mark::O);
            assert_eq!(board.get_outcome(), GameOutcome::Lose, "line {line:?}");
        }
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let board = TicTacToeBoard::from_cells(cells("XOXXOOOXX"), Mark::X, Mark::X);
        assert_eq!(board.winner(), None);
        assert!(board.is_full());
        assert_eq!(board.get_outcome(), GameOutcome::Draw);
    }

    #[test]
    fn board_with_empty_cells_and_no_line_is_in_progress() {
        let board = TicTacToeBoard::default();
        assert_eq!(board.get_outcome(), GameOutcome::InProgress);

        let board = TicTacToeBoard::from_cells(cells("XO..X.O.."), Mark::X, Mark::X);
        assert_eq!(board.get_outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn outcome_is_idempotent() {
        let board = TicTacToeBoard::from_cells(cells("XXX.OO..."), Mark::O, Mark::X);
        assert_eq!(board.get_outcome(), board.get_outcome());
    }

    #[test]
    fn try_place_rejects_invalid_cells() {
        let mut board = TicTacToeBoard::default();
        assert_eq!(board.try_place(9), Err(MoveError::OutOfRange(9)));

        board.try_place(4).unwrap();
        assert_eq!(board.try_place(4), Err(MoveError::Occupied(4)));
    }

    #[test]
    fn try_place_sets_the_mark_and_passes_the_turn() {
        let mut board = TicTacToeBoard::default();
        assert_eq!(board.to_move(), Mark::X);

        board.try_place(4).unwrap();
        assert_eq!(board.to_move(), Mark::O);

        board.try_place(0).unwrap();
        assert_eq!(board.to_move(), Mark::X);
        assert_eq!(board.field[4], Some(Mark::X));
        assert_eq!(board.field[0], Some(Mark::O));
    }

    #[test]
    fn undo_restores_the_exact_prior_state() {
        let mut board = TicTacToeBoard::from_cells(cells("X...O...."), Mark::X, Mark::X);
        let before = board.clone();
        let before_hash = board.get_hash();

        board.perform_move(&8);
        assert_ne!(board, before);

        board.undo_move(&8);
        assert_eq!(board, before);
        assert_eq!(board.get_hash(), before_hash);
    }

    #[test]
    fn hash_encodes_cells_in_base_three() {
        let mut board = TicTacToeBoard::default();
        assert_eq!(board.get_hash(), 0);

        board.perform_move(&0); // X at cell 0
        assert_eq!(board.get_hash(), 1);

        board.perform_move(&1); // O at cell 1
        assert_eq!(board.get_hash(), 1 + 2 * 3);
    }

    #[test]
    fn renders_the_grid_row_major() {
        let board = TicTacToeBoard::from_cells(cells("X.O.X...O"), Mark::O, Mark::X);
        assert_eq!(board.to_string(), "X . O\n. X .\n. . O");
    }
}

/// The central trait of the library, defining the interface for a game state.
///
/// To use the minimax search with a custom game, this trait must be implemented.
/// It provides the search with the necessary methods to understand and interact with
/// the game logic. The search explores moves destructively, so every implementation
/// must be able to revert a move via [`Board::undo_move`] such that the board is
/// restored to the exact state it had before the move was applied.
pub trait Board: Default + Clone {
    /// The type representing a move in the game. This could be a simple `u8` for a board
    /// position or a more complex struct for games with intricate actions.
    type Move;

    /// Returns the player whose turn it is to make a move.
    fn get_current_player(&self) -> Player;

    /// Returns the current outcome of the game.
    ///
    /// The outcome must be derived from the board state on every call, never cached,
    /// so that it stays correct across `perform_move`/`undo_move` cycles.
    fn get_outcome(&self) -> GameOutcome;

    /// Returns a list of all legal moves available from the current state.
    ///
    /// The iteration order is part of the search contract: when several moves score
    /// equally, the first one returned here is the one the search keeps.
    fn get_available_moves(&self) -> Vec<Self::Move>;

    /// Applies a given move to the board, modifying its state.
    fn perform_move(&mut self, b_move: &Self::Move);

    /// Reverts a previously applied move, restoring the exact prior state.
    ///
    /// Sibling branches of the search are evaluated against the same parent state,
    /// so an incomplete undo corrupts every branch explored afterwards.
    fn undo_move(&mut self, b_move: &Self::Move);

    /// Returns a hash value for the current board state.
    fn get_hash(&self) -> u128;
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress = 0,
    /// The searching player has won.
    Win = 1,
    /// The searching player has lost.
    Lose = 2,
    /// The game has ended in a draw.
    Draw = 3,
}

/// Represents the players in the game from the perspective of the minimax search.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Player {
    /// The player for whom the search is currently computing the best move.
    Me = 1,
    /// The opponent.
    Other = 2,
}

//! Player port - abstraction over whoever picks the next move

use crate::{
    Result,
    logic::{GameState, Mark, Move},
};

/// Player trait - Unified interface for humans and computer opponents
///
/// Implementations only decide *which* move to play in
/// [`get_move`](Player::get_move). Turn order and the "no move available"
/// case are enforced once, in the provided [`make_move`](Player::make_move).
///
/// # Examples
///
/// ```
/// use tic_tac_toe::{
///     Result,
///     logic::{GameState, Mark, Move},
///     ports::Player,
/// };
///
/// struct FirstFree(Mark);
///
/// impl Player for FirstFree {
///     fn mark(&self) -> Mark {
///         self.0
///     }
///
///     fn get_move(&mut self, state: &GameState) -> Result<Option<Move>> {
///         Ok(state.possible_moves()?.into_iter().next())
///     }
/// }
///
/// let mut player = FirstFree(Mark::Cross);
/// let next = player.make_move(&GameState::start(Mark::Cross))?;
/// assert_eq!(next.grid().to_string(), "X        ");
/// # Ok::<(), tic_tac_toe::Error>(())
/// ```
pub trait Player {
    /// The mark this player places
    fn mark(&self) -> Mark;

    /// Choose a move in `state`, or `None` if there is nothing to play.
    ///
    /// Only called when it is this player's turn.
    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>>;

    /// Play one turn and return the resulting state.
    ///
    /// # Errors
    ///
    /// `NotPlayersTurn` if `state` expects the other mark, `NoPossibleMoves`
    /// if [`get_move`](Player::get_move) comes back empty, and anything
    /// `get_move` itself fails with.
    fn make_move(&mut self, state: &GameState) -> Result<GameState> {
        if self.mark() != state.current_mark() {
            return Err(crate::Error::NotPlayersTurn { mark: self.mark() });
        }
        match self.get_move(state)? {
            Some(mv) => Ok(mv.after_state),
            None => Err(crate::Error::NoPossibleMoves),
        }
    }
}

//! Game loop driving two players to the end of a game

use tracing::{debug, info, warn};

use crate::{
    Error, Result,
    logic::{GameOutcome, GameState, Mark, validate_players},
    ports::{Player, Renderer},
};

/// Callback for moves the engine rejected and will ask for again
pub type ErrorHandler = Box<dyn FnMut(&Error)>;

/// A game between two players with distinct marks
pub struct TicTacToe {
    players: [Box<dyn Player>; 2],
    renderer: Box<dyn Renderer>,
    error_handler: Option<ErrorHandler>,
}

impl TicTacToe {
    /// # Errors
    ///
    /// `DuplicatePlayerMarks` if both players use the same mark.
    pub fn new(
        player1: Box<dyn Player>,
        player2: Box<dyn Player>,
        renderer: Box<dyn Renderer>,
    ) -> Result<Self> {
        validate_players(player1.as_ref(), player2.as_ref())?;
        Ok(Self {
            players: [player1, player2],
            renderer,
            error_handler: None,
        })
    }

    /// Report invalid moves through `handler` instead of dropping them silently
    pub fn with_error_handler(mut self, handler: impl FnMut(&Error) + 'static) -> Self {
        self.error_handler = Some(Box::new(handler));
        self
    }

    /// Play a game from an empty board and return the final state.
    ///
    /// The current state is rendered before every turn and once more at the
    /// end. An invalid move goes to the error handler and the same player is
    /// asked again; any other error ends the game.
    pub fn play(&mut self, starting_mark: Mark) -> Result<GameState> {
        let mut state = GameState::start(starting_mark);
        loop {
            self.renderer.render(&state)?;
            if state.game_over() {
                break;
            }

            let player = self.current_player(&state);
            match player.make_move(&state) {
                Ok(next) => {
                    debug!(mark = %state.current_mark(), grid = %next.grid(), "move applied");
                    state = next;
                }
                Err(err) if err.is_invalid_move() => {
                    warn!(error = %err, "rejected move");
                    if let Some(handler) = self.error_handler.as_mut() {
                        handler(&err);
                    }
                }
                Err(err) => return Err(err),
            }
        }

        match state.outcome() {
            Some(GameOutcome::Win(mark)) => info!(winner = %mark, "game over"),
            _ => info!("game over: tie"),
        }
        Ok(state)
    }

    /// The player whose mark is due to move
    fn current_player(&mut self, state: &GameState) -> &mut Box<dyn Player> {
        let [first, second] = &mut self.players;
        if first.mark() == state.current_mark() {
            first
        } else {
            second
        }
    }
}

//! Factory wiring configured players into a game.

use super::config::{GameConfig, PlayerKind};
use crate::{
    Result,
    adapters::{MinimaxComputerPlayer, RandomComputerPlayer},
    cli::{ConsolePlayer, ConsoleRenderer},
    engine::TicTacToe,
    logic::Mark,
    ports::{Player, Renderer},
};

/// Application entry point for building players and games.
///
/// # Examples
///
/// ```
/// use tic_tac_toe::{
///     app::{App, GameConfig, PlayerKind},
///     logic::Mark,
///     ports::NullRenderer,
/// };
///
/// let app = App::new(GameConfig::new().with_seed(7));
/// let mut game = app.create_game(
///     (PlayerKind::Minimax, Mark::Cross),
///     (PlayerKind::Minimax, Mark::Naught),
///     Box::new(NullRenderer),
/// )?;
/// let end = game.play(app.config().starting_mark)?;
/// assert!(end.tie());
/// # Ok::<(), tic_tac_toe::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct App {
    config: GameConfig,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Create a player of the given kind for `mark`.
    ///
    /// With a configured seed, each mark gets its own derived seed so two
    /// computer players of the same kind do not mirror each other.
    pub fn create_player(&self, kind: PlayerKind, mark: Mark) -> Box<dyn Player> {
        let seed = self.seed_for(mark);
        match kind {
            PlayerKind::Human => Box::new(ConsolePlayer::new(mark)),
            PlayerKind::Random => {
                let player = match seed {
                    Some(seed) => RandomComputerPlayer::with_seed(mark, seed),
                    None => RandomComputerPlayer::new(mark),
                };
                Box::new(player.with_delay(self.config.delay))
            }
            PlayerKind::Minimax => {
                let player = match seed {
                    Some(seed) => MinimaxComputerPlayer::with_seed(mark, seed),
                    None => MinimaxComputerPlayer::new(mark),
                };
                Box::new(player.with_delay(self.config.delay))
            }
        }
    }

    /// Create a game between two configured players.
    ///
    /// # Errors
    ///
    /// `DuplicatePlayerMarks` if both entries use the same mark.
    pub fn create_game(
        &self,
        player1: (PlayerKind, Mark),
        player2: (PlayerKind, Mark),
        renderer: Box<dyn Renderer>,
    ) -> Result<TicTacToe> {
        TicTacToe::new(
            self.create_player(player1.0, player1.1),
            self.create_player(player2.0, player2.1),
            renderer,
        )
    }

    /// Create a game drawn on the terminal
    pub fn create_console_game(
        &self,
        player1: (PlayerKind, Mark),
        player2: (PlayerKind, Mark),
    ) -> Result<TicTacToe> {
        self.create_game(player1, player2, Box::new(ConsoleRenderer::new()))
    }

    fn seed_for(&self, mark: Mark) -> Option<u64> {
        self.config.seed.map(|seed| match mark {
            Mark::Cross => seed,
            Mark::Naught => seed.wrapping_add(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, thread, time::Duration};

    use super::*;
    use crate::{logic::GameState, ports::NullRenderer};

    #[test]
    fn test_creates_players_with_requested_marks() {
        let app = App::default();
        for kind in [PlayerKind::Human, PlayerKind::Random, PlayerKind::Minimax] {
            assert_eq!(app.create_player(kind, Mark::Naught).mark(), Mark::Naught);
        }
    }

    #[test]
    fn test_seeded_random_players_are_reproducible() {
        let app = App::new(GameConfig::new().with_seed(5));
        let state = GameState::start(Mark::Cross);
        let mut a = app.create_player(PlayerKind::Random, Mark::Cross);
        let mut b = app.create_player(PlayerKind::Random, Mark::Cross);
        for _ in 0..5 {
            assert_eq!(a.get_move(&state).unwrap(), b.get_move(&state).unwrap());
        }
    }

    #[test]
    fn test_game_rejects_shared_mark() {
        let app = App::default();
        let result = app.create_game(
            (PlayerKind::Random, Mark::Cross),
            (PlayerKind::Minimax, Mark::Cross),
            Box::new(NullRenderer),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_two_console_players_share_stdin() {
        let (done, finished) = mpsc::channel();
        thread::spawn(move || {
            let app = App::default();
            let game = app.create_game(
                (PlayerKind::Human, Mark::Cross),
                (PlayerKind::Human, Mark::Naught),
                Box::new(NullRenderer),
            );
            let _ = done.send(game.is_ok());
        });
        assert_eq!(finished.recv_timeout(Duration::from_secs(3)), Ok(true));
    }
}

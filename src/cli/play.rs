//! Play command - run one game on the terminal

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    app::{App, GameConfig, PlayerKind},
    logic::Mark,
};

#[derive(Parser, Debug)]
#[command(name = "tic-tac-toe")]
#[command(version, about = "Play tic-tac-toe against a human or the computer", long_about = None)]
pub struct PlayArgs {
    /// Who plays X (human, random, minimax)
    #[arg(short = 'X', value_name = "PLAYER", default_value = "human")]
    pub player_x: PlayerKind,

    /// Who plays O (human, random, minimax)
    #[arg(short = 'O', value_name = "PLAYER", default_value = "minimax")]
    pub player_o: PlayerKind,

    /// Mark that moves first (X or O)
    #[arg(long = "starting", value_name = "MARK", default_value = "X")]
    pub starting_mark: Mark,

    /// Computer "thinking" time before each move, in milliseconds
    #[arg(long, default_value_t = 250)]
    pub delay_ms: u64,

    /// Random seed for reproducible computer players
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayArgs {
    pub fn config(&self) -> GameConfig {
        let config = GameConfig::new()
            .with_starting_mark(self.starting_mark)
            .with_delay(Duration::from_millis(self.delay_ms));
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Players in seating order: whoever holds the starting mark sits first.
    pub fn seating(&self) -> [(PlayerKind, Mark); 2] {
        let x = (self.player_x, Mark::Cross);
        let o = (self.player_o, Mark::Naught);
        match self.starting_mark {
            Mark::Cross => [x, o],
            Mark::Naught => [o, x],
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let app = App::new(args.config());
    let [player1, player2] = args.seating();
    info!(
        x = %args.player_x,
        o = %args.player_o,
        starting = %args.starting_mark,
        "starting game"
    );

    let mut game = app
        .create_console_game(player1, player2)?
        .with_error_handler(|err| eprintln!("{err}"));
    game.play(app.config().starting_mark)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_setup() {
        let args = PlayArgs::parse_from(["tic-tac-toe"]);
        assert_eq!(args.player_x, PlayerKind::Human);
        assert_eq!(args.player_o, PlayerKind::Minimax);
        assert_eq!(args.starting_mark, Mark::Cross);

        let config = args.config();
        assert_eq!(config.delay, Duration::from_millis(250));
        assert_eq!(config.seed, None);
        assert_eq!(
            args.seating(),
            [
                (PlayerKind::Human, Mark::Cross),
                (PlayerKind::Minimax, Mark::Naught)
            ]
        );
    }

    #[test]
    fn test_naught_start_swaps_seating() {
        let args = PlayArgs::parse_from([
            "tic-tac-toe",
            "-X",
            "random",
            "-O",
            "human",
            "--starting",
            "o",
            "--seed",
            "3",
            "--delay-ms",
            "0",
        ]);
        assert_eq!(args.starting_mark, Mark::Naught);
        assert_eq!(args.config().seed, Some(3));
        assert_eq!(args.config().delay, Duration::ZERO);
        assert_eq!(
            args.seating(),
            [
                (PlayerKind::Human, Mark::Naught),
                (PlayerKind::Random, Mark::Cross)
            ]
        );
    }

    #[test]
    fn test_rejects_unknown_player_kind() {
        assert!(PlayArgs::try_parse_from(["tic-tac-toe", "-X", "oracle"]).is_err());
        assert!(PlayArgs::try_parse_from(["tic-tac-toe", "--starting", "Z"]).is_err());
    }
}

//! Renderer port - shows each game state to the outside world

use crate::{Result, logic::GameState};

/// Draws a game state. Called by the engine once per ply and once more when
/// the game ends.
pub trait Renderer {
    fn render(&mut self, state: &GameState) -> Result<()>;
}

/// Renderer that draws nothing, for headless games
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &GameState) -> Result<()> {
        Ok(())
    }
}

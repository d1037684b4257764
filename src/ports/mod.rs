//! Ports (trait boundaries) between the rules and the outside world.
//!
//! The engine only talks to players and renderers through these traits.
//! Computer players live in [`crate::adapters`]; console implementations
//! live in [`crate::cli`].

pub mod player;
pub mod renderer;

pub use player::Player;
pub use renderer::{NullRenderer, Renderer};

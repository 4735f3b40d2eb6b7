//! Session layer: the game aggregate and its per-frame loop.
//!
//! # Invariants
//! - One tick = drain input, integrate player, re-derive camera, recompute
//!   the active set. Consumers of player position never see last tick's.
//! - Input events apply in arrival order, before the tick that observes
//!   them.
//! - Shutdown is cooperative: `request_exit` flips a flag the host checks
//!   before scheduling another frame, so no callback outlives the session.

mod config;
mod frame;
mod game;

pub use config::{ConfigError, GameConfig, WindowConfig};
pub use frame::FrameTimer;
pub use game::Game;

pub fn crate_info() -> &'static str {
    "gridwalk-game v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("game"));
    }
}

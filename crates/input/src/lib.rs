//! Input events and the queue that carries them into the game.
//!
//! # Invariants
//! - The game sees the same event stream whether events originate from a
//!   window or from a test pushing them by hand.
//! - Events are applied in arrival order, once per tick.

mod event;
mod queue;

pub use event::{InputEvent, MoveKey};
pub use queue::InputQueue;

pub fn crate_info() -> &'static str {
    "gridwalk-input v0.1.0"
}

//! Input handling
//!
//! Keyboard only: W/A/S/D and the arrows for movement, C to crouch,
//! Space to sprint. State is polled from macroquad once per frame and
//! handed to the game as plain data.

mod state;

pub use state::*;

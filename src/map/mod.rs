//! Map module - collision layer for the town
//!
//! - Tile grid data and the boundary builder
//! - RON map file loading with validation
//! - Built-in fallback map

mod grid;
mod loader;
mod sample;

pub use grid::*;
pub use loader::*;
pub use sample::*;

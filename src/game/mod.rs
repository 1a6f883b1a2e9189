//! Game runtime
//!
//! The per-frame core of the game:
//! - Rect: position + size rectangles for sprites and tiles
//! - Sprite: sheet-sliced drawing and frame animation
//! - collision: the overlap test and the scroll probe
//! - movement: key resolution, modifiers, world scrolling
//! - world: the scene container (layers, boundaries, player)

pub mod collision;
pub mod movement;
pub mod rect;
pub mod sprite;
pub mod world;

// Re-export main types
pub use rect::Rect;
pub use sprite::{Facing, Player, PlayerSheets, Sprite};
pub use world::{GameWorld, SceneTextures, SCREEN_HEIGHT, SCREEN_WIDTH};

//! Game World
//!
//! The World is the container for everything on screen:
//! - the background and foreground layer sprites
//! - every boundary built from the collision grid
//! - the player, fixed at screen center
//!
//! Walking never moves the player rectangle. A committed step shifts the
//! whole movable set (background, boundaries, foreground) by the same
//! delta, which reads as camera movement from the fixed viewpoint.

use macroquad::prelude::*;

use crate::map::{build_boundaries, Boundary, TileMap};
use super::sprite::{Player, PlayerSheets, Sprite};

/// Drawing surface size
pub const SCREEN_WIDTH: f32 = 1024.0;
pub const SCREEN_HEIGHT: f32 = 576.0;

/// Loaded scene textures. Any of them may be missing; a missing texture
/// simply never renders.
#[derive(Default)]
pub struct SceneTextures {
    pub background: Option<Texture2D>,
    pub foreground: Option<Texture2D>,
    pub player: PlayerSheets,
}

pub struct GameWorld {
    pub background: Sprite,
    pub foreground: Sprite,
    pub boundaries: Vec<Boundary>,
    pub player: Player,
}

impl GameWorld {
    /// Build the scene: layer sprites anchored at the map offset, one
    /// boundary per solid grid cell, player at screen center.
    pub fn new(map: &TileMap, textures: SceneTextures) -> Self {
        let anchor = vec2(map.offset.0, map.offset.1);

        Self {
            background: Sprite::new(anchor, textures.background),
            foreground: Sprite::new(anchor, textures.foreground),
            boundaries: build_boundaries(map),
            player: Player::new(textures.player),
        }
    }

    /// Shift every movable by (dx, dy). The player stays where it is.
    pub fn scroll(&mut self, dx: f32, dy: f32) {
        self.background.position.x += dx;
        self.background.position.y += dy;

        for boundary in &mut self.boundaries {
            boundary.rect.x += dx;
            boundary.rect.y += dy;
        }

        self.foreground.position.x += dx;
        self.foreground.position.y += dy;
    }

    /// Full redraw in fixed order: background, boundaries, player,
    /// foreground.
    pub fn draw(&mut self) {
        self.background.draw();

        for boundary in &self.boundaries {
            boundary.draw();
        }

        self.player.draw();
        self.foreground.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::SOLID;

    fn two_tile_map() -> TileMap {
        TileMap {
            width: 3,
            tiles: vec![SOLID, 0, 0, 0, 0, SOLID],
            offset: (-735.0, -600.0),
        }
    }

    #[test]
    fn test_world_builds_boundaries_from_map() {
        let world = GameWorld::new(&two_tile_map(), SceneTextures::default());
        assert_eq!(world.boundaries.len(), 2);
        assert!((world.background.position.x + 735.0).abs() < 0.001);
        assert!((world.foreground.position.y + 600.0).abs() < 0.001);
    }

    #[test]
    fn test_scroll_shifts_every_movable_but_not_player() {
        let mut world = GameWorld::new(&two_tile_map(), SceneTextures::default());

        let player_before = world.player.sprite.position;
        let boundary_before = world.boundaries[0].rect;

        world.scroll(3.0, -1.5);

        assert!((world.background.position.x - (-735.0 + 3.0)).abs() < 0.001);
        assert!((world.background.position.y - (-600.0 - 1.5)).abs() < 0.001);
        assert!((world.foreground.position.x - (-735.0 + 3.0)).abs() < 0.001);
        assert!((world.boundaries[0].rect.x - (boundary_before.x + 3.0)).abs() < 0.001);
        assert!((world.boundaries[0].rect.y - (boundary_before.y - 1.5)).abs() < 0.001);

        // boundary size untouched, player untouched
        assert!((world.boundaries[0].rect.w - boundary_before.w).abs() < 0.001);
        assert_eq!(world.player.sprite.position, player_before);
    }
}

//! Sprites and frame animation
//!
//! A sprite is a textured rectangle with a frame descriptor for horizontal
//! sprite sheets. Textures are optional: a sprite whose image failed to
//! load draws nothing and the game keeps running (asset failures are
//! silent beyond the startup log line).

use macroquad::prelude::*;

use super::rect::Rect;
use super::world::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Frames per directional player sheet
pub const PLAYER_FRAMES: u32 = 4;
/// Pixel size of one directional player sheet
pub const PLAYER_SHEET_WIDTH: f32 = 192.0;
pub const PLAYER_SHEET_HEIGHT: f32 = 68.0;

/// Animation frame descriptor for a horizontal sprite sheet
#[derive(Debug, Clone, Copy)]
pub struct Frames {
    /// Total frame count in the sheet
    pub max: u32,
    /// Currently displayed frame
    pub current: u32,
    /// Tick counter, only advanced while the sprite is moving
    pub elapsed: u32,
    /// Ticks per frame advance; the movement resolver reassigns this
    /// every frame from the crouch/sprint modifiers
    pub rate: u32,
}

impl Frames {
    /// A single-frame (non-animated) descriptor
    pub fn still() -> Self {
        Self::sheet(1)
    }

    /// A descriptor for a sheet of `max` frames
    pub fn sheet(max: u32) -> Self {
        Self {
            max,
            current: 0,
            elapsed: 0,
            rate: 4,
        }
    }

    /// Advance the animation by one tick.
    ///
    /// The counter only runs for multi-frame sheets. Every `rate` ticks
    /// the frame index advances, wrapping to 0 after the last frame.
    pub fn tick(&mut self) {
        if self.max > 1 {
            self.elapsed += 1;
        }
        if self.elapsed % self.rate == 0 {
            self.current = if self.current < self.max - 1 {
                self.current + 1
            } else {
                0
            };
        }
    }
}

/// A drawable, movable textured rectangle
pub struct Sprite {
    pub position: Vec2,
    /// Size of one frame (the full texture for single-frame sprites)
    pub size: Vec2,
    pub texture: Option<Texture2D>,
    pub frames: Frames,
    /// Whether the animation advances this frame
    pub moving: bool,
}

impl Sprite {
    /// A single-frame sprite sized to its texture
    pub fn new(position: Vec2, texture: Option<Texture2D>) -> Self {
        let size = texture
            .as_ref()
            .map(|t| vec2(t.width(), t.height()))
            .unwrap_or(Vec2::ZERO);
        Self {
            position,
            size,
            texture,
            frames: Frames::still(),
            moving: false,
        }
    }

    /// A sprite backed by a horizontal sheet of `max` frames
    pub fn sheet(position: Vec2, texture: Option<Texture2D>, max: u32) -> Self {
        let mut sprite = Self::new(position, texture);
        sprite.frames = Frames::sheet(max);
        if let Some(t) = &sprite.texture {
            sprite.size = vec2(t.width() / max as f32, t.height());
        }
        sprite
    }

    /// Bounding rectangle used for collision
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    /// Advance animation state; a sprite that is not moving never animates
    pub fn animate(&mut self) {
        if !self.moving {
            return;
        }
        self.frames.tick();
    }

    /// Draw the current frame, then tick the animation
    pub fn draw(&mut self) {
        if let Some(texture) = &self.texture {
            let frame = macroquad::math::Rect::new(
                self.frames.current as f32 * self.size.x,
                0.0,
                self.size.x,
                self.size.y,
            );
            draw_texture_ex(
                texture,
                self.position.x,
                self.position.y,
                WHITE,
                DrawTextureParams {
                    source: Some(frame),
                    dest_size: Some(self.size),
                    ..Default::default()
                },
            );
        }
        self.animate();
    }
}

/// Which directional sheet the player is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

/// The four directional player sheets
#[derive(Default)]
pub struct PlayerSheets {
    pub up: Option<Texture2D>,
    pub down: Option<Texture2D>,
    pub left: Option<Texture2D>,
    pub right: Option<Texture2D>,
}

impl PlayerSheets {
    fn get(&self, facing: Facing) -> Option<Texture2D> {
        match facing {
            Facing::Up => self.up.clone(),
            Facing::Down => self.down.clone(),
            Facing::Left => self.left.clone(),
            Facing::Right => self.right.clone(),
        }
    }
}

/// The player sprite.
///
/// The screen position is fixed at the center of the window for the whole
/// game; walking scrolls the world underneath instead.
pub struct Player {
    pub sprite: Sprite,
    pub facing: Facing,
    sheets: PlayerSheets,
}

impl Player {
    /// Spawn at the fixed screen-center position, facing down
    pub fn new(sheets: PlayerSheets) -> Self {
        let frame_width = PLAYER_SHEET_WIDTH / PLAYER_FRAMES as f32;
        let position = vec2(
            SCREEN_WIDTH / 2.0 - frame_width / 2.0,
            SCREEN_HEIGHT / 2.0 - PLAYER_SHEET_HEIGHT / 2.0,
        );

        let mut sprite = Sprite::sheet(position, sheets.get(Facing::Down), PLAYER_FRAMES);
        if sprite.size == Vec2::ZERO {
            // no texture loaded; keep the collision box at the art's size
            sprite.size = vec2(frame_width, PLAYER_SHEET_HEIGHT);
        }

        Self {
            sprite,
            facing: Facing::Down,
            sheets,
        }
    }

    /// Swap to the sheet for `facing`. The frame index carries over; the
    /// four sheets are aligned frame-for-frame.
    pub fn face(&mut self, facing: Facing) {
        self.facing = facing;
        self.sprite.texture = self.sheets.get(facing);
    }

    pub fn draw(&mut self) {
        self.sprite.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving_sheet(rate: u32) -> Sprite {
        let mut sprite = Sprite::sheet(vec2(0.0, 0.0), None, 4);
        sprite.frames.rate = rate;
        sprite.moving = true;
        sprite
    }

    #[test]
    fn test_first_advance_on_rate_th_tick() {
        let mut sprite = moving_sheet(4);

        for _ in 0..3 {
            sprite.animate();
        }
        assert_eq!(sprite.frames.current, 0);

        sprite.animate();
        assert_eq!(sprite.frames.current, 1);
    }

    #[test]
    fn test_wraps_after_last_frame() {
        let mut sprite = moving_sheet(4);

        // 4 frames at rate 4: advances on ticks 4, 8, 12, 16
        for _ in 0..16 {
            sprite.animate();
        }
        assert_eq!(sprite.frames.current, 0);
        assert_eq!(sprite.frames.elapsed, 16);
    }

    #[test]
    fn test_static_sprite_never_advances() {
        let mut sprite = moving_sheet(4);
        sprite.moving = false;

        for _ in 0..20 {
            sprite.animate();
        }
        assert_eq!(sprite.frames.current, 0);
        assert_eq!(sprite.frames.elapsed, 0);
    }

    #[test]
    fn test_single_frame_sheet_stays_on_frame_zero() {
        let mut sprite = Sprite::new(vec2(0.0, 0.0), None);
        sprite.moving = true;

        for _ in 0..10 {
            sprite.animate();
        }
        assert_eq!(sprite.frames.current, 0);
    }

    #[test]
    fn test_player_spawn_position() {
        let player = Player::new(PlayerSheets::default());

        // centered on screen: (1024 - 48) / 2, (576 - 68) / 2
        assert!((player.sprite.position.x - 488.0).abs() < 0.001);
        assert!((player.sprite.position.y - 254.0).abs() < 0.001);
        assert!((player.sprite.size.x - 48.0).abs() < 0.001);
        assert!((player.sprite.size.y - 68.0).abs() < 0.001);
        assert_eq!(player.facing, Facing::Down);
    }
}

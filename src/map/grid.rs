//! Tile grid and boundary placement
//!
//! The collision layer is authored as a flat row-major array of tile codes
//! plus a row width. At startup the grid is sliced into rows and every
//! solid cell becomes one fixed-size Boundary rectangle. The grid itself
//! is never mutated after the build; only boundary positions shift when
//! the world scrolls.

use macroquad::prelude::{draw_rectangle, RED};

use crate::game::Rect;
use serde::{Deserialize, Serialize};

/// Side length of one tile in world units
pub const TILE_SIZE: f32 = 48.0;

/// Tile code marking a solid (collision) cell
pub const SOLID: u32 = 1025;

/// Collision layer data as authored in the map file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    /// Number of columns per row
    pub width: usize,
    /// Row-major tile codes; length must be a multiple of `width`
    pub tiles: Vec<u32>,
    /// World position of the map's top-left corner
    pub offset: (f32, f32),
}

impl TileMap {
    /// Iterate the flat code array as rows
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.tiles.chunks(self.width.max(1))
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.tiles.len() / self.width
        }
    }
}

/// A static solid tile blocking player movement.
///
/// Size is fixed at `TILE_SIZE` square and never changes; the position is
/// set once from the grid cell and shifts only when the world scrolls.
#[derive(Debug, Clone, Copy)]
pub struct Boundary {
    pub rect: Rect,
}

impl Boundary {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, TILE_SIZE, TILE_SIZE),
        }
    }

    /// Flat red fill, drawn between the background and the player
    pub fn draw(&self) {
        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, RED);
    }
}

/// Instantiate one boundary per solid cell, positioned at
/// `(col * TILE_SIZE + offset.x, row * TILE_SIZE + offset.y)`.
pub fn build_boundaries(map: &TileMap) -> Vec<Boundary> {
    let (offset_x, offset_y) = map.offset;
    let mut boundaries = Vec::new();

    for (row, codes) in map.rows().enumerate() {
        for (col, &code) in codes.iter().enumerate() {
            if code == SOLID {
                boundaries.push(Boundary::new(
                    col as f32 * TILE_SIZE + offset_x,
                    row as f32 * TILE_SIZE + offset_y,
                ));
            }
        }
    }

    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_per_solid_cell() {
        // 4 columns, 2 rows, one solid cell at row 1 / col 2
        let map = TileMap {
            width: 4,
            tiles: vec![0, 0, 0, 0, 0, 0, SOLID, 0],
            offset: (-10.0, 5.0),
        };

        let boundaries = build_boundaries(&map);
        assert_eq!(boundaries.len(), 1);

        let rect = boundaries[0].rect;
        assert!((rect.x - (2.0 * TILE_SIZE - 10.0)).abs() < 0.001);
        assert!((rect.y - (1.0 * TILE_SIZE + 5.0)).abs() < 0.001);
        assert!((rect.w - TILE_SIZE).abs() < 0.001);
        assert!((rect.h - TILE_SIZE).abs() < 0.001);
    }

    #[test]
    fn test_non_solid_codes_ignored() {
        let map = TileMap {
            width: 3,
            tiles: vec![1, 2, 1024, 1026, 0, SOLID],
            offset: (0.0, 0.0),
        };

        assert_eq!(build_boundaries(&map).len(), 1);
    }

    #[test]
    fn test_rows_and_height() {
        let map = TileMap {
            width: 3,
            tiles: vec![0; 9],
            offset: (0.0, 0.0),
        };

        assert_eq!(map.height(), 3);
        assert_eq!(map.rows().count(), 3);
        assert!(map.rows().all(|row| row.len() == 3));
    }
}

//! Built-in fallback map
//!
//! Used when the map asset is missing or fails validation, so the binary
//! always has something to walk around in. The layout is a walled
//! courtyard around the spawn point with a gap in the north wall, sized
//! to the same 70-column grid as the shipped town map.

use super::{TileMap, SOLID};

/// Columns in the shipped town map
pub const SAMPLE_WIDTH: usize = 70;
/// Rows in the fallback map
pub const SAMPLE_HEIGHT: usize = 30;

/// World offset of the shipped town map
pub const SAMPLE_OFFSET: (f32, f32) = (-735.0, -600.0);

/// Build the fallback map.
///
/// With the standard offset the spawn point sits near grid cell
/// (col 25, row 17), so the courtyard walls at cols 16..=35 and
/// rows 13..=24 are all on screen at startup.
pub fn sample_map() -> TileMap {
    let mut tiles = vec![0u32; SAMPLE_WIDTH * SAMPLE_HEIGHT];

    let (left, right) = (16usize, 35usize);
    let (top, bottom) = (13usize, 24usize);

    for col in left..=right {
        // gap in the north wall so the courtyard can be left
        if !(25..=26).contains(&col) {
            tiles[top * SAMPLE_WIDTH + col] = SOLID;
        }
        tiles[bottom * SAMPLE_WIDTH + col] = SOLID;
    }
    for row in top..=bottom {
        tiles[row * SAMPLE_WIDTH + left] = SOLID;
        tiles[row * SAMPLE_WIDTH + right] = SOLID;
    }

    TileMap {
        width: SAMPLE_WIDTH,
        tiles,
        offset: SAMPLE_OFFSET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::build_boundaries;

    #[test]
    fn test_sample_map_shape() {
        let map = sample_map();
        assert_eq!(map.width, SAMPLE_WIDTH);
        assert_eq!(map.height(), SAMPLE_HEIGHT);
        assert_eq!(map.tiles.len() % map.width, 0);
    }

    #[test]
    fn test_sample_map_has_boundaries() {
        let boundaries = build_boundaries(&sample_map());
        assert!(!boundaries.is_empty());
    }

    #[test]
    fn test_spawn_cell_is_open() {
        let map = sample_map();
        // the cell under the spawn point must not be solid
        assert_ne!(map.tiles[17 * SAMPLE_WIDTH + 25], SOLID);
    }
}

//! Map loading
//!
//! Collision maps are RON (Rusty Object Notation) files holding a
//! [`TileMap`]. Files are validated after parsing; a map that fails
//! validation is rejected with a typed error and the caller decides what
//! to fall back to.

use std::fs;
use std::path::Path;

use super::TileMap;

/// Validation limits to prevent resource exhaustion from malformed files
pub mod limits {
    /// Maximum columns per row
    pub const MAX_WIDTH: usize = 512;
    /// Maximum total tile count
    pub const MAX_TILES: usize = 1 << 20;
    /// Maximum absolute world offset
    pub const MAX_OFFSET: f32 = 1_000_000.0;
}

/// Error type for map loading
#[derive(Debug)]
pub enum MapError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Validation(String),
}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        MapError::Io(e)
    }
}

impl From<ron::error::SpannedError> for MapError {
    fn from(e: ron::error::SpannedError) -> Self {
        MapError::Parse(e)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "IO error: {}", e),
            MapError::Parse(e) => write!(f, "Parse error: {}", e),
            MapError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Load and validate a map file
pub fn load_map(path: &Path) -> Result<TileMap, MapError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

/// Parse and validate map text
pub fn parse_map(text: &str) -> Result<TileMap, MapError> {
    let map: TileMap = ron::from_str(text)?;
    validate_map(&map).map_err(MapError::Validation)?;
    Ok(map)
}

fn validate_map(map: &TileMap) -> Result<(), String> {
    if map.width == 0 {
        return Err("map width is zero".to_string());
    }
    if map.width > limits::MAX_WIDTH {
        return Err(format!(
            "map width too large ({} > {})",
            map.width,
            limits::MAX_WIDTH
        ));
    }
    if map.tiles.len() > limits::MAX_TILES {
        return Err(format!(
            "too many tiles ({} > {})",
            map.tiles.len(),
            limits::MAX_TILES
        ));
    }
    if map.tiles.len() % map.width != 0 {
        return Err(format!(
            "tile count {} is not a multiple of width {}",
            map.tiles.len(),
            map.width
        ));
    }

    let (x, y) = map.offset;
    for v in [x, y] {
        if !v.is_finite() || v.abs() > limits::MAX_OFFSET {
            return Err(format!("invalid offset component {}", v));
        }
    }

    Ok(())
}

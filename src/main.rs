//! PELLET TOWN: a top-down tile-scrolling overworld demo
//!
//! A single player sprite sits fixed at screen center and walks a tiled
//! town map. All apparent movement is the world scrolling the other way,
//! blocked by a static collision grid built once from the map data.
//! Controls: W/A/S/D or arrows to walk, C to crouch, Space to sprint.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod game;
mod input;
mod map;

use macroquad::prelude::*;
use std::path::Path;

use game::{GameWorld, PlayerSheets, SceneTextures, SCREEN_HEIGHT, SCREEN_WIDTH};
use input::KeyState;
use map::{load_map, sample_map, TileMap};

const MAP_PATH: &str = "assets/maps/pellet_town.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Pellet Town v{}", VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

/// Load a texture, or None with a logged line. A sprite with no texture
/// renders nothing, so the game keeps running with whatever art loaded.
async fn try_load_texture(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            Some(texture)
        }
        Err(e) => {
            println!("Failed to load {}: {}", path, e);
            None
        }
    }
}

/// Load the town map, falling back to the built-in sample
fn load_town_map() -> TileMap {
    match load_map(Path::new(MAP_PATH)) {
        Ok(map) => {
            println!("Loaded {} ({}x{} tiles)", MAP_PATH, map.width, map.height());
            map
        }
        Err(e) => {
            println!("Failed to load {}: {}. Using the built-in map.", MAP_PATH, e);
            sample_map()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let textures = SceneTextures {
        background: try_load_texture("assets/tiled/background.png").await,
        foreground: try_load_texture("assets/tiled/foreground.png").await,
        player: PlayerSheets {
            up: try_load_texture("assets/images/player_up.png").await,
            down: try_load_texture("assets/images/player_down.png").await,
            left: try_load_texture("assets/images/player_left.png").await,
            right: try_load_texture("assets/images/player_right.png").await,
        },
    };

    let map = load_town_map();
    let mut world = GameWorld::new(&map, textures);
    let mut keys = KeyState::new();

    loop {
        keys.poll();
        game::movement::update(&mut world, &keys);

        clear_background(WHITE);
        world.draw();

        next_frame().await;
    }
}

//=========================================================================
// Math Dungeon
//=========================================================================
//
// Binary entry point: logger, room configuration, engine wiring.
//
// Log level defaults to `info`; override with `RUST_LOG`.
//
//=========================================================================

use std::process::ExitCode;

use log::{error, info};
use math_dungeon::prelude::*;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Math Dungeon starting...");

    let config = RoomConfig::default();
    let dungeon = match DungeonScene::new(config) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Invalid room configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = EngineBuilder::<GameScene, GameAction>::new()
        .with_window_size(config.viewport_width as u32, config.viewport_height as u32)
        .build()
        .init(|systems| {
            bind_default_keys(&mut systems.input);
            systems
                .scene_manager
                .register_default(GameScene::Preloader, PreloaderScene);
            systems.scene_manager.register_scene(GameScene::Dungeon, dungeon);
        })
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

//=========================================================================
// Math Dungeon - Library Root
//=========================================================================
//
// Tile-based dungeon prototype on a small fixed-tick scene engine.
//
// Layers:
// - `core`: input, scenes and the fixed-timestep orchestrator
// - `dungeon`: the room, movement, camera and scenes of the game
// - `platform` (private): winit window and event loop
// - `engine`: builder and runtime facade tying the above together
//
// Typical usage:
// ```no_run
// use math_dungeon::prelude::*;
//
// let scene = DungeonScene::new(RoomConfig::default())?;
// EngineBuilder::<GameScene, GameAction>::new()
//     .build()
//     .init(|systems| { /* bindings and scenes */ })
//     .run()?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod core;
pub mod dungeon;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` holds the winit integration and is not part of the public
// API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};

//=========================================================================
// Dungeon
//=========================================================================
//
// Game layer: one walled room, a tile-stepping player and a following
// camera, hosted as engine scenes.
//
// Data flow per tick:
//   ActionState ─> DirectionIntent ─> MovementController ─> RoomGrid (is_wall)
//                                          │
//                                          └─> player position ─> CameraController
//
// RoomWorld is built once per visit of the dungeon scene from the grid.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod camera;
pub mod config;
pub mod grid;
pub mod input_map;
pub mod movement;
pub mod room;
pub mod scenes;

//=== Public API ==========================================================

pub use camera::CameraController;
pub use config::{ConfigError, RoomConfig};
pub use grid::{RoomGrid, TileCoord, TileKind, WorldPos};
pub use input_map::{bind_default_keys, DirectionIntent, GameAction};
pub use movement::{MovementController, MovementState, PlayerState, StepAttempt, TickOutcome};
pub use room::{build_room, FloorDecoration, RoomSink, RoomWorld, WallBody};
pub use scenes::{DungeonScene, GameScene, PreloaderScene};

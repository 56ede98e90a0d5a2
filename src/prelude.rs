//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use math_dungeon::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::PlatformError;

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Input system
pub use crate::core::input::{Action, ActionState, KeyCode};

// Scene system
pub use crate::core::scene::{Scene, SceneKey, SceneTransition};

// Dungeon
pub use crate::dungeon::{
    bind_default_keys, ConfigError, DungeonScene, GameAction, GameScene, PreloaderScene,
    RoomConfig,
};

//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and stack-based scene switching.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene>>
//     └─ stack: Vec<S>
//
// Flow:
//   update() → top of stack → Scene::tick()
//   process_transitions() → Scene::teardown() / Scene::initialize()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::Action;

//=== Module Declarations =================================================

mod scene_manager;
mod transition_queue;

//=== Public API ==========================================================

pub use scene_manager::{SceneKey, SceneManager, SceneTransition};
pub use transition_queue::TransitionQueue;

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks and per-tick logic.
///
/// Scenes are plain values registered in the [`SceneManager`]; the host
/// loop drives them through `initialize` → `tick`* → `teardown`. A scene
/// that is entered again gets a fresh `initialize` call.
///
/// # Minimal Implementation
///
/// Only `tick()` is required. Lifecycle hooks have default empty implementations:
///
/// ```rust
/// # use math_dungeon::prelude::*;
/// # use std::time::Duration;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum MyScenes { Main }
/// # impl SceneKey for MyScenes {}
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum MyAction { Go }
/// # impl Action for MyAction {}
/// struct MyScene;
///
/// impl Scene<MyScenes, MyAction> for MyScene {
///     fn tick(&mut self, _context: &mut GlobalContext<MyScenes, MyAction>, _elapsed: Duration) {
///         // Only this method is required
///     }
/// }
/// ```
pub trait Scene<S: SceneKey, A: Action> {
    /// Called when the scene becomes active.
    ///
    /// Default implementation does nothing. Override to build scene state.
    fn initialize(&mut self, _context: &mut GlobalContext<S, A>) {}

    /// Called once per fixed tick while the scene is on top of the stack.
    ///
    /// `elapsed` is the fixed tick duration; scenes that need a clock
    /// accumulate it.
    fn tick(&mut self, context: &mut GlobalContext<S, A>, elapsed: Duration);

    /// Called when the scene leaves the stack.
    ///
    /// Default implementation does nothing. Override to drop scene state.
    fn teardown(&mut self, _context: &mut GlobalContext<S, A>) {}
}

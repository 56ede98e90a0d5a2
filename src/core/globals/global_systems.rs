//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains systems that process input, manage scenes, and coordinate
// game logic. Systems operate on GlobalContext data.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{Action, InputSystem};
use crate::core::scene::{SceneKey, SceneManager};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `input`: Key bindings and per-tick action resolution
/// - `scene_manager`: Stack-based scene lifecycle manager
pub struct GlobalSystems<S: SceneKey, A: Action> {
    /// The input system for action mapping and input processing.
    pub input: InputSystem<A>,

    /// The scene manager for scene lifecycle and stack management.
    pub scene_manager: SceneManager<S, A>,
}

impl<S: SceneKey, A: Action> GlobalSystems<S, A> {
    /// Creates a new systems container with default-initialized systems.
    ///
    /// Users should access systems via [`crate::Engine::init`] instead.
    pub(crate) fn new() -> Self {
        Self {
            input: InputSystem::new(),
            scene_manager: SceneManager::new(),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one fixed tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input Processing**: Converts this tick's events into key state and actions
    /// 2. **Scene Tick**: Ticks the active scene with the fixed `elapsed`
    /// 3. **Transition Processing**: Applies queued scene transitions
    pub(crate) fn update(&mut self, context: &mut GlobalContext<S, A>, elapsed: Duration) {
        // 1. Process input events into state and actions
        let events = std::mem::take(&mut context.frame_events);
        self.input
            .process_frame(&mut context.input_state, &events, &mut context.actions);

        // 2. Tick the active scene (reads actions from context)
        self.scene_manager.update(context, elapsed);

        // 3. Process scene transitions
        self.scene_manager.process_transitions(context);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::scene::{Scene, SceneTransition};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Menu,
        Play,
    }

    impl SceneKey for TestScene {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Start,
    }

    impl Action for TestAction {}

    /// Switches to `Play` when `Start` is pressed.
    struct Menu;

    impl Scene<TestScene, TestAction> for Menu {
        fn tick(&mut self, context: &mut GlobalContext<TestScene, TestAction>, _elapsed: Duration) {
            if context.actions.is_pressed(TestAction::Start) {
                context
                    .scene_transitions
                    .push(SceneTransition::Replace(TestScene::Menu, TestScene::Play));
            }
        }
    }

    struct Play;

    impl Scene<TestScene, TestAction> for Play {
        fn tick(&mut self, _context: &mut GlobalContext<TestScene, TestAction>, _elapsed: Duration) {}
    }

    #[test]
    fn input_reaches_scene_in_the_same_tick() {
        let mut systems = GlobalSystems::new();
        let mut context = GlobalContext::new();

        systems.input.bind_key(KeyCode::Enter, TestAction::Start);
        systems.scene_manager.register_default(TestScene::Menu, Menu);
        systems.scene_manager.register_scene(TestScene::Play, Play);
        systems.scene_manager.start(&mut context);

        let tick = Duration::from_millis(16);

        systems.update(&mut context, tick);
        assert_eq!(systems.scene_manager.active_scene(), Some(TestScene::Menu));

        context.frame_events = vec![vec![InputEvent::KeyDown { key: KeyCode::Enter }]];
        systems.update(&mut context, tick);

        assert_eq!(systems.scene_manager.active_scene(), Some(TestScene::Play));
        assert!(context.frame_events.is_empty());
    }
}

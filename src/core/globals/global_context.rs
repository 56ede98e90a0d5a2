//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - input_state: Low-level keyboard state (held keys, per-tick edges)
// - actions: Bound actions resolved for the current tick
// - scene_transitions: Command queue for scene changes
// - window_title: Status line requested by the active scene
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{Action, ActionState, InputEvent, StateTracker};
use crate::core::scene::{SceneKey, TransitionQueue};

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during their lifecycle.
///
/// Scenes receive `&mut GlobalContext` in `initialize`, `tick` and
/// `teardown`. This separates scene-accessible data from internal
/// engine systems.
pub struct GlobalContext<S: SceneKey, A: Action> {
    /// Raw keyboard state for low-level queries.
    pub input_state: StateTracker,

    /// Actions resolved from the key bindings for this tick.
    pub actions: ActionState<A>,

    /// Transition queue for scene changes.
    ///
    /// Scenes queue transitions here during ticks. The scene manager
    /// processes this queue at tick boundaries.
    pub scene_transitions: TransitionQueue<S>,

    /// Window title requested by a scene.
    ///
    /// The platform applies and clears it after each frame.
    pub window_title: Option<String>,

    /// Input events collected for the current tick.
    ///
    /// Filled by the orchestrator and consumed by the input system.
    /// Not meant for scenes (use `input_state` / `actions` instead).
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl<S: SceneKey, A: Action> GlobalContext<S, A> {
    /// Creates a new context with empty state.
    pub(crate) fn new() -> Self {
        Self {
            input_state: StateTracker::new(),
            actions: ActionState::new(),
            scene_transitions: TransitionQueue::new(),
            window_title: None,
            frame_events: Vec::new(),
        }
    }
}

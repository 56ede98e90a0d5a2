//=========================================================================
// Input System
//
// High-level interface for input handling within the engine.
// Owns the key bindings and turns each tick's raw events into the
// persistent key state plus a resolved action snapshot.
//
// Responsibilities:
// - Process batches of platform input events once per tick
// - Update the persistent `StateTracker`
// - Resolve bound keys into held / pressed actions
//
// Notes:
// This system is owned by `GlobalSystems` and updated by the
// CoreSystemsOrchestrator before any scene ticks.
//
//=========================================================================

//=== Submodules ==========================================================
mod action;
mod action_mapper;
pub mod event;
mod state_tracker;

//=== Public API ==========================================================
pub use action::{Action, ActionState};
pub use event::{InputEvent, KeyCode};
pub use state_tracker::StateTracker;

//=== Internal Imports ====================================================
use action_mapper::ActionMapper;

//=== External Crates =====================================================
use log::{debug, trace};

//=== InputSystem =========================================================
//
// Public-facing API for configuring bindings. Queries go through the
// `StateTracker` and `ActionState` held in `GlobalContext`.
//
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
}

impl<A: Action> InputSystem<A> {
    //--- Construction -----------------------------------------------------
    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` to `action`. A key maps to at most one action.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        if let Some(previous) = self.mapper.bind_key(key, action) {
            debug!("Rebound {:?}: {:?} -> {:?}", key, previous, action);
        }
    }

    /// Removes the binding for `key`.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.mapper.unbind_key(key);
    }

    /// Removes every binding that targets `action`.
    pub fn unbind_action(&mut self, action: A) {
        self.mapper.unbind_action(action);
    }

    /// Returns the action bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<A> {
        self.mapper.map_key(key)
    }

    /// Returns all keys currently bound to `action`.
    pub fn keys_for(&self, action: A) -> Vec<KeyCode> {
        self.mapper.keys_for(action).collect()
    }

    //--- process_frame() --------------------------------------------------
    //
    // Clears last tick's edges, digests every batch received for this
    // tick, then resolves the action snapshot.
    //
    pub(crate) fn process_frame(
        &self,
        state: &mut StateTracker,
        batches: &[Vec<InputEvent>],
        actions: &mut ActionState<A>,
    ) {
        state.clear();

        for batch in batches {
            trace!("Processing input batch of {} events", batch.len());
            state.process_events(batch);
        }

        self.mapper.resolve(state, actions);
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps physical keys to game actions based on configured bindings.
//
// Architecture:
//   KeyCode → HashMap → Action
//
// Several keys may map to one action (arrows and WASD both move), so
// resolution walks the bindings against the current key state rather
// than looking up individual events.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::{Action, ActionState},
    event::KeyCode,
    state_tracker::StateTracker,
};

//=== ActionMapper ========================================================

/// Maps keys to actions and resolves the per-tick [`ActionState`].
pub(crate) struct ActionMapper<A: Action> {
    /// Key bindings: key → action
    key_bindings: HashMap<KeyCode, A>,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a new mapper with no bindings.
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action, replacing any previous binding of that key.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A) -> Option<A> {
        self.key_bindings.insert(key, action)
    }

    /// Removes the binding of a key.
    pub(crate) fn unbind_key(&mut self, key: KeyCode) -> Option<A> {
        self.key_bindings.remove(&key)
    }

    /// Removes every key bound to `action`.
    pub(crate) fn unbind_action(&mut self, action: A) {
        self.key_bindings.retain(|_, bound| *bound != action);
    }

    /// Returns the action bound to `key`, if any.
    pub(crate) fn map_key(&self, key: KeyCode) -> Option<A> {
        self.key_bindings.get(&key).copied()
    }

    /// Returns the keys bound to `action`.
    pub(crate) fn keys_for(&self, action: A) -> impl Iterator<Item = KeyCode> + '_ {
        self.key_bindings
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(key, _)| *key)
    }

    //--- Resolution -------------------------------------------------------

    /// Rebuilds `actions` from the current key state.
    pub(crate) fn resolve(&self, state: &StateTracker, actions: &mut ActionState<A>) {
        actions.clear();

        for key in state.keys_down() {
            if let Some(action) = self.map_key(*key) {
                actions.insert_held(action);
            }
        }

        for key in state.keys_pressed() {
            if let Some(action) = self.map_key(*key) {
                actions.insert_pressed(action);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Action Trait & Action State
//=========================================================================
//
// Game-defined action trait and the per-tick resolved action snapshot.
//
// Actions: Opaque identifiers routed by the engine, interpreted by the game.
// ActionState: Which actions are held, and which were pressed this tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// Actions represent high-level gameplay commands (MoveLeft, Confirm)
/// mapped from raw inputs. The engine routes actions without interpreting them.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: Efficient passing and deduplication
/// - `Debug`: Logging support
/// - `Send + 'static`: Storable in engine-owned containers
///
/// # Example
///
/// ```
/// use math_dungeon::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MenuAction { Up, Down, Select }
///
/// impl Action for MenuAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== ActionState =========================================================

/// Actions resolved from the keyboard for the current tick.
///
/// - **held**: at least one bound key is down (level)
/// - **pressed**: at least one bound key went down this tick (edge)
#[derive(Debug, Clone)]
pub struct ActionState<A: Action> {
    held: HashSet<A>,
    pressed: HashSet<A>,
}

impl<A: Action> ActionState<A> {
    /// Creates an empty snapshot (nothing held, nothing pressed).
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            pressed: HashSet::new(),
        }
    }

    /// Returns `true` while any key bound to `action` is held.
    pub fn is_held(&self, action: A) -> bool {
        self.held.contains(&action)
    }

    /// Returns `true` only on the tick a key bound to `action` went down.
    pub fn is_pressed(&self, action: A) -> bool {
        self.pressed.contains(&action)
    }

    /// Returns an iterator over all held actions (unordered).
    pub fn held(&self) -> impl Iterator<Item = &A> {
        self.held.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }

    pub(crate) fn insert_held(&mut self, action: A) {
        self.held.insert(action);
    }

    pub(crate) fn insert_pressed(&mut self, action: A) {
        self.pressed.insert(action);
    }
}

impl<A: Action> Default for ActionState<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

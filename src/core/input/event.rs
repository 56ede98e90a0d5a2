//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level keyboard input.
//
// This module abstracts away platform-specific input (e.g. Winit)
// into a unified, engine-friendly format used by the input subsystem.
//
// Responsibilities:
// - Represent keyboard inputs in a stable, portable way
// - Provide equality and hashing semantics for deduplication
// - Signal focus loss so held keys never get stuck
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (processes events)
//         ↓
//    ActionState (high-level game input)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// For example, `KeyW` is always the same physical key regardless of
/// keyboard layout (QWERTY vs AZERTY), which keeps WASD movement where
/// the player's hand expects it.
///
/// Coverage:
/// - Alphanumeric keys (A-Z, 0-9)
/// - Arrow keys
/// - Common special keys (Space, Enter, Escape, etc.)
///
/// Platform mapping:
/// - Winit: Uses `winit::keyboard::KeyCode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    /// Directional navigation keys
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Tab key
    Tab,

    /// Backspace key
    Backspace,

    /// Delete key
    Delete,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Events are compared by type + key, so consecutive duplicates (OS key
/// repeat) can be collapsed by the platform buffer.
///
/// ```text
/// Equality Rules:
/// KeyDown{A} == KeyDown{A}     ✓
/// KeyDown{A} == KeyUp{A}       ✗ (different type)
/// FocusLost  == FocusLost      ✓
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// The window lost keyboard focus.
    ///
    /// Release events for keys held at that moment are never delivered,
    /// so the state tracker treats this as a release of every held key.
    FocusLost,
}

impl InputEvent {
    /// Returns the key carried by this event, if any.
    pub fn key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown { key } | Self::KeyUp { key } => Some(*key),
            Self::FocusLost => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn same_key_events_are_equal_and_hash_equal() {
        let a = InputEvent::KeyDown { key: KeyCode::KeyW };
        let b = InputEvent::KeyDown { key: KeyCode::KeyW };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn down_and_up_differ() {
        let a = InputEvent::KeyDown { key: KeyCode::Enter };
        let b = InputEvent::KeyUp { key: KeyCode::Enter };
        assert_ne!(a, b);
    }

    #[test]
    fn key_accessor() {
        assert_eq!(InputEvent::KeyUp { key: KeyCode::ArrowLeft }.key(), Some(KeyCode::ArrowLeft));
        assert_eq!(InputEvent::FocusLost.key(), None);
    }

    #[test]
    fn events_deduplicate_in_sets() {
        let mut set = HashSet::new();
        set.insert(InputEvent::KeyDown { key: KeyCode::KeyA });
        set.insert(InputEvent::KeyDown { key: KeyCode::KeyA });
        set.insert(InputEvent::FocusLost);
        set.insert(InputEvent::FocusLost);
        assert_eq!(set.len(), 2);
    }
}

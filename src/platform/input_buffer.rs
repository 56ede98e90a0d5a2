//=========================================================================
// Input Buffer
//=========================================================================
//
// Collects keyboard and focus events between frame boundaries.
// Acts as a transient event aggregator between the Platform and the
// core's event collector.
//
// Responsibilities:
// - Store incoming platform events for the current frame
// - Drop consecutive duplicates (OS key repeat floods)
// - Hand the whole frame over in one batch via `drain()`
//
// Notes:
// The buffer keeps its allocation across frames; `drain()` swaps the
// contents out and leaves an empty vector behind.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

/// Per-frame store of discrete input events, preserving arrival order.
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    const BASE_CAPACITY: usize = 64;

    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            events: Vec::with_capacity(Self::BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Appends an event unless it repeats the previous one.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Returns this frame's events, or `None` when nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.is_empty() {
            return None;
        }

        let replacement = Vec::with_capacity(Self::BASE_CAPACITY);
        Some(std::mem::replace(&mut self.events, replacement))
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

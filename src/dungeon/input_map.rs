//=========================================================================
// Dungeon Input Map
//=========================================================================
//
// Game actions, their default key bindings, and the reduction of held
// movement actions to a single direction.
//
// Bindings:
//   ArrowLeft  / A → MoveLeft        ArrowRight / D → MoveRight
//   ArrowUp    / W → MoveUp          ArrowDown  / S → MoveDown
//   Enter          → Confirm (edge-triggered by the scene)
//
// Priority: Left, Right, Up, Down. The first held direction wins, so
// diagonals never occur and horizontal input beats vertical.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{Action, ActionState, InputSystem, KeyCode};

//=== GameAction ==========================================================

/// Actions the dungeon reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Confirm,
}

impl Action for GameAction {}

/// Installs the arrow + WASD movement bindings and Enter for confirm.
pub fn bind_default_keys(input: &mut InputSystem<GameAction>) {
    const BINDINGS: [(KeyCode, GameAction); 9] = [
        (KeyCode::ArrowLeft, GameAction::MoveLeft),
        (KeyCode::KeyA, GameAction::MoveLeft),
        (KeyCode::ArrowRight, GameAction::MoveRight),
        (KeyCode::KeyD, GameAction::MoveRight),
        (KeyCode::ArrowUp, GameAction::MoveUp),
        (KeyCode::KeyW, GameAction::MoveUp),
        (KeyCode::ArrowDown, GameAction::MoveDown),
        (KeyCode::KeyS, GameAction::MoveDown),
        (KeyCode::Enter, GameAction::Confirm),
    ];

    for (key, action) in BINDINGS {
        input.bind_key(key, action);
    }
}

//=== DirectionIntent =====================================================

/// Single movement command derived from the held actions of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DirectionIntent {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl DirectionIntent {
    /// Held-action checks in priority order.
    const PRIORITY: [(GameAction, DirectionIntent); 4] = [
        (GameAction::MoveLeft, DirectionIntent::Left),
        (GameAction::MoveRight, DirectionIntent::Right),
        (GameAction::MoveUp, DirectionIntent::Up),
        (GameAction::MoveDown, DirectionIntent::Down),
    ];

    /// Reduces the held movement actions to at most one direction.
    pub fn sample(actions: &ActionState<GameAction>) -> Self {
        Self::PRIORITY
            .iter()
            .find(|(action, _)| actions.is_held(*action))
            .map_or(DirectionIntent::None, |&(_, intent)| intent)
    }

    /// Tile offset `(dx, dy)`; rows grow downwards.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            DirectionIntent::None => (0, 0),
            DirectionIntent::Up => (0, -1),
            DirectionIntent::Down => (0, 1),
            DirectionIntent::Left => (-1, 0),
            DirectionIntent::Right => (1, 0),
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, DirectionIntent::None)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, StateTracker};

    /// Runs one input frame with `held` keys pressed from a clean state.
    fn resolve(held: &[KeyCode]) -> ActionState<GameAction> {
        let mut input = InputSystem::new();
        bind_default_keys(&mut input);

        let batch: Vec<_> = held.iter().map(|&key| InputEvent::KeyDown { key }).collect();
        let mut state = StateTracker::new();
        let mut actions = ActionState::new();
        input.process_frame(&mut state, &[batch], &mut actions);
        actions
    }

    #[test]
    fn nothing_held_is_none() {
        assert_eq!(DirectionIntent::sample(&resolve(&[])), DirectionIntent::None);
    }

    #[test]
    fn arrows_and_wasd_map_to_same_direction() {
        let pairs = [
            (KeyCode::ArrowLeft, KeyCode::KeyA, DirectionIntent::Left),
            (KeyCode::ArrowRight, KeyCode::KeyD, DirectionIntent::Right),
            (KeyCode::ArrowUp, KeyCode::KeyW, DirectionIntent::Up),
            (KeyCode::ArrowDown, KeyCode::KeyS, DirectionIntent::Down),
        ];

        for (arrow, letter, expected) in pairs {
            assert_eq!(DirectionIntent::sample(&resolve(&[arrow])), expected);
            assert_eq!(DirectionIntent::sample(&resolve(&[letter])), expected);
        }
    }

    #[test]
    fn left_beats_up() {
        let actions = resolve(&[KeyCode::ArrowUp, KeyCode::ArrowLeft]);
        assert_eq!(DirectionIntent::sample(&actions), DirectionIntent::Left);
    }

    #[test]
    fn priority_order_is_left_right_up_down() {
        let all = [KeyCode::KeyS, KeyCode::KeyW, KeyCode::KeyD, KeyCode::KeyA];
        assert_eq!(DirectionIntent::sample(&resolve(&all)), DirectionIntent::Left);
        assert_eq!(DirectionIntent::sample(&resolve(&all[..3])), DirectionIntent::Right);
        assert_eq!(DirectionIntent::sample(&resolve(&all[..2])), DirectionIntent::Up);
        assert_eq!(DirectionIntent::sample(&resolve(&all[..1])), DirectionIntent::Down);
    }

    #[test]
    fn enter_is_confirm_and_not_a_direction() {
        let actions = resolve(&[KeyCode::Enter]);
        assert!(actions.is_pressed(GameAction::Confirm));
        assert_eq!(DirectionIntent::sample(&actions), DirectionIntent::None);
    }

    #[test]
    fn deltas_are_single_axis_unit_steps() {
        for intent in [
            DirectionIntent::Up,
            DirectionIntent::Down,
            DirectionIntent::Left,
            DirectionIntent::Right,
        ] {
            let (dx, dy) = intent.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{:?}", intent);
        }
        assert_eq!(DirectionIntent::None.delta(), (0, 0));
        assert!(DirectionIntent::None.is_none());
    }
}

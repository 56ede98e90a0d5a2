//=========================================================================
// Movement Controller
//=========================================================================
//
// Tile-stepping state machine for the player token.
//
// States:
// ```text
//            intent sampled, target is floor
//   ┌──────┐ ───────────────────────────────> ┌────────┐
//   │ Idle │                                  │ Moving │
//   └──────┘ <─────────────────────────────── └────────┘
//      │      now - started >= step duration
//      └─ intent into a wall: refused, stays Idle
// ```
//
// The controller never reads input itself. `update` takes a sampler
// closure and only calls it while Idle, so input arriving mid-step is
// never observed. Time comes from a monotonic clock owned by the caller.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::grid::{RoomGrid, TileCoord, WorldPos};
use super::input_map::DirectionIntent;

//=== Constants ===========================================================

/// Time one tile-step takes.
pub const DEFAULT_STEP_DURATION: Duration = Duration::from_millis(150);

/// Player token edge length relative to the tile size.
pub const PLAYER_SCALE: f32 = 0.7;

//=== StepAnimation =======================================================

/// Linear move between two adjacent tile centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepAnimation {
    pub from: TileCoord,
    pub to: TileCoord,
    pub from_pos: WorldPos,
    pub to_pos: WorldPos,
    /// Clock reading when the step began.
    pub started: Duration,
    pub duration: Duration,
}

impl StepAnimation {
    /// Fraction of the step completed at `now`, in `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_complete(&self, now: Duration) -> bool {
        now.saturating_sub(self.started) >= self.duration
    }

    pub fn position_at(&self, now: Duration) -> WorldPos {
        self.from_pos.lerp(self.to_pos, self.progress(now))
    }
}

//=== MovementState =======================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementState {
    Idle,
    Moving(StepAnimation),
}

impl MovementState {
    pub fn is_moving(&self) -> bool {
        matches!(self, MovementState::Moving(_))
    }
}

//=== PlayerState =========================================================

/// Logical tile, animated position and movement flag of the player.
///
/// `tile` is the last tile the player settled on; during a step the
/// destination is available from the [`StepAnimation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    tile: TileCoord,
    position: WorldPos,
    state: MovementState,
    display_size: f32,
}

impl PlayerState {
    fn at(grid: &RoomGrid, tile: TileCoord) -> Self {
        Self {
            tile,
            position: grid.tile_center(tile),
            state: MovementState::Idle,
            display_size: grid.tile_size() * PLAYER_SCALE,
        }
    }

    pub fn tile(&self) -> TileCoord {
        self.tile
    }

    pub fn position(&self) -> WorldPos {
        self.position
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn is_moving(&self) -> bool {
        self.state.is_moving()
    }

    /// Edge length the token is drawn at.
    pub fn display_size(&self) -> f32 {
        self.display_size
    }
}

//=== Tick Results ========================================================

/// Result of handling a sampled direction while Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAttempt {
    Started { from: TileCoord, to: TileCoord },
    /// Target was a wall; nothing changed.
    Refused { target: TileCoord },
}

/// What happened during one `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Tile reached by a step that finished this tick.
    pub completed: Option<TileCoord>,
    /// Set when a direction was sampled this tick.
    pub attempt: Option<StepAttempt>,
}

//=== MovementController ==================================================

type StepCallback = Box<dyn FnMut(TileCoord)>;

/// Sole owner and mutator of [`PlayerState`].
pub struct MovementController {
    grid: RoomGrid,
    step_duration: Duration,
    player: PlayerState,
    on_step_complete: Option<StepCallback>,
}

impl MovementController {
    /// Places the player, Idle, on the room's center tile.
    pub fn new(grid: RoomGrid) -> Self {
        let player = PlayerState::at(&grid, grid.center_tile());
        Self {
            grid,
            step_duration: DEFAULT_STEP_DURATION,
            player,
            on_step_complete: None,
        }
    }

    /// Overrides the tile-step duration.
    ///
    /// # Panics
    ///
    /// Panics if `duration` is zero.
    pub fn with_step_duration(mut self, duration: Duration) -> Self {
        assert!(!duration.is_zero(), "Step duration must be positive");
        self.step_duration = duration;
        self
    }

    /// Registers a callback invoked with the destination of every completed step.
    pub fn on_step_complete<F>(mut self, callback: F) -> Self
    where
        F: FnMut(TileCoord) + 'static,
    {
        self.on_step_complete = Some(Box::new(callback));
        self
    }

    //--- Queries ----------------------------------------------------------

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn grid(&self) -> &RoomGrid {
        &self.grid
    }

    pub fn step_duration(&self) -> Duration {
        self.step_duration
    }

    //--- Update -----------------------------------------------------------

    /// Advances the state machine to clock reading `now`.
    ///
    /// While Moving, the position follows the animation and `sample_intent`
    /// is not called. A step that finishes this tick snaps the player onto
    /// its target tile; the controller is then Idle and samples input in
    /// the same tick.
    pub fn update<F>(&mut self, now: Duration, sample_intent: F) -> TickOutcome
    where
        F: FnOnce() -> DirectionIntent,
    {
        let mut outcome = TickOutcome::default();

        if let MovementState::Moving(step) = self.player.state {
            if !step.is_complete(now) {
                self.player.position = step.position_at(now);
                return outcome;
            }

            self.finish_step(&step);
            outcome.completed = Some(step.to);
        }

        let intent = sample_intent();
        if !intent.is_none() {
            outcome.attempt = Some(self.try_step(intent, now));
        }

        outcome
    }

    //--- Internal Helpers -------------------------------------------------

    fn finish_step(&mut self, step: &StepAnimation) {
        self.player.tile = step.to;
        self.player.position = step.to_pos;
        self.player.state = MovementState::Idle;

        debug!(target: "dungeon::movement", "Step complete at {}", step.to);

        if let Some(callback) = self.on_step_complete.as_mut() {
            callback(step.to);
        }
    }

    fn try_step(&mut self, intent: DirectionIntent, now: Duration) -> StepAttempt {
        let current = self.grid.world_to_tile(self.player.position);
        let target = current.offset(intent.delta());

        if self.grid.is_wall(target) {
            trace!(target: "dungeon::movement", "Refused {:?} from {} into wall {}", intent, current, target);
            return StepAttempt::Refused { target };
        }

        let step = StepAnimation {
            from: current,
            to: target,
            from_pos: self.grid.tile_center(current),
            to_pos: self.grid.tile_center(target),
            started: now,
            duration: self.step_duration,
        };

        debug!(target: "dungeon::movement", "Step {:?}: {} -> {}", intent, current, target);

        self.player.tile = current;
        self.player.state = MovementState::Moving(step);

        StepAttempt::Started { from: current, to: target }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

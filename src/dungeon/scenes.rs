//=========================================================================
// Dungeon Scenes
//=========================================================================
//
// Scene host wiring for the game.
//
// Scene cycle:
// ```text
//   start ──> Preloader ──(next boundary)──> Dungeon
//                 ^                              │
//                 └──────── Enter (Confirm) ─────┘
// ```
//
// The Dungeon scene owns one room session per visit: grid-backed static
// content, the movement controller, the camera and a monotonic clock
// accumulated from tick durations. Leaving the scene drops the session,
// so every visit starts with a fresh room and the player on the center
// tile.
//
// Drawing happens outside the engine: `room()`, `player()` and `camera()`
// expose the static bodies, the player sprite size and the rounded
// scroll for an external renderer. The engine itself only updates the
// window title.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::camera::CameraController;
use super::config::{ConfigError, RoomConfig};
use super::grid::RoomGrid;
use super::input_map::{DirectionIntent, GameAction};
use super::movement::{MovementController, PlayerState};
use super::room::RoomWorld;
use crate::core::globals::GlobalContext;
use crate::core::scene::{Scene, SceneKey, SceneTransition};

//=== GameScene ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameScene {
    Preloader,
    Dungeon,
}

impl SceneKey for GameScene {}

type Context = GlobalContext<GameScene, GameAction>;

//=== PreloaderScene ======================================================

/// Placeholder loading phase; hands over to the dungeon immediately.
#[derive(Debug, Default)]
pub struct PreloaderScene;

impl Scene<GameScene, GameAction> for PreloaderScene {
    fn initialize(&mut self, context: &mut Context) {
        info!(target: "dungeon::scenes", "Preloader ready, entering dungeon");
        context
            .scene_transitions
            .push(SceneTransition::Replace(GameScene::Preloader, GameScene::Dungeon));
    }

    fn tick(&mut self, _context: &mut Context, _elapsed: Duration) {}
}

//=== DungeonScene ========================================================

/// State that lives for one visit of the dungeon scene.
struct RoomSession {
    world: RoomWorld,
    movement: MovementController,
    camera: CameraController,
    clock: Duration,
    status: String,
}

/// Single room with a tile-stepping player and a following camera.
pub struct DungeonScene {
    config: RoomConfig,
    grid: RoomGrid,
    session: Option<RoomSession>,
}

impl DungeonScene {
    /// Validates `config` up front so entering the scene cannot fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a degenerate room or viewport.
    pub fn new(config: RoomConfig) -> Result<Self, ConfigError> {
        let grid = RoomGrid::new(&config)?;
        Ok(Self {
            config,
            grid,
            session: None,
        })
    }

    //--- Queries ----------------------------------------------------------

    /// Player of the current visit, `None` while the scene is inactive.
    pub fn player(&self) -> Option<&PlayerState> {
        self.session.as_ref().map(|s| s.movement.player())
    }

    pub fn room(&self) -> Option<&RoomWorld> {
        self.session.as_ref().map(|s| &s.world)
    }

    pub fn camera(&self) -> Option<&CameraController> {
        self.session.as_ref().map(|s| &s.camera)
    }

    pub fn grid(&self) -> &RoomGrid {
        &self.grid
    }
}

impl Scene<GameScene, GameAction> for DungeonScene {
    fn initialize(&mut self, context: &mut Context) {
        let world = RoomWorld::build(&self.grid);
        let movement = MovementController::new(self.grid);
        let camera = CameraController::new(
            &self.grid,
            self.config.viewport_width,
            self.config.viewport_height,
        );

        info!(
            target: "dungeon::scenes",
            "Entering {}x{} room, player at {}",
            self.grid.size(),
            self.grid.size(),
            movement.player().tile()
        );

        let status = status_line(movement.player());
        context.window_title = Some(status.clone());

        self.session = Some(RoomSession {
            world,
            movement,
            camera,
            clock: Duration::ZERO,
            status,
        });
    }

    fn tick(&mut self, context: &mut Context, elapsed: Duration) {
        let Some(session) = self.session.as_mut() else {
            warn!(target: "dungeon::scenes", "Dungeon ticked without an active room");
            return;
        };

        if context.actions.is_pressed(GameAction::Confirm) {
            info!(target: "dungeon::scenes", "Confirm pressed, leaving dungeon");
            context
                .scene_transitions
                .push(SceneTransition::Replace(GameScene::Dungeon, GameScene::Preloader));
        }

        session.clock += elapsed;

        let actions = &context.actions;
        session
            .movement
            .update(session.clock, || DirectionIntent::sample(actions));

        session.camera.follow(session.movement.player().position());

        let status = status_line(session.movement.player());
        if status != session.status {
            context.window_title = Some(status.clone());
            session.status = status;
        }
    }

    fn teardown(&mut self, _context: &mut Context) {
        if let Some(session) = self.session.take() {
            info!(
                target: "dungeon::scenes",
                "Leaving dungeon after {:?}, player at {}",
                session.clock,
                session.movement.player().tile()
            );
        }
    }
}

fn status_line(player: &PlayerState) -> String {
    let state = if player.is_moving() { "moving" } else { "idle" };
    format!("Math Dungeon | tile {} | {}", player.tile(), state)
}

//=========================================================================
// Unit Tests
//=========================================================================

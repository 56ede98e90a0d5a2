//=========================================================================
// Core Systems Orchestrator
//=========================================================================
//
// Central coordinator for all engine subsystems.
//
// Responsibilities:
// - Own the global systems (input, scenes) and the shared scene context
// - Receive platform events through the bounded channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Signal shutdown when the window closes or the scene stack empties
//
// Notes:
// The orchestrator is driven from the platform's event loop on the same
// thread. Each redraw hands it the current instant; it converts real
// elapsed time into a whole number of fixed ticks with an accumulator,
// so scene logic always sees the same `elapsed` regardless of the
// monitor's refresh rate.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod globals;
pub mod input;
pub(crate) mod platform_bridge;
pub mod scene;

//=== Public API ==========================================================

pub use globals::{GlobalContext, GlobalSystems};
pub use input::Action;
pub use scene::SceneKey;

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

/// Owns the engine systems and steps them at a fixed rate.
///
/// # Tick Pipeline
///
/// 1. Collect pending platform events (non-blocking)
/// 2. Feed them to the input system and tick the active scene
/// 3. Apply queued scene transitions
/// 4. Exit once the scene stack is empty
pub(crate) struct CoreSystemsOrchestrator<S: SceneKey, A: Action> {
    systems: GlobalSystems<S, A>,
    context: GlobalContext<S, A>,
    collector: EventCollector,
    tick_duration: Duration,
    accumulator: Duration,
    last_frame: Option<Instant>,
}

impl<S: SceneKey, A: Action> CoreSystemsOrchestrator<S, A> {
    /// Upper bound on ticks run for one frame; excess time is dropped.
    pub(crate) const MAX_TICKS_PER_FRAME: u32 = 5;

    //--- Construction -----------------------------------------------------

    pub(crate) fn new(receiver: Receiver<PlatformEvent>, tick_duration: Duration) -> Self {
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(),
            collector: EventCollector::new(receiver),
            tick_duration,
            accumulator: Duration::ZERO,
            last_frame: None,
        }
    }

    /// Gives the caller mutable access to the systems before startup.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        init_fn(&mut self.systems);
    }

    //--- Lifecycle --------------------------------------------------------

    /// Enters the default scene and starts the frame clock at `now`.
    pub(crate) fn start(&mut self, now: Instant) {
        self.systems.scene_manager.start(&mut self.context);
        self.last_frame = Some(now);
        self.accumulator = Duration::ZERO;

        match self.systems.scene_manager.active_scene() {
            Some(scene) => info!("Core started in scene {:?}", scene),
            None => warn!("Core started without a default scene"),
        }
    }

    /// Converts real time since the previous frame into fixed ticks.
    ///
    /// Returns [`TickControl::Exit`] as soon as any tick requests shutdown.
    /// Calling this before [`start`](Self::start) only starts the clock.
    pub(crate) fn advance(&mut self, now: Instant) -> TickControl {
        let last = match self.last_frame.replace(now) {
            Some(last) => last,
            None => return TickControl::Continue,
        };

        self.accumulator += now.saturating_duration_since(last);

        let mut ticks = 0;
        while self.accumulator >= self.tick_duration {
            if ticks == Self::MAX_TICKS_PER_FRAME {
                debug!(
                    "Frame fell behind by {:?}, dropping accumulated time",
                    self.accumulator
                );
                self.accumulator = Duration::ZERO;
                break;
            }

            self.accumulator -= self.tick_duration;
            ticks += 1;

            if self.tick() == TickControl::Exit {
                return TickControl::Exit;
            }
        }

        TickControl::Continue
    }

    /// Runs exactly one fixed tick.
    pub(crate) fn tick(&mut self) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            info!("Platform closed, stopping core");
            return TickControl::Exit;
        }

        self.context.frame_events = self.collector.take_batches();
        self.systems.update(&mut self.context, self.tick_duration);

        if self.systems.scene_manager.is_empty() {
            info!("Scene stack is empty, stopping core");
            return TickControl::Exit;
        }

        TickControl::Continue
    }

    //--- Platform Accessors -----------------------------------------------

    /// Takes the window title requested since the last call, if any.
    pub(crate) fn take_window_title(&mut self) -> Option<String> {
        self.context.window_title.take()
    }

    pub(crate) fn tick_duration(&self) -> Duration {
        self.tick_duration
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
    use crossbeam_channel::{bounded, Sender};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Main,
    }

    impl SceneKey for TestScene {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Quit,
    }

    impl Action for TestAction {}

    /// Counts ticks and leaves the stack when `Quit` is pressed.
    struct Counter {
        ticks: Rc<Cell<u32>>,
    }

    impl Scene<TestScene, TestAction> for Counter {
        fn tick(&mut self, context: &mut GlobalContext<TestScene, TestAction>, _elapsed: Duration) {
            self.ticks.set(self.ticks.get() + 1);
            context.window_title = Some(format!("ticks {}", self.ticks.get()));
            if context.actions.is_pressed(TestAction::Quit) {
                context.scene_transitions.push(SceneTransition::Clear);
            }
        }
    }

    const TICK: Duration = Duration::from_millis(10);

    fn setup() -> (
        CoreSystemsOrchestrator<TestScene, TestAction>,
        Sender<PlatformEvent>,
        Rc<Cell<u32>>,
    ) {
        let (tx, rx) = bounded(16);
        let ticks = Rc::new(Cell::new(0));
        let mut core = CoreSystemsOrchestrator::new(rx, TICK);

        let counter = Counter { ticks: Rc::clone(&ticks) };
        core.init_systems(|systems| {
            systems.input.bind_key(KeyCode::Escape, TestAction::Quit);
            systems.scene_manager.register_default(TestScene::Main, counter);
        });

        (core, tx, ticks)
    }

    #[test]
    fn advance_runs_whole_ticks_and_keeps_remainder() {
        let (mut core, _tx, ticks) = setup();
        let t0 = Instant::now();
        core.start(t0);

        assert_eq!(core.advance(t0 + Duration::from_millis(25)), TickControl::Continue);
        assert_eq!(ticks.get(), 2);

        // 5ms remainder + 5ms completes the third tick
        core.advance(t0 + Duration::from_millis(30));
        assert_eq!(ticks.get(), 3);
    }

    #[test]
    fn advance_caps_ticks_per_frame() {
        let (mut core, _tx, ticks) = setup();
        let t0 = Instant::now();
        core.start(t0);

        core.advance(t0 + Duration::from_secs(1));
        assert_eq!(ticks.get(), CoreSystemsOrchestrator::<TestScene, TestAction>::MAX_TICKS_PER_FRAME);

        // Dropped backlog does not spill into the next frame
        core.advance(t0 + Duration::from_secs(1) + Duration::from_millis(5));
        assert_eq!(ticks.get(), 5);
    }

    #[test]
    fn advance_before_start_only_starts_clock() {
        let (mut core, _tx, ticks) = setup();
        let t0 = Instant::now();

        assert_eq!(core.advance(t0), TickControl::Continue);
        assert_eq!(ticks.get(), 0);
    }

    #[test]
    fn window_closed_stops_core() {
        let (mut core, tx, _ticks) = setup();
        core.start(Instant::now());

        tx.send(PlatformEvent::WindowClosed).unwrap();
        assert_eq!(core.tick(), TickControl::Exit);
    }

    #[test]
    fn empty_scene_stack_stops_core() {
        let (mut core, tx, _ticks) = setup();
        core.start(Instant::now());

        tx.send(PlatformEvent::Inputs(vec![InputEvent::KeyDown { key: KeyCode::Escape }]))
            .unwrap();
        assert_eq!(core.tick(), TickControl::Exit);
    }

    #[test]
    fn window_title_is_taken_once() {
        let (mut core, _tx, _ticks) = setup();
        core.start(Instant::now());

        core.tick();
        assert_eq!(core.take_window_title().as_deref(), Some("ticks 1"));
        assert_eq!(core.take_window_title(), None);
    }
}

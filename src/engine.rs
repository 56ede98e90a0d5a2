//=========================================================================
// Engine
//=========================================================================
//
// Main entry point and coordinator for the runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──init()──>  Engine  ──run()──>  [Runtime]
//         │                                                      │
//         ├─ with_tps()                                          └─ runs platform
//         ├─ with_channel_capacity()                                drives core ticks
//         ├─ with_window_size()                                     blocks until exit
//         └─ with_title()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{bounded, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::{Action, CoreSystemsOrchestrator, GlobalSystems, SceneKey};
use crate::platform::{Platform, WindowSettings};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 input batches
/// - **Window**: 800×600, titled "Math Dungeon"
///
/// # Examples
///
/// ```no_run
/// use math_dungeon::EngineBuilder;
/// use math_dungeon::core::input::{Action, KeyCode};
/// use math_dungeon::core::scene::SceneKey;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameScene { Main }
/// impl SceneKey for GameScene {}
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Jump }
/// impl Action for GameAction {}
///
/// EngineBuilder::<GameScene, GameAction>::new()
///     .with_tps(120.0)
///     .with_window_size(1024, 768)
///     .build()
///     .init(|systems| {
///         systems.input.bind_key(KeyCode::Space, GameAction::Jump);
///     })
///     .run()
///     .expect("event loop failed");
/// ```
pub struct EngineBuilder<S: SceneKey, A: Action> {
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
    _phantom: std::marker::PhantomData<(S, A)>,
}

impl<S: SceneKey, A: Action> EngineBuilder<S, A> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowSettings {
                title: "Math Dungeon".to_string(),
                width: 800,
                height: 600,
            },
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the fixed logic rate in ticks per second.
    ///
    /// Every scene tick receives `1 / tps` as its elapsed time, no matter
    /// how fast the window redraws.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core input batches.
    ///
    /// Batches that arrive while the channel is full are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the initial inner window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Sets the initial window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Builds the engine instance.
    ///
    /// Creates the platform → core channel and the core systems. Call
    /// [`Engine::init`] to register bindings and scenes before running.
    pub fn build(self) -> Engine<S, A> {
        info!(
            "Building engine (TPS: {}, channel: {}, window: {}x{})",
            self.tps, self.channel_capacity, self.window.width, self.window.height
        );

        let (sender, receiver) = bounded(self.channel_capacity);
        let tick_duration = Duration::from_secs_f64(1.0 / self.tps);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(receiver, tick_duration),
            sender,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl<S: SceneKey, A: Action> Default for EngineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Runtime that owns the core systems and the platform window.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   └─► Platform (Winit event loop)
///         ├─► InputBuffer ──channel──► EventCollector
///         └─► CoreSystemsOrchestrator (fixed ticks per redraw)
///               └─► InputSystem, SceneManager
/// ```
pub struct Engine<S: SceneKey, A: Action> {
    orchestrator: CoreSystemsOrchestrator<S, A>,
    sender: Sender<PlatformEvent>,
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
}

impl<S: SceneKey, A: Action> Engine<S, A> {
    //--- Initialization ---------------------------------------------------

    /// Initializes engine systems before execution.
    ///
    /// Provides mutable access to [`GlobalSystems`] for configuring
    /// input bindings and registering scenes.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        info!("Initializing engine systems");

        self.orchestrator.init_systems(init_fn);

        info!("Engine initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the engine runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Runs the platform event loop on the calling thread
    /// 2. The first resume creates the window and enters the default scene
    /// 3. Each redraw flushes input and runs the elapsed fixed ticks
    /// 4. Window close or an empty scene stack ends the loop
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(self) -> Result<(), PlatformError> {
        info!(
            "Starting engine runtime (TPS: {}, channel capacity: {})",
            self.tps, self.channel_capacity
        );

        let platform = Platform::new(self.sender, self.orchestrator, self.window);

        let result = platform.run();
        match &result {
            Ok(()) => info!("Engine shutdown complete"),
            Err(e) => error!("Platform error: {}", e),
        }

        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Main,
    }

    impl SceneKey for TestScene {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
    }

    impl Action for TestAction {}

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::<TestScene, TestAction>::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.window.width, 800);
        assert_eq!(builder.window.height, 600);
        assert_eq!(builder.window.title, "Math Dungeon");
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::<TestScene, TestAction>::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::<TestScene, TestAction>::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::<TestScene, TestAction>::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::<TestScene, TestAction>::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_window_size_panics_on_zero() {
        EngineBuilder::<TestScene, TestAction>::new().with_window_size(0, 600);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::<TestScene, TestAction>::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_window_size(1024, 768)
            .with_title("Custom")
            .build();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.window.title, "Custom");
        assert_eq!(engine.orchestrator.tick_duration(), Duration::from_secs_f64(1.0 / 120.0));
    }

    #[test]
    fn init_passes_systems_to_closure() {
        let mut called = false;
        let _engine = EngineBuilder::<TestScene, TestAction>::new()
            .build()
            .init(|systems| {
                systems.input.bind_key(crate::core::input::KeyCode::Space, TestAction::Jump);
                called = true;
            });
        assert!(called);
    }
}

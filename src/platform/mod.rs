//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Bridges Winit (OS-level events) with the engine core.
//
// Architecture:
// ```text
//  Main Thread (single):
//  ┌──────────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                        │
//  │   ↓                                                      │
//  │  InputProcessor  (Winit → InputEvent)                    │
//  │   ↓                                                      │
//  │  InputBuffer     (one frame of events)                   │
//  │   ↓                                                      │
//  │  RedrawRequested                                         │
//  │   ├─ flush → bounded channel ──┐                         │
//  │   └─ advance(now)              ↓                         │
//  │        CoreSystemsOrchestrator (EventCollector → ticks)  │
//  │          ↓                                               │
//  │        window title / exit                               │
//  └──────────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: All buffered input is sent as
//   one batch, then the core runs however many fixed ticks have elapsed
// - **Never block on the channel**: The platform and the core share one
//   thread, so a full channel drops the batch with a warning
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
// Responsibilities:
// - Create and manage the OS window
// - Convert Winit types → engine InputEvents
// - Buffer input until frame boundary
// - Drive the core at its fixed tick rate
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Dependencies ===============================================

use std::time::Instant;

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent, TickControl};
use crate::core::{Action, CoreSystemsOrchestrator, SceneKey};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowSettings ======================================================

/// Initial window configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowSettings {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

//=== Platform ============================================================

/// Window manager, input aggregator and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` - no window yet
/// 2. **Execution**: `platform.run()` - starts the event loop
/// 3. **Startup**: `resumed()` creates the window and starts the core
/// 4. **Frames**: `RedrawRequested` flushes input and advances the core
/// 5. **Shutdown**: window close, or the core reports an empty scene stack
pub(crate) struct Platform<S: SceneKey, A: Action> {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    settings: WindowSettings,

    /// Buffers input until frame boundary.
    buffer: InputBuffer,

    /// Channel feeding the core's event collector.
    event_sender: Sender<PlatformEvent>,

    input_processor: InputProcessor,

    core: CoreSystemsOrchestrator<S, A>,
}

impl<S: SceneKey, A: Action> Platform<S, A> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        core: CoreSystemsOrchestrator<S, A>,
        settings: WindowSettings,
    ) -> Self {
        info!(
            target: "platform",
            "Platform subsystem initialized (tick: {:?})",
            core.tick_duration()
        );
        Self {
            window: None,
            settings,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            core,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or the core exits.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// terminates abnormally.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the core without blocking.
    ///
    /// A full or disconnected channel drops the batch and logs a warning.
    fn flush_input_buffer(&mut self) {
        let pending = self.buffer.len();
        let Some(events) = self.buffer.drain() else {
            return;
        };

        trace!(target: "platform::input", "Flushing {} events", pending);

        match self.event_sender.try_send(PlatformEvent::Inputs(events)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(target: "platform::input", "Channel full, dropping {} events", pending);
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "platform::input", "Channel disconnected, dropping {} events", pending);
            }
        }
    }

    /// Runs the elapsed fixed ticks and applies their requests to the window.
    fn drive_core(&mut self, now: Instant) -> TickControl {
        let control = self.core.advance(now);

        if let Some(title) = self.core.take_window_title() {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
        }

        control
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if self.event_sender.try_send(PlatformEvent::WindowClosed).is_err() {
            debug!(target: "platform", "Core already stopped listening");
        }
        event_loop.exit();
    }
}

//=== Winit Integration ===================================================

impl<S: SceneKey, A: Action> ApplicationHandler for Platform<S, A> {
    /// Creates the window on first resume and starts the core.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
                self.core.start(Instant::now());
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.shutdown(event_loop);
            }
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.shutdown(event_loop);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::Focused(focused) => {
                if let Some(event) = self.input_processor.process_focus(focused) {
                    debug!(target: "platform::input", "Focus lost, releasing held keys");
                    self.buffer.push(event);
                }
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();

                if self.drive_core(Instant::now()) == TickControl::Exit {
                    info!(target: "platform", "Core requested exit");
                    event_loop.exit();
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

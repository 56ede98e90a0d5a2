//=========================================================================
// Camera Controller
//=========================================================================
//
// Smoothly follows the player inside fixed world bounds.
//
// Each tick the scroll moves a fixed fraction (lerp) of the way towards
// the scroll that would center the target, then is clamped so the
// zoomed view never leaves the bounds. Purely cosmetic: nothing in
// movement reads the camera.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::grid::{RoomGrid, WorldPos};

//=== Constants ===========================================================

/// Fraction of the remaining distance covered per tick, per axis.
pub const FOLLOW_LERP: f32 = 0.1;

pub const ZOOM: f32 = 1.25;

/// Background colour, `0xRRGGBB`.
pub const BACKGROUND: u32 = 0x00_00_00;

//=== CameraBounds ========================================================

/// World rectangle the view is kept inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

//=== CameraController ====================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    scroll: WorldPos,
    viewport_width: f32,
    viewport_height: f32,
    bounds: CameraBounds,
    zoom: f32,
    lerp: f32,
    round_pixels: bool,
}

impl CameraController {
    /// Camera over a `viewport_width` × `viewport_height` view, bounded by
    /// that same rectangle, initially scrolled to the room origin.
    pub fn new(grid: &RoomGrid, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            scroll: grid.origin(),
            viewport_width,
            viewport_height,
            bounds: CameraBounds {
                x: 0.0,
                y: 0.0,
                width: viewport_width,
                height: viewport_height,
            },
            zoom: ZOOM,
            lerp: FOLLOW_LERP,
            round_pixels: true,
        }
    }

    //--- Update -----------------------------------------------------------

    /// Moves the scroll one lerp step towards centering `target`.
    pub fn follow(&mut self, target: WorldPos) {
        let desired = WorldPos::new(
            target.x - self.viewport_width / 2.0,
            target.y - self.viewport_height / 2.0,
        );

        let x = self.scroll.x + (desired.x - self.scroll.x) * self.lerp;
        let y = self.scroll.y + (desired.y - self.scroll.y) * self.lerp;

        self.scroll = WorldPos::new(self.clamp_x(x), self.clamp_y(y));
    }

    //--- Queries ----------------------------------------------------------

    /// Scroll as simulated, unrounded.
    pub fn scroll(&self) -> WorldPos {
        self.scroll
    }

    /// Scroll snapped to whole pixels when round-pixels is on. This is
    /// the value a renderer should draw with.
    pub fn render_scroll(&self) -> WorldPos {
        if self.round_pixels {
            WorldPos::new(self.scroll.x.round(), self.scroll.y.round())
        } else {
            self.scroll
        }
    }

    /// World point shown at the middle of the screen.
    pub fn view_center(&self) -> WorldPos {
        WorldPos::new(
            self.scroll.x + self.viewport_width / 2.0,
            self.scroll.y + self.viewport_height / 2.0,
        )
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn bounds(&self) -> CameraBounds {
        self.bounds
    }

    pub fn background(&self) -> u32 {
        BACKGROUND
    }

    //--- Clamping ---------------------------------------------------------

    // The zoomed view is `viewport / zoom` wide and stays centered on the
    // unzoomed view, which shifts the legal scroll range by half the
    // difference.

    fn clamp_x(&self, x: f32) -> f32 {
        let display = self.viewport_width / self.zoom;
        clamp_axis(x, self.bounds.x, self.bounds.width, display, self.viewport_width)
    }

    fn clamp_y(&self, y: f32) -> f32 {
        let display = self.viewport_height / self.zoom;
        clamp_axis(y, self.bounds.y, self.bounds.height, display, self.viewport_height)
    }
}

fn clamp_axis(value: f32, bound_start: f32, bound_len: f32, display: f32, viewport: f32) -> f32 {
    let min = bound_start + (display - viewport) / 2.0;
    let max = min.max(min + bound_len - display);
    value.clamp(min, max)
}

//=========================================================================
// Unit Tests
//=========================================================================

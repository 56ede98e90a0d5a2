//=========================================================================
// Room Grid
//=========================================================================
//
// Square tile grid centered in the viewport.
//
// Coordinate spaces:
//   TileCoord (col, row) ── tile_center() ──> WorldPos (x, y)
//   WorldPos  (x, y)     ── world_to_tile() ─> TileCoord (nearest center)
//
// Classification: the outer ring is wall, everything inside is floor.
// `is_wall` is the only collision query movement needs.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::config::{ConfigError, RoomConfig};

//=== TileCoord ===========================================================

/// Grid address of one tile. Column grows right, row grows down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub col: i32,
    pub row: i32,
}

impl TileCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Returns the coordinate shifted by `(dx, dy)` tiles.
    pub const fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.col + dx, self.row + dy)
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

//=== WorldPos ============================================================

/// Continuous pixel-space position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `target`; `t` is not clamped.
    pub fn lerp(self, target: WorldPos, t: f32) -> Self {
        Self::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }
}

//=== TileKind ============================================================

/// Static classification of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Floor,
}

//=== RoomGrid ============================================================

/// Immutable geometry of one square room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomGrid {
    size: u32,
    side: i32,
    tile_size: f32,
    origin: WorldPos,
}

impl RoomGrid {
    /// Builds the grid and centers it in the configured viewport.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`RoomConfig::validate`].
    pub fn new(config: &RoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let side = i32::try_from(config.room_size)
            .map_err(|_| ConfigError::RoomTooLarge { size: config.room_size })?;

        let extent = config.room_size as f32 * config.tile_size;
        let origin = WorldPos::new(
            (config.viewport_width - extent) / 2.0,
            (config.viewport_height - extent) / 2.0,
        );

        Ok(Self {
            size: config.room_size,
            side,
            tile_size: config.tile_size,
            origin,
        })
    }

    //--- Accessors --------------------------------------------------------

    /// Side length in tiles, walls included.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// World position of the top-left corner of tile (0, 0).
    pub fn origin(&self) -> WorldPos {
        self.origin
    }

    /// Tile nearest the geometric center of the room.
    pub fn center_tile(&self) -> TileCoord {
        let mid = self.side / 2;
        TileCoord::new(mid, mid)
    }

    //--- Coordinate Conversion --------------------------------------------

    /// World-space center of `tile`. Valid for any coordinate, in bounds or not.
    pub fn tile_center(&self, tile: TileCoord) -> WorldPos {
        let half = self.tile_size / 2.0;
        WorldPos::new(
            self.origin.x + tile.col as f32 * self.tile_size + half,
            self.origin.y + tile.row as f32 * self.tile_size + half,
        )
    }

    /// Tile whose center is nearest to `pos`. Exact ties round up.
    pub fn world_to_tile(&self, pos: WorldPos) -> TileCoord {
        let half = self.tile_size / 2.0;
        let axis = |value: f32, origin: f32| ((value - origin - half) / self.tile_size + 0.5).floor() as i32;
        TileCoord::new(axis(pos.x, self.origin.x), axis(pos.y, self.origin.y))
    }

    //--- Classification ---------------------------------------------------

    pub fn contains(&self, tile: TileCoord) -> bool {
        (0..self.side).contains(&tile.col) && (0..self.side).contains(&tile.row)
    }

    /// `true` on the outer ring. Coordinates outside the room also count
    /// as wall so they can never be entered.
    pub fn is_wall(&self, tile: TileCoord) -> bool {
        if !self.contains(tile) {
            return true;
        }

        let last = self.side - 1;
        tile.col == 0 || tile.row == 0 || tile.col == last || tile.row == last
    }

    /// Kind of an in-bounds tile; `None` outside the room.
    pub fn tile_kind(&self, tile: TileCoord) -> Option<TileKind> {
        if !self.contains(tile) {
            return None;
        }

        Some(if self.is_wall(tile) { TileKind::Wall } else { TileKind::Floor })
    }

    /// Every tile of the room exactly once, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = TileCoord> {
        let side = self.side;
        (0..side).flat_map(move |row| (0..side).map(move |col| TileCoord::new(col, row)))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Room Builder
//=========================================================================
//
// Materializes the static content of one room from its grid.
//
// Architecture:
//   RoomGrid ── build_room() ──> RoomSink
//                                  ├─ add_static_body()  (wall tiles)
//                                  └─ add_decoration()   (floor tiles)
//
// Every tile is visited exactly once. `RoomWorld` is the in-crate sink
// used by the dungeon scene; a renderer can provide its own.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::grid::{RoomGrid, TileCoord, TileKind, WorldPos};

//=== Static Content ======================================================

/// Tint applied to floor decorations.
pub const FLOOR_TINT: u32 = 0x22_22_22;

/// Static collidable body covering exactly one wall tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallBody {
    pub tile: TileCoord,
    pub center: WorldPos,
    /// Edge length in world units.
    pub size: f32,
}

/// Purely visual floor tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorDecoration {
    pub tile: TileCoord,
    pub center: WorldPos,
    pub size: f32,
    /// RGB tint, `0xRRGGBB`.
    pub tint: u32,
}

//=== RoomSink ============================================================

/// Receiver of the static content produced by [`build_room`].
pub trait RoomSink {
    fn add_static_body(&mut self, body: WallBody);
    fn add_decoration(&mut self, decoration: FloorDecoration);
}

/// Registers one body per wall tile and one decoration per floor tile.
pub fn build_room<K: RoomSink>(grid: &RoomGrid, sink: &mut K) {
    let size = grid.tile_size();

    for tile in grid.tiles() {
        let center = grid.tile_center(tile);
        match grid.tile_kind(tile) {
            Some(TileKind::Wall) => sink.add_static_body(WallBody { tile, center, size }),
            Some(TileKind::Floor) => sink.add_decoration(FloorDecoration {
                tile,
                center,
                size,
                tint: FLOOR_TINT,
            }),
            None => {}
        }
    }
}

//=== RoomWorld ===========================================================

/// Static room content keyed by tile.
#[derive(Debug, Default)]
pub struct RoomWorld {
    walls: HashMap<TileCoord, WallBody>,
    floors: HashMap<TileCoord, FloorDecoration>,
}

impl RoomWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the full content of `grid`.
    pub fn build(grid: &RoomGrid) -> Self {
        let mut world = Self::new();
        build_room(grid, &mut world);
        debug!(
            target: "dungeon::room",
            "Built {}x{} room: {} walls, {} floor tiles",
            grid.size(),
            grid.size(),
            world.wall_count(),
            world.floor_count()
        );
        world
    }

    //--- Queries ----------------------------------------------------------

    pub fn wall_at(&self, tile: TileCoord) -> Option<&WallBody> {
        self.walls.get(&tile)
    }

    pub fn floor_at(&self, tile: TileCoord) -> Option<&FloorDecoration> {
        self.floors.get(&tile)
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    pub fn walls(&self) -> impl Iterator<Item = &WallBody> {
        self.walls.values()
    }
}

impl RoomSink for RoomWorld {
    fn add_static_body(&mut self, body: WallBody) {
        if self.walls.insert(body.tile, body).is_some() {
            warn!(target: "dungeon::room", "Wall at {} registered twice", body.tile);
        }
    }

    fn add_decoration(&mut self, decoration: FloorDecoration) {
        if self.floors.insert(decoration.tile, decoration).is_some() {
            warn!(target: "dungeon::room", "Floor at {} registered twice", decoration.tile);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::config::RoomConfig;

    /// Records registration order to check the visit-once contract.
    #[derive(Default)]
    struct Recorder {
        visited: Vec<TileCoord>,
    }

    impl RoomSink for Recorder {
        fn add_static_body(&mut self, body: WallBody) {
            self.visited.push(body.tile);
        }

        fn add_decoration(&mut self, decoration: FloorDecoration) {
            self.visited.push(decoration.tile);
        }
    }

    fn grid(room_size: u32) -> RoomGrid {
        RoomGrid::new(&RoomConfig { room_size, ..RoomConfig::default() }).unwrap()
    }

    #[test]
    fn every_tile_is_visited_exactly_once() {
        for n in 3..=10 {
            let grid = grid(n);
            let mut recorder = Recorder::default();
            build_room(&grid, &mut recorder);

            let mut visited = recorder.visited.clone();
            visited.sort();
            visited.dedup();
            assert_eq!(recorder.visited.len(), (n * n) as usize);
            assert_eq!(visited.len(), recorder.visited.len());
        }
    }

    #[test]
    fn default_room_splits_into_walls_and_floor() {
        let world = RoomWorld::build(&grid(7));
        assert_eq!(world.wall_count(), 24);
        assert_eq!(world.floor_count(), 25);
    }

    #[test]
    fn walls_and_floors_match_grid_classification() {
        let grid = grid(6);
        let world = RoomWorld::build(&grid);

        for tile in grid.tiles() {
            assert_eq!(world.wall_at(tile).is_some(), grid.is_wall(tile));
            assert_eq!(world.floor_at(tile).is_some(), !grid.is_wall(tile));
        }
    }

    #[test]
    fn content_is_one_tile_in_size_and_centered() {
        let grid = grid(7);
        let world = RoomWorld::build(&grid);

        let corner = world.wall_at(TileCoord::new(0, 0)).unwrap();
        assert_eq!(corner.size, 32.0);
        assert_eq!(corner.center, grid.tile_center(TileCoord::new(0, 0)));

        let floor = world.floor_at(TileCoord::new(3, 3)).unwrap();
        assert_eq!(floor.size, 32.0);
        assert_eq!(floor.tint, FLOOR_TINT);
    }

    #[test]
    fn minimum_room_has_single_floor() {
        let world = RoomWorld::build(&grid(3));
        assert_eq!(world.floor_count(), 1);
        assert_eq!(world.walls().count(), 8);
    }
}

//=========================================================================
// Room Configuration
//=========================================================================
//
// Explicit geometry for a single dungeon room.
//
// The viewport size only feeds the centering offset of the room; it does
// not affect tile classification or movement legality.
//
//=========================================================================

//=== RoomConfig ==========================================================

/// Geometry of one square room and the viewport it is centered in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomConfig {
    /// Side length in tiles, walls included.
    pub room_size: u32,

    /// World units per tile edge.
    pub tile_size: f32,

    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl RoomConfig {
    /// Smallest room with at least one floor tile.
    pub const MIN_ROOM_SIZE: u32 = 3;

    /// Largest accepted room. Keeps tile coordinates and their world
    /// centres exact in `i32` and `f32`.
    pub const MAX_ROOM_SIZE: u32 = 4096;

    /// Checks that the configuration describes a non-degenerate room.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::RoomTooSmall`] when `room_size < 3`
    /// - [`ConfigError::RoomTooLarge`] when `room_size > 4096`
    /// - [`ConfigError::InvalidTileSize`] when `tile_size` is not a positive finite number
    /// - [`ConfigError::InvalidViewport`] when either viewport dimension is not positive and finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_size < Self::MIN_ROOM_SIZE {
            return Err(ConfigError::RoomTooSmall { size: self.room_size });
        }

        if self.room_size > Self::MAX_ROOM_SIZE {
            return Err(ConfigError::RoomTooLarge { size: self.room_size });
        }

        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }

        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !(positive(self.viewport_width) && positive(self.viewport_height)) {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }

        Ok(())
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            room_size: 7,
            tile_size: 32.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
        }
    }
}

//=== ConfigError =========================================================

/// Rejected room configuration.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("room size {size} is below the minimum of 3 tiles")]
    RoomTooSmall { size: u32 },

    #[error("room size {size} exceeds the maximum of 4096 tiles")]
    RoomTooLarge { size: u32 },

    #[error("tile size {0} must be a positive finite number")]
    InvalidTileSize(f32),

    #[error("viewport {width}x{height} must have positive finite dimensions")]
    InvalidViewport { width: f32, height: f32 },
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RoomConfig::default();
        assert_eq!(config.room_size, 7);
        assert_eq!(config.tile_size, 32.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn minimum_room_is_accepted() {
        let config = RoomConfig { room_size: 3, ..RoomConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rooms_below_three_are_rejected() {
        for size in 0..3 {
            let config = RoomConfig { room_size: size, ..RoomConfig::default() };
            assert_eq!(config.validate(), Err(ConfigError::RoomTooSmall { size }));
        }
    }

    #[test]
    fn oversized_rooms_are_rejected() {
        let largest = RoomConfig { room_size: RoomConfig::MAX_ROOM_SIZE, ..RoomConfig::default() };
        assert!(largest.validate().is_ok());

        for size in [RoomConfig::MAX_ROOM_SIZE + 1, i32::MAX as u32 + 1, u32::MAX] {
            let config = RoomConfig { room_size: size, tile_size: 1.0, ..RoomConfig::default() };
            assert_eq!(config.validate(), Err(ConfigError::RoomTooLarge { size }));
        }
    }

    #[test]
    fn bad_tile_sizes_are_rejected() {
        for tile_size in [0.0, -32.0, f32::INFINITY] {
            let config = RoomConfig { tile_size, ..RoomConfig::default() };
            assert_eq!(config.validate(), Err(ConfigError::InvalidTileSize(tile_size)));
        }

        let nan = RoomConfig { tile_size: f32::NAN, ..RoomConfig::default() };
        assert!(matches!(nan.validate(), Err(ConfigError::InvalidTileSize(_))));
    }

    #[test]
    fn bad_viewport_is_rejected() {
        let config = RoomConfig { viewport_height: 0.0, ..RoomConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidViewport { width: 800.0, height: 0.0 })
        );
    }

    #[test]
    fn error_messages_name_the_value() {
        let err = ConfigError::RoomTooSmall { size: 2 };
        assert_eq!(err.to_string(), "room size 2 is below the minimum of 3 tiles");
    }
}

//! Module `world::config`
//!
//! Defines [`ChamberConfig`], the extent of a chamber and the granularity of
//! its edit grid.
//!
//! The edit grid splits the chamber into `cells_per_axis()` cells per axis.
//! Every cell is one octree node, so a cell index maps to a node center that
//! can be passed straight to the octree.
//!
//! # Examples
//!
//! ```rust
//! use chamber::ChamberConfig;
//! use glam::{I64Vec3, IVec3};
//!
//! let config = ChamberConfig::new(16, 4).unwrap();
//! assert_eq!(config.cells_per_axis(), 4);
//! assert_eq!(config.cell_center(IVec3::ZERO), Some(IVec3::new(-6, -6, -6)));
//! ```

use glam::{I64Vec3, IVec3};

use crate::ChamberError;

/// Edge length of the largest chamber.
pub const MAX_CHAMBER_SIZE: i32 = 32768;

/// Default edge length of one edit grid cell.
pub const DEFAULT_RESOLUTION: i32 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChamberConfig {
    max_extent: i32,
    edit_resolution: i32,
}

impl Default for ChamberConfig {
    fn default() -> Self {
        Self {
            max_extent: MAX_CHAMBER_SIZE,
            edit_resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl ChamberConfig {
    /// Creates a validated [`ChamberConfig`].
    ///
    /// # Errors
    /// - [`ChamberError::InvalidSize`] if `max_extent` is not a power of two
    ///   of at least 2.
    /// - [`ChamberError::InvalidEditResolution`] if `edit_resolution` is not a
    ///   power of two in `2..=max_extent`.
    pub fn new(max_extent: i32, edit_resolution: i32) -> Result<Self, ChamberError> {
        if max_extent < 2 || !(max_extent as u32).is_power_of_two() {
            return Err(ChamberError::InvalidSize { size: max_extent });
        }

        if edit_resolution < 2
            || edit_resolution > max_extent
            || !(edit_resolution as u32).is_power_of_two()
        {
            return Err(ChamberError::InvalidEditResolution {
                resolution: edit_resolution,
                max_extent,
            });
        }

        Ok(Self {
            max_extent,
            edit_resolution,
        })
    }

    #[must_use]
    #[inline(always)]
    pub const fn max_extent(&self) -> i32 {
        self.max_extent
    }

    #[must_use]
    #[inline(always)]
    pub const fn edit_resolution(&self) -> i32 {
        self.edit_resolution
    }

    #[must_use]
    #[inline(always)]
    pub const fn cells_per_axis(&self) -> i32 {
        self.max_extent / self.edit_resolution
    }

    /// Node center of the edit grid cell `cell`, or `None` if any component
    /// is outside `0..cells_per_axis()`.
    #[must_use]
    pub fn cell_center(&self, cell: IVec3) -> Option<IVec3> {
        let cells = self.cells_per_axis();

        if cell.min_element() < 0 || cell.max_element() >= cells {
            return None;
        }

        let half_extent = self.max_extent / 2;
        let half_cell = self.edit_resolution / 2;

        Some(cell * self.edit_resolution + IVec3::splat(half_cell - half_extent))
    }

    /// Edit grid cell containing `position`, the inverse of
    /// [`ChamberConfig::cell_center`].
    #[must_use]
    pub fn cell_of(&self, position: IVec3) -> Option<IVec3> {
        let half_extent = i64::from(self.max_extent / 2);
        let shifted = position.as_i64vec3() + I64Vec3::splat(half_extent);

        if shifted.min_element() < 0 || shifted.max_element() >= i64::from(self.max_extent) {
            return None;
        }

        Some((shifted / i64::from(self.edit_resolution)).as_ivec3())
    }
}

impl std::fmt::Display for ChamberConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "extent {} / resolution {} ({} cells per axis)",
            self.max_extent,
            self.edit_resolution,
            self.cells_per_axis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ChamberConfig::default();

        assert_eq!(config.max_extent(), 32768);
        assert_eq!(config.edit_resolution(), 128);
        assert_eq!(config.cells_per_axis(), 256);
        assert_eq!(ChamberConfig::new(32768, 128).unwrap(), config);
    }

    #[test]
    fn test_invalid_extent() {
        assert!(matches!(
            ChamberConfig::new(0, 2),
            Err(ChamberError::InvalidSize { size: 0 })
        ));
        assert!(ChamberConfig::new(-16, 2).is_err());
        assert!(ChamberConfig::new(24, 2).is_err());
    }

    #[test]
    fn test_invalid_resolution() {
        assert!(matches!(
            ChamberConfig::new(16, 1),
            Err(ChamberError::InvalidEditResolution {
                resolution: 1,
                max_extent: 16
            })
        ));
        assert!(ChamberConfig::new(16, 32).is_err());
        assert!(ChamberConfig::new(16, 6).is_err());
        assert!(ChamberConfig::new(16, 16).is_ok());
    }

    #[test]
    fn test_cell_center() {
        let config = ChamberConfig::default();

        assert_eq!(
            config.cell_center(IVec3::ZERO),
            Some(IVec3::splat(-16384 + 64))
        );
        assert_eq!(
            config.cell_center(IVec3::splat(255)),
            Some(IVec3::splat(16384 - 64))
        );
        assert_eq!(config.cell_center(IVec3::new(0, 256, 0)), None);
        assert_eq!(config.cell_center(IVec3::new(-1, 0, 0)), None);
    }

    #[test]
    fn test_cell_of_inverts_cell_center() {
        let config = ChamberConfig::new(64, 8).unwrap();

        for cell in [IVec3::ZERO, IVec3::new(1, 2, 3), IVec3::splat(7)] {
            let center = config.cell_center(cell).unwrap();
            assert_eq!(config.cell_of(center), Some(cell));
        }

        assert_eq!(config.cell_of(IVec3::new(32, 0, 0)), None);
        assert_eq!(config.cell_of(IVec3::new(-32, 0, 0)), Some(IVec3::new(0, 4, 4)));
    }

    #[test]
    fn test_cell_of_extreme_coordinates() {
        let config = ChamberConfig::default();

        assert_eq!(config.cell_of(IVec3::new(i32::MAX, 0, 0)), None);
        assert_eq!(config.cell_of(IVec3::new(0, i32::MIN, 0)), None);
        assert_eq!(config.cell_of(IVec3::splat(i32::MAX)), None);
        assert_eq!(config.cell_of(IVec3::splat(i32::MIN)), None);
        assert_eq!(config.cell_of(IVec3::splat(16383)), Some(IVec3::splat(255)));
    }

    #[test]
    fn test_display() {
        let config = ChamberConfig::new(16, 4).unwrap();
        assert_eq!(
            format!("{config}"),
            "extent 16 / resolution 4 (4 cells per axis)"
        );
    }
}

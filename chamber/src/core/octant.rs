//! Module `core::octant`
//!
//! Defines the [`Octant`] struct, the 3-bit child selector of an octree node.
//!
//! Bit 2 selects the x half, bit 1 the y half and bit 0 the z half. A set bit
//! means the positive half. A coordinate equal to the center on some axis
//! falls into the negative half of that axis.
//!
//! # Examples
//!
//! ```rust
//! use chamber::Octant;
//! use glam::IVec3;
//!
//! let octant = Octant::of(IVec3::ZERO, IVec3::new(4, -4, 4));
//! assert_eq!(octant.index(), 0b101);
//! assert_eq!(octant.signs(), IVec3::new(1, -1, 1));
//! ```

use glam::IVec3;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Octant(u8);

impl Octant {
    pub const COUNT: usize = 8;

    pub const X_BIT: u8 = 0b100;
    pub const Y_BIT: u8 = 0b010;
    pub const Z_BIT: u8 = 0b001;

    /// All octants in Morton order.
    pub const ALL: [Octant; Self::COUNT] = [
        Octant(0),
        Octant(1),
        Octant(2),
        Octant(3),
        Octant(4),
        Octant(5),
        Octant(6),
        Octant(7),
    ];

    /// Creates a new [`Octant`].
    ///
    /// # Panics
    /// - If `index >= 8`.
    #[must_use]
    #[inline(always)]
    pub const fn new(index: u8) -> Self {
        assert!(index < Self::COUNT as u8, "Octant index out of range");
        Self(index)
    }

    /// Selects the octant of `position` relative to `center`.
    ///
    /// A bit is set only when the coordinate is strictly greater than the
    /// center on that axis.
    #[must_use]
    #[inline(always)]
    pub fn of(center: IVec3, position: IVec3) -> Self {
        let mut index = 0;

        if position.x > center.x {
            index |= Self::X_BIT;
        }
        if position.y > center.y {
            index |= Self::Y_BIT;
        }
        if position.z > center.z {
            index |= Self::Z_BIT;
        }

        Self(index)
    }

    #[must_use]
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Per-axis direction of this octant, each component is `-1` or `+1`.
    #[must_use]
    #[inline(always)]
    pub const fn signs(&self) -> IVec3 {
        IVec3::new(
            if self.0 & Self::X_BIT != 0 { 1 } else { -1 },
            if self.0 & Self::Y_BIT != 0 { 1 } else { -1 },
            if self.0 & Self::Z_BIT != 0 { 1 } else { -1 },
        )
    }

    /// Center of the child occupying this octant of a node at `center`
    /// with the given `half_size`.
    #[must_use]
    #[inline(always)]
    pub fn child_center(&self, center: IVec3, half_size: i32) -> IVec3 {
        center + self.signs() * (half_size / 2)
    }
}

impl From<Octant> for usize {
    #[inline]
    fn from(octant: Octant) -> usize {
        octant.index()
    }
}

impl TryFrom<usize> for Octant {
    type Error = &'static str;

    #[inline]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < Self::COUNT {
            Ok(Self(value as u8))
        } else {
            Err("Octant index out of range")
        }
    }
}

impl std::fmt::Display for Octant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_strictly_greater() {
        let center = IVec3::new(4, 4, 4);

        assert_eq!(Octant::of(center, IVec3::new(5, 5, 5)).index(), 7);
        assert_eq!(Octant::of(center, IVec3::new(3, 3, 3)).index(), 0);
        assert_eq!(Octant::of(center, IVec3::new(5, 3, 3)).index(), 4);
        assert_eq!(Octant::of(center, IVec3::new(3, 5, 3)).index(), 2);
        assert_eq!(Octant::of(center, IVec3::new(3, 3, 5)).index(), 1);
    }

    #[test]
    fn test_ties_go_negative() {
        let center = IVec3::new(4, 4, 4);

        assert_eq!(Octant::of(center, center).index(), 0);
        assert_eq!(Octant::of(center, IVec3::new(4, 4, 6)).index(), 1);
    }

    #[test]
    fn test_child_center() {
        let center = IVec3::ZERO;

        assert_eq!(
            Octant::new(7).child_center(center, 8),
            IVec3::new(4, 4, 4)
        );
        assert_eq!(
            Octant::new(0).child_center(center, 8),
            IVec3::new(-4, -4, -4)
        );
        assert_eq!(
            Octant::new(0b010).child_center(IVec3::new(2, 2, 6), 2),
            IVec3::new(1, 3, 5)
        );
    }

    #[test]
    fn test_of_child_center_is_identity() {
        let center = IVec3::new(-16, 32, 8);

        for octant in Octant::ALL {
            let child = octant.child_center(center, 16);
            assert_eq!(Octant::of(center, child), octant);
        }
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Octant::try_from(3usize), Ok(Octant::new(3)));
        assert!(Octant::try_from(8usize).is_err());
    }

    #[test]
    #[should_panic(expected = "Octant index out of range")]
    fn test_new_out_of_range() {
        let _ = Octant::new(8);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Octant::new(5)), "101");
    }
}

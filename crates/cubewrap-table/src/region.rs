//! The nine sampling regions of a cube face.

use std::fmt;

/// Where a coordinate falls along one face axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Zone {
    /// Inside the face.
    None = 0,
    /// Past the far border (`>= edge`).
    Positive = 1,
    /// Before the near border (`< 0`).
    Negative = 2,
}

impl Zone {
    /// All zones in table order.
    pub const ALL: [Zone; 3] = [Zone::None, Zone::Positive, Zone::Negative];

    /// Table digit 0-2.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The same zone seen along a reversed axis.
    #[must_use]
    pub fn mirrored(self) -> Zone {
        match self {
            Zone::None => Zone::None,
            Zone::Positive => Zone::Negative,
            Zone::Negative => Zone::Positive,
        }
    }

    /// Whether the coordinate leaves the face on this axis.
    #[must_use]
    pub fn overflows(self) -> bool {
        self != Zone::None
    }
}

/// One of the nine regions of a face: a zone per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    /// Zone along the V (row) axis.
    pub v_zone: Zone,
    /// Zone along the U (column) axis.
    pub u_zone: Zone,
}

impl Region {
    /// The face interior.
    pub const CENTER: Region = Region::new(Zone::None, Zone::None);

    /// Construct from the V zone and the U zone, in table order.
    #[must_use]
    pub const fn new(v_zone: Zone, u_zone: Zone) -> Self {
        Self { v_zone, u_zone }
    }

    /// Region for a flat index `v_zone * 3 + u_zone`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::new(Zone::ALL[index / 3], Zone::ALL[index % 3])
    }

    /// All nine regions in flat-index order.
    pub fn all() -> impl Iterator<Item = Region> {
        (0..9).map(Region::from_index)
    }

    /// Flat index within the face, `v_zone * 3 + u_zone`.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.v_zone.index() * 3 + self.u_zone.index()
    }

    /// Both axes overflow.
    #[must_use]
    pub fn is_corner(self) -> bool {
        self.u_zone.overflows() && self.v_zone.overflows()
    }

    /// Exactly one axis overflows.
    #[must_use]
    pub fn is_edge(self) -> bool {
        self.u_zone.overflows() != self.v_zone.overflows()
    }

    /// The region across the opposite border on both axes.
    #[must_use]
    pub fn opposite(self) -> Region {
        Region::new(self.v_zone.mirrored(), self.u_zone.mirrored())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |z: Zone| match z {
            Zone::None => '0',
            Zone::Positive => '+',
            Zone::Negative => '-',
        };
        write!(f, "v{}u{}", sign(self.v_zone), sign(self.u_zone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_index_roundtrip() {
        for i in 0..9 {
            assert_eq!(Region::from_index(i).index(), i);
        }
        assert_eq!(Region::new(Zone::Negative, Zone::Positive).index(), 7);
    }

    #[test]
    fn test_region_kinds() {
        let kinds: Vec<(bool, bool)> = Region::all().map(|r| (r.is_edge(), r.is_corner())).collect();
        assert_eq!(kinds.iter().filter(|k| k.0).count(), 4);
        assert_eq!(kinds.iter().filter(|k| k.1).count(), 4);
        assert!(!Region::CENTER.is_edge() && !Region::CENTER.is_corner());
    }

    #[test]
    fn test_mirror_is_involution() {
        for z in Zone::ALL {
            assert_eq!(z.mirrored().mirrored(), z);
        }
        assert_eq!(Region::CENTER.opposite(), Region::CENTER);
    }

    #[test]
    fn test_display() {
        assert_eq!(Region::new(Zone::Positive, Zone::Negative).to_string(), "v+u-");
        assert_eq!(Region::CENTER.to_string(), "v0u0");
    }
}

//! Wrap descriptors and their packed byte form.

use cubewrap_geometry::CubeFace;

use crate::{Region, TableError};

const FACE_MASK: u8 = 0x07;
const MIRROR_U: u8 = 0x10;
const MIRROR_V: u8 = 0x20;
const SWAP_UV: u8 = 0x40;

/// Where sampling continues after leaving a face region, and how the
/// destination face's axes relate to the source face's.
///
/// Mirror flags are expressed in the source face's axis order, i.e. after
/// the swap has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WrapDescriptor {
    /// Destination face.
    pub face: CubeFace,
    /// The destination's U axis runs opposite to the source's.
    pub mirror_u: bool,
    /// The destination's V axis runs opposite to the source's.
    pub mirror_v: bool,
    /// The destination's U and V axes are transposed.
    pub swap_uv: bool,
}

impl WrapDescriptor {
    /// Stay on `face` with no axis change.
    #[must_use]
    pub fn identity(face: CubeFace) -> Self {
        Self {
            face,
            mirror_u: false,
            mirror_v: false,
            swap_uv: false,
        }
    }

    /// Pack as `face | mirror_u << 4 | mirror_v << 5 | swap_uv << 6`.
    #[must_use]
    pub fn to_byte(self) -> u8 {
        let mut b = self.face as u8;
        if self.mirror_u {
            b |= MIRROR_U;
        }
        if self.mirror_v {
            b |= MIRROR_V;
        }
        if self.swap_uv {
            b |= SWAP_UV;
        }
        b
    }

    /// Decode a packed byte.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidDescriptor`] for a face above 5 or any
    /// bit outside the defined fields.
    pub fn from_byte(b: u8) -> Result<Self, TableError> {
        if b & !(FACE_MASK | MIRROR_U | MIRROR_V | SWAP_UV) != 0 {
            return Err(TableError::InvalidDescriptor(b));
        }
        let face = CubeFace::try_from(b & FACE_MASK).map_err(|_| TableError::InvalidDescriptor(b))?;
        Ok(Self {
            face,
            mirror_u: b & MIRROR_U != 0,
            mirror_v: b & MIRROR_V != 0,
            swap_uv: b & SWAP_UV != 0,
        })
    }

    /// Exchange the two mirror flags.
    ///
    /// Used when this descriptor is reached through a swapping transition,
    /// whose U axis is this descriptor's V axis.
    #[must_use]
    pub fn transposed(self) -> Self {
        Self {
            mirror_u: self.mirror_v,
            mirror_v: self.mirror_u,
            ..self
        }
    }

    /// XOR `earlier`'s flags into this descriptor, keeping this face.
    #[must_use]
    pub fn after(self, earlier: WrapDescriptor) -> Self {
        Self {
            face: self.face,
            mirror_u: self.mirror_u ^ earlier.mirror_u,
            mirror_v: self.mirror_v ^ earlier.mirror_v,
            swap_uv: self.swap_uv ^ earlier.swap_uv,
        }
    }

    /// The region on the destination face that corresponds to `region` on
    /// the source face: each zone is mirrored on its own axis, then the two
    /// zones are exchanged if the axes swap.
    #[must_use]
    pub fn map_region(self, region: Region) -> Region {
        let u = if self.mirror_u {
            region.u_zone.mirrored()
        } else {
            region.u_zone
        };
        let v = if self.mirror_v {
            region.v_zone.mirrored()
        } else {
            region.v_zone
        };
        if self.swap_uv {
            Region::new(u, v)
        } else {
            Region::new(v, u)
        }
    }

    /// Flags that undo this transition when crossing back.
    ///
    /// A mirror is its own inverse; under a swap the mirrored axes trade
    /// places.
    #[must_use]
    pub fn inverse_flags(self) -> (bool, bool, bool) {
        let inv = if self.swap_uv { self.transposed() } else { self };
        (inv.mirror_u, inv.mirror_v, inv.swap_uv)
    }

    /// The three flags as a tuple `(mirror_u, mirror_v, swap_uv)`.
    #[must_use]
    pub fn flags(self) -> (bool, bool, bool) {
        (self.mirror_u, self.mirror_v, self.swap_uv)
    }
}

/// One table slot: the primary descriptor and the alternate used for
/// corners. Edge and center slots carry the same descriptor twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WrapEntry {
    /// Descriptor stored in the first half of the table.
    pub primary: WrapDescriptor,
    /// Descriptor stored in the second half of the table.
    pub alternate: WrapDescriptor,
}

impl WrapEntry {
    /// Slot holding `d` in both halves.
    #[must_use]
    pub fn uniform(d: WrapDescriptor) -> Self {
        Self {
            primary: d,
            alternate: d,
        }
    }

    /// Whether both halves agree.
    #[must_use]
    pub fn is_uniform(self) -> bool {
        self.primary == self.alternate
    }

    /// The slot as the 16-bit value `primary | alternate << 8`.
    #[must_use]
    pub fn packed(self) -> u16 {
        u16::from(self.primary.to_byte()) | (u16::from(self.alternate.to_byte()) << 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Zone;

    #[test]
    fn test_byte_layout() {
        let d = WrapDescriptor {
            face: CubeFace::NegY,
            mirror_u: true,
            mirror_v: true,
            swap_uv: true,
        };
        assert_eq!(d.to_byte(), 0x73);
        assert_eq!(WrapDescriptor::identity(CubeFace::NegZ).to_byte(), 0x05);
        assert_eq!(WrapDescriptor::from_byte(0x52).unwrap().flags(), (true, false, true));
    }

    #[test]
    fn test_from_byte_rejects_bad_faces_and_bits() {
        for b in [0x06u8, 0x07, 0x16, 0x08, 0x80, 0x63 | 0x80] {
            assert!(
                matches!(WrapDescriptor::from_byte(b), Err(TableError::InvalidDescriptor(v)) if v == b),
                "0x{b:02X} should be rejected"
            );
        }
    }

    #[test]
    fn test_transposed_swaps_mirrors_only() {
        let d = WrapDescriptor::from_byte(0x52).unwrap().transposed();
        assert_eq!(d.to_byte(), 0x62);
    }

    #[test]
    fn test_after_xors_flags() {
        let first = WrapDescriptor::from_byte(0x63).unwrap();
        let second = WrapDescriptor::from_byte(0x54).unwrap();
        assert_eq!(second.after(first).to_byte(), 0x34);
    }

    #[test]
    fn test_map_region_mirrors_before_swapping() {
        // mirror_v then swap: the V zone lands on U, flipped.
        let d = WrapDescriptor::from_byte(0x63).unwrap();
        let r = d.map_region(Region::new(Zone::Negative, Zone::None));
        assert_eq!(r, Region::new(Zone::None, Zone::Positive));

        // mirror_u only affects the U zone, and the swap moves it to V.
        let d = WrapDescriptor::from_byte(0x52).unwrap();
        let r = d.map_region(Region::new(Zone::Positive, Zone::None));
        assert_eq!(r, Region::new(Zone::None, Zone::Positive));
    }

    #[test]
    fn test_inverse_flags() {
        assert_eq!(
            WrapDescriptor::from_byte(0x52).unwrap().inverse_flags(),
            (false, true, true)
        );
        assert_eq!(
            WrapDescriptor::from_byte(0x35).unwrap().inverse_flags(),
            (true, true, false)
        );
    }

    #[test]
    fn test_entry_packing() {
        let e = WrapEntry {
            primary: WrapDescriptor::from_byte(0x33).unwrap(),
            alternate: WrapDescriptor::from_byte(0x55).unwrap(),
        };
        assert_eq!(e.packed(), 0x5533);
        assert!(!e.is_uniform());
        assert!(WrapEntry::uniform(e.primary).is_uniform());
    }
}

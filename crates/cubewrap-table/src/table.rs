//! The finished wrap table and its byte layout.

use cubewrap_geometry::{CubeFace, EdgeWidth};
use tracing::info;

use crate::{
    Region, RegionEntries, TableError, WrapDescriptor, WrapEntry, classify_faces, resolve_corners,
};

/// Faces per cube.
pub const FACE_COUNT: usize = 6;
/// Regions per face.
pub const REGIONS_PER_FACE: usize = 9;
/// Bytes per table half.
pub const HALF_LEN: usize = FACE_COUNT * REGIONS_PER_FACE;
/// Bytes in the emitted table.
pub const TABLE_LEN: usize = 2 * HALF_LEN;

static_assertions::const_assert_eq!(TABLE_LEN, 108);

/// Table index of `region` on `face`: `face * 9 + v_zone * 3 + u_zone`.
/// Add [`HALF_LEN`] for the alternate half.
#[inline]
#[must_use]
pub fn flat_index(face: CubeFace, region: Region) -> usize {
    face.index() * REGIONS_PER_FACE + region.index()
}

/// Wrap descriptors for every region of every face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrapTable {
    edge: EdgeWidth,
    entries: RegionEntries,
}

impl WrapTable {
    /// Run both phases for a cube of the given edge width.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Geometry`] if a probe cannot be mapped.
    pub fn generate(edge: EdgeWidth) -> Result<Self, TableError> {
        let phase1 = classify_faces(edge)?;
        let entries = resolve_corners(&phase1);
        info!(%edge, "generated cube wrap table");
        Ok(Self { edge, entries })
    }

    /// Rebuild a table from its 108-byte form.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidDescriptor`] for any undecodable byte.
    pub fn from_bytes(edge: EdgeWidth, bytes: &[u8; TABLE_LEN]) -> Result<Self, TableError> {
        let identity = WrapEntry::uniform(WrapDescriptor::identity(CubeFace::PosX));
        let mut entries = [[identity; REGIONS_PER_FACE]; FACE_COUNT];
        for face in CubeFace::ALL {
            for region in Region::all() {
                let i = flat_index(face, region);
                entries[face.index()][region.index()] = WrapEntry {
                    primary: WrapDescriptor::from_byte(bytes[i])?,
                    alternate: WrapDescriptor::from_byte(bytes[i + HALF_LEN])?,
                };
            }
        }
        Ok(Self { edge, entries })
    }

    /// Edge width the table was generated for.
    #[must_use]
    pub fn edge(&self) -> EdgeWidth {
        self.edge
    }

    /// All slots, indexed by `[face][region]`.
    #[must_use]
    pub fn entries(&self) -> &RegionEntries {
        &self.entries
    }

    /// The slot for one region.
    #[must_use]
    pub fn entry(&self, face: CubeFace, region: Region) -> WrapEntry {
        self.entries[face.index()][region.index()]
    }

    /// Primary bytes in table order.
    #[must_use]
    pub fn primary_bytes(&self) -> [u8; HALF_LEN] {
        self.half(|e| e.primary)
    }

    /// Alternate bytes in table order.
    #[must_use]
    pub fn alternate_bytes(&self) -> [u8; HALF_LEN] {
        self.half(|e| e.alternate)
    }

    /// The emitted layout: 54 primary bytes followed by 54 alternate bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; TABLE_LEN] {
        let mut out = [0u8; TABLE_LEN];
        out[..HALF_LEN].copy_from_slice(&self.primary_bytes());
        out[HALF_LEN..].copy_from_slice(&self.alternate_bytes());
        out
    }

    fn half(&self, pick: impl Fn(&WrapEntry) -> WrapDescriptor) -> [u8; HALF_LEN] {
        let mut out = [0u8; HALF_LEN];
        for (slot, entry) in out.iter_mut().zip(self.entries.iter().flatten()) {
            *slot = pick(entry).to_byte();
        }
        out
    }
}

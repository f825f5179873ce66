//! Consistency checks run on a finished table before it is emitted.

use cubewrap_geometry::CubeFace;
use tracing::info;

use crate::{Region, TableError, WrapTable, flat_index, horizontal_first, vertical_first};

/// Check that every edge transition is undone by the transition facing back.
///
/// For an edge region `R` on face `A` whose descriptor leads to face `B`,
/// the region on `B` across the shared border is `R.opposite()` mapped
/// through the descriptor. That region must lead back to `A` with the
/// inverse flags.
///
/// # Errors
///
/// Returns [`TableError::ClosureViolation`] for the first failing region.
pub fn check_closure(table: &WrapTable) -> Result<(), TableError> {
    for face in CubeFace::ALL {
        for region in Region::all().filter(|r| r.is_edge()) {
            let out = table.entry(face, region).primary;
            let back_region = out.map_region(region.opposite());
            let back = table.entry(out.face, back_region).primary;
            if back.face != face || back.flags() != out.inverse_flags() {
                return Err(TableError::ClosureViolation {
                    face,
                    region,
                    outbound: out.to_byte(),
                    back_region,
                    inbound: back.to_byte(),
                });
            }
        }
    }
    Ok(())
}

/// Check that every corner slot holds both chained routes, ordered by the
/// parity of its table index.
///
/// # Errors
///
/// Returns [`TableError::CornerOrder`] for the first mismatching corner.
pub fn check_corners(table: &WrapTable) -> Result<(), TableError> {
    let entries = table.entries();
    for face in CubeFace::ALL {
        for region in Region::all().filter(|r| r.is_corner()) {
            let a = horizontal_first(entries, face, region);
            let b = vertical_first(entries, face, region);
            let (primary, alternate) = if flat_index(face, region) % 2 == 0 {
                (a, b)
            } else {
                (b, a)
            };
            let entry = table.entry(face, region);
            if entry.primary != primary || entry.alternate != alternate {
                return Err(TableError::CornerOrder { face, region });
            }
        }
    }
    Ok(())
}

/// Run every check, including a decode of the emitted bytes.
///
/// # Errors
///
/// Returns the first failure found.
pub fn check_table(table: &WrapTable) -> Result<(), TableError> {
    WrapTable::from_bytes(table.edge(), &table.to_bytes())?;
    check_closure(table)?;
    check_corners(table)?;
    info!("wrap table passed closure and corner checks");
    Ok(())
}

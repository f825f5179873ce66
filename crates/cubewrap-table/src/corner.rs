//! Phase 2: corner regions, resolved by chaining the two adjacent edges.
//!
//! A corner has no single neighbour: past a cube corner only three faces
//! meet. Sampling may cross the vertical border first and then the
//! horizontal one, or the other way round, and the two routes end on
//! different faces. Both are stored.

use cubewrap_geometry::CubeFace;
use tracing::{debug, info};

use crate::{Region, RegionEntries, WrapDescriptor, WrapEntry, Zone};

/// Follow the edge transition `first_region` of `face`, then continue across
/// the destination face in the direction `onward` (expressed on `face`).
fn chain(
    phase1: &RegionEntries,
    face: CubeFace,
    first_region: Region,
    onward: Region,
) -> WrapDescriptor {
    let first = phase1[face.index()][first_region.index()].primary;
    let target = first.map_region(onward);
    let second = phase1[first.face.index()][target.index()].primary;
    let second = if first.swap_uv {
        second.transposed()
    } else {
        second
    };
    second.after(first)
}

/// Cross the U border first (the horizontal edge region `(None, u_zone)`),
/// then the V border on the neighbouring face.
#[must_use]
pub fn horizontal_first(phase1: &RegionEntries, face: CubeFace, corner: Region) -> WrapDescriptor {
    chain(
        phase1,
        face,
        Region::new(Zone::None, corner.u_zone),
        Region::new(corner.v_zone, Zone::None),
    )
}

/// Cross the V border first (the vertical edge region `(v_zone, None)`),
/// then the U border on the neighbouring face.
#[must_use]
pub fn vertical_first(phase1: &RegionEntries, face: CubeFace, corner: Region) -> WrapDescriptor {
    chain(
        phase1,
        face,
        Region::new(corner.v_zone, Zone::None),
        Region::new(Zone::None, corner.u_zone),
    )
}

/// Replace the provisional corner slots of `phase1` with both chained
/// routes. Slots at an even table index hold the horizontal-first route as
/// primary; odd slots hold the vertical-first route as primary. Edge and
/// center slots are copied unchanged.
#[must_use]
pub fn resolve_corners(phase1: &RegionEntries) -> RegionEntries {
    let mut resolved = *phase1;

    for face in CubeFace::ALL {
        for corner in Region::all().filter(|r| r.is_corner()) {
            let a = horizontal_first(phase1, face, corner);
            let b = vertical_first(phase1, face, corner);
            let flat = crate::flat_index(face, corner);
            let entry = if flat % 2 == 0 {
                WrapEntry {
                    primary: a,
                    alternate: b,
                }
            } else {
                WrapEntry {
                    primary: b,
                    alternate: a,
                }
            };
            debug!(
                face = face.index(),
                region = %corner,
                primary = entry.primary.to_byte(),
                alternate = entry.alternate.to_byte(),
                "resolved corner"
            );
            resolved[face.index()][corner.index()] = entry;
        }
    }

    info!("resolved {} corner regions", CubeFace::ALL.len() * 4);
    resolved
}

#[cfg(test)]
mod tests {
    use cubewrap_geometry::EdgeWidth;

    use super::*;
    use crate::classify_faces;

    fn phase1() -> RegionEntries {
        classify_faces(EdgeWidth::REFERENCE).unwrap()
    }

    #[test]
    fn test_pos_x_lower_right_corner() {
        // Table index 4: even, so horizontal-first is primary.
        let p1 = phase1();
        let corner = Region::new(Zone::Positive, Zone::Positive);
        assert_eq!(horizontal_first(&p1, CubeFace::PosX, corner).to_byte(), 0x33);
        assert_eq!(vertical_first(&p1, CubeFace::PosX, corner).to_byte(), 0x55);
        let resolved = resolve_corners(&p1);
        assert_eq!(resolved[0][4].packed(), 0x5533);
    }

    #[test]
    fn test_odd_index_puts_vertical_route_first() {
        // +X region (Positive, Negative) has table index 5.
        let p1 = phase1();
        let corner = Region::new(Zone::Positive, Zone::Negative);
        let resolved = resolve_corners(&p1);
        let entry = resolved[0][corner.index()];
        assert_eq!(entry.primary, vertical_first(&p1, CubeFace::PosX, corner));
        assert_eq!(entry.alternate, horizontal_first(&p1, CubeFace::PosX, corner));
        assert_eq!(entry.packed(), 0x0364);
    }

    #[test]
    fn test_corner_routes_reach_the_two_other_faces() {
        // Crossing the U border first ends on the face across the V border,
        // and vice versa.
        let p1 = phase1();
        for face in CubeFace::ALL {
            for corner in Region::all().filter(|r| r.is_corner()) {
                let h_edge = p1[face.index()][Region::new(Zone::None, corner.u_zone).index()].primary;
                let v_edge = p1[face.index()][Region::new(corner.v_zone, Zone::None).index()].primary;
                let a = horizontal_first(&p1, face, corner);
                let b = vertical_first(&p1, face, corner);
                assert_eq!(a.face, v_edge.face, "{face:?} {corner} horizontal-first");
                assert_eq!(b.face, h_edge.face, "{face:?} {corner} vertical-first");
            }
        }
    }

    #[test]
    fn test_edges_untouched() {
        let p1 = phase1();
        let resolved = resolve_corners(&p1);
        for face in CubeFace::ALL {
            for region in Region::all().filter(|r| !r.is_corner()) {
                assert_eq!(
                    resolved[face.index()][region.index()],
                    p1[face.index()][region.index()]
                );
            }
        }
    }
}

//! Phase 1: probe every region of every face through the direction mapping.

use cubewrap_geometry::{
    CubeFace, EdgeWidth, GridCoord, direction_to_grid, grid_to_direction, is_axis_tie,
};
use tracing::{debug, info, warn};

use crate::{FACE_COUNT, REGIONS_PER_FACE, Region, TableError, WrapDescriptor, WrapEntry, Zone};

/// Table slots indexed by `[face][region]`.
pub type RegionEntries = [[WrapEntry; REGIONS_PER_FACE]; FACE_COUNT];

/// Probe coordinate along one axis for a zone.
///
/// Interior probes sit a quarter of the way in, well clear of both the
/// sampling band edges and the midpoint; overflow probes sit just past
/// either border.
#[must_use]
pub fn probe_coord(zone: Zone, edge: EdgeWidth) -> f64 {
    match zone {
        Zone::None => edge.as_f64() * 0.25,
        Zone::Positive => edge.as_f64() + 1.0,
        Zone::Negative => -1.5,
    }
}

/// Whether `c` lies in the central sampling band `[edge/8, edge - edge/8)`.
///
/// A coordinate that crosses a border stays outside the band on the axis
/// it crossed; landing inside the band on that axis means the neighbour's
/// axes are transposed.
#[must_use]
pub fn band_contains(c: f64, edge: EdgeWidth) -> bool {
    let margin = edge.as_f64() * 0.125;
    c >= margin && c < edge.as_f64() - margin
}

/// Whether the probe direction for `region` of `face` has two equally
/// dominant components, so its face is decided by tie-break order alone.
#[must_use]
pub fn probe_is_tie(face: CubeFace, region: Region, edge: EdgeWidth) -> bool {
    let probe = GridCoord::new(
        face,
        probe_coord(region.u_zone, edge),
        probe_coord(region.v_zone, edge),
    );
    is_axis_tie(grid_to_direction(&probe, edge))
}

/// Derive the wrap descriptor for one region of `face`.
///
/// # Errors
///
/// Returns [`TableError::Geometry`] if the probe direction cannot be mapped
/// back to a face.
pub fn classify_region(
    face: CubeFace,
    region: Region,
    edge: EdgeWidth,
) -> Result<WrapDescriptor, TableError> {
    let probe = GridCoord::new(
        face,
        probe_coord(region.u_zone, edge),
        probe_coord(region.v_zone, edge),
    );
    let dir = grid_to_direction(&probe, edge);
    if is_axis_tie(dir) {
        // Corner slots are replaced in phase 2.
        if region.is_corner() {
            debug!(
                face = face.index(),
                %region,
                x = dir.x,
                y = dir.y,
                z = dir.z,
                "probe on a dominant-axis tie"
            );
        } else {
            warn!(
                face = face.index(),
                %region,
                x = dir.x,
                y = dir.y,
                z = dir.z,
                "probe on a dominant-axis tie"
            );
        }
    }
    let mut landed = direction_to_grid(dir, edge)?;

    let x = edge.wrap(probe.x);
    let y = edge.wrap(probe.y);

    let swap_uv = band_contains(landed.x, edge) != band_contains(x, edge);
    if swap_uv {
        landed = landed.transposed();
    }

    let mid = edge.midpoint();
    let d = WrapDescriptor {
        face: landed.face,
        mirror_u: (landed.x < mid) != (x < mid),
        mirror_v: (landed.y < mid) != (y < mid),
        swap_uv,
    };
    debug!(
        face = face.index(),
        %region,
        landed_x = landed.x,
        landed_y = landed.y,
        byte = d.to_byte(),
        "classified region"
    );
    Ok(d)
}

/// Classify all 54 regions. Every slot holds the same descriptor in both
/// halves; corner slots are provisional until [`resolve_corners`](crate::resolve_corners).
///
/// # Errors
///
/// Propagates [`classify_region`] failures.
pub fn classify_faces(edge: EdgeWidth) -> Result<RegionEntries, TableError> {
    let placeholder = WrapEntry::uniform(WrapDescriptor::identity(CubeFace::PosX));
    let mut entries = [[placeholder; REGIONS_PER_FACE]; FACE_COUNT];

    for face in CubeFace::ALL {
        for region in Region::all() {
            let d = classify_region(face, region, edge)?;
            entries[face.index()][region.index()] = WrapEntry::uniform(d);
        }
    }

    info!(%edge, "classified {} regions", FACE_COUNT * REGIONS_PER_FACE);
    Ok(entries)
}

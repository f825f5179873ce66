//! Sampling direction back to face and texel coordinate.

use glam::DVec3;

use crate::{CubeFace, EdgeWidth, GeometryError, GridCoord};

/// Determine which cube face a direction vector samples from.
///
/// The face is picked by the component whose magnitude is strictly greater
/// than both others, tested X first, then Y. When neither X nor Y strictly
/// dominates, Z is used, so an X/Z or Y/Z tie resolves to a Z face and an
/// X/Y tie above Z also falls through to Z.
/// [`is_axis_tie`] reports such directions.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateDirection`] when the selected
/// component is zero or the vector is not finite.
pub fn direction_to_face(dir: DVec3) -> Result<CubeFace, GeometryError> {
    let degenerate = GeometryError::DegenerateDirection {
        x: dir.x,
        y: dir.y,
        z: dir.z,
    };
    if !dir.is_finite() {
        return Err(degenerate);
    }

    let ax = dir.x.abs();
    let ay = dir.y.abs();
    let az = dir.z.abs();

    let (component, pos, neg) = if ax > ay && ax > az {
        (dir.x, CubeFace::PosX, CubeFace::NegX)
    } else if ay > ax && ay > az {
        (dir.y, CubeFace::PosY, CubeFace::NegY)
    } else {
        (dir.z, CubeFace::PosZ, CubeFace::NegZ)
    };

    if component == 0.0 {
        return Err(degenerate);
    }
    Ok(if component > 0.0 { pos } else { neg })
}

/// Whether the largest component magnitude of `dir` is shared exactly by
/// another component.
///
/// [`direction_to_face`] still picks a face for such a direction through its
/// fixed X, Y, Z order; callers use this to report the tie.
#[must_use]
pub fn is_axis_tie(dir: DVec3) -> bool {
    let a = dir.abs();
    let max = a.max_element();
    max > 0.0 && [a.x, a.y, a.z].iter().filter(|&&c| c == max).count() > 1
}

/// Recover the texel coordinate a sampler computes for `dir`.
///
/// Inverse of [`grid_to_direction`](crate::grid_to_direction) for texel
/// coordinates inside the face; directions past a face border come back as
/// coordinates on the face they actually point into. The direction does not
/// need to be unit length.
///
/// # Errors
///
/// Propagates [`direction_to_face`] failures.
pub fn direction_to_grid(dir: DVec3, edge: EdgeWidth) -> Result<GridCoord, GeometryError> {
    let face = direction_to_face(dir)?;
    let frame = face.frame();

    // Magnitude of the dominant component; non-zero after direction_to_face.
    let d = dir.dot(frame.normal);
    let s = dir.dot(frame.tangent) / d;
    let t = dir.dot(frame.down) / d;

    let w = edge.as_f64();
    Ok(GridCoord::new(
        face,
        (s + 1.0) * w * 0.5 - 0.5,
        (t + 1.0) * w * 0.5 - 0.5,
    ))
}

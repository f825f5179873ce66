//! Texel grid to sampling direction.

use glam::DVec3;

use crate::{EdgeWidth, GridCoord};

/// Map a texel coordinate onto the face plane of a cube with half-extent
/// `edge`, so that texel centers `0` and `edge - 1` land one unit inside the
/// face border: `g(c) = 2c - (edge - 1)`.
#[inline]
#[must_use]
pub fn texel_to_plane(c: f64, edge: EdgeWidth) -> f64 {
    (c + c) - (edge.as_f64() - 1.0)
}

/// Point on the surface of the cube of half-extent `edge` for a texel
/// coordinate. Coordinates beyond the face border leave the cube surface but
/// keep pointing into the neighbouring face's solid angle.
#[inline]
#[must_use]
pub fn grid_to_cube_point(coord: &GridCoord, edge: EdgeWidth) -> DVec3 {
    let frame = coord.face.frame();
    frame.normal * edge.as_f64()
        + frame.tangent * texel_to_plane(coord.x, edge)
        + frame.down * texel_to_plane(coord.y, edge)
}

/// Unit sampling direction for a texel coordinate.
///
/// The through-face component is always `±edge`, so the point is never zero.
#[inline]
#[must_use]
pub fn grid_to_direction(coord: &GridCoord, edge: EdgeWidth) -> DVec3 {
    let p = grid_to_cube_point(coord, edge);
    p / p.length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CubeFace;

    const EPSILON: f64 = 1e-12;

    fn edge() -> EdgeWidth {
        EdgeWidth::REFERENCE
    }

    #[test]
    fn test_face_table_matches_axis_assignment() {
        // f(c) = (w-1) - 2c, g(c) = 2c - (w-1)
        let w = 256.0;
        let (x, y) = (10.0, 200.0);
        let f = |c: f64| (w - 1.0) - 2.0 * c;
        let g = |c: f64| 2.0 * c - (w - 1.0);
        let expected = [
            DVec3::new(w, f(y), f(x)),
            DVec3::new(-w, f(y), g(x)),
            DVec3::new(g(x), w, g(y)),
            DVec3::new(g(x), -w, f(y)),
            DVec3::new(g(x), f(y), w),
            DVec3::new(f(x), f(y), -w),
        ];
        for face in CubeFace::ALL {
            let p = grid_to_cube_point(&GridCoord::new(face, x, y), edge());
            assert_eq!(p, expected[face.index()], "axis assignment for {face:?}");
        }
    }

    #[test]
    fn test_face_center_maps_to_normal() {
        for face in CubeFace::ALL {
            let c = GridCoord::new(face, 127.5, 127.5);
            let d = grid_to_direction(&c, edge());
            assert!(
                (d - face.normal()).length() < EPSILON,
                "Face center of {face:?} did not map to normal: got {d:?}"
            );
        }
    }

    #[test]
    fn test_all_outputs_are_unit_length() {
        for face in CubeFace::ALL {
            for &x in &[-1.5, 0.0, 64.0, 255.0, 257.0] {
                for &y in &[-1.5, 0.0, 64.0, 255.0, 257.0] {
                    let d = grid_to_direction(&GridCoord::new(face, x, y), edge());
                    assert!(
                        (d.length() - 1.0).abs() < EPSILON,
                        "not unit for {face:?} at ({x}, {y}): {}",
                        d.length()
                    );
                }
            }
        }
    }

    #[test]
    fn test_texel_centers_inset_from_border() {
        assert_eq!(texel_to_plane(0.0, edge()), -255.0);
        assert_eq!(texel_to_plane(255.0, edge()), 255.0);
        assert_eq!(texel_to_plane(127.5, edge()), 0.0);
        assert_eq!(texel_to_plane(-0.5, edge()), -256.0);
    }
}

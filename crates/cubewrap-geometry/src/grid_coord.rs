//! Texel coordinates on a cube face.

use crate::CubeFace;

/// A texel-space coordinate on a cube face.
///
/// Texel centers sit at integer positions `0..edge`; the coordinate is not
/// clamped, so values outside `[-0.5, edge - 0.5]` address texels beyond the
/// face border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCoord {
    /// Which cube face this coordinate lies on.
    pub face: CubeFace,
    /// Column, increasing along the face tangent.
    pub x: f64,
    /// Row, increasing along the face's down vector.
    pub y: f64,
}

impl GridCoord {
    /// Construct a coordinate.
    #[must_use]
    pub fn new(face: CubeFace, x: f64, y: f64) -> Self {
        Self { face, x, y }
    }

    /// The same coordinate with `x` and `y` exchanged.
    #[must_use]
    pub fn transposed(self) -> Self {
        Self {
            face: self.face,
            x: self.y,
            y: self.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_are_not_clamped() {
        let c = GridCoord::new(CubeFace::NegY, -1.5, 257.0);
        assert_eq!(c.x, -1.5);
        assert_eq!(c.y, 257.0);
    }

    #[test]
    fn test_transposed_keeps_face() {
        let c = GridCoord::new(CubeFace::PosZ, 3.0, 200.0).transposed();
        assert_eq!(c, GridCoord::new(CubeFace::PosZ, 200.0, 3.0));
    }
}

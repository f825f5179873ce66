//! The six faces of a cube map and their texel-space frames.

use std::fmt;

use glam::DVec3;

use crate::GeometryError;

/// The six faces of a cube-mapped texture, in DDS storage order.
///
/// Each variant corresponds to a face whose outward normal points
/// along the named axis direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face ("E")
    PosX = 0,
    /// −X face ("W")
    NegX = 1,
    /// +Y face ("N")
    PosY = 2,
    /// −Y face ("S")
    NegY = 3,
    /// +Z face (top)
    PosZ = 4,
    /// −Z face (bottom)
    NegZ = 5,
}

/// Orientation of one face in texel space.
///
/// A texel at `(x, y)` on the face lies at
/// `normal * edge + tangent * g(x) + down * g(y)` where
/// `g(c) = 2c - (edge - 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceFrame {
    /// Outward unit normal.
    pub normal: DVec3,
    /// Direction of increasing `x` (the U axis).
    pub tangent: DVec3,
    /// Direction of increasing `y` (the V axis, image rows run downwards).
    pub down: DVec3,
}

/// Frames for all six faces, indexed by `CubeFace as usize`.
pub const FACE_FRAMES: [FaceFrame; 6] = [
    FaceFrame {
        normal: DVec3::X,
        tangent: DVec3::NEG_Z,
        down: DVec3::NEG_Y,
    },
    FaceFrame {
        normal: DVec3::NEG_X,
        tangent: DVec3::Z,
        down: DVec3::NEG_Y,
    },
    FaceFrame {
        normal: DVec3::Y,
        tangent: DVec3::X,
        down: DVec3::Z,
    },
    FaceFrame {
        normal: DVec3::NEG_Y,
        tangent: DVec3::X,
        down: DVec3::NEG_Z,
    },
    FaceFrame {
        normal: DVec3::Z,
        tangent: DVec3::X,
        down: DVec3::NEG_Y,
    },
    FaceFrame {
        normal: DVec3::NEG_Z,
        tangent: DVec3::NEG_X,
        down: DVec3::NEG_Y,
    },
];

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Face index 0-5.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Texel-space frame of this face.
    #[inline]
    #[must_use]
    pub fn frame(self) -> &'static FaceFrame {
        &FACE_FRAMES[self.index()]
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        self.frame().normal
    }

    /// Direction of increasing `x` on this face.
    #[must_use]
    pub fn tangent(self) -> DVec3 {
        self.frame().tangent
    }

    /// Direction of increasing `y` on this face.
    #[must_use]
    pub fn down(self) -> DVec3 {
        self.frame().down
    }

    /// Short label used in dumps and log output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CubeFace::PosX => "E",
            CubeFace::NegX => "W",
            CubeFace::PosY => "N",
            CubeFace::NegY => "S",
            CubeFace::PosZ => "top",
            CubeFace::NegZ => "bottom",
        }
    }
}

impl TryFrom<u8> for CubeFace {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CubeFace::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(GeometryError::InvalidFace(value))
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.index(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_indices_match_storage_order() {
        for (i, face) in CubeFace::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(CubeFace::try_from(i as u8).unwrap(), *face);
        }
    }

    #[test]
    fn test_out_of_range_face_rejected() {
        for raw in [6u8, 7, 0x15, 0xFF] {
            assert!(
                matches!(CubeFace::try_from(raw), Err(GeometryError::InvalidFace(v)) if v == raw),
                "face {raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_frames_are_orthonormal() {
        for face in CubeFace::ALL {
            let f = face.frame();
            for v in [f.normal, f.tangent, f.down] {
                assert!((v.length() - 1.0).abs() < 1e-12, "{face:?}: {v:?} not unit");
            }
            assert!(f.normal.dot(f.tangent).abs() < 1e-12);
            assert!(f.normal.dot(f.down).abs() < 1e-12);
            assert!(f.tangent.dot(f.down).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tangent_cross_down_points_inward() {
        // Texel space is viewed from inside the cube.
        for face in CubeFace::ALL {
            let cross = face.tangent().cross(face.down());
            assert!(
                (cross + face.normal()).length() < 1e-12,
                "tangent x down != -normal for {face:?}: got {cross:?}"
            );
        }
    }

    #[test]
    fn test_opposite_face_normals_are_antiparallel() {
        for face in CubeFace::ALL {
            let n = face.normal();
            let opp_n = face.opposite().normal();
            assert!(
                (n + opp_n).length() < 1e-12,
                "Normals for {face:?} and {:?} are not antiparallel",
                face.opposite()
            );
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn test_display_includes_label() {
        assert_eq!(CubeFace::PosX.to_string(), "0 (E)");
        assert_eq!(CubeFace::NegZ.to_string(), "5 (bottom)");
    }
}

//! Geometry error types.

/// Errors raised by the texel/direction mapping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A face index outside 0-5.
    #[error("invalid cube face index {0} (expected 0-5)")]
    InvalidFace(u8),

    /// Edge width below the smallest grid the probe layout supports.
    #[error("edge width {width} is below the minimum of {min}")]
    EdgeTooSmall {
        /// Requested width.
        width: u32,
        /// Smallest accepted width.
        min: u32,
    },

    /// The direction has no dominant component (zero or non-finite vector).
    #[error("direction ({x}, {y}, {z}) has no usable dominant axis")]
    DegenerateDirection {
        /// X component.
        x: f64,
        /// Y component.
        y: f64,
        /// Z component.
        z: f64,
    },
}

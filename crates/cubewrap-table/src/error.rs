//! Table generation error types.

use cubewrap_geometry::{CubeFace, GeometryError};

use crate::Region;

/// Errors raised while building, checking or emitting the wrap table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A probe direction could not be mapped back onto the cube.
    #[error("probe mapping failed: {0}")]
    Geometry(#[from] GeometryError),

    /// A packed byte that does not decode to a descriptor.
    #[error("invalid wrap descriptor byte 0x{0:02X}")]
    InvalidDescriptor(u8),

    /// Crossing an edge and crossing back did not return to the start.
    #[error(
        "closure violated at face {face} region {region}: \
         0x{outbound:02X} leads to region {back_region} holding 0x{inbound:02X}"
    )]
    ClosureViolation {
        /// Source face.
        face: CubeFace,
        /// Source edge region.
        region: Region,
        /// Outbound descriptor byte.
        outbound: u8,
        /// Region on the destination face facing back.
        back_region: Region,
        /// Descriptor byte found there.
        inbound: u8,
    },

    /// A corner slot does not hold the two chained routes in parity order.
    #[error("corner at face {face} region {region} is out of parity order")]
    CornerOrder {
        /// Face of the corner.
        face: CubeFace,
        /// Corner region.
        region: Region,
    },

    /// JSON serialization failed.
    #[error("failed to serialize table: {0}")]
    Json(#[from] serde_json::Error),
}

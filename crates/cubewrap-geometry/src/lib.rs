//! Cube-map texel geometry: the six face frames, and the mapping between
//! texel grid coordinates and 3D sampling directions.

mod cube_face;
mod edge_width;
mod error;
mod grid_coord;
mod inverse;
mod projection;

pub use cube_face::{CubeFace, FACE_FRAMES, FaceFrame};
pub use edge_width::EdgeWidth;
pub use error::GeometryError;
pub use grid_coord::GridCoord;
pub use inverse::{direction_to_face, direction_to_grid, is_axis_tie};
pub use projection::{grid_to_cube_point, grid_to_direction, texel_to_plane};

//! Cube-map wrap table: for every border region of every face, the face that
//! sampling continues into and how that face's axes are oriented.
//!
//! The table is built in two phases. [`classify_faces`] probes each region
//! through the direction mapping; [`resolve_corners`] then composes the two
//! edge transitions adjacent to each corner. [`WrapTable::generate`] runs
//! both and [`emit`] turns the result into embeddable source text.

mod classify;
mod corner;
mod descriptor;
pub mod emit;
mod error;
mod region;
mod table;
pub mod verify;

pub use classify::{
    RegionEntries, band_contains, classify_faces, classify_region, probe_coord, probe_is_tie,
};
pub use corner::{horizontal_first, resolve_corners, vertical_first};
pub use descriptor::{WrapDescriptor, WrapEntry};
pub use error::TableError;
pub use region::{Region, Zone};
pub use table::{FACE_COUNT, HALF_LEN, REGIONS_PER_FACE, TABLE_LEN, WrapTable, flat_index};

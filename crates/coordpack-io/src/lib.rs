//! JSON interchange files for coordinate records and packed coordinates.
//!
//! Both files hold one flat JSON array: `[{"x":1,"y":2}, ...]` for records and
//! `[65538, ...]` for packed values. There is no header, version field or
//! framing.

pub mod error;
pub mod json;

pub use error::IoError;
pub use json::{
    COORDINATES_FILE, PACKED_FILE, from_json_str, read_coordinates, read_json_array, read_packed,
    to_json_string, write_coordinates, write_json_array, write_packed,
};

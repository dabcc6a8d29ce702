use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use coordpack_common::Coordinate;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::IoError;

/// Default file name for the record array.
pub const COORDINATES_FILE: &str = "coordinates.json";
/// Default file name for the packed array.
pub const PACKED_FILE: &str = "encodedCoordinates.json";

/// Serialize `items` as one compact JSON array at `path`, replacing any
/// existing file. Returns the size of the written file in bytes.
pub fn write_json_array<T: Serialize>(
    path: impl AsRef<Path>,
    items: &[T],
) -> Result<u64, IoError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| IoError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, items).map_err(|e| IoError::json(path, e))?;
    writer.flush().map_err(|e| IoError::io(path, e))?;
    let file = writer.into_inner().map_err(|e| IoError::io(path, e.into_error()))?;
    let len = file.metadata().map_err(|e| IoError::io(path, e))?.len();
    tracing::debug!(
        path = %path.display(),
        items = items.len(),
        bytes = len,
        "wrote JSON array"
    );
    Ok(len)
}

/// Read a whole JSON array back from `path`.
pub fn read_json_array<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, IoError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| IoError::io(path, e))?;
    let items: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| IoError::json(path, e))?;
    tracing::debug!(
        path = %path.display(),
        items = items.len(),
        bytes = bytes.len(),
        "read JSON array"
    );
    Ok(items)
}

pub fn write_coordinates(path: impl AsRef<Path>, coords: &[Coordinate]) -> Result<u64, IoError> {
    write_json_array(path, coords)
}

pub fn read_coordinates(path: impl AsRef<Path>) -> Result<Vec<Coordinate>, IoError> {
    read_json_array(path)
}

pub fn write_packed(path: impl AsRef<Path>, packed: &[u32]) -> Result<u64, IoError> {
    write_json_array(path, packed)
}

pub fn read_packed(path: impl AsRef<Path>) -> Result<Vec<u32>, IoError> {
    read_json_array(path)
}

pub fn to_json_string<T: Serialize>(items: &[T]) -> Result<String, IoError> {
    Ok(serde_json::to_string(items)?)
}

pub fn from_json_str<T: DeserializeOwned>(s: &str) -> Result<Vec<T>, IoError> {
    Ok(serde_json::from_str(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_array_shape() {
        let coords = [Coordinate::new(3, 7), Coordinate::new(0, 999)];
        let s = to_json_string(&coords).unwrap();
        assert_eq!(s, r#"[{"x":3,"y":7},{"x":0,"y":999}]"#);
        let back: Vec<Coordinate> = from_json_str(&s).unwrap();
        assert_eq!(back, coords);
    }

    #[test]
    fn packed_array_shape() {
        let s = to_json_string(&[196_615u32, 0, u32::MAX]).unwrap();
        assert_eq!(s, "[196615,0,4294967295]");
    }

    #[test]
    fn negative_packed_value_is_rejected() {
        let err = from_json_str::<u32>("[1,-1]").unwrap_err();
        assert!(matches!(err, IoError::Serde(_)));
    }
}

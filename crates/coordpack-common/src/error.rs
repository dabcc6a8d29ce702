//! Errors raised by the coordinate codec.
//!
//! Decoding is total, so every variant here originates on the encode side or
//! while building a codec with an unsupported field width.

use std::{error::Error, fmt};

/// Which field of a [`Coordinate`](crate::Coordinate) an error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CoordError {
    /// A field lies outside `[0, max]` for the codec's bit width.
    OutOfRange { axis: Axis, value: i32, max: u32 },
    /// Field widths must satisfy `1 <= bits <= 16` so both fields fit a `u32`.
    InvalidBitWidth(u32),
    /// A bulk encode stopped at the record with this index.
    AtIndex {
        index: usize,
        source: Box<CoordError>,
    },
}

impl CoordError {
    pub fn at_index(self, index: usize) -> Self {
        Self::AtIndex {
            index,
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any index wrappers.
    pub fn root(&self) -> &CoordError {
        match self {
            Self::AtIndex { source, .. } => source.root(),
            other => other,
        }
    }
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { axis, value, max } if *value < 0 => {
                write!(f, "{axis} {value} is negative (valid range 0..={max})")
            }
            Self::OutOfRange { axis, value, max } => {
                write!(f, "{axis} {value} exceeds {max}")
            }
            Self::InvalidBitWidth(bits) => {
                write!(f, "bit width {bits} is not in 1..=16")
            }
            Self::AtIndex { index, source } => write!(f, "record {index}: {source}"),
        }
    }
}

impl Error for CoordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AtIndex { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

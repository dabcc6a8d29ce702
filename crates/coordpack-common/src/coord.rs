//! Two-field coordinates and their packed `u32` representation.
//!
//! `CoordinateCodec` places `x` in the high `bit_width` bits and `y` in the low
//! `bit_width` bits of a `u32`. With the standard width of 16 both fields cover
//! `0..=65535` and the packed value uses the whole container.
//!
//! Two encoders are provided. [`CoordinateCodec::encode`] rejects fields outside
//! `[0, 2^bit_width)`. [`CoordinateCodec::encode_unchecked`] performs the bare
//! shift-and-or with no check: out-of-range fields overlap the neighbouring
//! field or fall off the top of the container, producing a deterministic but
//! wrong value. Decoding is total for every `u32`.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Axis, CoordError};

const MAX_BIT_WIDTH: u32 = u32::BITS / 2;

/// A point with two integer fields.
///
/// Fields are stored verbatim; range checks happen in the codec, not here.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[inline(always)]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[inline(always)]
    pub const fn y(self) -> i32 {
        self.y
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

/// Packs a [`Coordinate`] into one `u32` and back.
///
/// The codec only carries its field width, so it is `Copy` and can be shared
/// freely across threads.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CoordinateCodec {
    bit_width: u32,
}

impl Default for CoordinateCodec {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl CoordinateCodec {
    /// Field width used by the standard layout.
    pub const BIT_WIDTH: u32 = 16;

    /// 16 bits per field: `x` in bits 16..32, `y` in bits 0..16.
    pub const STANDARD: Self = Self {
        bit_width: Self::BIT_WIDTH,
    };

    /// Build a codec for `bit_width` bits per field.
    ///
    /// Both fields must fit in a `u32`, so `bit_width` has to be in `1..=16`.
    pub fn new(bit_width: u32) -> Result<Self, CoordError> {
        if bit_width == 0 || bit_width > MAX_BIT_WIDTH {
            return Err(CoordError::InvalidBitWidth(bit_width));
        }
        Ok(Self { bit_width })
    }

    #[inline(always)]
    pub fn bit_width(self) -> u32 {
        self.bit_width
    }

    /// Largest value either field may hold: `2^bit_width - 1`.
    #[inline(always)]
    pub fn max_field(self) -> u32 {
        (1u32 << self.bit_width) - 1
    }

    /// Mask selecting the `y` field of a packed value.
    #[inline(always)]
    pub fn mask(self) -> u32 {
        self.max_field()
    }

    /// Number of significant bits in a packed value.
    #[inline(always)]
    pub fn packed_width(self) -> u32 {
        self.bit_width * 2
    }

    /// Checks that `c` can be packed without loss.
    pub fn check(self, c: Coordinate) -> Result<(), CoordError> {
        self.field(Axis::X, c.x)?;
        self.field(Axis::Y, c.y)?;
        Ok(())
    }

    /// Pack `c`, rejecting fields outside `[0, max_field()]`.
    ///
    /// `x` is checked before `y`, so a coordinate with both fields out of
    /// range reports `x`.
    #[inline]
    pub fn encode(self, c: Coordinate) -> Result<u32, CoordError> {
        let x = self.field(Axis::X, c.x)?;
        let y = self.field(Axis::Y, c.y)?;
        Ok((x << self.bit_width) | y)
    }

    /// Pack `c` without any range check.
    ///
    /// Fields are reinterpreted as `u32` before shifting. For in-range input the
    /// result equals [`encode`](Self::encode); otherwise bits of `x` that move
    /// past bit 31 are lost and a wide `y` bleeds into the `x` field.
    #[inline(always)]
    pub fn encode_unchecked(self, c: Coordinate) -> u32 {
        ((c.x as u32) << self.bit_width) | (c.y as u32)
    }

    /// Unpack `packed`. Every `u32` yields a coordinate; the result is only
    /// meaningful for values produced by `encode`.
    #[inline(always)]
    pub fn decode(self, packed: u32) -> Coordinate {
        // x < 2^(32 - bit_width) <= 2^31, so both casts are lossless.
        let x = packed >> self.bit_width;
        let y = packed & self.mask();
        Coordinate::new(x as i32, y as i32)
    }

    /// Encode every record, stopping at the first one out of range.
    pub fn encode_all(self, coords: &[Coordinate]) -> Result<Vec<u32>, CoordError> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &c)| self.encode(c).map_err(|e| e.at_index(i)))
            .collect()
    }

    pub fn decode_all(self, packed: &[u32]) -> Vec<Coordinate> {
        packed.iter().map(|&v| self.decode(v)).collect()
    }

    /// Parallel [`encode_all`](Self::encode_all). Output order matches input
    /// order. When several records are invalid the reported index is one of
    /// them, not necessarily the first.
    #[cfg(feature = "rayon")]
    pub fn par_encode_all(self, coords: &[Coordinate]) -> Result<Vec<u32>, CoordError> {
        use rayon::prelude::*;

        coords
            .par_iter()
            .enumerate()
            .map(|(i, &c)| self.encode(c).map_err(|e| e.at_index(i)))
            .collect()
    }

    #[cfg(feature = "rayon")]
    pub fn par_decode_all(self, packed: &[u32]) -> Vec<Coordinate> {
        use rayon::prelude::*;

        packed.par_iter().map(|&v| self.decode(v)).collect()
    }

    #[inline(always)]
    fn field(self, axis: Axis, value: i32) -> Result<u32, CoordError> {
        let max = self.max_field();
        match u32::try_from(value) {
            Ok(v) if v <= max => Ok(v),
            _ => Err(CoordError::OutOfRange { axis, value, max }),
        }
    }
}

//! Meta crate re-exporting the coordpack layers. The codec is always
//! available; JSON file support sits behind the default `io` feature.
//!
//! ```
//! use coordpack::{Coordinate, CoordinateCodec};
//!
//! let codec = CoordinateCodec::STANDARD;
//! let packed = codec.encode(Coordinate::new(3, 7)).unwrap();
//! assert_eq!(packed, 196_615);
//! assert_eq!(codec.decode(packed), Coordinate::new(3, 7));
//! ```

pub use coordpack_common::{Axis, CoordError, Coordinate, CoordinateCodec};

#[cfg(feature = "io")]
pub use coordpack_io as io;

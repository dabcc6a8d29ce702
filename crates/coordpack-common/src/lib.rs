pub mod coord;
pub mod error;

pub use coord::*;
pub use error::*;

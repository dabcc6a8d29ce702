//! Size and time comparison between a JSON array of `{x, y}` records and a
//! JSON array of packed `u32` coordinates.

pub mod generate;
pub mod report;
pub mod runner;
pub mod timing;

pub use report::BenchReport;
pub use runner::{BenchConfig, run};
pub use timing::{Stage, StageTiming};

use std::fmt;

use chrono::{DateTime, Utc};
use coordpack_common::Coordinate;
use serde::Serialize;

use crate::timing::{Stage, StageTiming};

/// Outcome of one benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub started_at: DateTime<Utc>,
    pub count: usize,
    pub upper_bound: i32,
    pub bit_width: u32,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub last_coordinate: Option<Coordinate>,
    pub last_packed: Option<u32>,
    pub stages: Vec<StageTiming>,
    pub records_bytes: u64,
    pub packed_bytes: u64,
    /// Both read-back paths reproduced the generated coordinates.
    pub verified: bool,
}

impl BenchReport {
    pub fn stage(&self, stage: Stage) -> Option<&StageTiming> {
        self.stages.iter().find(|t| t.stage == stage)
    }

    /// Record file size divided by packed file size.
    pub fn size_ratio(&self) -> Option<f64> {
        (self.packed_bytes > 0).then(|| self.records_bytes as f64 / self.packed_bytes as f64)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for timing in self.stages.iter().filter(|t| t.stage != Stage::Generate) {
            writeln!(f, "{timing}")?;
        }
        write!(
            f,
            "coordinates.json: {} bytes, encodedCoordinates.json: {} bytes",
            self.records_bytes, self.packed_bytes
        )?;
        if let Some(ratio) = self.size_ratio() {
            write!(f, " ({ratio:.2}x)")?;
        }
        Ok(())
    }
}

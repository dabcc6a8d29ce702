//! Wall-clock timing for the benchmark stages.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

/// The steps of one benchmark run, in execution order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Generate,
    WriteRecords,
    EncodeAndWritePacked,
    ReadRecords,
    ReadAndDecodePacked,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Generate,
        Stage::WriteRecords,
        Stage::EncodeAndWritePacked,
        Stage::ReadRecords,
        Stage::ReadAndDecodePacked,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Generate => "Generating coordinates",
            Self::WriteRecords => "Creating and saving coordinates.json",
            Self::EncodeAndWritePacked => "Creating and saving encodedCoordinates.json",
            Self::ReadRecords => "Reading and decoding coordinates.json",
            Self::ReadAndDecodePacked => "Reading and decoding encodedCoordinates.json",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::WriteRecords => "write_records",
            Self::EncodeAndWritePacked => "encode_and_write_packed",
            Self::ReadRecords => "read_records",
            Self::ReadAndDecodePacked => "read_and_decode_packed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageTiming {
    pub stage: Stage,
    #[serde(skip)]
    pub elapsed: Duration,
    pub elapsed_ms: f64,
    /// Size of the file the stage wrote or read, if any.
    pub bytes: Option<u64>,
}

impl StageTiming {
    pub fn new(stage: Stage, elapsed: Duration) -> Self {
        Self {
            stage,
            elapsed,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            bytes: None,
        }
    }

    pub fn with_bytes(mut self, bytes: u64) -> Self {
        self.bytes = Some(bytes);
        self
    }
}

impl fmt::Display for StageTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} took: {} ms", self.stage.label(), self.elapsed.as_millis())
    }
}

/// Run `f` inside a span for `stage` and measure it.
pub fn time<T>(stage: Stage, f: impl FnOnce() -> T) -> (T, StageTiming) {
    let _span = tracing::info_span!("stage", stage = stage.name()).entered();
    let start = Instant::now();
    let out = f();
    let timing = StageTiming::new(stage, start.elapsed());
    tracing::debug!(elapsed_ms = timing.elapsed_ms, "stage finished");
    (out, timing)
}

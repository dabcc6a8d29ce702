use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail, ensure};
use chrono::Utc;
use coordpack_common::{Coordinate, CoordinateCodec};
use coordpack_io::{
    COORDINATES_FILE, PACKED_FILE, read_coordinates, read_packed, write_coordinates,
    write_packed,
};
use tracing::{info, warn};

use crate::generate::generate_seeded;
use crate::report::BenchReport;
use crate::timing::{self, Stage};

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub count: usize,
    /// Exclusive upper bound for generated field values.
    pub upper_bound: i32,
    pub bit_width: u32,
    pub seed: Option<u64>,
    pub out_dir: PathBuf,
    /// Use rayon for bulk encode/decode.
    pub parallel: bool,
    /// Delete both JSON files after the run.
    pub cleanup: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            count: 1_000_000,
            upper_bound: 1000,
            bit_width: CoordinateCodec::BIT_WIDTH,
            seed: None,
            out_dir: PathBuf::from("."),
            parallel: false,
            cleanup: false,
        }
    }
}

impl BenchConfig {
    /// Check the settings and build the codec they describe.
    ///
    /// Every generated value must be packable, so the largest one
    /// (`upper_bound - 1`) is run through the checked encoder up front.
    pub fn validate(&self) -> Result<CoordinateCodec> {
        ensure!(
            self.upper_bound > 0,
            "upper bound must be positive, got {}",
            self.upper_bound
        );
        let codec = CoordinateCodec::new(self.bit_width)?;
        let largest = self.upper_bound - 1;
        codec.check(Coordinate::new(largest, largest)).with_context(|| {
            format!(
                "upper bound {} does not fit {}-bit fields",
                self.upper_bound, self.bit_width
            )
        })?;
        Ok(codec)
    }

    pub fn records_path(&self) -> PathBuf {
        self.out_dir.join(COORDINATES_FILE)
    }

    pub fn packed_path(&self) -> PathBuf {
        self.out_dir.join(PACKED_FILE)
    }
}

/// Generate, write, read back and verify one data set in both formats.
pub fn run(config: &BenchConfig) -> Result<BenchReport> {
    let codec = config.validate()?;
    let started_at = Utc::now();
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;
    let records_path = config.records_path();
    let packed_path = config.packed_path();
    let mut stages = Vec::with_capacity(Stage::ALL.len());

    let (coords, t) = timing::time(Stage::Generate, || {
        generate_seeded(config.count, config.upper_bound, config.seed)
    });
    stages.push(t);
    let last_coordinate = coords.last().copied();
    if let Some(last) = last_coordinate {
        info!(count = coords.len(), %last, "generated coordinates");
    }

    let (records_bytes, t) =
        timing::time(Stage::WriteRecords, || write_coordinates(&records_path, &coords));
    let records_bytes = records_bytes?;
    info!("{t}");
    stages.push(t.with_bytes(records_bytes));

    let (packed, t) = timing::time(Stage::EncodeAndWritePacked, || -> Result<_> {
        let packed = if config.parallel {
            codec.par_encode_all(&coords)?
        } else {
            codec.encode_all(&coords)?
        };
        let bytes = write_packed(&packed_path, &packed)?;
        Ok((packed, bytes))
    });
    let (packed, packed_bytes) = packed?;
    let last_packed = packed.last().copied();
    if let Some(last) = last_packed {
        info!(last, "encoded coordinates");
    }
    info!("{t}");
    stages.push(t.with_bytes(packed_bytes));
    drop(packed);

    let (read_back, t) = timing::time(Stage::ReadRecords, || read_coordinates(&records_path));
    let read_back = read_back?;
    if let Some(last) = read_back.last() {
        info!(%last, "read coordinates");
    }
    info!("{t}");
    stages.push(t.with_bytes(records_bytes));

    let (decoded, t) = timing::time(Stage::ReadAndDecodePacked, || -> Result<_> {
        let packed = read_packed(&packed_path)?;
        Ok(if config.parallel {
            codec.par_decode_all(&packed)
        } else {
            codec.decode_all(&packed)
        })
    });
    let decoded = decoded?;
    if let Some(last) = decoded.last() {
        info!(%last, "decoded coordinates");
    }
    info!("{t}");
    stages.push(t.with_bytes(packed_bytes));

    verify(COORDINATES_FILE, &coords, &read_back)?;
    verify(PACKED_FILE, &coords, &decoded)?;

    if config.cleanup {
        for path in [&records_path, &packed_path] {
            if let Err(e) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %e, "could not remove output file");
            }
        }
    }

    Ok(BenchReport {
        started_at,
        count: config.count,
        upper_bound: config.upper_bound,
        bit_width: codec.bit_width(),
        seed: config.seed,
        parallel: config.parallel,
        last_coordinate,
        last_packed,
        stages,
        records_bytes,
        packed_bytes,
        verified: true,
    })
}

fn verify(source: &str, expected: &[Coordinate], actual: &[Coordinate]) -> Result<()> {
    ensure!(
        expected.len() == actual.len(),
        "{source}: read back {} records, wrote {}",
        actual.len(),
        expected.len()
    );
    if let Some((i, (want, got))) = expected
        .iter()
        .zip(actual)
        .enumerate()
        .find(|(_, (want, got))| want != got)
    {
        bail!("{source}: record {i} is {got}, expected {want}");
    }
    Ok(())
}

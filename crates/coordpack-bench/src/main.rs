use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use coordpack_bench::{BenchConfig, run};
use coordpack_common::CoordinateCodec;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "coordpack-bench")]
#[command(about = "Time JSON coordinate records against bit-packed coordinates")]
struct Cli {
    /// Number of coordinates to generate
    #[arg(long, default_value_t = 1_000_000)]
    count: usize,

    /// Exclusive upper bound for each generated field
    #[arg(long, default_value_t = 1000)]
    upper_bound: i32,

    /// Bits per field in the packed representation (1..=16)
    #[arg(long, default_value_t = CoordinateCodec::BIT_WIDTH)]
    bit_width: u32,

    /// Seed for a reproducible data set
    #[arg(long)]
    seed: Option<u64>,

    /// Directory receiving coordinates.json and encodedCoordinates.json
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Encode and decode with rayon
    #[arg(long)]
    parallel: bool,

    /// Remove both JSON files when done
    #[arg(long)]
    cleanup: bool,

    /// Write the full report as JSON to this path
    #[arg(long = "report-json")]
    report_json: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<&Cli> for BenchConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            count: cli.count,
            upper_bound: cli.upper_bound,
            bit_width: cli.bit_width,
            seed: cli.seed,
            out_dir: cli.out_dir.clone(),
            parallel: cli.parallel,
            cleanup: cli.cleanup,
        }
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let report = run(&BenchConfig::from(&cli))?;
    println!("{report}");

    if let Some(path) = &cli.report_json {
        let json = report.to_json_pretty().context("serializing report")?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

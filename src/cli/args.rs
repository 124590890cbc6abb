use clap::Parser;
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_ACTIVITY_DAYS;

/// One-shot filter: Searvey IOC station export in, CERA STOFS station list out.
#[derive(Parser)]
#[command(name = "stofs-processor")]
#[command(about = "Filter Searvey IOC sea-level station exports for CERA STOFS")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Input Searvey IOC station CSV export")]
    pub input_file: PathBuf,

    #[arg(
        short,
        long,
        help = "Output CSV file path [default: cera-searvey-ioc-active-{YYMMDD}.csv]"
    )]
    pub output_file: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = DEFAULT_ACTIVITY_DAYS,
        help = "Days since the last observation for a station to count as active"
    )]
    pub activity_days: i64,

    #[arg(long, help = "Western bounding-box corner")]
    pub lon_min: Option<f64>,

    #[arg(long, help = "Eastern bounding-box corner")]
    pub lon_max: Option<f64>,

    #[arg(long, help = "Southern bounding-box corner")]
    pub lat_min: Option<f64>,

    #[arg(long, help = "Northern bounding-box corner")]
    pub lat_max: Option<f64>,

    #[arg(
        long,
        help = "Validate bounding-box corners against the unsigned 0..360 longitude convention"
    )]
    pub asymmetric: bool,

    #[arg(long, help = "Also write the unfiltered station dump alongside the output")]
    pub dump_all: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}

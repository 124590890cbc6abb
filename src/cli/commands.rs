use tracing::info;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::models::StofsStation;
use crate::processors::{ActivityFilter, RegionFilter};
use crate::readers::StationReader;
use crate::utils::filename::{generate_default_csv_filename, generate_default_dump_filename};
use crate::utils::progress::ProgressReporter;
use crate::utils::region::RegionOptions;
use crate::writers::CsvWriter;

pub fn run(cli: Cli) -> Result<()> {
    println!("Filtering Searvey station data...");
    println!("Input file: {}", cli.input_file.display());

    let progress = ProgressReporter::new_spinner("Reading station export...", false);

    let reader = StationReader::new();
    let stations = reader.read_stations(&cli.input_file)?;
    progress.set_message(&format!("Filtering {} stations...", stations.len()));

    let writer = CsvWriter::new();

    if cli.dump_all {
        let dump_file = generate_default_dump_filename();
        writer.write_station_dump(&stations, &dump_file)?;
        println!(
            "Wrote {} stations (unfiltered) to {}",
            stations.len(),
            dump_file.display()
        );
    }

    let activity_filter = ActivityFilter::new(cli.activity_days);
    let active = activity_filter.filter(stations);
    info!(
        "{} stations active within the last {} days",
        active.len(),
        cli.activity_days
    );

    let region_options = RegionOptions {
        region: None,
        lon_min: cli.lon_min,
        lon_max: cli.lon_max,
        lat_min: cli.lat_min,
        lat_max: cli.lat_max,
        symmetric: !cli.asymmetric,
    };
    let active = match RegionFilter::from_options(region_options)? {
        Some(region_filter) => {
            let kept = region_filter.filter(active);
            info!("{} active stations inside the requested region", kept.len());
            kept
        }
        None => active,
    };

    let rows: Vec<StofsStation> = active.iter().map(StofsStation::from).collect();
    progress.finish_with_message(&format!("{} stations kept", rows.len()));

    let output_file = cli
        .output_file
        .unwrap_or_else(generate_default_csv_filename);
    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    writer.write_stofs_stations(&rows, &output_file)?;
    println!("Wrote {} stations to {}", rows.len(), output_file.display());

    Ok(())
}

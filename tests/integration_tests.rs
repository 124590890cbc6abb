use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use stofs_processor::models::StofsStation;
use stofs_processor::processors::{ActivityFilter, RegionFilter};
use stofs_processor::readers::StationReader;
use stofs_processor::utils::region::RegionOptions;
use stofs_processor::writers::CsvWriter;

const HEADER: &str =
    ",provider,provider_id,country,location,lon,lat,is_active,start_date,last_observation,geometry";

fn write_export() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "{}", HEADER).unwrap();
    // recently reporting
    writeln!(
        file,
        "0,ioc,abas,Japan,Abashiri,144.29,44.02,True,2010-01-01 00:00:00,2022-05-02 12:00:00+00:00,POINT (144.29 44.02)"
    )
    .unwrap();
    // long silent, flag stale
    writeln!(
        file,
        "1,ioc,acnt,Chile,Ancud,-73.83,-41.87,True,2015-06-01 00:00:00,2021-11-20 00:00:00+00:00,POINT (-73.83 -41.87)"
    )
    .unwrap();
    // no observation timestamp, inactive per flag
    writeln!(
        file,
        "2,ioc,dead,Chile,Valparaiso,-71.63,-33.03,False,2012-01-01 00:00:00,,POINT (-71.63 -33.03)"
    )
    .unwrap();
    file
}

fn reference_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 5, 9, 0, 0, 0).unwrap()
}

#[test]
fn test_filter_pipeline_end_to_end() {
    let export = write_export();
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("cera-searvey-ioc-active.csv");

    let stations = StationReader::new()
        .read_stations(export.path())
        .expect("read failed");
    assert_eq!(stations.len(), 3);

    let active = ActivityFilter::new(7)
        .with_reference_time(reference_time())
        .filter(stations);
    assert_eq!(active.len(), 1);

    let rows: Vec<StofsStation> = active.iter().map(StofsStation::from).collect();
    CsvWriter::new()
        .write_stofs_stations(&rows, &output_path)
        .expect("write failed");

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        written,
        "stationid,stationname,lon,lat\nSTOFS_abas,Abashiri (Japan),144.29,44.02\n"
    );
}

#[test]
fn test_filter_pipeline_with_region() {
    let export = write_export();

    let stations = StationReader::new()
        .read_stations(export.path())
        .expect("read failed");

    // Chile only; skip the activity filter to keep both Chilean stations
    let region_filter = RegionFilter::from_options(
        RegionOptions::new()
            .with_lon_min(-80.0)
            .with_lon_max(-60.0)
            .with_lat_min(-60.0)
            .with_lat_max(-20.0),
    )
    .expect("region build failed")
    .expect("expected a region");

    let kept = region_filter.filter(stations);
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|s| s.country == "Chile"));
}

#[test]
fn test_station_dump_roundtrip() {
    let export = write_export();
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dump_path = temp_dir.path().join("cera-searvey-ioc-all.csv");

    let stations = StationReader::new()
        .read_stations(export.path())
        .expect("read failed");

    CsvWriter::new()
        .write_station_dump(&stations, &dump_path)
        .expect("dump failed");

    let reread = StationReader::new()
        .read_stations(&dump_path)
        .expect("reread failed");
    assert_eq!(reread.len(), stations.len());
    assert_eq!(reread[0].provider_id, stations[0].provider_id);
    assert_eq!(reread[0].last_observation, stations[0].last_observation);
}

use encoding_rs::WINDOWS_1252;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::{IocStation, StofsStation};

/// Writes station CSVs in the encoding the downstream CERA loader expects
/// (latin-1, header row included).
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the filtered CERA station list (stationid, stationname, lon, lat)
    pub fn write_stofs_stations(&self, stations: &[StofsStation], path: &Path) -> Result<()> {
        self.write_records(stations, path)
    }

    /// Write the unfiltered station dump with the full Searvey columns
    pub fn write_station_dump(&self, stations: &[IocStation], path: &Path) -> Result<()> {
        self.write_records(stations, path)
    }

    fn write_records<T: Serialize>(&self, records: &[T], path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(Vec::new());
        for record in records {
            writer.serialize(record)?;
        }
        let buffer = writer
            .into_inner()
            .map_err(|e| ProcessingError::InvalidFormat(format!("CSV buffer error: {}", e)))?;
        let text = String::from_utf8(buffer)
            .map_err(|e| ProcessingError::InvalidFormat(format!("CSV encoding error: {}", e)))?;

        let (encoded, _, _) = WINDOWS_1252.encode(&text);
        std::fs::write(path, &encoded)?;

        debug!("Wrote {} records to {}", records.len(), path.display());
        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

use csv::StringRecord;
use encoding_rs::WINDOWS_1252;
use std::path::Path;
use tracing::{debug, warn};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::IocStation;
use crate::utils::constants::{
    COL_COUNTRY, COL_IS_ACTIVE, COL_LAST_OBSERVATION, COL_LAT, COL_LOCATION, COL_LON,
    COL_PROVIDER, COL_PROVIDER_ID, COL_START_DATE,
};

/// Reads a Searvey IOC station export.
///
/// The export is a pandas CSV dump: a leading unnamed index column, the
/// station columns, and a trailing `geometry` column. Columns are located by
/// header name so the reader tolerates reordering and extra columns. Files
/// are decoded as latin-1, which is what the upstream job writes.
pub struct StationReader {
    skip_malformed: bool,
}

impl StationReader {
    pub fn new() -> Self {
        Self {
            skip_malformed: true,
        }
    }

    /// With `skip_malformed` disabled, the first bad row fails the read.
    pub fn with_skip_malformed(skip_malformed: bool) -> Self {
        Self { skip_malformed }
    }

    /// Read all station rows from a Searvey CSV export
    pub fn read_stations(&self, path: &Path) -> Result<Vec<IocStation>> {
        let bytes = std::fs::read(path)?;
        let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
        if had_errors {
            warn!("{}: some bytes could not be decoded as latin-1", path.display());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(decoded.as_bytes());

        let headers = reader.headers()?.clone();
        let columns = ColumnIndex::from_headers(&headers)?;

        let mut stations = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            match self.parse_record(&record, &columns) {
                Ok(station) => stations.push(station),
                Err(e) if self.skip_malformed => {
                    // +2: one for the header line, one for 1-based numbering
                    warn!("Skipping row {}: {}", row + 2, e);
                }
                Err(e) => return Err(e),
            }
        }

        debug!("Read {} stations from {}", stations.len(), path.display());
        Ok(stations)
    }

    fn parse_record(&self, record: &StringRecord, columns: &ColumnIndex) -> Result<IocStation> {
        let field = |index: usize| record.get(index).unwrap_or("").trim();
        let optional = |index: Option<usize>| {
            index
                .map(|i| field(i))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let lon = field(columns.lon).parse::<f64>().map_err(|_| {
            ProcessingError::InvalidCoordinate(format!(
                "Invalid longitude value: '{}'",
                field(columns.lon)
            ))
        })?;
        let lat = field(columns.lat).parse::<f64>().map_err(|_| {
            ProcessingError::InvalidCoordinate(format!(
                "Invalid latitude value: '{}'",
                field(columns.lat)
            ))
        })?;

        let station = IocStation::new(
            optional(columns.provider).unwrap_or_default(),
            field(columns.provider_id).to_string(),
            field(columns.country).to_string(),
            field(columns.location).to_string(),
            lon,
            lat,
            parse_bool(field(columns.is_active))?,
            optional(columns.start_date),
            optional(columns.last_observation),
        );
        station.validate()?;

        Ok(station)
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Positions of the Searvey columns within the header record.
struct ColumnIndex {
    provider: Option<usize>,
    provider_id: usize,
    country: usize,
    location: usize,
    lon: usize,
    lat: usize,
    is_active: usize,
    start_date: Option<usize>,
    last_observation: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|header| header.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                ProcessingError::MissingData(format!("column '{}' not found in header", name))
            })
        };

        Ok(Self {
            provider: find(COL_PROVIDER),
            provider_id: require(COL_PROVIDER_ID)?,
            country: require(COL_COUNTRY)?,
            location: require(COL_LOCATION)?,
            lon: require(COL_LON)?,
            lat: require(COL_LAT)?,
            is_active: require(COL_IS_ACTIVE)?,
            start_date: find(COL_START_DATE),
            last_observation: find(COL_LAST_OBSERVATION),
        })
    }
}

/// Pandas writes booleans as "True"/"False"; accept 0/1 spellings too.
fn parse_bool(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(ProcessingError::InvalidFormat(format!(
            "Invalid boolean value: '{}'",
            other
        ))),
    }
}

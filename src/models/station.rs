use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::constants::STATION_ID_PREFIX;

/// One row of a Searvey IOC station export.
///
/// `start_date` and `last_observation` are kept as the export's raw text and
/// normalized on demand; empty cells become `None`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IocStation {
    pub provider: String,

    #[validate(length(min = 1))]
    pub provider_id: String,

    pub country: String,

    pub location: String,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    pub is_active: bool,

    pub start_date: Option<String>,

    pub last_observation: Option<String>,
}

impl IocStation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        provider: String,
        provider_id: String,
        country: String,
        location: String,
        lon: f64,
        lat: f64,
        is_active: bool,
        start_date: Option<String>,
        last_observation: Option<String>,
    ) -> Self {
        Self {
            provider,
            provider_id,
            country,
            location,
            lon,
            lat,
            is_active,
            start_date,
            last_observation,
        }
    }

    /// CERA station identifier, e.g. "STOFS_abas"
    pub fn station_id(&self) -> String {
        format!("{}{}", STATION_ID_PREFIX, self.provider_id)
    }

    /// CERA display name combining location and country, e.g. "Abashiri (Japan)"
    pub fn station_name(&self) -> String {
        format!("{} ({})", self.location, self.country)
    }
}

/// Output row of the CERA STOFS station list.
///
/// Field order matches the column order the downstream visualization expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StofsStation {
    pub stationid: String,
    pub stationname: String,
    pub lon: f64,
    pub lat: f64,
}

impl From<&IocStation> for StofsStation {
    fn from(station: &IocStation) -> Self {
        Self {
            stationid: station.station_id(),
            stationname: station.station_name(),
            lon: station.lon,
            lat: station.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abashiri() -> IocStation {
        IocStation::new(
            "ioc".to_string(),
            "abas".to_string(),
            "Japan".to_string(),
            "Abashiri".to_string(),
            144.29,
            44.02,
            true,
            Some("2010-01-01 00:00:00".to_string()),
            Some("2022-05-02 12:00:00+00:00".to_string()),
        )
    }

    #[test]
    fn test_derived_cera_fields() {
        let station = abashiri();
        assert_eq!(station.station_id(), "STOFS_abas");
        assert_eq!(station.station_name(), "Abashiri (Japan)");
    }

    #[test]
    fn test_station_validation() {
        assert!(abashiri().validate().is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        let mut station = abashiri();
        station.lat = 91.0;
        assert!(station.validate().is_err());

        let mut station = abashiri();
        station.lon = 200.0;
        assert!(station.validate().is_err());
    }

    #[test]
    fn test_stofs_station_from_ioc() {
        let row = StofsStation::from(&abashiri());
        assert_eq!(row.stationid, "STOFS_abas");
        assert_eq!(row.stationname, "Abashiri (Japan)");
        assert!((row.lon - 144.29).abs() < f64::EPSILON);
        assert!((row.lat - 44.02).abs() < f64::EPSILON);
    }
}

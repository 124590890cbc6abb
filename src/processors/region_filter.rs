use geo::{point, Contains, Polygon};
use tracing::debug;

use crate::error::Result;
use crate::models::IocStation;
use crate::utils::longitude::lon180_to_lon360;
use crate::utils::region::{get_region, RegionOptions};

/// Filters stations to those inside a query region.
///
/// Station metadata carries signed longitudes. When the region was built
/// under the asymmetric convention, station longitudes are mapped through
/// [`lon180_to_lon360`] before the containment test.
pub struct RegionFilter {
    region: Polygon<f64>,
    symmetric: bool,
}

impl RegionFilter {
    /// Build a filter from region options; `Ok(None)` means no region was
    /// requested and no filtering should happen.
    pub fn from_options(options: RegionOptions) -> Result<Option<Self>> {
        let symmetric = options.symmetric;
        Ok(get_region(options)?.map(|region| Self { region, symmetric }))
    }

    pub fn contains(&self, station: &IocStation) -> bool {
        let lon = if self.symmetric {
            station.lon
        } else {
            lon180_to_lon360(station.lon)
        };
        self.region.contains(&point! { x: lon, y: station.lat })
    }

    pub fn filter(&self, stations: Vec<IocStation>) -> Vec<IocStation> {
        let before = stations.len();
        let kept: Vec<IocStation> = stations
            .into_iter()
            .filter(|station| self.contains(station))
            .collect();
        debug!("Region filter kept {} of {} stations", kept.len(), before);
        kept
    }
}

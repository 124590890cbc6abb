use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::models::IocStation;
use crate::utils::constants::DEFAULT_ACTIVITY_DAYS;
use crate::utils::timestamp::{resolve_timestamp, DEFAULT_TIMEZONE};

/// Filters stations down to those that reported recently.
///
/// A station counts as active when its `last_observation` falls within the
/// threshold of the reference time. Rows without a usable `last_observation`
/// fall back to the export's `is_active` flag, which the upstream job
/// computed against the same window.
pub struct ActivityFilter {
    threshold: Duration,
    reference_time: DateTime<Utc>,
}

impl ActivityFilter {
    pub fn new(threshold_days: i64) -> Self {
        Self {
            threshold: Duration::days(threshold_days),
            reference_time: Utc::now(),
        }
    }

    /// Pin the reference time instead of using the current time
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = reference_time;
        self
    }

    pub fn is_active(&self, station: &IocStation) -> bool {
        match station.last_observation.as_deref() {
            Some(raw) => match resolve_timestamp(raw, DEFAULT_TIMEZONE, true) {
                Ok(resolved) => self.reference_time - resolved.to_utc() <= self.threshold,
                Err(e) => {
                    debug!(
                        "Station {}: unusable last_observation ({}), falling back to is_active flag",
                        station.provider_id, e
                    );
                    station.is_active
                }
            },
            None => station.is_active,
        }
    }

    pub fn filter(&self, stations: Vec<IocStation>) -> Vec<IocStation> {
        stations
            .into_iter()
            .filter(|station| self.is_active(station))
            .collect()
    }
}

impl Default for ActivityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_DAYS)
    }
}

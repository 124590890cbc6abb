//! Construction of the rectangular query region used to subset stations.
//!
//! Callers either hand over a ready-made polygon or give bounding-box
//! corners; the two forms are mutually exclusive. Corner validation depends
//! on the longitude convention: symmetric means signed degrees in
//! [-180, 180], asymmetric means unsigned degrees in [0, 360].

use geo::{coord, Polygon, Rect};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    LAT_MAX, LAT_MIN, LON_MAX_SIGNED, LON_MAX_UNSIGNED, LON_MIN_SIGNED, LON_MIN_UNSIGNED,
};

/// Inputs to [`get_region`]. Defaults to no region, no corners, and the
/// symmetric (signed) longitude convention.
#[derive(Debug, Clone)]
pub struct RegionOptions {
    pub region: Option<Polygon<f64>>,
    pub lon_min: Option<f64>,
    pub lon_max: Option<f64>,
    pub lat_min: Option<f64>,
    pub lat_max: Option<f64>,
    pub symmetric: bool,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self {
            region: None,
            lon_min: None,
            lon_max: None,
            lat_min: None,
            lat_max: None,
            symmetric: true,
        }
    }
}

impl RegionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: Polygon<f64>) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_lon_min(mut self, lon_min: f64) -> Self {
        self.lon_min = Some(lon_min);
        self
    }

    pub fn with_lon_max(mut self, lon_max: f64) -> Self {
        self.lon_max = Some(lon_max);
        self
    }

    pub fn with_lat_min(mut self, lat_min: f64) -> Self {
        self.lat_min = Some(lat_min);
        self
    }

    pub fn with_lat_max(mut self, lat_max: f64) -> Self {
        self.lat_max = Some(lat_max);
        self
    }

    pub fn with_symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    fn has_corners(&self) -> bool {
        self.lon_min.is_some()
            || self.lon_max.is_some()
            || self.lat_min.is_some()
            || self.lat_max.is_some()
    }
}

/// Bounding box under the signed longitude convention.
#[derive(Debug, Validate)]
struct SymmetricBbox {
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be greater than or equal to -180 and less than or equal to 180"
    ))]
    lon_min: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be greater than or equal to -180 and less than or equal to 180"
    ))]
    lon_max: f64,

    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "latitude must be greater than or equal to -90 and less than or equal to 90"
    ))]
    lat_min: f64,

    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "latitude must be greater than or equal to -90 and less than or equal to 90"
    ))]
    lat_max: f64,
}

/// Bounding box under the unsigned longitude convention.
#[derive(Debug, Validate)]
struct AsymmetricBbox {
    #[validate(range(
        min = 0.0,
        max = 360.0,
        message = "longitude must be greater than or equal to 0 and less than or equal to 360"
    ))]
    lon_min: f64,

    #[validate(range(
        min = 0.0,
        max = 360.0,
        message = "longitude must be greater than or equal to 0 and less than or equal to 360"
    ))]
    lon_max: f64,

    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "latitude must be greater than or equal to -90 and less than or equal to 90"
    ))]
    lat_min: f64,

    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "latitude must be greater than or equal to -90 and less than or equal to 90"
    ))]
    lat_max: f64,
}

/// Build the query region from a polygon or bounding-box corners.
///
/// Supplying both forms is an error; supplying neither yields `Ok(None)`.
/// Omitted corners default to the selected convention's full range.
///
/// # Examples
/// ```
/// use stofs_processor::utils::{get_region, RegionOptions};
///
/// let region = get_region(RegionOptions::new().with_lon_max(20.0).with_lat_min(30.0)).unwrap();
/// assert!(region.is_some());
///
/// assert!(get_region(RegionOptions::new()).unwrap().is_none());
/// ```
pub fn get_region(options: RegionOptions) -> Result<Option<Polygon<f64>>> {
    if options.region.is_some() && options.has_corners() {
        return Err(ProcessingError::ConflictingRegion);
    }
    if let Some(region) = options.region {
        return Ok(Some(region));
    }
    if !options.has_corners() {
        return Ok(None);
    }

    let (lon_min, lat_min, lon_max, lat_max) = if options.symmetric {
        let bbox = SymmetricBbox {
            lon_min: options.lon_min.unwrap_or(LON_MIN_SIGNED),
            lon_max: options.lon_max.unwrap_or(LON_MAX_SIGNED),
            lat_min: options.lat_min.unwrap_or(LAT_MIN),
            lat_max: options.lat_max.unwrap_or(LAT_MAX),
        };
        bbox.validate()?;
        (bbox.lon_min, bbox.lat_min, bbox.lon_max, bbox.lat_max)
    } else {
        let bbox = AsymmetricBbox {
            lon_min: options.lon_min.unwrap_or(LON_MIN_UNSIGNED),
            lon_max: options.lon_max.unwrap_or(LON_MAX_UNSIGNED),
            lat_min: options.lat_min.unwrap_or(LAT_MIN),
            lat_max: options.lat_max.unwrap_or(LAT_MAX),
        };
        bbox.validate()?;
        (bbox.lon_min, bbox.lat_min, bbox.lon_max, bbox.lat_max)
    };

    let rect = Rect::new(
        coord! { x: lon_min, y: lat_min },
        coord! { x: lon_max, y: lat_max },
    );
    Ok(Some(rect.to_polygon()))
}

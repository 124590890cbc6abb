/// Prefix applied to provider ids when deriving CERA station identifiers
pub const STATION_ID_PREFIX: &str = "STOFS_";

/// Activity window the CERA filter job applies by default
pub const DEFAULT_ACTIVITY_DAYS: i64 = 7;

/// Longitude bounds, signed (symmetric) convention
pub const LON_MIN_SIGNED: f64 = -180.0;
pub const LON_MAX_SIGNED: f64 = 180.0;

/// Longitude bounds, unsigned (asymmetric) convention
pub const LON_MIN_UNSIGNED: f64 = 0.0;
pub const LON_MAX_UNSIGNED: f64 = 360.0;

/// Latitude bounds
pub const LAT_MIN: f64 = -90.0;
pub const LAT_MAX: f64 = 90.0;

/// Column names in the Searvey IOC export
pub const COL_PROVIDER: &str = "provider";
pub const COL_PROVIDER_ID: &str = "provider_id";
pub const COL_COUNTRY: &str = "country";
pub const COL_LOCATION: &str = "location";
pub const COL_LON: &str = "lon";
pub const COL_LAT: &str = "lat";
pub const COL_IS_ACTIVE: &str = "is_active";
pub const COL_START_DATE: &str = "start_date";
pub const COL_LAST_OBSERVATION: &str = "last_observation";

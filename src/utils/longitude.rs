//! Conversions between the two longitude conventions used by station
//! providers: signed degrees in [-180, 180] and unsigned degrees in [0, 360).
//!
//! IOC metadata uses the signed convention while some upstream services
//! (e.g. ERDDAP-style gridded queries) expect the unsigned one.

/// Convert a longitude from the signed convention [-180, 180] to the
/// unsigned convention [0, 360).
///
/// Inputs are adjusted by a single 360-degree step, so values that are
/// already wrapped more than once (e.g. -400) are not fully normalized.
///
/// # Examples
/// ```
/// use stofs_processor::utils::lon180_to_lon360;
///
/// assert_eq!(lon180_to_lon360(-90.0), 270.0);
/// assert_eq!(lon180_to_lon360(-180.0), 180.0);
/// assert_eq!(lon180_to_lon360(180.0), 180.0);
/// ```
pub fn lon180_to_lon360(lon: f64) -> f64 {
    if lon < 0.0 {
        lon + 360.0
    } else {
        lon
    }
}

/// Convert a longitude from the unsigned convention [0, 360) to the
/// signed convention [-180, 180).
///
/// The 180th meridian is representable in both conventions; this direction
/// canonically picks -180, so `lon360_to_lon180(180.0) == -180.0`.
///
/// # Examples
/// ```
/// use stofs_processor::utils::lon360_to_lon180;
///
/// assert_eq!(lon360_to_lon180(270.0), -90.0);
/// assert_eq!(lon360_to_lon180(180.0), -180.0);
/// assert_eq!(lon360_to_lon180(360.0), 0.0);
/// ```
pub fn lon360_to_lon180(lon: f64) -> f64 {
    if lon >= 180.0 {
        lon - 360.0
    } else {
        lon
    }
}

/// Element-wise [`lon180_to_lon360`] over a slice of longitudes.
pub fn lon180_to_lon360_all(lons: &[f64]) -> Vec<f64> {
    lons.iter().copied().map(lon180_to_lon360).collect()
}

/// Element-wise [`lon360_to_lon180`] over a slice of longitudes.
pub fn lon360_to_lon180_all(lons: &[f64]) -> Vec<f64> {
    lons.iter().copied().map(lon360_to_lon180).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_lon180_to_lon360_scalars() {
        let cases = [
            (-180.0, 180.0),
            (-90.0, 270.0),
            (0.0, 0.0),
            (90.0, 90.0),
            (180.0, 180.0),
        ];
        for (lon180, expected) in cases {
            assert_eq!(lon180_to_lon360(lon180), expected);
        }
    }

    #[test]
    fn test_lon360_to_lon180_scalars() {
        let cases = [
            (0.0, 0.0),
            (90.0, 90.0),
            (180.0, -180.0),
            (270.0, -90.0),
            (360.0, 0.0),
        ];
        for (lon360, expected) in cases {
            assert_eq!(lon360_to_lon180(lon360), expected);
        }
    }

    #[test]
    fn test_lon180_to_lon360_slices() {
        assert_eq!(lon180_to_lon360_all(&[180.0]), vec![180.0]);
        assert_eq!(
            lon180_to_lon360_all(&[-180.0, -90.0, 0.0, 90.0, 180.0]),
            vec![180.0, 270.0, 0.0, 90.0, 180.0]
        );
    }

    #[test]
    fn test_lon360_to_lon180_slices() {
        assert_eq!(lon360_to_lon180_all(&[180.0]), vec![-180.0]);
        assert_eq!(
            lon360_to_lon180_all(&[0.0, 90.0, 181.0, 270.0, 359.0]),
            vec![0.0, 90.0, -179.0, -90.0, -1.0]
        );
    }

    #[test]
    fn test_lon180_roundtrip() {
        for lon180 in [-162.3, -32.3, -0.02, 0.01, 45.23, 163.2] {
            let roundtripped = lon360_to_lon180(lon180_to_lon360(lon180));
            assert!(
                (roundtripped - lon180).abs() < TOLERANCE,
                "{} roundtripped to {}",
                lon180,
                roundtripped
            );
        }
    }

    #[test]
    fn test_lon360_roundtrip() {
        for lon360 in [0.01, 45.23, 163.2, 181.1, 273.2, 332.1] {
            let roundtripped = lon180_to_lon360(lon360_to_lon180(lon360));
            assert!(
                (roundtripped - lon360).abs() < TOLERANCE,
                "{} roundtripped to {}",
                lon360,
                roundtripped
            );
        }
    }
}

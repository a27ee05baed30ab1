//! Display formatting for the numeric position model.

use crate::constants::Degree;

/// Compass sector labels, one per 45° step clockwise from north.
const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Render an azimuth as rounded degrees plus its nearest compass sector,
/// e.g. `"137° SE"`. Sectors wrap: anything within 22.5° of north on
/// either side labels as `N`.
pub fn format_azimuth(azimuth: Degree) -> String {
    let sector = ((azimuth / 45.0).round() as usize) % 8;
    format!("{}° {}", azimuth.round() as i64, COMPASS_POINTS[sector])
}

/// Render an altitude as rounded degrees, e.g. `"-12°"`.
pub fn format_altitude(altitude: Degree) -> String {
    format!("{}°", altitude.round() as i64)
}

#[cfg(test)]
mod format_test {
    use super::*;

    #[test]
    fn test_cardinal_points() {
        assert_eq!(format_azimuth(0.0), "0° N");
        assert_eq!(format_azimuth(90.0), "90° E");
        assert_eq!(format_azimuth(180.0), "180° S");
        assert_eq!(format_azimuth(270.0), "270° W");
    }

    #[test]
    fn test_intercardinal_points() {
        assert_eq!(format_azimuth(45.0), "45° NE");
        assert_eq!(format_azimuth(135.0), "135° SE");
        assert_eq!(format_azimuth(225.0), "225° SW");
        assert_eq!(format_azimuth(315.0), "315° NW");
    }

    #[test]
    fn test_sector_wraps_back_to_north() {
        assert_eq!(format_azimuth(359.0), "359° N");
        assert_eq!(format_azimuth(340.2), "340° N");
    }

    #[test]
    fn test_rounding_within_sector() {
        assert_eq!(format_azimuth(137.4), "137° SE");
        assert_eq!(format_azimuth(112.5), "113° SE");
    }

    #[test]
    fn test_format_altitude() {
        assert_eq!(format_altitude(45.7), "46°");
        assert_eq!(format_altitude(-3.2), "-3°");
        assert_eq!(format_altitude(0.0), "0°");
    }
}

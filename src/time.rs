use chrono::{DateTime, TimeZone};
use hifitime::Epoch;

use crate::constants::{JulianDay, J2000};

/// Julian date of a civil instant.
///
/// Argument
/// --------
/// * `instant`: any chrono instant; its absolute (UTC) timestamp is used,
///   so the timezone the caller carries it in does not matter.
///
/// Return
/// ------
/// * the continuous Julian day count, noon-anchored (J2000.0 is 2451545.0)
pub fn julian_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> JulianDay {
    let unix_seconds =
        instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    Epoch::from_unix_seconds(unix_seconds).to_jde_utc_days()
}

/// Days elapsed since the J2000.0 epoch, the time argument of every
/// ephemeris formula in this crate. Negative before the epoch.
pub fn days_since_j2000<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    julian_date(instant) - J2000
}

/// Greenwich Mean Sidereal Time in hours for a given offset from J2000.0.
///
/// This is the linear low-precision expression: GMST at the epoch plus the
/// sidereal turn rate times elapsed days, wrapped to one day.
///
/// # Arguments
/// * `days` - days since J2000.0 (fractional, may be negative)
///
/// # Returns
/// * GMST in hours, normalized to [0, 24).
pub fn gmst_hours(days: f64) -> f64 {
    // GMST at J2000.0 (hours) and sidereal hours elapsed per solar day
    const GMST_AT_EPOCH: f64 = 18.697374558;
    const GMST_RATE: f64 = 24.06570982441908;

    (GMST_AT_EPOCH + GMST_RATE * days).rem_euclid(24.0)
}

#[cfg(test)]
mod time_test {
    use approx::assert_relative_eq;
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_julian_date_at_j2000() {
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_relative_eq!(julian_date(&epoch), 2451545.0, epsilon = 1e-8);
    }

    #[test]
    fn test_julian_date_known_values() {
        let t = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_relative_eq!(julian_date(&t), 2459215.5, epsilon = 1e-8);

        let t = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        assert_relative_eq!(julian_date(&t), 2460483.0, epsilon = 1e-8);
    }

    #[test]
    fn test_julian_date_ignores_carried_timezone() {
        let utc = Utc.with_ymd_and_hms(2024, 6, 21, 16, 0, 0).unwrap();
        let eastern = utc.with_timezone(&chrono::FixedOffset::west_opt(4 * 3600).unwrap());
        assert_eq!(julian_date(&utc), julian_date(&eastern));
    }

    #[test]
    fn test_days_since_j2000() {
        let t = Utc.with_ymd_and_hms(2000, 1, 2, 12, 0, 0).unwrap();
        assert_relative_eq!(days_since_j2000(&t), 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_gmst_at_epoch() {
        assert_eq!(gmst_hours(0.0), 18.697374558);
    }

    #[test]
    fn test_gmst_known_value() {
        let t = Utc.with_ymd_and_hms(2024, 6, 21, 16, 0, 0).unwrap();
        assert_relative_eq!(
            gmst_hours(days_since_j2000(&t)),
            10.02273684940883,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_gmst_stays_in_range() {
        for days in [-40000.0, -1.25, 0.0, 0.5, 365.25, 9131.0, 40000.0] {
            let gmst = gmst_hours(days);
            assert!((0.0..24.0).contains(&gmst), "gmst({days}) = {gmst}");
        }
    }
}

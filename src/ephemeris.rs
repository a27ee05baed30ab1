//! Low-precision apparent positions of catalog bodies.
//!
//! The solar and lunar models are truncated series in days since J2000.0:
//! mean elements as linear functions of time, one equation-of-center style
//! correction each, a fixed mean obliquity, and the standard spherical
//! transform from (hour angle, declination, latitude) to the horizon frame.
//! Planets are not integrated at all: they are drawn at fixed angular
//! offsets from the Sun (the catalog's offset table), a deliberate
//! product-level approximation, not a bug.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::bodies::{self, BodyCategory};
use crate::constants::{Degree, Radian, DEG_PER_HOUR, JULIAN_CENTURY, OBLIQUITY_DEG};
use crate::observers::Observer;
use crate::time::{days_since_j2000, gmst_hours};

/// Apparent horizontal-frame position of a body.
///
/// Azimuth is in degrees, normalized to [0, 360), with the 180° offset the
/// overlay rendering is calibrated against applied to the raw transform
/// output. Altitude is in degrees, negative below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPosition {
    pub azimuth: Degree,
    pub altitude: Degree,
}

/// Equatorial direction of a body, in radians.
struct Equatorial {
    right_ascension: Radian,
    declination: Radian,
}

/// Compute the apparent position of a catalog body.
///
/// Dispatches on the body's catalog category: the Sun and the Moon get
/// their own models, and everything else (catalog planets as well as ids
/// the catalog does not know) goes through the Sun-offset planet branch.
/// Unknown ids therefore degrade to the Sun's position (zero offset)
/// rather than failing; the function is total.
///
/// Arguments
/// ---------
/// * `body_id`: catalog id (`"sun"`, `"moon"`, `"venus"`, ...)
/// * `instant`: the moment to evaluate, any chrono timezone
/// * `observer`: geographic position of the viewer
///
/// Return
/// ------
/// * the [`SkyPosition`] of the body for that instant and observer
pub fn position_of<Tz: TimeZone>(
    body_id: &str,
    instant: &DateTime<Tz>,
    observer: &Observer,
) -> SkyPosition {
    match bodies::find(body_id).map(|body| body.category) {
        Some(BodyCategory::Sun) => sun_position(instant, observer),
        Some(BodyCategory::Moon) => moon_position(instant, observer),
        _ => planet_position(body_id, instant, observer),
    }
}

/// Apparent position of the Sun.
///
/// Mean longitude and mean anomaly are linear in days since J2000.0; the
/// equation of center is truncated to two sine terms, which keeps the
/// ecliptic longitude within a few hundredths of a degree of the full
/// series over the years this engine cares about.
pub fn sun_position<Tz: TimeZone>(instant: &DateTime<Tz>, observer: &Observer) -> SkyPosition {
    let days = days_since_j2000(instant);
    horizontal(sun_equatorial(days), days, observer)
}

/// Apparent position of the Moon.
///
/// Uses a one-term truncation of the lunar longitude and latitude series:
/// mean longitude, mean anomaly and argument of latitude linear in Julian
/// centuries, one correction sine each for longitude and ecliptic latitude.
/// Good to a few degrees, which is what the AR overlay needs.
pub fn moon_position<Tz: TimeZone>(instant: &DateTime<Tz>, observer: &Observer) -> SkyPosition {
    let days = days_since_j2000(instant);
    horizontal(moon_equatorial(days), days, observer)
}

/// Apparent position of a planet, as a fixed offset from the Sun.
///
/// Ids without a catalog offset (including unknown ids) get (0, 0) and so
/// coincide with the Sun. Altitude is clamped back into [-90, 90] after
/// the offset is applied.
pub fn planet_position<Tz: TimeZone>(
    body_id: &str,
    instant: &DateTime<Tz>,
    observer: &Observer,
) -> SkyPosition {
    let sun = sun_position(instant, observer);
    let (az_offset, alt_offset) = bodies::planet_offset(body_id);

    SkyPosition {
        azimuth: (sun.azimuth + az_offset).rem_euclid(360.0),
        altitude: (sun.altitude + alt_offset).clamp(-90.0, 90.0),
    }
}

/// Equatorial direction of the Sun for a given offset from J2000.0.
fn sun_equatorial(days: f64) -> Equatorial {
    // Mean longitude and mean anomaly, degrees
    let mean_longitude = (280.460 + 0.9856474 * days).rem_euclid(360.0);
    let mean_anomaly = (357.528 + 0.9856003 * days).rem_euclid(360.0).to_radians();

    // Equation of center, truncated to two terms
    let ecliptic_longitude = (mean_longitude
        + 1.915 * mean_anomaly.sin()
        + 0.020 * (2.0 * mean_anomaly).sin())
    .to_radians();

    let obliquity = OBLIQUITY_DEG.to_radians();

    Equatorial {
        right_ascension: (obliquity.cos() * ecliptic_longitude.sin())
            .atan2(ecliptic_longitude.cos()),
        declination: (obliquity.sin() * ecliptic_longitude.sin()).asin(),
    }
}

/// Equatorial direction of the Moon for a given offset from J2000.0.
fn moon_equatorial(days: f64) -> Equatorial {
    let centuries = days / JULIAN_CENTURY;

    // Mean longitude, mean anomaly and argument of latitude, degrees
    let mean_longitude = (218.3164477 + 481267.88123421 * centuries).rem_euclid(360.0);
    let mean_anomaly = (134.9633964 + 477198.8675055 * centuries)
        .rem_euclid(360.0)
        .to_radians();
    let latitude_argument = (93.2720950 + 483202.0175233 * centuries)
        .rem_euclid(360.0)
        .to_radians();

    // One correction term each for longitude and ecliptic latitude
    let ecliptic_longitude = (mean_longitude + 6.289 * mean_anomaly.sin()).to_radians();
    let ecliptic_latitude = (5.128 * latitude_argument.sin()).to_radians();

    let obliquity = OBLIQUITY_DEG.to_radians();

    Equatorial {
        right_ascension: (ecliptic_longitude.sin() * obliquity.cos()
            - ecliptic_latitude.tan() * obliquity.sin())
        .atan2(ecliptic_longitude.cos()),
        declination: (ecliptic_latitude.sin() * obliquity.cos()
            + ecliptic_latitude.cos() * obliquity.sin() * ecliptic_longitude.sin())
        .asin(),
    }
}

/// Convert an equatorial direction to the observer's horizon frame.
///
/// The hour angle comes from the local sidereal time (GMST plus the
/// observer's longitude) minus the right ascension. The azimuth keeps the
/// convention the consumers are calibrated against: 180° is added to the
/// raw atan2 result before normalizing to [0, 360).
fn horizontal(equatorial: Equatorial, days: f64, observer: &Observer) -> SkyPosition {
    let local_sidereal_deg = gmst_hours(days) * DEG_PER_HOUR + observer.longitude;
    let hour_angle =
        (local_sidereal_deg - equatorial.right_ascension.to_degrees()).to_radians();

    let latitude = observer.latitude.to_radians();
    let declination = equatorial.declination;

    let altitude = (latitude.sin() * declination.sin()
        + latitude.cos() * declination.cos() * hour_angle.cos())
    .asin();

    let azimuth = (-hour_angle.sin())
        .atan2(declination.tan() * latitude.cos() - latitude.sin() * hour_angle.cos());

    SkyPosition {
        azimuth: (azimuth.to_degrees() + 180.0).rem_euclid(360.0),
        altitude: altitude.to_degrees(),
    }
}

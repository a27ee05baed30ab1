use serde::{Deserialize, Serialize};

use crate::constants::Degree;
use crate::skypath_errors::SkypathError;

/// Geographic position of the person looking at the sky.
///
/// Latitude and longitude are in degrees, north and east positive. The
/// optional name is display metadata only; the ephemeris never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    pub latitude: Degree,
    pub longitude: Degree,
    pub name: Option<String>,
}

impl Observer {
    pub fn new(latitude: Degree, longitude: Degree, name: Option<String>) -> Observer {
        Observer {
            latitude,
            longitude,
            name,
        }
    }

    /// Range check for manually entered coordinates.
    ///
    /// The ephemeris itself accepts any finite values; this is the check
    /// the coordinate entry form applies before accepting user input.
    pub fn validate(&self) -> Result<(), SkypathError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SkypathError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SkypathError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

impl Default for Observer {
    /// The fallback observer used before any GPS fix or manual entry.
    fn default() -> Self {
        Observer::new(40.7128, -74.0060, Some("New York, NY".to_string()))
    }
}

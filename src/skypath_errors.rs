use thiserror::Error;

/// Errors of the input layer around the position engine.
///
/// The engine computations themselves are total: every (body, instant,
/// observer) triple yields a position. What can fail is interpreting user
/// input before it reaches the engine: a persisted range string that no
/// longer parses, or manually entered coordinates outside their domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkypathError {
    #[error("Unrecognized time range: {0} (expected day, week or month)")]
    UnrecognizedTimeRange(String),

    #[error("Latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),
}

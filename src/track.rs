//! Waypoint sampling of a body's path across a day, a week or a month.
//!
//! Each range anchors a window around a caller-supplied reference instant
//! and walks it at a fixed step, evaluating the ephemeris once per sample.
//! "Local" is whatever fixed offset the reference instant carries; the
//! sampler does no timezone lookups of its own.

use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::constants::Degree;
use crate::ephemeris::position_of;
use crate::observers::Observer;
use crate::skypath_errors::SkypathError;

/// The sampling window selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// The reference instant's calendar day: 12 samples, 2 h apart
    Day,
    /// 3 days either side of the reference: 7 samples, 24 h apart
    Week,
    /// The reference instant's calendar month: one sample per day
    Month,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = SkypathError;

    /// Parse the persisted lowercase selector strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            other => Err(SkypathError::UnrecognizedTimeRange(other.to_string())),
        }
    }
}

/// One sample along a generated path.
///
/// `id` is the 0-based ordinal within its sequence; sequences are emitted
/// in strictly increasing time order and are immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: usize,
    pub time: DateTime<FixedOffset>,
    pub azimuth: Degree,
    pub altitude: Degree,
    pub label: String,
}

/// Sample a body's path across the selected window.
///
/// Arguments
/// ---------
/// * `body_id`: catalog id, dispatched exactly like [`position_of`]
/// * `range`: which window to walk and at what step
/// * `observer`: geographic position of the viewer
/// * `reference`: the instant the window is anchored around; its fixed
///   offset defines local midnight and the local hour
///
/// Return
/// ------
/// * the waypoints in chronological order: 12 for [`TimeRange::Day`],
///   7 for [`TimeRange::Week`], 28–31 for [`TimeRange::Month`]
pub fn generate_waypoints(
    body_id: &str,
    range: TimeRange,
    observer: &Observer,
    reference: &DateTime<FixedOffset>,
) -> Vec<Waypoint> {
    let (anchor, count, step, label_format) = match range {
        // Local midnight, then every 2 hours across the 24-hour day
        TimeRange::Day => (start_of_day(reference), 12, Duration::hours(2), "%H:%M"),
        // 3 days back at the reference's hour, then daily
        TimeRange::Week => (
            start_of_hour(reference) - Duration::days(3),
            7,
            Duration::days(1),
            "%a %-d",
        ),
        // First of the month at the reference's hour, then daily
        TimeRange::Month => (
            start_of_hour(reference) - Duration::days(i64::from(reference.day()) - 1),
            days_in_month(reference.year(), reference.month()) as usize,
            Duration::days(1),
            "%-d %b",
        ),
    };

    (0..count)
        .map(|ordinal| {
            let time = anchor + step * ordinal as i32;
            let position = position_of(body_id, &time, observer);
            Waypoint {
                id: ordinal,
                time,
                azimuth: position.azimuth,
                altitude: position.altitude,
                label: time.format(label_format).to_string(),
            }
        })
        .collect()
}

/// Midnight of the instant's local calendar day, same offset.
fn start_of_day(t: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let time = t.time();
    *t - Duration::seconds(i64::from(time.num_seconds_from_midnight()))
        - Duration::nanoseconds(i64::from(time.nanosecond()))
}

/// The instant truncated to its local hour, same offset.
fn start_of_hour(t: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let time = t.time();
    *t - Duration::seconds(i64::from(time.minute() * 60 + time.second()))
        - Duration::nanoseconds(i64::from(time.nanosecond()))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        // February
        _ => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
    }
}

//! Apparent sky positions of the Sun, the Moon and the bright planets,
//! plus waypoint sampling of their paths over a day, a week or a month.
//!
//! Every operation is a pure function over (body, instant, observer);
//! there is no internal state and no I/O.

pub mod bodies;
pub mod constants;
pub mod ephemeris;
pub mod format;
pub mod observers;
pub mod skypath_errors;
pub mod time;
pub mod track;

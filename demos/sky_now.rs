//! Print where every catalog body currently stands over the default
//! observer, then today's sampled path of the Sun.
//!
//! ```bash
//! cargo run --example sky_now
//! ```

use chrono::Utc;
use itertools::Itertools;

use skypath::bodies::CATALOG;
use skypath::ephemeris::position_of;
use skypath::format::{format_altitude, format_azimuth};
use skypath::observers::Observer;
use skypath::track::{generate_waypoints, TimeRange};

fn main() {
    let observer = Observer::default();
    let now = Utc::now().fixed_offset();

    println!(
        "Sky over {} at {}",
        observer.name.as_deref().unwrap_or("unnamed observer"),
        now.format("%Y-%m-%d %H:%M UTC")
    );

    for body in &CATALOG {
        let position = position_of(body.id, &now, &observer);
        println!(
            "  {:<8} {:>8}  alt {:>5}",
            body.name,
            format_azimuth(position.azimuth),
            format_altitude(position.altitude)
        );
    }

    let path = generate_waypoints("sun", TimeRange::Day, &observer, &now);
    let arc = path
        .iter()
        .map(|w| format!("{} {}", w.label, format_altitude(w.altitude)))
        .join(" | ");
    println!("\nSun today: {arc}");
}

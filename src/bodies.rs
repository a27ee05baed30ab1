//! Static catalog of the celestial bodies the engine can track.
//!
//! The catalog is process-wide immutable data: a fixed table of the Sun,
//! the Moon and the five naked-eye planets, with the display metadata the
//! surrounding application renders (name, color, icon key). Lookup is by
//! string id; the table is small enough that a linear scan is the map.

use serde::{Deserialize, Serialize};

use crate::constants::Degree;

/// Category a body is dispatched on in the ephemeris layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyCategory {
    Sun,
    Moon,
    Planet,
    Star,
}

/// One immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CelestialBody {
    /// Unique string key, also the persisted selection value
    pub id: &'static str,
    /// Human-readable display name
    pub name: &'static str,
    pub category: BodyCategory,
    /// Display color as a hex string
    pub color: &'static str,
    /// Icon key used by the rendering layer
    pub symbol: &'static str,
}

/// The fixed body catalog, in display order. The first entry (the Sun) is
/// the default selection when no persisted id is available.
pub static CATALOG: [CelestialBody; 7] = [
    CelestialBody {
        id: "sun",
        name: "Sun",
        category: BodyCategory::Sun,
        color: "#F7B801",
        symbol: "sun",
    },
    CelestialBody {
        id: "moon",
        name: "Moon",
        category: BodyCategory::Moon,
        color: "#C0C0C0",
        symbol: "moon",
    },
    CelestialBody {
        id: "mercury",
        name: "Mercury",
        category: BodyCategory::Planet,
        color: "#B5B5B5",
        symbol: "circle",
    },
    CelestialBody {
        id: "venus",
        name: "Venus",
        category: BodyCategory::Planet,
        color: "#E6C35C",
        symbol: "circle",
    },
    CelestialBody {
        id: "mars",
        name: "Mars",
        category: BodyCategory::Planet,
        color: "#E55B3C",
        symbol: "circle",
    },
    CelestialBody {
        id: "jupiter",
        name: "Jupiter",
        category: BodyCategory::Planet,
        color: "#D4A574",
        symbol: "circle",
    },
    CelestialBody {
        id: "saturn",
        name: "Saturn",
        category: BodyCategory::Planet,
        color: "#C9B896",
        symbol: "circle",
    },
];

/// Look up a catalog entry by exact id.
pub fn find(id: &str) -> Option<&'static CelestialBody> {
    CATALOG.iter().find(|body| body.id == id)
}

/// The catalog entry used when no valid selection is available.
pub fn default_body() -> &'static CelestialBody {
    &CATALOG[0]
}

/// Case-insensitive substring search over body ids and display names.
///
/// An empty (or all-whitespace) query returns the whole catalog, matching
/// the behavior of the search screen this feeds.
pub fn search(query: &str) -> Vec<&'static CelestialBody> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return CATALOG.iter().collect();
    }
    CATALOG
        .iter()
        .filter(|body| {
            body.id.contains(query.as_str()) || body.name.to_lowercase().contains(query.as_str())
        })
        .collect()
}

/// Fixed (azimuth, altitude) offset applied to the Sun's position for the
/// planet branch of the ephemeris.
///
/// These are deliberate low-fidelity approximations, not orbital mechanics:
/// each planet is drawn at a constant angular offset from the Sun. Ids
/// without an entry (including unknown ids) get a zero offset.
pub(crate) fn planet_offset(id: &str) -> (Degree, Degree) {
    match id {
        "mercury" => (15.0, -5.0),
        "venus" => (25.0, 10.0),
        "mars" => (-30.0, 5.0),
        "jupiter" => (45.0, -10.0),
        "saturn" => (-60.0, -15.0),
        _ => (0.0, 0.0),
    }
}

#[cfg(test)]
mod bodies_test {
    use super::*;

    #[test]
    fn test_find_known_ids() {
        assert_eq!(find("sun").unwrap().name, "Sun");
        assert_eq!(find("saturn").unwrap().category, BodyCategory::Planet);
        assert!(find("pluto").is_none());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_default_body_is_sun() {
        assert_eq!(default_body().id, "sun");
    }

    #[test]
    fn test_search() {
        assert_eq!(search("").len(), CATALOG.len());
        assert_eq!(search("   ").len(), CATALOG.len());

        let hits = search("M");
        let ids: Vec<&str> = hits.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["moon", "mercury", "mars"]);

        assert_eq!(search("VEN")[0].id, "venus");
        assert!(search("nebula").is_empty());
    }

    #[test]
    fn test_planet_offsets() {
        assert_eq!(planet_offset("mercury"), (15.0, -5.0));
        assert_eq!(planet_offset("saturn"), (-60.0, -15.0));
        assert_eq!(planet_offset("vulcan"), (0.0, 0.0));
    }
}

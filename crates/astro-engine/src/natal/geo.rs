//! Birth place resolution
//!
//! City names map to coordinates through a small table: exact
//! (case-insensitive) match first, then substring containment in either
//! direction, then a fixed default.

use serde::{Deserialize, Serialize};

/// Where a coordinate pair came from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum CoordinateSource {
    /// Latitude/longitude given with the request
    Supplied,
    /// Resolved from the city table
    City(String),
    /// Nothing matched
    Default,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub source: CoordinateSource,
}

impl Coordinates {
    /// Latitude, unless the pair is only the fallback default
    pub fn known_latitude(&self) -> Option<f64> {
        match self.source {
            CoordinateSource::Default => None,
            _ => Some(self.latitude),
        }
    }
}

/// Fallback when no city matches: geographic centre of the contiguous US
pub const DEFAULT_COORDINATES: (f64, f64) = (39.8283, -98.5795);

const CITIES: &[(&str, f64, f64)] = &[
    ("new york", 40.7128, -74.0060),
    ("los angeles", 34.0522, -118.2437),
    ("chicago", 41.8781, -87.6298),
    ("san francisco", 37.7749, -122.4194),
    ("miami", 25.7617, -80.1918),
    ("toronto", 43.6532, -79.3832),
    ("mexico city", 19.4326, -99.1332),
    ("sao paulo", -23.5505, -46.6333),
    ("london", 51.5074, -0.1278),
    ("paris", 48.8566, 2.3522),
    ("berlin", 52.5200, 13.4050),
    ("moscow", 55.7558, 37.6173),
    ("cairo", 30.0444, 31.2357),
    ("lagos", 6.5244, 3.3792),
    ("dubai", 25.2048, 55.2708),
    ("mumbai", 19.0760, 72.8777),
    ("delhi", 28.7041, 77.1025),
    ("singapore", 1.3521, 103.8198),
    ("hong kong", 22.3193, 114.1694),
    ("shanghai", 31.2304, 121.4737),
    ("tokyo", 35.6762, 139.6503),
    ("sydney", -33.8688, 151.2093),
];

/// Look a city up in the table
pub fn city_coordinates(place: &str) -> Option<(&'static str, f64, f64)> {
    let needle = place.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    CITIES
        .iter()
        .find(|(name, _, _)| *name == needle)
        .or_else(|| {
            CITIES
                .iter()
                .find(|(name, _, _)| needle.contains(name) || name.contains(needle.as_str()))
        })
        .copied()
}

fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

/// Resolve birth coordinates; an in-range explicit lat/lng pair wins over the
/// place name
pub fn resolve_coordinates(
    place: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Coordinates {
    if let (Some(latitude), Some(longitude)) = (latitude, longitude) {
        if is_valid_coordinate(latitude, longitude) {
            return Coordinates {
                latitude,
                longitude,
                source: CoordinateSource::Supplied,
            };
        }
    }

    if let Some((name, latitude, longitude)) = place.and_then(city_coordinates) {
        return Coordinates {
            latitude,
            longitude,
            source: CoordinateSource::City(name.to_string()),
        };
    }

    tracing::debug!(?place, "birth place not in city table, using default coordinates");
    Coordinates {
        latitude: DEFAULT_COORDINATES.0,
        longitude: DEFAULT_COORDINATES.1,
        source: CoordinateSource::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let (name, lat, _) = city_coordinates("LONDON").unwrap();
        assert_eq!(name, "london");
        assert!((lat - 51.5074).abs() < 1e-9);
    }

    #[test]
    fn test_substring_match_both_directions() {
        assert_eq!(city_coordinates("Tokyo, Japan").unwrap().0, "tokyo");
        assert_eq!(city_coordinates("york").unwrap().0, "new york");
    }

    #[test]
    fn test_unknown_and_empty_places() {
        assert!(city_coordinates("Atlantis").is_none());
        assert!(city_coordinates("   ").is_none());

        let coords = resolve_coordinates(Some("Atlantis"), None, None);
        assert_eq!(coords.source, CoordinateSource::Default);
        assert_eq!(coords.known_latitude(), None);
    }

    #[test]
    fn test_explicit_coordinates_override_place() {
        let coords = resolve_coordinates(Some("London"), Some(-45.0), Some(170.5));
        assert_eq!(coords.source, CoordinateSource::Supplied);
        assert_eq!(coords.known_latitude(), Some(-45.0));
    }

    #[test]
    fn test_latitude_without_longitude_uses_place() {
        let coords = resolve_coordinates(Some("Paris"), Some(10.0), None);
        assert_eq!(coords.source, CoordinateSource::City("paris".into()));
    }

    #[test]
    fn test_out_of_range_coordinates_are_not_supplied() {
        let coords = resolve_coordinates(Some("Tokyo"), Some(1e300), Some(0.0));
        assert_eq!(coords.source, CoordinateSource::City("tokyo".into()));

        let coords = resolve_coordinates(None, Some(500.0), Some(10.0));
        assert_eq!(coords.source, CoordinateSource::Default);

        let coords = resolve_coordinates(None, Some(45.0), Some(-200.0));
        assert_eq!(coords.source, CoordinateSource::Default);

        let coords = resolve_coordinates(None, Some(f64::NAN), Some(0.0));
        assert_eq!(coords.source, CoordinateSource::Default);
    }
}

use crate::model::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// great-circle distance between two coordinates via the haversine formula,
/// in kilometers.
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// an ordered table of travel modes and their cruise speeds in km/h. order
/// matters: ties in estimated travel time resolve to the earlier entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(transparent)]
pub struct SpeedTable {
    entries: Vec<SpeedEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SpeedEntry {
    pub mode: String,
    pub kmh: f64,
}

impl Default for SpeedTable {
    fn default() -> Self {
        SpeedTable {
            entries: vec![
                SpeedEntry {
                    mode: "walking".to_string(),
                    kmh: 5.0,
                },
                SpeedEntry {
                    mode: "cycling".to_string(),
                    kmh: 15.0,
                },
                SpeedEntry {
                    mode: "driving".to_string(),
                    kmh: 60.0,
                },
                SpeedEntry {
                    mode: "flying".to_string(),
                    kmh: 800.0,
                },
            ],
        }
    }
}

impl SpeedTable {
    /// builds a table from (mode, km/h) pairs, discarding non-positive speeds.
    pub fn new(entries: Vec<(String, f64)>) -> SpeedTable {
        SpeedTable {
            entries: entries
                .into_iter()
                .filter(|(_, kmh)| *kmh > 0.0)
                .map(|(mode, kmh)| SpeedEntry { mode, kmh })
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeedEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// the fastest geometric travel estimate between two coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TravelEstimate {
    pub minutes: f64,
    pub mode: String,
}

/// estimates travel time from `a` to `b` for every mode in the table and
/// returns the minimum. the first minimal entry in table order wins, a
/// deliberate, deterministic tie-break. identical coordinates estimate to
/// zero minutes on the first mode. None only for an empty table.
pub fn best_travel_time(a: &Coordinate, b: &Coordinate, speeds: &SpeedTable) -> Option<TravelEstimate> {
    let distance_km = haversine_km(a, b);
    let mut best: Option<TravelEstimate> = None;
    for entry in speeds.iter() {
        let minutes = distance_km / entry.kmh * 60.0;
        let better = match &best {
            Some(current) => minutes < current.minutes,
            None => true,
        };
        if better {
            best = Some(TravelEstimate {
                minutes,
                mode: entry.mode.clone(),
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_for_identical_points() {
        let sydney = Coordinate::new(-33.9461, 151.1772);
        assert_eq!(haversine_km(&sydney, &sydney), 0.0);
    }

    #[test]
    fn test_haversine_known_distance() {
        // London -> Paris, roughly 340 km between the reference coordinates
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8589, 2.3200);
        let d = haversine_km(&london, &paris);
        assert!(d > 330.0 && d < 350.0, "unexpected distance {d}");
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Coordinate::new(19.0895, 72.8656);
        let b = Coordinate::new(-33.9461, 151.1772);
        assert!((haversine_km(&a, &b) - haversine_km(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_best_travel_time_picks_fastest_mode() {
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8589, 2.3200);
        let est = best_travel_time(&london, &paris, &SpeedTable::default()).unwrap();
        assert_eq!(est.mode, "flying");
        let distance = haversine_km(&london, &paris);
        assert!((est.minutes - distance / 800.0 * 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_identical_points_estimate_zero_on_first_mode() {
        let p = Coordinate::new(1.0, 2.0);
        let est = best_travel_time(&p, &p, &SpeedTable::default()).unwrap();
        assert_eq!(est.minutes, 0.0);
        // tie across every mode resolves to the first table entry
        assert_eq!(est.mode, "walking");
    }

    #[test]
    fn test_empty_table_yields_none() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 1.0);
        assert!(best_travel_time(&a, &b, &SpeedTable::new(vec![])).is_none());
    }
}

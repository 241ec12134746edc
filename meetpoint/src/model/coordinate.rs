use geo_types::Point;
use serde::{Deserialize, Serialize};

/// a (latitude, longitude) pair in degrees. immutable value type; valid
/// ranges are [-90, 90] / [-180, 180] and are the responsibility of the
/// boundary that constructed the value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Coordinate {
        Coordinate { lat, lon }
    }

    /// planar projection used by the hull and containment code: latitude as
    /// x, longitude as y. an accepted approximation for attendee spreads
    /// under roughly a quarter of the globe.
    pub fn as_planar_point(&self) -> Point<f64> {
        Point::new(self.lat, self.lon)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Coordinate {
        Coordinate {
            lat: point.x(),
            lon: point.y(),
        }
    }
}

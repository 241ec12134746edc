use crate::model::coordinate::Coordinate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Unexpected geocoding response: {0}")]
    ResponseError(String),
}

/// free-text city name to coordinate resolution, used only when a city is
/// absent from the static reference table. `Ok(None)` means "not found";
/// `Err` means the lookup itself failed.
pub trait Geocoder {
    fn resolve(&self, city_name: &str) -> Result<Option<Coordinate>, GeocodeError>;
}

/// geocoder backed by the Nominatim (OpenStreetMap) search API.
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    base_url: String,
}

pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const USER_AGENT: &str = "meetpoint/0.1";

#[derive(Deserialize)]
struct NominatimHit {
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    pub fn new() -> Result<NominatimGeocoder, GeocodeError> {
        NominatimGeocoder::with_base_url(NOMINATIM_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<NominatimGeocoder, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(5))
            .build()?;
        Ok(NominatimGeocoder {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    fn resolve(&self, city_name: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        let hits: Vec<NominatimHit> = self
            .client
            .get(&url)
            .query(&[("q", city_name), ("format", "json")])
            .send()?
            .error_for_status()?
            .json()?;

        let hit = match hits.first() {
            Some(h) => h,
            None => return Ok(None),
        };
        let lat = hit
            .lat
            .parse::<f64>()
            .map_err(|_| GeocodeError::ResponseError(format!("bad latitude '{}'", hit.lat)))?;
        let lon = hit
            .lon
            .parse::<f64>()
            .map_err(|_| GeocodeError::ResponseError(format!("bad longitude '{}'", hit.lon)))?;
        Ok(Some(Coordinate::new(lat, lon)))
    }
}

/// offline geocoder over a fixed name-to-coordinate map. case-insensitive;
/// used as the default in tests and when network lookups are disabled.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    entries: BTreeMap<String, Coordinate>,
}

impl StaticGeocoder {
    pub fn new(entries: Vec<(&str, Coordinate)>) -> StaticGeocoder {
        StaticGeocoder {
            entries: entries
                .into_iter()
                .map(|(name, coord)| (name.to_lowercase(), coord))
                .collect(),
        }
    }
}

impl Geocoder for StaticGeocoder {
    fn resolve(&self, city_name: &str) -> Result<Option<Coordinate>, GeocodeError> {
        Ok(self.entries.get(&city_name.to_lowercase()).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_geocoder_case_insensitive() {
        let geocoder = StaticGeocoder::new(vec![("Bangalore", Coordinate::new(13.19, 77.71))]);
        let hit = geocoder.resolve("bangalore").unwrap();
        assert_eq!(hit, Some(Coordinate::new(13.19, 77.71)));
        assert_eq!(geocoder.resolve("Atlantis").unwrap(), None);
    }
}

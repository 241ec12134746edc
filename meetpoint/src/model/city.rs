use crate::model::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// a candidate or attendee city, keyed by its primary airport code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct City {
    pub code: String,
    pub name: String,
    pub country: String,
    #[serde(flatten)]
    pub coord: Coordinate,
}

impl City {
    pub fn new(code: &str, name: &str, country: &str, lat: f64, lon: f64) -> City {
        City {
            code: code.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            coord: Coordinate::new(lat, lon),
        }
    }
}

/// read-only city reference table, injected wherever cities are resolved so
/// tests can substitute fixtures. iteration order is table order, which
/// downstream tie-breaks depend on.
#[derive(Debug, Clone, Default)]
pub struct CityTable {
    cities: Vec<City>,
}

impl CityTable {
    pub fn new(cities: Vec<City>) -> CityTable {
        CityTable { cities }
    }

    /// the built-in world candidate table: ~46 airport-coded cities across
    /// six continents.
    pub fn builtin() -> CityTable {
        let cities = BUILTIN_CITIES
            .iter()
            .map(|(code, name, country, lat, lon)| City::new(code, name, country, *lat, *lon))
            .collect();
        CityTable { cities }
    }

    /// loads a table from a CSV file with columns code,name,country,lat,lon.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<CityTable, csv::Error> {
        let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
        CityTable::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<CityTable, csv::Error> {
        // the csv crate does not support serde(flatten), so rows are read
        // into a flat shape first
        #[derive(Deserialize)]
        struct CityRow {
            code: String,
            name: String,
            country: String,
            lat: f64,
            lon: f64,
        }
        let cities = csv::Reader::from_reader(reader)
            .deserialize()
            .map(|row: Result<CityRow, _>| {
                row.map(|r| City::new(&r.code, &r.name, &r.country, r.lat, r.lon))
            })
            .collect::<Result<Vec<City>, _>>()?;
        Ok(CityTable { cities })
    }

    pub fn get(&self, code: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.code == code)
    }

    /// case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&City> {
        let lower = name.to_lowercase();
        self.cities.iter().find(|c| c.name.to_lowercase() == lower)
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// a new table with `custom` merged in. a custom city replaces an
    /// existing entry with the same code, otherwise it is appended.
    pub fn with_custom(&self, custom: &[City]) -> CityTable {
        let mut cities = self.cities.clone();
        for city in custom {
            match cities.iter_mut().find(|c| c.code == city.code) {
                Some(existing) => *existing = city.clone(),
                None => cities.push(city.clone()),
            }
        }
        CityTable { cities }
    }
}

/// a geographically pruned, request-scoped set of eligible meeting
/// locations. never persisted; built fresh from a [`CityTable`] per request.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    cities: Vec<City>,
}

impl CandidatePool {
    pub fn from_table(table: &CityTable) -> CandidatePool {
        CandidatePool {
            cities: table.iter().cloned().collect(),
        }
    }

    pub fn new(cities: Vec<City>) -> CandidatePool {
        CandidatePool { cities }
    }

    pub fn get(&self, code: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

const BUILTIN_CITIES: &[(&str, &str, &str, f64, f64)] = &[
    ("JFK", "New York", "USA", 40.7127, -74.0060),
    ("LAX", "Los Angeles", "USA", 34.0537, -118.2428),
    ("ORD", "Chicago", "USA", 41.8756, -87.6244),
    ("DFW", "Dallas", "USA", 32.7763, -96.7969),
    ("DEN", "Denver", "USA", 39.7392, -104.9849),
    ("SFO", "San Francisco", "USA", 37.7793, -122.4193),
    ("SEA", "Seattle", "USA", 47.6038, -122.3301),
    ("BOS", "Boston", "USA", 42.3656, -71.0096),
    ("MIA", "Miami", "USA", 25.7907, -80.2871),
    ("ATL", "Atlanta", "USA", 33.7545, -84.3898),
    ("LHR", "London", "UK", 51.5074, -0.1278),
    ("CDG", "Paris", "France", 48.8589, 2.3200),
    ("FRA", "Frankfurt", "Germany", 50.1106, 8.6821),
    ("AMS", "Amsterdam", "Netherlands", 52.3731, 4.8925),
    ("DUB", "Dublin", "Ireland", 53.4129, -6.2700),
    ("SYD", "Sydney", "Australia", -33.9461, 151.1772),
    ("MEL", "Melbourne", "Australia", -37.8142, 144.9632),
    ("NRT", "Tokyo", "Japan", 35.6769, 139.7639),
    ("ICN", "Seoul", "South Korea", 37.5667, 126.9783),
    ("PVG", "Shanghai", "China", 31.2304, 121.3425),
    ("HKG", "Hong Kong", "Hong Kong", 22.3506, 114.1849),
    ("SIN", "Singapore", "Singapore", 1.3521, 103.8198),
    ("BKK", "Bangkok", "Thailand", 13.7525, 100.4935),
    ("DEL", "Delhi", "India", 28.5635, 77.1903),
    ("BOM", "Mumbai", "India", 19.0895, 72.8656),
    ("DXB", "Dubai", "UAE", 25.0743, 55.1885),
    ("DOH", "Doha", "Qatar", 25.2731, 51.6126),
    ("SVO", "Moscow", "Russia", 55.6256, 37.6064),
    ("IST", "Istanbul", "Turkey", 41.0064, 28.9759),
    ("MXP", "Milan", "Italy", 45.4642, 9.1896),
    ("ZRH", "Zurich", "Switzerland", 47.4647, 8.5492),
    ("VIE", "Vienna", "Austria", 48.2084, 16.3725),
    ("BCN", "Barcelona", "Spain", 41.2974, 2.0833),
    ("MAD", "Madrid", "Spain", 40.4730, -3.6282),
    ("CDT", "Casablanca", "Morocco", 33.5945, -7.6200),
    ("CAI", "Cairo", "Egypt", 30.0443879, 31.2357257),
    ("JNB", "Johannesburg", "South Africa", -26.2050, 28.0497),
    ("CPT", "Cape Town", "South Africa", -33.9288, 18.4172),
    ("SAO", "Sao Paulo", "Brazil", -23.5507, -46.6334),
    ("RIO", "Rio de Janeiro", "Brazil", -22.9068, -43.1729),
    ("MEX", "Mexico City", "Mexico", 19.3208, -99.1515),
    ("TOR", "Toronto", "Canada", 43.6535, -79.3839),
    ("YVR", "Vancouver", "Canada", 49.1847, -123.1786),
    ("AAL", "Aarhus", "Denmark", 56.0896, 10.6182),
    ("IAH", "Houston", "USA", 29.9792, -95.3369),
];

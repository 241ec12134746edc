use crate::model::city::{CandidatePool, City, CityTable};
use crate::model::coordinate::Coordinate;
use crate::model::estimate::{best_travel_time, SpeedTable};
use crate::model::geocode::Geocoder;
use crate::model::geometry;
use crate::model::optimizer::{
    EventDates, FilterResponse, OptimizeError, OptimizeRequest, OptimizeResponse, OptimizeStage,
};
use crate::model::scoring::{normalize, rank, CandidateMetrics, Weights};
use crate::model::window::AvailabilityWindow;
use meetpoint_flights::connection::{find_connections, Connection, ConnectionConfig};
use meetpoint_flights::schedule::{FlightLeg, ScheduleSource};
use std::collections::BTreeMap;

/// drives one optimization request end to end: resolve attendees, prune
/// candidates geographically, cost every (attendee, candidate) pair, then
/// normalize and rank. collaborators are injected read-only and every run
/// builds its own pool, polygon and metrics.
pub struct Optimizer<'a> {
    city_table: &'a CityTable,
    geocoder: &'a dyn Geocoder,
    schedule: &'a dyn ScheduleSource,
    speeds: SpeedTable,
    connection: ConnectionConfig,
}

/// an attendee city resolved to coordinates, tagged with whether it came
/// from the reference table or the geocoding fallback.
struct ResolvedAttendee {
    request_name: String,
    city: City,
    from_geocoder: bool,
}

impl<'a> Optimizer<'a> {
    pub fn new(
        city_table: &'a CityTable,
        geocoder: &'a dyn Geocoder,
        schedule: &'a dyn ScheduleSource,
    ) -> Optimizer<'a> {
        Optimizer {
            city_table,
            geocoder,
            schedule,
            speeds: SpeedTable::default(),
            connection: ConnectionConfig::default(),
        }
    }

    pub fn with_tuning(mut self, speeds: SpeedTable, connection: ConnectionConfig) -> Optimizer<'a> {
        self.speeds = speeds;
        self.connection = connection;
        self
    }

    /// runs the full pipeline and emits the winner, or a structured error.
    /// never both.
    pub fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, OptimizeError> {
        let result = self.run(request);
        if let Err(e) = &result {
            log::debug!("stage {}: {e}", OptimizeStage::Failed);
        }
        result
    }

    fn run(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, OptimizeError> {
        log::debug!("stage {}", OptimizeStage::Init);
        if request.attendees.is_empty() {
            return Err(OptimizeError::NoAttendeesError);
        }
        let weights = Weights::new(request.time_weight, request.emissions_weight);
        if !weights.is_valid() {
            return Err(OptimizeError::InvalidWeightError(format!(
                "weights must be non-negative, got time={} emissions={}",
                request.time_weight, request.emissions_weight
            )));
        }
        let window = AvailabilityWindow::parse(
            &request.availability_window.start,
            &request.availability_window.end,
        )
        .map_err(OptimizeError::InvalidWindowError)?;

        let attendees = self.resolve_attendees(request.attendees.keys())?;

        log::debug!("stage {}", OptimizeStage::GeoFilter);
        let (pool, _polygon) = self.build_pool(&attendees);

        log::debug!("stage {}", OptimizeStage::CostLookup);
        let legs = match self.schedule.load(&window.schedule_window()) {
            Ok(legs) => legs,
            Err(e) => {
                log::warn!("schedule source unavailable, using distance estimates only: {e}");
                vec![]
            }
        };
        let metrics = self.collect_metrics(&pool, &attendees, &legs);

        log::debug!("stage {}", OptimizeStage::Normalize);
        let normalized = normalize(metrics);

        log::debug!("stage {}", OptimizeStage::Rank);
        let (_, winner) = rank(normalized, &weights);
        let winner = winner.ok_or(OptimizeError::NoCandidatesError)?;

        log::debug!("stage {}", OptimizeStage::Done);
        let (average, median, max, min) = winner.normalized.metrics.travel_hour_stats();
        Ok(OptimizeResponse {
            event_location: winner.normalized.metrics.city_name.clone(),
            event_location_code: winner.normalized.metrics.code.clone(),
            event_dates: EventDates {
                start: request.availability_window.start.clone(),
                end: request.availability_window.end.clone(),
                hours: window.span_hours(),
            },
            total_co2: winner.normalized.metrics.total_co2_tonnes,
            average_travel_hours: average,
            median_travel_hours: median,
            max_travel_hours: max,
            min_travel_hours: min,
            attendee_travel_hours: winner.normalized.metrics.attendee_travel_hours.clone(),
            time_score: winner.normalized.time_norm,
            emissions_score: winner.normalized.co2_norm,
            composite_score: winner.composite_score,
        })
    }

    /// geographic-filter operation exposed to the web/UI layers. unlike
    /// `optimize`, an empty filter result is surfaced as an error here so
    /// the caller can decide whether to widen.
    pub fn filter_candidates(&self, city_names: &[String]) -> Result<FilterResponse, OptimizeError> {
        if city_names.is_empty() {
            return Err(OptimizeError::NoAttendeesError);
        }
        let attendees = self.resolve_attendees(city_names.iter())?;

        let points: Vec<Coordinate> = attendees.iter().map(|a| a.city.coord).collect();
        let polygon = geometry::build_polygon(&points);
        let custom: Vec<City> = attendees
            .iter()
            .filter(|a| a.from_geocoder)
            .map(|a| a.city.clone())
            .collect();
        let table = self.city_table.with_custom(&custom);
        let pool = CandidatePool::from_table(&table);
        let filtered = geometry::filter_candidates(&pool, &polygon);
        if filtered.is_empty() {
            return Err(OptimizeError::EmptyCandidateSetError);
        }

        Ok(FilterResponse {
            filtered_candidates: filtered
                .iter()
                .map(|c| (c.code.clone(), c.clone()))
                .collect(),
            polygon_vertices: polygon,
            attendee_locations: attendees
                .iter()
                .map(|a| (a.request_name.clone(), a.city.coord))
                .collect(),
            total_candidates: pool.len(),
            candidates_in_polygon: filtered.len(),
        })
    }

    /// resolves every attendee city name, reference table first, geocoding
    /// fallback second. any city that resolves neither way aborts the run;
    /// attendees are never silently dropped.
    fn resolve_attendees<I, S>(&self, names: I) -> Result<Vec<ResolvedAttendee>, OptimizeError>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved = vec![];
        for name in names {
            let name = name.as_ref();
            if let Some(city) = self.city_table.find_by_name(name) {
                resolved.push(ResolvedAttendee {
                    request_name: name.to_string(),
                    city: city.clone(),
                    from_geocoder: false,
                });
                continue;
            }
            match self.geocoder.resolve(name) {
                Ok(Some(coord)) => {
                    let pseudo_code: String =
                        name.chars().take(3).collect::<String>().to_uppercase();
                    resolved.push(ResolvedAttendee {
                        request_name: name.to_string(),
                        city: City {
                            code: pseudo_code,
                            name: name.to_string(),
                            country: "Unknown".to_string(),
                            coord,
                        },
                        from_geocoder: true,
                    });
                }
                Ok(None) => return Err(OptimizeError::UnresolvedCityError(name.to_string())),
                Err(e) => {
                    log::warn!("geocoding failed for '{name}': {e}");
                    return Err(OptimizeError::UnresolvedCityError(name.to_string()));
                }
            }
        }
        Ok(resolved)
    }

    /// builds the request's candidate pool: geocoded attendee cities merged
    /// into the reference table, pruned by the attendee hull. an empty
    /// filter result widens back to the full table rather than failing.
    fn build_pool(&self, attendees: &[ResolvedAttendee]) -> (CandidatePool, Vec<Coordinate>) {
        let points: Vec<Coordinate> = attendees.iter().map(|a| a.city.coord).collect();
        let polygon = geometry::build_polygon(&points);
        let custom: Vec<City> = attendees
            .iter()
            .filter(|a| a.from_geocoder)
            .map(|a| a.city.clone())
            .collect();
        let table = self.city_table.with_custom(&custom);
        let full = CandidatePool::from_table(&table);
        let filtered = geometry::filter_candidates(&full, &polygon);
        if filtered.is_empty() {
            log::info!(
                "geographic filter matched no candidates, widening to all {}",
                full.len()
            );
            (full, polygon)
        } else {
            log::debug!(
                "geographic filter kept {} of {} candidates",
                filtered.len(),
                full.len()
            );
            (filtered, polygon)
        }
    }

    fn collect_metrics(
        &self,
        pool: &CandidatePool,
        attendees: &[ResolvedAttendee],
        legs: &[FlightLeg],
    ) -> Vec<CandidateMetrics> {
        pool.iter()
            .map(|candidate| {
                let mut attendee_travel_hours = BTreeMap::new();
                let mut max_travel_hours: f64 = 0.0;
                let mut total_co2_tonnes = 0.0;
                for attendee in attendees {
                    let (hours, co2) = self.pair_cost(legs, &attendee.city, candidate);
                    max_travel_hours = max_travel_hours.max(hours);
                    total_co2_tonnes += co2;
                    attendee_travel_hours.insert(attendee.request_name.clone(), hours);
                }
                CandidateMetrics {
                    code: candidate.code.clone(),
                    city_name: candidate.name.clone(),
                    max_travel_hours,
                    total_co2_tonnes,
                    attendee_travel_hours,
                }
            })
            .collect()
    }

    /// travel cost for one (attendee, candidate) pair: (hours, CO2 tonnes).
    ///
    /// flight-backed pairs use the WORST of the found connections. pairs
    /// with no flight data fall back to the geometric estimate with zero
    /// CO2, so candidates lacking flight coverage score low on emissions.
    fn pair_cost(&self, legs: &[FlightLeg], attendee: &City, candidate: &City) -> (f64, f64) {
        let connections = find_connections(legs, &attendee.code, &candidate.code, &self.connection);
        if let Some(worst) = slowest_connection(&connections) {
            return (
                worst.journey_minutes as f64 / 60.0,
                worst.total_co2_tonnes,
            );
        }
        match best_travel_time(&attendee.coord, &candidate.coord, &self.speeds) {
            Some(estimate) => (estimate.minutes / 60.0, 0.0),
            None => {
                log::warn!(
                    "no route or estimate from {} to {}, recording zero cost",
                    attendee.code,
                    candidate.code
                );
                (0.0, 0.0)
            }
        }
    }
}

/// the connection with the longest journey; ties resolve to the earliest in
/// discovery order.
fn slowest_connection(connections: &[Connection]) -> Option<&Connection> {
    let mut worst: Option<&Connection> = None;
    for connection in connections {
        let slower = match worst {
            Some(current) => connection.journey_minutes > current.journey_minutes,
            None => true,
        };
        if slower {
            worst = Some(connection);
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geocode::StaticGeocoder;
    use crate::model::optimizer::WindowSpec;
    use chrono::NaiveDate;
    use meetpoint_flights::schedule::{ClockTime, FlightsError, ScheduleWindow};

    struct NoFlights;
    impl ScheduleSource for NoFlights {
        fn load(&self, _window: &ScheduleWindow) -> Result<Vec<FlightLeg>, FlightsError> {
            Ok(vec![])
        }
    }

    struct BrokenSource;
    impl ScheduleSource for BrokenSource {
        fn load(&self, _window: &ScheduleWindow) -> Result<Vec<FlightLeg>, FlightsError> {
            Err(FlightsError::MissingEmissionsFileError(
                "emissions.csv".to_string(),
            ))
        }
    }

    struct FixtureFlights(Vec<FlightLeg>);
    impl ScheduleSource for FixtureFlights {
        fn load(&self, _window: &ScheduleWindow) -> Result<Vec<FlightLeg>, FlightsError> {
            Ok(self.0.clone())
        }
    }

    fn leg(
        carrier: &str,
        number: &str,
        dep: &str,
        arr: &str,
        dep_time: u32,
        arr_time: u32,
        co2: f64,
    ) -> FlightLeg {
        FlightLeg {
            carrier: carrier.to_string(),
            flight_number: number.to_string(),
            flight_date: NaiveDate::from_ymd_opt(2025, 12, 10).unwrap(),
            departure_airport: dep.to_string(),
            arrival_airport: arr.to_string(),
            departure_time: ClockTime::from_hhmm(dep_time).unwrap(),
            arrival_time: ClockTime::from_hhmm(arr_time).unwrap(),
            distance_km: None,
            fuel_burn_tonnes: 0.0,
            co2_tonnes: co2,
        }
    }

    fn request(attendees: &[(&str, u32)], time_weight: f64, emissions_weight: f64) -> OptimizeRequest {
        OptimizeRequest {
            attendees: attendees
                .iter()
                .map(|(name, count)| (name.to_string(), *count))
                .collect(),
            availability_window: WindowSpec {
                start: "2025-12-10T09:00Z".to_string(),
                end: "2025-12-15T17:00Z".to_string(),
            },
            event_duration: None,
            time_weight,
            emissions_weight,
        }
    }

    #[test]
    fn test_zero_attendees_is_an_input_error() {
        let table = CityTable::builtin();
        let geocoder = StaticGeocoder::default();
        let source = NoFlights;
        let optimizer = Optimizer::new(&table, &geocoder, &source);
        let result = optimizer.optimize(&request(&[], 0.5, 0.5));
        assert!(matches!(result, Err(OptimizeError::NoAttendeesError)));
    }

    #[test]
    fn test_unparseable_window_is_an_input_error() {
        let table = CityTable::builtin();
        let geocoder = StaticGeocoder::default();
        let source = NoFlights;
        let optimizer = Optimizer::new(&table, &geocoder, &source);
        let mut req = request(&[("Mumbai", 1)], 0.5, 0.5);
        req.availability_window.start = "whenever".to_string();
        assert!(matches!(
            optimizer.optimize(&req),
            Err(OptimizeError::InvalidWindowError(_))
        ));
    }

    #[test]
    fn test_negative_weights_rejected() {
        let table = CityTable::builtin();
        let geocoder = StaticGeocoder::default();
        let source = NoFlights;
        let optimizer = Optimizer::new(&table, &geocoder, &source);
        assert!(matches!(
            optimizer.optimize(&request(&[("Mumbai", 1)], -1.0, 0.5)),
            Err(OptimizeError::InvalidWeightError(_))
        ));
    }

    #[test]
    fn test_unresolvable_attendee_aborts() {
        let table = CityTable::builtin();
        let geocoder = StaticGeocoder::default();
        let source = NoFlights;
        let optimizer = Optimizer::new(&table, &geocoder, &source);
        let result = optimizer.optimize(&request(&[("Mumbai", 1), ("Atlantis", 2)], 0.5, 0.5));
        match result {
            Err(OptimizeError::UnresolvedCityError(name)) => assert_eq!(name, "Atlantis"),
            other => panic!("expected resolution error, got {other:?}"),
        }
    }

    #[test]
    fn test_mumbai_sydney_scenario_without_flight_data() {
        let table = CityTable::builtin();
        let geocoder = StaticGeocoder::default();
        let source = NoFlights;
        let optimizer = Optimizer::new(&table, &geocoder, &source);
        let response = optimizer
            .optimize(&request(&[("Mumbai", 2), ("Sydney", 2)], 0.5, 0.5))
            .unwrap();

        assert!(!response.event_location.is_empty());
        let keys: Vec<&String> = response.attendee_travel_hours.keys().collect();
        assert_eq!(keys, vec!["Mumbai", "Sydney"]);
        assert!(response.max_travel_hours >= response.average_travel_hours);
        assert!(response.average_travel_hours >= response.min_travel_hours);
        // no flight data anywhere, so the zero-emissions fallback applies
        assert_eq!(response.total_co2, 0.0);
        assert_eq!(response.event_dates.hours, 5.0 * 24.0 + 8.0);
    }

    #[test]
    fn test_schedule_source_failure_degrades_to_estimates() {
        let table = CityTable::builtin();
        let geocoder = StaticGeocoder::default();
        let source = BrokenSource;
        let optimizer = Optimizer::new(&table, &geocoder, &source);
        let response = optimizer
            .optimize(&request(&[("Mumbai", 1), ("Sydney", 1)], 0.5, 0.5))
            .unwrap();
        assert!(!response.event_location.is_empty());
        assert_eq!(response.total_co2, 0.0);
    }

    /// three geocoded attendees whose triangle contains Singapore, which is
    /// reachable via one-stop itineraries. the connection journeys are much
    /// shorter than the geometric estimates between the attendee cities, so
    /// the flight-backed candidate wins on time weight alone.
    #[test]
    fn test_connection_backed_costing() {
        let table = CityTable::new(vec![City::new(
            "SIN",
            "Singapore",
            "Singapore",
            1.3521,
            103.8198,
        )]);
        let geocoder = StaticGeocoder::new(vec![
            ("Aport", Coordinate::new(-20.0, 60.0)),
            ("Bport", Coordinate::new(30.0, 100.0)),
            ("Cport", Coordinate::new(-10.0, 170.0)),
        ]);
        let source = FixtureFlights(vec![
            leg("XX", "101", "APO", "HUB", 800, 1000, 10.0),
            leg("XX", "201", "BPO", "HUB", 815, 1005, 12.0),
            leg("XX", "301", "CPO", "HUB", 830, 1010, 14.0),
            leg("XX", "401", "HUB", "SIN", 1100, 1300, 20.0),
            leg("XX", "402", "HUB", "SIN", 1130, 1330, 24.0),
        ]);
        let optimizer = Optimizer::new(&table, &geocoder, &source);
        let response = optimizer
            .optimize(
                &request(&[("Aport", 1), ("Bport", 1), ("Cport", 1)], 1.0, 0.0),
            )
            .unwrap();

        assert_eq!(response.event_location_code, "SIN");
        // worst-case itineraries all end on the 13:30 arrival
        assert_eq!(response.attendee_travel_hours.get("Aport"), Some(&5.5));
        assert_eq!(response.attendee_travel_hours.get("Bport"), Some(&5.25));
        assert_eq!(response.attendee_travel_hours.get("Cport"), Some(&5.0));
        assert_eq!(response.max_travel_hours, 5.5);
        // worst connections carry (10 + 24) + (12 + 24) + (14 + 24) tonnes
        assert_eq!(response.total_co2, 108.0);
    }

    #[test]
    fn test_filter_candidates_reports_polygon_and_counts() {
        let table = CityTable::builtin();
        let geocoder = StaticGeocoder::default();
        let source = NoFlights;
        let optimizer = Optimizer::new(&table, &geocoder, &source);
        let names: Vec<String> = ["Mumbai", "Singapore", "Sydney", "Tokyo"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let response = optimizer.filter_candidates(&names).unwrap();

        assert_eq!(response.total_candidates, table.len());
        assert_eq!(
            response.candidates_in_polygon,
            response.filtered_candidates.len()
        );
        assert!(response.candidates_in_polygon >= 4);
        assert_eq!(response.attendee_locations.len(), 4);
        assert!(response.polygon_vertices.len() >= 3);
        // attendee cities sit on the hull and are themselves candidates
        assert!(response.filtered_candidates.contains_key("BOM"));
        assert!(response.filtered_candidates.contains_key("SYD"));
    }

    #[test]
    fn test_filter_candidates_empty_input_is_an_error() {
        let table = CityTable::builtin();
        let geocoder = StaticGeocoder::default();
        let source = NoFlights;
        let optimizer = Optimizer::new(&table, &geocoder, &source);
        assert!(matches!(
            optimizer.filter_candidates(&[]),
            Err(OptimizeError::NoAttendeesError)
        ));
    }
}

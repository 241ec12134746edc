use crate::connection::Connection;
use crate::schedule::{wrap_next_day, FlightLeg};
use serde::{Deserialize, Serialize};

/// bounds applied during connection discovery.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ConnectionConfig {
    /// minimum layover in minutes.
    pub min_connection_minutes: i64,
    /// maximum layover in minutes.
    pub max_connection_minutes: i64,
    /// cap on total CO2 across both legs, in tonnes. None disables the cap.
    pub max_total_co2_tonnes: Option<f64>,
    /// cap on first-departure-to-second-arrival elapsed minutes.
    pub max_journey_minutes: Option<i64>,
    /// stop once this many connections have been accepted.
    pub limit: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig {
            min_connection_minutes: 40,
            max_connection_minutes: 300,
            max_total_co2_tonnes: Some(300.0),
            max_journey_minutes: None,
            limit: 10,
        }
    }
}

/// finds single-stop itineraries from `origin` to `destination`.
///
/// results follow discovery order (first-leg then second-leg dataset order)
/// and are truncated at `config.limit` as an early exit. this is not a
/// global top-K by cost; callers wanting cheapest-first must sort the
/// result themselves. an empty leg set, or no matching legs, yields an
/// empty Vec.
pub fn find_connections(
    legs: &[FlightLeg],
    origin: &str,
    destination: &str,
    config: &ConnectionConfig,
) -> Vec<Connection> {
    let first_legs = legs.iter().filter(|leg| leg.departure_airport == origin);
    let second_legs: Vec<&FlightLeg> = legs
        .iter()
        .filter(|leg| leg.arrival_airport == destination)
        .collect();

    let mut connections: Vec<Connection> = vec![];

    'outer: for first in first_legs {
        // layover window anchored on the first leg's arrival clock time.
        // departures after midnight fall outside the raw window and are
        // not matched; single-day schedules only.
        let min_depart = first.arrival_time.minutes() + config.min_connection_minutes;
        let max_depart = first.arrival_time.minutes() + config.max_connection_minutes;

        for second in second_legs.iter() {
            if second.departure_airport != first.arrival_airport {
                continue;
            }
            let depart = second.departure_time.minutes();
            if depart < min_depart || depart > max_depart {
                continue;
            }

            let total_co2_tonnes = first.co2_tonnes + second.co2_tonnes;
            if let Some(cap) = config.max_total_co2_tonnes {
                if total_co2_tonnes > cap {
                    continue;
                }
            }

            let journey_minutes =
                wrap_next_day(second.arrival_time.minutes() - first.departure_time.minutes());
            if let Some(cap) = config.max_journey_minutes {
                if journey_minutes > cap {
                    continue;
                }
            }

            connections.push(Connection {
                first: first.clone(),
                second: (*second).clone(),
                total_co2_tonnes,
                journey_minutes,
                wait_minutes: depart - first.arrival_time.minutes(),
            });
            if connections.len() >= config.limit {
                break 'outer;
            }
        }
    }

    connections
}

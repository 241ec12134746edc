use crate::app::{AppError, MeetpointConfig};
use crate::model::city::CityTable;
use crate::model::geocode::{Geocoder, NominatimGeocoder, StaticGeocoder};
use crate::model::optimizer::{ErrorResponse, OptimizeRequest, Optimizer};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use meetpoint_flights::schedule::{legs_between, CsvScheduleSource, ScheduleSource, ScheduleWindow};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// command line tool for picking a meeting location that balances travel
/// time and CO2 emissions across distributed attendees
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct MeetpointCliArguments {
    /// select the operation to run
    #[command(subcommand)]
    pub op: MeetpointOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum MeetpointOperation {
    /// runs a full optimization for a JSON query file and prints the
    /// winning location as JSON.
    Optimize {
        /// path to a JSON file with attendees, availability window and weights
        #[arg(short, long)]
        query_file: PathBuf,
        /// directory of daily schedule CSV files, laid out as YYYY/MM/DD.csv
        #[arg(short, long, default_value = "data/schedule")]
        schedule_dir: PathBuf,
        /// CSV file of per-flight emissions estimates
        #[arg(short, long, default_value = "data/emissions.csv")]
        emissions_file: PathBuf,
        /// CSV file replacing the built-in candidate city table
        #[arg(long)]
        cities_file: Option<PathBuf>,
        /// TOML file tuning travel speeds and connection bounds
        #[arg(short, long)]
        config_file: Option<PathBuf>,
        /// skip network geocoding; attendee cities must be in the city table
        #[arg(long, default_value_t = false)]
        offline: bool,
    },
    /// prunes the candidate table to the convex hull of the given attendee
    /// cities and prints the result as JSON.
    Filter {
        /// attendee city names, comma separated
        #[arg(short, long, value_delimiter = ',')]
        cities: Vec<String>,
        /// CSV file replacing the built-in candidate city table
        #[arg(long)]
        cities_file: Option<PathBuf>,
        /// skip network geocoding; attendee cities must be in the city table
        #[arg(long, default_value_t = false)]
        offline: bool,
    },
    /// lists direct flights between two airports over a date range and
    /// prints them as JSON.
    Flights {
        /// origin airport code
        #[arg(short, long)]
        origin: String,
        /// destination airport code
        #[arg(short, long)]
        destination: String,
        /// first schedule date, YYYY-MM-DD
        #[arg(long)]
        start_date: NaiveDate,
        /// last schedule date, YYYY-MM-DD
        #[arg(long)]
        end_date: NaiveDate,
        /// directory of daily schedule CSV files, laid out as YYYY/MM/DD.csv
        #[arg(short, long, default_value = "data/schedule")]
        schedule_dir: PathBuf,
        /// CSV file of per-flight emissions estimates
        #[arg(short, long, default_value = "data/emissions.csv")]
        emissions_file: PathBuf,
    },
}

impl MeetpointOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            MeetpointOperation::Optimize {
                query_file,
                schedule_dir,
                emissions_file,
                cities_file,
                config_file,
                offline,
            } => run_optimize(
                query_file,
                schedule_dir,
                emissions_file,
                cities_file.as_deref(),
                config_file.as_deref(),
                *offline,
            ),
            MeetpointOperation::Filter {
                cities,
                cities_file,
                offline,
            } => run_filter(cities, cities_file.as_deref(), *offline),
            MeetpointOperation::Flights {
                origin,
                destination,
                start_date,
                end_date,
                schedule_dir,
                emissions_file,
            } => run_flights(
                origin,
                destination,
                *start_date,
                *end_date,
                schedule_dir,
                emissions_file,
            ),
        }
    }
}

fn run_optimize(
    query_file: &std::path::Path,
    schedule_dir: &std::path::Path,
    emissions_file: &std::path::Path,
    cities_file: Option<&std::path::Path>,
    config_file: Option<&std::path::Path>,
    offline: bool,
) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(query_file)?;
    let request: OptimizeRequest = serde_json::from_str(&raw)?;
    let config = match config_file {
        Some(path) => MeetpointConfig::from_path(path)?,
        None => MeetpointConfig::default(),
    };
    let table = load_city_table(cities_file)?;
    let geocoder = build_geocoder(offline)?;
    let source = CsvScheduleSource::new(schedule_dir.to_path_buf(), emissions_file.to_path_buf());

    let optimizer = Optimizer::new(&table, geocoder.as_ref(), &source)
        .with_tuning(config.speeds, config.connection);
    match optimizer.optimize(&request) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(e) => {
            // failures keep the structured error contract on stdout
            println!("{}", serde_json::to_string_pretty(&ErrorResponse::from(&e))?);
            Err(e.into())
        }
    }
}

fn run_filter(
    cities: &[String],
    cities_file: Option<&std::path::Path>,
    offline: bool,
) -> Result<(), AppError> {
    let table = load_city_table(cities_file)?;
    let geocoder = build_geocoder(offline)?;
    let source = NoSchedule;
    let optimizer = Optimizer::new(&table, geocoder.as_ref(), &source);
    match optimizer.filter_candidates(cities) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", serde_json::to_string_pretty(&ErrorResponse::from(&e))?);
            Err(e.into())
        }
    }
}

fn run_flights(
    origin: &str,
    destination: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    schedule_dir: &std::path::Path,
    emissions_file: &std::path::Path,
) -> Result<(), AppError> {
    let source = CsvScheduleSource::new(schedule_dir.to_path_buf(), emissions_file.to_path_buf());
    let legs = source.load(&ScheduleWindow::new(start_date, end_date))?;
    let direct = legs_between(&legs, origin, destination);
    log::info!(
        "found {} direct legs from {origin} to {destination}",
        direct.len()
    );
    println!("{}", serde_json::to_string_pretty(&direct)?);
    Ok(())
}

fn load_city_table(cities_file: Option<&std::path::Path>) -> Result<CityTable, AppError> {
    match cities_file {
        Some(path) => Ok(CityTable::from_csv_path(path)?),
        None => Ok(CityTable::builtin()),
    }
}

fn build_geocoder(offline: bool) -> Result<Box<dyn Geocoder>, AppError> {
    if offline {
        Ok(Box::new(StaticGeocoder::default()))
    } else {
        Ok(Box::new(NominatimGeocoder::new()?))
    }
}

/// schedule source for operations that never consult flight data.
struct NoSchedule;

impl ScheduleSource for NoSchedule {
    fn load(
        &self,
        _window: &ScheduleWindow,
    ) -> Result<Vec<meetpoint_flights::schedule::FlightLeg>, meetpoint_flights::schedule::FlightsError>
    {
        Ok(vec![])
    }
}

use crate::schedule::{join_legs, EmissionsRow, FlightLeg, FlightsError, ScheduleRow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};

/// inclusive date range over which schedule files are loaded.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ScheduleWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ScheduleWindow {
        ScheduleWindow { start, end }
    }

    /// every date in the window, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|d| d <= &self.end)
    }
}

/// boundary for schedule/emissions dataset access. implementations join the
/// two datasets on (carrier, flight number) with inner join semantics and
/// return the surviving legs; they take `&self` and must be safe for
/// concurrent read access.
pub trait ScheduleSource {
    fn load(&self, window: &ScheduleWindow) -> Result<Vec<FlightLeg>, FlightsError>;
}

/// file-backed schedule source reading one CSV per day from
/// `<schedule_dir>/YYYY/MM/DD.csv` plus a single emissions CSV. days with
/// no file are skipped; a window with no files at all yields no legs.
pub struct CsvScheduleSource {
    schedule_dir: PathBuf,
    emissions_file: PathBuf,
}

impl CsvScheduleSource {
    pub fn new<P: AsRef<Path>>(schedule_dir: P, emissions_file: P) -> CsvScheduleSource {
        CsvScheduleSource {
            schedule_dir: schedule_dir.as_ref().to_path_buf(),
            emissions_file: emissions_file.as_ref().to_path_buf(),
        }
    }

    fn day_file(&self, date: &NaiveDate) -> PathBuf {
        use chrono::Datelike;
        self.schedule_dir
            .join(date.year().to_string())
            .join(format!("{:02}", date.month()))
            .join(format!("{:02}.csv", date.day()))
    }
}

impl ScheduleSource for CsvScheduleSource {
    fn load(&self, window: &ScheduleWindow) -> Result<Vec<FlightLeg>, FlightsError> {
        if !self.emissions_file.exists() {
            return Err(FlightsError::MissingEmissionsFileError(
                self.emissions_file.display().to_string(),
            ));
        }
        let emissions = read_emissions_path(&self.emissions_file)?;

        let mut schedule: Vec<ScheduleRow> = vec![];
        for date in window.dates() {
            let path = self.day_file(&date);
            if !path.exists() {
                log::debug!("no schedule file for {}, skipping {:?}", date, path);
                continue;
            }
            schedule.extend(read_schedule_path(&path)?);
        }

        let legs = join_legs(schedule, &emissions);
        log::debug!(
            "loaded {} legs for window {} - {}",
            legs.len(),
            window.start,
            window.end
        );
        Ok(legs)
    }
}

pub fn read_schedule<R: Read>(reader: R) -> Result<Vec<ScheduleRow>, csv::Error> {
    csv::Reader::from_reader(reader).deserialize().collect()
}

pub fn read_emissions<R: Read>(reader: R) -> Result<Vec<EmissionsRow>, csv::Error> {
    csv::Reader::from_reader(reader).deserialize().collect()
}

fn read_schedule_path(path: &Path) -> Result<Vec<ScheduleRow>, FlightsError> {
    let reader = csv::Reader::from_path(path).map_err(|e| FlightsError::ScheduleReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    reader
        .into_deserialize()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FlightsError::ScheduleReadError {
            path: path.display().to_string(),
            source: e,
        })
}

fn read_emissions_path(path: &Path) -> Result<Vec<EmissionsRow>, FlightsError> {
    let reader = csv::Reader::from_path(path).map_err(|e| FlightsError::EmissionsReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    reader
        .into_deserialize()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FlightsError::EmissionsReadError {
            path: path.display().to_string(),
            source: e,
        })
}

use serde::{Deserialize, Serialize};

/// a row in the emissions CSV file carrying modeled fuel burn and CO2 for
/// a carrier/flight-number pair. joined (inner) against [`super::ScheduleRow`]
/// on that pair; rows with a missing CO2 estimate are dropped by the join.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmissionsRow {
    #[serde(rename = "CARRIER_CODE")]
    pub carrier: String,
    #[serde(rename = "FLIGHT_NUMBER")]
    pub flight_number: String,
    /// estimated total fuel burn for the leg, in tonnes.
    #[serde(rename = "ESTIMATED_FUEL_BURN_TOTAL_TONNES")]
    pub fuel_burn_tonnes: Option<f64>,
    /// estimated total CO2 for the leg, in tonnes.
    #[serde(rename = "ESTIMATED_CO2_TOTAL_TONNES")]
    pub co2_tonnes: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_missing_values_as_none() {
        let data = "\
CARRIER_CODE,FLIGHT_NUMBER,ESTIMATED_FUEL_BURN_TOTAL_TONNES,ESTIMATED_CO2_TOTAL_TONNES
BA,0117,21.4,67.5
AA,100,,
";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<EmissionsRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].co2_tonnes, Some(67.5));
        assert_eq!(rows[1].co2_tonnes, None);
        assert_eq!(rows[1].fuel_burn_tonnes, None);
    }
}

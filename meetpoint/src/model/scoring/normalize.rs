use crate::model::scoring::CandidateMetrics;
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

/// a candidate's raw metrics plus its min-max normalized columns, each in
/// [0, 1], lower is better.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NormalizedMetrics {
    #[serde(flatten)]
    pub metrics: CandidateMetrics,
    pub time_norm: f64,
    pub co2_norm: f64,
}

/// min-max normalizes one metric column. `(value - min) / (max - min)`;
/// when every value is equal (including the single-row case) the column
/// normalizes to 0 for every row, scoring the set as "no preference" on
/// that axis. non-finite values normalize to 0.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let (min, max) = match values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .minmax_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    {
        MinMaxResult::MinMax(min, max) => (min, max),
        MinMaxResult::OneElement(_) | MinMaxResult::NoElements => {
            return vec![0.0; values.len()];
        }
    };
    let range = max - min;
    if range == 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| if v.is_finite() { (v - min) / range } else { 0.0 })
        .collect()
}

/// attaches normalized time and CO2 columns to each candidate's metrics.
/// each column is normalized independently across the whole candidate set.
pub fn normalize(metrics: Vec<CandidateMetrics>) -> Vec<NormalizedMetrics> {
    let time: Vec<f64> = metrics.iter().map(|m| m.max_travel_hours).collect();
    let co2: Vec<f64> = metrics.iter().map(|m| m.total_co2_tonnes).collect();
    let time_norm = min_max_normalize(&time);
    let co2_norm = min_max_normalize(&co2);

    metrics
        .into_iter()
        .zip(time_norm)
        .zip(co2_norm)
        .map(|((metrics, time_norm), co2_norm)| NormalizedMetrics {
            metrics,
            time_norm,
            co2_norm,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn metrics(code: &str, hours: f64, co2: f64) -> CandidateMetrics {
        CandidateMetrics {
            code: code.to_string(),
            city_name: code.to_string(),
            max_travel_hours: hours,
            total_co2_tonnes: co2,
            attendee_travel_hours: BTreeMap::new(),
        }
    }

    #[test]
    fn test_output_in_unit_range() {
        let rows = vec![
            metrics("A", 2.0, 10.0),
            metrics("B", 8.0, 300.0),
            metrics("C", 5.0, 40.0),
        ];
        let normalized = normalize(rows);
        for row in &normalized {
            assert!((0.0..=1.0).contains(&row.time_norm));
            assert!((0.0..=1.0).contains(&row.co2_norm));
        }
        assert_eq!(normalized[0].time_norm, 0.0);
        assert_eq!(normalized[1].time_norm, 1.0);
        assert_eq!(normalized[1].co2_norm, 1.0);
    }

    #[test]
    fn test_uniform_column_normalizes_to_zero() {
        let rows = vec![
            metrics("A", 4.0, 7.0),
            metrics("B", 4.0, 7.0),
            metrics("C", 4.0, 7.0),
        ];
        for row in normalize(rows) {
            assert_eq!(row.time_norm, 0.0);
            assert_eq!(row.co2_norm, 0.0);
        }
    }

    #[test]
    fn test_single_candidate_normalizes_to_zero() {
        let normalized = normalize(vec![metrics("A", 11.0, 250.0)]);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].time_norm, 0.0);
        assert_eq!(normalized[0].co2_norm, 0.0);
    }

    #[test]
    fn test_non_finite_values_normalize_to_zero() {
        let values = vec![1.0, f64::NAN, 3.0];
        let normalized = min_max_normalize(&values);
        assert_eq!(normalized[0], 0.0);
        assert_eq!(normalized[1], 0.0);
        assert_eq!(normalized[2], 1.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(vec![]).is_empty());
        assert!(min_max_normalize(&[]).is_empty());
    }
}

use crate::model::scoring::NormalizedMetrics;
use serde::{Deserialize, Serialize};

/// user-supplied, non-negative criterion weights. weights need not sum to
/// one; a missing or zero weight excludes that criterion from the score
/// rather than splitting it evenly. `cost` is carried for callers that
/// supply cost data; no cost column exists in the current metrics, so it
/// contributes nothing today.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Weights {
    pub time: f64,
    pub co2: f64,
    #[serde(default)]
    pub cost: Option<f64>,
}

impl Weights {
    pub fn new(time: f64, co2: f64) -> Weights {
        Weights {
            time,
            co2,
            cost: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.time >= 0.0 && self.co2 >= 0.0 && self.cost.unwrap_or(0.0) >= 0.0
    }
}

/// a candidate with its composite score: the weighted sum of its normalized
/// columns. dimensionless, lower is better, and only comparable within the
/// candidate set it was computed against.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub normalized: NormalizedMetrics,
    pub composite_score: f64,
}

/// scores every candidate and picks the winner.
///
/// returns the full list sorted ascending by score plus the winning row.
/// the winner is the FIRST minimal row in input order, a deterministic
/// tie-break independent of the sort. empty input yields an empty list and
/// no winner, distinct from a winner scoring 0.
pub fn rank(
    normalized: Vec<NormalizedMetrics>,
    weights: &Weights,
) -> (Vec<RankedCandidate>, Option<RankedCandidate>) {
    let ranked: Vec<RankedCandidate> = normalized
        .into_iter()
        .map(|row| {
            let composite_score = row.time_norm * weights.time + row.co2_norm * weights.co2;
            RankedCandidate {
                normalized: row,
                composite_score,
            }
        })
        .collect();

    let mut winner: Option<RankedCandidate> = None;
    for row in &ranked {
        let better = match &winner {
            Some(current) => row.composite_score < current.composite_score,
            None => true,
        };
        if better {
            winner = Some(row.clone());
        }
    }

    let mut sorted = ranked;
    sorted.sort_by(|a, b| {
        a.composite_score
            .partial_cmp(&b.composite_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    (sorted, winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::scoring::CandidateMetrics;
    use std::collections::BTreeMap;

    fn row(code: &str, time_norm: f64, co2_norm: f64) -> NormalizedMetrics {
        NormalizedMetrics {
            metrics: CandidateMetrics {
                code: code.to_string(),
                city_name: code.to_string(),
                max_travel_hours: 0.0,
                total_co2_tonnes: 0.0,
                attendee_travel_hours: BTreeMap::new(),
            },
            time_norm,
            co2_norm,
        }
    }

    #[test]
    fn test_winner_has_minimum_score() {
        let rows = vec![row("A", 1.0, 0.2), row("B", 0.1, 0.1), row("C", 0.5, 0.9)];
        let (sorted, winner) = rank(rows, &Weights::new(0.5, 0.5));
        let winner = winner.unwrap();
        assert_eq!(winner.normalized.metrics.code, "B");
        assert_eq!(winner.composite_score, sorted[0].composite_score);
        let min = sorted
            .iter()
            .map(|r| r.composite_score)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(winner.composite_score, min);
    }

    #[test]
    fn test_single_candidate_wins_regardless_of_weights() {
        for weights in [Weights::new(0.0, 0.0), Weights::new(1.0, 0.0), Weights::new(0.2, 5.0)] {
            let (_, winner) = rank(vec![row("ONLY", 0.0, 0.0)], &weights);
            assert_eq!(winner.unwrap().normalized.metrics.code, "ONLY");
        }
    }

    #[test]
    fn test_tie_breaks_to_first_input_row() {
        let rows = vec![row("FIRST", 0.3, 0.3), row("SECOND", 0.3, 0.3)];
        let (_, winner) = rank(rows, &Weights::new(0.5, 0.5));
        assert_eq!(winner.unwrap().normalized.metrics.code, "FIRST");
    }

    #[test]
    fn test_zero_weight_excludes_criterion() {
        // A is terrible on CO2 but best on time; CO2 weight 0 ignores it
        let rows = vec![row("A", 0.0, 1.0), row("B", 1.0, 0.0)];
        let (_, winner) = rank(rows, &Weights::new(1.0, 0.0));
        assert_eq!(winner.unwrap().normalized.metrics.code, "A");
    }

    #[test]
    fn test_empty_input_has_no_winner() {
        let (sorted, winner) = rank(vec![], &Weights::new(0.5, 0.5));
        assert!(sorted.is_empty());
        assert!(winner.is_none());
    }

    #[test]
    fn test_weights_validity() {
        assert!(Weights::new(0.0, 0.0).is_valid());
        assert!(!Weights::new(-0.1, 0.5).is_valid());
    }
}

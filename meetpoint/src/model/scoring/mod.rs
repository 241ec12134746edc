mod metrics;
mod normalize;
mod rank;

pub use metrics::CandidateMetrics;
pub use normalize::{min_max_normalize, normalize, NormalizedMetrics};
pub use rank::{rank, RankedCandidate, Weights};

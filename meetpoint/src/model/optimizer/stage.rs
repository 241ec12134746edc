use std::fmt::Display;

/// progression of one optimization run. advances linearly to Done; Failed
/// is reachable from any stage on unrecoverable input errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizeStage {
    Init,
    GeoFilter,
    CostLookup,
    Normalize,
    Rank,
    Done,
    Failed,
}

impl Display for OptimizeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OptimizeStage::Init => "INIT",
            OptimizeStage::GeoFilter => "GEO_FILTER",
            OptimizeStage::CostLookup => "PER_CANDIDATE_COST_LOOKUP",
            OptimizeStage::Normalize => "NORMALIZE",
            OptimizeStage::Rank => "RANK",
            OptimizeStage::Done => "DONE",
            OptimizeStage::Failed => "FAILED",
        };
        write!(f, "{name}")
    }
}

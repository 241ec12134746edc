mod containment;
mod hull;

pub use containment::{filter_candidates, point_in_polygon, COINCIDENCE_TOLERANCE};
pub use hull::build_polygon;

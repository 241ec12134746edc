use crate::model::city::CandidatePool;
use crate::model::coordinate::Coordinate;

/// absolute tolerance, in lat/lon degrees, for vertex and edge coincidence.
pub const COINCIDENCE_TOLERANCE: f64 = 1e-10;

/// boundary-inclusive ray-casting containment test.
///
/// a point coincident with a polygon vertex or lying on an edge (within
/// [`COINCIDENCE_TOLERANCE`]) is inside. degenerate polygons of 0, 1 or 2
/// vertices contain only their own vertices.
pub fn point_in_polygon(p: &Coordinate, polygon: &[Coordinate]) -> bool {
    if polygon.is_empty() {
        return false;
    }

    let (x, y) = (p.lat, p.lon);

    for v in polygon {
        if (x - v.lat).abs() < COINCIDENCE_TOLERANCE && (y - v.lon).abs() < COINCIDENCE_TOLERANCE {
            return true;
        }
    }
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let (mut p1x, mut p1y) = (polygon[0].lat, polygon[0].lon);

    for i in 1..=polygon.len() {
        let v = &polygon[i % polygon.len()];
        let (p2x, p2y) = (v.lat, v.lon);

        // on-edge check before the crossing count
        let in_bbox = p1y.min(p2y) <= y
            && y <= p1y.max(p2y)
            && p1x.min(p2x) <= x
            && x <= p1x.max(p2x);
        if in_bbox && p1y != p2y {
            if p1x == p2x {
                if (x - p1x).abs() < COINCIDENCE_TOLERANCE {
                    return true;
                }
            } else {
                let slope = (p2y - p1y) / (p2x - p1x);
                let expected_x = p1x + (y - p1y) / slope;
                if (x - expected_x).abs() < COINCIDENCE_TOLERANCE {
                    return true;
                }
            }
        }

        // standard ray-casting crossing count. the half-open bound on y
        // keeps a ray through a vertex from double-counting.
        if y > p1y.min(p2y) && y <= p1y.max(p2y) && x <= p1x.max(p2x) && p1y != p2y {
            let xinters = (y - p1y) * (p2x - p1x) / (p2y - p1y) + p1x;
            if p1x == p2x || x <= xinters {
                inside = !inside;
            }
        }

        (p1x, p1y) = (p2x, p2y);
    }

    inside
}

/// every candidate whose coordinate tests inside-or-on the polygon, in pool
/// order. an empty result is a value, not an error; widening back to the
/// full table is the caller's policy.
pub fn filter_candidates(pool: &CandidatePool, polygon: &[Coordinate]) -> CandidatePool {
    CandidatePool::new(
        pool.iter()
            .filter(|city| point_in_polygon(&city.coord, polygon))
            .cloned()
            .collect(),
    )
}

use crate::model::coordinate::Coordinate;
use geo::{ConvexHull, MultiPoint};

/// builds the bounding polygon of a set of attendee locations.
///
/// fewer than three points are returned verbatim (no hull exists); exactly
/// three points are returned verbatim, including collinear triples; four or
/// more go through a planar 2-D convex hull on (lat, lon) treated as (x, y).
/// a degenerate hull (all points collinear) degrades to the original point
/// set unmodified. never errors.
pub fn build_polygon(points: &[Coordinate]) -> Vec<Coordinate> {
    if points.len() <= 3 {
        return points.to_vec();
    }

    let multipoint: MultiPoint<f64> = points.iter().map(|c| c.as_planar_point()).collect();
    let hull = multipoint.convex_hull();
    let exterior = hull.exterior();

    // exterior rings are closed (first vertex repeated); drop the closing
    // vertex. fewer than 3 distinct vertices means the hull collapsed.
    let mut vertices: Vec<Coordinate> = exterior
        .points()
        .map(Coordinate::from)
        .collect();
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }
    if vertices.len() < 3 {
        return points.to_vec();
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_than_three_points_verbatim() {
        assert!(build_polygon(&[]).is_empty());
        let one = vec![Coordinate::new(1.0, 2.0)];
        assert_eq!(build_polygon(&one), one);
        let two = vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)];
        assert_eq!(build_polygon(&two), two);
    }

    #[test]
    fn test_three_collinear_points_verbatim() {
        let collinear = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(2.0, 2.0),
        ];
        assert_eq!(build_polygon(&collinear), collinear);
    }

    #[test]
    fn test_hull_drops_interior_point() {
        // unit square plus its center
        let points = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(0.5, 0.5),
        ];
        let polygon = build_polygon(&points);
        assert_eq!(polygon.len(), 4);
        assert!(!polygon.contains(&Coordinate::new(0.5, 0.5)));
    }

    #[test]
    fn test_many_collinear_points_degrade_to_input() {
        let collinear: Vec<Coordinate> =
            (0..5).map(|i| Coordinate::new(i as f64, i as f64)).collect();
        assert_eq!(build_polygon(&collinear), collinear);
    }

    #[test]
    fn test_hull_is_not_closed() {
        let points = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 2.0),
            Coordinate::new(2.0, 2.0),
            Coordinate::new(2.0, 0.0),
        ];
        let polygon = build_polygon(&points);
        assert_eq!(polygon.len(), 4);
        assert_ne!(polygon.first(), polygon.last());
    }
}

//! Planar joint geometry
//!
//! Angles are measured in the image plane. Depth (z) never contributes.

use crate::Point2;

/// Angle at vertex `b` between the rays `b→a` and `b→c`, in degrees.
///
/// Each ray's direction comes from `atan2` of its y/x components; the
/// absolute difference is folded so the minor angle is reported:
/// - 0° = rays point the same way (fully folded joint)
/// - 180° = rays point opposite ways (fully extended joint)
///
/// Degenerate input is not special-cased. A neighbor that coincides with the
/// vertex has direction `atan2(0, 0) == 0`, so coincident points simply
/// measure against the +x axis; all three coincident yields 0.
pub fn angle_at(a: Point2, b: Point2, c: Point2) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let angle = radians.to_degrees().abs();

    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Point at `radius` from `vertex` such that
/// `angle_at(reference, vertex, point)` equals `degrees`.
///
/// The point is rotated counter-clockwise (in raw coordinates) from the
/// reference ray. `degrees` is expected in [0, 180].
pub fn place_at_angle(vertex: Point2, reference: Point2, degrees: f32, radius: f32) -> Point2 {
    let base = (reference.y - vertex.y).atan2(reference.x - vertex.x);
    let theta = base + degrees.to_radians();
    Point2::new(vertex.x + radius * theta.cos(), vertex.y + radius * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn test_straight_limb() {
        let angle = angle_at(p(0.0, 0.0), p(0.5, 0.0), p(1.0, 0.0));
        assert!((angle - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_right_angle() {
        let angle = angle_at(p(0.0, 0.0), p(0.5, 0.0), p(0.5, 0.5));
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_reflex_is_folded() {
        // Ray directions are +170° and -170°: raw difference 340°, minor angle 20°
        let b = p(0.0, 0.0);
        let a = p(-1.0, 0.176_327);
        let c = p(-1.0, -0.176_327);
        let angle = angle_at(a, b, c);
        assert!((angle - 20.0).abs() < 0.01, "expected minor angle, got {}", angle);
    }

    #[test]
    fn test_coincident_points_yield_zero() {
        let same = p(0.3, 0.3);
        assert_eq!(angle_at(same, same, same), 0.0);
    }

    #[test]
    fn test_coincident_neighbor_measures_against_x_axis() {
        let b = p(0.5, 0.5);
        // a collapses onto the vertex, c points straight down (+y)
        let angle = angle_at(b, b, p(0.5, 0.9));
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_place_at_angle() {
        let vertex = p(0.5, 0.5);
        let reference = p(0.5, 0.2);
        for target in [0.0f32, 30.0, 60.0, 89.0, 90.0, 145.0, 170.0, 180.0] {
            let placed = place_at_angle(vertex, reference, target, 0.25);
            let measured = angle_at(reference, vertex, placed);
            assert!(
                (measured - target).abs() < 0.01,
                "target {} measured {}",
                target,
                measured
            );
        }
    }
}

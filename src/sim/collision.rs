//! Circle overlap tests
//!
//! Everything in the field is a circle, so a collision is a squared-distance
//! comparison. The comparison is strict: touching edges do not collide.

use glam::Vec2;

/// True if two circles overlap.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}

/// Index of the first circle in `orbs` overlapping the given circle, if any.
///
/// Scans in slot order and stops at the first hit.
pub fn first_overlap<I>(center: Vec2, radius: f32, orbs: I) -> Option<usize>
where
    I: IntoIterator<Item = (Vec2, f32)>,
{
    orbs.into_iter()
        .position(|(pos, orb_radius)| circles_overlap(center, radius, pos, orb_radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concentric_overlap() {
        assert!(circles_overlap(Vec2::new(480.0, 432.0), 18.0, Vec2::new(480.0, 432.0), 20.0));
    }

    #[test]
    fn test_touching_is_not_overlap() {
        // Centers exactly 38 apart with radii 18 + 20
        assert!(!circles_overlap(Vec2::ZERO, 18.0, Vec2::new(38.0, 0.0), 20.0));
        assert!(circles_overlap(Vec2::ZERO, 18.0, Vec2::new(37.9, 0.0), 20.0));
    }

    #[test]
    fn test_first_overlap_short_circuits() {
        let orbs = [
            (Vec2::new(500.0, 0.0), 10.0),
            (Vec2::new(5.0, 0.0), 10.0),
            (Vec2::new(0.0, 5.0), 10.0),
        ];
        assert_eq!(first_overlap(Vec2::ZERO, 10.0, orbs), Some(1));
        assert_eq!(first_overlap(Vec2::new(-300.0, 0.0), 10.0, orbs), None);
    }
}

//! Box-vs-box collision detection
//!
//! A plain AABB overlap test on x and z, with a one-tick look-ahead on y for
//! the first body so a falling box is caught before it visibly penetrates the
//! one below it.

use super::body::Body;

/// Check whether `a` overlaps `b`, projecting `a` one tick ahead vertically
///
/// Only `a`'s vertical velocity is projected, so the test is not symmetric:
/// `intersects(a, b)` and `intersects(b, a)` can disagree. Callers pass the
/// moving body first (the falling body against the ground, the player against
/// an enemy).
pub fn intersects(a: &Body, b: &Body) -> bool {
    let a_bounds = a.bounds();
    let b_bounds = b.bounds();

    let x_overlap = a_bounds.right >= b_bounds.left && a_bounds.left <= b_bounds.right;
    let y_overlap =
        a_bounds.bottom + a.velocity.y <= b_bounds.top && a_bounds.top >= b_bounds.bottom;
    let z_overlap = a_bounds.front >= b_bounds.back && a_bounds.back <= b_bounds.front;

    x_overlap && y_overlap && z_overlap
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    #[test]
    fn test_full_overlap() {
        let a = Body::cube(1.0, Vec3::ZERO);
        let b = Body::cube(1.0, Vec3::ZERO);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_touching_faces_count() {
        let a = Body::cube(1.0, Vec3::ZERO);
        let b = Body::cube(1.0, Vec3::new(1.0, 0.0, 0.0));
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_separated_on_each_axis() {
        let a = Body::cube(1.0, Vec3::ZERO);
        assert!(!intersects(&a, &Body::cube(1.0, Vec3::new(1.5, 0.0, 0.0))));
        assert!(!intersects(&a, &Body::cube(1.0, Vec3::new(0.0, 1.5, 0.0))));
        assert!(!intersects(&a, &Body::cube(1.0, Vec3::new(0.0, 0.0, -1.5))));
    }

    #[test]
    fn test_look_ahead_catches_falling_body() {
        // a hovers 0.05 above b but will cross that gap this tick
        let a = Body::cube(1.0, Vec3::new(0.0, 1.05, 0.0)).with_velocity(Vec3::new(0.0, -0.1, 0.0));
        let b = Body::cube(1.0, Vec3::ZERO);
        assert!(intersects(&a, &b));

        let slow = Body::cube(1.0, Vec3::new(0.0, 1.05, 0.0)).with_velocity(Vec3::new(0.0, -0.01, 0.0));
        assert!(!intersects(&slow, &b));
    }

    #[test]
    fn test_asymmetric_arguments() {
        let a = Body::cube(1.0, Vec3::new(0.0, 1.05, 0.0)).with_velocity(Vec3::new(0.0, -0.1, 0.0));
        let b = Body::cube(1.0, Vec3::ZERO);

        // Projected `a` reaches `b`, but static `b` does not reach `a`
        assert!(intersects(&a, &b));
        assert!(!intersects(&b, &a));
    }

    proptest! {
        #[test]
        fn prop_coincident_bodies_intersect(
            size in 0.1f32..10.0,
            x in -50.0f32..50.0, y in -50.0f32..50.0, z in -50.0f32..50.0,
        ) {
            let pos = Vec3::new(x, y, z);
            let a = Body::cube(size, pos);
            let b = Body::cube(size, pos);
            prop_assert!(intersects(&a, &b));
        }

        #[test]
        fn prop_static_bodies_symmetric(
            ax in -5.0f32..5.0, ay in -5.0f32..5.0, az in -5.0f32..5.0,
            bx in -5.0f32..5.0, by in -5.0f32..5.0, bz in -5.0f32..5.0,
        ) {
            // With no vertical velocity the look-ahead vanishes and the test is symmetric
            let a = Body::cube(1.0, Vec3::new(ax, ay, az));
            let b = Body::cube(1.0, Vec3::new(bx, by, bz));
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }
    }
}

//! Convex-polygon collision detection in 2D (Separating Axis Theorem).
//!
//! Callers place their shapes into a shared frame (`Aff2`), hand two
//! `ConvexPolygon`s to `check_collision`, and decide themselves how to react
//! to the reported `Penetration` (`Response`).
//!
//! API Policy
//! - Pure functions over owned value types; no global state, no I/O.
//! - Precondition violations (fewer than three vertices, non-finite
//!   coordinates) are rejected when a polygon is built, never inside the test.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{
    check_collision, overlaps, penetration, Aff2, Collision, ConvexPolygon, Penetration, SatCfg,
};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_pair_radial, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{
        check_collision, check_collision_with, overlaps, penetration, Aabb, Aff2, Collision,
        ConvexPolygon, Penetration, PolygonError, Response, SatCfg,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn area_axis_aligned() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 2.5];
        assert!((parallelogram_area(a, b) - 2.5).abs() < 1e-12);
        assert!((parallelogram_area(b, a) + 2.5).abs() < 1e-12);
    }

    #[test]
    fn area_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let b = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        // Matches the 2x2 determinant of [a b].
        let expected = Mat2::from_columns(&[a, b]).determinant();
        assert!((parallelogram_area(a, b) - expected).abs() < 1e-12);
    }
}

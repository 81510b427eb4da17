//! Basic 2D types and tolerances used by the collision test.
//!
//! - `SatCfg`: centralizes the tolerances of the separating-axis loop.
//! - `Affine2`: 2D affine map used to place local shapes into world space.
//!
//! Code cross-refs: `sat::check_collision_with`, `polygon::ConvexPolygon::transformed`

use nalgebra::{Matrix2, Vector2};

/// Collision test configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SatCfg {
    /// Edges whose length is at or below this value yield no candidate axis.
    /// Negative values act as zero.
    pub eps_axis: f64,
    /// Extra gap still reported as contact. Zero keeps the plain inclusive
    /// interval check (`min_a <= max_b && min_b <= max_a`).
    pub contact_slack: f64,
}

impl Default for SatCfg {
    fn default() -> Self {
        Self {
            eps_axis: 1e-12,
            contact_slack: 0.0,
        }
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }
    /// Counterclockwise rotation by `theta` radians about the origin.
    #[inline]
    pub fn rotation(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vector2::zeros(),
        }
    }
    /// Model transform of an entity: scale, then rotate, then translate.
    ///
    /// Equivalent to `translate(position) * rotate(rotation) * scale(scale)`
    /// applied to local vertices.
    pub fn from_pose(position: Vector2<f64>, rotation: f64, scale: Vector2<f64>) -> Self {
        let r = Self::rotation(rotation).m;
        Self {
            m: r * Matrix2::from_diagonal(&scale),
            t: position,
        }
    }
    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }
    /// `self ∘ other`: apply `other` first.
    #[inline]
    pub fn compose(&self, other: &Affine2) -> Affine2 {
        Affine2 {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn pose_matches_composed_steps() {
        let pose = Affine2::from_pose(vector![1.0, -2.0], 0.7, vector![2.0, 0.5]);
        let steps = Affine2::translation(vector![1.0, -2.0])
            .compose(&Affine2::rotation(0.7))
            .compose(&Affine2 {
                m: Matrix2::new(2.0, 0.0, 0.0, 0.5),
                t: Vector2::zeros(),
            });
        let p = vector![0.3, -0.4];
        assert!((pose.apply(p) - steps.apply(p)).norm() < 1e-12);
        assert!(pose.is_orientation_preserving());
    }

    #[test]
    fn inverse_round_trip_and_reflection() {
        let f = Affine2::from_pose(vector![0.5, 0.25], -1.1, vector![1.5, 3.0]);
        let g = f.inverse().unwrap();
        let p = vector![-2.0, 7.0];
        assert!((g.apply(f.apply(p)) - p).norm() < 1e-12);
        let mirror = Affine2::from_pose(Vector2::zeros(), 0.0, vector![-1.0, 1.0]);
        assert!(!mirror.is_orientation_preserving());
        assert_eq!(Affine2::default(), Affine2::identity());
    }
}

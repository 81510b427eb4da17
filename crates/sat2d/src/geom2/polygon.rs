//! Owned convex polygon in vertex representation (`ConvexPolygon`).
//!
//! Purpose
//! - Geometry-only value handed to the collision test: an ordered vertex list,
//!   already placed in the shared (world) frame by a transform step.
//! - Construction validates the contract once (≥ 3 finite vertices), so the
//!   test itself never has to.
//!
//! Assumptions and conventions
//! - Convexity and non-zero area are the caller's responsibility; `is_convex`
//!   is available as a check but is not enforced.
//! - Either winding is accepted. Constructors in this module (`rect`,
//!   `regular`, `from_points_hull`) produce CCW order.
//!
//! Code cross-refs: `sat::check_collision`, `types::Affine2`, `util::convex_hull`

use std::fmt;

use nalgebra::Vector2;

use super::aabb::Aabb;
use super::types::Affine2;
use super::util::{area_centroid, convex_hull, signed_area, turn, vertex_mean};

/// Contract violations rejected by `ConvexPolygon::new`.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    TooFewVertices { got: usize },
    NonFiniteVertex { index: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { got } => write!(
                f,
                "polygon needs at least {} vertices, got {got}",
                ConvexPolygon::MIN_VERTICES
            ),
            Self::NonFiniteVertex { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for PolygonError {}

/// Convex polygon as an ordered, owned vertex list.
///
/// Invariants:
/// - At least `MIN_VERTICES` vertices.
/// - All coordinates finite. `new` checks this; `rect` and `translated` expect
///   finite arguments and only check them in debug builds.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Vector2<f64>>,
}

impl ConvexPolygon {
    pub const MIN_VERTICES: usize = 3;

    /// Validate and wrap an ordered vertex list.
    pub fn new(vertices: Vec<Vector2<f64>>) -> Result<Self, PolygonError> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(PolygonError::TooFewVertices {
                got: vertices.len(),
            });
        }
        if let Some(index) = vertices
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(PolygonError::NonFiniteVertex { index });
        }
        Ok(Self { vertices })
    }

    /// Wrap vertices built from already-valid data.
    fn from_finite(vertices: Vec<Vector2<f64>>) -> Self {
        debug_assert!(
            vertices.iter().all(|p| p.x.is_finite() && p.y.is_finite()),
            "non-finite vertex"
        );
        Self { vertices }
    }

    /// Convex hull of a point cloud (CCW). `None` if the hull has fewer than three vertices.
    pub fn from_points_hull(points: &[Vector2<f64>]) -> Option<Self> {
        let hull = convex_hull(points)?;
        Self::new(hull).ok()
    }

    /// Axis-aligned rectangle (CCW, starting at the lower-left corner).
    pub fn rect(center: Vector2<f64>, half_extents: Vector2<f64>) -> Self {
        let (hx, hy) = (half_extents.x.abs(), half_extents.y.abs());
        Self::from_finite(vec![
            center + Vector2::new(-hx, -hy),
            center + Vector2::new(hx, -hy),
            center + Vector2::new(hx, hy),
            center + Vector2::new(-hx, hy),
        ])
    }

    /// Regular `n`-gon (CCW) with circumradius `radius`; vertex 0 sits at angle `phase`.
    pub fn regular(
        center: Vector2<f64>,
        radius: f64,
        n: usize,
        phase: f64,
    ) -> Result<Self, PolygonError> {
        let delta = std::f64::consts::TAU / (n as f64);
        let vertices = (0..n)
            .map(|k| {
                let th = phase + (k as f64) * delta;
                center + Vector2::new(th.cos(), th.sin()) * radius
            })
            .collect();
        Self::new(vertices)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edge vectors `v[i+1] - v[i]`, the last one wrapping back to `v[0]`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Vector2<f64>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (i, self.vertices[(i + 1) % n] - self.vertices[i]))
    }

    /// Shoelace area; positive for CCW order.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Area centroid, falling back to the vertex mean for (near) zero area.
    pub fn centroid(&self) -> Vector2<f64> {
        area_centroid(&self.vertices).unwrap_or_else(|| vertex_mean(&self.vertices))
    }

    /// Convexity check: all turns share one sign (collinear runs allowed).
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        let mut sign = 0.0_f64;
        for i in 0..n {
            let t = turn(
                self.vertices[i],
                self.vertices[(i + 1) % n],
                self.vertices[(i + 2) % n],
            );
            if t.abs() <= 1e-12 {
                continue;
            }
            if sign == 0.0 {
                sign = t.signum();
            } else if t.signum() != sign {
                return false;
            }
        }
        sign != 0.0
    }

    /// Tight axis-aligned bounds.
    pub fn aabb(&self) -> Aabb {
        let first = self.vertices[0];
        let (min, max) = self
            .vertices
            .iter()
            .skip(1)
            .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Aabb { min, max }
    }

    pub fn translated(&self, t: Vector2<f64>) -> Self {
        Self::from_finite(self.vertices.iter().map(|p| p + t).collect())
    }

    /// Image under an affine map. `None` if the map is singular (would collapse the shape).
    ///
    /// Reflections reverse the winding; the collision test does not care.
    pub fn transformed(&self, f: &Affine2) -> Option<Self> {
        f.inverse()?;
        let vertices: Vec<_> = self.vertices.iter().map(|p| f.apply(*p)).collect();
        Self::new(vertices).ok()
    }

    /// Same vertices in reverse order (flips the winding).
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

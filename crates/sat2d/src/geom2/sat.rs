//! Separating Axis Theorem test for two convex polygons.
//!
//! Purpose
//! - Decide whether two convex polygons in a shared frame overlap and, if so,
//!   report the penetration along the axis of least overlap.
//!
//! Model
//! - Candidate axes are the edge perpendiculars `(e.y, -e.x)` of A (edge order),
//!   then of B. Each axis is normalized; edges no longer than `SatCfg::eps_axis`
//!   are skipped, and zero-length edges are skipped for any threshold.
//! - Interval overlap is inclusive: touching shapes count as overlapping with
//!   depth 0. The first separating axis ends the test.
//! - Depth on an axis is `min(max_a, max_b) - max(min_a, min_b)`. The global
//!   minimum over all axes is reported; ties keep the earlier axis.
//! - Sign: the reported axis points from B toward A, decided by the midpoints
//!   of the projected intervals (the edge orientation is kept when they
//!   coincide). Moving A by `Penetration::vector` pushes it away from B.
//!
//! Caveat
//! - When one interval contains the other, the depth is the shorter interval's
//!   length, which can be less than the translation needed to separate. The
//!   reported vector is an estimate, not an exact minimum translation vector:
//!   pushing A by it separates partial overlaps, not enclosed shapes.
//!
//! Code cross-refs: `polygon::ConvexPolygon`, `types::SatCfg`, `response::Response`

use nalgebra::Vector2;

use super::polygon::{ConvexPolygon, PolygonError};
use super::types::SatCfg;

/// Closed scalar interval `[min, max]` (projection of a vertex set onto an axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Project `vertices` onto `axis` (dot products).
    pub fn project(vertices: &[Vector2<f64>], axis: Vector2<f64>) -> Self {
        vertices.iter().fold(
            Interval {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |acc, v| {
                let s = v.dot(&axis);
                Interval {
                    min: acc.min.min(s),
                    max: acc.max.max(s),
                }
            },
        )
    }
    /// Inclusive overlap check, widened by `slack`.
    #[inline]
    pub fn overlaps_eps(&self, other: &Interval, slack: f64) -> bool {
        self.min <= other.max + slack && other.min <= self.max + slack
    }
    /// Signed overlap length; negative when the intervals are apart.
    #[inline]
    pub fn overlap(&self, other: &Interval) -> f64 {
        self.max.min(other.max) - self.min.max(other.min)
    }
    /// Gap between the intervals; positive when apart, `<= 0` when they touch or overlap.
    #[inline]
    pub fn gap(&self, other: &Interval) -> f64 {
        (other.min - self.max).max(self.min - other.max)
    }
    #[inline]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }
}

/// Which argument of the test an axis came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    A,
    B,
}

/// Edge that produced an axis: `edge` is the index of its first vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisSource {
    pub shape: Shape,
    pub edge: usize,
}

/// Penetration estimate along the axis of least overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Penetration {
    /// `depth * axis`: translation that pushes A away from B.
    pub vector: Vector2<f64>,
    /// Overlap length on the axis (`>= 0`).
    pub depth: f64,
    /// Unit axis, pointing from B toward A.
    pub axis: Vector2<f64>,
    pub source: AxisSource,
}

/// Outcome of one test: `(overlaps, penetration)`.
///
/// `penetration` is `Some` exactly when `overlaps` is true.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collision {
    pub overlaps: bool,
    pub penetration: Option<Penetration>,
}

impl Collision {
    #[inline]
    pub fn separated() -> Self {
        Self {
            overlaps: false,
            penetration: None,
        }
    }
    /// Penetration vector, or zero when separated.
    #[inline]
    pub fn penetration_vector(&self) -> Vector2<f64> {
        self.penetration
            .map(|p| p.vector)
            .unwrap_or_else(Vector2::zeros)
    }
}

impl From<Option<Penetration>> for Collision {
    fn from(penetration: Option<Penetration>) -> Self {
        Self {
            overlaps: penetration.is_some(),
            penetration,
        }
    }
}

/// Unit edge normals of `poly`, tagged with their source edge.
fn axes(
    poly: &ConvexPolygon,
    shape: Shape,
    eps_axis: f64,
) -> impl Iterator<Item = (AxisSource, Vector2<f64>)> + '_ {
    // A negative or NaN threshold still has to drop zero-length edges.
    let eps_axis = eps_axis.max(0.0);
    poly.edges().filter_map(move |(edge, e)| {
        let n = Vector2::new(e.y, -e.x);
        let len = n.norm();
        // Also rejects NaN lengths.
        if !(len > eps_axis) {
            return None;
        }
        Some((AxisSource { shape, edge }, n / len))
    })
}

fn candidate_axes<'a>(
    a: &'a ConvexPolygon,
    b: &'a ConvexPolygon,
    cfg: &SatCfg,
) -> impl Iterator<Item = (AxisSource, Vector2<f64>)> + 'a {
    axes(a, Shape::A, cfg.eps_axis).chain(axes(b, Shape::B, cfg.eps_axis))
}

/// SAT test with explicit tolerances; `None` when some axis separates the polygons.
///
/// Also `None` when neither polygon has a usable (non-degenerate) edge.
pub fn penetration_with(
    a: &ConvexPolygon,
    b: &ConvexPolygon,
    cfg: &SatCfg,
) -> Option<Penetration> {
    let mut best: Option<Penetration> = None;
    for (source, axis) in candidate_axes(a, b, cfg) {
        let ia = Interval::project(a.vertices(), axis);
        let ib = Interval::project(b.vertices(), axis);
        if !ia.overlaps_eps(&ib, cfg.contact_slack) {
            return None;
        }
        // Within the contact slack the raw overlap may be negative.
        let depth = ia.overlap(&ib).max(0.0);
        if best.as_ref().is_none_or(|p| depth < p.depth) {
            let n = if ia.midpoint() < ib.midpoint() {
                -axis
            } else {
                axis
            };
            best = Some(Penetration {
                vector: n * depth,
                depth,
                axis: n,
                source,
            });
        }
    }
    best
}

/// SAT test with default tolerances; `None` when the polygons are separated.
#[inline]
pub fn penetration(a: &ConvexPolygon, b: &ConvexPolygon) -> Option<Penetration> {
    penetration_with(a, b, &SatCfg::default())
}

/// `CheckCollision(A, B) -> (overlaps, penetration)` with explicit tolerances.
#[inline]
pub fn check_collision_with(a: &ConvexPolygon, b: &ConvexPolygon, cfg: &SatCfg) -> Collision {
    penetration_with(a, b, cfg).into()
}

/// `CheckCollision(A, B) -> (overlaps, penetration)` with default tolerances.
#[inline]
pub fn check_collision(a: &ConvexPolygon, b: &ConvexPolygon) -> Collision {
    check_collision_with(a, b, &SatCfg::default())
}

/// Boolean-only view of `check_collision`.
#[inline]
pub fn overlaps(a: &ConvexPolygon, b: &ConvexPolygon) -> bool {
    penetration(a, b).is_some()
}

/// Validate raw vertex lists, then run `check_collision`.
pub fn check_collision_points(
    a: &[Vector2<f64>],
    b: &[Vector2<f64>],
) -> Result<Collision, PolygonError> {
    let a = ConvexPolygon::new(a.to_vec())?;
    let b = ConvexPolygon::new(b.to_vec())?;
    Ok(check_collision(&a, &b))
}

/// Largest interval gap over all candidate axes.
///
/// Positive: separated by at least that distance along some axis.
/// `<= 0`: no axis separates (overlap or contact). `None` without usable axes.
pub fn max_separation(a: &ConvexPolygon, b: &ConvexPolygon, cfg: &SatCfg) -> Option<f64> {
    candidate_axes(a, b, cfg)
        .map(|(_, axis)| {
            let ia = Interval::project(a.vertices(), axis);
            let ib = Interval::project(b.vertices(), axis);
            ia.gap(&ib)
        })
        .fold(None, |acc: Option<f64>, g| Some(acc.map_or(g, |m| m.max(g))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square(cx: f64, cy: f64, h: f64) -> ConvexPolygon {
        ConvexPolygon::rect(vector![cx, cy], vector![h, h])
    }

    #[test]
    fn projection_interval() {
        let sq = square(1.0, 0.0, 0.5);
        let i = Interval::project(sq.vertices(), vector![1.0, 0.0]);
        assert_eq!(i, Interval { min: 0.5, max: 1.5 });
        let j = Interval { min: 1.5, max: 3.0 };
        assert!(i.overlaps_eps(&j, 0.0));
        assert_eq!(i.overlap(&j), 0.0);
        assert_eq!(i.gap(&j), 0.0);
        let k = Interval { min: 2.0, max: 3.0 };
        assert!(!i.overlaps_eps(&k, 0.0));
        assert!(i.overlaps_eps(&k, 0.5));
        assert!((i.gap(&k) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn axes_skip_degenerate_edges() {
        let p = ConvexPolygon::new(vec![
            vector![0.0, 0.0],
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
        ])
        .unwrap();
        let got: Vec<_> = axes(&p, Shape::A, 1e-12).map(|(s, _)| s.edge).collect();
        assert_eq!(got, vec![1, 2, 3]);
        for (_, n) in axes(&p, Shape::A, 1e-12) {
            assert!((n.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn negative_eps_axis_still_skips_zero_edges() {
        let p = ConvexPolygon::new(vec![
            vector![0.0, 0.0],
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
        ])
        .unwrap();
        for eps_axis in [-1.0, f64::NAN] {
            let cfg = SatCfg {
                eps_axis,
                ..SatCfg::default()
            };
            let got: Vec<_> = axes(&p, Shape::A, cfg.eps_axis).map(|(s, _)| s.edge).collect();
            assert_eq!(got, vec![1, 2, 3]);
            let c = check_collision_with(&p, &p, &cfg);
            assert!(c.overlaps);
            assert!(c.penetration.unwrap().axis.iter().all(|x| x.is_finite()));
        }
    }

    #[test]
    fn point_polygons_have_no_axes() {
        let pt = ConvexPolygon::new(vec![vector![1.0, 1.0]; 3]).unwrap();
        assert!(penetration(&pt, &pt).is_none());
        assert!(max_separation(&pt, &pt, &SatCfg::default()).is_none());
    }

    #[test]
    fn collision_struct_mirrors_option() {
        let a = square(0.0, 0.0, 0.5);
        let far = square(10.0, 10.0, 0.5);
        let c = check_collision(&a, &far);
        assert_eq!(c, Collision::separated());
        assert_eq!(c.penetration_vector(), Vector2::zeros());
        let hit = check_collision(&a, &square(0.5, 0.0, 0.5));
        assert!(hit.overlaps);
        assert!(hit.penetration.is_some());
    }

    #[test]
    fn raw_points_are_validated() {
        let a = [vector![0.0, 0.0], vector![1.0, 0.0]];
        let b = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        assert_eq!(
            check_collision_points(&a, &b),
            Err(PolygonError::TooFewVertices { got: 2 })
        );
        assert!(check_collision_points(&b, &b).unwrap().overlaps);
    }

    #[test]
    fn max_separation_sign() {
        let cfg = SatCfg::default();
        let a = square(0.0, 0.0, 0.5);
        let gap = max_separation(&a, &square(3.0, 0.0, 0.5), &cfg).unwrap();
        assert!((gap - 2.0).abs() < 1e-12);
        let inside = max_separation(&a, &square(0.25, 0.0, 0.5), &cfg).unwrap();
        assert!(inside < 0.0);
    }
}

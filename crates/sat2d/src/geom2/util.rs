use nalgebra::Vector2;

use crate::parallelogram_area;

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// Collinear points are dropped. Returns `None` for fewer than two distinct points.
pub fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    if points.len() < 2 {
        return None;
    }
    let mut pts: Vec<_> = points
        .iter()
        .copied()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 2 {
        return None;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Some(hull)
}

/// Orientation of the turn `a → b → c` (positive for a left turn).
#[inline]
pub(crate) fn turn(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    parallelogram_area(b - a, c - a)
}

/// Shoelace signed area (positive for CCW vertex order).
pub(crate) fn signed_area(verts: &[Vector2<f64>]) -> f64 {
    let n = verts.len();
    let mut twice = 0.0;
    for i in 0..n {
        twice += parallelogram_area(verts[i], verts[(i + 1) % n]);
    }
    0.5 * twice
}

/// Polygon area centroid; `None` for fewer than three vertices or (near) zero area.
pub(crate) fn area_centroid(verts: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if verts.len() < 3 {
        return None;
    }
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        let cross = parallelogram_area(p, q);
        a += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
}

/// Arithmetic mean of the vertices.
pub(crate) fn vertex_mean(verts: &[Vector2<f64>]) -> Vector2<f64> {
    if verts.is_empty() {
        return Vector2::zeros();
    }
    verts.iter().fold(Vector2::zeros(), |acc, p| acc + p) / verts.len() as f64
}

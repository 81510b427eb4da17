//! Axis-aligned boxes: exact, cheap overlap test for unrotated entities.

use nalgebra::Vector2;

use super::polygon::ConvexPolygon;

/// Closed axis-aligned box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Lower-left corner.
    pub min: Vector2<f64>,
    /// Upper-right corner.
    pub max: Vector2<f64>,
}

impl Aabb {
    /// Box spanned by two opposite corners (any order).
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self {
            min: p1.inf(&p2),
            max: p1.sup(&p2),
        }
    }

    /// Box from its center and full size (width, height).
    pub fn from_center_size(center: Vector2<f64>, size: Vector2<f64>) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vector2<f64> {
        self.max - self.min
    }

    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x <= self.max.x && p.y <= self.max.y
    }

    /// Inclusive overlap test (shared edges count).
    pub fn intersects(&self, b: &Aabb) -> bool {
        let a = self;
        let x = f64::abs((a.min.x + a.max.x) - (b.min.x + b.max.x))
            <= (a.max.x - a.min.x + b.max.x - b.min.x);
        let y = f64::abs((a.min.y + a.max.y) - (b.min.y + b.max.y))
            <= (a.max.y - a.min.y + b.max.y - b.min.y);
        x && y
    }

    /// Per-axis overlap lengths `(dx, dy)` when the boxes intersect.
    pub fn overlap_depths(&self, b: &Aabb) -> Option<Vector2<f64>> {
        if !self.intersects(b) {
            return None;
        }
        let lo = self.min.sup(&b.min);
        let hi = self.max.inf(&b.max);
        Some(hi - lo)
    }

    /// CCW rectangle, ready for the SAT test.
    pub fn to_polygon(&self) -> ConvexPolygon {
        ConvexPolygon::rect(self.center(), self.size() * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn center_size_round_trip() {
        let b = Aabb::from_center_size(vector![1.0, 2.0], vector![4.0, 2.0]);
        assert_eq!(b.min, vector![-1.0, 1.0]);
        assert_eq!(b.max, vector![3.0, 3.0]);
        assert_eq!(b.center(), vector![1.0, 2.0]);
        assert_eq!(b.size(), vector![4.0, 2.0]);
        assert_eq!(Aabb::new(b.max, b.min), b);
    }

    #[test]
    fn paddle_and_ball() {
        let paddle = Aabb::from_center_size(vector![-1.5, 0.0], vector![0.1, 0.6]);
        let ball = Aabb::from_center_size(vector![-1.42, 0.2], vector![0.1, 0.1]);
        assert!(paddle.intersects(&ball));
        let d = paddle.overlap_depths(&ball).unwrap();
        assert!((d.x - 0.02).abs() < 1e-12);
        assert!((d.y - 0.1).abs() < 1e-12);
        let miss = Aabb::from_center_size(vector![-1.0, 0.0], vector![0.1, 0.1]);
        assert!(!paddle.intersects(&miss));
        assert!(paddle.overlap_depths(&miss).is_none());
    }

    #[test]
    fn agrees_with_polygon_test() {
        let a = Aabb::new(vector![0.0, 0.0], vector![1.0, 1.0]);
        let b = Aabb::new(vector![0.5, 0.5], vector![2.0, 2.0]);
        let c = Aabb::new(vector![1.5, 0.0], vector![2.0, 1.0]);
        let (pa, pb, pc) = (a.to_polygon(), b.to_polygon(), c.to_polygon());
        assert_eq!(a.intersects(&b), crate::geom2::overlaps(&pa, &pb));
        assert_eq!(a.intersects(&c), crate::geom2::overlaps(&pa, &pc));
        assert_eq!(pa.aabb(), a);
    }
}

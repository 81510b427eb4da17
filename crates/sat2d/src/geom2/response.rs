//! Turning a penetration into displacements for the two bodies.
//!
//! The test only reports geometry; who moves, and by how much, is the caller's
//! choice. `Response` names the usual choices so call sites stop hand-rolling
//! signs and factors.

use nalgebra::Vector2;

use super::sat::Penetration;

/// How to distribute a penetration between body A and body B.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Response {
    /// A moves by `r * v`, B by `-(1 - r) * v`; `r` is clamped to `[0, 1]`.
    Split(f64),
    /// Only A moves (B is static, e.g. a wall or tile).
    MoveFirst,
    /// Only B moves.
    MoveSecond,
}

impl Default for Response {
    fn default() -> Self {
        Response::Split(0.5)
    }
}

impl Response {
    /// Displacements `(for_a, for_b)` that resolve `p` along its axis.
    pub fn translations(&self, p: &Penetration) -> (Vector2<f64>, Vector2<f64>) {
        let v = p.vector;
        match *self {
            Response::Split(r) => {
                let r = if r.is_nan() { 0.5 } else { r.clamp(0.0, 1.0) };
                (v * r, -v * (1.0 - r))
            }
            Response::MoveFirst => (v, Vector2::zeros()),
            Response::MoveSecond => (Vector2::zeros(), -v),
        }
    }
}

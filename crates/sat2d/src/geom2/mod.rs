//! 2D convex polygons and the separating-axis collision test.
//!
//! Purpose
//! - Provide one owned, validated polygon value (`ConvexPolygon`) and a pure
//!   SAT test over pairs of them (`check_collision`, `penetration`, `overlaps`).
//! - Keep placement (`Aff2`) and collision response (`Response`) as separate,
//!   explicit steps around the test.
//!
//! Code cross-refs: `ConvexPolygon`, `Penetration`, `SatCfg`, `Aff2`, `Aabb`

pub mod aabb;
pub mod polygon;
pub mod rand;
pub mod response;
pub mod sat;
mod types;
mod util;

pub use aabb::Aabb;
pub use polygon::{ConvexPolygon, PolygonError};
pub use response::Response;
pub use sat::{
    check_collision, check_collision_points, check_collision_with, max_separation, overlaps,
    penetration, penetration_with, AxisSource, Collision, Interval, Penetration, Shape,
};
pub use types::{Affine2 as Aff2, SatCfg};
pub use util::convex_hull;

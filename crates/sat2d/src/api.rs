//! Curated API surface for the demos and the CLI.
//!
//! Prefer these re-exports over deep module paths so call sites stay stable
//! while the internal layout of `geom2` evolves.

// Shapes and placement
pub use crate::geom2::{convex_hull, Aabb, Aff2, ConvexPolygon, PolygonError};
// Collision test
pub use crate::geom2::{
    check_collision, check_collision_points, check_collision_with, max_separation, overlaps,
    penetration, penetration_with, AxisSource, Collision, Interval, Penetration, SatCfg, Shape,
};
// Response
pub use crate::geom2::Response;
// Random polygons
pub use crate::geom2::rand::{
    draw_pair_radial, draw_polygon_radial, RadialCfg, ReplayToken as PolygonReplay, VertexCount,
};

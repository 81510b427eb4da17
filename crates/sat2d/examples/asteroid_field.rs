//! One collision tick of an asteroid field, caller side.
//!
//! Usage:
//!   cargo run -p sat2d --example asteroid_field -- [seed]
//!
//! Places a ship and a few random asteroids with model transforms, scans all
//! pairs once, and pushes overlapping asteroids apart by half the penetration
//! each. The pair scan and the response policy live here, not in the library.

use sat2d::prelude::*;

struct Body {
    name: String,
    shape: ConvexPolygon,
    response: Response,
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2018);

    let ship_local = ConvexPolygon::new(vec![
        Vec2::new(-0.05, -0.05),
        Vec2::new(0.05, -0.05),
        Vec2::new(0.0, 0.08),
    ])
    .expect("triangle");
    let mut bodies = vec![Body {
        name: "ship".to_string(),
        shape: ship_local
            .transformed(&Aff2::from_pose(Vec2::zeros(), 0.4, Vec2::new(1.0, 1.0)))
            .expect("invertible pose"),
        // The ship does not get pushed; it takes damage instead.
        response: Response::MoveSecond,
    }];

    let cfg = RadialCfg {
        base_radius: 0.15,
        ..RadialCfg::default()
    };
    for index in 0..6 {
        let Some(local) = draw_polygon_radial(cfg, ReplayToken { seed, index }) else {
            continue;
        };
        let angle = index as f64;
        let pose = Aff2::from_pose(
            Vec2::new(0.2 * angle.cos(), 0.2 * angle.sin()),
            angle,
            Vec2::new(1.0, 1.0),
        );
        if let Some(shape) = local.transformed(&pose) {
            bodies.push(Body {
                name: format!("asteroid{index}"),
                shape,
                response: Response::default(),
            });
        }
    }

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let Some(p) = penetration(&bodies[i].shape, &bodies[j].shape) else {
                continue;
            };
            let (da, db) = bodies[i].response.translations(&p);
            println!(
                "{} x {}: depth={:.4} push=({:.4}, {:.4})",
                bodies[i].name, bodies[j].name, p.depth, p.vector.x, p.vector.y
            );
            bodies[i].shape = bodies[i].shape.translated(da);
            bodies[j].shape = bodies[j].shape.translated(db);
        }
    }
}

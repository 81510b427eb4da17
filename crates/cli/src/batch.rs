//! Polygon-pair inputs and per-pair results for the `check` and `batch` commands.
//!
//! Input formats
//! - JSON: `[{ "id": "p0", "a": [[x, y], ...], "b": [[x, y], ...] }, ...]` (`id` optional).
//! - CSV (long format): columns `pair,shape,x,y`; `shape` is `a` or `b`; vertex
//!   order is row order within each (pair, shape) group.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use sat2d::api::{check_collision_with, Collision, ConvexPolygon, SatCfg};
use sat2d::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One pair of polygons as read from an input file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PairInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub a: Vec<[f64; 2]>,
    pub b: Vec<[f64; 2]>,
}

/// Outcome for one pair; `error` is set when a polygon violates the input contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    pub id: String,
    pub overlaps: bool,
    pub penetration: Option<[f64; 2]>,
    pub depth: Option<f64>,
    pub axis: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PairResult {
    fn from_collision(id: String, c: &Collision) -> Self {
        let p = c.penetration;
        Self {
            id,
            overlaps: c.overlaps,
            penetration: p.map(|p| [p.vector.x, p.vector.y]),
            depth: p.map(|p| p.depth),
            axis: p.map(|p| [p.axis.x, p.axis.y]),
            error: None,
        }
    }

    fn invalid(id: String, err: impl std::fmt::Display) -> Self {
        Self {
            id,
            overlaps: false,
            penetration: None,
            depth: None,
            axis: None,
            error: Some(err.to_string()),
        }
    }
}

/// Counts logged after a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub pairs: usize,
    pub overlaps: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn of(results: &[PairResult]) -> Self {
        Self {
            pairs: results.len(),
            overlaps: results.iter().filter(|r| r.overlaps).count(),
            invalid: results.iter().filter(|r| r.error.is_some()).count(),
        }
    }
}

fn to_points(raw: &[[f64; 2]]) -> Vec<Vec2<f64>> {
    raw.iter().map(|&[x, y]| Vec2::new(x, y)).collect()
}

/// Parse a polygon literal `x,y;x,y;...` (whitespace ignored).
pub fn parse_points(s: &str) -> Result<Vec<[f64; 2]>> {
    s.split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| -> Result<[f64; 2]> {
            let (x, y) = chunk
                .split_once(',')
                .with_context(|| format!("expected `x,y`, got `{chunk}`"))?;
            let x: f64 = x.trim().parse().with_context(|| format!("bad x in `{chunk}`"))?;
            let y: f64 = y.trim().parse().with_context(|| format!("bad y in `{chunk}`"))?;
            Ok([x, y])
        })
        .collect()
}

/// Run the collision test on one pair. Contract violations become an error entry.
pub fn evaluate(index: usize, pair: &PairInput, cfg: &SatCfg) -> PairResult {
    let id = pair.id.clone().unwrap_or_else(|| index.to_string());
    let a = match ConvexPolygon::new(to_points(&pair.a)) {
        Ok(a) => a,
        Err(err) => {
            tracing::warn!(id, shape = "a", %err, "invalid polygon");
            return PairResult::invalid(id, format!("a: {err}"));
        }
    };
    let b = match ConvexPolygon::new(to_points(&pair.b)) {
        Ok(b) => b,
        Err(err) => {
            tracing::warn!(id, shape = "b", %err, "invalid polygon");
            return PairResult::invalid(id, format!("b: {err}"));
        }
    };
    if !(a.is_convex() && b.is_convex()) {
        tracing::warn!(id, "non-convex input; result is not meaningful");
    }
    PairResult::from_collision(id, &check_collision_with(&a, &b, cfg))
}

pub fn evaluate_all(pairs: &[PairInput], cfg: &SatCfg) -> Vec<PairResult> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, p)| evaluate(i, p, cfg))
        .collect()
}

/// Read pairs from `.json` or `.csv`, chosen by extension.
pub fn read_pairs(path: &Path) -> Result<Vec<PairInput>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => read_pairs_json(path),
        Some("csv") => read_pairs_csv(path),
        other => bail!(
            "unsupported input format {:?} for {} (expected .json or .csv)",
            other.unwrap_or(""),
            path.display()
        ),
    }
}

fn read_pairs_json(path: &Path) -> Result<Vec<PairInput>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn read_pairs_csv(path: &Path) -> Result<Vec<PairInput>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let pair = df.column("pair")?.cast(&DataType::String)?;
    let shape = df.column("shape")?.cast(&DataType::String)?;
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;

    let mut out: Vec<PairInput> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();
    let rows = pair
        .str()?
        .into_iter()
        .zip(shape.str()?.into_iter())
        .zip(xs.f64()?.into_iter())
        .zip(ys.f64()?.into_iter());
    for (row, (((id, which), x), y)) in rows.enumerate() {
        let (Some(id), Some(which), Some(x), Some(y)) = (id, which, x, y) else {
            bail!("row {row}: missing value");
        };
        let k = *slot.entry(id.to_string()).or_insert_with(|| {
            out.push(PairInput {
                id: Some(id.to_string()),
                ..PairInput::default()
            });
            out.len() - 1
        });
        match which.trim() {
            "a" | "A" => out[k].a.push([x, y]),
            "b" | "B" => out[k].b.push([x, y]),
            other => bail!("row {row}: shape must be `a` or `b`, got `{other}`"),
        }
    }
    Ok(out)
}

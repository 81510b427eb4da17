use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use sat2d::api::{draw_pair_radial, PolygonReplay, RadialCfg, SatCfg};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;

use batch::{evaluate, evaluate_all, parse_points, read_pairs, PairInput, PairResult, Summary};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex-polygon collision checks (separating axis test)")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Tolerances of the collision test.
#[derive(Args, Clone, Copy, Debug)]
struct TolArgs {
    /// Edges at or below this length produce no axis
    #[arg(long, default_value_t = SatCfg::default().eps_axis)]
    eps_axis: f64,
    /// Gap still reported as contact
    #[arg(long, default_value_t = SatCfg::default().contact_slack)]
    contact_slack: f64,
}

impl TryFrom<TolArgs> for SatCfg {
    type Error = anyhow::Error;

    fn try_from(t: TolArgs) -> Result<Self> {
        if !(t.eps_axis >= 0.0) {
            bail!("--eps-axis must be a non-negative number, got {}", t.eps_axis);
        }
        if !(t.contact_slack >= 0.0) {
            bail!(
                "--contact-slack must be a non-negative number, got {}",
                t.contact_slack
            );
        }
        Ok(SatCfg {
            eps_axis: t.eps_axis,
            contact_slack: t.contact_slack,
        })
    }
}

#[derive(Subcommand)]
enum Action {
    /// Test one pair given as `x,y;x,y;...` literals and print the result as JSON
    Check {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
        #[command(flatten)]
        tol: TolArgs,
    },
    /// Test every pair of a .json or .csv file; write results plus a provenance sidecar
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        #[command(flatten)]
        tol: TolArgs,
    },
    /// Write reproducible random polygon pairs in the JSON batch format
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 100)]
        count: u64,
        /// Offset range of the second polygon, per axis
        #[arg(long, default_value_t = 2.0)]
        spread: f64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check { a, b, tol } => check(a, b, tol.try_into()?, cmd.tag),
        Action::Batch { input, out, tol } => run_batch(input, out, tol.try_into()?, cmd.tag),
        Action::Sample {
            seed,
            count,
            spread,
            out,
        } => sample(seed, count, spread, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn check(a: String, b: String, cfg: SatCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(a, b, tag = ?tag, ?cfg, "check");
    let result = check_literals(&a, &b, &cfg)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn check_literals(a: &str, b: &str, cfg: &SatCfg) -> Result<PairResult> {
    let pair = PairInput {
        id: Some("check".into()),
        a: parse_points(a).context("parsing --a")?,
        b: parse_points(b).context("parsing --b")?,
    };
    Ok(evaluate(0, &pair, cfg))
}

fn run_batch(input: String, out: String, cfg: SatCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(input, out, tag = ?tag, ?cfg, "batch");
    let pairs = read_pairs(Path::new(&input))?;
    let results = evaluate_all(&pairs, &cfg);
    let summary = Summary::of(&results);
    tracing::info!(
        pairs = summary.pairs,
        overlaps = summary.overlaps,
        invalid = summary.invalid,
        "batch_summary"
    );

    create_parent_dir(Path::new(&out))?;
    std::fs::write(&out, serde_json::to_vec_pretty(&results)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = Payload::new(serde_json::json!({
        "command": "batch",
        "input": input,
        "eps_axis": cfg.eps_axis,
        "contact_slack": cfg.contact_slack
    }))
    .with_tag(tag)
    .with_summary(serde_json::to_value(summary)?);
    let prov = write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn sample(seed: u64, count: u64, spread: f64, out: String, tag: Option<String>) -> Result<()> {
    tracing::info!(seed, count, spread, out, tag = ?tag, "sample");
    let pairs: Vec<PairInput> = (0..count)
        .filter_map(|index| {
            let (a, b) =
                draw_pair_radial(RadialCfg::default(), PolygonReplay { seed, index }, spread)?;
            Some(PairInput {
                id: Some(format!("{seed}-{index}")),
                a: a.vertices().iter().map(|v| [v.x, v.y]).collect(),
                b: b.vertices().iter().map(|v| [v.x, v.y]).collect(),
            })
        })
        .collect();
    if pairs.len() as u64 != count {
        tracing::warn!(
            requested = count,
            drawn = pairs.len(),
            "some draws were degenerate"
        );
    }

    create_parent_dir(Path::new(&out))?;
    std::fs::write(&out, serde_json::to_vec_pretty(&pairs)?)
        .with_context(|| format!("writing {out}"))?;
    let payload = Payload::new(serde_json::json!({
        "command": "sample",
        "seed": seed,
        "count": count,
        "spread": spread
    }))
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::header(tag.as_deref());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{read_system, write_json, SystemDoc};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Exact projection of linear systems by variable elimination")]
struct Cmd {
    /// Optional VK ticket UUID; propagated to outputs and logs
    #[arg(long)]
    vk: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Eliminate variables (in the given order) and write the reduced system
    Project {
        #[arg(long)]
        input: PathBuf,
        /// Comma-separated variable names
        #[arg(long, value_delimiter = ',')]
        eliminate: Vec<String>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the vertices of a bounded, strict-free system as JSON
    Vertices {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Project {
            input,
            eliminate,
            out,
        } => project(&input, &eliminate, &out, cmd.vk),
        Action::Vertices { input } => {
            let doc = vertices(&input)?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
        Action::Report => report(cmd.vk),
    }
}

fn project(input: &Path, eliminate: &[String], out: &Path, vk: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), ?eliminate, out = %out.display(), vk = ?vk, "project");
    let sys = read_system(input)?.to_system()?;
    let reduced = sys
        .coordinate_projection(eliminate)
        .with_context(|| format!("eliminating {eliminate:?}"))?;
    tracing::info!(
        constraints_in = sys.n_constraints(),
        constraints_out = reduced.n_constraints(),
        infeasible = reduced.is_infeasible(),
        "projected"
    );
    write_json(out, &SystemDoc::from_system(&reduced))?;

    let params = json!({
        "input": input.to_string_lossy(),
        "eliminate": eliminate,
        "variables_in": sys.ring().names(),
        "variables_out": reduced.ring().names(),
        "constraints_in": sys.n_constraints(),
        "constraints_out": reduced.n_constraints(),
        "infeasible": reduced.is_infeasible(),
    });
    let prov = write_sidecar(out, Payload::new(params, vk))?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn vertices(input: &Path) -> Result<serde_json::Value> {
    tracing::info!(input = %input.display(), "vertices");
    let sys = read_system(input)?.to_system()?;
    let poly = sys
        .to_double_description()
        .context("vertex enumeration needs a system without strict inequalities")?;
    let verts: Vec<Vec<String>> = poly
        .vertices()
        .iter()
        .map(|v| v.iter().map(|x| x.to_string()).collect())
        .collect();
    tracing::info!(count = verts.len(), "enumerated");
    Ok(json!({
        "variables": sys.ring().names(),
        "vertices": verts,
    }))
}

fn report(vk: Option<String>) -> Result<()> {
    let obj = provenance::block(vk.as_deref(), json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

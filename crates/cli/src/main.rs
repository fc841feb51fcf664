use anyhow::Result;
use cellgrid::report::summarize;
use cellgrid::{generate_layout, Parameters};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod config;
mod export;
mod provenance;

#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(about = "Incell/outcell lattice layout for circular die cross-sections")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Input {
    /// Parameter file (.toml or .json)
    #[arg(long)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Action {
    /// Validate parameters and print primary + derived values
    Check {
        #[command(flatten)]
        input: Input,
    },
    /// Generate the layout and write coordinates (+ provenance sidecar)
    Run {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write placed cell and slit polygons for drawing
    Outline {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write first-quadrant rows (unit, x, y, quadrant) as CSV
    Quadrant {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print summary statistics of the layout
    Report {
        #[command(flatten)]
        input: Input,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check { input } => check(&input.config),
        Action::Run { input, out } => run(&input.config, &out),
        Action::Outline { input, out } => outline(&input.config, &out),
        Action::Quadrant { input, out } => quadrant(&input.config, &out),
        Action::Report { input } => report(&input.config),
    }
}

fn parameters_json(p: &Parameters) -> serde_json::Value {
    json!({
        "input_parameters": p.flat_fields(),
        "derived_parameters": p.derived_fields(),
    })
}

fn check(config: &Path) -> Result<()> {
    let p = config::load(config)?;
    println!("{}", serde_json::to_string_pretty(&parameters_json(&p))?);
    Ok(())
}

fn run(config: &Path, out: &Path) -> Result<()> {
    let p = config::load(config)?;
    let layout = generate_layout(&p);
    tracing::info!(
        incells = layout.incell.len(),
        outcells = layout.outcell.len(),
        out = %out.display(),
        "run"
    );
    export::write_json(out, &export::layout_document(&p, &layout))?;
    provenance::write_sidecar(out, provenance::Payload::new(config, &p, &layout))?;
    Ok(())
}

fn outline(config: &Path, out: &Path) -> Result<()> {
    let p = config::load(config)?;
    let layout = generate_layout(&p);
    tracing::info!(out = %out.display(), slits = layout.slit_rows().len(), "outline");
    export::write_json(out, &export::outline_document(&p, &layout))
}

fn quadrant(config: &Path, out: &Path) -> Result<()> {
    let p = config::load(config)?;
    let layout = generate_layout(&p);
    let rows = export::quadrant_rows(&layout);
    let mut df = export::quadrant_frame(&rows)?;
    tracing::info!(rows = df.height(), out = %out.display(), "quadrant");
    export::write_csv(out, &mut df)
}

fn report(config: &Path) -> Result<()> {
    let p = config::load(config)?;
    let layout = generate_layout(&p);
    let summary = summarize(&p, &layout);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(test)]
mod tests;

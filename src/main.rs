//! bag-pattern - CLI to print bag cutting lists and write cutting diagrams.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bag_pattern_rs::{recalculate, render_svg, Orientation, PatternInputs};

/// Calculate fabric cutting dimensions for a lined drawstring bag.
#[derive(Parser, Debug)]
#[command(name = "bag-pattern")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Finished bag width in cm
    #[arg(short = 'W', long, default_value = "0")]
    width: f64,

    /// Finished bag height in cm
    #[arg(short = 'H', long, default_value = "0")]
    height: f64,

    /// Base gusset depth in cm
    #[arg(short, long, default_value = "0")]
    gusset: f64,

    /// Color-block split height in cm (enables the split seam)
    #[arg(short, long)]
    split: Option<f64>,

    /// Bottom construction: fold or sewn
    #[arg(short, long, default_value = "fold")]
    orientation: Orientation,

    /// Write the cutting diagram to this SVG file
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Output inputs and pieces as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let inputs = PatternInputs {
        finished_width: args.width,
        finished_height: args.height,
        gusset: args.gusset,
        split_height: args.split.unwrap_or(0.0),
        orientation: args.orientation,
        has_split: args.split.is_some(),
    }
    .sanitized();

    if inputs.finished_width != args.width
        || inputs.finished_height != args.height
        || inputs.gusset != args.gusset
    {
        warn!("Negative or non-finite measurements were treated as 0");
    }

    let (pieces, scene) = recalculate(&inputs);

    // Debug output
    if args.debug {
        let json = serde_json::json!({
            "inputs": inputs,
            "pieces": pieces,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    // Cutting list
    println!("Cutting list (cm, seam allowance included):");
    for piece in &pieces {
        if piece.is_warning() {
            println!("  ! {}", piece.label);
        } else {
            println!(
                "  {} (cut {}): {}",
                piece.label,
                piece.cut_count,
                piece.dimensions_string()
            );
        }
    }

    // Diagram
    if let Some(path) = args.svg {
        let svg = render_svg(&scene);
        std::fs::write(&path, svg)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Diagram written: {}", path.display());
    }

    Ok(())
}

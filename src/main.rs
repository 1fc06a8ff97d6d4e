//! telas - CLI tool to calculate the sheets needed for a cut list.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use telas_calc::config::DEFAULT_DISPLAY_CAP;
use telas_calc::{
    generate_report, generate_svg, parse_piece_file, parse_piece_token, validate_layout, Calculator,
    ReportConfig,
};

/// Calculate how many 2.45m x 6m sheets a list of pieces needs.
#[derive(Parser, Debug)]
#[command(name = "telas")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Piece as WIDTHxLENGTH or WIDTHxLENGTHxCOUNT, in meters (repeatable)
    #[arg(short, long = "piece", value_name = "PIECE")]
    pieces: Vec<String>,

    /// Piece list file, one "width length [count]" entry per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of sheets to list or draw
    #[arg(long, default_value_t = DEFAULT_DISPLAY_CAP)]
    show: usize,

    /// Print the layout as JSON
    #[arg(long)]
    json: bool,

    /// Write an SVG drawing of the sheets
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,

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
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut calculator = match &args.input {
        Some(path) => {
            info!("Reading: {}", path.display());
            let pieces = parse_piece_file(path)
                .with_context(|| format!("Failed to read pieces from {}", path.display()))?;
            Calculator::with_pieces(pieces)
        }
        None => Calculator::new(),
    };

    for token in &args.pieces {
        let entry = parse_piece_token(token)?;
        calculator
            .submit_entry(&entry)
            .with_context(|| format!("Invalid piece '{}'", token))?;
    }

    if calculator.pieces().is_empty() {
        warn!("No pieces given; use --piece or --input");
    }

    let layout = calculator.layout();

    let validation = validate_layout(calculator.pieces(), layout);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    for err in &validation.errors {
        error!("{}", err);
    }

    let config = ReportConfig::new(args.show);

    if let Some(svg_path) = &args.svg {
        let svg = generate_svg(calculator.pieces(), layout, &config);
        std::fs::write(svg_path, svg)
            .with_context(|| format!("Failed to write {}", svg_path.display()))?;
        info!("Generated: {}", svg_path.display());
    }

    if args.json {
        let json = serde_json::to_string_pretty(layout)?;
        println!("{}", json);
    } else {
        print!("{}", generate_report(calculator.pieces(), layout, &config));
    }

    validation
        .ensure_passed()
        .context("Layout validation failed")?;

    Ok(())
}

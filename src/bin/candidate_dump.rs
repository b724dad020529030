use clap::Parser;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tessera::io_utils::{io_cli_error, tessera_cli_error};
use tessera::{generate_candidates, select_lines, Dimensionality, EngineConfig, NoProgress};

/// Dump every deduplicated line candidate of a text file as CSV.
#[derive(Parser)]
struct Args {
    /// Input text file
    input: PathBuf,
    /// Number of grid axes
    #[arg(long, default_value_t = 2)]
    dims: usize,
    /// Maximum number of volumetric shapes scanned
    #[arg(long, default_value_t = tessera::config::MAX_SHAPES)]
    max_shapes: usize,
    /// Write CSV here instead of stdout
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Serialize)]
struct Record {
    character: char,
    descriptor: String,
    points: usize,
    savings: isize,
    committed: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let text = fs::read_to_string(&args.input)
        .map_err(|e| io_cli_error("reading input file", &args.input, e))?;
    let config = EngineConfig {
        dimensionality: Dimensionality::new(args.dims)
            .map_err(|e| tessera_cli_error("invalid --dims", e))?,
        max_shapes: args.max_shapes,
        ..EngineConfig::default()
    };

    let chars: Vec<char> = text.chars().collect();
    let candidates = generate_candidates(&chars, &config, &NoProgress);
    let selection = select_lines(candidates.clone(), chars.len());
    let committed: HashSet<&str> = selection
        .committed
        .iter()
        .map(|c| c.text.as_str())
        .collect();

    let writer: Box<dyn std::io::Write> = match &args.csv {
        Some(p) => Box::new(fs::File::create(p).map_err(|e| io_cli_error("creating csv", p, e))?),
        None => Box::new(std::io::stdout()),
    };
    let mut wtr = csv::Writer::from_writer(writer);
    for c in &candidates {
        wtr.serialize(Record {
            character: c.descriptor.character,
            descriptor: c.text.clone(),
            points: c.points.len(),
            savings: c.savings,
            committed: committed.contains(c.text.as_str()),
        })?;
    }
    wtr.flush()?;
    eprintln!(
        "{} candidates, {} committed",
        candidates.len(),
        selection.committed.len()
    );
    Ok(())
}

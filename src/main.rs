use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tessera::io_utils::{
    extension_error, has_blueprint_extension, io_cli_error, simple_cli_error, tessera_cli_error,
};
use tessera::{
    compress_with, decompress_with_limit, BlueprintStats, Dimensionality, EngineConfig, Progress,
    TessellationError,
};

/// Line-tessellation compressor for text files.
#[derive(Parser)]
#[command(name = "tessera", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a text file into a blueprint.
    #[command(alias = "c")]
    Compress(CompressArgs),
    /// Rebuild the text from a blueprint file.
    #[command(alias = "d")]
    Decompress(DecompressArgs),
}

#[derive(Args)]
struct CompressArgs {
    /// Input text file
    input: PathBuf,
    /// Output blueprint path
    output: PathBuf,
    /// Number of grid axes (2 = planar, 3 = volumetric)
    #[arg(long, default_value_t = 2)]
    dims: usize,
    /// Maximum number of volumetric shapes scanned
    #[arg(long, default_value_t = tessera::config::MAX_SHAPES)]
    max_shapes: usize,
    /// Scan shapes on a single thread
    #[arg(long)]
    sequential: bool,
    /// Show a progress bar while scanning
    #[arg(long)]
    status: bool,
    /// Print a JSON report on stdout
    #[arg(long)]
    json: bool,
    /// Skip writing the output file
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args)]
struct DecompressArgs {
    /// Input .tess blueprint
    input: PathBuf,
    /// Output text file
    output: PathBuf,
    /// Refuse blueprints declaring more characters than this
    #[arg(long, default_value_t = tessera::config::DEFAULT_DECODE_LIMIT)]
    limit: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Compress(args) => compress_file(args),
        Command::Decompress(args) => decompress_file(args),
    }
}

fn compress_file(args: CompressArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&args.input)
        .map_err(|e| io_cli_error("reading input file", &args.input, e))?;
    if text.is_empty() {
        return Err(tessera_cli_error("compression refused", TessellationError::EmptyInput).into());
    }

    let dimensionality = Dimensionality::new(args.dims)
        .map_err(|e| tessera_cli_error("invalid --dims", e))?;
    let config = EngineConfig {
        dimensionality,
        max_shapes: args.max_shapes,
        parallel: !args.sequential,
        ..EngineConfig::default()
    };

    let bar = if args.status {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} characters {msg}")
                .map_err(|e| simple_cli_error(&format!("progress template: {e}")))?,
        );
        bar
    } else {
        ProgressBar::hidden()
    };
    let sink = |event: &Progress| match event {
        Progress::CharacterScanned {
            character,
            ordinal,
            total,
        } => {
            bar.set_length(*total as u64);
            bar.set_position(*ordinal as u64);
            bar.set_message(format!("{character:?}"));
        }
        Progress::CandidatesGenerated { shapes, candidates } => {
            bar.finish_and_clear();
            log::info!("{candidates} candidates over {shapes} shapes");
        }
        _ => {}
    };

    let start_time = Instant::now();
    let blueprint = compress_with(&text, &config, &sink);
    let elapsed = start_time.elapsed();
    let wire = blueprint.encode();

    if !args.dry_run {
        fs::write(&args.output, &wire)
            .map_err(|e| io_cli_error("writing output file", &args.output, e))?;
    } else {
        eprintln!("(dry run) skipping file write");
    }

    let stats = BlueprintStats::measure(&blueprint);
    if args.json {
        let engine = if dimensionality.is_planar() {
            "vectorial"
        } else {
            "volumetric"
        };
        let key: Vec<String> = blueprint.key.iter().map(ToString::to_string).collect();
        let mut out_json = serde_json::to_value(&stats)?;
        out_json["engine"] = engine.into();
        out_json["compiledBlueprint"] = wire.into();
        out_json["key"] = key.into();
        out_json["remnant"] = blueprint.remnant.clone().into();
        out_json["elapsedMs"] = (elapsed.as_millis() as u64).into();
        println!("{}", serde_json::to_string_pretty(&out_json)?);
    } else {
        stats.report();
        eprintln!("Elapsed: {:.2?}", elapsed);
    }
    Ok(())
}

fn decompress_file(args: DecompressArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !has_blueprint_extension(&args.input) {
        return Err(extension_error(&args.input).into());
    }
    let wire = fs::read_to_string(&args.input)
        .map_err(|e| io_cli_error("reading input file", &args.input, e))?;
    let text = decompress_with_limit(&wire, args.limit)
        .map_err(|e| tessera_cli_error("decompression failed", e))?;
    fs::write(&args.output, text)
        .map_err(|e| io_cli_error("writing output file", &args.output, e))?;
    Ok(())
}

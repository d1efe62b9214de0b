use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dendrite_swc::{
    ConvertConfig, Dimensionality, RunSummary, SegmentStatus, Strategy, StructureKind,
    SwcTopology, read_branch_table, read_swc, run_segments,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dendrite_swc")]
#[command(about = "Convert dendrite skeleton branch tables into .swc filaments")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(name = "convert")]
    Convert(ConvertArgs),
    #[command(name = "inspect")]
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Clone)]
struct ConvertArgs {
    /// Branch tables (CSV), one per labeled volume.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Directory for the .swc files; defaults to each input's directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Output file prefix; defaults to the input file stem.
    #[arg(long)]
    base_name: Option<String>,
    /// Highest segment id to convert; defaults to the largest id in the table.
    #[arg(long)]
    segments: Option<u32>,
    /// Write a JSON report of every segment here.
    #[arg(long)]
    summary: Option<PathBuf>,
    /// Worker threads; defaults to one per core.
    #[arg(long)]
    jobs: Option<usize>,
    #[command(flatten)]
    settings: SettingsArgs,
}

/// Conversion settings. Flags override `--config`, which overrides defaults.
#[derive(Args, Debug, Clone)]
struct SettingsArgs {
    /// JSON file with conversion settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Resolution level multiplied into every coordinate.
    #[arg(long, short = 's')]
    scale: Option<f64>,
    #[arg(long)]
    radius: Option<f64>,
    #[arg(long, value_enum)]
    dims: Option<DimsArg>,
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,
    #[arg(long)]
    min_backbone_nodes: Option<usize>,
}

#[derive(Args, Debug, Clone)]
struct InspectArgs {
    input: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum DimsArg {
    #[value(name = "2d")]
    Planar,
    #[value(name = "3d")]
    Volumetric,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum StrategyArg {
    Diameter,
    SpanningTree,
}

#[derive(Debug, Serialize)]
struct InputSummary<'a> {
    input: &'a Path,
    #[serde(flatten)]
    run: &'a RunSummary,
}

#[derive(Debug, Clone, Serialize)]
struct InspectReport {
    records: usize,
    trunk: usize,
    spine: usize,
    depth: usize,
    dims: Option<Dimensionality>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Convert(args) => run_convert(args),
        Command::Inspect(args) => run_inspect(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let cfg = resolve_settings(&args.settings)?;
    if args.base_name.is_some() && args.inputs.len() > 1 {
        bail!("--base-name needs a single input table");
    }

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut summaries = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        ensure_file_exists(input, "branch table")?;
        let summary = convert_input(input, &args, &cfg)?;
        summaries.push((input.as_path(), summary));
    }

    if let Some(path) = &args.summary {
        let payload: Vec<InputSummary<'_>> = summaries
            .iter()
            .map(|(input, run)| InputSummary { input, run })
            .collect();
        write_json(path, &payload)?;
    }

    let failed: usize = summaries
        .iter()
        .map(|(_, s)| s.count(SegmentStatus::Failed))
        .sum();
    if failed > 0 {
        bail!("{failed} segment(s) failed to convert");
    }
    Ok(())
}

fn convert_input(input: &Path, args: &ConvertArgs, cfg: &ConvertConfig) -> Result<RunSummary> {
    info!(
        file = %input.display(),
        scale = cfg.scale,
        radius = cfg.radius,
        dims = %cfg.dims,
        strategy = %cfg.strategy,
        min_backbone_nodes = cfg.min_backbone_nodes,
        "converting branch table"
    );

    let table = read_branch_table(input)
        .with_context(|| format!("reading branch table {}", input.display()))?;
    let max_segment = match args.segments.or(table.max_segment()) {
        Some(m) => m,
        None => {
            warn!(file = %input.display(), "branch table has no records");
            0
        }
    };

    let base_name = match &args.base_name {
        Some(name) => name.clone(),
        None => input
            .file_stem()
            .with_context(|| format!("input has no file name: {}", input.display()))?
            .to_string_lossy()
            .into_owned(),
    };
    let out_dir = match &args.out_dir {
        Some(dir) => dir.clone(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let summary = match args.jobs {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .context("building worker pool")?
            .install(|| run_segments(&table, max_segment, &out_dir, &base_name, cfg)),
        None => run_segments(&table, max_segment, &out_dir, &base_name, cfg),
    };

    info!(
        written = summary.count(SegmentStatus::Written),
        skipped = summary.count(SegmentStatus::Skipped),
        failed = summary.count(SegmentStatus::Failed),
        "done"
    );
    Ok(summary)
}

fn resolve_settings(args: &SettingsArgs) -> Result<ConvertConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            ensure_file_exists(path, "config")?;
            read_json::<ConvertConfig>(path)?
        }
        None => ConvertConfig::default(),
    };

    if let Some(scale) = args.scale {
        cfg.scale = scale;
    }
    if let Some(radius) = args.radius {
        cfg.radius = radius;
    }
    if let Some(dims) = args.dims {
        cfg.dims = dims_from_arg(dims);
    }
    if let Some(strategy) = args.strategy {
        cfg.strategy = strategy_from_arg(strategy);
    }
    if let Some(min) = args.min_backbone_nodes {
        cfg.min_backbone_nodes = min;
    }

    if !cfg.scale.is_finite() || cfg.scale <= 0.0 {
        bail!("scale must be a positive number, got {}", cfg.scale);
    }
    if !cfg.radius.is_finite() || cfg.radius < 0.0 {
        bail!("radius must be a non-negative number, got {}", cfg.radius);
    }
    Ok(cfg)
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    ensure_file_exists(&args.input, "swc")?;
    let records =
        read_swc(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
    let topology = SwcTopology::from_records(&records)
        .with_context(|| format!("validating {}", args.input.display()))?;

    let trunk = records
        .iter()
        .filter(|r| r.kind == StructureKind::Trunk)
        .count();
    let report = InspectReport {
        records: records.len(),
        trunk,
        spine: records.len() - trunk,
        depth: topology.depth(),
        dims: records.first().map(|r| r.coord.dims()),
    };

    let text = serde_json::to_string_pretty(&report).context("serializing report")?;
    println!("{text}");
    Ok(())
}

fn dims_from_arg(arg: DimsArg) -> Dimensionality {
    match arg {
        DimsArg::Planar => Dimensionality::Planar,
        DimsArg::Volumetric => Dimensionality::Volumetric,
    }
}

fn strategy_from_arg(arg: StrategyArg) -> Strategy {
    match arg {
        StrategyArg::Diameter => Strategy::Diameter,
        StrategyArg::SpanningTree => Strategy::SpanningTree,
    }
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use wordscatter_core::config::{Difficulty, ItemOrder, LayoutConfig, PuzzleConfig, Rotation};
use wordscatter_core::{
    BitmapFont, LayoutStats, PuzzleOutput, generate_batch_with, seed_for, to_json_puzzle,
};

#[derive(Parser, Debug)]
#[command(
    name = "wordscatter",
    about = "Generate count-the-correct-word puzzle images",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Show progress bars (disable with --progress false or --quiet)
    #[arg(long, default_value_t = true, action=ArgAction::Set, global=true, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate puzzles (PNG + optional JSON answer metadata)
    Generate(GenArgs),
    /// Layout-only export (no PNGs): compute placements and write JSON
    Layout(GenArgs),
}

#[derive(Parser, Debug, Clone)]
struct GenArgs {
    // Input/Output
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Number of puzzles to generate
    #[arg(short = 'n', long, default_value_t = 1, help_heading = "Input/Output")]
    count: usize,
    /// YAML config file path (overrides the flags it sets)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Puzzle
    /// Difficulty: easy|medium|hard
    #[arg(long, default_value = "easy", help_heading = "Puzzle")]
    difficulty: String,
    /// Target word (default: random word of the difficulty's length)
    #[arg(long, help_heading = "Puzzle")]
    word: Option<String>,
    /// Share of correctly spelled words (0..=1; default: random in [0.2, 0.6))
    #[arg(long, help_heading = "Puzzle")]
    correct_ratio: Option<f64>,
    /// Placement order: targets_first|distractors_first|shuffled
    #[arg(long, default_value = "targets_first", help_heading = "Puzzle")]
    order: String,
    /// Base seed; puzzle i uses seed + i (default: random)
    #[arg(long, help_heading = "Puzzle")]
    seed: Option<u64>,

    // Layout
    /// Canvas width
    #[arg(long, default_value_t = 800, help_heading = "Layout")]
    width: u32,
    /// Canvas height
    #[arg(long, default_value_t = 600, help_heading = "Layout")]
    height: u32,
    /// Boundary margin
    #[arg(long, default_value_t = 20, help_heading = "Layout")]
    margin: u32,
    /// Minimum gap between words
    #[arg(long, default_value_t = 20, help_heading = "Layout")]
    item_margin: u32,
    /// Placement attempts per word before it is skipped
    #[arg(long, default_value_t = 100, help_heading = "Layout")]
    max_attempts: u32,
    /// Allowed rotations in degrees (comma separated)
    #[arg(long, value_delimiter = ',', default_values_t = [0u16, 90, 180, 270], help_heading = "Layout")]
    rotations: Vec<u16>,
    /// Draw red collision outlines (debug)
    #[arg(long, default_value_t = false, help_heading = "Layout")]
    outlines: bool,
    /// Generate puzzles in parallel (requires feature `parallel`)
    #[arg(long, default_value_t = false, help_heading = "Layout")]
    parallel: bool,

    // Export
    /// Write `<stem>.json` answer/layout metadata next to each PNG
    #[arg(long, default_value_t = false, help_heading = "Export")]
    metadata: bool,
    /// Export generation stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
    /// Dry run: generate and report but do not write files
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Generate(args) => run_generate(args, cli.progress && !cli.quiet, false),
        Commands::Layout(args) => {
            let mut a = args.clone();
            a.metadata = true;
            run_generate(&a, cli.progress && !cli.quiet, true)
        }
    }
}

fn run_generate(cli: &GenArgs, show_progress: bool, layout_only: bool) -> anyhow::Result<()> {
    let mut cfg = build_config(cli)?;
    if let Some(path) = &cli.config {
        let file =
            fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg = y.into_puzzle_config(cfg)?;
    }

    if cli.print_config {
        match cli.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }
    cfg.validate()?;

    if !cli.dry_run {
        fs::create_dir_all(&cli.out_dir)
            .with_context(|| format!("create out_dir {}", cli.out_dir.display()))?;
    }

    if cfg.parallel && !cfg!(feature = "parallel") {
        warn!("--parallel requested but built without feature `parallel`; generating sequentially");
    }

    let base_seed = cli.seed.unwrap_or_else(rand::random);
    info!(base_seed, count = cli.count, "generating puzzles");
    let renderer = BitmapFont::default().with_color(cfg.text_color);
    let bar = progress_bar(cli.count, show_progress)?;

    let start = Instant::now();
    let summaries = generate_batch_with(&cfg, &renderer, base_seed, cli.count, |i, out| {
        let summary = write_puzzle(cli, &cfg, layout_only, base_seed, i, &out)
            .with_context(|| format!("puzzle {i}"))?;
        if let Some(b) = &bar {
            b.set_message(summary.stem.clone());
            b.inc(1);
        }
        Ok::<_, anyhow::Error>(summary)
    })?;
    let elapsed = start.elapsed();
    if let Some(b) = &bar {
        b.finish_and_clear();
    }

    if let Some(stats_path) = &cli.export_stats {
        let value = batch_stats(&summaries, base_seed, elapsed);
        if !cli.dry_run {
            fs::write(stats_path, serde_json::to_string_pretty(&value)?)
                .with_context(|| format!("write {}", stats_path.display()))?;
            info!(?stats_path, "stats exported");
        } else {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    info!(puzzles = summaries.len(), time = %fmt_dur(elapsed), "done");
    Ok(())
}

fn build_config(cli: &GenArgs) -> anyhow::Result<PuzzleConfig> {
    let rotations = cli
        .rotations
        .iter()
        .map(|&d| Rotation::try_from(d).map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let layout = LayoutConfig::builder()
        .with_canvas(cli.width, cli.height)
        .margin(cli.margin)
        .item_margin(cli.item_margin)
        .max_attempts(cli.max_attempts)
        .rotations(rotations)
        .build();
    Ok(PuzzleConfig::builder()
        .layout(layout)
        .difficulty(parse_difficulty(&cli.difficulty)?)
        .word(cli.word.clone())
        .correct_ratio(cli.correct_ratio)
        .order(parse_order(&cli.order)?)
        .outlines(cli.outlines)
        .parallel(cli.parallel)
        .build())
}

fn progress_bar(count: usize, progress: bool) -> anyhow::Result<Option<ProgressBar>> {
    if !progress || count <= 1 {
        return Ok(None);
    }
    let b = ProgressBar::new(count as u64);
    b.set_style(ProgressStyle::with_template(
        "{spinner:.green} generating {pos}/{len} [{elapsed_precise}] {wide_msg}",
    )?);
    Ok(Some(b))
}

/// What is kept of a puzzle once its files are written.
#[derive(Debug, Serialize)]
struct PuzzleSummary {
    index: usize,
    stem: String,
    seed: u64,
    word: String,
    requested_total: u32,
    requested_correct: u32,
    visible_total: usize,
    visible_correct: usize,
    stats: LayoutStats,
}

fn write_puzzle(
    cli: &GenArgs,
    cfg: &PuzzleConfig,
    layout_only: bool,
    base_seed: u64,
    i: usize,
    out: &PuzzleOutput,
) -> anyhow::Result<PuzzleSummary> {
    let stem = if cli.count > 1 {
        format!("{}_{i}", out.file_stem())
    } else {
        out.file_stem()
    };
    let seed = seed_for(base_seed, i);
    let summary = PuzzleSummary {
        index: i,
        stem,
        seed,
        word: out.word.clone(),
        requested_total: out.requested_total,
        requested_correct: out.requested_correct,
        visible_total: out.visible_total,
        visible_correct: out.visible_correct,
        stats: out.stats(),
    };
    if cli.dry_run {
        println!("{}: {} (seed {seed})", summary.stem, summary.stats.summary());
        return Ok(summary);
    }
    if !layout_only {
        let png = cli.out_dir.join(format!("{}.png", summary.stem));
        out.save_png(&png)
            .with_context(|| format!("write {}", png.display()))?;
        info!(?png, "puzzle image written");
    }
    if cli.metadata {
        write_metadata(&cli.out_dir.join(format!("{}.json", summary.stem)), out, cfg, seed)?;
    }
    Ok(summary)
}

fn write_metadata(path: &Path, out: &PuzzleOutput, cfg: &PuzzleConfig, seed: u64) -> anyhow::Result<()> {
    let value = to_json_puzzle(out, cfg, Some(seed));
    fs::write(path, serde_json::to_string_pretty(&value)?)
        .with_context(|| format!("write {}", path.display()))?;
    info!(?path, "metadata written");
    Ok(())
}

fn batch_stats(summaries: &[PuzzleSummary], base_seed: u64, elapsed: Duration) -> serde_json::Value {
    let requested: u64 = summaries.iter().map(|p| u64::from(p.requested_total)).sum();
    let placed: usize = summaries.iter().map(|p| p.visible_total).sum();
    let mean_occupancy = if summaries.is_empty() {
        0.0
    } else {
        summaries.iter().map(|p| p.stats.occupancy).sum::<f64>() / summaries.len() as f64
    };
    serde_json::json!({
        "puzzles": summaries.len(),
        "base_seed": base_seed,
        "requested_words": requested,
        "placed_words": placed,
        "skipped_words": requested.saturating_sub(placed as u64),
        "mean_occupancy": mean_occupancy,
        "elapsed_ms": elapsed.as_secs_f64() * 1000.0,
        "per_puzzle": summaries,
    })
}

fn fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}µs", d.as_micros())
    }
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

fn parse_difficulty(s: &str) -> anyhow::Result<Difficulty> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("unknown difficulty: {s} (expected easy|medium|hard)"))
}

fn parse_order(s: &str) -> anyhow::Result<ItemOrder> {
    s.parse().map_err(|_| {
        anyhow::anyhow!("unknown order: {s} (expected targets_first|distractors_first|shuffled)")
    })
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    width: Option<u32>,
    height: Option<u32>,
    margin: Option<u32>,
    item_margin: Option<u32>,
    max_attempts: Option<u32>,
    rotations: Option<Vec<u16>>,
    difficulty: Option<String>,
    word: Option<String>,
    correct_ratio: Option<f64>,
    word_length: Option<usize>,
    total_words: Option<(u32, u32)>,
    font_size: Option<(u32, u32)>,
    order: Option<String>,
    background: Option<[u8; 4]>,
    text_color: Option<[u8; 4]>,
    outlines: Option<bool>,
    parallel: Option<bool>,
}

impl YamlConfig {
    fn into_puzzle_config(self, mut cfg: PuzzleConfig) -> anyhow::Result<PuzzleConfig> {
        if let Some(v) = self.width {
            cfg.layout.width = v;
        }
        if let Some(v) = self.height {
            cfg.layout.height = v;
        }
        if let Some(v) = self.margin {
            cfg.layout.margin = v;
        }
        if let Some(v) = self.item_margin {
            cfg.layout.item_margin = v;
        }
        if let Some(v) = self.max_attempts {
            cfg.layout.max_attempts = v;
        }
        if let Some(v) = self.rotations {
            cfg.layout.rotations = v
                .into_iter()
                .map(|d| Rotation::try_from(d).map_err(anyhow::Error::msg))
                .collect::<anyhow::Result<Vec<_>>>()?;
        }
        if let Some(v) = self.difficulty {
            cfg.difficulty = parse_difficulty(&v)?;
        }
        if let Some(v) = self.word {
            cfg.word = Some(v);
        }
        if let Some(v) = self.correct_ratio {
            cfg.correct_ratio = Some(v);
        }
        if let Some(v) = self.word_length {
            cfg.word_length = Some(v);
        }
        if let Some(v) = self.total_words {
            cfg.total_words = Some(v);
        }
        if let Some(v) = self.font_size {
            cfg.font_size = Some(v);
        }
        if let Some(v) = self.order {
            cfg.order = parse_order(&v)?;
        }
        if let Some(v) = self.background {
            cfg.background = v;
        }
        if let Some(v) = self.text_color {
            cfg.text_color = v;
        }
        if let Some(v) = self.outlines {
            cfg.outlines = v;
        }
        if let Some(v) = self.parallel {
            cfg.parallel = v;
        }
        Ok(cfg)
    }
}

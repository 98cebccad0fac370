//! Log Groups CLI Application
//!
//! Command-line filter that reads an automation run's event stream and writes
//! the run's output bracketed in collapsible CI log groups. It uses the
//! log-groups library and adds:
//! - NDJSON event stream input (file or stdin)
//! - Configuration from a TOML file, the environment and flags
//! - Default banner/recap rendering around the group markers

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log_groups::{GroupConfig, GroupedRenderer, NullRenderer, Renderer, WriteSink};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

mod config;
mod events;
mod render;

/// Log Groups - Group automation run output for CI log viewers
#[derive(Parser, Debug)]
#[command(name = "log-groups")]
#[command(about = "Bracket automation run output in collapsible CI log groups", long_about = None)]
#[command(version)]
struct Args {
    /// NDJSON event stream to read (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file for the annotated log (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Grouping granularity (overrides config file and environment)
    #[arg(long, value_enum, value_name = "UNIT")]
    group_by: Option<GroupBy>,

    /// Emit group markers even when no supported log viewer is detected
    #[arg(long)]
    force: bool,

    /// Never emit group markers (wins over --force)
    #[arg(long)]
    disable: bool,

    /// Only write group markers and raw output lines, no banners
    #[arg(long)]
    markers_only: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GroupBy {
    Role,
    Play,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::debug!("Log Groups CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using log-groups library v{}", log_groups::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => config::AppConfig::default(),
    };

    let group_config = resolve_group_config(&args, &app_config, |var| std::env::var(var).ok())?;
    log::debug!("Resolved group configuration: {:?}", group_config);

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open input: {:?}", path))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output: {:?}", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let renderer: Box<dyn Renderer> = if args.markers_only || !app_config.output.banners {
        Box::new(NullRenderer)
    } else {
        Box::new(render::TextRenderer::new(app_config.output.width))
    };

    let mut grouped = GroupedRenderer::new(group_config, WriteSink::new(output), renderer);
    let summary = events::annotate(input, &mut grouped).context("Failed to annotate event stream")?;

    log::info!(
        "Processed {} events and {} output lines",
        summary.events,
        summary.lines
    );

    grouped
        .finish()
        .into_inner()
        .flush()
        .context("Failed to flush output")?;

    Ok(())
}

/// Resolve settings against an environment lookup, then apply flags
fn resolve_group_config<F>(
    args: &Args,
    app_config: &config::AppConfig,
    env: F,
) -> Result<GroupConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut group_config = app_config
        .log_groups
        .resolve(env)
        .context("Failed to resolve log group settings")?;

    if let Some(group_by) = args.group_by {
        group_config.group_by_play = group_by == GroupBy::Play;
    }
    if args.force {
        group_config.grouping_enabled = true;
    }
    if args.disable {
        group_config.grouping_enabled = false;
    }

    Ok(group_config)
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr so they never interleave with the annotated output.
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::{Builder, Target};
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

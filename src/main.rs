use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use configuration::{Config, init_tracing, load_config};
use reports::{FixtureSource, ReportEngine, ReportRequest, about_report, wrap_modal};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// The main entry point for the trade reports application.
fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; everything it could set has a default.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    // Held until exit so the file appender flushes.
    let _guard = init_tracing(&config.logging).context("Failed to initialize logging")?;

    match cli.command {
        Commands::About => handle_about(&config),
        Commands::Pending(args) => handle_pending(args, config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Builds report documents for the remote UI renderer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./reports.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the report's catalogue metadata.
    About,
    /// Build the pending trades report from a JSON fixture.
    Pending(PendingArgs),
}

#[derive(Args)]
struct PendingArgs {
    /// JSON file with `trades`, `accounts`, `groups` and `rates`.
    #[arg(long)]
    fixture: PathBuf,

    /// JSON request object (`group`, `from`, `to`). Flags below override it.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Group mask, e.g. "real*,!real-test".
    #[arg(long)]
    group: Option<String>,

    /// Start of the open-time window (epoch seconds).
    #[arg(long)]
    from: Option<i64>,

    /// End of the open-time window (epoch seconds); 0 leaves it open.
    #[arg(long)]
    to: Option<i64>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_about(config: &Config) -> anyhow::Result<()> {
    let info = about_report(&config.report);
    println!("{}", serde_json::to_string(&info)?);
    Ok(())
}

fn handle_pending(args: PendingArgs, config: Config) -> anyhow::Result<()> {
    let fixture = std::fs::read_to_string(&args.fixture)
        .with_context(|| format!("Failed to read fixture {}", args.fixture.display()))?;
    let source = FixtureSource::from_json(&fixture)
        .with_context(|| format!("Invalid fixture {}", args.fixture.display()))?;

    let mut request = match &args.request {
        Some(path) => ReportRequest::from_json(&read_json(path)?),
        None => ReportRequest::default(),
    };
    if let Some(group) = args.group {
        request.group = group;
    }
    if let Some(from) = args.from {
        request.from = from;
    }
    if let Some(to) = args.to {
        request.to = to;
    }

    tracing::info!(
        fixture = %args.fixture.display(),
        trades = source.trades.len(),
        "Running pending trades report"
    );

    let engine = ReportEngine::new(config.report);
    let report = engine.create_report(&source, &request);
    tracing::debug!(nodes = report.node_count(), "Report tree built");

    let document = wrap_modal(&report, engine.settings());
    let out = if args.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{out}");
    Ok(())
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

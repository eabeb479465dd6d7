//! Reap CLI - reap command

use anyhow::Result;
use clap::Parser;
use retention::GenerationPolicy;
use std::path::PathBuf;

mod output;
mod policy_file;
mod prune;
mod scan;
mod util;

/// Reap - generation-based pruning of timestamped backups
#[derive(Parser)]
#[command(name = "reap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backup directory to prune
    dir: PathBuf,

    /// Recent backups to keep, newest first, no calendar bucketing
    #[arg(long, value_name = "N")]
    keep_recent: Option<usize>,

    /// Daily backups to keep, one per calendar day
    #[arg(long, value_name = "N")]
    keep_daily: Option<usize>,

    /// Weekly backups to keep, one per ISO week
    #[arg(long, value_name = "N")]
    keep_weekly: Option<usize>,

    /// Monthly backups to keep, one per calendar month
    #[arg(long, value_name = "N")]
    keep_monthly: Option<usize>,

    /// Yearly backups to keep, one per calendar year
    #[arg(long, value_name = "N")]
    keep_yearly: Option<usize>,

    /// Read quotas from a TOML policy file; explicit flags override it
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,

    /// Report decisions without deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Report kept entries (-v); also report deleted entries (-vv)
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut policy = match &cli.policy {
        Some(path) => policy_file::load(path)?,
        None => GenerationPolicy::default(),
    };
    if let Some(n) = cli.keep_recent {
        policy.recent = n;
    }
    if let Some(n) = cli.keep_daily {
        policy.daily = n;
    }
    if let Some(n) = cli.keep_weekly {
        policy.weekly = n;
    }
    if let Some(n) = cli.keep_monthly {
        policy.monthly = n;
    }
    if let Some(n) = cli.keep_yearly {
        policy.yearly = n;
    }

    if policy.is_empty() {
        anyhow::bail!("Must specify some backups to keep (see --help for the --keep-* flags)");
    }

    let report = output::Report::new(cli.verbose, cli.dry_run);
    prune::run(&cli.dir, &policy, cli.dry_run, report)
}

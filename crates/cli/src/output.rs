//! Colored decision reporting

use crate::util;
use owo_colors::OwoColorize;
use retention::{Decision, Tier};

/// Which decision lines the sweep prints
///
/// Kept entries are shown at `-v` and always during a dry run; deleted
/// entries are shown at `-vv`.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub show_kept: bool,
    pub show_deleted: bool,
}

impl Report {
    pub fn new(verbose: u8, dry_run: bool) -> Self {
        Self {
            show_kept: verbose >= 1 || dry_run,
            show_deleted: verbose >= 2,
        }
    }
}

/// Padded tier label in the tier's reporting color
fn tier_label(tier: Tier) -> String {
    match tier {
        Tier::Recent => "(Recent) ".red().to_string(),
        Tier::Daily => "(Daily)  ".yellow().to_string(),
        Tier::Weekly => "(Weekly) ".cyan().to_string(),
        Tier::Monthly => "(Monthly)".blue().to_string(),
        Tier::Yearly => "(Yearly) ".magenta().to_string(),
    }
}

pub fn kept(decision: &Decision<'_>, tier: Tier) {
    println!(
        "[ Keeping {} ] {} {}",
        tier_label(tier),
        decision.entry.name,
        util::format_timestamp(decision.entry.modified_at).dimmed(),
    );
}

pub fn deleted(decision: &Decision<'_>) {
    println!(
        "[ {} ] {} {}",
        "Deleting         ".red(),
        decision.entry.name,
        util::format_timestamp(decision.entry.modified_at).dimmed(),
    );
}

/// Final sweep summary, space accounting included
pub fn summary(kept: usize, deleted: usize, failed: usize, bytes_freed: u64, dry_run: bool) {
    println!();
    if dry_run {
        println!("{}", "Dry run complete".bold());
        println!("Kept:         {}", kept.to_string().green());
        println!("Would delete: {}", deleted.to_string().yellow());
        println!(
            "Would free:   {}",
            util::format_size(bytes_freed).green()
        );
    } else {
        println!("{}", "Sweep complete".bold());
        println!("Kept:    {}", kept.to_string().green());
        println!("Deleted: {}", deleted.to_string().yellow());
        if failed > 0 {
            println!("Failed:  {}", failed.to_string().red());
        }
        println!("Freed:   {}", util::format_size(bytes_freed).green());
    }
}

//! The sweep: scan, select, report, delete

use crate::output::{self, Report};
use crate::scan::{self, ScannedFile};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use retention::GenerationPolicy;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of one deletion attempt
enum Deletion {
    Removed,
    AlreadyGone,
    Failed,
}

pub fn run(dir: &Path, policy: &GenerationPolicy, dry_run: bool, report: Report) -> Result<()> {
    // 1. Snapshot the backup directory
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", dir.display()))?;
    let files = scan::scan(&dir).context("Failed to scan backup directory")?;

    if dry_run {
        println!("{}", "Dry run mode. Not deleting any files.".bold());
    }

    // 2. Decide what survives
    let entries: Vec<_> = files.iter().map(|f| f.entry.clone()).collect();
    let decisions = retention::select(&entries, policy);

    // 3. Apply the decisions; names are unique within one directory, so
    //    they join decisions back to the scanned files.
    let by_name: HashMap<&str, &ScannedFile> = files
        .iter()
        .map(|f| (f.entry.name.as_str(), f))
        .collect();

    let mut kept = 0usize;
    let mut deleted = 0usize;
    let mut failed = 0usize;
    let mut bytes_freed = 0u64;

    for decision in &decisions {
        match decision.kept_by {
            Some(tier) => {
                kept += 1;
                if report.show_kept {
                    output::kept(decision, tier);
                }
            }
            None => {
                let Some(file) = by_name.get(decision.entry.name.as_str()) else {
                    continue;
                };
                if report.show_deleted {
                    output::deleted(decision);
                }
                if dry_run {
                    deleted += 1;
                    bytes_freed += file.size;
                    continue;
                }
                match delete(file) {
                    Deletion::Removed => {
                        deleted += 1;
                        bytes_freed += file.size;
                    }
                    Deletion::AlreadyGone => deleted += 1,
                    Deletion::Failed => failed += 1,
                }
            }
        }
    }

    output::summary(kept, deleted, failed, bytes_freed, dry_run);
    Ok(())
}

/// Best-effort removal; a file already gone is not an error
fn delete(file: &ScannedFile) -> Deletion {
    match std::fs::remove_file(&file.path) {
        Ok(()) => Deletion::Removed,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!(path = %file.path.display(), "file already gone");
            Deletion::AlreadyGone
        }
        Err(error) => {
            warn!(path = %file.path.display(), %error, "failed to delete");
            Deletion::Failed
        }
    }
}

//! Backup directory snapshots

use chrono::{DateTime, Utc};
use retention::BackupEntry;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Errors that prevent taking a directory snapshot
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("failed to list {path}")]
    List {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// One backup file found in the scanned directory
#[derive(Debug)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub size: u64,
    pub entry: BackupEntry,
}

/// Snapshot the immediate children of `dir` as backup entries
///
/// Only regular files count as backups; subdirectories, symlinks and other
/// entries are skipped. A file whose metadata cannot be read is skipped
/// with a warning rather than failing the whole sweep.
pub fn scan(dir: &Path) -> Result<Vec<ScannedFile>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for item in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let item = match item {
            Ok(item) => item,
            Err(source) => {
                return Err(ScanError::List {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        };

        if !item.file_type().is_file() {
            debug!(path = %item.path().display(), "skipping non-file entry");
            continue;
        }

        let meta = match item.metadata() {
            Ok(meta) => meta,
            Err(error) => {
                warn!(path = %item.path().display(), %error, "skipping file with unreadable metadata");
                continue;
            }
        };
        let modified = match meta.modified() {
            Ok(modified) => modified,
            Err(error) => {
                warn!(path = %item.path().display(), %error, "skipping file without a modification time");
                continue;
            }
        };

        files.push(ScannedFile {
            path: item.path().to_path_buf(),
            size: meta.len(),
            entry: BackupEntry::new(
                item.file_name().to_string_lossy(),
                DateTime::<Utc>::from(modified),
            ),
        });
    }

    debug!(dir = %dir.display(), count = files.len(), "scanned backup directory");
    Ok(files)
}

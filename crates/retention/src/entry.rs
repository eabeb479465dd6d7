//! Backup entry and decision records

use crate::Tier;
use chrono::{DateTime, Utc};

/// A single backup artifact: a name and its modification time
///
/// Names are unique within one collection (they are file names in one
/// directory); modification times may collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    /// Unique name within the collection
    pub name: String,
    /// Modification timestamp, the sole ordering key
    pub modified_at: DateTime<Utc>,
}

impl BackupEntry {
    pub fn new(name: impl Into<String>, modified_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            modified_at,
        }
    }
}

/// The selector's verdict for one entry
#[derive(Debug, Clone, Copy)]
pub struct Decision<'a> {
    /// The entry this decision is about
    pub entry: &'a BackupEntry,
    /// The tier that retained the entry, if any
    pub kept_by: Option<Tier>,
}

impl Decision<'_> {
    /// Whether the entry survives the sweep
    pub fn retained(&self) -> bool {
        self.kept_by.is_some()
    }
}

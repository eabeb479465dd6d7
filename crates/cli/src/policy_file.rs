//! TOML policy files
//!
//! Quotas live under a `[keep]` table:
//!
//! ```toml
//! [keep]
//! recent = 3
//! daily = 7
//! weekly = 4
//! monthly = 12
//! yearly = 2
//! ```

use anyhow::{Context, Result};
use retention::GenerationPolicy;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PolicyFile {
    keep: GenerationPolicy,
}

/// Load quotas from a policy file
pub fn load(path: &Path) -> Result<GenerationPolicy> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read policy file {}", path.display()))?;
    let parsed: PolicyFile = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse policy file {}", path.display()))?;
    Ok(parsed.keep)
}

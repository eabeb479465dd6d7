//! Generation policy: how many backups each tier may retain

use crate::Tier;
use serde::{Deserialize, Serialize};

/// Per-tier retention quotas
///
/// Every quota defaults to 0, which disables the tier. A policy with all
/// quotas at zero retains nothing; callers that treat that as a
/// misconfiguration should check [`GenerationPolicy::is_empty`] before
/// running a sweep. The selector itself handles the degenerate case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationPolicy {
    /// Newest backups kept unconditionally, no calendar bucketing
    pub recent: usize,
    /// One backup per calendar day
    pub daily: usize,
    /// One backup per ISO week
    pub weekly: usize,
    /// One backup per calendar month
    pub monthly: usize,
    /// One backup per calendar year
    pub yearly: usize,
}

impl GenerationPolicy {
    /// Quota for one tier
    pub fn quota(&self, tier: Tier) -> usize {
        match tier {
            Tier::Recent => self.recent,
            Tier::Daily => self.daily,
            Tier::Weekly => self.weekly,
            Tier::Monthly => self.monthly,
            Tier::Yearly => self.yearly,
        }
    }

    /// True when every quota is zero
    pub fn is_empty(&self) -> bool {
        Tier::PRIORITY.iter().all(|tier| self.quota(*tier) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(GenerationPolicy::default().is_empty());
    }

    #[test]
    fn any_quota_makes_it_non_empty() {
        for tier in Tier::PRIORITY {
            let mut policy = GenerationPolicy::default();
            match tier {
                Tier::Recent => policy.recent = 1,
                Tier::Daily => policy.daily = 1,
                Tier::Weekly => policy.weekly = 1,
                Tier::Monthly => policy.monthly = 1,
                Tier::Yearly => policy.yearly = 1,
            }
            assert!(!policy.is_empty());
            assert_eq!(policy.quota(tier), 1);
        }
    }
}

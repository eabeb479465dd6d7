//! The retention selector

use crate::{BackupEntry, Decision, GenerationPolicy, Tier};
use std::collections::HashSet;
use tracing::debug;

/// Partition `entries` into keep and discard according to `policy`.
///
/// Returns exactly one decision per input entry, most recent first. The
/// input slice is never reordered; decisions borrow the entries they
/// describe.
///
/// Tiers run in fixed priority order (Recent, Daily, Weekly, Monthly,
/// Yearly). Each tier only sees entries no earlier tier retained, reduces
/// them to one representative per calendar bucket, and retains at most its
/// quota of representatives, newest buckets first. Entries with identical
/// timestamps are ordered by name, descending, so the outcome is stable
/// for a fixed input regardless of input order.
pub fn select<'a>(entries: &'a [BackupEntry], policy: &GenerationPolicy) -> Vec<Decision<'a>> {
    // Recency order as an index permutation: newest first, name descending
    // on timestamp ties.
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        entries[b]
            .modified_at
            .cmp(&entries[a].modified_at)
            .then_with(|| entries[b].name.cmp(&entries[a].name))
    });

    let mut kept_by: Vec<Option<Tier>> = vec![None; entries.len()];

    // Recent tier: raw recency, no calendar bucketing.
    for &idx in order.iter().take(policy.recent) {
        kept_by[idx] = Some(Tier::Recent);
    }

    // Calendar tiers. Walking the not-yet-retained entries in recency
    // order, the first entry of each distinct bucket key is that bucket's
    // representative, so representatives surface newest-bucket-first and
    // the first `quota` of them win.
    for tier in Tier::CALENDAR {
        let quota = policy.quota(tier);
        if quota == 0 {
            continue;
        }

        let mut seen = HashSet::new();
        let mut kept = 0usize;
        for &idx in &order {
            if kept >= quota {
                break;
            }
            if kept_by[idx].is_some() {
                continue;
            }
            let key = match tier.bucket_key(entries[idx].modified_at) {
                Some(key) => key,
                None => continue,
            };
            if seen.insert(key) {
                kept_by[idx] = Some(tier);
                kept += 1;
            }
        }
        debug!(tier = %tier, kept, "tier applied");
    }

    order
        .into_iter()
        .map(|idx| Decision {
            entry: &entries[idx],
            kept_by: kept_by[idx],
        })
        .collect()
}

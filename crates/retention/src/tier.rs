//! Retention tiers and their calendar bucket keys

use chrono::{DateTime, Datelike, Utc};
use std::fmt;

/// One retention rule, listed in selector priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Recent,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Tier {
    /// All tiers in the order the selector applies them
    pub const PRIORITY: [Tier; 5] = [
        Tier::Recent,
        Tier::Daily,
        Tier::Weekly,
        Tier::Monthly,
        Tier::Yearly,
    ];

    /// The calendar tiers (everything except Recent)
    pub const CALENDAR: [Tier; 4] = [Tier::Daily, Tier::Weekly, Tier::Monthly, Tier::Yearly];

    /// Calendar bucket key for a timestamp; `None` for the Recent tier
    ///
    /// Weekly keys use the ISO week year, not the calendar year, so backups
    /// on either side of a year-end week boundary land in different buckets.
    pub fn bucket_key(&self, ts: DateTime<Utc>) -> Option<String> {
        match self {
            Tier::Recent => None,
            Tier::Daily => Some(ts.format("%Y-%m-%d").to_string()),
            Tier::Weekly => {
                let week = ts.iso_week();
                Some(format!("{:04}-W{:02}", week.year(), week.week()))
            }
            Tier::Monthly => Some(ts.format("%Y-%m").to_string()),
            Tier::Yearly => Some(ts.format("%Y").to_string()),
        }
    }

    /// Label used in decision reporting
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Recent => "Recent",
            Tier::Daily => "Daily",
            Tier::Weekly => "Weekly",
            Tier::Monthly => "Monthly",
            Tier::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

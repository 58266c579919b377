use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// `week` is the unix timestamp of the Sunday that starts the bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitActivityWeek {
    pub week: i64,
    #[serde(default)]
    pub days: Vec<u32>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionWeek {
    pub week: i64,
    pub days: [u32; 7],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributionSummary {
    pub total: u64,
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

use chrono::{DateTime, Days};
use std::collections::BTreeMap;

use crate::models::{CommitActivityWeek, ContributionDay, ContributionSummary, ContributionWeek};

#[derive(Debug, Default, Clone)]
pub struct WeeklyActivity {
    weeks: BTreeMap<i64, [u32; 7]>,
}

impl WeeklyActivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_repository(&mut self, series: &[CommitActivityWeek]) {
        for bucket in series {
            let days = self.weeks.entry(bucket.week).or_insert([0; 7]);
            for (slot, count) in days.iter_mut().zip(bucket.days.iter()) {
                *slot += count;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.weeks
            .values()
            .flat_map(|days| days.iter())
            .map(|&count| count as u64)
            .sum()
    }

    pub fn recent_days(&self, weeks: usize) -> Vec<ContributionDay> {
        let skip = self.weeks.len().saturating_sub(weeks);
        let mut days = Vec::with_capacity(weeks.min(self.weeks.len()) * 7);

        for (&week, counts) in self.weeks.iter().skip(skip) {
            let Some(start) = DateTime::from_timestamp(week, 0) else {
                tracing::warn!("Skipping week with invalid timestamp: {}", week);
                continue;
            };
            let start = start.date_naive();

            for (offset, &count) in counts.iter().enumerate() {
                if let Some(date) = start.checked_add_days(Days::new(offset as u64)) {
                    days.push(ContributionDay { date, count });
                }
            }
        }

        days
    }

    pub fn summary(&self) -> ContributionSummary {
        ContributionSummary {
            total: self.total(),
            weeks: self
                .weeks
                .iter()
                .map(|(&week, &days)| ContributionWeek { week, days })
                .collect(),
        }
    }
}

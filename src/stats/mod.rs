pub mod aggregator;
pub mod activity;
pub mod languages;

pub use aggregator::StatsAggregator;
pub use activity::WeeklyActivity;
pub use languages::LanguageTally;

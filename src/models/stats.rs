use serde::{Deserialize, Serialize};

use super::commit::ContributionDay;
use super::user::Profile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedStats {
    #[serde(flatten)]
    pub profile: Profile,
    pub stars: u64,
    pub forks: u64,
    pub commits: u64,
    pub languages: Vec<LanguageShare>,
    pub contributions: Vec<ContributionDay>,
}

use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::config::StatsConfig;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::{
    AggregatedStats, CommitActivityWeek, ContributionSummary, LanguageShare, Profile,
    Repository, RepositorySummary,
};
use crate::stats::activity::WeeklyActivity;
use crate::stats::languages::LanguageTally;

#[derive(Debug)]
pub enum SubFetch<T> {
    Ok { repository: String, value: T },
    Failed { repository: String, reason: String },
}

pub struct StatsAggregator {
    github: Arc<GitHubClient>,
    config: StatsConfig,
}

impl StatsAggregator {
    pub fn new(github: GitHubClient, config: StatsConfig) -> Self {
        Self {
            github: Arc::new(github),
            config,
        }
    }

    pub async fn profile(&self) -> Result<Profile> {
        let user = self.github.get_user(&self.config.username).await?;
        Ok(user.into())
    }

    pub async fn repositories(&self) -> Result<Vec<RepositorySummary>> {
        let repos = self.fetch_repositories().await?;
        Ok(repos.iter().map(RepositorySummary::from).collect())
    }

    pub async fn language_distribution(&self) -> Result<Vec<LanguageShare>> {
        let repos = self.fetch_repositories().await?;
        let tally = self.tally_languages(&repos).await;
        Ok(tally.shares(None))
    }

    pub async fn contribution_summary(&self) -> Result<ContributionSummary> {
        let repos = self.fetch_repositories().await?;
        let activity = self.merge_activity(&repos).await;
        Ok(activity.summary())
    }

    pub async fn aggregate(&self) -> Result<AggregatedStats> {
        // Step 1: profile and repository list; either failing is fatal
        tracing::info!("Aggregating GitHub stats for: {}", self.config.username);
        let (user, repos) = tokio::try_join!(
            self.github.get_user(&self.config.username),
            self.fetch_repositories()
        )?;

        // Step 2: totals over every fetched repository
        let stars: u64 = repos.iter().map(|r| r.stargazers_count as u64).sum();
        let forks: u64 = repos.iter().map(|r| r.forks_count as u64).sum();

        // Step 3 and 4: sampled sub-fetches
        let (tally, activity) =
            tokio::join!(self.tally_languages(&repos), self.merge_activity(&repos));

        let contributions = activity.recent_days(self.config.activity_weeks);
        let commits: u64 = contributions.iter().map(|d| d.count as u64).sum();

        tracing::info!(
            repos = repos.len(),
            language_bytes = tally.total_bytes(),
            commits,
            "Aggregated stats"
        );

        Ok(AggregatedStats {
            profile: user.into(),
            stars,
            forks,
            commits,
            languages: tally.shares(Some(self.config.top_languages)),
            contributions,
        })
    }

    async fn fetch_repositories(&self) -> Result<Vec<Repository>> {
        let repos = self
            .github
            .get_user_repos(&self.config.username, self.config.per_page)
            .await?;
        tracing::debug!("Fetched {} repositories", repos.len());
        Ok(repos)
    }

    async fn tally_languages(&self, repos: &[Repository]) -> LanguageTally {
        let sample = &repos[..repos.len().min(self.config.language_sample)];
        let results = self
            .fan_out(sample, |github, owner, name| async move {
                github.get_repo_languages(&owner, &name).await
            })
            .await;

        let mut tally = LanguageTally::new();
        for languages in successes(results) {
            tally.add_repository(&languages);
        }
        tally
    }

    async fn merge_activity(&self, repos: &[Repository]) -> WeeklyActivity {
        let sample = &repos[..repos.len().min(self.config.activity_sample)];
        let results: Vec<SubFetch<Vec<CommitActivityWeek>>> = self
            .fan_out(sample, |github, owner, name| async move {
                github.get_commit_activity(&owner, &name).await
            })
            .await;

        let mut activity = WeeklyActivity::new();
        for series in successes(results) {
            activity.merge_repository(&series);
        }
        activity
    }

    // At most `concurrency_limit` in flight; each task keeps its own outcome.
    async fn fan_out<T, F, Fut>(&self, repos: &[Repository], fetch: F) -> Vec<SubFetch<T>>
    where
        F: Fn(Arc<GitHubClient>, String, String) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit.max(1)));

        let tasks = repos.iter().map(|repo| {
            let sem = semaphore.clone();
            let repository = format!("{}/{}", repo.owner.login, repo.name);
            let fut = fetch(
                self.github.clone(),
                repo.owner.login.clone(),
                repo.name.clone(),
            );

            async move {
                let _permit = match sem.acquire().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        return SubFetch::Failed {
                            repository,
                            reason: e.to_string(),
                        }
                    }
                };

                match fut.await {
                    Ok(value) => SubFetch::Ok { repository, value },
                    Err(e) => SubFetch::Failed {
                        repository,
                        reason: e.to_string(),
                    },
                }
            }
        });

        join_all(tasks).await
    }
}

fn successes<T>(results: Vec<SubFetch<T>>) -> impl Iterator<Item = T> {
    results.into_iter().filter_map(|result| match result {
        SubFetch::Ok { value, .. } => Some(value),
        SubFetch::Failed { repository, reason } => {
            tracing::warn!("Skipping {}: {}", repository, reason);
            None
        }
    })
}

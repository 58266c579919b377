use reqwest::{header, Client, Response, StatusCode};
use std::collections::HashMap;

use crate::config::GitHubConfig;
use crate::error::{Error, Result};
use crate::models::{CommitActivityWeek, GitHubUser, Repository};

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = &config.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("portfolio-api/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        let response = ensure_success(response, &format!("user {}", username)).await?;
        Ok(response.json().await?)
    }

    pub async fn get_user_repos(&self, username: &str, per_page: u32) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url, username, per_page
        );
        tracing::info!("Fetching repositories for: {}", username);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, &format!("repositories of {}", username)).await?;
        Ok(response.json().await?)
    }

    pub async fn get_repo_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<HashMap<String, u64>> {
        let url = format!("{}/repos/{}/{}/languages", self.base_url, owner, repo);
        tracing::debug!("Fetching languages for: {}/{}", owner, repo);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, &format!("languages of {}/{}", owner, repo)).await?;
        Ok(response.json().await?)
    }

    /// Weekly commit counts for the last year.
    ///
    /// GitHub answers `202 Accepted` while it computes the statistics; that
    /// surfaces as [`Error::StatsPending`]. An empty repository answers
    /// `204 No Content`, which is an empty series.
    pub async fn get_commit_activity(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<CommitActivityWeek>> {
        let url = format!(
            "{}/repos/{}/{}/stats/commit_activity",
            self.base_url, owner, repo
        );
        tracing::debug!("Fetching commit activity for: {}/{}", owner, repo);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::ACCEPTED => Err(Error::StatsPending(format!("{}/{}", owner, repo))),
            StatusCode::NO_CONTENT => Ok(Vec::new()),
            _ => {
                let response =
                    ensure_success(response, &format!("commit activity of {}/{}", owner, repo))
                        .await?;
                Ok(response.json().await?)
            }
        }
    }
}

async fn ensure_success(response: Response, what: &str) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::GitHubApi(format!(
        "Failed to fetch {}: {} - {}",
        what, status, body
    )))
}

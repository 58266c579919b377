//! Shared fixtures for the integration tests.
//!
//! Every test starts its own mockito server, which stands in for GitHub,
//! Sanity and the mail relay at once.

#![allow(dead_code)]

use async_trait::async_trait;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use portfolio_api::config::{GitHubConfig, SanityConfig, StatsConfig};
use portfolio_api::mail::{Delivery, Mailer};
use portfolio_api::models::ContactMessage;
use portfolio_api::{router, AppState, Error, GitHubClient, SanityClient, StatsAggregator};

pub const USER: &str = "octocat";

pub fn github_config(server: &ServerGuard) -> GitHubConfig {
    GitHubConfig {
        token: None,
        api_url: server.url(),
    }
}

pub fn aggregator(server: &ServerGuard, config: StatsConfig) -> StatsAggregator {
    let github = GitHubClient::new(&github_config(server)).unwrap();
    StatsAggregator::new(github, config)
}

pub fn sanity_client(server: &ServerGuard) -> SanityClient {
    let config = SanityConfig {
        api_url_override: Some(format!("{}/v2024-01-01/data/query/production", server.url())),
        ..SanityConfig::new("test")
    };
    SanityClient::new(&config).unwrap()
}

pub fn user_json() -> Value {
    json!({
        "login": USER,
        "id": 583231,
        "name": "The Octocat",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231",
        "html_url": "https://github.com/octocat",
        "bio": "Mascot",
        "public_repos": 3,
        "followers": 42,
        "following": 7
    })
}

pub fn repo_json(id: u64, name: &str, stars: u32, forks: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{} description", name),
        "html_url": format!("https://github.com/{}/{}", USER, name),
        "language": "JavaScript",
        "stargazers_count": stars,
        "forks_count": forks,
        "owner": { "login": USER }
    })
}

pub async fn mock_json(server: &mut ServerGuard, path: &str, status: usize, body: Value) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_user(server: &mut ServerGuard) -> Mock {
    mock_json(server, &format!("/users/{}", USER), 200, user_json()).await
}

pub async fn mock_repos(server: &mut ServerGuard, repos: Value) -> Mock {
    server
        .mock("GET", format!("/users/{}/repos", USER).as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(repos.to_string())
        .create_async()
        .await
}

pub async fn mock_languages(server: &mut ServerGuard, repo: &str, status: usize, body: Value) -> Mock {
    mock_json(server, &format!("/repos/{}/{}/languages", USER, repo), status, body).await
}

pub async fn mock_activity(server: &mut ServerGuard, repo: &str, status: usize, body: Value) -> Mock {
    mock_json(
        server,
        &format!("/repos/{}/{}/stats/commit_activity", USER, repo),
        status,
        body,
    )
    .await
}

/// Records every message it is asked to send.
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ContactMessage>>,
    failure: Option<String>,
}

impl RecordingMailer {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            failure: None,
        })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(reason.to_string()),
        })
    }

    pub fn calls(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_contact(&self, message: &ContactMessage) -> portfolio_api::Result<Delivery> {
        self.sent.lock().unwrap().push(message.clone());
        match &self.failure {
            Some(reason) => Err(Error::Email(reason.clone())),
            None => Ok(Delivery {
                message_id: Some("msg-1".to_string()),
            }),
        }
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Serves the router on an ephemeral port and returns its base URL.
pub async fn spawn_app(server: &ServerGuard, mailer: Arc<dyn Mailer>) -> String {
    let state = AppState::new(
        aggregator(server, StatsConfig::new(USER)),
        sanity_client(server),
        mailer,
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    format!("http://{}", addr)
}

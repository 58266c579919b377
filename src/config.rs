use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_MAIL_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone)]
pub struct Config {
    pub github: GitHubConfig,
    pub stats: StatsConfig,
    pub sanity: SanityConfig,
    pub mail: Option<MailConfig>,
    pub bind_address: String,
}

#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub token: Option<String>,
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_GITHUB_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub username: String,
    pub per_page: u32,
    pub language_sample: usize,
    pub activity_sample: usize,
    pub activity_weeks: usize,
    pub top_languages: usize,
    pub concurrency_limit: usize,
}

impl StatsConfig {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            per_page: 100,
            language_sample: 10,
            activity_sample: 5,
            activity_weeks: 4,
            top_languages: 5,
            concurrency_limit: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub document_type: String,
    pub api_url_override: Option<String>,
}

impl SanityConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            document_type: "project".to_string(),
            api_url_override: None,
        }
    }

    pub fn query_url(&self) -> String {
        match &self.api_url_override {
            Some(url) => url.clone(),
            None => format!(
                "https://{}.api.sanity.io/v{}/data/query/{}",
                self.project_id, self.api_version, self.dataset
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
    pub to: String,
}

impl Config {
    pub fn from_env(username: Option<String>) -> Result<Self> {
        let username = match username {
            Some(username) => username,
            None => env::var("GITHUB_USERNAME").map_err(|_| {
                Error::Config("GITHUB_USERNAME environment variable not set".to_string())
            })?,
        };

        let github = GitHubConfig {
            token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string()),
        };

        let defaults = StatsConfig::new(username);
        let stats = StatsConfig {
            language_sample: parse_or("LANGUAGE_SAMPLE_SIZE", defaults.language_sample)?,
            activity_sample: parse_or("ACTIVITY_SAMPLE_SIZE", defaults.activity_sample)?,
            activity_weeks: parse_or("ACTIVITY_WEEKS", defaults.activity_weeks)?,
            top_languages: parse_or("TOP_LANGUAGES", defaults.top_languages)?,
            concurrency_limit: parse_or("CONCURRENCY_LIMIT", defaults.concurrency_limit)?,
            ..defaults
        };

        if stats.concurrency_limit == 0 {
            return Err(Error::Config("CONCURRENCY_LIMIT must be at least 1".to_string()));
        }

        let project_id = env::var("SANITY_PROJECT_ID")
            .map_err(|_| Error::Config("SANITY_PROJECT_ID environment variable not set".to_string()))?;
        let sanity_defaults = SanityConfig::new(project_id);
        let sanity = SanityConfig {
            dataset: env::var("SANITY_DATASET").unwrap_or(sanity_defaults.dataset.clone()),
            api_version: env::var("SANITY_API_VERSION")
                .unwrap_or(sanity_defaults.api_version.clone()),
            document_type: env::var("SANITY_DOCUMENT_TYPE")
                .unwrap_or(sanity_defaults.document_type.clone()),
            api_url_override: env::var("SANITY_API_URL").ok(),
            ..sanity_defaults
        };

        let mail = match env::var("MAIL_API_KEY").ok().filter(|k| !k.is_empty()) {
            Some(api_key) => Some(MailConfig {
                api_url: env::var("MAIL_API_URL")
                    .unwrap_or_else(|_| DEFAULT_MAIL_API_URL.to_string()),
                api_key,
                from: env::var("MAIL_FROM").map_err(|_| {
                    Error::Config("MAIL_FROM must be set when MAIL_API_KEY is".to_string())
                })?,
                to: env::var("MAIL_TO").map_err(|_| {
                    Error::Config("MAIL_TO must be set when MAIL_API_KEY is".to_string())
                })?,
            }),
            None => None,
        };

        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        Ok(Self {
            github,
            stats,
            sanity,
            mail,
            bind_address,
        })
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} has an invalid value: {}", key, raw))),
        Err(_) => Ok(default),
    }
}

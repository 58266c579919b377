use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Statistics for {0} are still being computed")]
    StatsPending(String),

    #[error("Sanity API error: {0}")]
    Sanity(String),

    #[error("Failed to send email: {0}")]
    Email(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::GitHubApi(_)
                | Error::UserNotFound(_)
                | Error::StatsPending(_)
                | Error::Sanity(_)
                | Error::Network(_)
        )
    }
}

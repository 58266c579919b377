pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod stats;
pub mod sanity;
pub mod mail;
pub mod server;

pub use config::{Config, StatsConfig};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use mail::{HttpMailer, Mailer, UnconfiguredMailer};
pub use sanity::SanityClient;
pub use server::{router, AppState};
pub use stats::StatsAggregator;

pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::mail::Mailer;
use crate::sanity::SanityClient;
use crate::stats::StatsAggregator;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub stats: Arc<StatsAggregator>,
    pub projects: Arc<SanityClient>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(
        stats: StatsAggregator,
        projects: SanityClient,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            stats: Arc::new(stats),
            projects: Arc::new(projects),
            mailer,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::routes())
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
}

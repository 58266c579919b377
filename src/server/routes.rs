//! JSON endpoints.
//!
//! - `GET /api/github/user` - profile of the configured user
//! - `GET /api/github/repos` - first page of repositories, most recently updated first
//! - `GET /api/github/languages` - language shares over the sampled repositories
//! - `GET /api/github/contributions` - merged weekly commit activity
//! - `GET /api/github/stats` - aggregated snapshot
//! - `GET /api/sanity/projects` - every project document
//! - `GET /api/sanity/projects/featured` - featured projects only
//! - `POST /api/contact` - validate and relay a contact message

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{
    AggregatedStats, ContactMessage, ContactResponse, ContributionSummary, LanguageShare,
    Profile, Project, RepositorySummary,
};
use crate::server::error::ApiError;
use crate::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/github/user", get(github_user))
        .route("/github/repos", get(github_repos))
        .route("/github/languages", get(github_languages))
        .route("/github/contributions", get(github_contributions))
        .route("/github/stats", get(github_stats))
        .route("/sanity/projects", get(projects))
        .route("/sanity/projects/featured", get(featured_projects))
        .route("/contact", post(send_contact))
}

async fn github_user(State(state): State<AppState>) -> Result<Json<Profile>, ApiError> {
    state
        .stats
        .profile()
        .await
        .map(Json)
        .map_err(|e| ApiError::upstream("Error fetching GitHub user", e))
}

async fn github_repos(
    State(state): State<AppState>,
) -> Result<Json<Vec<RepositorySummary>>, ApiError> {
    state
        .stats
        .repositories()
        .await
        .map(Json)
        .map_err(|e| ApiError::upstream("Error fetching GitHub repositories", e))
}

async fn github_languages(
    State(state): State<AppState>,
) -> Result<Json<Vec<LanguageShare>>, ApiError> {
    state
        .stats
        .language_distribution()
        .await
        .map(Json)
        .map_err(|e| ApiError::upstream("Error fetching GitHub languages", e))
}

async fn github_contributions(
    State(state): State<AppState>,
) -> Result<Json<ContributionSummary>, ApiError> {
    state
        .stats
        .contribution_summary()
        .await
        .map(Json)
        .map_err(|e| ApiError::upstream("Error fetching GitHub contributions", e))
}

async fn github_stats(State(state): State<AppState>) -> Result<Json<AggregatedStats>, ApiError> {
    state
        .stats
        .aggregate()
        .await
        .map(Json)
        .map_err(|e| ApiError::upstream("Error fetching GitHub statistics", e))
}

async fn projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    state
        .projects
        .projects()
        .await
        .map(Json)
        .map_err(|e| ApiError::upstream("Error fetching projects from Sanity", e))
}

async fn featured_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, ApiError> {
    state
        .projects
        .featured_projects()
        .await
        .map(Json)
        .map_err(|e| ApiError::upstream("Error fetching featured projects from Sanity", e))
}

async fn send_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let Json(message) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::info!("Rejected contact payload: {}", rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(ContactResponse::failed(rejection.body_text())),
            );
        }
    };

    if let Err(errors) = message.validate() {
        tracing::info!(fields = errors.len(), "Contact message failed validation");
        return (StatusCode::BAD_REQUEST, Json(ContactResponse::invalid(errors)));
    }

    match state.mailer.send_contact(&message).await {
        Ok(delivery) => {
            tracing::info!(
                mailer = state.mailer.name(),
                message_id = ?delivery.message_id,
                "Contact message relayed"
            );
            (StatusCode::OK, Json(ContactResponse::sent()))
        }
        Err(e) => {
            tracing::error!(mailer = state.mailer.name(), "Contact relay failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::failed(e.to_string())),
            )
        }
    }
}

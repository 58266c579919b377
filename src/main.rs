use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use portfolio_api::{
    router, AppState, Config, GitHubClient, HttpMailer, Mailer, SanityClient, StatsAggregator,
    UnconfiguredMailer,
};

#[derive(Parser, Debug)]
#[command(name = "portfolio-api")]
#[command(version = "0.1.0")]
#[command(about = "Serve GitHub stats, the project list and the contact relay for the portfolio site")]
struct Args {
    /// Address to listen on (overrides BIND_ADDRESS)
    #[arg(short, long)]
    bind: Option<String>,

    /// GitHub user whose data is served (overrides GITHUB_USERNAME)
    #[arg(short, long)]
    username: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("portfolio_api=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load configuration
    let mut config = Config::from_env(args.username)?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }

    // Initialize clients
    let github = GitHubClient::new(&config.github)?;
    let stats = StatsAggregator::new(github, config.stats.clone());
    let projects = SanityClient::new(&config.sanity)?;

    let mailer: Arc<dyn Mailer> = match config.mail.clone() {
        Some(mail) => Arc::new(HttpMailer::new(mail)?),
        None => {
            tracing::warn!("MAIL_API_KEY not set, contact messages will be rejected");
            Arc::new(UnconfiguredMailer)
        }
    };

    let app = router(AppState::new(stats, projects, mailer));

    tracing::info!(
        bind_address = config.bind_address.as_str(),
        username = config.stats.username.as_str(),
        authenticated = config.github.token.is_some(),
        "Starting HTTP server"
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

mod automation;
mod classifier;
mod config;
mod errors;
mod jobs;
mod models;
mod notify;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::automation::dry_run::DryRunDriver;
use crate::classifier::taxonomy::Taxonomy;
use crate::config::Config;
use crate::jobs::queue::JobQueue;
use crate::jobs::worker::WorkerContext;
use crate::notify::Notifier;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cappocas API v{}", env!("CARGO_PKG_VERSION"));

    // Build the category taxonomy once; every classifier call reads it
    // through the Arc, nothing mutates it afterwards.
    let taxonomy = Arc::new(Taxonomy::builtin());
    info!("Category taxonomy loaded ({} categories)", taxonomy.len());

    // Webhook notifier (disabled unless DISCORD_WEBHOOK_URL is set)
    let notifier = Notifier::new(config.discord_webhook_url.clone());
    info!(
        "Discord notifications {}",
        if notifier.is_configured() { "enabled" } else { "disabled" }
    );

    // Posting worker pool. The dry-run driver walks plans without a browser;
    // a real session driver plugs in here.
    let jobs = JobQueue::start(
        config.posting_workers,
        WorkerContext {
            taxonomy: Arc::clone(&taxonomy),
            driver: Arc::new(DryRunDriver),
            notifier: notifier.clone(),
            min_post_delay_secs: config.min_delay_between_posts,
            max_post_delay_secs: config.max_delay_between_posts,
        },
    );
    info!("Posting queue started ({} workers)", config.posting_workers);

    // Build app state
    let state = AppState {
        taxonomy,
        jobs,
        notifier: notifier.clone(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    notifier.notify_app_start().await;

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

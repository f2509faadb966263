mod config;
mod controller;
mod data;
mod domain;
mod dto;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, error::AppError, service::admin::code::AdminCodeService, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;

    let admin_code_service = AdminCodeService::new();

    tracing::info!("Starting server");

    // Issue a one-time admin login link if this is a fresh deployment
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    // Start the bid settlement scheduler in a separate task
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::bid_settlement::start_scheduler(scheduler_db).await {
            tracing::error!("Bid settlement scheduler error: {}", e);
        }
    });

    let app = router::router()?
        .with_state(AppState::new(
            db,
            admin_code_service,
            config.standings,
            config.app_url.clone(),
        ))
        .layer(session_layer);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

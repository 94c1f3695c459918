mod config;
mod db;
mod routes;
mod services;
mod state;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if let Some(seed) = &config.admin {
        match services::auth::seed_admin(&pool, seed).await {
            Ok(id) => tracing::info!(user_id = %id, username = %seed.username, "admin account ready"),
            Err(e) => tracing::error!(error = %e, "admin seed failed"),
        }
    }

    let _sweeper = services::session::spawn_session_sweeper(pool.clone(), Duration::from_secs(config.session_sweep_secs));

    let port = config.port;
    let state = state::AppState::new(pool, config);

    // Serve the API alone when cargo-leptos metadata is unavailable.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos frontend unavailable, serving API only");
            routes::app(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "shopfloor listening");
    axum::serve(listener, app).await.expect("server failed");
}

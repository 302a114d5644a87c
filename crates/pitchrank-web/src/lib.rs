//! Pitchrank Web Server
//!
//! Axum-based web server for the dashboard and REST API. The REST surface
//! is flat (no `/api` prefix) because the dashboard and existing clients
//! address the endpoints directly.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use axum::{
    routing::{delete, get, put},
    Router,
};
use pitchrank_graph::GraphClient;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::dashboard::index))
        // Ranking
        .route("/ranking", get(routes::ranking::get_ranking))
        // Catalog
        .route("/leagues", get(routes::catalog::get_leagues))
        .route("/seasons", get(routes::catalog::get_seasons))
        .route("/teams", get(routes::catalog::get_teams))
        // Stats
        .route("/head_to_head", get(routes::stats::get_head_to_head))
        .route("/team_trend", get(routes::stats::get_team_trend))
        // Matches
        .route("/matches", get(routes::matches::get_matches))
        .route("/match_stats", get(routes::matches::get_match_stats))
        .route("/add_match", put(routes::matches::add_match))
        .route("/update_match", put(routes::matches::update_match))
        .route("/delete_match", delete(routes::matches::delete_match))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(graph: GraphClient, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(graph);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

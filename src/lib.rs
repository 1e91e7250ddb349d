pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::SubmissionStore;
use crate::state::{AppState, SharedState};

pub fn build_app(config: &Config, store: Arc<dyn SubmissionStore>) -> Router {
    let state: SharedState = Arc::new(AppState { store });

    Router::new()
        .merge(routes::form_routes())
        .layer(RequestBodyLimitLayer::new(config.max_body_size))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

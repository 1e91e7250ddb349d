pub mod form;

use axum::Router;
use axum::routing::post;

use crate::state::SharedState;

pub fn form_routes() -> Router<SharedState> {
    Router::new().route("/api/form", post(form::submit))
}

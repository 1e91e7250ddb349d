use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::StoredSubmission;
use crate::state::SharedState;
use crate::submission::fields;

#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub status: &'static str,
    pub data: StoredSubmission,
}

pub async fn submit(
    State(state): State<SharedState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<FormResponse>, AppError> {
    let submission = fields::from_body(body)?;
    let stored = state.store.insert(submission).await?;

    tracing::info!("Saved submission {}", stored.id);

    Ok(Json(FormResponse {
        status: "OK",
        data: stored,
    }))
}

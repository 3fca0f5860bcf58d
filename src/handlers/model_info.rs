//! Model info handler

use axum::{extract::State, Json};

use crate::logic::model::EngineStatus;
use crate::AppState;

/// Engine status snapshot for the UI
pub async fn get_status(State(state): State<AppState>) -> Json<EngineStatus> {
    Json(state.model.status())
}

//! Prediction handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::logic::features::{encode, project};
use crate::models::Itinerary;
use crate::{AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Raw model output
    pub price: f32,
    /// Display string, e.g. "$12,345.67"
    pub formatted: String,
    pub schema_version: u8,
    pub inference_time_us: u64,
}

/// Estimate the fare for one itinerary
pub async fn estimate(
    State(state): State<AppState>,
    Json(itinerary): Json<Itinerary>,
) -> AppResult<Json<PredictResponse>> {
    itinerary.validate(chrono::Local::now().date_naive())?;

    let row = encode(&itinerary);
    let vector = project(&row, state.model.schema());
    let prediction = state.model.predict(&vector)?;

    tracing::debug!(
        "Predicted {} for {} -> {} ({})",
        prediction.price,
        itinerary.source,
        itinerary.destination,
        itinerary.airline
    );

    Ok(Json(PredictResponse {
        price: prediction.price,
        formatted: format_usd(prediction.price),
        schema_version: state.model.schema().version,
        inference_time_us: prediction.inference_time_us,
    }))
}

/// Format a price as a US-dollar string with thousands grouping
fn format_usd(amount: f32) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() as f64 * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

//! Farecast - Flight Fare Estimation Service
//!
//! Serves a single-page itinerary form and a prediction API backed by a
//! pre-trained ONNX regression model.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       FARECAST                           │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌──────────┐    ┌───────────────┐    ┌──────────────┐  │
//! │  │  Form    │    │  Feature      │    │  ONNX Model  │  │
//! │  │  Page    │───▶│  Aligner      │───▶│  (ort)       │  │
//! │  │  (Axum)  │    │  encode +     │    │  predict()   │  │
//! │  └──────────┘    │  project      │    └──────────────┘  │
//! │                  └───────────────┘                       │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod logic;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::features::FeatureSchema;
use logic::model::FareModel;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farecast=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Farecast server starting...");

    // Feature schema shipped alongside the model wins over the compiled-in
    // layout; the loader logs any drift between the two.
    let schema = FeatureSchema::load_or_default(&config.schema_path);
    tracing::info!(
        "Feature schema v{} ({} columns, hash {:08x})",
        schema.version,
        schema.len(),
        schema.hash()
    );

    // Load the model once; it stays read-only for the process lifetime
    let model = FareModel::load(&config.model_path, schema).expect("Failed to load fare model");
    tracing::info!("Model loaded from {}", config.model_path);

    // Build application state
    let state = AppState {
        model: Arc::new(model),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<FareModel>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page::index))
        .route("/health", get(handlers::health::check))
        .route("/api/v1/model", get(handlers::model_info::get_status))
        .route("/api/v1/predict", post(handlers::predict::estimate))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

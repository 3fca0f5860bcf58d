//! Inference Engine - ONNX Runtime Integration
//!
//! Wraps one loaded ONNX session in an immutable handle that is created at
//! startup and injected wherever predictions happen.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::features::{FeatureSchema, FeatureVector};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata captured at load time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub schema_version: u8,
    pub feature_count: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Engine status for the model info endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_path: String,
    pub schema_version: u8,
    pub feature_count: usize,
    pub inference_device: String,
    pub avg_latency_ms: f32,
    pub prediction_count: u64,
}

/// One regression output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub price: f32,
    pub inference_time_us: u64,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Feature vector does not match model schema (expected v{expected_version}, hash {expected_hash:08x})")]
    SchemaMismatch {
        expected_version: u8,
        expected_hash: u32,
    },

    #[error("Tensor error: {0}")]
    Tensor(String),

    #[error("Model produced no output")]
    EmptyOutput,
}

// ============================================================================
// FARE MODEL
// ============================================================================

/// Immutable handle around one loaded ONNX regression model.
///
/// The session itself needs `&mut` to run, so it sits behind a mutex;
/// everything else is read-only after load.
pub struct FareModel {
    session: Mutex<Session>,
    schema: FeatureSchema,
    metadata: ModelMetadata,
    latency_sum_us: AtomicU64,
    prediction_count: AtomicU64,
}

impl FareModel {
    /// Load the ONNX artifact. Startup-only; fails fast when missing.
    pub fn load(model_path: &str, schema: FeatureSchema) -> Result<Self, InferenceError> {
        if !Path::new(model_path).exists() {
            return Err(InferenceError::ModelNotFound(model_path.to_string()));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError::Session(format!("Failed to create session builder: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::Session(format!("Failed to set optimization: {e}")))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::Session(format!("Failed to load model: {e}")))?;

        let metadata = ModelMetadata {
            model_path: model_path.to_string(),
            schema_version: schema.version,
            feature_count: schema.len(),
            loaded_at: chrono::Utc::now(),
        };

        Ok(Self {
            session: Mutex::new(session),
            schema,
            metadata,
            latency_sum_us: AtomicU64::new(0),
            prediction_count: AtomicU64::new(0),
        })
    }

    /// The feature schema this model expects
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Run one regression prediction
    pub fn predict(&self, vector: &FeatureVector) -> Result<Prediction, InferenceError> {
        if !vector.is_compatible(&self.schema) {
            return Err(InferenceError::SchemaMismatch {
                expected_version: self.schema.version,
                expected_hash: self.schema.hash(),
            });
        }

        let start_time = std::time::Instant::now();

        let input_array =
            Array2::<f32>::from_shape_vec((1, vector.len()), vector.as_slice().to_vec())
                .map_err(|e| InferenceError::Tensor(format!("Array error: {e}")))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::Tensor(format!("Tensor error: {e}")))?;

        let mut session = self.session.lock();

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or(InferenceError::EmptyOutput)?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Session(format!("Inference failed: {e}")))?;

        let output = outputs.get(&output_name).ok_or(InferenceError::EmptyOutput)?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Tensor(format!("Extract error: {e}")))?;

        let price = output_tensor
            .1
            .first()
            .copied()
            .ok_or(InferenceError::EmptyOutput)?;

        let inference_time = start_time.elapsed().as_micros() as u64;
        self.latency_sum_us.fetch_add(inference_time, Ordering::Relaxed);
        self.prediction_count.fetch_add(1, Ordering::Relaxed);

        Ok(Prediction {
            price,
            inference_time_us: inference_time,
        })
    }

    /// Status snapshot for the UI
    pub fn status(&self) -> EngineStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.prediction_count.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        };

        EngineStatus {
            model_path: self.metadata.model_path.clone(),
            schema_version: self.metadata.schema_version,
            feature_count: self.metadata.feature_count,
            inference_device: "ONNX Runtime (CPU)".to_string(),
            avg_latency_ms: avg,
            prediction_count: count,
        }
    }
}

//! Model Module - ONNX Inference

pub mod inference;

pub use inference::{EngineStatus, FareModel, InferenceError, Prediction};

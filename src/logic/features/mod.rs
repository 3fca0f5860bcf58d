//! Features Module - Itinerary Feature Pipeline
//!
//! Turns one raw itinerary into a model-ready feature vector:
//! encode (date numerics + one-hot indicators), then project onto the
//! model's feature schema.

pub mod align;
pub mod encode;
pub mod schema;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use align::project;
pub use encode::{encode, EncodedRow};
pub use schema::{FeatureSchema, SchemaError, SCHEMA_VERSION};
pub use vector::FeatureVector;

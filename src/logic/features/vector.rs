//! Feature Vector - Model Input
//!
//! Produced only by schema projection, so values are always in schema
//! order with the schema's exact column set.

use serde::{Deserialize, Serialize};

use super::schema::FeatureSchema;

/// Ordered feature values stamped with the schema they were built against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Schema version the vector was projected onto
    pub version: u8,
    /// Hash of the schema layout (for mismatch detection)
    pub schema_hash: u32,
    /// Feature values in schema column order
    pub values: Vec<f32>,
}

impl FeatureVector {
    /// Create a zeroed vector shaped like `schema`
    pub fn zeroed(schema: &FeatureSchema) -> Self {
        Self {
            version: schema.version,
            schema_hash: schema.hash(),
            values: vec![0.0; schema.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get feature by name, resolved through `schema`
    pub fn get_by_name(&self, schema: &FeatureSchema, name: &str) -> Option<f32> {
        schema.column_index(name).and_then(|i| self.get(i))
    }

    /// Check that this vector was projected onto `schema`
    pub fn is_compatible(&self, schema: &FeatureSchema) -> bool {
        self.version == schema.version && self.schema_hash == schema.hash()
    }
}

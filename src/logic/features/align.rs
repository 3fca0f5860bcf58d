//! Schema Projection
//!
//! Deterministic alignment of an encoded row onto the model's feature
//! schema: columns are reordered to schema order, schema columns the
//! encoder did not produce are zero-filled, produced columns missing from
//! the schema are dropped.

use super::encode::EncodedRow;
use super::schema::FeatureSchema;
use super::vector::FeatureVector;

/// Project an encoded row onto `schema`.
///
/// The result's column set and order equal the schema exactly.
pub fn project(row: &EncodedRow, schema: &FeatureSchema) -> FeatureVector {
    let mut vector = FeatureVector::zeroed(schema);

    for (name, value) in row {
        match schema.column_index(name) {
            Some(index) => vector.values[index] = *value,
            None => tracing::debug!(
                "Dropping column {:?}: not in schema v{}",
                name,
                schema.version
            ),
        }
    }

    vector
}

//! Feature Schema - Persisted Training-Time Layout
//!
//! Single source of truth for what the model consumes. The encoder tables
//! below are the persisted training-time encoder: category levels and the
//! dropped reference level per field are fixed here, never refit from
//! request data.
//!
//! ## Rules (NEVER break these):
//! 1. Add or remove a column → increment SCHEMA_VERSION
//! 2. Change column order → increment SCHEMA_VERSION
//! 3. Change a reference level → increment SCHEMA_VERSION

use std::path::Path;

use crc32fast::Hasher;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// SCHEMA VERSION
// ============================================================================

/// Current feature schema version
pub const SCHEMA_VERSION: u8 = 1;

// ============================================================================
// TRAINING-TIME ENCODER TABLES (authoritative source)
// ============================================================================

/// One categorical field of the persisted encoder
#[derive(Debug, Clone, Copy)]
pub struct CategoryField {
    /// Column prefix, e.g. "Source"
    pub column: &'static str,
    /// Dropped reference level: all indicators zero when selected
    pub reference: &'static str,
    /// Indicator levels in schema column order
    pub levels: &'static [&'static str],
}

/// Date-derived numeric columns, retained unencoded
pub const NUMERIC_COLUMNS: &[&str] = &[
    "Journey_Day",        // departure day of month
    "Journey_Month",      // departure month
    "Trip_Duration_Days", // arrival - departure, whole days
];

/// Categorical fields exactly as the training pipeline encoded them
pub const CATEGORY_FIELDS: &[CategoryField] = &[
    CategoryField {
        column: "Airline",
        reference: "Air India",
        levels: &[
            "GoAir",
            "IndiGo",
            "Jet Airways",
            "Jet Airways Business",
            "Multiple carriers",
            "Multiple carriers Premium economy",
            "SpiceJet",
            "Trujet",
            "Vistara",
            "Vistara Premium economy",
        ],
    },
    CategoryField {
        column: "Source",
        reference: "Chennai",
        levels: &["Delhi", "Kolkata", "Mumbai"],
    },
    CategoryField {
        column: "Destination",
        reference: "New Delhi",
        levels: &["Cochin", "Delhi", "Hyderabad", "Kolkata"],
    },
    CategoryField {
        column: "Stoppage",
        reference: "4 Stops",
        levels: &["Non-stop", "1 Stop", "2 Stops", "3 Stops"],
    },
];

/// All column names in vector order: numerics first, then indicators
pub static FEATURE_COLUMNS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut columns: Vec<String> = NUMERIC_COLUMNS.iter().map(|s| s.to_string()).collect();
    for field in CATEGORY_FIELDS {
        for level in field.levels {
            columns.push(format!("{}_{}", field.column, level));
        }
    }
    columns
});

// ============================================================================
// SCHEMA ARTIFACT
// ============================================================================

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read schema artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse schema artifact: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Versioned, ordered feature schema.
///
/// Shipped alongside the model artifact; the loaded copy is what the model
/// was trained against and wins over the compiled-in layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureSchema {
    pub version: u8,
    pub columns: Vec<String>,
}

impl FeatureSchema {
    /// Schema produced by the compiled-in encoder tables
    pub fn current() -> Self {
        Self {
            version: SCHEMA_VERSION,
            columns: FEATURE_COLUMNS.clone(),
        }
    }

    /// Load a schema artifact from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let raw = std::fs::read_to_string(path)?;
        let schema = serde_json::from_str(&raw)?;
        Ok(schema)
    }

    /// Load the shipped artifact, falling back to the compiled-in schema.
    ///
    /// A shipped artifact that drifted from the compiled-in encoder is used
    /// anyway (it is what the model was trained against); the drift is
    /// logged. Columns the encoder no longer produces are zero-filled at
    /// projection time.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(schema) => {
                let current = Self::current();
                if schema != current {
                    tracing::warn!(
                        "Schema artifact {} (v{}, hash {:08x}) differs from compiled-in layout (v{}, hash {:08x})",
                        path.display(),
                        schema.version,
                        schema.hash(),
                        current.version,
                        current.hash(),
                    );
                }
                schema
            }
            Err(e) => {
                tracing::warn!(
                    "Schema artifact {} unavailable ({}), using compiled-in layout",
                    path.display(),
                    e
                );
                Self::current()
            }
        }
    }

    /// CRC32 hash over version and column names, for mismatch detection
    pub fn hash(&self) -> u32 {
        let mut hasher = Hasher::new();
        hasher.update(&[self.version]);
        for name in &self.columns {
            hasher.update(name.as_bytes());
            hasher.update(&[0]); // Separator
        }
        hasher.finalize()
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column index by name (O(n) but columns are few)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|n| n == name)
    }

    /// Get column name by index
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|s| s.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

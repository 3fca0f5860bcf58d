//! One-Hot Encoding - Persisted Training-Time Encoder
//!
//! Encodes one itinerary with the category tables from `schema.rs`. A value
//! outside a field's table (or equal to its dropped reference level) leaves
//! every indicator for that field at zero; unknown values are logged but
//! never rejected.

use chrono::Datelike;

use crate::models::Itinerary;

use super::schema::{CategoryField, CATEGORY_FIELDS};

/// Named columns produced for one itinerary, before schema projection
pub type EncodedRow = Vec<(String, f32)>;

/// Encode an itinerary: date-derived numerics plus one-hot indicators
pub fn encode(itinerary: &Itinerary) -> EncodedRow {
    let mut row: EncodedRow = Vec::new();

    row.push((
        "Journey_Day".to_string(),
        itinerary.departure_date.day() as f32,
    ));
    row.push((
        "Journey_Month".to_string(),
        itinerary.departure_date.month() as f32,
    ));
    row.push((
        "Trip_Duration_Days".to_string(),
        itinerary.duration_days() as f32,
    ));

    for field in CATEGORY_FIELDS {
        let value = raw_value(itinerary, field);
        if value != field.reference && !field.levels.iter().any(|&l| l == value) {
            tracing::warn!(
                "Unknown {} value {:?}: encoding as all-zero indicators",
                field.column,
                value
            );
        }
        for level in field.levels {
            let hit = if value == *level { 1.0 } else { 0.0 };
            row.push((format!("{}_{}", field.column, level), hit));
        }
    }

    row
}

/// Raw itinerary value for one categorical field
fn raw_value<'a>(itinerary: &'a Itinerary, field: &CategoryField) -> &'a str {
    // CATEGORY_FIELDS only names these four fields
    match field.column {
        "Airline" => &itinerary.airline,
        "Source" => &itinerary.source,
        "Destination" => &itinerary.destination,
        _ => &itinerary.stoppage,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::logic::features::FeatureSchema;

    fn itinerary() -> Itinerary {
        Itinerary {
            departure_date: NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
            arrival_date: NaiveDate::from_ymd_opt(2026, 9, 18).unwrap(),
            source: "Delhi".to_string(),
            destination: "Cochin".to_string(),
            stoppage: "Non-stop".to_string(),
            airline: "IndiGo".to_string(),
        }
    }

    fn value(row: &EncodedRow, name: &str) -> f32 {
        row.iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
            .unwrap()
    }

    #[test]
    fn test_date_numerics() {
        let row = encode(&itinerary());
        assert_eq!(value(&row, "Journey_Day"), 15.0);
        assert_eq!(value(&row, "Journey_Month"), 9.0);
        assert_eq!(value(&row, "Trip_Duration_Days"), 3.0);
    }

    #[test]
    fn test_one_hot_selected_levels() {
        let row = encode(&itinerary());
        assert_eq!(value(&row, "Source_Delhi"), 1.0);
        assert_eq!(value(&row, "Destination_Cochin"), 1.0);
        assert_eq!(value(&row, "Stoppage_Non-stop"), 1.0);
        assert_eq!(value(&row, "Airline_IndiGo"), 1.0);
    }

    #[test]
    fn test_one_hot_siblings_zero() {
        let row = encode(&itinerary());
        assert_eq!(value(&row, "Source_Kolkata"), 0.0);
        assert_eq!(value(&row, "Source_Mumbai"), 0.0);
        assert_eq!(value(&row, "Airline_SpiceJet"), 0.0);
        assert_eq!(value(&row, "Stoppage_2 Stops"), 0.0);
    }

    #[test]
    fn test_reference_level_encodes_all_zero() {
        let mut it = itinerary();
        it.source = "Chennai".to_string();
        let row = encode(&it);
        for level in ["Delhi", "Kolkata", "Mumbai"] {
            assert_eq!(value(&row, &format!("Source_{level}")), 0.0);
        }
    }

    #[test]
    fn test_unknown_value_encodes_all_zero() {
        let mut it = itinerary();
        it.airline = "Air Atlantis".to_string();
        let row = encode(&it);

        let airline_sum: f32 = row
            .iter()
            .filter(|(n, _)| n.starts_with("Airline_"))
            .map(|(_, v)| v)
            .sum();
        assert_eq!(airline_sum, 0.0);
    }

    #[test]
    fn test_row_matches_schema_width() {
        let row = encode(&itinerary());
        assert_eq!(row.len(), FeatureSchema::current().len());
    }
}

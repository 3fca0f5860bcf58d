//! Integration tests for the feature pipeline
//!
//! Exercises encode + project together against the full schema.

#[cfg(test)]
mod integration_tests {
    use chrono::NaiveDate;

    use crate::logic::features::{encode, project, FeatureSchema};
    use crate::models::Itinerary;

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

    /// Key set and order of the produced vector equal the schema exactly
    #[test]
    fn test_vector_matches_schema_shape() {
        let schema = FeatureSchema::current();
        let vector = project(&encode(&itinerary()), &schema);

        assert_eq!(vector.len(), schema.len());
        assert!(vector.is_compatible(&schema));
    }

    /// Delhi → Cochin, Non-stop, IndiGo
    #[test]
    fn test_worked_example() {
        let schema = FeatureSchema::current();
        let vector = project(&encode(&itinerary()), &schema);

        assert_eq!(vector.get_by_name(&schema, "Source_Delhi"), Some(1.0));
        assert_eq!(vector.get_by_name(&schema, "Destination_Cochin"), Some(1.0));
        assert_eq!(vector.get_by_name(&schema, "Stoppage_Non-stop"), Some(1.0));
        assert_eq!(vector.get_by_name(&schema, "Airline_IndiGo"), Some(1.0));

        assert_eq!(vector.get_by_name(&schema, "Journey_Day"), Some(15.0));
        assert_eq!(vector.get_by_name(&schema, "Journey_Month"), Some(9.0));
        assert_eq!(vector.get_by_name(&schema, "Trip_Duration_Days"), Some(3.0));

        // Exactly one indicator per categorical field is set
        let indicator_sum: f32 = vector.as_slice()[3..].iter().sum();
        assert_eq!(indicator_sum, 4.0);
    }

    /// Unknown category: all-zero block for that field, vector still
    /// schema-shaped
    #[test]
    fn test_unknown_category_stays_schema_shaped() {
        let schema = FeatureSchema::current();
        let mut it = itinerary();
        it.destination = "Atlantis".to_string();

        let vector = project(&encode(&it), &schema);

        assert_eq!(vector.len(), schema.len());
        for level in ["Cochin", "Delhi", "Hyderabad", "Kolkata"] {
            assert_eq!(
                vector.get_by_name(&schema, &format!("Destination_{level}")),
                Some(0.0)
            );
        }
        // Other fields are unaffected
        assert_eq!(vector.get_by_name(&schema, "Source_Delhi"), Some(1.0));
    }

    /// Reference levels encode exactly like the training pipeline dropped
    /// them: no indicator set anywhere in the field's block
    #[test]
    fn test_reference_levels_all_zero() {
        let schema = FeatureSchema::current();
        let mut it = itinerary();
        it.source = "Chennai".to_string();
        it.destination = "New Delhi".to_string();
        it.stoppage = "4 Stops".to_string();
        it.airline = "Air India".to_string();

        let vector = project(&encode(&it), &schema);

        let indicator_sum: f32 = vector.as_slice()[3..].iter().sum();
        assert_eq!(indicator_sum, 0.0);
    }

    /// A schema with extra columns (newer model) gets them zero-filled
    #[test]
    fn test_stale_form_against_newer_schema() {
        let mut schema = FeatureSchema::current();
        schema.columns.push("Airline_Akasa Air".to_string());

        let vector = project(&encode(&itinerary()), &schema);

        assert_eq!(vector.len(), schema.len());
        assert_eq!(vector.get_by_name(&schema, "Airline_Akasa Air"), Some(0.0));
    }
}

//! Itinerary model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One flight itinerary as submitted by the form page.
///
/// Categorical fields stay free-form strings: a value outside the trained
/// category tables must still reach the encoder (where it becomes an
/// all-zero indicator block), so deserialization never rejects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub departure_date: NaiveDate,
    pub arrival_date: NaiveDate,
    pub source: String,
    pub destination: String,
    pub stoppage: String,
    pub airline: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ItineraryError {
    #[error("Arrival date must not be before departure date")]
    ArrivalBeforeDeparture,

    #[error("Departure date must not be in the past")]
    DepartureInPast,
}

impl Itinerary {
    /// Validate the date invariants against `today`.
    ///
    /// The form page enforces the same constraints through widget minimums;
    /// this re-check covers direct API callers.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ItineraryError> {
        if self.arrival_date < self.departure_date {
            return Err(ItineraryError::ArrivalBeforeDeparture);
        }
        if self.departure_date < today {
            return Err(ItineraryError::DepartureInPast);
        }
        Ok(())
    }

    /// Trip length in whole days
    pub fn duration_days(&self) -> i64 {
        (self.arrival_date - self.departure_date).num_days()
    }
}

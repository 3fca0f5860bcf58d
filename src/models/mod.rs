//! Request domain models

pub mod itinerary;

pub use itinerary::{Itinerary, ItineraryError};

//! Day-level travel mode detection.

use crate::models::{AnnotatedEvent, Category};

/// Decides whether a day needs trip preparation.
///
/// A day is in travel mode when any event is a trip, or takes place at a
/// location that contains none of the familiar places.
#[derive(Debug, Clone)]
pub struct TravelModeDetector {
    familiar_locations: Vec<String>,
}

impl TravelModeDetector {
    pub fn new(familiar_locations: &[String]) -> Self {
        Self {
            familiar_locations: familiar_locations.iter().map(|l| l.to_lowercase()).collect(),
        }
    }

    pub fn is_familiar(&self, location: &str) -> bool {
        let location = location.to_lowercase();
        self.familiar_locations
            .iter()
            .any(|familiar| location.contains(familiar.as_str()))
    }

    pub fn detect(&self, events: &[AnnotatedEvent]) -> bool {
        events.iter().any(|event| {
            event.category == Category::Trip
                || event
                    .location
                    .as_deref()
                    .filter(|location| !location.is_empty())
                    .is_some_and(|location| !self.is_familiar(location))
        })
    }
}

impl Default for TravelModeDetector {
    fn default() -> Self {
        Self::new(&crate::config::PlanningSettings::default().familiar_locations)
    }
}

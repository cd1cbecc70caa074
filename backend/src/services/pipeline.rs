//! The event annotation pipeline.
//!
//! ```text
//! raw events ──► categorize ──┬──► drop all-day ─► sort ─► travel blocks ─► timeline
//!                             ├──► all-day events
//!                             └──► travel mode
//! ```

use tracing::debug;

use super::categorizer::Categorizer;
use super::travel::TravelSynthesizer;
use super::travel_mode::TravelModeDetector;
use crate::config::AppConfig;
use crate::models::{AnnotatedEvent, RawEvent};

/// Output of one pipeline pass.
#[derive(Debug, Clone, Default)]
pub struct AnnotatedDay {
    /// Timed events and travel blocks, ordered by start
    pub timeline: Vec<AnnotatedEvent>,
    pub all_day: Vec<AnnotatedEvent>,
    pub is_travel_mode: bool,
}

/// Pure, single-pass annotation of one day's events.
#[derive(Debug, Clone, Default)]
pub struct AnnotationPipeline {
    categorizer: Categorizer,
    synthesizer: TravelSynthesizer,
    detector: TravelModeDetector,
}

impl AnnotationPipeline {
    pub fn new(
        categorizer: Categorizer,
        synthesizer: TravelSynthesizer,
        detector: TravelModeDetector,
    ) -> Self {
        Self {
            categorizer,
            synthesizer,
            detector,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Categorizer::new(&config.categories),
            TravelSynthesizer::new(config.travel.clone()),
            TravelModeDetector::new(&config.planning.familiar_locations),
        )
    }

    pub fn categorize(&self, raw: RawEvent) -> AnnotatedEvent {
        let category = self
            .categorizer
            .categorize(&raw.summary, raw.description.as_deref());
        AnnotatedEvent::from_raw(raw, category)
    }

    pub fn annotate(&self, raw_events: Vec<RawEvent>) -> AnnotatedDay {
        let events: Vec<AnnotatedEvent> =
            raw_events.into_iter().map(|raw| self.categorize(raw)).collect();

        let timeline = self.synthesizer.synthesize(&events);
        let is_travel_mode = self.detector.detect(&events);
        let all_day: Vec<AnnotatedEvent> = events.into_iter().filter(|e| e.is_all_day()).collect();

        debug!(
            timeline = timeline.len(),
            all_day = all_day.len(),
            is_travel_mode,
            "Annotated day"
        );

        AnnotatedDay {
            timeline,
            all_day,
            is_travel_mode,
        }
    }
}

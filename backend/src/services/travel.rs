//! Travel-time synthesis between consecutive timed events.
//!
//! Real travel times are not known; the estimate takes a fixed share of the
//! idle gap, always leaving some slack, and reports a fraction of it as
//! buffer in the block's description.

use chrono::{DateTime, Duration, FixedOffset};
use tracing::debug;

use crate::config::TravelSettings;
use crate::models::{AnnotatedEvent, Category, EventSpan};

/// Travel estimate for one gap, all values in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelEstimate {
    pub gap_minutes: i64,
    pub travel_minutes: i64,
    /// Informational only, not added to the travel block
    pub buffer_minutes: i64,
}

impl TravelEstimate {
    /// Minutes the traveller would be late, when travel does not fit the gap.
    pub fn conflict_minutes(&self) -> Option<i64> {
        (self.travel_minutes > self.gap_minutes).then(|| self.travel_minutes - self.gap_minutes)
    }

    fn description(&self) -> String {
        if self.buffer_minutes > 0 {
            format!(
                "Tempo estimado: {} minutos (inclui {} min de folga)",
                self.travel_minutes, self.buffer_minutes
            )
        } else {
            format!("Tempo estimado: {} minutos", self.travel_minutes)
        }
    }
}

/// Inserts travel blocks into the gaps of a day's timeline.
#[derive(Debug, Clone)]
pub struct TravelSynthesizer {
    settings: TravelSettings,
}

impl TravelSynthesizer {
    pub fn new(settings: TravelSettings) -> Self {
        Self { settings }
    }

    /// Estimate travel for a gap, `None` when the gap is too small.
    pub fn estimate(&self, gap_minutes: i64) -> Option<TravelEstimate> {
        if gap_minutes <= 0 || gap_minutes < self.settings.min_gap_minutes {
            return None;
        }

        let proportional = gap_minutes * self.settings.travel_ratio_percent / 100;
        let travel_minutes = proportional
            .min(gap_minutes - self.settings.min_slack_minutes)
            .max(0);
        let buffer_minutes = travel_minutes * self.settings.buffer_percent / 100;

        Some(TravelEstimate {
            gap_minutes,
            travel_minutes,
            buffer_minutes,
        })
    }

    /// Build the timeline for a day.
    ///
    /// All-day events are dropped, timed events are stably sorted by start
    /// and a travel block is placed after every event followed by a large
    /// enough gap. An event whose preceding travel block overruns the gap is
    /// emitted as a flagged copy.
    pub fn synthesize(&self, events: &[AnnotatedEvent]) -> Vec<AnnotatedEvent> {
        let mut timed: Vec<&AnnotatedEvent> = events.iter().filter(|e| !e.is_all_day()).collect();
        timed.sort_by_key(|e| e.span.start_time());

        let mut timeline = Vec::with_capacity(timed.len() * 2);
        let mut pending_conflict: Option<i64> = None;

        for (i, event) in timed.iter().enumerate() {
            match pending_conflict.take() {
                Some(minutes) => timeline.push(event.with_travel_conflict(minutes)),
                None => timeline.push((*event).clone()),
            }

            let Some(next) = timed.get(i + 1) else {
                continue;
            };
            let (Some(end), Some(next_start)) = (event.span.end_time(), next.span.start_time())
            else {
                continue;
            };

            let gap_minutes = (next_start - end).num_minutes();
            let Some(estimate) = self.estimate(gap_minutes) else {
                continue;
            };

            debug!(
                from = %event.id,
                to = %next.id,
                gap_minutes,
                travel_minutes = estimate.travel_minutes,
                "Inserting travel block"
            );

            timeline.push(travel_event(i, end, next, &estimate));
            pending_conflict = estimate.conflict_minutes();
        }

        timeline
    }
}

impl Default for TravelSynthesizer {
    fn default() -> Self {
        Self::new(TravelSettings::default())
    }
}

fn travel_event(
    index: usize,
    start: DateTime<FixedOffset>,
    destination: &AnnotatedEvent,
    estimate: &TravelEstimate,
) -> AnnotatedEvent {
    let end = start + Duration::minutes(estimate.travel_minutes);

    AnnotatedEvent {
        id: format!("travel_{}_{}", index, index + 1),
        summary: format!("Deslocamento para {}", destination.summary),
        description: Some(estimate.description()),
        location: None,
        span: EventSpan::timed(start, end),
        category: Category::Transit,
        has_travel_conflict: false,
        travel_conflict_minutes: None,
    }
}

use chrono::NaiveDate;
use indexmap::IndexMap;

use super::event::AnnotatedEvent;
use super::weather::WeatherSnapshot;

/// Checklist sections keyed by heading, in display order.
pub type Checklist = IndexMap<String, Vec<String>>;

/// Everything the dashboard shows for one day. Built fresh per request.
#[derive(Debug, Clone)]
pub struct DayPlan {
    pub date: NaiveDate,
    /// Timed events in start order with travel blocks interleaved
    pub events: Vec<AnnotatedEvent>,
    /// Categorized all-day events, outside the timeline
    pub all_day_events: Vec<AnnotatedEvent>,
    pub weather: WeatherSnapshot,
    pub is_travel_mode: bool,
    pub travel_tips: Vec<String>,
    pub travel_checklist: Checklist,
}

//! Data Transfer Objects for the HTTP API.
//!
//! Field names follow the JSON the dashboard already consumes
//! (`is_all_day`, `has_travel_conflict`, ...).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AnnotatedEvent, Category, Checklist, DayPlan, WeatherSnapshot};

/// One entry of the day's agenda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDto {
    pub id: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// RFC 3339 for timed events, `YYYY-MM-DD` for all-day events
    pub start: String,
    pub end: String,
    pub category: Category,
    pub is_all_day: bool,
    #[serde(default)]
    pub has_travel_conflict: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_conflict_minutes: Option<i64>,
}

impl From<AnnotatedEvent> for EventDto {
    fn from(event: AnnotatedEvent) -> Self {
        Self {
            start: event.span.start_string(),
            end: event.span.end_string(),
            is_all_day: event.span.is_all_day(),
            id: event.id,
            summary: event.summary,
            description: event.description,
            location: event.location,
            category: event.category,
            has_travel_conflict: event.has_travel_conflict,
            travel_conflict_minutes: event.travel_conflict_minutes,
        }
    }
}

/// Response of `/api/calendar` and `/api/agenda`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlanResponse {
    pub date: NaiveDate,
    pub events: Vec<EventDto>,
    pub all_day_events: Vec<EventDto>,
    pub weather: WeatherSnapshot,
    pub is_travel_mode: bool,
    pub travel_tips: Vec<String>,
    pub travel_checklist: Checklist,
}

impl From<DayPlan> for DayPlanResponse {
    fn from(plan: DayPlan) -> Self {
        Self {
            date: plan.date,
            events: plan.events.into_iter().map(Into::into).collect(),
            all_day_events: plan.all_day_events.into_iter().map(Into::into).collect(),
            weather: plan.weather,
            is_travel_mode: plan.is_travel_mode,
            travel_tips: plan.travel_tips,
            travel_checklist: plan.travel_checklist,
        }
    }
}

/// Query parameters for the day plan endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DayQuery {
    /// Day to plan (default: tomorrow in the configured offset)
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Preparation steps for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistResponse {
    pub category: Category,
    pub items: Vec<String>,
}

/// Reminder schedule offered for every event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemindersResponse {
    /// Minutes before the event start
    pub minutes_before: Vec<u32>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

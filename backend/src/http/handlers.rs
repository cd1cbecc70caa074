//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! calendar providers and the day planner.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use indexmap::IndexMap;
use tracing::info;

use super::auth::BearerToken;
use super::dto::{ChecklistResponse, DayPlanResponse, DayQuery, HealthResponse, RemindersResponse};
use super::error::AppError;
use super::state::AppState;
use crate::calendar::CalendarProvider;
use crate::models::Category;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Day Plan
// =============================================================================

/// GET /api/calendar
///
/// Plan for one day built from the user's Google Calendar.
pub async fn get_calendar(
    State(state): State<AppState>,
    token: BearerToken,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> HandlerResult<DayPlanResponse> {
    let Query(query) = query?;
    plan_day(&state, state.calendar.as_ref(), &token, query).await
}

/// GET /api/agenda
///
/// Same as `/api/calendar` but backed by the sample calendar.
pub async fn get_agenda(
    State(state): State<AppState>,
    token: BearerToken,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> HandlerResult<DayPlanResponse> {
    let Query(query) = query?;
    plan_day(&state, state.sample_calendar.as_ref(), &token, query).await
}

async fn plan_day(
    state: &AppState,
    provider: &dyn CalendarProvider,
    token: &BearerToken,
    query: DayQuery,
) -> HandlerResult<DayPlanResponse> {
    let window = state.window_for(query.date)?;
    let raw_events = provider.list_events(token.as_str(), &window).await?;
    let plan = state.planner.plan(window.date, raw_events);

    info!(
        date = %plan.date,
        events = plan.events.len(),
        all_day = plan.all_day_events.len(),
        is_travel_mode = plan.is_travel_mode,
        "Built day plan"
    );

    Ok(Json(plan.into()))
}

// =============================================================================
// Preparation Content
// =============================================================================

/// GET /api/checklists
///
/// Preparation checklist of every category.
pub async fn list_checklists(State(state): State<AppState>) -> Json<IndexMap<Category, Vec<String>>> {
    let content = state.planner.content();
    Json(
        Category::ASSIGNABLE
            .into_iter()
            .map(|category| (category, content.category_checklist(category)))
            .collect(),
    )
}

/// GET /api/checklists/{category}
pub async fn get_checklist(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> HandlerResult<ChecklistResponse> {
    let category = category
        .parse::<Category>()
        .ok()
        .filter(|c| *c != Category::Transit)
        .ok_or_else(|| AppError::NotFound(format!("Categoria desconhecida: {}", category)))?;

    Ok(Json(ChecklistResponse {
        category,
        items: state.planner.content().category_checklist(category),
    }))
}

/// GET /api/reminders
pub async fn get_reminders(State(state): State<AppState>) -> Json<RemindersResponse> {
    Json(RemindersResponse {
        minutes_before: state.planner.content().reminder_offsets(),
    })
}

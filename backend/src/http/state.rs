//! Application state for the HTTP server.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use super::error::AppError;
use crate::calendar::{CalendarProvider, DayWindow, SimulatedCalendar};
use crate::config::AppConfig;
use crate::services::DayPlanner;

/// Shared application state passed to all handlers. Read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Provider behind `/api/calendar`
    pub calendar: Arc<dyn CalendarProvider>,
    /// Provider behind `/api/agenda`
    pub sample_calendar: Arc<dyn CalendarProvider>,
    pub planner: Arc<DayPlanner>,
}

impl AppState {
    /// Create the state with the simulated agenda and a planner built from `config`.
    pub fn new(config: AppConfig, calendar: Arc<dyn CalendarProvider>) -> Self {
        let planner = DayPlanner::from_config(&config);
        Self {
            config: Arc::new(config),
            calendar,
            sample_calendar: Arc::new(SimulatedCalendar),
            planner: Arc::new(planner),
        }
    }

    /// Replace the planner (e.g. to inject a live weather provider).
    pub fn with_planner(mut self, planner: DayPlanner) -> Self {
        self.planner = Arc::new(planner);
        self
    }

    /// Window for `date`, defaulting to tomorrow.
    pub fn window_for(&self, date: Option<NaiveDate>) -> Result<DayWindow, AppError> {
        let planning = &self.config.planning;
        let date = date.unwrap_or_else(|| planning.tomorrow(Utc::now()));
        DayWindow::for_date(date, planning.offset())
            .ok_or_else(|| AppError::BadRequest(format!("Data fora do intervalo suportado: {}", date)))
    }
}

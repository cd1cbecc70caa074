//! Google Calendar client.
//!
//! Reads the single-day event list of one calendar with the user's OAuth
//! access token. Token issue and refresh happen in the identity provider in
//! front of this service; an expired token surfaces as an upstream 401.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use super::error::{CalendarError, CalendarResult};
use super::window::DayWindow;
use super::CalendarProvider;
use crate::config::CalendarSettings;
use crate::models::{EventSpan, RawEvent};

const UNTITLED: &str = "(Sem título)";

/// Client for the Google Calendar v3 events endpoint.
#[derive(Debug, Clone)]
pub struct GoogleCalendarClient {
    http: Client,
    base_url: String,
    calendar_id: String,
}

impl GoogleCalendarClient {
    pub fn new(settings: &CalendarSettings) -> CalendarResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            calendar_id: settings.calendar_id.clone(),
        })
    }

    fn events_url(&self) -> String {
        format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(&self.calendar_id)
        )
    }
}

#[async_trait]
impl CalendarProvider for GoogleCalendarClient {
    async fn list_events(
        &self,
        access_token: &str,
        window: &DayWindow,
    ) -> CalendarResult<Vec<RawEvent>> {
        let response = self
            .http
            .get(self.events_url())
            .bearer_auth(access_token)
            .query(&[
                ("timeMin", window.time_min_param()),
                ("timeMax", window.time_max_param()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                body = %body,
                "Google Calendar rejected the events request"
            );
            return Err(CalendarError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let list: EventList = response
            .json()
            .await
            .map_err(|e| CalendarError::Decode(e.to_string()))?;

        let events = list
            .items
            .into_iter()
            .map(GoogleEvent::into_raw)
            .collect::<CalendarResult<Vec<_>>>()?;

        info!(date = %window.date, count = events.len(), "Fetched calendar events");
        Ok(events)
    }
}

#[derive(Debug, Deserialize)]
struct EventList {
    #[serde(default)]
    items: Vec<GoogleEvent>,
}

#[derive(Debug, Deserialize)]
struct GoogleEvent {
    id: String,
    summary: Option<String>,
    description: Option<String>,
    location: Option<String>,
    #[serde(default)]
    start: GoogleEventTime,
    #[serde(default)]
    end: GoogleEventTime,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleEventTime {
    date_time: Option<String>,
    date: Option<String>,
}

impl GoogleEvent {
    fn into_raw(self) -> CalendarResult<RawEvent> {
        let span = self.span()?;

        Ok(RawEvent {
            id: self.id,
            summary: self.summary.unwrap_or_else(|| UNTITLED.to_string()),
            description: self.description,
            location: self.location,
            span,
        })
    }

    fn span(&self) -> CalendarResult<EventSpan> {
        match (&self.start.date_time, &self.end.date_time) {
            (Some(start), Some(end)) => {
                let start = parse_date_time(&self.id, "start", start)?;
                let end = parse_date_time(&self.id, "end", end)?;
                if end < start {
                    return Err(CalendarError::malformed(&self.id, "end precedes start"));
                }
                Ok(EventSpan::timed(start, end))
            }
            (Some(_), None) => Err(CalendarError::malformed(
                &self.id,
                "timed start with an all-day end",
            )),
            (None, _) => {
                let start = self.start.date.as_deref().ok_or_else(|| {
                    CalendarError::malformed(&self.id, "missing start time")
                })?;
                let end = self.end.date.as_deref().ok_or_else(|| {
                    CalendarError::malformed(&self.id, "missing end date")
                })?;
                Ok(EventSpan::all_day(
                    parse_date(&self.id, "start", start)?,
                    parse_date(&self.id, "end", end)?,
                ))
            }
        }
    }
}

fn parse_date_time(
    id: &str,
    field: &str,
    value: &str,
) -> CalendarResult<DateTime<chrono::FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .map_err(|e| CalendarError::malformed(id, format!("invalid {} '{}': {}", field, value, e)))
}

fn parse_date(id: &str, field: &str, value: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| CalendarError::malformed(id, format!("invalid {} '{}': {}", field, value, e)))
}

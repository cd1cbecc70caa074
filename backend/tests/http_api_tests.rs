//! End-to-end tests of the HTTP API through the axum router.

#![cfg(feature = "http-server")]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use tower::ServiceExt;

use dayplan::calendar::{CalendarError, CalendarProvider, CalendarResult, DayWindow};
use dayplan::config::AppConfig;
use dayplan::http::{create_router, AppState};
use dayplan::models::{EventSpan, RawEvent};

/// Provider answering with a fixed result and remembering what it was asked.
struct StubCalendar {
    result: fn() -> CalendarResult<Vec<RawEvent>>,
    seen: Mutex<Vec<(String, DayWindow)>>,
}

impl StubCalendar {
    fn new(result: fn() -> CalendarResult<Vec<RawEvent>>) -> Arc<Self> {
        Arc::new(Self {
            result,
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CalendarProvider for StubCalendar {
    async fn list_events(
        &self,
        access_token: &str,
        window: &DayWindow,
    ) -> CalendarResult<Vec<RawEvent>> {
        self.seen
            .lock()
            .unwrap()
            .push((access_token.to_string(), *window));
        (self.result)()
    }
}

fn timed(id: &str, summary: &str, start: &str, end: &str) -> RawEvent {
    RawEvent::new(
        id,
        summary,
        EventSpan::timed(
            DateTime::parse_from_rfc3339(start).unwrap(),
            DateTime::parse_from_rfc3339(end).unwrap(),
        ),
    )
}

fn reference_day() -> CalendarResult<Vec<RawEvent>> {
    Ok(vec![
        timed(
            "a",
            "Reunião cliente",
            "2026-10-20T09:00:00-03:00",
            "2026-10-20T09:30:00-03:00",
        ),
        timed(
            "b",
            "Treino academia",
            "2026-10-20T10:00:00-03:00",
            "2026-10-20T10:30:00-03:00",
        ),
    ])
}

fn router_with(calendar: Arc<dyn CalendarProvider>) -> Router {
    create_router(AppState::new(AppConfig::default(), calendar))
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(
        router_with(StubCalendar::new(reference_day)),
        get("/health", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_calendar_requires_token() {
    let calendar = StubCalendar::new(reference_day);
    let (status, body) = send(router_with(calendar.clone()), get("/api/calendar", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["message"],
        "Não autorizado. Faça login para acessar esta API."
    );
    assert!(calendar.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_agenda_requires_token() {
    let (status, _) = send(
        router_with(StubCalendar::new(reference_day)),
        get("/api/agenda", None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_calendar_builds_annotated_plan() {
    let calendar = StubCalendar::new(reference_day);
    let (status, body) = send(
        router_with(calendar.clone()),
        get("/api/calendar?date=2026-10-20", Some("ya29.token")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2026-10-20");

    let events = body["events"].as_array().unwrap();
    let categories: Vec<&str> = events
        .iter()
        .map(|e| e["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["trabalho", "travel", "treinar"]);

    let travel = &events[1];
    assert_eq!(travel["id"], "travel_0_1");
    assert_eq!(travel["summary"], "Deslocamento para Treino academia");
    assert_eq!(travel["start"], "2026-10-20T09:30:00-03:00");
    assert_eq!(travel["end"], "2026-10-20T09:51:00-03:00");
    assert_eq!(
        travel["description"],
        "Tempo estimado: 21 minutos (inclui 4 min de folga)"
    );
    assert!(events.iter().all(|e| e["has_travel_conflict"] == false));
    assert_eq!(body["is_travel_mode"], false);
    assert!(body["all_day_events"].as_array().unwrap().is_empty());
    assert!(!body["weather"]["hourly"].as_array().unwrap().is_empty());
    assert!(body["travel_checklist"]["Documentos"].is_array());

    let seen = calendar.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "ya29.token");
    assert_eq!(seen[0].1.date, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    assert_eq!(seen[0].1.time_min_param(), "2026-10-20T03:00:00.000Z");
    assert_eq!(seen[0].1.time_max_param(), "2026-10-21T02:59:59.999Z");
}

#[tokio::test]
async fn test_upstream_status_passes_through() {
    fn forbidden() -> CalendarResult<Vec<RawEvent>> {
        Err(CalendarError::Upstream {
            status: 403,
            body: "{\"error\":{\"code\":403}}".to_string(),
        })
    }

    let (status, body) = send(
        router_with(StubCalendar::new(forbidden)),
        get("/api/calendar", Some("expired")),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Erro ao buscar eventos do Google Calendar");
}

#[tokio::test]
async fn test_malformed_event_is_internal_error() {
    fn malformed() -> CalendarResult<Vec<RawEvent>> {
        Err(CalendarError::malformed("evt", "invalid start"))
    }

    let (status, body) = send(
        router_with(StubCalendar::new(malformed)),
        get("/api/calendar", Some("token")),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Erro interno do servidor");
}

#[tokio::test]
async fn test_date_outside_calendar_range_is_bad_request() {
    let calendar = StubCalendar::new(reference_day);
    let (status, body) = send(
        router_with(calendar.clone()),
        get("/api/agenda?date=%2B262142-12-31", Some("token")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(calendar.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unparseable_date_is_json_bad_request() {
    let (status, body) = send(
        router_with(StubCalendar::new(reference_day)),
        get("/api/calendar?date=amanha", Some("token")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().starts_with("Parâmetros inválidos"));
}

#[tokio::test]
async fn test_agenda_serves_sample_day() {
    let calendar = StubCalendar::new(reference_day);
    let (status, body) = send(
        router_with(calendar.clone()),
        get("/api/agenda?date=2026-10-20", Some("token")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 9);
    assert_eq!(events[0]["id"], "sim_1");
    assert_eq!(events[1]["category"], "travel");
    assert_eq!(body["all_day_events"][0]["is_all_day"], true);
    assert_eq!(body["all_day_events"][0]["start"], "2026-10-20");
    assert_eq!(body["is_travel_mode"], false);
    assert!(calendar.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_checklists() {
    let app = router_with(StubCalendar::new(reference_day));

    let (status, body) = send(app.clone(), get("/api/checklists", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_object().unwrap().len(), 9);
    assert!(body.get("travel").is_none());

    let (status, body) = send(app.clone(), get("/api/checklists/treinar", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "treinar");
    assert_eq!(body["items"][0], "Preparar roupa de treino");

    let (status, body) = send(app.clone(), get("/api/checklists/travel", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = send(app, get("/api/checklists/pescaria", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reminders() {
    let (status, body) = send(
        router_with(StubCalendar::new(reference_day)),
        get("/api/reminders", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["minutes_before"], serde_json::json!([60, 30, 15, 5]));
}

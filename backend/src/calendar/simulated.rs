//! Sample calendar used by `/api/agenda` while developing the dashboard.

use async_trait::async_trait;

use super::error::CalendarResult;
use super::window::DayWindow;
use super::CalendarProvider;
use crate::models::{EventSpan, RawEvent};

struct SampleEvent {
    id: &'static str,
    summary: &'static str,
    description: Option<&'static str>,
    location: Option<&'static str>,
    /// Minutes after local midnight
    start: i64,
    end: i64,
}

const SAMPLE_DAY: &[SampleEvent] = &[
    SampleEvent {
        id: "sim_1",
        summary: "Levar filho na escola",
        description: None,
        location: Some("Escola Municipal"),
        start: 7 * 60 + 30,
        end: 8 * 60,
    },
    SampleEvent {
        id: "sim_2",
        summary: "Reunião com cliente",
        description: Some("Apresentar proposta do projeto"),
        location: Some("Escritório - trabalho"),
        start: 9 * 60,
        end: 10 * 60 + 30,
    },
    SampleEvent {
        id: "sim_3",
        summary: "Sessão de tatuagem",
        description: Some("Continuação do braço"),
        location: Some("Studio Ink, Vila Madalena, São Paulo"),
        start: 13 * 60,
        end: 15 * 60,
    },
    SampleEvent {
        id: "sim_4",
        summary: "Treino na academia",
        description: None,
        location: Some("Academia Smart Fit"),
        start: 17 * 60,
        end: 18 * 60,
    },
    SampleEvent {
        id: "sim_5",
        summary: "Jantar com a namorada",
        description: None,
        location: Some("Restaurante Fasano, São Paulo"),
        start: 20 * 60,
        end: 22 * 60,
    },
];

/// Calendar that returns the same sample day for any date and token.
#[derive(Debug, Clone, Default)]
pub struct SimulatedCalendar;

impl SimulatedCalendar {
    pub fn events_for(window: &DayWindow) -> Vec<RawEvent> {
        let mut events: Vec<RawEvent> = SAMPLE_DAY
            .iter()
            .map(|sample| {
                let span = EventSpan::timed(
                    window.local_time(sample.start),
                    window.local_time(sample.end),
                );
                let mut event = RawEvent::new(sample.id, sample.summary, span);
                event.description = sample.description.map(str::to_string);
                event.location = sample.location.map(str::to_string);
                event
            })
            .collect();

        if let Some(next_day) = window.date.succ_opt() {
            events.push(RawEvent::new(
                "sim_6",
                "Aniversário da irmã",
                EventSpan::all_day(window.date, next_day),
            ));
        }

        events
    }
}

#[async_trait]
impl CalendarProvider for SimulatedCalendar {
    async fn list_events(
        &self,
        _access_token: &str,
        window: &DayWindow,
    ) -> CalendarResult<Vec<RawEvent>> {
        Ok(Self::events_for(window))
    }
}

//! Calendar event records flowing through the annotation pipeline.

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};

use super::category::Category;

/// When an event happens.
///
/// Timed events keep the offset reported by the calendar so the dashboard
/// can render local times; all-day events only carry dates (end exclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSpan {
    Timed {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
    AllDay {
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl EventSpan {
    pub fn timed(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        EventSpan::Timed { start, end }
    }

    pub fn all_day(start: NaiveDate, end: NaiveDate) -> Self {
        EventSpan::AllDay { start, end }
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, EventSpan::AllDay { .. })
    }

    /// Start instant of a timed event, `None` for all-day events.
    pub fn start_time(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            EventSpan::Timed { start, .. } => Some(*start),
            EventSpan::AllDay { .. } => None,
        }
    }

    /// End instant of a timed event, `None` for all-day events.
    pub fn end_time(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            EventSpan::Timed { end, .. } => Some(*end),
            EventSpan::AllDay { .. } => None,
        }
    }

    /// Wire form of the start: RFC 3339 for timed events, `YYYY-MM-DD` otherwise.
    pub fn start_string(&self) -> String {
        match self {
            EventSpan::Timed { start, .. } => start.to_rfc3339_opts(SecondsFormat::Secs, false),
            EventSpan::AllDay { start, .. } => start.format("%Y-%m-%d").to_string(),
        }
    }

    /// Wire form of the end, formatted like [`EventSpan::start_string`].
    pub fn end_string(&self) -> String {
        match self {
            EventSpan::Timed { end, .. } => end.to_rfc3339_opts(SecondsFormat::Secs, false),
            EventSpan::AllDay { end, .. } => end.format("%Y-%m-%d").to_string(),
        }
    }
}

/// An event as fetched from the calendar provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    /// Provider identifier, unique within the day
    pub id: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub span: EventSpan,
}

impl RawEvent {
    pub fn new(id: impl Into<String>, summary: impl Into<String>, span: EventSpan) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            description: None,
            location: None,
            span,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A categorized event, either from the calendar or synthesized as travel time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedEvent {
    pub id: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub span: EventSpan,
    pub category: Category,
    /// Set when the travel block before this event does not fit in the gap
    pub has_travel_conflict: bool,
    /// Expected lateness in minutes when `has_travel_conflict` is set
    pub travel_conflict_minutes: Option<i64>,
}

impl AnnotatedEvent {
    pub fn from_raw(raw: RawEvent, category: Category) -> Self {
        Self {
            id: raw.id,
            summary: raw.summary,
            description: raw.description,
            location: raw.location,
            span: raw.span,
            category,
            has_travel_conflict: false,
            travel_conflict_minutes: None,
        }
    }

    pub fn is_all_day(&self) -> bool {
        self.span.is_all_day()
    }

    pub fn is_transit(&self) -> bool {
        self.category == Category::Transit
    }

    /// Copy of this event flagged as reached `minutes` late.
    pub fn with_travel_conflict(&self, minutes: i64) -> Self {
        Self {
            has_travel_conflict: true,
            travel_conflict_minutes: Some(minutes),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_timed_span_strings_keep_offset() {
        let span = EventSpan::timed(at("2026-10-20T09:00:00-03:00"), at("2026-10-20T09:30:00-03:00"));
        assert!(!span.is_all_day());
        assert_eq!(span.start_string(), "2026-10-20T09:00:00-03:00");
        assert_eq!(span.end_string(), "2026-10-20T09:30:00-03:00");
    }

    #[test]
    fn test_all_day_span_has_no_instants() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let span = EventSpan::all_day(day, day.succ_opt().unwrap());
        assert!(span.is_all_day());
        assert_eq!(span.start_time(), None);
        assert_eq!(span.start_string(), "2026-10-20");
        assert_eq!(span.end_string(), "2026-10-21");
    }

    #[test]
    fn test_with_travel_conflict_leaves_original_untouched() {
        let raw = RawEvent::new(
            "evt1",
            "Reunião",
            EventSpan::timed(at("2026-10-20T10:00:00Z"), at("2026-10-20T11:00:00Z")),
        );
        let event = AnnotatedEvent::from_raw(raw, Category::Work);
        let flagged = event.with_travel_conflict(3);

        assert!(!event.has_travel_conflict);
        assert_eq!(event.travel_conflict_minutes, None);
        assert!(flagged.has_travel_conflict);
        assert_eq!(flagged.travel_conflict_minutes, Some(3));
        assert_eq!(flagged.id, "evt1");
    }
}

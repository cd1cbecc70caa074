//! Assembles the [`DayPlan`] served to the dashboard.

use std::sync::Arc;

use chrono::NaiveDate;

use super::content::{StaticTravelContent, TravelContent};
use super::pipeline::AnnotationPipeline;
use super::weather::{SimulatedWeather, WeatherProvider};
use crate::config::AppConfig;
use crate::models::{DayPlan, RawEvent};

/// Combines the annotation pipeline with the weather and content providers.
#[derive(Clone)]
pub struct DayPlanner {
    pipeline: AnnotationPipeline,
    weather: Arc<dyn WeatherProvider>,
    content: Arc<dyn TravelContent>,
}

impl DayPlanner {
    pub fn new(
        pipeline: AnnotationPipeline,
        weather: Arc<dyn WeatherProvider>,
        content: Arc<dyn TravelContent>,
    ) -> Self {
        Self {
            pipeline,
            weather,
            content,
        }
    }

    /// Planner with the simulated forecast and built-in content.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            AnnotationPipeline::from_config(config),
            Arc::new(SimulatedWeather::new(config.planning.city.clone())),
            Arc::new(StaticTravelContent),
        )
    }

    pub fn content(&self) -> &dyn TravelContent {
        self.content.as_ref()
    }

    pub fn plan(&self, date: NaiveDate, raw_events: Vec<RawEvent>) -> DayPlan {
        let day = self.pipeline.annotate(raw_events);

        DayPlan {
            date,
            events: day.timeline,
            all_day_events: day.all_day,
            weather: self.weather.snapshot(date),
            is_travel_mode: day.is_travel_mode,
            travel_tips: self.content.tips(),
            travel_checklist: self.content.travel_checklist(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EventSpan, HourlyReading, WeatherSnapshot};
    use chrono::DateTime;

    fn timed(id: &str, summary: &str, start: &str, end: &str) -> RawEvent {
        RawEvent::new(
            id,
            summary,
            EventSpan::timed(
                DateTime::parse_from_rfc3339(&format!("2026-10-20T{}:00-03:00", start)).unwrap(),
                DateTime::parse_from_rfc3339(&format!("2026-10-20T{}:00-03:00", end)).unwrap(),
            ),
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    struct DryWeather;

    impl WeatherProvider for DryWeather {
        fn snapshot(&self, date: NaiveDate) -> WeatherSnapshot {
            WeatherSnapshot {
                date,
                city: "Recife".to_string(),
                avg_temp: 30,
                max_temp: 32,
                min_temp: 27,
                condition: "Ensolarado".to_string(),
                icon: "01d".to_string(),
                rain_chance: 0,
                affects_travel: false,
                travel_advice: vec![],
                hourly: vec![HourlyReading {
                    time: "12:00".to_string(),
                    temp: 31,
                    description: "Ensolarado".to_string(),
                    icon: "01d".to_string(),
                    humidity: 60,
                    wind_speed: 1.0,
                    rain_chance: 0,
                }],
            }
        }
    }

    #[test]
    fn test_plan_for_reference_day() {
        let planner = DayPlanner::from_config(&AppConfig::default());
        let plan = planner.plan(
            date(),
            vec![
                timed("a", "Reunião cliente", "09:00", "09:30"),
                timed("b", "Treino academia", "10:00", "10:30"),
            ],
        );

        let categories: Vec<Category> = plan.events.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![Category::Work, Category::Transit, Category::Fitness]
        );
        assert!(plan.events[1].is_transit());
        assert_eq!(plan.events[1].span.start_string(), "2026-10-20T09:30:00-03:00");
        assert_eq!(plan.events[1].span.end_string(), "2026-10-20T09:51:00-03:00");
        assert!(plan.events.iter().all(|e| !e.has_travel_conflict));
        assert!(!plan.is_travel_mode);
        assert_eq!(plan.date, date());
        assert_eq!(plan.weather.date, date());
        assert_eq!(plan.travel_tips.len(), 10);
        assert_eq!(plan.travel_checklist.len(), 4);
    }

    #[test]
    fn test_description_keywords_categorize() {
        let planner = DayPlanner::from_config(&AppConfig::default());
        let event = timed("a", "Compromisso", "09:00", "10:00").with_description("Sessão de tattoo");
        let plan = planner.plan(date(), vec![event]);
        assert_eq!(plan.events[0].category, Category::Tattoo);
        assert!(!plan.events[0].is_transit());
    }

    #[test]
    fn test_all_day_events_are_categorized_separately() {
        let planner = DayPlanner::from_config(&AppConfig::default());
        let day = date();
        let birthday = RawEvent::new(
            "bday",
            "Aniversário da irmã",
            EventSpan::all_day(day, day.succ_opt().unwrap()),
        );
        let plan = planner.plan(day, vec![birthday, timed("a", "Reunião", "09:00", "10:00")]);

        assert_eq!(plan.events.len(), 1);
        assert_eq!(plan.all_day_events.len(), 1);
        assert_eq!(plan.all_day_events[0].category, Category::Family);
        assert!(!plan.all_day_events[0].has_travel_conflict);
    }

    #[test]
    fn test_all_day_trip_enables_travel_mode() {
        let planner = DayPlanner::from_config(&AppConfig::default());
        let day = date();
        let trip = RawEvent::new(
            "trip",
            "Viagem para Curitiba",
            EventSpan::all_day(day, day.succ_opt().unwrap()),
        );
        assert!(planner.plan(day, vec![trip]).is_travel_mode);
    }

    #[test]
    fn test_airport_location_enables_travel_mode() {
        let planner = DayPlanner::from_config(&AppConfig::default());
        let event = timed("a", "Buscar encomenda", "14:00", "15:00")
            .with_location("Aeroporto de Guarulhos");
        assert!(planner.plan(date(), vec![event]).is_travel_mode);
    }

    #[test]
    fn test_injected_weather_is_forwarded() {
        let planner = DayPlanner::new(
            AnnotationPipeline::default(),
            Arc::new(DryWeather),
            Arc::new(StaticTravelContent),
        );
        let plan = planner.plan(date(), vec![]);

        assert_eq!(plan.weather.city, "Recife");
        assert!(!plan.weather.affects_travel);
        assert!(plan.events.is_empty());
        assert!(!plan.is_travel_mode);
    }

    #[test]
    fn test_configured_rules_reach_the_pipeline() {
        let mut config = AppConfig::default();
        config.planning.familiar_locations = vec!["Guarulhos".to_string()];
        config.travel.min_gap_minutes = 60;
        let planner = DayPlanner::from_config(&config);

        let plan = planner.plan(
            date(),
            vec![
                timed("a", "Reunião", "09:00", "09:30").with_location("Aeroporto de Guarulhos"),
                timed("b", "Treino", "10:00", "10:30"),
            ],
        );

        assert!(!plan.is_travel_mode);
        assert_eq!(plan.events.len(), 2);
    }
}

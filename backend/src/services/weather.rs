//! Weather providers.
//!
//! Only a simulated forecast exists for now; a live client would implement
//! [`WeatherProvider`] and be handed to the [`DayPlanner`](super::DayPlanner).

use chrono::NaiveDate;

use crate::models::{HourlyReading, WeatherSnapshot};

/// Source of the forecast shown next to the day's agenda.
pub trait WeatherProvider: Send + Sync {
    fn snapshot(&self, date: NaiveDate) -> WeatherSnapshot;
}

/// Fixed forecast: a partly cloudy day with afternoon rain.
#[derive(Debug, Clone)]
pub struct SimulatedWeather {
    city: String,
}

impl SimulatedWeather {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

impl Default for SimulatedWeather {
    fn default() -> Self {
        Self::new("São Paulo")
    }
}

impl WeatherProvider for SimulatedWeather {
    fn snapshot(&self, date: NaiveDate) -> WeatherSnapshot {
        WeatherSnapshot {
            date,
            city: self.city.clone(),
            avg_temp: 25,
            max_temp: 28,
            min_temp: 22,
            condition: "Parcialmente nublado com chuva à tarde".to_string(),
            icon: "10d".to_string(),
            rain_chance: 70,
            affects_travel: true,
            travel_advice: vec![
                "Às 14:00, alta chance de chuva. Leve guarda-chuva e saia com antecedência."
                    .to_string(),
                "Às 18:30, previsão de chuva moderada. Considere um tempo extra para o deslocamento."
                    .to_string(),
            ],
            hourly: vec![
                reading("09:00", 22, "Parcialmente nublado", "02d", 70, 2.1, 10),
                reading("12:00", 26, "Nublado", "03d", 65, 2.5, 30),
                reading("15:00", 28, "Chuva leve", "10d", 75, 3.1, 70),
                reading("18:00", 25, "Chuva moderada", "10d", 85, 3.8, 80),
                reading("21:00", 23, "Parcialmente nublado", "02n", 75, 2.2, 20),
            ],
        }
    }
}

fn reading(
    time: &str,
    temp: i32,
    description: &str,
    icon: &str,
    humidity: u8,
    wind_speed: f64,
    rain_chance: u8,
) -> HourlyReading {
    HourlyReading {
        time: time.to_string(),
        temp,
        description: description.to_string(),
        icon: icon.to_string(),
        humidity,
        wind_speed,
        rain_chance,
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Forecast for the planned day, forwarded untouched to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub date: NaiveDate,
    pub city: String,
    pub avg_temp: i32,
    pub max_temp: i32,
    pub min_temp: i32,
    pub condition: String,
    /// OpenWeatherMap icon code
    pub icon: String,
    /// Percentage (0-100)
    pub rain_chance: u8,
    pub affects_travel: bool,
    #[serde(default)]
    pub travel_advice: Vec<String>,
    /// Readings ordered by time of day
    pub hourly: Vec<HourlyReading>,
}

/// One hourly forecast reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyReading {
    /// Local time of day, `HH:MM`
    pub time: String,
    pub temp: i32,
    pub description: String,
    pub icon: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub rain_chance: u8,
}

//! # Dayplan Backend
//!
//! Backend of the daily planning dashboard.
//!
//! The crate reads one day of calendar events, annotates them and serves
//! the result as a day plan: every event gets a category, gaps between
//! consecutive events get an estimated travel block, events that cannot be
//! reached in time are flagged, and the day is marked as a travel day when
//! it involves a trip or an unfamiliar place. The plan also carries a
//! forecast and preparation content (tips, checklists, reminders).
//!
//! ## Architecture
//!
//! - [`models`]: Events, categories, weather and the assembled day plan
//! - [`config`]: TOML configuration with environment overrides
//! - [`calendar`]: Calendar providers (Google Calendar, simulated sample day)
//! - [`services`]: The annotation pipeline and the day planner
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Pipeline
//!
//! The annotation pass is pure: it takes the raw events of one day and
//! returns a new timeline without mutating its input, so the same inputs
//! always yield the same plan.

pub mod calendar;
pub mod config;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

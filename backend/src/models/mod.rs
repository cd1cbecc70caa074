//! Domain model for the daily plan.
//!
//! Raw events come from a calendar provider, get annotated by the
//! [`services`](crate::services) pipeline and end up in a [`DayPlan`].

pub mod category;
pub mod day_plan;
pub mod event;
pub mod weather;

pub use category::Category;
pub use day_plan::{Checklist, DayPlan};
pub use event::{AnnotatedEvent, EventSpan, RawEvent};
pub use weather::{HourlyReading, WeatherSnapshot};

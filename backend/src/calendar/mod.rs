//! Calendar providers.
//!
//! A provider returns the raw events of one local day. The Google client is
//! used for `/api/calendar`; the simulated calendar backs `/api/agenda`.

pub mod error;
pub mod google;
pub mod simulated;
pub mod window;

use async_trait::async_trait;

pub use error::{CalendarError, CalendarResult};
pub use google::GoogleCalendarClient;
pub use simulated::SimulatedCalendar;
pub use window::DayWindow;

use crate::models::RawEvent;

/// Source of a day's calendar events.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across handlers.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// List the events overlapping `window`, authorized by `access_token`.
    async fn list_events(
        &self,
        access_token: &str,
        window: &DayWindow,
    ) -> CalendarResult<Vec<RawEvent>>;
}

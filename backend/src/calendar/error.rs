//! Errors raised while talking to a calendar provider.

/// Result type for calendar operations
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Error type for calendar operations
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// The provider answered with a non-success status.
    #[error("Calendar provider returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request never produced a response (DNS, TLS, timeout...).
    #[error("Calendar request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("Invalid calendar response: {0}")]
    Decode(String),

    /// An event carried missing or unparseable times.
    #[error("Malformed event {id}: {reason}")]
    MalformedEvent { id: String, reason: String },
}

impl CalendarError {
    pub fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        CalendarError::MalformedEvent {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status reported by the provider, if it answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            CalendarError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

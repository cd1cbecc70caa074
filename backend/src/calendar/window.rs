use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

/// The span of one local calendar day, as queried from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub date: NaiveDate,
    pub offset: FixedOffset,
    /// Local midnight
    pub time_min: DateTime<Utc>,
    /// Last millisecond of the local day
    pub time_max: DateTime<Utc>,
}

impl DayWindow {
    /// Window of `date` in `offset`, `None` when the day cannot be
    /// represented in UTC (dates at the ends of the supported range).
    pub fn for_date(date: NaiveDate, offset: FixedOffset) -> Option<Self> {
        let local_midnight = date.and_time(NaiveTime::MIN);
        let utc_midnight = local_midnight
            .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))?;
        let time_min = Utc.from_utc_datetime(&utc_midnight);
        let time_max = time_min
            .checked_add_signed(Duration::days(1))?
            .checked_sub_signed(Duration::milliseconds(1))?;

        Some(Self {
            date,
            offset,
            time_min,
            time_max,
        })
    }

    /// Local time `minutes` after midnight of this day.
    pub fn local_time(&self, minutes: i64) -> DateTime<FixedOffset> {
        self.time_min.with_timezone(&self.offset) + Duration::minutes(minutes)
    }

    /// `timeMin` query value: UTC, millisecond precision.
    pub fn time_min_param(&self) -> String {
        self.time_min.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// `timeMax` query value: UTC, millisecond precision.
    pub fn time_max_param(&self) -> String {
        self.time_max.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

//! Trailing time windows for summaries

use chrono::{DateTime, Duration, Utc};

use crate::error::DomainError;

/// A trailing window ending at "now", measured in whole days or hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryWindow {
    Days(u32),
    Hours(u32),
}

impl SummaryWindow {
    /// Default daily window (4 days)
    pub const DEFAULT_DAYS: u32 = 4;
    /// Default hourly window (24 hours)
    pub const DEFAULT_HOURS: u32 = 24;
    /// Widest daily window (one year)
    pub const MAX_DAYS: u32 = 365;
    /// Widest hourly window (30 days)
    pub const MAX_HOURS: u32 = 720;

    /// Trailing window of `days` days, `1..=MAX_DAYS`
    pub fn days(days: u32) -> Result<Self, DomainError> {
        if days == 0 || days > Self::MAX_DAYS {
            return Err(DomainError::ValidationError(format!(
                "days must be between 1 and {}",
                Self::MAX_DAYS
            )));
        }
        Ok(Self::Days(days))
    }

    /// Trailing window of `hours` hours, `1..=MAX_HOURS`
    pub fn hours(hours: u32) -> Result<Self, DomainError> {
        if hours == 0 || hours > Self::MAX_HOURS {
            return Err(DomainError::ValidationError(format!(
                "hours must be between 1 and {}",
                Self::MAX_HOURS
            )));
        }
        Ok(Self::Hours(hours))
    }

    /// Length of the window
    pub fn duration(&self) -> Duration {
        match self {
            Self::Days(d) => Duration::days(i64::from(*d)),
            Self::Hours(h) => Duration::hours(i64::from(*h)),
        }
    }

    /// Earliest `sent_at` included when the window ends at `now`
    ///
    /// Fails when the start would fall before the earliest representable
    /// timestamp.
    pub fn since(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, DomainError> {
        now.checked_sub_signed(self.duration()).ok_or_else(|| {
            DomainError::ValidationError(format!("window of {self:?} reaches before {now}"))
        })
    }
}

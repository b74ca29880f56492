//! Date rules for the single work-history timeline.
//!
//! An experience occupies the inclusive interval `[start, end]`; a current
//! position has no stored end and occupies `[start, today]`. The timeline
//! allows no overlapping intervals, including shared boundary days.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateRuleViolation {
    #[error("Start date must not be in the future")]
    StartInFuture,

    #[error("End date must not be set for a current position")]
    EndWithCurrent,

    #[error("End date is required for a past position")]
    EndRequired,

    #[error("End date must not be before start date")]
    EndBeforeStart,

    #[error("End date must not be in the future")]
    EndInFuture,
}

pub fn validate_dates(
    start: NaiveDate,
    end: Option<NaiveDate>,
    current: bool,
    today: NaiveDate,
) -> Result<(), DateRuleViolation> {
    if start > today {
        return Err(DateRuleViolation::StartInFuture);
    }

    if current {
        if end.is_some() {
            return Err(DateRuleViolation::EndWithCurrent);
        }
        return Ok(());
    }

    match end {
        None => Err(DateRuleViolation::EndRequired),
        Some(end) if end < start => Err(DateRuleViolation::EndBeforeStart),
        Some(end) if end > today => Err(DateRuleViolation::EndInFuture),
        Some(_) => Ok(()),
    }
}

/// The interval end used for overlap checks. Evaluated against "today" at
/// check time, so a current position keeps growing.
pub fn effective_end(end: Option<NaiveDate>, current: bool, today: NaiveDate) -> NaiveDate {
    if current {
        today
    } else {
        end.unwrap_or(today)
    }
}

/// Inclusive-interval overlap: sharing a single day counts.
pub fn overlaps(s1: NaiveDate, e1: NaiveDate, s2: NaiveDate, e2: NaiveDate) -> bool {
    s1 <= e2 && s2 <= e1
}

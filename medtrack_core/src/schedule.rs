//! Next-dose scheduling for medications.
//!
//! Scheduling uses a fixed 24-hour re-dose interval. A medication's
//! free-text `frequency` field plays no part in the computation; "Twice
//! daily" and "Every 6 hours" still schedule 24 hours out. As-needed
//! medications have no schedule at all.

use crate::types::Medication;
use chrono::{DateTime, Duration, Utc};

/// Hours between doses of a scheduled medication
pub const DOSE_INTERVAL_HOURS: i64 = 24;

/// Schedule state of a medication, for display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoseStatus {
    /// As-needed medication; nothing is scheduled
    AsNeeded,
    /// Scheduled medication with no next dose on record; due immediately
    DueNow,
    /// Next dose expected at the given time
    DueAt(DateTime<Utc>),
}

/// When the next dose is expected after one taken at `taken_at`
pub fn next_dose_after(taken_at: DateTime<Utc>) -> DateTime<Utc> {
    taken_at + Duration::hours(DOSE_INTERVAL_HOURS)
}

/// Current schedule state of a medication
pub fn dose_status(medication: &Medication) -> DoseStatus {
    if medication.is_as_needed {
        DoseStatus::AsNeeded
    } else {
        match medication.next_dose {
            Some(at) => DoseStatus::DueAt(at),
            None => DoseStatus::DueNow,
        }
    }
}

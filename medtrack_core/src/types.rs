//! Core domain types for the MedTrack system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Medication records and the form drafts that create them
//! - Dose log entries
//! - Time-of-day groups used for display ordering

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::icons::IconKey;

// ============================================================================
// Time-of-Day Groups
// ============================================================================

/// Time-of-day bucket a scheduled medication is displayed under
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MedicationGroup {
    Morning,
    Midday,
    Evening,
    Night,
}

impl MedicationGroup {
    /// All groups in display order
    pub fn all() -> &'static [MedicationGroup] {
        &[
            MedicationGroup::Morning,
            MedicationGroup::Midday,
            MedicationGroup::Evening,
            MedicationGroup::Night,
        ]
    }

    /// Human-readable section label
    pub fn label(&self) -> &'static str {
        match self {
            MedicationGroup::Morning => "Morning",
            MedicationGroup::Midday => "Midday",
            MedicationGroup::Evening => "Evening",
            MedicationGroup::Night => "Night",
        }
    }

    /// Icon shown next to the section label
    pub fn icon(&self) -> IconKey {
        match self {
            MedicationGroup::Morning => IconKey::Sunrise,
            MedicationGroup::Midday => IconKey::Sun,
            MedicationGroup::Evening => IconKey::Sunset,
            MedicationGroup::Night => IconKey::Moon,
        }
    }
}

impl fmt::Display for MedicationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MedicationGroup::Morning => "morning",
            MedicationGroup::Midday => "midday",
            MedicationGroup::Evening => "evening",
            MedicationGroup::Night => "night",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MedicationGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(MedicationGroup::Morning),
            "midday" => Ok(MedicationGroup::Midday),
            "evening" => Ok(MedicationGroup::Evening),
            "night" => Ok(MedicationGroup::Night),
            other => Err(Error::Validation(format!(
                "unknown time-of-day group '{}' (expected morning, midday, evening, or night)",
                other
            ))),
        }
    }
}

// ============================================================================
// Medication Types
// ============================================================================

/// A registered medication
///
/// `frequency` is display text for the user's own reference. It is never
/// parsed; dose scheduling uses a fixed interval regardless of its contents.
/// `icon` is a free-form key resolved against [`IconKey`] at display time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub prescriber: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub instructions: Option<String>,
    pub last_refill_date: Option<NaiveDate>,
    pub next_refill_date: Option<NaiveDate>,
    pub next_dose: Option<DateTime<Utc>>,
    pub is_as_needed: bool,
    pub group: Option<MedicationGroup>,
    pub icon: Option<String>,
}

/// Form payload for creating or replacing a medication
///
/// Carries no identifier by default; the registry assigns one on add. An
/// explicit `id` is honoured so externally sourced records keep their ids.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MedicationDraft {
    pub id: Option<String>,
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub prescriber: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub instructions: Option<String>,
    pub last_refill_date: Option<NaiveDate>,
    pub next_refill_date: Option<NaiveDate>,
    pub next_dose: Option<DateTime<Utc>>,
    pub is_as_needed: bool,
    pub group: Option<MedicationGroup>,
    pub icon: Option<String>,
}

impl MedicationDraft {
    /// Materialize the draft into a record under the given identifier
    pub(crate) fn into_medication(self, id: String) -> Medication {
        Medication {
            id,
            name: self.name,
            dosage: self.dosage,
            frequency: self.frequency,
            prescriber: self.prescriber,
            start_date: self.start_date,
            instructions: self.instructions,
            last_refill_date: self.last_refill_date,
            next_refill_date: self.next_refill_date,
            next_dose: self.next_dose,
            is_as_needed: self.is_as_needed,
            group: self.group,
            icon: self.icon,
        }
    }
}

// ============================================================================
// Dose Log Types
// ============================================================================

/// An immutable record of one dose event
///
/// `timestamp` is when the dose was (or should have been) taken, as entered
/// by the user; `logged_at` is when the entry itself was recorded.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DoseLog {
    pub id: String,
    pub medication_id: String,
    pub timestamp: DateTime<Utc>,
    pub logged_at: DateTime<Utc>,
    pub taken: bool,
    pub notes: Option<String>,
}

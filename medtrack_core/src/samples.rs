//! Built-in sample medications.
//!
//! Two example records for starting a demo session with something on
//! screen. The drafts carry no identifiers and go through the registry
//! like any user submission, so seeded records are indistinguishable from
//! entered ones.

use crate::types::{MedicationDraft, MedicationGroup};
use chrono::{Duration, NaiveDate, Utc};

/// Drafts for seeding a demo session
pub fn sample_medications() -> Vec<MedicationDraft> {
    vec![
        MedicationDraft {
            id: None,
            name: "Aspirin".into(),
            dosage: Some("81mg".into()),
            frequency: Some("Once daily".into()),
            prescriber: Some("Smith".into()),
            start_date: NaiveDate::from_ymd_opt(2024, 2, 20),
            instructions: Some("Take with food in the morning".into()),
            last_refill_date: NaiveDate::from_ymd_opt(2024, 2, 20),
            next_refill_date: NaiveDate::from_ymd_opt(2024, 3, 20),
            next_dose: Some(Utc::now() + Duration::hours(4)),
            is_as_needed: false,
            group: Some(MedicationGroup::Morning),
            icon: Some("Heart".into()),
        },
        MedicationDraft {
            id: None,
            name: "Ibuprofen".into(),
            dosage: Some("400mg".into()),
            frequency: Some("As needed".into()),
            prescriber: Some("Johnson".into()),
            start_date: NaiveDate::from_ymd_opt(2024, 2, 15),
            instructions: Some("Take for pain. Wait at least 4 hours between doses.".into()),
            last_refill_date: NaiveDate::from_ymd_opt(2024, 2, 15),
            next_refill_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            next_dose: None,
            is_as_needed: true,
            group: None,
            icon: Some("Pill".into()),
        },
    ]
}

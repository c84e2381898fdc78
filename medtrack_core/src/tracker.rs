//! Session tracker tying the pieces together.
//!
//! [`MedTracker`] owns the registry and the dose log store for one session
//! and is the surface the client drives. Logging a dose is the one compound
//! operation: it appends to the log and moves the medication's next dose
//! forward in the same call, so the two never drift apart.

use crate::error::{Error, Result};
use crate::grouping::{self, MedicationSection};
use crate::log::DoseLogStore;
use crate::registry::MedicationRegistry;
use crate::types::{DoseLog, Medication, MedicationDraft};
use crate::{export, schedule};
use chrono::{DateTime, Utc};
use std::io::Write;

/// In-memory state for one tracking session
///
/// Nothing here outlives the value; dropping the tracker is the end of the
/// session and of its data.
#[derive(Clone, Debug, Default)]
pub struct MedTracker {
    registry: MedicationRegistry,
    logs: DoseLogStore,
}

impl MedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a medication from a form draft
    pub fn add_medication(&mut self, draft: MedicationDraft) -> Result<Medication> {
        self.registry.add(draft)
    }

    /// Replace a registered medication wholesale
    pub fn update_medication(&mut self, record: Medication) -> Result<Medication> {
        self.registry.update(record)
    }

    /// Record a dose event and reschedule the medication
    ///
    /// Appends one immutable log entry, then moves a scheduled medication's
    /// next dose to `timestamp` plus 24 hours. The reschedule happens
    /// whether or not the dose was marked taken; declining a dose still
    /// restarts the clock. As-needed medications are logged but never
    /// rescheduled. Fails without logging anything if the id is unknown.
    pub fn log_dose(
        &mut self,
        medication_id: &str,
        timestamp: DateTime<Utc>,
        taken: bool,
        notes: Option<String>,
    ) -> Result<DoseLog> {
        let medication = match self.registry.find_by_id(medication_id) {
            Some(found) => found.clone(),
            None => {
                return Err(Error::MedicationNotFound {
                    id: medication_id.to_string(),
                })
            }
        };

        let entry = self.logs.append(medication_id, timestamp, taken, notes)?;

        if !medication.is_as_needed {
            let mut rescheduled = medication;
            rescheduled.next_dose = Some(schedule::next_dose_after(timestamp));
            self.registry.update(rescheduled)?;
        }

        tracing::info!(
            "Logged {} dose for medication {}",
            if taken { "taken" } else { "missed" },
            medication_id
        );
        Ok(entry)
    }

    /// Dose history for one medication, oldest first
    pub fn history<'a>(&'a self, medication_id: &'a str) -> impl Iterator<Item = &'a DoseLog> {
        self.logs.query_by_medication(medication_id)
    }

    /// The medication list partitioned into display sections
    pub fn sections(&self) -> Vec<MedicationSection<'_>> {
        grouping::partition(self.registry.medications())
    }

    /// Write the session's full dose history as CSV
    ///
    /// Returns the number of data rows written.
    pub fn export_history_csv<W: Write>(&self, writer: W) -> Result<usize> {
        export::write_history_csv(writer, self.logs.entries(), &self.registry)
    }

    /// Look up one medication by identifier
    pub fn find_medication(&self, id: &str) -> Option<&Medication> {
        self.registry.find_by_id(id)
    }

    /// All registered medications in insertion order
    pub fn medications(&self) -> &[Medication] {
        self.registry.medications()
    }

    /// Every dose log entry this session, in logging order
    pub fn dose_logs(&self) -> &[DoseLog] {
        self.logs.entries()
    }
}

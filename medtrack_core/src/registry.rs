//! In-memory medication registry.
//!
//! The registry owns every medication record for the current session, in the
//! order they were added. Records enter through [`MedicationRegistry::add`]
//! and change only through wholesale replacement; there is no removal, so an
//! identifier handed out once stays resolvable for the life of the session.

use crate::error::{Error, Result};
use crate::types::{Medication, MedicationDraft};
use uuid::Uuid;

/// Owns the session's medication records
#[derive(Clone, Debug, Default)]
pub struct MedicationRegistry {
    medications: Vec<Medication>,
}

impl MedicationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a medication from a form draft
    ///
    /// The name must be non-empty after trimming. Drafts without an
    /// identifier get a freshly generated UUID; an explicit identifier is
    /// kept but must not collide with a registered record. Returns the
    /// stored record, including its assigned identifier.
    pub fn add(&mut self, draft: MedicationDraft) -> Result<Medication> {
        if draft.name.trim().is_empty() {
            return Err(Error::Validation("medication name is required".into()));
        }

        let id = match draft.id.as_deref().map(str::trim) {
            Some(explicit) if !explicit.is_empty() => {
                if self.find_by_id(explicit).is_some() {
                    return Err(Error::Validation(format!(
                        "medication id '{}' is already registered",
                        explicit
                    )));
                }
                explicit.to_string()
            }
            _ => Uuid::new_v4().to_string(),
        };

        let medication = draft.into_medication(id);
        tracing::debug!(
            "Registered medication '{}' ({})",
            medication.name,
            medication.id
        );

        let stored = medication.clone();
        self.medications.push(medication);
        Ok(stored)
    }

    /// Replace a registered record wholesale
    ///
    /// Matches on `record.id` and swaps the whole record in place, keeping
    /// its position in the list. The replacement must still carry a name.
    pub fn update(&mut self, record: Medication) -> Result<Medication> {
        if record.name.trim().is_empty() {
            return Err(Error::Validation("medication name is required".into()));
        }

        match self.medications.iter().position(|m| m.id == record.id) {
            Some(index) => {
                tracing::debug!("Updated medication '{}' ({})", record.name, record.id);
                self.medications[index] = record;
                Ok(self.medications[index].clone())
            }
            None => Err(Error::MedicationNotFound { id: record.id }),
        }
    }

    /// Look up a medication by identifier
    pub fn find_by_id(&self, id: &str) -> Option<&Medication> {
        self.medications.iter().find(|m| m.id == id)
    }

    /// All registered medications in insertion order
    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn len(&self) -> usize {
        self.medications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
    }
}

//! Append-only dose log store.
//!
//! Every dose event is recorded as an immutable [`DoseLog`] entry. Entries
//! are only ever appended; nothing edits or removes them, so the store is a
//! faithful history of what was logged this session, in logging order.

use crate::error::{Error, Result};
use crate::types::DoseLog;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Holds the session's dose log entries in logging order
#[derive(Clone, Debug, Default)]
pub struct DoseLogStore {
    entries: Vec<DoseLog>,
}

impl DoseLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one dose event
    ///
    /// `timestamp` is when the dose was taken as reported by the caller;
    /// the entry's `logged_at` is stamped here, once, at append time. The
    /// medication id must be non-empty but is not checked for registration;
    /// referential checks belong to the caller.
    pub fn append(
        &mut self,
        medication_id: &str,
        timestamp: DateTime<Utc>,
        taken: bool,
        notes: Option<String>,
    ) -> Result<DoseLog> {
        if medication_id.trim().is_empty() {
            return Err(Error::Validation("medication id is required".into()));
        }

        let entry = DoseLog {
            id: Uuid::new_v4().to_string(),
            medication_id: medication_id.to_string(),
            timestamp,
            logged_at: Utc::now(),
            taken,
            notes,
        };
        tracing::debug!(
            "Appended dose log {} for medication {}",
            entry.id,
            entry.medication_id
        );

        let stored = entry.clone();
        self.entries.push(entry);
        Ok(stored)
    }

    /// Iterate the entries for one medication, oldest first
    ///
    /// Each call starts a fresh pass over the store; iterating never
    /// consumes anything. An id with no entries yields an empty iterator.
    pub fn query_by_medication<'a>(
        &'a self,
        medication_id: &'a str,
    ) -> impl Iterator<Item = &'a DoseLog> {
        self.entries
            .iter()
            .filter(move |entry| entry.medication_id == medication_id)
    }

    /// Every entry in logging order
    pub fn entries(&self) -> &[DoseLog] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

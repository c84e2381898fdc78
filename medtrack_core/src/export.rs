//! CSV export of the dose history.
//!
//! Renders the session's dose log to any writer, typically stdout for
//! piping into other tools. Export is one-way; nothing reads CSV back in.

use crate::error::Result;
use crate::registry::MedicationRegistry;
use crate::types::DoseLog;
use std::io::Write;

const HEADER: [&str; 6] = [
    "medication",
    "medication_id",
    "timestamp",
    "logged_at",
    "taken",
    "notes",
];

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow<'a> {
    medication: &'a str,
    medication_id: &'a str,
    timestamp: String,
    logged_at: String,
    taken: bool,
    notes: &'a str,
}

/// Write dose log entries as CSV, resolving medication names on the way
///
/// The header row is written even when there are no entries. A medication
/// id with no registered record falls back to the raw id in the name
/// column. Returns the number of data rows written.
pub fn write_history_csv<W: Write>(
    writer: W,
    entries: &[DoseLog],
    registry: &MedicationRegistry,
) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;

    let mut rows = 0;
    for entry in entries {
        let medication = registry
            .find_by_id(&entry.medication_id)
            .map(|m| m.name.as_str())
            .unwrap_or(entry.medication_id.as_str());

        csv_writer.serialize(CsvRow {
            medication,
            medication_id: &entry.medication_id,
            timestamp: entry.timestamp.to_rfc3339(),
            logged_at: entry.logged_at.to_rfc3339(),
            taken: entry.taken,
            notes: entry.notes.as_deref().unwrap_or(""),
        })?;
        rows += 1;
    }

    csv_writer.flush()?;
    tracing::debug!("Exported {} dose log rows as CSV", rows);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::DoseLogStore;
    use crate::types::MedicationDraft;
    use chrono::{TimeZone, Utc};

    fn export_to_string(entries: &[DoseLog], registry: &MedicationRegistry) -> String {
        let mut buffer = Vec::new();
        write_history_csv(&mut buffer, entries, registry).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_is_written_even_with_no_entries() {
        let output = export_to_string(&[], &MedicationRegistry::new());
        assert_eq!(
            output.lines().next(),
            Some("medication,medication_id,timestamp,logged_at,taken,notes")
        );
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_rows_carry_resolved_names_and_rfc3339_times() {
        let mut registry = MedicationRegistry::new();
        let aspirin = registry
            .add(MedicationDraft {
                name: "Aspirin".into(),
                ..Default::default()
            })
            .unwrap();

        let mut store = DoseLogStore::new();
        let taken_at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        store
            .append(&aspirin.id, taken_at, true, Some("with breakfast".into()))
            .unwrap();

        let output = export_to_string(store.entries(), &registry);
        let row = output.lines().nth(1).unwrap();
        assert!(row.starts_with("Aspirin,"));
        assert!(row.contains("2024-03-01T08:00:00+00:00"));
        assert!(row.contains(",true,"));
        assert!(row.ends_with("with breakfast"));
    }

    #[test]
    fn test_row_count_matches_entries() {
        let mut registry = MedicationRegistry::new();
        let med = registry
            .add(MedicationDraft {
                name: "Aspirin".into(),
                ..Default::default()
            })
            .unwrap();

        let mut store = DoseLogStore::new();
        store.append(&med.id, Utc::now(), true, None).unwrap();
        store.append(&med.id, Utc::now(), false, None).unwrap();

        let mut buffer = Vec::new();
        let rows = write_history_csv(&mut buffer, store.entries(), &registry).unwrap();
        assert_eq!(rows, 2);
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_unregistered_medication_falls_back_to_raw_id() {
        let mut store = DoseLogStore::new();
        store
            .append("orphan-id", Utc::now(), true, None)
            .unwrap();

        let output = export_to_string(store.entries(), &MedicationRegistry::new());
        let row = output.lines().nth(1).unwrap();
        assert!(row.starts_with("orphan-id,orphan-id,"));
    }

    #[test]
    fn test_missing_notes_export_as_empty_field() {
        let mut registry = MedicationRegistry::new();
        let med = registry
            .add(MedicationDraft {
                name: "Aspirin".into(),
                ..Default::default()
            })
            .unwrap();

        let mut store = DoseLogStore::new();
        store.append(&med.id, Utc::now(), false, None).unwrap();

        let output = export_to_string(store.entries(), &registry);
        let row = output.lines().nth(1).unwrap();
        assert!(row.ends_with(",false,"));
    }
}

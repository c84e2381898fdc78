//! Display grouping for the medication list.
//!
//! Partitions registered medications into the sections the UI renders:
//! the four time-of-day groups in fixed order, then scheduled medications
//! with no group, then as-needed medications. Sections with nothing in
//! them are omitted entirely. Within a section, insertion order holds.

use crate::icons::IconKey;
use crate::types::{Medication, MedicationGroup};

/// Identity of one display section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    /// A time-of-day group of scheduled medications
    Group(MedicationGroup),
    /// Scheduled medications with no group assigned
    OtherScheduled,
    /// Medications taken as needed
    AsNeeded,
}

impl SectionKind {
    /// Section heading text
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Group(group) => group.label(),
            SectionKind::OtherScheduled => "Other Scheduled Medications",
            SectionKind::AsNeeded => "As Needed Medications",
        }
    }

    /// Heading icon, for sections that have one
    pub fn icon(&self) -> Option<IconKey> {
        match self {
            SectionKind::Group(group) => Some(group.icon()),
            SectionKind::OtherScheduled | SectionKind::AsNeeded => None,
        }
    }

    /// Whether the section holds scheduled (not as-needed) medications
    pub fn is_scheduled(&self) -> bool {
        !matches!(self, SectionKind::AsNeeded)
    }
}

/// One section of the rendered medication list
#[derive(Clone, Debug)]
pub struct MedicationSection<'a> {
    pub kind: SectionKind,
    pub medications: Vec<&'a Medication>,
}

/// Partition medications into display sections
///
/// Section order is fixed: morning, midday, evening, night, other
/// scheduled, as needed. Every medication lands in exactly one section;
/// an as-needed medication goes to the as-needed section even if it also
/// carries a group.
pub fn partition(medications: &[Medication]) -> Vec<MedicationSection<'_>> {
    let mut sections = Vec::new();

    for group in MedicationGroup::all() {
        let members: Vec<&Medication> = medications
            .iter()
            .filter(|m| !m.is_as_needed && m.group == Some(*group))
            .collect();
        if !members.is_empty() {
            sections.push(MedicationSection {
                kind: SectionKind::Group(*group),
                medications: members,
            });
        }
    }

    let ungrouped: Vec<&Medication> = medications
        .iter()
        .filter(|m| !m.is_as_needed && m.group.is_none())
        .collect();
    if !ungrouped.is_empty() {
        sections.push(MedicationSection {
            kind: SectionKind::OtherScheduled,
            medications: ungrouped,
        });
    }

    let as_needed: Vec<&Medication> = medications.iter().filter(|m| m.is_as_needed).collect();
    if !as_needed.is_empty() {
        sections.push(MedicationSection {
            kind: SectionKind::AsNeeded,
            medications: as_needed,
        });
    }

    sections
}

#![forbid(unsafe_code)]

//! Core domain model and business logic for the MedTrack system.
//!
//! This crate provides:
//! - Domain types (medications, dose logs, groups, icons)
//! - The medication registry and append-only dose log store
//! - Next-dose scheduling and display grouping
//! - The session tracker facade
//! - Sample data, CSV export, configuration

pub mod types;
pub mod error;
pub mod icons;
pub mod config;
pub mod logging;
pub mod registry;
pub mod log;
pub mod schedule;
pub mod grouping;
pub mod tracker;
pub mod samples;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use icons::IconKey;
pub use config::Config;
pub use registry::MedicationRegistry;
pub use log::DoseLogStore;
pub use schedule::{dose_status, next_dose_after, DoseStatus};
pub use grouping::{partition, MedicationSection, SectionKind};
pub use tracker::MedTracker;
pub use samples::sample_medications;

//! Icon catalog for medication and section display.
//!
//! Medication records store their icon as a free-form string key. Display
//! code resolves that key against the closed set of supported icons; any
//! unknown, empty, or missing key resolves to [`IconKey::Pill`] so a record
//! with a bad key still renders.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached lookup index from lowercased key name to icon - built once
static ICON_INDEX: Lazy<HashMap<String, IconKey>> = Lazy::new(|| {
    IconKey::all()
        .iter()
        .map(|icon| (icon.name().to_lowercase(), *icon))
        .collect()
});

/// A supported display icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKey {
    Pill,
    Capsule,
    Syringe,
    Droplet,
    Heart,
    Activity,
    Thermometer,
    Stethoscope,
    FirstAid,
    Tablets,
    Sunrise,
    Sun,
    Sunset,
    Moon,
}

impl IconKey {
    /// Icon substituted for unknown or missing keys
    pub const FALLBACK: IconKey = IconKey::Pill;

    /// Every supported icon
    pub fn all() -> &'static [IconKey] {
        &[
            IconKey::Pill,
            IconKey::Capsule,
            IconKey::Syringe,
            IconKey::Droplet,
            IconKey::Heart,
            IconKey::Activity,
            IconKey::Thermometer,
            IconKey::Stethoscope,
            IconKey::FirstAid,
            IconKey::Tablets,
            IconKey::Sunrise,
            IconKey::Sun,
            IconKey::Sunset,
            IconKey::Moon,
        ]
    }

    /// Icons offered when picking one for a medication
    ///
    /// The time-of-day icons are reserved for section headers and are not
    /// offered here, though they still resolve if a record carries one.
    pub fn medication_choices() -> &'static [IconKey] {
        &[
            IconKey::Pill,
            IconKey::Capsule,
            IconKey::Syringe,
            IconKey::Droplet,
            IconKey::Heart,
            IconKey::Activity,
            IconKey::Thermometer,
            IconKey::Stethoscope,
            IconKey::FirstAid,
            IconKey::Tablets,
        ]
    }

    /// Canonical key name as stored in medication records
    pub fn name(&self) -> &'static str {
        match self {
            IconKey::Pill => "Pill",
            IconKey::Capsule => "Capsule",
            IconKey::Syringe => "Syringe",
            IconKey::Droplet => "Droplet",
            IconKey::Heart => "Heart",
            IconKey::Activity => "Activity",
            IconKey::Thermometer => "Thermometer",
            IconKey::Stethoscope => "Stethoscope",
            IconKey::FirstAid => "FirstAid",
            IconKey::Tablets => "Tablets",
            IconKey::Sunrise => "Sunrise",
            IconKey::Sun => "Sun",
            IconKey::Sunset => "Sunset",
            IconKey::Moon => "Moon",
        }
    }

    /// Terminal glyph for the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKey::Pill | IconKey::Capsule | IconKey::Tablets => "💊",
            IconKey::Syringe => "💉",
            IconKey::Droplet => "💧",
            IconKey::Heart => "❤",
            IconKey::Activity => "📈",
            IconKey::Thermometer => "🌡",
            IconKey::Stethoscope => "🩺",
            IconKey::FirstAid => "⛑",
            IconKey::Sunrise => "🌅",
            IconKey::Sun => "☀",
            IconKey::Sunset => "🌇",
            IconKey::Moon => "🌙",
        }
    }

    /// Resolve a free-form key, case-insensitively
    ///
    /// Unknown keys resolve to [`IconKey::FALLBACK`] rather than erroring;
    /// stored records may predate the current icon set.
    pub fn resolve(key: &str) -> IconKey {
        ICON_INDEX
            .get(&key.trim().to_lowercase())
            .copied()
            .unwrap_or(IconKey::FALLBACK)
    }

    /// Resolve an optional key; a missing key gets the fallback
    pub fn resolve_opt(key: Option<&str>) -> IconKey {
        key.map(IconKey::resolve).unwrap_or(IconKey::FALLBACK)
    }
}

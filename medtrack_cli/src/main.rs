use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use medtrack_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medtrack")]
#[command(about = "Single-session medication tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive tracking session (default)
    Run {
        /// Seed the session with the built-in sample medications
        #[arg(long)]
        seed: bool,

        /// Render the medication list once and exit
        #[arg(long)]
        once: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    medtrack_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Run { seed, once }) => cmd_run(&config, seed, once),
        None => {
            // Default to "run" command
            cmd_run(&config, false, false)
        }
    }
}

fn cmd_run(config: &Config, seed: bool, once: bool) -> Result<()> {
    let mut tracker = MedTracker::new();

    if seed || config.session.seed_samples {
        for draft in sample_medications() {
            tracker.add_medication(draft)?;
        }
        tracing::info!("Seeded session with sample medications");
    }

    loop {
        // Numbers shown on screen map to ids through this list
        let listed = display_medication_list(&tracker, config);

        if once {
            return Ok(());
        }

        display_menu()?;

        let choice = match read_line()? {
            Some(choice) => choice,
            None => break, // end of input
        };

        let outcome = match choice.to_lowercase().as_str() {
            "a" => action_add(&mut tracker),
            "l" => action_log_dose(&mut tracker, &listed),
            "h" => action_history(&tracker, &listed, config),
            "e" => action_edit(&mut tracker, &listed),
            "x" => action_export(&tracker),
            "q" => break,
            "" => Ok(()),
            other => {
                println!("Unknown command: {}", other);
                Ok(())
            }
        };

        // Recoverable by re-entering; the session itself keeps going
        if let Err(e) = outcome {
            eprintln!("Error: {}", e);
        }
    }

    println!("\nSession ended. Nothing was saved.");
    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

/// Print the grouped medication list; returns the listed ids in number order
fn display_medication_list(tracker: &MedTracker, config: &Config) -> Vec<String> {
    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│  MEDTRACK");
    println!("╰─────────────────────────────────────────╯");

    let sections = tracker.sections();
    if sections.is_empty() {
        println!();
        println!("  No medications yet. Use [a] to add one.");
        return Vec::new();
    }

    let mut listed = Vec::new();
    let mut scheduled_heading_shown = false;

    for section in &sections {
        if section.kind.is_scheduled() && !scheduled_heading_shown {
            println!();
            println!("  Scheduled Medications");
            scheduled_heading_shown = true;
        }

        println!();
        match section.kind.icon() {
            Some(icon) if config.display.show_icons => {
                println!("  {} {}", icon.glyph(), section.kind.title());
            }
            _ => println!("  {}", section.kind.title()),
        }

        for medication in &section.medications {
            display_medication(medication, listed.len() + 1, config);
            listed.push(medication.id.clone());
        }
    }

    listed
}

fn display_medication(medication: &Medication, number: usize, config: &Config) {
    let dosage = medication
        .dosage
        .as_deref()
        .map(|d| format!(" ({})", d))
        .unwrap_or_default();

    if config.display.show_icons {
        let icon = IconKey::resolve_opt(medication.icon.as_deref());
        println!("  {:2}. {} {}{}", number, icon.glyph(), medication.name, dosage);
    } else {
        println!("  {:2}. {}{}", number, medication.name, dosage);
    }

    if let Some(ref frequency) = medication.frequency {
        println!("      {}", frequency);
    }
    if !medication.is_as_needed {
        println!(
            "      Next dose: {}",
            format_dose_status(dose_status(medication), config)
        );
    }
    if let Some(date) = medication.next_refill_date {
        println!("      Next refill: {}", format_date(date));
    }
    if let Some(ref prescriber) = medication.prescriber {
        println!("      Dr. {}", prescriber);
    }
    if let Some(ref instructions) = medication.instructions {
        println!("      {}", instructions);
    }
}

fn display_menu() -> Result<()> {
    println!();
    println!("─────────────────────────────────────────");
    println!("  [a] add medication    [l] log dose");
    println!("  [h] dose history      [e] edit medication");
    println!("  [x] export history    [q] quit");
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn format_dose_status(status: DoseStatus, config: &Config) -> String {
    match status {
        DoseStatus::AsNeeded => "as needed".into(),
        DoseStatus::DueNow => "now".into(),
        DoseStatus::DueAt(at) => {
            let now = Utc::now();
            if at <= now {
                "now".into()
            } else {
                format!("in {} ({})", format_wait(at - now), format_time(at, config))
            }
        }
    }
}

fn format_wait(wait: Duration) -> String {
    let minutes = wait.num_minutes();
    if minutes < 1 {
        "under a minute".into()
    } else if minutes < 60 {
        format!("{} min", minutes)
    } else if wait.num_hours() < 48 {
        format!("{}h {:02}m", wait.num_hours(), minutes % 60)
    } else {
        format!("{} days", wait.num_days())
    }
}

fn format_time(at: DateTime<Utc>, config: &Config) -> String {
    let local = at.with_timezone(&Local);
    if config.display.use_24h_clock {
        local.format("%Y-%m-%d %H:%M").to_string()
    } else {
        local.format("%b %-d, %Y %-I:%M %p").to_string()
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

// ============================================================================
// Menu actions
// ============================================================================

fn action_add(tracker: &mut MedTracker) -> Result<()> {
    println!();
    println!("Add Medication (leave a field empty to skip it)");

    let name = prompt("  Name: ")?.unwrap_or_default();
    let group =
        parse_optional_group(prompt_optional("  Time of day (morning/midday/evening/night): ")?)?;
    let icon = prompt_optional(&format!("  Icon ({}): ", icon_choices()))?;
    let dosage = prompt_optional("  Dosage: ")?;
    let frequency = prompt_optional("  Frequency: ")?;
    let prescriber = prompt_optional("  Prescribing doctor: ")?;
    let start_date = parse_optional_date(prompt_optional("  Start date (YYYY-MM-DD): ")?)?;
    let last_refill_date = parse_optional_date(prompt_optional("  Last refill (YYYY-MM-DD): ")?)?;
    let next_refill_date = parse_optional_date(prompt_optional("  Next refill (YYYY-MM-DD): ")?)?;
    let instructions = prompt_optional("  Special instructions: ")?;
    let is_as_needed = prompt_yes_no("  Take as needed? [y/N]: ", false)?;

    let added = tracker.add_medication(MedicationDraft {
        id: None,
        name,
        dosage,
        frequency,
        prescriber,
        start_date,
        instructions,
        last_refill_date,
        next_refill_date,
        next_dose: None,
        is_as_needed,
        group,
        icon,
    })?;

    println!();
    println!("✓ Added {}", added.name);
    Ok(())
}

fn action_log_dose(tracker: &mut MedTracker, listed: &[String]) -> Result<()> {
    let medication_id = match select_medication(listed)? {
        Some(id) => id,
        None => return Ok(()),
    };
    let name = medication_name(tracker, &medication_id);

    println!();
    println!("Log Dose: {}", name);

    let timestamp = match prompt_optional("  Taken at (YYYY-MM-DD HH:MM, empty for now): ")? {
        Some(raw) => parse_local_timestamp(&raw)?,
        None => Utc::now(),
    };
    let taken = prompt_yes_no("  Was it taken? [Y/n]: ", true)?;
    let notes = prompt_optional("  Notes: ")?;

    tracker.log_dose(&medication_id, timestamp, taken, notes)?;

    println!();
    println!("✓ Dose logged");
    Ok(())
}

fn action_history(tracker: &MedTracker, listed: &[String], config: &Config) -> Result<()> {
    let medication_id = match select_medication(listed)? {
        Some(id) => id,
        None => return Ok(()),
    };

    println!();
    println!("Dose History: {}", medication_name(tracker, &medication_id));

    let mut any = false;
    for entry in tracker.history(&medication_id) {
        any = true;
        let mark = if entry.taken { "✓" } else { "✗" };
        match entry.notes {
            Some(ref notes) => {
                println!("  {} {} - {}", mark, format_time(entry.timestamp, config), notes)
            }
            None => println!("  {} {}", mark, format_time(entry.timestamp, config)),
        }
    }
    if !any {
        println!("  No medication logs yet");
    }
    Ok(())
}

fn action_edit(tracker: &mut MedTracker, listed: &[String]) -> Result<()> {
    let medication_id = match select_medication(listed)? {
        Some(id) => id,
        None => return Ok(()),
    };
    let current = match tracker.find_medication(&medication_id) {
        Some(found) => found.clone(),
        None => return Err(Error::MedicationNotFound { id: medication_id }),
    };

    println!();
    println!(
        "Edit {} (empty keeps the current value, '-' clears it)",
        current.name
    );

    let name = prompt_edit("  Name", Some(&current.name))?.unwrap_or_default();
    let group = parse_optional_group(prompt_edit(
        "  Time of day",
        current.group.map(|g| g.to_string()).as_deref(),
    )?)?;
    let icon = prompt_edit("  Icon", current.icon.as_deref())?;
    let dosage = prompt_edit("  Dosage", current.dosage.as_deref())?;
    let frequency = prompt_edit("  Frequency", current.frequency.as_deref())?;
    let prescriber = prompt_edit("  Prescribing doctor", current.prescriber.as_deref())?;
    let start_date = parse_optional_date(prompt_edit(
        "  Start date",
        current.start_date.map(|d| d.to_string()).as_deref(),
    )?)?;
    let last_refill_date = parse_optional_date(prompt_edit(
        "  Last refill",
        current.last_refill_date.map(|d| d.to_string()).as_deref(),
    )?)?;
    let next_refill_date = parse_optional_date(prompt_edit(
        "  Next refill",
        current.next_refill_date.map(|d| d.to_string()).as_deref(),
    )?)?;
    let instructions = prompt_edit("  Special instructions", current.instructions.as_deref())?;
    let as_needed_label = if current.is_as_needed {
        "  Take as needed? [Y/n]: "
    } else {
        "  Take as needed? [y/N]: "
    };
    let is_as_needed = prompt_yes_no(as_needed_label, current.is_as_needed)?;

    let updated = tracker.update_medication(Medication {
        id: current.id,
        name,
        dosage,
        frequency,
        prescriber,
        start_date,
        instructions,
        last_refill_date,
        next_refill_date,
        // Editing never touches the schedule; only logging a dose moves it
        next_dose: current.next_dose,
        is_as_needed,
        group,
        icon,
    })?;

    println!();
    println!("✓ Updated {}", updated.name);
    Ok(())
}

fn action_export(tracker: &MedTracker) -> Result<()> {
    let stdout = io::stdout();
    let rows = tracker.export_history_csv(stdout.lock())?;
    // Status goes to stderr so piped CSV stays clean
    eprintln!("Exported {} dose log rows", rows);
    Ok(())
}

// ============================================================================
// Input helpers
// ============================================================================

/// Read one line from stdin; None means end of input
fn read_line() -> Result<Option<String>> {
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    read_line()
}

/// Prompt for an optional field; empty input means absent
fn prompt_optional(label: &str) -> Result<Option<String>> {
    Ok(prompt(label)?.filter(|entry| !entry.is_empty()))
}

/// Prompt showing the current value; empty keeps it, '-' clears it
fn prompt_edit(label: &str, current: Option<&str>) -> Result<Option<String>> {
    let shown = current.unwrap_or("none");
    match prompt(&format!("{} [{}]: ", label, shown))? {
        Some(entry) => {
            if entry.is_empty() {
                Ok(current.map(str::to_string))
            } else if entry == "-" {
                Ok(None)
            } else {
                Ok(Some(entry))
            }
        }
        None => Ok(current.map(str::to_string)),
    }
}

fn prompt_yes_no(label: &str, default: bool) -> Result<bool> {
    match prompt(label)? {
        Some(answer) => Ok(match answer.to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        }),
        None => Ok(default),
    }
}

fn select_medication(listed: &[String]) -> Result<Option<String>> {
    if listed.is_empty() {
        println!("No medications to choose from.");
        return Ok(None);
    }

    match prompt("  Medication number: ")? {
        Some(raw) => {
            let number: usize = raw
                .parse()
                .map_err(|_| Error::Validation(format!("'{}' is not a number", raw)))?;
            match number.checked_sub(1).and_then(|index| listed.get(index)) {
                Some(id) => Ok(Some(id.clone())),
                None => Err(Error::Validation(format!(
                    "no medication numbered {}",
                    number
                ))),
            }
        }
        None => Ok(None),
    }
}

fn medication_name(tracker: &MedTracker, medication_id: &str) -> String {
    tracker
        .find_medication(medication_id)
        .map(|m| m.name.clone())
        .unwrap_or_else(|| medication_id.to_string())
}

// ============================================================================
// Parsing helpers
// ============================================================================

fn icon_choices() -> String {
    IconKey::medication_choices()
        .iter()
        .map(|icon| icon.name())
        .collect::<Vec<_>>()
        .join("/")
}

fn parse_optional_group(text: Option<String>) -> Result<Option<MedicationGroup>> {
    text.map(|raw| raw.parse()).transpose()
}

fn parse_optional_date(text: Option<String>) -> Result<Option<NaiveDate>> {
    match text {
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Ok(Some(date)),
            Err(_) => Err(Error::Validation(format!(
                "invalid date '{}', expected YYYY-MM-DD",
                raw
            ))),
        },
        None => Ok(None),
    }
}

/// Parse a wall-clock entry in the user's local timezone
fn parse_local_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").map_err(|_| {
        Error::Validation(format!("invalid time '{}', expected YYYY-MM-DD HH:MM", raw))
    })?;
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => Ok(local.with_timezone(&Utc)),
        None => Err(Error::Validation(format!(
            "'{}' is not a valid local time",
            raw
        ))),
    }
}

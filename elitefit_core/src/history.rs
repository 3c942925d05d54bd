//! Activity history loading with a rolling day window.
//!
//! This module loads recent activity entries from both the live JSONL log
//! and the CSV archive to back the dashboard views.

use crate::{ActivityEntry, Result};
use chrono::{DateTime, Duration, Utc};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use uuid::Uuid;

/// CSV row format for reading archived activities
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    sets: u32,
    reps: u32,
    weight_kg: f64,
    duration_min: u32,
    calories: u32,
    completed: bool,
    performed_at: String,
}

impl TryFrom<CsvRow> for ActivityEntry {
    type Error = crate::Error;

    fn try_from(row: CsvRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| crate::Error::Other(format!("Invalid UUID: {}", e)))?;

        let performed_at = DateTime::parse_from_rfc3339(&row.performed_at)
            .map_err(|e| crate::Error::Other(format!("Invalid date: {}", e)))?
            .with_timezone(&Utc);

        Ok(ActivityEntry {
            id,
            name: row.name,
            sets: row.sets,
            reps: row.reps,
            weight_kg: row.weight_kg,
            duration_min: row.duration_min,
            calories: row.calories,
            completed: row.completed,
            performed_at,
        })
    }
}

/// Load activities from the last N days from both the log and the CSV archive
///
/// Returns entries sorted by performed_at (newest first).
/// Automatically deduplicates entries that appear in both files.
pub fn load_recent_entries(
    log_path: &Path,
    csv_path: &Path,
    days: i64,
) -> Result<Vec<ActivityEntry>> {
    let cutoff = Utc::now() - Duration::days(days);
    let mut entries = Vec::new();
    let mut seen_ids = HashSet::new();

    // Load from the live log first (most recent)
    if log_path.exists() {
        let log_entries = crate::activity::read_entries(log_path)?;
        for entry in log_entries {
            if entry.performed_at >= cutoff {
                seen_ids.insert(entry.id);
                entries.push(entry);
            }
        }
        tracing::debug!("Loaded {} activities from log", entries.len());
    }

    // Load from the CSV archive
    if csv_path.exists() {
        let csv_entries = load_entries_from_csv(csv_path)?;
        let mut csv_count = 0;
        for entry in csv_entries {
            if entry.performed_at >= cutoff && !seen_ids.contains(&entry.id) {
                seen_ids.insert(entry.id);
                entries.push(entry);
                csv_count += 1;
            }
        }
        tracing::debug!("Loaded {} activities from CSV", csv_count);
    }

    // Sort by performed_at, newest first
    entries.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));

    tracing::info!(
        "Loaded {} total activities from last {} days",
        entries.len(),
        days
    );

    Ok(entries)
}

/// Load all activities from a CSV archive
fn load_entries_from_csv(path: &Path) -> Result<Vec<ActivityEntry>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut entries = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        match result {
            Ok(row) => match ActivityEntry::try_from(row) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!("Failed to parse CSV row: {}", e);
                }
            },
            Err(e) => {
                tracing::warn!("Failed to deserialize CSV row: {}", e);
            }
        }
    }

    Ok(entries)
}

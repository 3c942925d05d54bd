//! CSV rollup functionality for archiving the activity log.
//!
//! This module implements atomic log-to-CSV conversion with proper error
//! handling to prevent data loss.

use crate::{ActivityEntry, Result};
use std::fs::OpenOptions;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
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

impl From<&ActivityEntry> for CsvRow {
    fn from(entry: &ActivityEntry) -> Self {
        CsvRow {
            id: entry.id.to_string(),
            name: entry.name.clone(),
            sets: entry.sets,
            reps: entry.reps,
            weight_kg: entry.weight_kg,
            duration_min: entry.duration_min,
            calories: entry.calories,
            completed: entry.completed,
            performed_at: entry.performed_at.to_rfc3339(),
        }
    }
}

/// Roll up log entries into CSV and archive the log atomically
///
/// This function:
/// 1. Reads all entries from the live log
/// 2. Appends them to the CSV file (creates with headers if needed)
/// 3. Syncs the CSV to disk
/// 4. Renames the log to .processed
/// 5. Returns the number of entries processed
///
/// # Safety
/// - CSV is fsynced before the log is renamed
/// - The log is renamed (not deleted) to allow manual recovery if needed
/// - Processed log files can be cleaned up afterwards
pub fn log_to_csv_and_archive(log_path: &Path, csv_path: &Path) -> Result<usize> {
    let entries = crate::activity::read_entries(log_path)?;

    if entries.is_empty() {
        tracing::info!("No activities in log to roll up");
        return Ok(0);
    }

    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    // Headers go in only when the file is empty
    let needs_headers = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    for entry in &entries {
        let row = CsvRow::from(entry);
        writer.serialize(row)?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Wrote {} activities to CSV", entries.len());

    // Atomically archive the log by renaming it
    let processed_path = log_path.with_extension("log.processed");
    std::fs::rename(log_path, &processed_path)?;

    tracing::info!("Archived activity log to {:?}", processed_path);

    Ok(entries.len())
}

/// Clean up old processed log files
///
/// This removes all .log.processed files in the given directory.
pub fn cleanup_processed_logs(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if let Some(extension) = path.extension() {
            if extension == "processed" {
                std::fs::remove_file(&path)?;
                tracing::debug!("Removed processed log: {:?}", path);
                count += 1;
            }
        }
    }

    if count > 0 {
        tracing::info!("Cleaned up {} processed log files", count);
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{ActivitySink, JsonlSink};
    use chrono::Utc;
    use std::fs::File;
    use uuid::Uuid;

    fn create_test_entry(name: &str) -> ActivityEntry {
        ActivityEntry {
            id: Uuid::new_v4(),
            name: name.into(),
            sets: 3,
            reps: 15,
            weight_kg: 80.0,
            duration_min: 10,
            calories: 120,
            completed: true,
            performed_at: Utc::now(),
        }
    }

    #[test]
    fn test_log_to_csv_creates_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("activities.log");
        let csv_path = temp_dir.path().join("activities.csv");

        let mut sink = JsonlSink::new(&log_path);
        for i in 0..3 {
            sink.append(&create_test_entry(&format!("Exercise {}", i)))
                .unwrap();
        }

        let count = log_to_csv_and_archive(&log_path, &csv_path).unwrap();
        assert_eq!(count, 3);

        assert!(csv_path.exists());

        // Verify the log was archived
        assert!(!log_path.exists());
        assert!(log_path.with_extension("log.processed").exists());
    }

    #[test]
    fn test_log_to_csv_appends() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("activities.log");
        let csv_path = temp_dir.path().join("activities.csv");

        // First rollup
        let mut sink = JsonlSink::new(&log_path);
        sink.append(&create_test_entry("Squats")).unwrap();
        let count1 = log_to_csv_and_archive(&log_path, &csv_path).unwrap();
        assert_eq!(count1, 1);

        // Second rollup (appends)
        let mut sink = JsonlSink::new(&log_path);
        sink.append(&create_test_entry("Pull-ups")).unwrap();
        let count2 = log_to_csv_and_archive(&log_path, &csv_path).unwrap();
        assert_eq!(count2, 1);

        let reader = csv::Reader::from_path(&csv_path).unwrap();
        let record_count = reader.into_records().count();
        assert_eq!(record_count, 2);
    }

    #[test]
    fn test_empty_log() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("empty.log");
        let csv_path = temp_dir.path().join("activities.csv");

        File::create(&log_path).unwrap();

        let count = log_to_csv_and_archive(&log_path, &csv_path).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_cleanup_processed_logs() {
        let temp_dir = tempfile::tempdir().unwrap();

        File::create(temp_dir.path().join("a1.log.processed")).unwrap();
        File::create(temp_dir.path().join("a2.log.processed")).unwrap();
        File::create(temp_dir.path().join("keep.log")).unwrap();

        let count = cleanup_processed_logs(temp_dir.path()).unwrap();
        assert_eq!(count, 2);

        assert!(!temp_dir.path().join("a1.log.processed").exists());
        assert!(!temp_dir.path().join("a2.log.processed").exists());
        assert!(temp_dir.path().join("keep.log").exists());
    }
}

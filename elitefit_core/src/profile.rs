//! Profile and settings persistence with file locking.
//!
//! The member's profile (`user.json`) and application settings
//! (`settings.json`) live in the data directory and follow the same
//! discipline: load returns defaults when the file is missing or corrupted,
//! save is atomic (temp file + fsync + rename) under an exclusive lock.

use crate::{AppSettings, Error, Result, UserProfile};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Path of the profile file within a data directory
pub fn user_path(data_dir: &Path) -> PathBuf {
    data_dir.join("user.json")
}

/// Path of the settings file within a data directory
pub fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join("settings.json")
}

impl UserProfile {
    /// Load the profile, falling back to defaults on any problem
    pub fn load(path: &Path) -> Result<Self> {
        load_json_or_default(path, "profile")
    }

    /// Save the profile atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        save_json_atomic(self, path, "profile")
    }

    /// Load the profile, modify it, and save it back
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut UserProfile) -> Result<()>,
    {
        let mut profile = Self::load(path)?;
        f(&mut profile)?;
        profile.save(path)?;
        Ok(profile)
    }
}

impl AppSettings {
    /// Load settings, falling back to defaults on any problem
    pub fn load(path: &Path) -> Result<Self> {
        load_json_or_default(path, "settings")
    }

    /// Save settings atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        save_json_atomic(self, path, "settings")
    }

    /// Load settings, modify them, and save them back
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut AppSettings) -> Result<()>,
    {
        let mut settings = Self::load(path)?;
        f(&mut settings)?;
        settings.save(path)?;
        Ok(settings)
    }
}

/// Remove both profile and settings files (logout / delete account)
///
/// Missing files are not an error.
pub fn clear(data_dir: &Path) -> Result<()> {
    for path in [user_path(data_dir), settings_path(data_dir)] {
        match std::fs::remove_file(&path) {
            Ok(()) => tracing::info!("Removed {:?}", path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Bundle profile and settings into a single JSON document for export
pub fn export_bundle(data_dir: &Path) -> Result<serde_json::Value> {
    let user = UserProfile::load(&user_path(data_dir))?;
    let settings = AppSettings::load(&settings_path(data_dir))?;

    Ok(serde_json::json!({
        "user": user,
        "settings": settings,
    }))
}

/// Load a JSON file with shared locking, using defaults if anything fails.
///
/// A corrupted or unreadable file is logged as a warning, never surfaced to
/// the caller as an error.
fn load_json_or_default<T>(path: &Path, what: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        tracing::info!("No {} file found, using defaults", what);
        return Ok(T::default());
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("Unable to open {} file {:?}: {}. Using defaults.", what, path, e);
            return Ok(T::default());
        }
    };

    // Acquire shared lock for reading
    if let Err(e) = file.lock_shared() {
        tracing::warn!("Unable to lock {} file {:?}: {}. Using defaults.", what, path, e);
        return Ok(T::default());
    }

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    if let Err(e) = reader.read_to_string(&mut contents) {
        let _ = file.unlock();
        tracing::warn!("Failed to read {} file {:?}: {}. Using defaults.", what, path, e);
        return Ok(T::default());
    }

    file.unlock()?;

    match serde_json::from_str::<T>(&contents) {
        Ok(value) => {
            tracing::debug!("Loaded {} from {:?}", what, path);
            Ok(value)
        }
        Err(e) => {
            tracing::warn!("Failed to parse {} file {:?}: {}. Using defaults.", what, path, e);
            Ok(T::default())
        }
    }
}

/// Atomically write a JSON file:
/// 1. Write to a temp file in the same directory
/// 2. Sync to disk
/// 3. Rename over the original
fn save_json_atomic<T: Serialize>(value: &T, path: &Path, what: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::Other, "store path missing parent")
    })?)?;

    // Exclusive lock on the temp file serializes concurrent writers
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string(value)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved {} to {:?}", what, path);
    Ok(())
}

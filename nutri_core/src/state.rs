//! Session persistence with file locking.
//!
//! The current day's log is kept in a single JSON file so that separate
//! invocations of the CLI see the same session.

use crate::{Error, Result, Session};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

impl Session {
    /// Load a session from a file with shared locking
    ///
    /// Returns a fresh session with `default_goal` if the file doesn't exist.
    /// If the file is corrupted, logs a warning and starts fresh.
    pub fn load(path: &Path, default_goal: f64) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No session file found, starting a new log");
            return Ok(Self::new(default_goal));
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(
                    "Unable to open session file {:?}: {}. Starting a new log.",
                    path,
                    e
                );
                return Ok(Self::new(default_goal));
            }
        };

        if let Err(e) = file.lock_shared() {
            tracing::warn!(
                "Unable to lock session file {:?}: {}. Starting a new log.",
                path,
                e
            );
            return Ok(Self::new(default_goal));
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!(
                "Failed to read session file {:?}: {}. Starting a new log.",
                path,
                e
            );
            return Ok(Self::new(default_goal));
        }

        file.unlock()?;

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => {
                tracing::debug!(
                    "Loaded session with {} entries from {:?}",
                    session.entries.len(),
                    path
                );
                Ok(session)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse session file {:?}: {}. Starting a new log.",
                    path,
                    e
                );
                Ok(Self::new(default_goal))
            }
        }
    }

    /// Save the session to a file with exclusive locking
    ///
    /// Writes to a temp file in the same directory, syncs it, then renames
    /// it over the original.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| Error::State(format!("session path {:?} has no parent", path)))?;
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved session to {:?}", path);
        Ok(())
    }

    /// Load the session, modify it, and save it back
    ///
    /// Nothing is written if `f` fails.
    pub fn update<F, T>(path: &Path, default_goal: f64, f: F) -> Result<(Self, T)>
    where
        F: FnOnce(&mut Session) -> Result<T>,
    {
        let mut session = Self::load(path, default_goal)?;
        let value = f(&mut session)?;
        session.save(path)?;
        Ok((session, value))
    }
}

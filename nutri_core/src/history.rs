//! Saved daily summaries.
//!
//! Each saved day is one snapshot of the totals and score, keyed by date.
//! Saving the same date twice replaces the earlier snapshot.

use crate::{Error, Result, Session, SessionReport};
use chrono::{Local, NaiveDate};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Totals and score for one saved day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DailySnapshot {
    pub date: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sugar: f64,
    pub score: u8,
}

impl DailySnapshot {
    pub fn from_report(date: impl Into<String>, report: &SessionReport) -> Self {
        Self {
            date: date.into(),
            calories: report.totals.calories,
            protein: report.totals.protein,
            carbs: report.totals.carbs,
            fat: report.totals.fat,
            sugar: report.totals.sugar,
            score: report.score,
        }
    }
}

/// Date key for a day, e.g. `5/1/2026`
pub fn date_key(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Date key for the local current day
pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

/// JSON-file store of daily snapshots, oldest first
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all snapshots; a missing file is an empty history
    pub fn load(&self) -> Result<Vec<DailySnapshot>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        file.lock_shared()?;
        let parsed = serde_json::from_reader::<_, Vec<DailySnapshot>>(BufReader::new(&file));
        file.unlock()?;

        let snapshots = parsed?;
        tracing::debug!("Read {} daily snapshots", snapshots.len());
        Ok(snapshots)
    }

    /// Store a snapshot, replacing any snapshot with the same date
    pub fn record(&self, snapshot: DailySnapshot) -> Result<Vec<DailySnapshot>> {
        let mut snapshots = self.load()?;
        let before = snapshots.len();
        snapshots.retain(|s| s.date != snapshot.date);
        if snapshots.len() != before {
            tracing::info!("Replacing saved snapshot for {}", snapshot.date);
        }
        snapshots.push(snapshot);

        self.write_all(&snapshots)?;
        Ok(snapshots)
    }

    /// Snapshot a session's report under `date` and record it
    ///
    /// An empty session is refused so a blank day never overwrites a saved one.
    pub fn save_session(&self, date: &str, session: &Session) -> Result<DailySnapshot> {
        if session.is_empty() {
            return Err(Error::State("No data to save".into()));
        }
        let snapshot = DailySnapshot::from_report(date, &session.report());
        self.record(snapshot.clone())?;
        Ok(snapshot)
    }

    fn write_all(&self, snapshots: &[DailySnapshot]) -> Result<()> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| Error::State(format!("history path {:?} has no parent", self.path)))?;
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;
        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, snapshots)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;
        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        tracing::info!("Saved {} daily snapshots to {:?}", snapshots.len(), self.path);
        Ok(())
    }
}

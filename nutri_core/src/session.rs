//! A day's food log and everything derived from it.
//!
//! The session owns the log and the calorie goal. Totals, score and advice
//! are never stored: they are recomputed from the log on every call.

use crate::{
    advice, engine, entry, AdviceCard, Catalog, Classification, Error, GoalStatus, LogEntry,
    Result, ScoreBand, Totals, Unit,
};
use serde::{Deserialize, Serialize};

/// Calorie goal used when none is configured
pub const DEFAULT_GOAL: f64 = 2000.0;

/// The current day's log plus calorie goal
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    #[serde(default)]
    pub entries: Vec<LogEntry>,
    #[serde(default = "default_goal")]
    pub goal: f64,
}

fn default_goal() -> f64 {
    DEFAULT_GOAL
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_GOAL)
    }
}

/// A log entry paired with its classification
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ClassifiedEntry {
    pub entry: LogEntry,
    pub classification: Classification,
}

/// Everything the host needs to render the current day
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SessionReport {
    pub goal: f64,
    pub totals: Totals,
    pub score: u8,
    pub band: ScoreBand,
    pub goal_status: GoalStatus,
    pub advice: Vec<AdviceCard>,
    pub entries: Vec<ClassifiedEntry>,
}

impl Session {
    pub fn new(goal: f64) -> Self {
        Self {
            entries: Vec::new(),
            goal,
        }
    }

    /// Look up a food, scale it and append it to the log
    pub fn add(
        &mut self,
        catalog: &Catalog,
        query: &str,
        quantity: f64,
        unit: Unit,
    ) -> Result<&LogEntry> {
        let food = catalog
            .find(query)
            .ok_or_else(|| Error::FoodNotFound(query.trim().to_string()))?;
        let log_entry = entry::build_entry(food, quantity, unit)?;
        Ok(self.push(log_entry))
    }

    /// Append an already-built entry
    pub fn push(&mut self, entry: LogEntry) -> &LogEntry {
        tracing::info!("Logged {} ({} kcal)", entry.name, entry.calories);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Remove the entry at a zero-based index
    pub fn remove_at(&mut self, index: usize) -> Result<LogEntry> {
        if index >= self.entries.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        tracing::info!("Removed {} from log", removed.name);
        Ok(removed)
    }

    /// Clear the log, keeping the goal
    pub fn reset(&mut self) {
        tracing::info!("Reset log ({} entries cleared)", self.entries.len());
        self.entries.clear();
    }

    pub fn set_goal(&mut self, goal: f64) {
        self.goal = goal;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn totals(&self) -> Totals {
        engine::aggregate(&self.entries)
    }

    pub fn score(&self) -> u8 {
        engine::score(&self.totals(), &self.entries, self.goal)
    }

    pub fn advice(&self) -> Vec<AdviceCard> {
        advice::advise(&self.totals(), &self.entries, self.goal)
    }

    pub fn classified_entries(&self) -> Vec<ClassifiedEntry> {
        self.entries
            .iter()
            .map(|e| ClassifiedEntry {
                entry: e.clone(),
                classification: engine::classify(e),
            })
            .collect()
    }

    /// Derive every view from one consistent snapshot of the log
    pub fn report(&self) -> SessionReport {
        let totals = self.totals();
        let score = engine::score(&totals, &self.entries, self.goal);

        SessionReport {
            goal: self.goal,
            totals,
            score,
            band: ScoreBand::from_score(score),
            goal_status: GoalStatus::from_calories(totals.calories, self.goal),
            advice: advice::advise(&totals, &self.entries, self.goal),
            entries: self.classified_entries(),
        }
    }
}

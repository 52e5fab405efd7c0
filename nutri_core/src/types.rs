//! Core domain types for the nutrient tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Catalog entries (reference nutrient data per serving)
//! - Log entries (scaled, consumed instances)
//! - Totals, classifications and advice cards derived from the log

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Catalog Types
// ============================================================================

/// Reference nutrient data for one food, per defined serving size
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(rename = "serving_g")]
    pub serving_grams: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sugar: f64,
}

// ============================================================================
// Log Types
// ============================================================================

/// Unit the user logged a quantity in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Unit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "serving")]
    Serving,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Gram => write!(f, "g"),
            Unit::Serving => write!(f, "serving"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(Unit::Gram),
            "serving" | "servings" => Ok(Unit::Serving),
            other => Err(format!("unknown unit '{}' (expected g or serving)", other)),
        }
    }
}

/// A scaled, recorded instance of a catalog entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sugar: f64,
}

/// Sum of all log entries' nutrient fields
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sugar: f64,
}

impl Totals {
    /// Add one log entry's nutrients to the running totals
    pub fn add_entry(&mut self, entry: &LogEntry) {
        self.calories += entry.calories;
        self.protein += entry.protein;
        self.carbs += entry.carbs;
        self.fat += entry.fat;
        self.sugar += entry.sugar;
    }
}

// ============================================================================
// Derived Labels
// ============================================================================

/// Healthiness label derived from a log entry's name
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Healthy,
    Moderate,
    Junk,
}

impl Classification {
    /// Display label with its traffic-light marker
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Healthy => "🟢 Healthy",
            Classification::Moderate => "🟡 Moderate",
            Classification::Junk => "🔴 Junk",
        }
    }
}

/// Severity tag carried by an advice card
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Good,
    Normal,
    Low,
    Warn,
}

/// One short recommendation message
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdviceCard {
    pub text: String,
    pub severity: Severity,
}

impl AdviceCard {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

/// Colour band for a health score
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Green,
    Yellow,
    Red,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Green
        } else if score >= 50 {
            ScoreBand::Yellow
        } else {
            ScoreBand::Red
        }
    }
}

/// Progress of the day's calories against the goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalStatus {
    NoFood,
    Exceeded { by: f64 },
    Remaining { left: f64 },
}

impl GoalStatus {
    pub fn from_calories(calories: f64, goal: f64) -> Self {
        if calories == 0.0 {
            GoalStatus::NoFood
        } else if calories > goal {
            GoalStatus::Exceeded {
                by: calories - goal,
            }
        } else {
            GoalStatus::Remaining {
                left: goal - calories,
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            GoalStatus::NoFood => "Add foods to see progress.".to_string(),
            GoalStatus::Exceeded { by } => {
                format!("You exceeded your goal by {:.1} kcal.", by)
            }
            GoalStatus::Remaining { left } => format!("{:.1} kcal remaining.", left),
        }
    }
}

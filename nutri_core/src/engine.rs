//! Aggregation, classification and scoring over a food log.
//!
//! All functions here are pure: they read a log snapshot (and goal) and
//! derive values from it, so they can be recomputed freely after every
//! change to the log.

use crate::keywords::{self, CLASSIFIER_HEALTHY, CLASSIFIER_JUNK, SCORER_HEALTHY, SCORER_JUNK};
use crate::{Classification, LogEntry, Totals};

/// Label a log entry as Healthy, Moderate or Junk by its name
///
/// Junk keywords are checked before healthy ones, so a name matching both
/// (e.g. "fried paneer") is Junk.
pub fn classify(entry: &LogEntry) -> Classification {
    if keywords::matches_any(&entry.name, CLASSIFIER_JUNK) {
        Classification::Junk
    } else if keywords::matches_any(&entry.name, CLASSIFIER_HEALTHY) {
        Classification::Healthy
    } else {
        Classification::Moderate
    }
}

/// Sum every nutrient across the log
pub fn aggregate(log: &[LogEntry]) -> Totals {
    log.iter().fold(Totals::default(), |mut totals, entry| {
        totals.add_entry(entry);
        totals
    })
}

/// Individual adjustments that make up a health score
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub sugar_penalty: i32,
    pub junk_penalty: i32,
    pub protein_bonus: i32,
    pub calorie_adjustment: i32,
    pub healthy_bonus: i32,
}

impl ScoreBreakdown {
    /// Base score plus all adjustments, clamped to 0..=100
    pub fn score(&self) -> u8 {
        let raw = 100 - self.sugar_penalty - self.junk_penalty
            + self.protein_bonus
            + self.calorie_adjustment
            + self.healthy_bonus;
        raw.clamp(0, 100) as u8
    }
}

/// Compute each health score rule against totals, log and calorie goal
pub fn score_breakdown(totals: &Totals, log: &[LogEntry], goal: f64) -> ScoreBreakdown {
    let names = || log.iter().map(|e| e.name.as_str());

    // Sugar tiers stack: 85 g costs 15 + 25 + 35
    let mut sugar_penalty = 0;
    if totals.sugar > 40.0 {
        sugar_penalty += 15;
    }
    if totals.sugar > 60.0 {
        sugar_penalty += 25;
    }
    if totals.sugar > 80.0 {
        sugar_penalty += 35;
    }

    let junk_count = keywords::count_matching(names(), SCORER_JUNK) as i32;

    let mut protein_bonus = 0;
    if totals.protein > 40.0 {
        protein_bonus += 10;
    }
    if totals.protein > 60.0 {
        protein_bonus += 15;
    }

    let diff = (goal - totals.calories).abs();
    let calorie_adjustment = if diff < 200.0 {
        10
    } else if diff > 600.0 {
        -10
    } else {
        0
    };

    let healthy_count = keywords::count_matching(names(), SCORER_HEALTHY) as i32;

    ScoreBreakdown {
        sugar_penalty,
        junk_penalty: junk_count * 10,
        protein_bonus,
        calorie_adjustment,
        healthy_bonus: healthy_count * 2,
    }
}

/// Heuristic 0-100 health score for the day
pub fn score(totals: &Totals, log: &[LogEntry], goal: f64) -> u8 {
    let breakdown = score_breakdown(totals, log, goal);
    let score = breakdown.score();
    tracing::debug!("Health score {} from {:?}", score, breakdown);
    score
}

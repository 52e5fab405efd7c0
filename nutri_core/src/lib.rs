#![forbid(unsafe_code)]

//! Core domain model and business logic for the Nutri food tracker.
//!
//! This crate provides:
//! - Domain types (catalog entries, log entries, totals, advice)
//! - Catalog lookup and suggestions
//! - The nutrient engine (entry scaling, classification, aggregation,
//!   health score, advice)
//! - Session and daily history persistence

pub mod types;
pub mod error;
pub mod keywords;
pub mod catalog;
pub mod entry;
pub mod engine;
pub mod advice;
pub mod session;
pub mod state;
pub mod history;
pub mod csv_export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog, SUGGESTION_LIMIT};
pub use entry::build_entry;
pub use engine::{aggregate, classify, score, score_breakdown, ScoreBreakdown};
pub use advice::advise;
pub use session::{ClassifiedEntry, Session, SessionReport, DEFAULT_GOAL};
pub use history::{today_key, DailySnapshot, HistoryStore};
pub use csv_export::export_csv;
pub use config::Config;

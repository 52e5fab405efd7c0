//! Food catalog: reference nutrient data and lookup.
//!
//! This module provides the built-in foods, loading of external JSON
//! catalogs, and the query surface used when logging food.

use crate::{CatalogEntry, Error, Result};
use once_cell::sync::Lazy;
use std::path::Path;

/// Maximum number of suggestions offered for a partial query
pub const SUGGESTION_LIMIT: usize = 8;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// An ordered list of catalog entries. Order decides which entry wins a lookup.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with the built-in foods
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn food(
    name: &str,
    serving_grams: f64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    sugar: f64,
) -> CatalogEntry {
    CatalogEntry {
        name: name.into(),
        serving_grams,
        calories,
        protein,
        carbs,
        fat,
        sugar,
    }
}

fn build_default_catalog_internal() -> Catalog {
    let entries = vec![
        // Staples
        food("Roti", 40.0, 120.0, 3.1, 18.0, 3.7, 0.4),
        food("Rice (cooked)", 150.0, 195.0, 4.0, 42.0, 0.4, 0.1),
        food("Brown Rice (cooked)", 150.0, 165.0, 3.8, 34.0, 1.4, 0.5),
        food("Dal", 100.0, 120.0, 8.0, 20.0, 1.0, 1.0),
        food("Rajma", 150.0, 210.0, 11.0, 32.0, 4.0, 2.0),
        food("Chole", 150.0, 240.0, 12.0, 36.0, 6.0, 4.0),
        food("Paneer", 100.0, 265.0, 18.0, 1.2, 21.0, 1.2),
        food("Boiled Egg", 50.0, 78.0, 6.3, 0.6, 5.3, 0.6),
        food("Chicken Breast (grilled)", 100.0, 165.0, 31.0, 0.0, 3.6, 0.0),
        food("Fish Curry", 150.0, 210.0, 22.0, 6.0, 11.0, 2.0),
        // South Indian breakfast
        food("Idli", 40.0, 58.0, 2.0, 12.0, 0.2, 0.1),
        food("Masala Dosa", 120.0, 250.0, 5.0, 36.0, 9.0, 2.0),
        food("Upma", 150.0, 210.0, 5.0, 32.0, 7.0, 2.0),
        food("Poha", 150.0, 180.0, 3.5, 35.0, 3.0, 2.5),
        food("Sambar", 150.0, 130.0, 6.0, 18.0, 4.0, 4.0),
        food("Oats Porridge", 200.0, 190.0, 7.0, 32.0, 4.0, 10.0),
        food("Sprouts Salad", 100.0, 100.0, 7.0, 15.0, 1.0, 2.0),
        // Fruit and dairy
        food("Banana", 118.0, 105.0, 1.3, 27.0, 0.4, 14.0),
        food("Apple", 182.0, 95.0, 0.5, 25.0, 0.3, 19.0),
        food("Orange", 130.0, 62.0, 1.2, 15.0, 0.2, 12.0),
        food("Milk (toned)", 250.0, 150.0, 8.0, 12.0, 7.5, 12.0),
        food("Curd", 100.0, 60.0, 3.5, 4.7, 3.3, 4.7),
        food("Almonds", 28.0, 164.0, 6.0, 6.0, 14.0, 1.2),
        // Junk
        food("Pizza (slice)", 107.0, 285.0, 12.0, 36.0, 10.0, 3.8),
        food("Burger", 150.0, 354.0, 17.0, 29.0, 19.0, 6.0),
        food("French Fries", 117.0, 365.0, 4.0, 48.0, 17.0, 0.3),
        food("Potato Chips", 28.0, 152.0, 2.0, 15.0, 10.0, 0.1),
        food("Maggi Noodles", 70.0, 310.0, 7.0, 45.0, 12.0, 2.0),
        food("Samosa", 100.0, 262.0, 4.0, 24.0, 17.0, 1.5),
        food("Jalebi", 50.0, 150.0, 1.0, 30.0, 4.0, 22.0),
        food("Gulab Jamun", 50.0, 175.0, 2.0, 25.0, 7.0, 20.0),
        food("Ice Cream", 66.0, 137.0, 2.3, 16.0, 7.3, 14.0),
        food("Chocolate Milkshake", 300.0, 360.0, 9.0, 60.0, 9.0, 52.0),
        food("Cold Drink (cola)", 330.0, 139.0, 0.0, 35.0, 0.0, 35.0),
    ];

    Catalog { entries }
}

impl Catalog {
    /// Create a catalog from entries, keeping their order
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a JSON array file and validate it
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&contents)?;
        let catalog = Self::new(entries);

        let errors = catalog.validate();
        if !errors.is_empty() {
            return Err(Error::CatalogValidation(errors.join("; ")));
        }

        tracing::info!("Loaded {} foods from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first entry whose name contains the query (case-insensitive)
    ///
    /// Empty or whitespace-only queries match nothing. There is no ranking:
    /// the earliest matching entry in catalog order wins.
    pub fn find(&self, query: &str) -> Option<&CatalogEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        let found = self
            .entries
            .iter()
            .find(|e| e.name.to_lowercase().contains(&query));

        match found {
            Some(entry) => tracing::debug!("Catalog hit for '{}': {}", query, entry.name),
            None => tracing::debug!("Catalog miss for '{}'", query),
        }
        found
    }

    /// All entries containing the query, in catalog order, up to `limit`
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&CatalogEntry> {
        let query = query.to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&query))
            .take(limit)
            .collect()
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                errors.push(format!("Food #{} has empty name", idx + 1));
            }
            if !entry.serving_grams.is_finite() || entry.serving_grams <= 0.0 {
                errors.push(format!(
                    "Food '{}' has invalid serving size {}",
                    entry.name, entry.serving_grams
                ));
            }

            let nutrients = [
                ("calories", entry.calories),
                ("protein", entry.protein),
                ("carbs", entry.carbs),
                ("fat", entry.fat),
                ("sugar", entry.sugar),
            ];
            for (field, value) in nutrients {
                if !value.is_finite() || value < 0.0 {
                    errors.push(format!(
                        "Food '{}': {} must be a non-negative number, got {}",
                        entry.name, field, value
                    ));
                }
            }
        }

        if self.entries.is_empty() {
            errors.push("Catalog has no foods".to_string());
        }

        errors
    }
}

//! Builds scaled log entries from catalog entries.

use crate::{CatalogEntry, Error, LogEntry, Result, Unit};

/// Round half away from zero to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scale a catalog entry by quantity and unit into a log entry
///
/// Grams are converted to servings via the entry's serving size; servings
/// scale directly. Every nutrient is rounded to one decimal independently.
/// Non-positive quantities are not rejected and scale as given.
///
/// Fails with `InvalidCatalogEntry` when a gram quantity is given for an
/// entry whose serving size cannot divide it (zero, negative, non-finite),
/// and with `InvalidQuantity` when the quantity or any scaled nutrient is
/// NaN or infinite. Such values cannot be stored as JSON numbers.
pub fn build_entry(entry: &CatalogEntry, quantity: f64, unit: Unit) -> Result<LogEntry> {
    if !quantity.is_finite() {
        return Err(Error::InvalidQuantity(format!(
            "{} is not a finite number",
            quantity
        )));
    }

    let multiplier = match unit {
        Unit::Gram => {
            if !entry.serving_grams.is_finite() || entry.serving_grams <= 0.0 {
                return Err(Error::InvalidCatalogEntry(format!(
                    "'{}' has serving size {} g, cannot scale by grams",
                    entry.name, entry.serving_grams
                )));
            }
            quantity / entry.serving_grams
        }
        Unit::Serving => quantity,
    };

    let log_entry = LogEntry {
        name: entry.name.clone(),
        quantity,
        unit,
        calories: round1(entry.calories * multiplier),
        protein: round1(entry.protein * multiplier),
        carbs: round1(entry.carbs * multiplier),
        fat: round1(entry.fat * multiplier),
        sugar: round1(entry.sugar * multiplier),
    };

    let fields = [
        log_entry.calories,
        log_entry.protein,
        log_entry.carbs,
        log_entry.fat,
        log_entry.sugar,
    ];
    if fields.iter().any(|v| !v.is_finite()) {
        return Err(Error::InvalidQuantity(format!(
            "{} {} of '{}' overflows the nutrient values",
            quantity, unit, entry.name
        )));
    }

    tracing::debug!(
        "Built entry {} x{} {} ({} kcal)",
        log_entry.name,
        quantity,
        unit,
        log_entry.calories
    );

    Ok(log_entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dal() -> CatalogEntry {
        CatalogEntry {
            name: "Dal".into(),
            serving_grams: 100.0,
            calories: 120.0,
            protein: 8.0,
            carbs: 20.0,
            fat: 1.0,
            sugar: 1.0,
        }
    }

    #[test]
    fn test_gram_scaling() {
        let entry = build_entry(&dal(), 200.0, Unit::Gram).unwrap();
        assert_eq!(entry.calories, 240.0);
        assert_eq!(entry.protein, 16.0);
        assert_eq!(entry.carbs, 40.0);
        assert_eq!(entry.fat, 2.0);
        assert_eq!(entry.sugar, 2.0);
        assert_eq!(entry.quantity, 200.0);
        assert_eq!(entry.unit, Unit::Gram);
    }

    #[test]
    fn test_serving_scaling() {
        let entry = build_entry(&dal(), 1.5, Unit::Serving).unwrap();
        assert_eq!(entry.calories, 180.0);
        assert_eq!(entry.protein, 12.0);
    }

    #[test]
    fn test_each_field_rounded_to_one_decimal() {
        let mut food = dal();
        food.calories = 105.0;
        food.protein = 1.3;
        // 1/3 serving
        let entry = build_entry(&food, 1.0 / 3.0, Unit::Serving).unwrap();
        assert_eq!(entry.calories, 35.0);
        assert_eq!(entry.protein, 0.4);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(2.04), 2.0);
    }

    #[test]
    fn test_non_positive_quantity_propagates() {
        let zero = build_entry(&dal(), 0.0, Unit::Serving).unwrap();
        assert_eq!(zero.calories, 0.0);

        let negative = build_entry(&dal(), -100.0, Unit::Gram).unwrap();
        assert_eq!(negative.calories, -120.0);
    }

    #[test]
    fn test_zero_serving_size_fails_for_grams() {
        let mut food = dal();
        food.serving_grams = 0.0;

        let result = build_entry(&food, 50.0, Unit::Gram);
        assert!(matches!(result, Err(Error::InvalidCatalogEntry(_))));

        // Servings never divide by the serving size
        assert!(build_entry(&food, 1.0, Unit::Serving).is_ok());
    }

    #[test]
    fn test_non_finite_quantity_rejected() {
        for qty in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            for unit in [Unit::Gram, Unit::Serving] {
                let result = build_entry(&dal(), qty, unit);
                assert!(matches!(result, Err(Error::InvalidQuantity(_))));
            }
        }
    }

    #[test]
    fn test_overflowing_quantity_rejected() {
        let result = build_entry(&dal(), f64::MAX, Unit::Serving);
        assert!(matches!(result, Err(Error::InvalidQuantity(_))));
    }
}

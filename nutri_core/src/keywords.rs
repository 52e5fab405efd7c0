//! Keyword sets used to recognise foods by name.
//!
//! The classifier, scorer and advisor each carry their own list. They overlap
//! but are not identical, and changing one must not silently change the
//! others.
// TODO: consolidate the junk/healthy taxonomies once the scorer and advisor
// are allowed to agree with the classifier's labels.

/// Junk keywords used for per-entry classification
pub const CLASSIFIER_JUNK: &[&str] = &[
    "pizza",
    "burger",
    "fries",
    "chips",
    "maggi",
    "samosa",
    "kachori",
    "pakoda",
    "ice cream",
    "milkshake",
    "cold drink",
    "jalebi",
    "gulab jamun",
    "kurkure",
    "fried",
    "energy drink",
    "chocolate",
];

/// Healthy keywords used for per-entry classification
pub const CLASSIFIER_HEALTHY: &[&str] = &[
    "banana",
    "apple",
    "orange",
    "grapes",
    "milk",
    "curd",
    "buttermilk",
    "dal",
    "rajma",
    "chole",
    "idli",
    "dosa",
    "upma",
    "poha",
    "paneer",
    "egg",
    "sprouts",
    "salad",
    "oats",
    "brown rice",
    "vegetable",
    "sambar",
    "uttapam",
    "fish",
    "chicken breast",
    "muesli",
    "almonds",
    "peanuts",
    "fruits",
];

/// Junk keywords counted by the health score
pub const SCORER_JUNK: &[&str] = &[
    "pizza",
    "burger",
    "fries",
    "chips",
    "maggi",
    "samosa",
    "kachori",
    "pakoda",
    "ice cream",
    "milkshake",
    "cold drink",
    "jalebi",
    "gulab jamun",
    "kurkure",
];

/// Healthy keywords rewarded by the health score
pub const SCORER_HEALTHY: &[&str] = &[
    "salad",
    "sprouts",
    "dal",
    "chole",
    "idli",
    "dosa",
    "upma",
    "poha",
    "oats",
    "paneer",
    "egg",
    "fruits",
    "vegetable",
];

/// Junk keywords counted by the advisor
pub const ADVISOR_JUNK: &[&str] = &[
    "pizza",
    "burger",
    "fries",
    "chips",
    "maggi",
    "samosa",
    "kachori",
    "pakoda",
    "ice cream",
    "milkshake",
    "cold drink",
    "jalebi",
    "gulab jamun",
    "kurkure",
];

/// True if the lowercased name contains any keyword in the set
pub fn matches_any(name: &str, keywords: &[&str]) -> bool {
    let name = name.to_lowercase();
    keywords.iter().any(|k| name.contains(k))
}

/// Number of entry names matching the keyword set
pub fn count_matching<'a, I>(names: I, keywords: &[&str]) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| matches_any(name, keywords))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        assert!(matches_any("Cheese PIZZA slice", SCORER_JUNK));
        assert!(matches_any("Masala Dosa", SCORER_HEALTHY));
        assert!(!matches_any("Roti", SCORER_HEALTHY));
    }

    #[test]
    fn test_scorer_and_classifier_sets_diverge() {
        // "fried" and "chocolate" are junk for the classifier only
        assert!(matches_any("Fried Rice", CLASSIFIER_JUNK));
        assert!(!matches_any("Fried Rice", SCORER_JUNK));
        assert!(matches_any("Dark Chocolate", CLASSIFIER_JUNK));
        assert!(!matches_any("Dark Chocolate", ADVISOR_JUNK));
    }

    #[test]
    fn test_count_matching() {
        let names = ["Pizza", "Burger", "Banana", "Chocolate"];
        assert_eq!(count_matching(names.iter().copied(), SCORER_JUNK), 2);
        assert_eq!(count_matching(names.iter().copied(), CLASSIFIER_JUNK), 3);
    }
}

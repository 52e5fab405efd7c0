//! Advice cards derived from the day's totals.
//!
//! Four independent rule groups run in a fixed order (protein, sugar, junk,
//! calorie goal). Each contributes exactly one card, except the junk group
//! which stays silent when no junk was logged.

use crate::keywords::{self, ADVISOR_JUNK};
use crate::{AdviceCard, LogEntry, Severity, Totals};

pub const EMPTY_LOG_ADVICE: &str = "Start adding foods to get smart suggestions.";

/// Produce the ordered advice cards for the current log
pub fn advise(totals: &Totals, log: &[LogEntry], goal: f64) -> Vec<AdviceCard> {
    if log.is_empty() {
        return vec![AdviceCard::new(EMPTY_LOG_ADVICE, Severity::Normal)];
    }

    let junk_count = keywords::count_matching(log.iter().map(|e| e.name.as_str()), ADVISOR_JUNK);

    let mut cards = vec![protein_card(totals.protein), sugar_card(totals.sugar)];
    if let Some(card) = junk_card(junk_count) {
        cards.push(card);
    }
    cards.push(calorie_card(goal - totals.calories));

    tracing::debug!("Produced {} advice cards", cards.len());
    cards
}

fn protein_card(protein: f64) -> AdviceCard {
    if protein < 20.0 {
        AdviceCard::new(
            "🥚 Your protein is low. Add eggs, paneer, dal, or sprouts.",
            Severity::Low,
        )
    } else if protein < 40.0 {
        AdviceCard::new(
            "🍗 Good start! A bit more protein will balance your meal.",
            Severity::Normal,
        )
    } else {
        AdviceCard::new("💪 Great protein intake today!", Severity::Good)
    }
}

fn sugar_card(sugar: f64) -> AdviceCard {
    if sugar > 70.0 {
        AdviceCard::new(
            "⚠️ High sugar! Avoid sweets, soft drinks & milkshakes.",
            Severity::Warn,
        )
    } else if sugar > 40.0 {
        AdviceCard::new(
            "🍬 Sugar is moderate. Limit sugary snacks & drinks.",
            Severity::Normal,
        )
    } else {
        AdviceCard::new("😊 Sugar intake is healthy today!", Severity::Good)
    }
}

fn junk_card(junk_count: usize) -> Option<AdviceCard> {
    match junk_count {
        0 => None,
        1 | 2 => Some(AdviceCard::new(
            "🍕 Try balancing your meal with fruits or salads.",
            Severity::Normal,
        )),
        n => Some(AdviceCard::new(
            format!(
                "🍟 You added {} junk foods. Try reducing fried/oily snacks.",
                n
            ),
            Severity::Warn,
        )),
    }
}

/// `diff` is goal minus calories eaten
fn calorie_card(diff: f64) -> AdviceCard {
    if diff > 500.0 {
        AdviceCard::new(
            "🍌 You are below your goal. Add fruits, nuts, rice, or milk.",
            Severity::Normal,
        )
    } else if diff > 200.0 {
        AdviceCard::new(
            "🥗 You're slightly under — add a light healthy snack.",
            Severity::Normal,
        )
    } else if diff < -300.0 {
        AdviceCard::new(
            "⚠️ You exceeded your goal. Choose lighter meals now.",
            Severity::Warn,
        )
    } else if diff < -100.0 {
        AdviceCard::new(
            "🍽️ You're above goal — consider reducing heavy foods.",
            Severity::Normal,
        )
    } else {
        AdviceCard::new("👌 You are close to your target. Great balance!", Severity::Good)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::aggregate;
    use crate::Unit;

    fn entry(name: &str, calories: f64, protein: f64, sugar: f64) -> LogEntry {
        LogEntry {
            name: name.into(),
            quantity: 1.0,
            unit: Unit::Serving,
            calories,
            protein,
            carbs: 0.0,
            fat: 0.0,
            sugar,
        }
    }

    fn severities(cards: &[AdviceCard]) -> Vec<Severity> {
        cards.iter().map(|c| c.severity).collect()
    }

    #[test]
    fn test_empty_log_single_card() {
        let cards = advise(&Totals::default(), &[], 2000.0);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].text, EMPTY_LOG_ADVICE);
    }

    #[test]
    fn test_no_junk_gives_three_cards() {
        let log = vec![entry("Dal", 1950.0, 45.0, 10.0)];
        let cards = advise(&aggregate(&log), &log, 2000.0);
        assert_eq!(
            severities(&cards),
            vec![Severity::Good, Severity::Good, Severity::Good]
        );
        assert!(cards[2].text.contains("close to your target"));
    }

    #[test]
    fn test_full_card_order() {
        let log = vec![
            entry("Pizza", 900.0, 5.0, 30.0),
            entry("Burger", 900.0, 5.0, 30.0),
            entry("Fries", 900.0, 5.0, 30.0),
        ];
        let cards = advise(&aggregate(&log), &log, 2000.0);
        assert_eq!(
            severities(&cards),
            vec![Severity::Low, Severity::Warn, Severity::Warn, Severity::Warn]
        );
        assert!(cards[2].text.contains("You added 3 junk foods"));
        assert!(cards[3].text.contains("exceeded your goal"));
    }

    #[test]
    fn test_one_or_two_junk_is_normal() {
        let log = vec![entry("Samosa", 100.0, 0.0, 0.0), entry("Idli", 100.0, 0.0, 0.0)];
        let cards = advise(&aggregate(&log), &log, 2000.0);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[2].severity, Severity::Normal);
        assert!(cards[2].text.contains("fruits or salads"));
    }

    #[test]
    fn test_advisor_ignores_classifier_only_junk() {
        let log = vec![entry("Chocolate Bar", 100.0, 0.0, 0.0)];
        let cards = advise(&aggregate(&log), &log, 2000.0);
        assert_eq!(cards.len(), 3);
    }

    #[test]
    fn test_protein_boundaries() {
        assert_eq!(protein_card(19.9).severity, Severity::Low);
        assert_eq!(protein_card(20.0).severity, Severity::Normal);
        assert_eq!(protein_card(40.0).severity, Severity::Good);
    }

    #[test]
    fn test_sugar_boundaries() {
        assert_eq!(sugar_card(40.0).severity, Severity::Good);
        assert_eq!(sugar_card(40.1).severity, Severity::Normal);
        assert_eq!(sugar_card(70.0).severity, Severity::Normal);
        assert_eq!(sugar_card(70.1).severity, Severity::Warn);
    }

    #[test]
    fn test_calorie_boundaries() {
        assert!(calorie_card(501.0).text.contains("below your goal"));
        assert!(calorie_card(500.0).text.contains("slightly under"));
        assert!(calorie_card(200.0).text.contains("close to your target"));
        assert!(calorie_card(-100.0).text.contains("close to your target"));
        assert!(calorie_card(-101.0).text.contains("above goal"));
        assert!(calorie_card(-300.0).text.contains("above goal"));
        assert_eq!(calorie_card(-301.0).severity, Severity::Warn);
    }

    #[test]
    fn test_advise_is_idempotent() {
        let log = vec![entry("Pizza", 300.0, 12.0, 4.0)];
        let totals = aggregate(&log);
        assert_eq!(advise(&totals, &log, 2000.0), advise(&totals, &log, 2000.0));
    }
}

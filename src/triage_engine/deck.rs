use std::collections::HashSet;

use rand::Rng;
use crate::triage_engine::{
    catalog::{cells, Catalog},
    models::{Card, PracticedCard},
};

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Deal a balanced practice deck of up to `count` cards.
///
/// Each of the six (condition, category) cells contributes `count / 6`
/// randomly chosen cards; the combined selection is shuffled again so the
/// cell order is not observable. A `count` that is not a multiple of six is
/// rounded down, and a cell holding fewer cards contributes all it has.
pub fn build_deck<R: Rng>(catalog: &Catalog, count: usize, rng: &mut R) -> Vec<Card> {
    let per_cell = count / 6;
    let mut deck = Vec::with_capacity(per_cell.saturating_mul(6).min(catalog.len()));

    for (condition, category) in cells() {
        let mut cell: Vec<&Card> = catalog.cell(condition, category);
        shuffle(&mut cell, rng);
        deck.extend(cell.into_iter().take(per_cell).cloned());
    }

    shuffle(&mut deck, rng);
    log::debug!("built deck of {} cards ({} per cell) from {} in catalog",
        deck.len(), per_cell, catalog.len());
    deck
}

/// Deal the player's incorrect cards again.
///
/// Entries are deduplicated by id with the latest attempt winning, so a card
/// answered incorrectly twice is dealt once. Prior answer fields are dropped.
pub fn build_retry_deck<R: Rng>(answered: &[PracticedCard], rng: &mut R) -> Vec<Card> {
    let mut seen = HashSet::new();
    let mut deck: Vec<Card> = answered
        .iter()
        .rev()
        .filter(|p| seen.insert(p.card.id.as_str()))
        .filter(|p| p.is_incorrect())
        .map(|p| p.card.clone())
        .collect();
    deck.reverse();

    shuffle(&mut deck, rng);
    log::debug!("built retry deck of {} cards", deck.len());
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage_engine::models::{Category, Condition, Language, PracticeStatus};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn practiced(id: &str, status: PracticeStatus) -> PracticedCard {
        PracticedCard {
            card: Card::new(id, id, Condition::Shock, Category::Causes),
            status,
            chosen_condition: Some(Condition::Fainting),
            chosen_category: Some(Category::Causes),
        }
    }

    #[test]
    fn deck_is_balanced_and_unique() {
        let catalog = Catalog::builtin(Language::Nl);
        let mut rng = StdRng::seed_from_u64(42);
        let deck = build_deck(&catalog, 24, &mut rng);
        assert_eq!(deck.len(), 24);

        let ids: HashSet<&str> = deck.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 24, "duplicate card in deck");

        for (cond, cat) in cells() {
            let n = deck.iter().filter(|c| c.condition == cond && c.category == cat).count();
            assert_eq!(n, 4, "{cond}/{cat} should contribute 4 cards");
        }
    }

    #[test]
    fn count_is_rounded_down_to_a_multiple_of_six() {
        let catalog = Catalog::builtin(Language::En);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(build_deck(&catalog, 25, &mut rng).len(), 24);
        assert_eq!(build_deck(&catalog, 5, &mut rng).len(), 0);
        assert_eq!(build_deck(&catalog, 100, &mut rng).len(), 48);
    }

    #[test]
    fn oversized_count_deals_the_whole_catalog() {
        let catalog = Catalog::builtin(Language::En);
        let mut rng = StdRng::seed_from_u64(8);
        let deck = build_deck(&catalog, usize::MAX, &mut rng);
        assert_eq!(deck.len(), 48);
        let ids: HashSet<&str> = deck.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 48);
    }

    #[test]
    fn deck_is_deterministic_with_seed() {
        let catalog = Catalog::builtin(Language::Nl);
        let make = |seed: u64| -> Vec<String> {
            let mut rng = StdRng::seed_from_u64(seed);
            build_deck(&catalog, 24, &mut rng).into_iter().map(|c| c.id).collect()
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn empty_catalog_yields_empty_deck() {
        let catalog = Catalog::from_cards(Language::Nl, Vec::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_deck(&catalog, 24, &mut rng).is_empty());
    }

    #[test]
    fn retry_deck_keeps_latest_attempt_per_id() {
        let answered = vec![
            practiced("A", PracticeStatus::Incorrect),
            practiced("B", PracticeStatus::Correct),
            practiced("A", PracticeStatus::Incorrect),
            practiced("C", PracticeStatus::Incorrect),
            practiced("C", PracticeStatus::Correct),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        let deck = build_retry_deck(&answered, &mut rng);
        let ids: Vec<&str> = deck.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["A"]);
    }

    #[test]
    fn retry_deck_is_empty_without_mistakes() {
        let answered = vec![practiced("B", PracticeStatus::Correct)];
        let mut rng = StdRng::seed_from_u64(3);
        assert!(build_retry_deck(&answered, &mut rng).is_empty());
    }
}

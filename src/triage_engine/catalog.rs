//! Built-in card tables and custom catalog loading.
//!
//! Both languages share the same 48 card ids, eight per
//! (condition, category) cell. Only the text differs.

use std::collections::HashSet;

use crate::triage_engine::{
    error::CatalogError,
    models::{Card, Category, Condition, Language},
};

use Category::{Causes, FirstAid, Symptoms};
use Condition::{Fainting, Shock};

type Row = (&'static str, Condition, Category, &'static str, &'static str);

// (id, condition, category, nl, en)
const CARDS: [Row; 48] = [
    ("shock-oorzaak-1", Shock, Causes, "Ernstig bloedverlies", "Severe blood loss"),
    ("shock-oorzaak-2", Shock, Causes, "Brandwonden over groot lichaamsoppervlak", "Burns over large body surface"),
    ("shock-oorzaak-3", Shock, Causes, "Ernstige verwondingen", "Serious injuries"),
    ("shock-oorzaak-4", Shock, Causes, "Allergische reactie", "Allergic reaction"),
    ("shock-oorzaak-5", Shock, Causes, "Hartaanval", "Heart attack"),
    ("shock-oorzaak-6", Shock, Causes, "Vergiftiging", "Poisoning"),
    ("shock-oorzaak-7", Shock, Causes, "Ernstige infectie", "Severe infection"),
    ("shock-oorzaak-8", Shock, Causes, "Grote vochtverlies door braken/diarree", "Major fluid loss from vomiting/diarrhea"),

    ("shock-verschijnsel-1", Shock, Symptoms, "Bleek en koud", "Pale and cold"),
    ("shock-verschijnsel-2", Shock, Symptoms, "Snelle, zwakke pols", "Fast, weak pulse"),
    ("shock-verschijnsel-3", Shock, Symptoms, "Oppervlakkige ademhaling", "Shallow breathing"),
    ("shock-verschijnsel-4", Shock, Symptoms, "Dorstig", "Thirsty"),
    ("shock-verschijnsel-5", Shock, Symptoms, "Onrustig en angstig", "Restless and anxious"),
    ("shock-verschijnsel-6", Shock, Symptoms, "Zweten", "Sweating"),
    ("shock-verschijnsel-7", Shock, Symptoms, "Misselijkheid", "Nausea"),
    ("shock-verschijnsel-8", Shock, Symptoms, "Verminderd bewustzijn", "Reduced consciousness"),

    ("shock-hulp-1", Shock, FirstAid, "112 bellen", "Call 112"),
    ("shock-hulp-2", Shock, FirstAid, "Slachtoffer laten liggen", "Keep victim lying down"),
    ("shock-hulp-3", Shock, FirstAid, "Benen omhoog (schokhouding)", "Elevate legs (shock position)"),
    ("shock-hulp-4", Shock, FirstAid, "Warm houden met deken", "Keep warm with blanket"),
    ("shock-hulp-5", Shock, FirstAid, "Bloeding stelpen", "Stop bleeding"),
    ("shock-hulp-6", Shock, FirstAid, "Geen eten of drinken geven", "Do not give food or drink"),
    ("shock-hulp-7", Shock, FirstAid, "Geruststellen", "Reassure"),
    ("shock-hulp-8", Shock, FirstAid, "Bewustzijn controleren", "Monitor consciousness"),

    ("flauwte-oorzaak-1", Fainting, Causes, "Emotionele schok", "Emotional shock"),
    ("flauwte-oorzaak-2", Fainting, Causes, "Slechte ventilatie", "Poor ventilation"),
    ("flauwte-oorzaak-3", Fainting, Causes, "Lang staan", "Standing for long time"),
    ("flauwte-oorzaak-4", Fainting, Causes, "Lage bloedsuiker", "Low blood sugar"),
    ("flauwte-oorzaak-5", Fainting, Causes, "Uitputting", "Exhaustion"),
    ("flauwte-oorzaak-6", Fainting, Causes, "Snel opstaan", "Standing up quickly"),
    ("flauwte-oorzaak-7", Fainting, Causes, "Hitte", "Heat"),
    ("flauwte-oorzaak-8", Fainting, Causes, "Angst of stress", "Fear or stress"),

    ("flauwte-verschijnsel-1", Fainting, Symptoms, "Duizelig", "Dizzy"),
    ("flauwte-verschijnsel-2", Fainting, Symptoms, "Misselijk", "Nauseous"),
    ("flauwte-verschijnsel-3", Fainting, Symptoms, "Zwak gevoel", "Weak feeling"),
    ("flauwte-verschijnsel-4", Fainting, Symptoms, "Zweterig", "Sweaty"),
    ("flauwte-verschijnsel-5", Fainting, Symptoms, "Kortdurend bewustzijnsverlies", "Brief loss of consciousness"),
    ("flauwte-verschijnsel-6", Fainting, Symptoms, "Normale pols na herstel", "Normal pulse after recovery"),
    ("flauwte-verschijnsel-7", Fainting, Symptoms, "Snel herstel bij liggen", "Quick recovery when lying down"),
    ("flauwte-verschijnsel-8", Fainting, Symptoms, "Wazig zien", "Blurred vision"),

    ("flauwte-hulp-1", Fainting, FirstAid, "Hoofd tussen knieën", "Head between knees"),
    ("flauwte-hulp-2", Fainting, FirstAid, "Voor frisse lucht zorgen", "Provide fresh air"),
    ("flauwte-hulp-3", Fainting, FirstAid, "Benen omhoog bij liggen", "Elevate legs when lying"),
    ("flauwte-hulp-4", Fainting, FirstAid, "Kleding losser maken", "Loosen clothing"),
    ("flauwte-hulp-5", Fainting, FirstAid, "Langzaam laten opstaan", "Let stand up slowly"),
    ("flauwte-hulp-6", Fainting, FirstAid, "Suiker geven (bij bewustzijn)", "Give sugar (if conscious)"),
    ("flauwte-hulp-7", Fainting, FirstAid, "Oorzaak wegnemen", "Remove cause"),
    ("flauwte-hulp-8", Fainting, FirstAid, "Bij geen herstel: 112 bellen", "If no recovery: call 112"),
];

/// A read-only set of cards for one display language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    language: Language,
    cards: Vec<Card>,
}

impl Catalog {
    /// The built-in card table for `language`.
    pub fn builtin(language: Language) -> Self {
        let cards = CARDS
            .iter()
            .map(|&(id, condition, category, nl, en)| {
                let text = match language {
                    Language::Nl => nl,
                    Language::En => en,
                };
                Card::new(id, text, condition, category)
            })
            .collect();
        Catalog { language, cards }
    }

    /// Wrap an already validated list of cards.
    pub fn from_cards(language: Language, cards: Vec<Card>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, card) in cards.iter().enumerate() {
            if card.id.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "id" });
            }
            if card.text.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "text" });
            }
            if !seen.insert(card.id.as_str()) {
                return Err(CatalogError::DuplicateId { id: card.id.clone() });
            }
        }
        Ok(Catalog { language, cards })
    }

    /// Parse a JSON array of cards, e.g.
    /// `[{"id":"x","text":"...","condition":"shock","category":"oorzaken"}]`.
    ///
    /// Unknown condition or category values are rejected by the decoder.
    pub fn from_json(language: Language, json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Catalog::from_cards(language, cards)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Cards of one (condition, category) cell, in catalog order.
    pub fn cell(&self, condition: Condition, category: Category) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|c| c.condition == condition && c.category == category)
            .collect()
    }
}

/// The six (condition, category) cells in their fixed order.
pub fn cells() -> impl Iterator<Item = (Condition, Category)> {
    Condition::ALL
        .into_iter()
        .flat_map(|cond| Category::ALL.into_iter().map(move |cat| (cond, cat)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_evenly_partitioned() {
        for lang in [Language::Nl, Language::En] {
            let catalog = Catalog::builtin(lang);
            assert_eq!(catalog.len(), 48);
            for (cond, cat) in cells() {
                assert_eq!(catalog.cell(cond, cat).len(), 8, "{cond}/{cat} in {lang}");
            }
        }
    }

    #[test]
    fn languages_share_ids_but_not_text() {
        let nl = Catalog::builtin(Language::Nl);
        let en = Catalog::builtin(Language::En);
        for (a, b) in nl.cards().iter().zip(en.cards()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.condition, b.condition);
            assert_eq!(a.category, b.category);
        }
        assert_eq!(nl.get("shock-hulp-1").unwrap().text, "112 bellen");
        assert_eq!(en.get("shock-hulp-1").unwrap().text, "Call 112");
    }

    #[test]
    fn json_catalog_rejects_duplicates_and_unknown_values() {
        let dup = r#"[
            {"id":"a","text":"One","condition":"shock","category":"oorzaken"},
            {"id":"a","text":"Two","condition":"flauwte","category":"eerste_hulp"}
        ]"#;
        assert!(matches!(
            Catalog::from_json(Language::En, dup),
            Err(CatalogError::DuplicateId { ref id }) if id == "a"
        ));

        let unknown = r#"[{"id":"a","text":"One","condition":"stroke","category":"oorzaken"}]"#;
        assert!(matches!(Catalog::from_json(Language::En, unknown), Err(CatalogError::Json(_))));

        let blank = r#"[{"id":"a","text":"  ","condition":"shock","category":"oorzaken"}]"#;
        assert!(matches!(
            Catalog::from_json(Language::En, blank),
            Err(CatalogError::EmptyField { index: 0, field: "text" })
        ));
    }

    #[test]
    fn json_catalog_loads() {
        let json = r#"[{"id":"a","text":"One","condition":"flauwte","category":"verschijnselen"}]"#;
        let catalog = Catalog::from_json(Language::Nl, json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.cell(Condition::Fainting, Category::Symptoms).len(), 1);
    }
}

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::triage_engine::error::ParseError;

// ---------------------------------------------------------------------------
// Classification enums
// ---------------------------------------------------------------------------

/// Top-level medical classification of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "shock")]
    Shock,
    #[serde(rename = "flauwte")]
    Fainting,
}

impl Condition {
    pub const ALL: [Condition; 2] = [Condition::Shock, Condition::Fainting];

    /// Wire name used by catalogs and input events.
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Shock    => "shock",
            Condition::Fainting => "flauwte",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Condition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shock"                => Ok(Condition::Shock),
            "flauwte" | "fainting" => Ok(Condition::Fainting),
            other => Err(ParseError::UnknownCondition(other.to_string())),
        }
    }
}

/// Sub-classification within a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "oorzaken")]
    Causes,
    #[serde(rename = "verschijnselen")]
    Symptoms,
    #[serde(rename = "eerste_hulp")]
    FirstAid,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Causes, Category::Symptoms, Category::FirstAid];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Causes   => "oorzaken",
            Category::Symptoms => "verschijnselen",
            Category::FirstAid => "eerste_hulp",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oorzaken" | "causes"         => Ok(Category::Causes),
            "verschijnselen" | "symptoms" => Ok(Category::Symptoms),
            "eerste_hulp" | "first_aid"   => Ok(Category::FirstAid),
            other => Err(ParseError::UnknownCategory(other.to_string())),
        }
    }
}

/// Display language of the catalog and UI strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Nl,
    En,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Nl => write!(f, "nl"),
            Language::En => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nl" => Ok(Language::Nl),
            "en" => Ok(Language::En),
            other => Err(ParseError::UnknownLanguage(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub text: String,
    pub condition: Condition,
    pub category: Category,
}

impl Card {
    pub fn new(
        id: impl Into<String>, text: impl Into<String>,
        condition: Condition, category: Category,
    ) -> Self {
        Card { id: id.into(), text: text.into(), condition, category }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeStatus {
    #[default]
    NotPracticed,
    Correct,
    Incorrect,
}

/// Session-scoped projection of a [`Card`]: its outcome and the player's
/// chosen answer for the latest attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticedCard {
    pub card: Card,
    pub status: PracticeStatus,
    pub chosen_condition: Option<Condition>,
    pub chosen_category: Option<Category>,
}

impl PracticedCard {
    /// Fresh, not-yet-practiced projection with no answer fields.
    pub fn fresh(card: Card) -> Self {
        PracticedCard {
            card,
            status: PracticeStatus::NotPracticed,
            chosen_condition: None,
            chosen_category: None,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.status == PracticeStatus::Correct
    }

    pub fn is_incorrect(&self) -> bool {
        self.status == PracticeStatus::Incorrect
    }
}

// ---------------------------------------------------------------------------
// Session read models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Welcome,
    ConditionChoice,
    CategoryChoice,
    Results,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Screen::Welcome         => "welcome",
            Screen::ConditionChoice => "condition",
            Screen::CategoryChoice  => "category",
            Screen::Results         => "results",
        };
        write!(f, "{}", s)
    }
}

/// Position within the current run. Recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub score: u32,
    pub correct_count: usize,
    pub incorrect_count: usize,
}

/// Message tier shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Perfect,
    High,
    Mid,
    KeepPracticing,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Number of cards dealt by a fresh game.
pub const DEFAULT_DECK_SIZE: usize = 24;

/// Settings for one [`Game`](crate::triage_engine::game::Game).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_deck_size")]
    pub deck_size: usize,
    /// Fixed seed for reproducible decks; `None` draws from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_deck_size() -> usize {
    DEFAULT_DECK_SIZE
}

impl GameConfig {
    /// Config with the default deck size and entropy seeding.
    pub fn new(language: Language) -> Self {
        GameConfig { language, deck_size: DEFAULT_DECK_SIZE, rng_seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_parse_and_english_aliases_are_accepted() {
        assert_eq!("flauwte".parse::<Condition>().unwrap(), Condition::Fainting);
        assert_eq!("fainting".parse::<Condition>().unwrap(), Condition::Fainting);
        assert_eq!("eerste_hulp".parse::<Category>().unwrap(), Category::FirstAid);
        assert_eq!("symptoms".parse::<Category>().unwrap(), Category::Symptoms);
        assert!("stroke".parse::<Condition>().is_err());
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn serde_uses_catalog_wire_names() {
        let json = serde_json::to_string(&Category::FirstAid).unwrap();
        assert_eq!(json, "\"eerste_hulp\"");
        let c: Condition = serde_json::from_str("\"flauwte\"").unwrap();
        assert_eq!(c, Condition::Fainting);
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let cfg: GameConfig = serde_json::from_str(r#"{"language":"en"}"#).unwrap();
        assert_eq!(cfg.language, Language::En);
        assert_eq!(cfg.deck_size, DEFAULT_DECK_SIZE);
        assert_eq!(cfg.rng_seed, None);
    }
}

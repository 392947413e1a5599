//! Static UI strings per language.

use crate::triage_engine::models::{
    Category, Condition, Language, PracticeStatus, Screen, ScoreTier,
};

#[derive(Debug)]
pub struct Translation {
    pub welcome_title: &'static str,
    pub welcome_subtitle: &'static str,
    pub play_with_3_people: &'static str,
    pub play_time: &'static str,
    pub game_rules: &'static str,
    pub game_rules_steps: [&'static str; 3],
    pub start_game: &'static str,

    pub back: &'static str,
    pub drag_to_correct_condition: &'static str,
    pub shock: &'static str,
    pub fainting: &'static str,

    pub causes: &'static str,
    pub symptoms: &'static str,
    pub first_aid: &'static str,

    pub excellent: &'static str,
    pub very_good: &'static str,
    pub good_job: &'static str,
    pub keep_practicing: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub not_practiced: &'static str,
    pub practice_incorrect: &'static str,
    pub start_new_game: &'static str,
    pub perfect_message: &'static str,
    pub your_answer: &'static str,

    pub of: &'static str,

    /// Welcome, condition, category, results.
    pub screen_titles: [&'static str; 4],
}

static NL: Translation = Translation {
    welcome_title: "BHV Triage Spel",
    welcome_subtitle: "Shock & Flauwte",
    play_with_3_people: "Speel met 3 personen",
    play_time: "Speeltijd: 5-10 minuten",
    game_rules: "Spelregels:",
    game_rules_steps: [
        "Sleep kaarten naar juiste plek",
        "Stap 1: Shock of Flauwte",
        "Stap 2: Oorzaak, verschijnsel of hulp",
    ],
    start_game: "Start het Spel",

    back: "Terug",
    drag_to_correct_condition: "Sleep de kaart naar de juiste conditie",
    shock: "SHOCK",
    fainting: "FLAUWTE",

    causes: "Oorzaken",
    symptoms: "Verschijnselen",
    first_aid: "Eerste Hulp",

    excellent: "Uitstekend! Perfect resultaat! 🎉",
    very_good: "Heel goed! Bijna alles correct! 👍",
    good_job: "Goed bezig! Nog even oefenen! 💪",
    keep_practicing: "Ga vooral door met oefenen! 📚",
    correct: "Correct",
    incorrect: "Fout",
    not_practiced: "Niet geoefend",
    practice_incorrect: "Oefen foute kaarten",
    start_new_game: "Nieuw Spel Starten",
    perfect_message: "Perfect! Je beheerst het onderscheid tussen shock en flauwte volledig!",
    your_answer: "Jouw antwoord",

    of: "van",

    screen_titles: [
        "BHV Triage Spel - Shock & Flauwte",
        "Conditie Selectie - BHV Triage",
        "Categorie Selectie - BHV Triage",
        "Resultaten - BHV Triage",
    ],
};

static EN: Translation = Translation {
    welcome_title: "First Aid Triage Game",
    welcome_subtitle: "Shock & Fainting",
    play_with_3_people: "Play with 3 people",
    play_time: "Play time: 5-10 minutes",
    game_rules: "Game rules:",
    game_rules_steps: [
        "Drag cards to correct place",
        "Step 1: Shock or Fainting",
        "Step 2: Cause, symptom or aid",
    ],
    start_game: "Start the Game",

    back: "Back",
    drag_to_correct_condition: "Drag the card to the correct condition",
    shock: "SHOCK",
    fainting: "FAINTING",

    causes: "Causes",
    symptoms: "Symptoms",
    first_aid: "First Aid",

    excellent: "Excellent! Perfect result! 🎉",
    very_good: "Very good! Almost everything correct! 👍",
    good_job: "Good job! Keep practicing! 💪",
    keep_practicing: "Keep practicing! 📚",
    correct: "Correct",
    incorrect: "Incorrect",
    not_practiced: "Not practiced",
    practice_incorrect: "Practice incorrect cards",
    start_new_game: "Start New Game",
    perfect_message: "Perfect! You have mastered the distinction between shock and fainting completely!",
    your_answer: "Your answer",

    of: "of",

    screen_titles: [
        "First Aid Triage Game - Shock & Fainting",
        "Condition Selection - First Aid Triage",
        "Category Selection - First Aid Triage",
        "Results - First Aid Triage",
    ],
};

pub fn translation(language: Language) -> &'static Translation {
    match language {
        Language::Nl => &NL,
        Language::En => &EN,
    }
}

impl Translation {
    pub fn condition_label(&self, condition: Condition) -> &'static str {
        match condition {
            Condition::Shock    => self.shock,
            Condition::Fainting => self.fainting,
        }
    }

    pub fn category_label(&self, category: Category) -> &'static str {
        match category {
            Category::Causes   => self.causes,
            Category::Symptoms => self.symptoms,
            Category::FirstAid => self.first_aid,
        }
    }

    pub fn tier_message(&self, tier: ScoreTier) -> &'static str {
        match tier {
            ScoreTier::Perfect        => self.excellent,
            ScoreTier::High           => self.very_good,
            ScoreTier::Mid            => self.good_job,
            ScoreTier::KeepPracticing => self.keep_practicing,
        }
    }

    pub fn status_label(&self, status: PracticeStatus) -> &'static str {
        match status {
            PracticeStatus::Correct      => self.correct,
            PracticeStatus::Incorrect    => self.incorrect,
            PracticeStatus::NotPracticed => self.not_practiced,
        }
    }

    pub fn screen_title(&self, screen: Screen) -> &'static str {
        let idx = match screen {
            Screen::Welcome         => 0,
            Screen::ConditionChoice => 1,
            Screen::CategoryChoice  => 2,
            Screen::Results         => 3,
        };
        self.screen_titles[idx]
    }

    /// "3 of 24" / "3 van 24".
    pub fn progress_label(&self, current: usize, total: usize) -> String {
        format!("{current} {} {total}", self.of)
    }
}

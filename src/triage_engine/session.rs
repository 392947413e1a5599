//! The game-progression state machine.
//!
//! A [`Session`] is a plain value. Every transition takes it by value and
//! returns the next state, so the host owns the only mutable reference and
//! re-renders whenever it swaps in the returned session.
//!
//! ```text
//! Welcome --start--> ConditionChoice --choose_condition--> CategoryChoice
//!    ^                  ^      |                              |      |
//!    |                  |      +--back--> Welcome     back ---+      |
//!    |                  +------------ choose_category (queue left) --+
//!    |                                                               |
//!    +--restart-- Results <-------- choose_category (queue empty) ---+
//!                    |
//!                    +--retry_incorrect--> ConditionChoice
//! ```
//!
//! Events that do not apply to the current screen leave the session
//! unchanged.

use std::collections::VecDeque;

use rand::Rng;
use crate::triage_engine::{
    catalog::Catalog,
    deck::{build_deck, build_retry_deck},
    models::{
        Card, Category, Condition, PracticeStatus, PracticedCard, Progress, Screen,
        ScoreSummary, ScoreTier,
    },
    scoring::score_percent,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    catalog: Catalog,
    screen: Screen,
    current: Option<Card>,
    queue: VecDeque<Card>,
    tentative_condition: Option<Condition>,
    answered: Vec<PracticedCard>,
}

/// Start a fresh run over `catalog` with a balanced deck of `deck_size` cards.
pub fn start_game<R: Rng>(catalog: Catalog, deck_size: usize, rng: &mut R) -> Session {
    Session::new(catalog).start(deck_size, rng)
}

/// A fresh session on the welcome screen.
pub fn restart(catalog: Catalog) -> Session {
    Session::new(catalog)
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Session {
            catalog,
            screen: Screen::Welcome,
            current: None,
            queue: VecDeque::new(),
            tentative_condition: None,
            answered: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// `Welcome -> ConditionChoice` with a freshly built deck.
    pub fn start<R: Rng>(self, deck_size: usize, rng: &mut R) -> Self {
        if self.screen != Screen::Welcome {
            log::debug!("ignoring start on {} screen", self.screen);
            return self;
        }
        let deck = build_deck(&self.catalog, deck_size, rng);
        self.deal(deck)
    }

    /// `Welcome -> ConditionChoice` with a caller-supplied deck, in order.
    pub fn start_with_deck(self, deck: Vec<Card>) -> Self {
        if self.screen != Screen::Welcome {
            log::debug!("ignoring start on {} screen", self.screen);
            return self;
        }
        self.deal(deck)
    }

    /// Record the first half of the answer.
    pub fn choose_condition(mut self, condition: Condition) -> Self {
        if self.screen != Screen::ConditionChoice || self.current.is_none() {
            log::debug!("ignoring condition choice on {} screen", self.screen);
            return self;
        }
        self.tentative_condition = Some(condition);
        self.screen = Screen::CategoryChoice;
        self
    }

    /// Complete the answer for the current card and advance.
    ///
    /// The answer counts only when both the condition and the category
    /// match. The category labels are the same under both conditions, so a
    /// right category under the wrong condition is still wrong.
    pub fn choose_category(mut self, category: Category) -> Self {
        if self.screen != Screen::CategoryChoice {
            log::debug!("ignoring category choice on {} screen", self.screen);
            return self;
        }
        let Some(condition) = self.tentative_condition else {
            log::debug!("ignoring category choice without a chosen condition");
            return self;
        };
        let Some(card) = self.current.take() else {
            log::debug!("ignoring category choice without a current card");
            return self;
        };

        let correct = card.condition == condition && card.category == category;
        let status = if correct { PracticeStatus::Correct } else { PracticeStatus::Incorrect };
        log::debug!("{} answered {:?} ({}/{})", card.id, status, condition, category);

        self.record(PracticedCard {
            card,
            status,
            chosen_condition: Some(condition),
            chosen_category: Some(category),
        });
        self.tentative_condition = None;

        match self.queue.pop_front() {
            Some(next) => {
                self.current = Some(next);
                self.screen = Screen::ConditionChoice;
            }
            None => {
                self.screen = Screen::Results;
                let summary = self.score_summary();
                log::info!("run finished: {}% ({} correct, {} incorrect)",
                    summary.score, summary.correct_count, summary.incorrect_count);
            }
        }
        self
    }

    /// `CategoryChoice -> ConditionChoice` drops the tentative condition;
    /// `ConditionChoice -> Welcome` abandons the run.
    pub fn go_back(mut self) -> Self {
        match self.screen {
            Screen::CategoryChoice => {
                self.tentative_condition = None;
                self.screen = Screen::ConditionChoice;
                self
            }
            Screen::ConditionChoice => Session::new(self.catalog),
            Screen::Welcome | Screen::Results => {
                log::debug!("ignoring back on {} screen", self.screen);
                self
            }
        }
    }

    /// Back to the welcome screen with nothing practiced.
    pub fn restart(self) -> Self {
        Session::new(self.catalog)
    }

    /// `Results -> ConditionChoice` over the cards answered incorrectly.
    pub fn retry_incorrect<R: Rng>(self, rng: &mut R) -> Self {
        if self.screen != Screen::Results || !self.can_retry() {
            log::debug!("ignoring retry on {} screen", self.screen);
            return self;
        }
        let deck = build_retry_deck(&self.answered, rng);
        self.deal(deck)
    }

    fn deal(mut self, deck: Vec<Card>) -> Self {
        let mut queue = VecDeque::from(deck);
        let Some(first) = queue.pop_front() else {
            log::debug!("no cards to deal, staying on {} screen", self.screen);
            return self;
        };
        log::info!("starting run with {} cards", queue.len() + 1);
        self.current = Some(first);
        self.queue = queue;
        self.tentative_condition = None;
        self.answered.clear();
        self.screen = Screen::ConditionChoice;
        self
    }

    /// Replace the earlier entry for the same card, or append.
    fn record(&mut self, entry: PracticedCard) {
        match self.answered.iter().position(|p| p.card.id == entry.card.id) {
            Some(idx) => self.answered[idx] = entry,
            None => self.answered.push(entry),
        }
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn tentative_condition(&self) -> Option<Condition> {
        self.tentative_condition
    }

    /// Every card answered this run, one entry per id.
    pub fn answered(&self) -> &[PracticedCard] {
        &self.answered
    }

    pub fn correct_count(&self) -> usize {
        self.answered.iter().filter(|p| p.is_correct()).count()
    }

    pub fn incorrect_count(&self) -> usize {
        self.answered.iter().filter(|p| p.is_incorrect()).count()
    }

    pub fn can_retry(&self) -> bool {
        self.incorrect_count() > 0
    }

    pub fn progress(&self) -> Progress {
        let in_hand = usize::from(self.current.is_some());
        let total = self.queue.len() + self.answered.len() + in_hand;
        let current = total.saturating_sub(self.queue.len() + in_hand);
        Progress { current, total }
    }

    pub fn score_summary(&self) -> ScoreSummary {
        let correct_count = self.correct_count();
        let incorrect_count = self.incorrect_count();
        ScoreSummary {
            score: score_percent(correct_count, correct_count + incorrect_count),
            correct_count,
            incorrect_count,
        }
    }

    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score_summary().score)
    }

    /// The whole catalog with this run's outcomes laid over it; cards not
    /// answered this run are `NotPracticed`.
    pub fn card_statuses(&self) -> Vec<PracticedCard> {
        self.catalog
            .cards()
            .iter()
            .map(|card| {
                self.answered
                    .iter()
                    .find(|p| p.card.id == card.id)
                    .cloned()
                    .unwrap_or_else(|| PracticedCard::fresh(card.clone()))
            })
            .collect()
    }
}

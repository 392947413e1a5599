//! # triage_drill
//!
//! Game core for a first-aid triage matching game: the player sorts
//! statement cards first by condition (shock or fainting) and then by
//! category (cause, symptom, or first-aid action).
//!
//! ## How it works
//!
//! 1. Build a [`GameConfig`] with a language, optional RNG seed, and deck
//!    size (24 by default).
//! 2. Create a [`Game`] and feed it [`GameEvent`]s. `Start` deals a balanced
//!    deck (an equal share from each of the six condition/category cells),
//!    `ChooseCondition` and `ChooseCategory` answer the current card.
//! 3. When the deck runs out the session moves to the results screen, with a
//!    score, a message tier, and the option to practise only the cards that
//!    were answered incorrectly.
//!
//! The state machine itself is the plain value [`Session`]; every transition
//! consumes it and returns the next one, so hosts that want full control
//! can skip [`Game`] and drive a `Session` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use triage_drill::{Game, GameConfig, GameEvent, Language, Screen};
//!
//! let mut game = Game::new(GameConfig::new(Language::En).with_seed(42));
//! game.dispatch(GameEvent::Start);
//!
//! while game.session().screen() != Screen::Results {
//!     let card = game.session().current_card().cloned().unwrap();
//!     game.dispatch(GameEvent::ChooseCondition(card.condition));
//!     game.dispatch(GameEvent::ChooseCategory(card.category));
//! }
//!
//! let summary = game.session().score_summary();
//! assert_eq!(summary.score, 100);
//! ```

pub mod triage_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `triage_drill::Game`
// directly without reaching into `triage_engine::`.
pub use triage_engine::{
    build_deck, build_retry_deck, restart, start_game, translation, Card, Catalog,
    CatalogError, Category, Condition, EventError, Game, GameConfig, GameEvent, Language,
    ParseError, PracticeStatus, PracticedCard, Progress, Screen, ScoreSummary, ScoreTier,
    Session, Translation, DEFAULT_DECK_SIZE,
};
pub use view_adapter::to_view_state;

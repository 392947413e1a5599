//! Core game engine: catalog, deck building, and the session state machine.
//!
//! ## Module overview
//!
//! | Module         | Purpose |
//! |----------------|---------|
//! | `models`       | Shared types: conditions, categories, cards, screens, config |
//! | `catalog`      | Built-in Dutch/English card tables and JSON catalog loading |
//! | `deck`         | Fisher-Yates shuffle, balanced deck and retry deck building |
//! | `session`      | The screen-by-screen state machine for one play-through |
//! | `scoring`      | Score percentage, message tiers, per-cell results |
//! | `translations` | Static UI strings per language |
//! | `events`       | Discrete input events and their JSON decoding |
//! | `game`         | `Game` driver owning the RNG, config and current session |
//! | `error`        | Errors for input decoding and catalog loading |

pub mod catalog;
pub mod deck;
pub mod error;
pub mod events;
pub mod game;
pub mod models;
pub mod scoring;
pub mod session;
pub mod translations;

// Re-export the public API surface so callers can use
// `triage_engine::Game` without reaching into sub-modules.
pub use catalog::Catalog;
pub use deck::{build_deck, build_retry_deck};
pub use error::{CatalogError, EventError, ParseError};
pub use events::GameEvent;
pub use game::Game;
pub use models::{
    Card, Category, Condition, GameConfig, Language, PracticeStatus, PracticedCard,
    Progress, Screen, ScoreSummary, ScoreTier, DEFAULT_DECK_SIZE,
};
pub use session::{restart, start_game, Session};
pub use translations::{translation, Translation};

//! Discrete input events accepted by the game.
//!
//! The presentation layer resolves drags, taps and key presses into one of
//! these before anything reaches the state machine. Decoding from JSON
//! rejects unknown values at this boundary.

use serde::{Deserialize, Serialize};

use crate::triage_engine::{
    error::EventError,
    models::{Category, Condition, Language},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum GameEvent {
    Start,
    ChooseCondition(Condition),
    ChooseCategory(Category),
    Back,
    Restart,
    RetryIncorrect,
    SetLanguage(Language),
}

impl GameEvent {
    /// Decode `{"type": "choose_condition", "value": "shock"}` and friends.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build an event from a bare action name and optional argument, as a
    /// form post or query string would deliver them.
    pub fn from_parts(kind: &str, value: Option<&str>) -> Result<Self, EventError> {
        let event = match (kind, value) {
            ("choose_condition", Some(v)) => GameEvent::ChooseCondition(v.parse()?),
            ("choose_category", Some(v))  => GameEvent::ChooseCategory(v.parse()?),
            ("set_language", Some(v))     => GameEvent::SetLanguage(v.parse()?),
            _ => {
                let json = serde_json::json!({ "type": kind });
                serde_json::from_value(json)?
            }
        };
        Ok(event)
    }
}

use rand::{rngs::StdRng, SeedableRng};

use crate::triage_engine::{
    catalog::Catalog,
    events::GameEvent,
    models::{GameConfig, Language},
    session::Session,
};

/// Owns the RNG, the active catalog and the current [`Session`], and feeds
/// events through the state machine one at a time.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    rng: StdRng,
    session: Session,
}

impl Game {
    /// New game on the welcome screen over the built-in catalog for
    /// `config.language`.
    pub fn new(config: GameConfig) -> Self {
        let catalog = Catalog::builtin(config.language);
        Game::with_catalog(config, catalog)
    }

    /// New game over a custom catalog. The catalog's language wins over the
    /// configured one.
    pub fn with_catalog(mut config: GameConfig, catalog: Catalog) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        config.language = catalog.language();
        Game { config, rng, session: Session::new(catalog) }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply one event and return the resulting session.
    pub fn dispatch(&mut self, event: GameEvent) -> &Session {
        let session = std::mem::take(&mut self.session);
        self.session = match event {
            GameEvent::Start                => session.start(self.config.deck_size, &mut self.rng),
            GameEvent::ChooseCondition(c)   => session.choose_condition(c),
            GameEvent::ChooseCategory(c)    => session.choose_category(c),
            GameEvent::Back                 => session.go_back(),
            GameEvent::Restart              => session.restart(),
            GameEvent::RetryIncorrect       => session.retry_incorrect(&mut self.rng),
            GameEvent::SetLanguage(lang)    => {
                self.config.language = lang;
                Session::new(Catalog::builtin(lang))
            }
        };
        &self.session
    }

    /// Switch the display language. Any run in progress is discarded, the
    /// same as a restart.
    pub fn set_language(&mut self, language: Language) -> &Session {
        self.dispatch(GameEvent::SetLanguage(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage_engine::models::{Screen, DEFAULT_DECK_SIZE};

    #[test]
    fn same_seed_deals_the_same_deck() {
        let first_card = |seed: u64| {
            let mut game = Game::new(GameConfig::new(Language::Nl).with_seed(seed));
            game.dispatch(GameEvent::Start).current_card().cloned()
        };
        assert_eq!(first_card(42), first_card(42));
    }

    #[test]
    fn start_uses_configured_deck_size() {
        let mut game = Game::new(GameConfig::new(Language::En).with_seed(1).with_deck_size(12));
        let progress = game.dispatch(GameEvent::Start).progress();
        assert_eq!(progress.total, 12);

        let mut game = Game::new(GameConfig::new(Language::En).with_seed(1));
        assert_eq!(game.dispatch(GameEvent::Start).progress().total, DEFAULT_DECK_SIZE);
    }

    #[test]
    fn language_change_restarts() {
        let mut game = Game::new(GameConfig::new(Language::Nl).with_seed(3));
        game.dispatch(GameEvent::Start);
        assert_eq!(game.session().screen(), Screen::ConditionChoice);

        let session = game.set_language(Language::En);
        assert_eq!(session.screen(), Screen::Welcome);
        assert_eq!(session.catalog().language(), Language::En);
        assert!(session.answered().is_empty());
        assert_eq!(game.language(), Language::En);
    }
}

//! Plays one seeded game end to end.
//!
//! Run with: `RUST_LOG=debug cargo run --example play`
//!
//! The "player" knows the answer to every card except the causes, which it
//! always files under the other condition. After the first run the demo
//! retries the incorrect cards and answers them properly.

use triage_drill::{
    to_view_state, Condition, Category, Game, GameConfig, GameEvent, Language, Screen,
};

fn play_run(game: &mut Game) {
    while game.session().screen() != Screen::Results {
        let progress = game.session().progress();
        let card = game.session().current_card().cloned().expect("a current card");

        let condition = match (card.category, card.condition) {
            (Category::Causes, Condition::Shock)    => Condition::Fainting,
            (Category::Causes, Condition::Fainting) => Condition::Shock,
            (_, c) => c,
        };
        game.dispatch(GameEvent::ChooseCondition(condition));
        game.dispatch(GameEvent::ChooseCategory(card.category));

        let verdict = game.session().answered().last().map(|p| p.status);
        println!("  [{:>2}/{}] {:<45} -> {} / {}  {:?}",
            progress.current + 1, progress.total, card.text, condition, card.category,
            verdict.unwrap_or_default());
    }
}

fn print_results(game: &Game) {
    let view = to_view_state(game.session());
    let results = &view["results"];
    println!();
    println!("  Score: {}%  {}", results["score"], results["message"].as_str().unwrap_or(""));
    println!("  Correct: {}  Incorrect: {}", results["correct"], results["incorrect"]);
    if let Some(cells) = results["breakdown"].as_array() {
        for cell in cells {
            println!("    {:<9} {:<15} {}/{}",
                cell["condition_label"].as_str().unwrap_or(""),
                cell["category_label"].as_str().unwrap_or(""),
                cell["correct"], cell["total"]);
        }
    }
    println!();
}

fn main() {
    env_logger::init();

    let mut game = Game::new(GameConfig::new(Language::En).with_seed(2024));

    println!();
    println!("══ First run ══");
    println!();
    game.dispatch(GameEvent::Start);
    play_run(&mut game);
    print_results(&game);

    println!("══ Retry incorrect cards ══");
    println!();
    game.dispatch(GameEvent::RetryIncorrect);
    while game.session().screen() != Screen::Results {
        let card = game.session().current_card().cloned().expect("a current card");
        game.dispatch(GameEvent::ChooseCondition(card.condition));
        game.dispatch(GameEvent::ChooseCategory(card.category));
        println!("  {:<45} -> {} / {}", card.text, card.condition, card.category);
    }
    print_results(&game);
}

use serde_json::{json, Value};
use crate::triage_engine::{
    models::{Card, PracticeStatus, PracticedCard, Screen},
    scoring::cell_breakdown,
    session::Session,
    translations::{translation, Translation},
};

/// Card as shown to the player: the answer is never included.
fn public_card(card: &Card) -> Value {
    json!({ "id": card.id, "text": card.text })
}

/// One line in the results breakdown. Incorrect cards also carry what the
/// player chose, e.g. "SHOCK / Oorzaken".
fn result_line(t: &Translation, p: &PracticedCard) -> Value {
    let your_answer = match (p.status, p.chosen_condition, p.chosen_category) {
        (PracticeStatus::Incorrect, Some(cond), Some(cat)) => Value::String(format!(
            "{}: {} / {}",
            t.your_answer,
            t.condition_label(cond),
            t.category_label(cat)
        )),
        _ => Value::Null,
    };
    json!({
        "id": p.card.id,
        "text": p.card.text,
        "status": p.status,
        "status_label": t.status_label(p.status),
        "your_answer": your_answer,
    })
}

fn results(t: &Translation, session: &Session) -> Value {
    let summary = session.score_summary();
    let tier = session.score_tier();

    let breakdown: Vec<Value> = cell_breakdown(session.answered())
        .into_iter()
        .map(|cell| {
            json!({
                "condition": cell.condition,
                "condition_label": t.condition_label(cell.condition),
                "category": cell.category,
                "category_label": t.category_label(cell.category),
                "correct": cell.correct,
                "total": cell.total,
                "cards": cell.cards.iter().map(|p| result_line(t, p)).collect::<Vec<_>>(),
            })
        })
        .collect();

    let retry_label = session
        .can_retry()
        .then(|| format!("{} ({})", t.practice_incorrect, summary.incorrect_count));

    json!({
        "score": summary.score,
        "tier": tier,
        "message": t.tier_message(tier),
        "perfect_message": (summary.score == 100).then_some(t.perfect_message),
        "correct": summary.correct_count,
        "incorrect": summary.incorrect_count,
        "can_retry": session.can_retry(),
        "retry_label": retry_label,
        "new_game_label": t.start_new_game,
        "breakdown": breakdown,
    })
}

/// Render a [`Session`] into the view model a UI collaborator draws from.
///
/// Labels come from the session's catalog language, so card text and UI
/// strings always agree. Fields that do not apply to the current screen are
/// `null`.
pub fn to_view_state(session: &Session) -> Value {
    let language = session.catalog().language();
    let t = translation(language);
    let screen = session.screen();
    let progress = session.progress();

    let card = session.current_card().map(public_card).unwrap_or(Value::Null);
    let selected_condition = session
        .tentative_condition()
        .map(|c| json!({ "value": c, "label": t.condition_label(c) }))
        .unwrap_or(Value::Null);

    let welcome = match screen {
        Screen::Welcome => json!({
            "title": t.welcome_title,
            "subtitle": t.welcome_subtitle,
            "players": t.play_with_3_people,
            "play_time": t.play_time,
            "rules_title": t.game_rules,
            "rules": t.game_rules_steps,
            "start_label": t.start_game,
        }),
        _ => Value::Null,
    };

    let results = match screen {
        Screen::Results => results(t, session),
        _ => Value::Null,
    };

    json!({
        "screen": screen,
        "title": t.screen_title(screen),
        "language": language,
        "back_label": t.back,
        "prompt": t.drag_to_correct_condition,
        "card": card,
        "selected_condition": selected_condition,
        "progress": {
            "current": progress.current,
            "total": progress.total,
            "label": t.progress_label(progress.current, progress.total),
        },
        "welcome": welcome,
        "results": results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage_engine::{
        catalog::Catalog,
        models::{Category, Condition, Language},
    };

    fn deck() -> Vec<Card> {
        vec![
            Card::new("shock-oorzaak-1", "Ernstig bloedverlies", Condition::Shock, Category::Causes),
            Card::new("flauwte-hulp-2", "Voor frisse lucht zorgen", Condition::Fainting, Category::FirstAid),
        ]
    }

    #[test]
    fn current_card_hides_its_answer() {
        let s = Session::new(Catalog::builtin(Language::Nl)).start_with_deck(deck());
        let v = to_view_state(&s);
        assert_eq!(v["screen"], "condition_choice");
        assert_eq!(v["card"]["id"], "shock-oorzaak-1");
        assert!(v["card"].get("condition").is_none());
        assert!(v["card"].get("category").is_none());
        assert_eq!(v["progress"]["label"], "0 van 2");
        assert!(v["results"].is_null());
    }

    #[test]
    fn results_show_score_breakdown_and_wrong_answers() {
        let s = Session::new(Catalog::builtin(Language::Nl))
            .start_with_deck(deck())
            .choose_condition(Condition::Fainting)
            .choose_category(Category::Causes)
            .choose_condition(Condition::Fainting)
            .choose_category(Category::FirstAid);
        let v = to_view_state(&s);

        assert_eq!(v["screen"], "results");
        assert_eq!(v["results"]["score"], 50);
        assert_eq!(v["results"]["tier"], "keep_practicing");
        assert_eq!(v["results"]["can_retry"], true);
        assert_eq!(v["results"]["retry_label"], "Oefen foute kaarten (1)");
        assert!(v["results"]["perfect_message"].is_null());

        let breakdown = v["results"]["breakdown"].as_array().unwrap();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0]["category_label"], "Oorzaken");
        assert_eq!(breakdown[0]["cards"][0]["status"], "incorrect");
        assert_eq!(
            breakdown[0]["cards"][0]["your_answer"],
            "Jouw antwoord: FLAUWTE / Oorzaken"
        );
        assert!(breakdown[1]["cards"][0]["your_answer"].is_null());
    }

    #[test]
    fn welcome_screen_carries_rules() {
        let v = to_view_state(&Session::new(Catalog::builtin(Language::En)));
        assert_eq!(v["screen"], "welcome");
        assert_eq!(v["welcome"]["start_label"], "Start the Game");
        assert_eq!(v["welcome"]["rules"].as_array().unwrap().len(), 3);
        assert_eq!(v["progress"]["total"], 0);
    }

    #[test]
    fn labels_follow_the_catalog_language() {
        let s = Session::new(Catalog::builtin(Language::Nl)).start_with_deck(deck());
        let v = to_view_state(&s);
        assert_eq!(v["language"], "nl");
        assert_eq!(v["card"]["text"], "Ernstig bloedverlies");
        assert_eq!(v["prompt"], "Sleep de kaart naar de juiste conditie");

        let s = Session::new(Catalog::builtin(Language::En))
            .start_with_deck(vec![Catalog::builtin(Language::En).cards()[0].clone()]);
        let v = to_view_state(&s);
        assert_eq!(v["language"], "en");
        assert_eq!(v["card"]["text"], "Severe blood loss");
        assert_eq!(v["prompt"], "Drag the card to the correct condition");
    }
}

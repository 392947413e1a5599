use serde::Serialize;

use crate::triage_engine::{
    catalog::cells,
    models::{Category, Condition, PracticedCard, ScoreTier},
};

/// Percentage of correct answers, rounded to the nearest integer.
/// Returns 0 when nothing was answered.
pub fn score_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * correct as f64 / total as f64).round() as u32
}

impl ScoreTier {
    /// 100 is perfect; 80 and 60 are inclusive lower bounds.
    pub fn from_score(score: u32) -> Self {
        if score >= 100 {
            ScoreTier::Perfect
        } else if score >= 80 {
            ScoreTier::High
        } else if score >= 60 {
            ScoreTier::Mid
        } else {
            ScoreTier::KeepPracticing
        }
    }
}

/// Results for one (condition, category) cell.
#[derive(Debug, Clone, Serialize)]
pub struct CellResult<'a> {
    pub condition: Condition,
    pub category: Category,
    pub correct: usize,
    pub total: usize,
    pub cards: Vec<&'a PracticedCard>,
}

/// Group answered cards by their true cell. Cells nobody practiced are left out.
pub fn cell_breakdown(answered: &[PracticedCard]) -> Vec<CellResult<'_>> {
    cells()
        .filter_map(|(condition, category)| {
            let cards: Vec<&PracticedCard> = answered
                .iter()
                .filter(|p| p.card.condition == condition && p.card.category == category)
                .collect();
            if cards.is_empty() {
                return None;
            }
            let correct = cards.iter().filter(|p| p.is_correct()).count();
            Some(CellResult { condition, category, correct, total: cards.len(), cards })
        })
        .collect()
}

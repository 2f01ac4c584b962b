use crate::types::scoring::{round_to, NormalizedBreakdown, Score};

pub const SCALING_FACTOR: Score = 0.98;
pub const MAX_FINAL_SCORE: Score = 100.0;

/// Maps a similarity in `[0, 1]` onto `[0, 50]`, harsh below 0.3 and with
/// diminishing returns above 0.6.
pub fn relevance_component(relevance: f64) -> Score {
    if relevance < 0.3 {
        relevance * 35.0
    } else if relevance < 0.6 {
        10.5 + (relevance - 0.3) * 45.0
    } else {
        24.0 + (relevance - 0.6) * 65.0
    }
}

/// Combines the heuristic total with an optional relevance into the final
/// 0-100 score. A relevance of exactly zero is treated like no job
/// description at all.
pub fn normalize_score(heuristic: Score, relevance: Option<f64>) -> (Score, NormalizedBreakdown) {
    let (total, breakdown) = match relevance.filter(|value| *value != 0.0) {
        None => {
            let doubled = heuristic * 2.0;
            (
                doubled * SCALING_FACTOR,
                NormalizedBreakdown {
                    heuristics: round_to(doubled, 2),
                    relevance: 0.0,
                    scaling_factor: SCALING_FACTOR,
                },
            )
        }
        Some(value) => {
            let component = relevance_component(value);
            (
                (heuristic + component) * SCALING_FACTOR,
                NormalizedBreakdown {
                    heuristics: round_to(heuristic, 2),
                    relevance: round_to(component, 2),
                    scaling_factor: SCALING_FACTOR,
                },
            )
        }
    };

    (round_to(total.clamp(0.0, MAX_FINAL_SCORE), 2), breakdown)
}

//! Text rage classifier
//!
//! Scores a collection of review-like text entries against the fixed keyword
//! lexicons, producing five normalized sub-scores in [0, 100].

use serde::Serialize;

use super::lexicon::rage_lexicons;
use super::lexicon::RageCategory;

/// One text entry as seen by the classifier
#[derive(Debug, Clone)]
pub struct ReviewEntry {
    pub is_positive: bool,
    pub text: Option<String>,
}

/// Normalized classifier output, each score in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReviewScores {
    pub review_rage: f64,
    pub difficulty_rage: f64,
    pub technical_rage: f64,
    pub social_toxicity_rage: f64,
    pub ui_design_rage: f64,
}

impl ReviewScores {
    const ZERO: Self = Self {
        review_rage: 0.0,
        difficulty_rage: 0.0,
        technical_rage: 0.0,
        social_toxicity_rage: 0.0,
        ui_design_rage: 0.0,
    };
}

/// Theoretical rage-point ceiling per entry. A design constant, not a
/// measured maximum: keyword-dense entries saturate at the 100 clamp.
pub const MAX_POINTS_PER_REVIEW: f64 = 5.0;

/// Count case-insensitive substring occurrences of any lexicon phrase.
/// Overlapping phrases from the same lexicon all count.
fn count_phrase_hits(text_lower: &str, phrases: &[&str]) -> usize {
    phrases
        .iter()
        .map(|phrase| text_lower.matches(phrase).count())
        .sum()
}

/// Score a collection of entries. Empty input yields all-zero scores.
pub fn score_reviews(reviews: &[ReviewEntry]) -> ReviewScores {
    if reviews.is_empty() {
        return ReviewScores::ZERO;
    }

    let mut rage_points_total = 0.0;
    let mut category_points = [0.0f64; 4];

    for review in reviews {
        let text_lower = review.text.as_deref().unwrap_or("").to_lowercase();

        let mut entry_points = if review.is_positive { 0.0 } else { 1.0 };

        for (i, lexicon) in rage_lexicons().iter().enumerate() {
            let hits = count_phrase_hits(&text_lower, lexicon.phrases) as f64;
            let points = lexicon.weight * hits;
            category_points[i] += points;
            entry_points += points;
        }

        rage_points_total += entry_points;
    }

    let factor = 100.0 / (MAX_POINTS_PER_REVIEW * reviews.len() as f64);

    let category = |c: RageCategory| {
        let i = rage_lexicons()
            .iter()
            .position(|l| l.category == c)
            .unwrap_or(0);
        (category_points[i] * factor).min(100.0)
    };

    ReviewScores {
        review_rage: (rage_points_total * factor).min(100.0),
        difficulty_rage: category(RageCategory::Difficulty),
        technical_rage: category(RageCategory::Technical),
        social_toxicity_rage: category(RageCategory::Toxicity),
        ui_design_rage: category(RageCategory::UiDesign),
    }
}

//! Score combiner
//!
//! Pure total function merging classifier and dropoff outputs into the
//! persisted per-game rage breakdown.

use serde::Serialize;

use super::dropoff::AchievementDrop;
use super::dropoff::AchievementScores;
use super::classifier::ReviewScores;

/// Composite rage breakdown for one game, every score in [0, 100]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RageBreakdown {
    pub rage_score: f64,
    pub difficulty_rage: f64,
    pub technical_rage: f64,
    pub social_toxicity_rage: f64,
    pub ui_design_rage: f64,
    pub drop: Option<AchievementDrop>,
}

/// Share of text-derived difficulty in the blended difficulty score
const DIFFICULTY_TEXT_WEIGHT: f64 = 0.7;
/// Share of achievement-drop rage in the blended difficulty score
const DIFFICULTY_ACHIEVEMENT_WEIGHT: f64 = 0.3;

// Composite weights, summing to 1.0. Review sentiment dominates, UI least.
const COMPOSITE_REVIEW_WEIGHT: f64 = 0.4;
const COMPOSITE_DIFFICULTY_WEIGHT: f64 = 0.3;
const COMPOSITE_TECHNICAL_WEIGHT: f64 = 0.15;
const COMPOSITE_TOXICITY_WEIGHT: f64 = 0.1;
const COMPOSITE_UI_WEIGHT: f64 = 0.05;

/// Blend classifier and dropoff outputs into one breakdown.
pub fn combine_rage_scores(
    review_scores: &ReviewScores,
    achievement_scores: &AchievementScores,
) -> RageBreakdown {
    let difficulty = (DIFFICULTY_TEXT_WEIGHT * review_scores.difficulty_rage
        + DIFFICULTY_ACHIEVEMENT_WEIGHT * achievement_scores.achievement_rage)
        .min(100.0);

    let technical = review_scores.technical_rage;
    let toxicity = review_scores.social_toxicity_rage;
    let ui_design = review_scores.ui_design_rage;

    let rage_score = COMPOSITE_REVIEW_WEIGHT * review_scores.review_rage
        + COMPOSITE_DIFFICULTY_WEIGHT * difficulty
        + COMPOSITE_TECHNICAL_WEIGHT * technical
        + COMPOSITE_TOXICITY_WEIGHT * toxicity
        + COMPOSITE_UI_WEIGHT * ui_design;

    RageBreakdown {
        rage_score: rage_score.min(100.0),
        difficulty_rage: difficulty,
        technical_rage: technical,
        social_toxicity_rage: toxicity,
        ui_design_rage: ui_design,
        drop: achievement_scores.drop.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_scores(difficulty: f64) -> ReviewScores {
        ReviewScores {
            review_rage: 0.0,
            difficulty_rage: difficulty,
            technical_rage: 0.0,
            social_toxicity_rage: 0.0,
            ui_design_rage: 0.0,
        }
    }

    fn achievement_scores(rage: f64) -> AchievementScores {
        AchievementScores {
            achievement_rage: rage,
            drop: None,
        }
    }

    #[test]
    fn test_difficulty_blend() {
        // 0.7 * 44 + 0.3 * 60 = 48.8
        let combined = combine_rage_scores(&review_scores(44.0), &achievement_scores(60.0));
        assert!((combined.difficulty_rage - 48.8).abs() < 1e-9);
    }

    #[test]
    fn test_absent_achievement_rage_contributes_zero() {
        let combined = combine_rage_scores(&review_scores(50.0), &achievement_scores(0.0));
        assert!((combined.difficulty_rage - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_pass_through_categories() {
        let review = ReviewScores {
            review_rage: 10.0,
            difficulty_rage: 0.0,
            technical_rage: 33.0,
            social_toxicity_rage: 44.0,
            ui_design_rage: 55.0,
        };
        let combined = combine_rage_scores(&review, &achievement_scores(0.0));
        assert_eq!(combined.technical_rage, 33.0);
        assert_eq!(combined.social_toxicity_rage, 44.0);
        assert_eq!(combined.ui_design_rage, 55.0);
    }

    #[test]
    fn test_composite_weighting() {
        let review = ReviewScores {
            review_rage: 100.0,
            difficulty_rage: 100.0,
            technical_rage: 100.0,
            social_toxicity_rage: 100.0,
            ui_design_rage: 100.0,
        };
        let combined = combine_rage_scores(&review, &achievement_scores(100.0));
        // All inputs maxed: weights sum to 1.0, so composite is exactly 100
        assert_eq!(combined.rage_score, 100.0);
    }

    #[test]
    fn test_combiner_is_idempotent() {
        let review = ReviewScores {
            review_rage: 37.5,
            difficulty_rage: 12.25,
            technical_rage: 88.0,
            social_toxicity_rage: 3.0,
            ui_design_rage: 61.125,
        };
        let ach = achievement_scores(42.0);
        let first = combine_rage_scores(&review, &ach);
        let second = combine_rage_scores(&review, &ach);
        assert_eq!(first, second);
    }

    #[test]
    fn test_drop_details_pass_through() {
        let ach = AchievementScores {
            achievement_rage: 60.0,
            drop: Some(super::super::dropoff::AchievementDrop {
                magnitude: 42.0,
                from_percent: 60.0,
                to_percent: 18.0,
                achievement_name: "The Wall".to_string(),
            }),
        };
        let combined = combine_rage_scores(&review_scores(0.0), &ach);
        assert_eq!(combined.drop.unwrap().achievement_name, "The Wall");
    }
}

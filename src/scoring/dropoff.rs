//! Achievement dropoff detector
//!
//! Finds the steepest single-step decline in global unlock percentages
//! between consecutive achievements ranked by rarity. The drop is used as
//! a proxy for a difficulty "wall".

use serde::Serialize;

/// One achievement as seen by the detector
#[derive(Debug, Clone)]
pub struct AchievementEntry {
    pub api_name: String,
    pub display_name: Option<String>,
    pub percent: f64,
}

/// The steepest detected drop, absent when no strictly-positive drop exists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementDrop {
    pub magnitude: f64,
    pub from_percent: f64,
    pub to_percent: f64,
    /// Display name of the achievement on the rare side of the wall,
    /// falling back to its API identifier
    pub achievement_name: String,
}

/// Detector output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementScores {
    pub achievement_rage: f64,
    pub drop: Option<AchievementDrop>,
}

/// Drop magnitude treated as maximal rage; larger drops saturate at 100.
pub const MAX_EXPECTED_DROP: f64 = 70.0;

/// Scan achievements for the steepest unlock-percentage drop.
///
/// Entries are sorted descending by unlock percent and adjacent pairs are
/// compared from the most-unlocked end. On equal magnitudes the first drop
/// encountered wins, i.e. the one nearer the easy end of the curve.
pub fn score_achievements(achievements: &[AchievementEntry]) -> AchievementScores {
    if achievements.is_empty() {
        return AchievementScores {
            achievement_rage: 0.0,
            drop: None,
        };
    }

    let mut sorted: Vec<&AchievementEntry> = achievements.iter().collect();
    sorted.sort_by(|a, b| {
        b.percent
            .partial_cmp(&a.percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut best: Option<AchievementDrop> = None;

    for pair in sorted.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        let magnitude = prev.percent - cur.percent;
        if magnitude <= 0.0 {
            continue;
        }
        let is_new_max = best
            .as_ref()
            .map_or(true, |b| magnitude > b.magnitude);
        if is_new_max {
            best = Some(AchievementDrop {
                magnitude,
                from_percent: prev.percent,
                to_percent: cur.percent,
                achievement_name: cur
                    .display_name
                    .clone()
                    .unwrap_or_else(|| cur.api_name.clone()),
            });
        }
    }

    let achievement_rage = best
        .as_ref()
        .map_or(0.0, |b| (b.magnitude * (100.0 / MAX_EXPECTED_DROP)).min(100.0));

    AchievementScores {
        achievement_rage,
        drop: best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ach(api_name: &str, display_name: Option<&str>, percent: f64) -> AchievementEntry {
        AchievementEntry {
            api_name: api_name.to_string(),
            display_name: display_name.map(str::to_string),
            percent,
        }
    }

    #[test]
    fn test_empty_input() {
        let scores = score_achievements(&[]);
        assert_eq!(scores.achievement_rage, 0.0);
        assert!(scores.drop.is_none());
    }

    #[test]
    fn test_single_achievement_has_no_drop() {
        let scores = score_achievements(&[ach("ACH_1", None, 50.0)]);
        assert_eq!(scores.achievement_rage, 0.0);
        assert!(scores.drop.is_none());
    }

    #[test]
    fn test_steepest_drop_detected() {
        // 85 -> 60 -> 18: drops are 25 and 42; max is 42
        // achievement_rage = 42 * 100/70 = 60.0
        let scores = score_achievements(&[
            ach("ACH_START", Some("First Steps"), 85.0),
            ach("ACH_MID", Some("Halfway"), 60.0),
            ach("ACH_WALL", Some("The Wall"), 18.0),
        ]);
        assert!((scores.achievement_rage - 60.0).abs() < 1e-9);
        let drop = scores.drop.unwrap();
        assert_eq!(drop.magnitude, 42.0);
        assert_eq!(drop.from_percent, 60.0);
        assert_eq!(drop.to_percent, 18.0);
        assert_eq!(drop.achievement_name, "The Wall");
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let scores = score_achievements(&[
            ach("ACH_WALL", None, 18.0),
            ach("ACH_START", None, 85.0),
            ach("ACH_MID", None, 60.0),
        ]);
        assert_eq!(scores.drop.unwrap().magnitude, 42.0);
    }

    #[test]
    fn test_tie_prefers_drop_nearer_easy_end() {
        // Two equal 30-point drops: 90->60 and 60->30; the first wins
        let scores = score_achievements(&[
            ach("A", None, 90.0),
            ach("B", None, 60.0),
            ach("C", None, 30.0),
        ]);
        let drop = scores.drop.unwrap();
        assert_eq!(drop.from_percent, 90.0);
        assert_eq!(drop.to_percent, 60.0);
        assert_eq!(drop.achievement_name, "B");
    }

    #[test]
    fn test_equal_percentages_yield_no_drop() {
        let scores = score_achievements(&[ach("A", None, 40.0), ach("B", None, 40.0)]);
        assert_eq!(scores.achievement_rage, 0.0);
        assert!(scores.drop.is_none());
    }

    #[test]
    fn test_drop_beyond_seventy_saturates() {
        let scores = score_achievements(&[ach("A", None, 99.0), ach("B", None, 1.0)]);
        assert_eq!(scores.achievement_rage, 100.0);
        assert_eq!(scores.drop.unwrap().magnitude, 98.0);
    }

    #[test]
    fn test_display_name_falls_back_to_api_name() {
        let scores = score_achievements(&[
            ach("ACH_EASY", None, 80.0),
            ach("ACH_HARD", None, 20.0),
        ]);
        assert_eq!(scores.drop.unwrap().achievement_name, "ACH_HARD");
    }
}

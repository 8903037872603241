//! Fixed keyword lexicons used by the text rage classifier.
//!
//! The phrase lists and weights are hard-coded policy. They are kept behind
//! a single data structure so the classifier logic stays independent of the
//! specific word lists.

use serde::Serialize;

/// Frustration category a lexicon scores against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RageCategory {
    Difficulty,
    Technical,
    Toxicity,
    UiDesign,
}

/// One keyword lexicon: a category, its phrases, and its per-hit weight
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub category: RageCategory,
    pub weight: f64,
    pub phrases: &'static [&'static str],
}

const DIFFICULTY_PHRASES: &[&str] = &[
    "unfair",
    "bullshit",
    "cheap",
    "broken boss",
    "rng",
    "impossible",
    "controller through the wall",
    "rage quit",
    "rage-quit",
    "uninstall",
];

const TECHNICAL_PHRASES: &[&str] = &[
    "lag",
    "stutter",
    "crash",
    "crashes",
    "freezes",
    "desync",
    "buggy",
    "bug",
    "stuttering",
    "memory leak",
    "dc",
    "disconnect",
];

const TOXICITY_PHRASES: &[&str] = &[
    "toxic",
    "grief",
    "troll",
    "smurf",
    "flaming",
    "slur",
    "rage in chat",
    "afk",
    "feeder",
    "cheater",
    "cheat",
    "hacker",
    "hackers",
];

const UI_DESIGN_PHRASES: &[&str] = &[
    "clunky",
    "bad ui",
    "terrible ui",
    "awful controls",
    "unintuitive",
    "confusing",
    "jank",
    "janky",
    "trash design",
    "pay to win",
    "p2w",
];

const RAGE_LEXICONS: [Lexicon; 4] = [
    Lexicon {
        category: RageCategory::Difficulty,
        weight: 0.6,
        phrases: DIFFICULTY_PHRASES,
    },
    Lexicon {
        category: RageCategory::Technical,
        weight: 0.5,
        phrases: TECHNICAL_PHRASES,
    },
    Lexicon {
        category: RageCategory::Toxicity,
        weight: 0.5,
        phrases: TOXICITY_PHRASES,
    },
    Lexicon {
        category: RageCategory::UiDesign,
        weight: 0.4,
        phrases: UI_DESIGN_PHRASES,
    },
];

/// The four fixed lexicons, in classifier scan order
pub fn rage_lexicons() -> &'static [Lexicon; 4] {
    &RAGE_LEXICONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_weights() {
        let by_category = |c: RageCategory| {
            rage_lexicons()
                .iter()
                .find(|l| l.category == c)
                .unwrap()
                .weight
        };
        assert_eq!(by_category(RageCategory::Difficulty), 0.6);
        assert_eq!(by_category(RageCategory::Technical), 0.5);
        assert_eq!(by_category(RageCategory::Toxicity), 0.5);
        assert_eq!(by_category(RageCategory::UiDesign), 0.4);
    }

    #[test]
    fn test_phrases_are_lowercase() {
        // Matching lowercases the input once; phrases must already be folded
        for lexicon in rage_lexicons() {
            for phrase in lexicon.phrases {
                assert_eq!(*phrase, phrase.to_lowercase());
            }
        }
    }
}

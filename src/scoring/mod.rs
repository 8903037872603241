//! Rage scoring core
//!
//! Pure, synchronous computations over already-materialized collections.
//! Nothing in this module performs I/O or returns errors; every edge case
//! (empty input, absent fields, zero denominators) maps to a defined value.

mod classifier;
mod combine;
mod dropoff;
mod lexicon;
mod timeline;
mod wordcloud;

pub use classifier::score_reviews;
pub use classifier::ReviewEntry;
pub use classifier::ReviewScores;
pub use combine::combine_rage_scores;
pub use combine::RageBreakdown;
pub use dropoff::score_achievements;
pub use dropoff::AchievementDrop;
pub use dropoff::AchievementEntry;
pub use dropoff::AchievementScores;
pub use lexicon::rage_lexicons;
pub use lexicon::Lexicon;
pub use lexicon::RageCategory;
pub use timeline::build_rage_timeline;
pub use timeline::RageTimelinePoint;
pub use timeline::TimelineEntry;
pub use wordcloud::extract_rage_words;
pub use wordcloud::RageWord;

/// Run the full scoring pipeline (classifier -> dropoff -> combiner) for one game.
pub fn compute_breakdown(
    reviews: &[ReviewEntry],
    achievements: &[AchievementEntry],
) -> RageBreakdown {
    let review_scores = score_reviews(reviews);
    let achievement_scores = score_achievements(achievements);
    combine_rage_scores(&review_scores, &achievement_scores)
}

//! Rage word cloud extractor
//!
//! Tokenizes a text corpus, drops noise words, and ranks surviving tokens
//! by frequency on a 0-100 relevance scale. Results are request-scoped and
//! never persisted.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

/// One ranked word-cloud entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RageWord {
    pub word: String,
    pub score: f64,
}

/// Minimum token length kept by the tokenizer
const MIN_TOKEN_LEN: usize = 4;

lazy_static! {
    /// Hand-curated stop words: common English function words plus
    /// domain-generic gaming terms that carry no rage signal.
    static ref STOPWORDS: std::collections::HashSet<&'static str> = [
        "the", "and", "for", "you", "your", "with", "that", "this", "have",
        "but", "not", "are", "was", "were", "they", "them", "get", "got",
        "just", "like", "its", "from", "been", "will", "what", "when",
        "where", "who", "why", "how", "does", "did", "can", "cant", "could",
        "should", "would", "all", "any", "some", "into", "about", "more",
        "very", "really", "also", "than", "then", "there", "here", "out",
        "over", "under", "game", "games", "play", "played", "playing",
        "one", "two", "three", "still", "even", "because", "good", "great",
        "fun", "love", "enjoy", "enjoyed", "well", "time", "hours", "hour",
        "make", "made",
    ]
    .into_iter()
    .collect();
}

/// Extract up to `limit` ranked rage words from a corpus of text chunks.
///
/// Tokens are maximal runs of alphabetic characters, case-folded, at least
/// four characters long and not in the stop-word set. The top-ranked word
/// always scores exactly 100.0; ties keep first-seen corpus order.
pub fn extract_rage_words<'a, I>(texts: I, limit: usize) -> Vec<RageWord>
where
    I: IntoIterator<Item = &'a str>,
{
    // Count in first-seen order so ranking ties are deterministic
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for text in texts {
        for token in tokenize(text) {
            match counts.get_mut(&token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.clone(), 1);
                    order.push(token);
                }
            }
        }
    }

    if order.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            (word, count)
        })
        .collect();
    // Stable sort preserves first-seen order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);

    let max_count = match ranked.first() {
        Some((_, count)) => *count as f64,
        None => return Vec::new(),
    };

    ranked
        .into_iter()
        .map(|(word, count)| RageWord {
            word,
            score: (count as f64 / max_count) * 100.0,
        })
        .collect()
}

/// Split text into lowercase alphabetic tokens of at least `MIN_TOKEN_LEN`
/// characters, skipping stop words. Everything non-alphabetic separates.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .map(str::to_lowercase)
        .filter(|token| !STOPWORDS.contains(token.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus_returns_empty() {
        let words = extract_rage_words(std::iter::empty(), 10);
        assert!(words.is_empty());
    }

    #[test]
    fn test_all_stopwords_returns_empty() {
        let words = extract_rage_words(["the game was good"], 10);
        assert!(words.is_empty());
    }

    #[test]
    fn test_top_word_scores_exactly_100() {
        let words = extract_rage_words(
            ["lagging lagging lagging crashing crashing broken"],
            10,
        );
        assert_eq!(words[0].word, "lagging");
        assert_eq!(words[0].score, 100.0);
        assert!((words[1].score - (2.0 / 3.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_tokens_dropped() {
        // "dc" and "bad" are under the four-character floor
        let words = extract_rage_words(["dc bad lagging"], 10);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "lagging");
    }

    #[test]
    fn test_case_folding_merges_tokens() {
        let words = extract_rage_words(["Broken BROKEN broken"], 10);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "broken");
        assert_eq!(words[0].score, 100.0);
    }

    #[test]
    fn test_punctuation_separates_tokens() {
        let words = extract_rage_words(["broken!broken,broken"], 10);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "broken");
    }

    #[test]
    fn test_limit_respected() {
        let words = extract_rage_words(
            ["alpha alpha alpha beta beta gamma delta epsilon"],
            2,
        );
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "alpha");
        assert_eq!(words[1].word, "beta");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let words = extract_rage_words(["zulu apple zulu apple"], 10);
        assert_eq!(words[0].word, "zulu");
        assert_eq!(words[1].word, "apple");
        assert_eq!(words[0].score, 100.0);
        assert_eq!(words[1].score, 100.0);
    }
}

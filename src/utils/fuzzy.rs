//! Fuzzy matching utilities for names
//!
//! Scores names by edit distance over their normalized forms, and picks
//! or ranks the best candidates from a list.

use crate::core::text_normalizer::TextNormalizer;
use crate::utils::levenshtein::levenshtein_distance;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    pub value: String,
    pub score: f64,
}

/// Best single candidate and the score against all candidates at once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// First candidate with the highest score, `""` if none scored above zero
    pub best_single_match: String,
    pub single_similarity: f64,
    /// Every candidate joined with single spaces
    pub combined_match: String,
    pub combined_similarity: f64,
}

/// Similarity of two names in `[0, 1]` using the default normalizer.
///
/// Two names that both normalize to `""` are a perfect match.
pub fn fuzzy_match(name1: &str, name2: &str) -> f64 {
    fuzzy_match_with(&TextNormalizer::default(), name1, name2)
}

/// Similarity of two names in `[0, 1]` using `normalizer`
pub fn fuzzy_match_with(normalizer: &TextNormalizer, name1: &str, name2: &str) -> f64 {
    let normalized1 = normalizer.normalize(name1);
    let normalized2 = normalizer.normalize(name2);

    let max_length = normalized1
        .chars()
        .count()
        .max(normalized2.chars().count());
    if max_length == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(&normalized1, &normalized2);
    trace!(
        "'{}' vs '{}': distance {} over {}",
        normalized1,
        normalized2,
        distance,
        max_length
    );

    1.0 - distance as f64 / max_length as f64
}

/// Score `name` against every candidate and against all of them combined
pub fn fuzzy_match_multiple_and_combined<S: AsRef<str>>(
    name: &str,
    candidates: &[S],
) -> MatchResult {
    fuzzy_match_multiple_and_combined_with(&TextNormalizer::default(), name, candidates)
}

/// Like [`fuzzy_match_multiple_and_combined`], with an explicit normalizer
pub fn fuzzy_match_multiple_and_combined_with<S: AsRef<str>>(
    normalizer: &TextNormalizer,
    name: &str,
    candidates: &[S],
) -> MatchResult {
    let mut best_single_match = "";
    let mut single_similarity = 0.0;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = fuzzy_match_with(normalizer, name, candidate);
        // Strictly greater: the first candidate reaching the top score wins
        if score > single_similarity {
            single_similarity = score;
            best_single_match = candidate;
        }
    }

    let combined_match = candidates
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    let combined_similarity = fuzzy_match_with(normalizer, name, &combined_match);

    debug!(
        "Best single match for '{}': '{}' ({:.3}), combined {:.3} over {} candidates",
        name,
        best_single_match,
        single_similarity,
        combined_similarity,
        candidates.len()
    );

    MatchResult {
        best_single_match: best_single_match.to_string(),
        single_similarity,
        combined_match,
        combined_similarity,
    }
}

/// Find matches in a list of candidates
///
/// Returns up to `n` matches with scores of at least `cutoff`, best first.
/// Candidates with equal scores keep their list order.
pub fn find_matches<S: AsRef<str>>(
    search_term: &str,
    candidates: &[S],
    n: usize,
    cutoff: f64,
) -> Vec<FuzzyMatch> {
    find_matches_with(&TextNormalizer::default(), search_term, candidates, n, cutoff)
}

/// Like [`find_matches`], with an explicit normalizer
pub fn find_matches_with<S: AsRef<str>>(
    normalizer: &TextNormalizer,
    search_term: &str,
    candidates: &[S],
    n: usize,
    cutoff: f64,
) -> Vec<FuzzyMatch> {
    let mut matches: Vec<FuzzyMatch> = candidates
        .iter()
        .map(|candidate| FuzzyMatch {
            value: candidate.as_ref().to_string(),
            score: fuzzy_match_with(normalizer, search_term, candidate.as_ref()),
        })
        .filter(|m| m.score >= cutoff)
        .collect();

    // Stable sort keeps list order for ties
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(n);

    debug!(
        "🔍 {} of {} candidates matched '{}' (cutoff {:.2})",
        matches.len(),
        candidates.len(),
        search_term,
        cutoff
    );

    matches
}

/// Find the best match above a minimum score
///
/// Returns None if no match meets the cutoff
pub fn find_best_match<S: AsRef<str>>(
    search_term: &str,
    candidates: &[S],
    cutoff: f64,
) -> Option<FuzzyMatch> {
    find_matches(search_term, candidates, 1, cutoff)
        .into_iter()
        .next()
}

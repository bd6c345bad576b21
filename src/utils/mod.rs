//! Utility modules

pub mod fuzzy;
pub mod levenshtein;

pub use fuzzy::{
    find_best_match, find_matches, find_matches_with, fuzzy_match,
    fuzzy_match_multiple_and_combined, fuzzy_match_multiple_and_combined_with, fuzzy_match_with,
    FuzzyMatch, MatchResult,
};
pub use levenshtein::levenshtein_distance;

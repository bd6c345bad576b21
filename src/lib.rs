//! NameMatch Library
//!
//! Normalizes free-form names and scores their similarity by edit distance.
//!
//! ```
//! use namematch::{fuzzy_match, fuzzy_match_multiple_and_combined, normalize_string};
//!
//! assert_eq!(normalize_string("Smith, John"), "john smith");
//! assert_eq!(fuzzy_match("Jon Doe", "Doe, Jon"), 1.0);
//!
//! let result = fuzzy_match_multiple_and_combined("Acme", &["Acme Corp", "Acme", "Other"]);
//! assert_eq!(result.best_single_match, "Acme");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::{normalize_string, NormalizerOptions, TextNormalizer, WordClass};
pub use crate::error::{NameMatchError, NameMatchResult};
pub use crate::utils::{
    find_best_match, find_matches, fuzzy_match, fuzzy_match_multiple_and_combined,
    levenshtein_distance, FuzzyMatch, MatchResult,
};

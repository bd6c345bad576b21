//! Text Normalization
//!
//! Canonicalizes free-form names before they are compared, so that
//! "Smith, John", "john smith" and "JOHN-SMITH" all end up as the same string.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// Anything that is not a Unicode word character or whitespace
    static ref NON_WORD_UNICODE: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
    /// Anything that is not an ASCII word character or whitespace
    static ref NON_WORD_ASCII: Regex = Regex::new(r"[^0-9A-Za-z_\s]").expect("valid regex");
}

/// Which characters survive punctuation stripping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    /// Unicode letters, marks, digits and connector punctuation
    #[default]
    Unicode,
    /// `[0-9A-Za-z_]` only; every other non-space character becomes a space
    Ascii,
}

/// Normalizer settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizerOptions {
    #[serde(default)]
    pub word_class: WordClass,
}

/// Turns raw names into their canonical comparison form
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    options: NormalizerOptions,
}

impl TextNormalizer {
    /// Create a new text normalizer
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    /// Normalize a name.
    ///
    /// 1. NFKD decomposition
    /// 2. Drop combining diacritical marks (U+0300..=U+036F)
    /// 3. Lowercase
    /// 4. Hyphens and underscores become spaces
    /// 5. Remaining non-word, non-space characters become spaces
    /// 6. Collapse whitespace and trim
    /// 7. Sort the words
    ///
    /// Input that is all whitespace or punctuation normalizes to `""`.
    pub fn normalize(&self, text: &str) -> String {
        let stripped: String = text
            .nfkd()
            .filter(|c| !is_combining_diacritic(*c))
            .collect();

        let lowered = stripped.to_lowercase().replace(['-', '_'], " ");

        let non_word: &Regex = match self.options.word_class {
            WordClass::Unicode => &*NON_WORD_UNICODE,
            WordClass::Ascii => &*NON_WORD_ASCII,
        };
        let cleaned = non_word.replace_all(&lowered, " ");

        let mut words: Vec<&str> = cleaned.split_whitespace().collect();
        words.sort_unstable();
        words.join(" ")
    }
}

/// Normalize with the default (Unicode word class) normalizer
pub fn normalize_string(text: &str) -> String {
    TextNormalizer::default().normalize(text)
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

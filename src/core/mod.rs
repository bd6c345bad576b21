//! Core processing modules
//!
//! Contains the name normalization pipeline.

pub mod text_normalizer;

pub use text_normalizer::{normalize_string, NormalizerOptions, TextNormalizer, WordClass};

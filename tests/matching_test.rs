use namematch::{
    find_best_match, find_matches, fuzzy_match, fuzzy_match_multiple_and_combined,
    levenshtein_distance, normalize_string, TextNormalizer,
};

#[test]
fn test_normalize_equivalences() {
    assert_eq!(normalize_string(""), "");
    assert_eq!(
        normalize_string("John Smith"),
        normalize_string("Smith, John")
    );
    assert_eq!(normalize_string("café"), normalize_string("cafe"));
    assert_eq!(normalize_string("  a   b  "), normalize_string("b a"));
    assert_eq!(
        normalize_string("Jean-Luc_Picard"),
        normalize_string("picard luc jean")
    );
}

#[test]
fn test_default_normalizer_matches_shorthand() {
    let normalizer = TextNormalizer::default();
    for name in ["Zoë Saldaña", "O'Brien, Conan", "ACME_Widgets-Inc."] {
        assert_eq!(normalizer.normalize(name), normalize_string(name));
    }
}

#[test]
fn test_pipeline_scores() {
    assert_eq!(fuzzy_match("", ""), 1.0);
    assert_eq!(fuzzy_match("Jon Doe", "Doe, Jon"), 1.0);
    assert_eq!(fuzzy_match("Zoë Saldaña", "zoe saldana"), 1.0);

    // "smith" vs "smyth" after normalization: one substitution in 10 chars
    let score = fuzzy_match("John Smith", "John Smyth");
    assert_eq!(levenshtein_distance("john smith", "john smyth"), 1);
    assert!((score - 0.9).abs() < 1e-9);
}

#[test]
fn test_best_and_combined_empty_candidates() {
    let empty: Vec<String> = Vec::new();
    let result = fuzzy_match_multiple_and_combined("Acme Inc", &empty);
    assert_eq!(result.best_single_match, "");
    assert_eq!(result.single_similarity, 0.0);
    assert_eq!(result.combined_match, "");
    assert_eq!(result.combined_similarity, fuzzy_match("Acme Inc", ""));
}

#[test]
fn test_best_and_combined_exact_candidate() {
    let candidates = vec![
        "Acme Corp".to_string(),
        "Acme".to_string(),
        "Other".to_string(),
    ];
    let result = fuzzy_match_multiple_and_combined("Acme", &candidates);
    assert_eq!(result.best_single_match, "Acme");
    assert_eq!(result.single_similarity, 1.0);
    assert_eq!(result.combined_match, "Acme Corp Acme Other");
    assert_eq!(
        result.combined_similarity,
        fuzzy_match("Acme", "Acme Corp Acme Other")
    );
}

#[test]
fn test_best_and_combined_first_of_equals_wins() {
    // "bob" and "rob" are both one edit from "cob"
    let result = fuzzy_match_multiple_and_combined("cob", &["bob", "rob"]);
    assert_eq!(result.best_single_match, "bob");

    let result = fuzzy_match_multiple_and_combined("cob", &["rob", "bob"]);
    assert_eq!(result.best_single_match, "rob");
}

#[test]
fn test_best_and_combined_scores_in_range() {
    let candidates = ["Gabriel", "García", "Márquez", "", "!!!"];
    let result = fuzzy_match_multiple_and_combined("Gabriel García Márquez", &candidates);
    assert!((0.0..=1.0).contains(&result.single_similarity));
    assert!((0.0..=1.0).contains(&result.combined_similarity));
    assert_eq!(result.combined_match, "Gabriel García Márquez  !!!");
    assert_eq!(result.combined_similarity, 1.0);
}

#[test]
fn test_ranking_against_best_and_combined() {
    let candidates = ["Jane Smyth", "Smith, John", "J. Smith", "Someone Else"];

    let best = find_best_match("John Smith", &candidates, 0.0).expect("expected a match");
    let result = fuzzy_match_multiple_and_combined("John Smith", &candidates);
    assert_eq!(best.value, result.best_single_match);
    assert_eq!(best.score, result.single_similarity);

    let ranked = find_matches("John Smith", &candidates, 10, 0.5);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(ranked.iter().all(|m| m.score >= 0.5));
    assert!(ranked.iter().all(|m| m.value != "Someone Else"));
}

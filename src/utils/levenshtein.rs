//! Edit distance
//!
//! Classic unweighted Levenshtein distance over Unicode scalar values.

/// Minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`.
///
/// Characters are compared exactly; normalize upstream if case or accents
/// should not count.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rows walk `b`, columns walk `a`. Only the previous row is kept.
    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0; a.len() + 1];

    for (i, cb) in b.iter().enumerate() {
        curr[0] = i + 1;

        for (j, ca) in a.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

//! Cosine similarity over sparse vectors.

use super::tfidf::SparseVector;

/// Number of contributing terms reported per match.
pub const MAX_MATCHING_TERMS: usize = 5;

/// Euclidean norm over the vector's own full term set.
#[must_use]
pub fn magnitude(vector: &SparseVector) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine similarity clamped into `[0.0, 1.0]`.
///
/// Only terms present in both vectors contribute to the dot product. If
/// either vector has zero magnitude the result is 0.0.
#[must_use]
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = magnitude(a);
    let norm_b = magnitude(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = common_terms(a, b).map(|(_, wa, wb)| wa * wb).sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Terms present in both vectors, in term order, with both weights.
///
/// Walks the smaller map and probes the larger one.
fn common_terms<'a>(
    a: &'a SparseVector,
    b: &'a SparseVector,
) -> impl Iterator<Item = (&'a str, f64, f64)> + 'a {
    let (small, large, swapped) = if a.len() <= b.len() { (a, b, false) } else { (b, a, true) };
    small.iter().filter_map(move |(term, &ws)| {
        large.get(term).map(|&wl| {
            if swapped {
                (term.as_str(), wl, ws)
            } else {
                (term.as_str(), ws, wl)
            }
        })
    })
}

/// Shared terms ranked by their contribution `query[t] * doc[t]`.
///
/// Ties keep term order. At most [`MAX_MATCHING_TERMS`] are returned.
#[must_use]
pub fn top_contributing_terms(query: &SparseVector, doc: &SparseVector) -> Vec<String> {
    let mut contributions: Vec<(&str, f64)> = common_terms(query, doc)
        .map(|(term, wq, wd)| (term, wq * wd))
        .collect();

    contributions.sort_by(|x, y| y.1.total_cmp(&x.1));
    contributions
        .into_iter()
        .take(MAX_MATCHING_TERMS)
        .map(|(term, _)| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(entries: &[(&str, f64)]) -> SparseVector {
        entries.iter().map(|(t, w)| ((*t).to_string(), *w)).collect()
    }

    #[test]
    fn test_cosine_identical() {
        let v = vector(&[("api", 1.0), ("bug", 2.0), ("fix", 3.0)]);
        let sim = cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < 1e-9, "Expected 1.0, got {sim}");
    }

    #[test]
    fn test_cosine_disjoint() {
        let a = vector(&[("api", 1.0)]);
        let b = vector(&[("whale", 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_zero_magnitude() {
        let a = vector(&[("api", 0.0)]);
        let b = vector(&[("api", 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&SparseVector::new(), &b), 0.0);
    }

    #[test]
    fn test_cosine_uses_full_magnitude() {
        // dot = 1, |a| = sqrt(2), |b| = 1
        let a = vector(&[("api", 1.0), ("extra", 1.0)]);
        let b = vector(&[("api", 1.0)]);
        let sim = cosine_similarity(&a, &b);
        assert!((sim - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_clamps_negative() {
        let a = vector(&[("api", 1.0)]);
        let b = vector(&[("api", -1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let a = vector(&[("api", 0.3), ("bug", 1.7), ("cache", 0.2), ("disk", 0.9)]);
        let b = vector(&[("bug", 0.4), ("disk", 2.2), ("queue", 1.1)]);
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_top_terms_ranked_and_truncated() {
        let query = vector(&[
            ("a1", 1.0), ("a2", 2.0), ("a3", 3.0), ("a4", 4.0), ("a5", 5.0), ("a6", 6.0),
            ("only", 9.0),
        ]);
        let doc = vector(&[("a1", 1.0), ("a2", 1.0), ("a3", 1.0), ("a4", 1.0), ("a5", 1.0), ("a6", 1.0)]);

        let terms = top_contributing_terms(&query, &doc);
        assert_eq!(terms, vec!["a6", "a5", "a4", "a3", "a2"]);
    }

    #[test]
    fn test_top_terms_no_overlap() {
        let query = vector(&[("api", 1.0)]);
        let doc = vector(&[("perf", 1.0)]);
        assert!(top_contributing_terms(&query, &doc).is_empty());
    }
}

//! Term frequency and inverse document frequency.
//!
//! Two deliberate departures from textbook TF-IDF are locked in here:
//! - TF is normalized by the most frequent term in the document, not by
//!   document length, so the top term always scores exactly 1.0.
//! - IDF is `ln(N / (df + 1))`. For tiny corpora or ubiquitous terms this
//!   is zero or negative; cosine clamping downstream absorbs that.

use std::collections::{BTreeMap, BTreeSet};

/// Sparse term → weight vector.
///
/// Ordered so every summation over it runs in the same order, which keeps
/// query results bit-for-bit reproducible.
pub type SparseVector = BTreeMap<String, f64>;

/// Max-normalized term frequencies.
///
/// Empty input yields an empty map.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tf<S: AsRef<str>>(tokens: &[S]) -> SparseVector {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
    }

    let Some(max) = counts.values().copied().max() else {
        return SparseVector::new();
    };
    let max = max as f64;

    counts
        .into_iter()
        .map(|(term, count)| (term, count as f64 / max))
        .collect()
}

/// Inverse document frequency over a corpus of document-term sets.
///
/// `idf(t) = ln(N / (df(t) + 1))` where `N` counts every document,
/// including ones with no terms. An empty corpus gives an empty table.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_idf(term_sets: &[BTreeSet<String>]) -> BTreeMap<String, f64> {
    if term_sets.is_empty() {
        return BTreeMap::new();
    }

    let mut doc_frequencies: BTreeMap<&str, usize> = BTreeMap::new();
    for terms in term_sets {
        for term in terms {
            *doc_frequencies.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let total_docs = term_sets.len() as f64;
    doc_frequencies
        .into_iter()
        .map(|(term, df)| (term.to_string(), (total_docs / (df as f64 + 1.0)).ln()))
        .collect()
}

/// TF-IDF weights for a token list.
///
/// Terms missing from the IDF table (out-of-corpus query terms) are kept
/// with a weight of 0.0, which removes them from cosine similarity.
#[must_use]
pub fn tfidf<S: AsRef<str>>(tokens: &[S], idf: &BTreeMap<String, f64>) -> SparseVector {
    tf(tokens)
        .into_iter()
        .map(|(term, freq)| {
            let weight = idf.get(&term).copied().unwrap_or(0.0);
            (term, freq * weight)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(terms: &[&str]) -> BTreeSet<String> {
        terms.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_tf_max_normalization() {
        let scores = tf(&["test", "test", "bug", "fix"]);

        assert_eq!(scores.len(), 3);
        assert_eq!(scores["test"], 1.0);
        assert_eq!(scores["bug"], 0.5);
        assert_eq!(scores["fix"], 0.5);
    }

    #[test]
    fn test_tf_empty() {
        let empty: [&str; 0] = [];
        assert!(tf(&empty).is_empty());
    }

    #[test]
    fn test_tf_single_term_is_one() {
        let scores = tf(&["only", "only", "only"]);
        assert_eq!(scores["only"], 1.0);
    }

    #[test]
    fn test_idf_smoothing_formula() {
        let corpus = vec![set(&["api", "bug"]), set(&["api"]), set(&["perf"])];
        let idf = compute_idf(&corpus);

        // api: df=2 -> ln(3/3) = 0
        assert!(idf["api"].abs() < 1e-12);
        // bug: df=1 -> ln(3/2)
        assert!((idf["bug"] - (1.5f64).ln()).abs() < 1e-12);
        assert!((idf["perf"] - (1.5f64).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_idf_single_document_is_negative() {
        let idf = compute_idf(&[set(&["api"])]);
        assert!((idf["api"] - (0.5f64).ln()).abs() < 1e-12);
        assert!(idf["api"] < 0.0);
    }

    #[test]
    fn test_idf_counts_empty_documents() {
        let idf = compute_idf(&[set(&["api"]), set(&[]), set(&[]), set(&[])]);
        assert!((idf["api"] - 2.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_idf_empty_corpus() {
        assert!(compute_idf(&[]).is_empty());
    }

    #[test]
    fn test_tfidf_unknown_terms_score_zero() {
        let idf = compute_idf(&[set(&["api"]), set(&["perf"]), set(&["docs"])]);
        let vector = tfidf(&["api", "whale"], &idf);

        assert_eq!(vector["whale"], 0.0);
        assert!((vector["api"] - (1.5f64).ln()).abs() < 1e-12);
    }
}

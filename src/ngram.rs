//! TF-IDF vector space over unigrams and bigrams.
//!
//! The corpus is the expanded question followed by every window. Terms are
//! lowercase runs of two or more word characters with English stop words
//! removed; bigrams are formed from adjacent surviving terms. Weights are
//! raw term frequency times smoothed inverse document frequency,
//!
//! ```text
//! idf(t) = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! and each document vector is L2-normalised, so cosine similarity reduces
//! to a dot product. All maps are ordered so that floating-point sums are
//! accumulated in the same order on every call.

use std::collections::BTreeMap;

use crate::{
    text_util::{is_stop_word, is_word_char},
    window::Window,
};

/// Sparse vector as `(term index, weight)` pairs sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

/// Unigram and bigram terms of `text`, in order of appearance.
///
/// # Examples
///
/// ```
/// use docanswer::ngram::analyze;
///
/// assert_eq!(
///     analyze("The company makes phones"),
///     vec!["company", "makes", "phones", "company makes", "makes phones"],
/// );
/// ```
pub fn analyze(text: &str) -> Vec<String> {
    let unigrams: Vec<String> = text
        .split(|c: char| !is_word_char(c))
        .filter(|w| w.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|w| !is_stop_word(w))
        .collect();

    let bigrams: Vec<String> = unigrams
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect();

    let mut terms = unigrams;
    terms.extend(bigrams);
    terms
}

/// A fitted TF-IDF space: vocabulary, idf weights and one unit vector per
/// corpus document.
#[derive(Debug, Clone)]
pub struct TfidfSpace {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

impl TfidfSpace {
    /// Fit over `documents`. Returns `None` when no document yields a term.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Option<Self> {
        let counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = BTreeMap::new();
                for term in analyze(doc.as_ref()) {
                    *tf.entry(term).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }
        if df.is_empty() {
            return None;
        }

        let n = documents.len() as f64;
        let vocabulary: BTreeMap<String, usize> = df
            .keys()
            .enumerate()
            .map(|(i, term)| ((*term).to_string(), i))
            .collect();
        let idf: Vec<f64> = df
            .values()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let vectors = counts
            .iter()
            .map(|tf| {
                let raw: SparseVector = tf
                    .iter()
                    .map(|(term, &count)| {
                        let idx = vocabulary[term.as_str()];
                        (idx, count as f64 * idf[idx])
                    })
                    .collect();
                normalize(raw)
            })
            .collect();

        Some(Self {
            vocabulary,
            idf,
            vectors,
        })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&i| self.idf[i])
    }

    pub fn vector(&self, doc: usize) -> Option<&SparseVector> {
        self.vectors.get(doc)
    }

    /// Cosine similarity between two fitted documents.
    pub fn similarity(&self, a: usize, b: usize) -> f64 {
        match (self.vectors.get(a), self.vectors.get(b)) {
            (Some(x), Some(y)) => dot(x, y).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

fn normalize(mut v: SparseVector) -> SparseVector {
    let norm = v.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in &mut v {
            *w /= norm;
        }
    }
    v
}

/// Dot product of two index-sorted sparse vectors.
pub fn dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

/// Cosine similarity of each window to the question, in window order.
///
/// An empty vocabulary scores every window 0.
pub fn score_windows(expanded_question: &str, windows: &[Window]) -> Vec<f64> {
    let mut corpus: Vec<&str> = Vec::with_capacity(windows.len() + 1);
    corpus.push(expanded_question);
    corpus.extend(windows.iter().map(|w| w.text.as_str()));

    let Some(space) = TfidfSpace::fit(&corpus) else {
        tracing::debug!("empty n-gram vocabulary, similarity is zero");
        return vec![0.0; windows.len()];
    };
    tracing::trace!(vocabulary = space.vocabulary_len(), "fitted tf-idf space");

    (1..=windows.len()).map(|i| space.similarity(0, i)).collect()
}

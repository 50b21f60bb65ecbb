//! Token-overlap scoring.
//!
//! Score for a window is `|Q ∩ W| / |Q|`, where `Q` is the set of content
//! words of the (synonym-expanded) question and `W` the set of words in the
//! window. An empty `Q` scores every window 0.

use std::collections::HashSet;

use crate::{
    text_util::{content_words, words},
    window::Window,
};

/// Overlap of each window with the question's content words.
pub fn score_windows(expanded_question: &str, windows: &[Window]) -> Vec<f64> {
    let question_tokens = content_words(expanded_question);
    if question_tokens.is_empty() {
        return vec![0.0; windows.len()];
    }
    let denom = question_tokens.len() as f64;

    windows
        .iter()
        .map(|w| {
            let window_tokens: HashSet<String> =
                words(&w.text).into_iter().collect();
            let hits = question_tokens
                .iter()
                .filter(|t| window_tokens.contains(*t))
                .count();
            hits as f64 / denom
        })
        .collect()
}

//! Sentence segmentation.
//!
//! A sentence boundary is whitespace preceded by `.`, `?` or `!`, except
//! when the period closes a dotted abbreviation (`U.S.`, `e.g.`) or a
//! capitalised initial (`J. Smith`). Titles such as `Mr.` still split; the
//! heuristic is intentionally kept this simple.

use crate::{config::DEFAULT_MIN_SENTENCE_CHARS, text_util::is_word_char};

/// Whether the whitespace at `pos` ends a sentence.
fn is_boundary(chars: &[(usize, char)], pos: usize) -> bool {
    if pos == 0 {
        return false;
    }
    let prev = chars[pos - 1].1;
    if !matches!(prev, '.' | '?' | '!') {
        return false;
    }

    // `x.y.` style abbreviation ending right before the whitespace
    if pos >= 4 {
        let (a, dot, b) =
            (chars[pos - 4].1, chars[pos - 3].1, chars[pos - 2].1);
        if is_word_char(a) && dot == '.' && is_word_char(b) {
            return false;
        }
    }

    // capitalised initial standing alone: "J." but not "IBM."
    if pos >= 2 && prev == '.' && chars[pos - 2].1.is_ascii_uppercase() {
        let standalone = pos == 2 || !is_word_char(chars[pos - 3].1);
        if standalone {
            return false;
        }
    }

    true
}

/// Split `text` into trimmed sentences of at least `min_chars` characters.
///
/// # Examples
///
/// ```
/// use docanswer::segment::split_sentences;
///
/// let sentences = split_sentences(
///     "Apple was founded in 1976. It makes phones and computers.",
///     16,
/// );
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0], "Apple was founded in 1976.");
/// ```
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut pieces = Vec::new();
    let mut start_byte = 0;

    for (pos, &(byte_idx, c)) in chars.iter().enumerate() {
        if c.is_whitespace() && is_boundary(&chars, pos) {
            pieces.push(&text[start_byte..byte_idx]);
            start_byte = byte_idx;
        }
    }
    pieces.push(&text[start_byte..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() >= min_chars)
        .map(str::to_string)
        .collect()
}

/// [`split_sentences`] with the default 16-character floor.
pub fn sentences(text: &str) -> Vec<String> {
    split_sentences(text, DEFAULT_MIN_SENTENCE_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPLE: &str = "Apple was founded in 1976 by Steve Jobs. It is \
        headquartered in Cupertino, California. The company makes phones \
        and computers.";

    #[test]
    fn splits_on_terminal_punctuation() {
        let out = sentences(APPLE);
        assert_eq!(
            out,
            vec![
                "Apple was founded in 1976 by Steve Jobs.",
                "It is headquartered in Cupertino, California.",
                "The company makes phones and computers.",
            ]
        );
    }

    #[test]
    fn question_and_exclamation_marks_split() {
        let out = sentences(
            "Is this the real answer? Yes it is the answer! \
             Done with that now.",
        );
        assert_eq!(out.len(), 3);
        assert!(out[0].ends_with('?'));
        assert!(out[1].ends_with('!'));
    }

    #[test]
    fn short_fragments_are_dropped() {
        assert!(sentences("Hi. Bye. OK.").is_empty());
    }

    #[test]
    fn boundary_length_is_inclusive_at_sixteen() {
        // 16 characters survives, 15 does not
        assert_eq!(sentences("abcdefghijklmno.").len(), 1);
        assert!(sentences("abcdefghijklmn.").is_empty());
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert!(sentences("").is_empty());
        assert!(sentences("   \n\t ").is_empty());
    }

    #[test]
    fn dotted_abbreviation_does_not_split() {
        let out =
            sentences("The firm moved to the U.S. in the year two thousand.");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn capital_initial_does_not_split() {
        let out =
            sentences("The report was written by J. Smith for the board.");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn acronym_at_sentence_end_splits() {
        let out = sentences(
            "The startup was acquired by IBM. The deal closed in the spring \
             of 1995.",
        );
        assert_eq!(
            out,
            vec![
                "The startup was acquired by IBM.",
                "The deal closed in the spring of 1995.",
            ]
        );
    }

    #[test]
    fn initial_at_text_start_does_not_split() {
        let out = split_sentences("J. Smith wrote the annual report.", 1);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn title_abbreviation_still_splits() {
        // Known limitation: "Mr." is treated as a sentence end.
        let out = split_sentences(
            "A letter arrived for Mr. Smith from the bank today.",
            1,
        );
        assert_eq!(
            out,
            vec!["A letter arrived for Mr.", "Smith from the bank today."]
        );
    }

    #[test]
    fn no_whitespace_after_period_keeps_together() {
        let out =
            sentences("Version 2.5 shipped.Then nothing happened for weeks.");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn multibyte_text_is_sliced_safely() {
        let out = sentences(
            "Café owners in Zürich opened early. \
             Naïve visitors arrived at noon.",
        );
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("Café"));
    }
}

use std::collections::HashSet;

/// English function words ignored by the lexical and n-gram scorers.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am",
    "an", "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "could", "did",
    "do", "does", "doing", "done", "down", "during", "each", "either", "else",
    "etc", "ever", "every", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "however", "i", "if", "in", "into", "is", "it",
    "its", "itself", "just", "may", "me", "might", "more", "most", "much",
    "must", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
    "own", "same", "shall", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "upon", "us", "very", "was", "we", "were", "what",
    "whatever", "when", "where", "whether", "which", "while", "who", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet",
    "you", "your", "yours", "yourself", "yourselves", "many",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Letters, digits and `_`, the characters a word token is made of.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into lowercase word tokens on word boundaries.
///
/// # Examples
///
/// ```
/// use docanswer::text_util::words;
///
/// assert_eq!(words("Steve Jobs, 1976!"), vec!["steve", "jobs", "1976"]);
/// ```
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Lowercase word tokens with stop words removed, as a set.
pub fn content_words(text: &str) -> HashSet<String> {
    words(text)
        .into_iter()
        .filter(|w| !is_stop_word(w))
        .collect()
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Join sentences with the first one wrapped in `**` so it stands out.
pub fn mark_lead(sentences: &[&str]) -> String {
    let Some((lead, rest)) = sentences.split_first() else {
        return String::new();
    };
    let mut out = format!("**{lead}**");
    for sentence in rest {
        out.push(' ');
        out.push_str(sentence);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_lowercases_and_strips_punctuation() {
        assert_eq!(
            words("Who founded Apple?"),
            vec!["who", "founded", "apple"]
        );
    }

    #[test]
    fn words_empty_input() {
        assert!(words("   ...  ").is_empty());
    }

    #[test]
    fn words_keeps_unicode_letters() {
        assert_eq!(words("Café naïve"), vec!["café", "naïve"]);
    }

    #[test]
    fn content_words_drops_stop_words() {
        let set = content_words("What is the revenue of the company?");
        assert!(set.contains("revenue"));
        assert!(set.contains("company"));
        assert!(!set.contains("what"));
        assert!(!set.contains("the"));
    }

    #[test]
    fn content_words_of_pure_function_words_is_empty() {
        assert!(content_words("What is it?").is_empty());
    }

    #[test]
    fn round2_basic() {
        assert_eq!(round2(0.456), 0.46);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn mark_lead_wraps_first_sentence() {
        assert_eq!(
            mark_lead(&["First one here.", "Second one.", "Third."]),
            "**First one here.** Second one. Third."
        );
    }

    #[test]
    fn mark_lead_single_and_empty() {
        assert_eq!(mark_lead(&["Only."]), "**Only.**");
        assert_eq!(mark_lead(&[]), "");
    }
}

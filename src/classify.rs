use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse kind of fact a question asks for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    Who,
    When,
    Where,
    HowMany,
    Why,
    #[default]
    What,
}

impl QuestionType {
    pub const ALL: [QuestionType; 6] = [
        QuestionType::Who,
        QuestionType::When,
        QuestionType::Where,
        QuestionType::HowMany,
        QuestionType::Why,
        QuestionType::What,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Who => "WHO",
            QuestionType::When => "WHEN",
            QuestionType::Where => "WHERE",
            QuestionType::HowMany => "HOW_MANY",
            QuestionType::Why => "WHY",
            QuestionType::What => "WHAT",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Classify a question by its wording. First matching rule wins; anything
/// unrecognised is [`QuestionType::What`].
///
/// # Examples
///
/// ```
/// use docanswer::classify::{classify, QuestionType};
///
/// assert_eq!(classify("Who founded Apple?"), QuestionType::Who);
/// let question = "How many employees does it have?";
/// assert_eq!(classify(question), QuestionType::HowMany);
/// assert_eq!(classify("Tell me about it"), QuestionType::What);
/// ```
pub fn classify(question: &str) -> QuestionType {
    let q = question.trim().to_lowercase();

    if q.starts_with("who ")
        || contains_any(&q, &["who is", "who was", "who are"])
    {
        QuestionType::Who
    } else if q.starts_with("when ")
        || contains_any(&q, &["what year", "what date"])
    {
        QuestionType::When
    } else if q.starts_with("where ")
        || contains_any(&q, &["what location", "what place"])
    {
        QuestionType::Where
    } else if contains_any(&q, &["how many", "how much", "what number"]) {
        QuestionType::HowMany
    } else if q.starts_with("why ") || q.contains("what reason") {
        QuestionType::Why
    } else {
        QuestionType::What
    }
}

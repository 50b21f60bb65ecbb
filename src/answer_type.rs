//! Answer-type boost: does a window contain the kind of thing the question
//! asks for?
//!
//! Each question type except [`QuestionType::What`] owns one regular
//! expression. A window scores 1.0 when its type's pattern matches anywhere
//! in its text and 0.0 otherwise.

use regex::Regex;

use crate::{classify::QuestionType, error::Result, window::Window};

const WHEN_PATTERN: &str = concat!(
    r"(?i)\b(?:1[0-9]{3}|20[0-9]{2})\b",
    r"|\b(?:january|february|march|april|may|june|july|august|september",
    r"|october|november|december",
    r"|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)\b",
    r"|\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday",
    r"|yesterday|today|tomorrow|century|decade|year|years|ago|since|during",
    r"|date|dated|when)\b",
    r"|\b\d{1,2}/\d{1,2}/\d{2,4}\b",
);

const WHO_PATTERN: &str = r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b";

const WHERE_PATTERN: &str = concat!(
    r"(?i)\b(?:city|cities|country|countries|state|province|region",
    r"|street|avenue|road|town|village|county|district|continent|island",
    r"|capital|headquarters|headquartered|located|based|campus|office",
    r"|near|north|south|east|west)\b",
);

const HOW_MANY_PATTERN: &str = r"\b\d+(?:[.,]\d+)*\b";

const WHY_PATTERN: &str = concat!(
    r"(?i)\b(?:because|due to|since|therefore|thus|hence|as a result",
    r"|owing to|so that|in order to|reason|caused by|thanks to",
    r"|consequently|led to)\b",
);

/// Compiled per-type pattern bank.
#[derive(Debug, Clone)]
pub struct PatternBank {
    who: Regex,
    when: Regex,
    r#where: Regex,
    how_many: Regex,
    why: Regex,
}

impl PatternBank {
    pub fn new() -> Result<Self> {
        Ok(Self {
            who: Regex::new(WHO_PATTERN)?,
            when: Regex::new(WHEN_PATTERN)?,
            r#where: Regex::new(WHERE_PATTERN)?,
            how_many: Regex::new(HOW_MANY_PATTERN)?,
            why: Regex::new(WHY_PATTERN)?,
        })
    }

    /// The pattern for a question type; `None` for [`QuestionType::What`].
    pub fn pattern(&self, question_type: QuestionType) -> Option<&Regex> {
        match question_type {
            QuestionType::Who => Some(&self.who),
            QuestionType::When => Some(&self.when),
            QuestionType::Where => Some(&self.r#where),
            QuestionType::HowMany => Some(&self.how_many),
            QuestionType::Why => Some(&self.why),
            QuestionType::What => None,
        }
    }

    /// 1.0 if `text` contains content of the given type, else 0.0.
    pub fn boost(&self, question_type: QuestionType, text: &str) -> f64 {
        match self.pattern(question_type) {
            Some(re) if re.is_match(text) => 1.0,
            _ => 0.0,
        }
    }

    /// Binary boost for every window, in window order.
    pub fn score_windows(
        &self,
        question_type: QuestionType,
        windows: &[Window],
    ) -> Vec<f64> {
        windows
            .iter()
            .map(|w| self.boost(question_type, &w.text))
            .collect()
    }
}

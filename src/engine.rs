//! Ranking engine: the single entry point that answers a question against
//! one document.
//!
//! Pipeline per call:
//! 1. Reject empty document or question
//! 2. Segment into sentences (stop if none survive)
//! 3. Build overlapping windows
//! 4. Expand the question with synonyms and classify it
//! 5. Score every window (lexical, n-gram, answer type)
//! 6. Blend, pick the earliest best window, apply the confidence floor
//! 7. Format the winning window with its lead sentence marked
//!
//! Nothing is cached between calls; the thesaurus and pattern bank are
//! read-only after construction, so one [`Engine`] can serve any number of
//! threads.

use std::sync::OnceLock;

use serde::Serialize;

use crate::{
    answer_type::PatternBank,
    classify::{QuestionType, classify},
    config::{BlendWeights, EngineConfig},
    error::Result,
    lexical, ngram,
    segment::split_sentences,
    text_util::{mark_lead, round2},
    thesaurus::Thesaurus,
    window::{Window, build_windows},
};

/// Identifier reported with every successful answer.
pub const METHOD: &str = "hybrid-tfidf-lexical-type";

pub const MSG_MISSING_INPUT: &str =
    "Please provide both a document and a question.";
pub const MSG_NO_CONTENT: &str = "The document does not contain enough \
    meaningful content to answer the question.";
pub const MSG_NO_MATCH: &str =
    "I could not find a confident answer to that question in the document.";

/// The three independent signals for one window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreVector {
    pub lexical: f64,
    pub ngram: f64,
    pub type_boost: f64,
}

impl ScoreVector {
    pub fn blend(&self, weights: &BlendWeights) -> f64 {
        weights.ngram * self.ngram
            + weights.lexical * self.lexical
            + weights.type_boost * self.type_boost
    }
}

/// Result of [`Engine::answer`].
///
/// `question_type` and `method` are present only when an answer was found;
/// their absence means "no answer", not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub answer: String,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl Answer {
    fn not_found(message: &str, confidence: f64) -> Self {
        Self {
            answer: message.to_string(),
            confidence: round2(confidence.clamp(0.0, 1.0)),
            question_type: None,
            method: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.question_type.is_some()
    }
}

/// One window with its signals, as reported by [`Engine::explain`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowScore {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub scores: ScoreVector,
    pub blended: f64,
}

/// Per-window diagnostics for a (document, question) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub question_type: QuestionType,
    pub expanded_question: String,
    pub windows: Vec<WindowScore>,
}

impl Explanation {
    /// The `n` best windows, highest blended score first, ties earliest first.
    pub fn top(&self, n: usize) -> Vec<&WindowScore> {
        let mut ranked: Vec<&WindowScore> = self.windows.iter().collect();
        ranked.sort_by(|a, b| {
            b.blended
                .partial_cmp(&a.blended)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.start.cmp(&b.start))
        });
        ranked.truncate(n);
        ranked
    }
}

struct Ranking {
    sentences: Vec<String>,
    windows: Vec<Window>,
    expanded_question: String,
    question_type: QuestionType,
    scores: Vec<ScoreVector>,
    blended: Vec<f64>,
}

enum Outcome {
    MissingInput,
    NoContent,
    Ranked(Ranking),
}

/// Extractive question-answering engine.
///
/// # Examples
///
/// ```
/// use docanswer::{Engine, EngineConfig};
/// use docanswer::classify::QuestionType;
///
/// let engine = Engine::new(EngineConfig::default()).unwrap();
/// let answer = engine.answer(
///     "Apple was founded in 1976 by Steve Jobs. It is headquartered in \
///      Cupertino, California. The company makes phones and computers.",
///     "When was Apple founded?",
/// );
/// assert_eq!(answer.question_type, Some(QuestionType::When));
/// assert!(answer.answer.contains("founded in 1976"));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    thesaurus: Thesaurus,
    patterns: PatternBank,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_parts(config, Thesaurus::builtin(), PatternBank::new()?)
    }

    pub fn with_parts(
        config: EngineConfig,
        thesaurus: Thesaurus,
        patterns: PatternBank,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            thesaurus,
            patterns,
        })
    }

    /// Process-wide engine with the default configuration, built on first use.
    pub fn shared() -> Result<&'static Engine> {
        static SHARED: OnceLock<Engine> = OnceLock::new();
        if let Some(engine) = SHARED.get() {
            return Ok(engine);
        }
        let engine = Engine::new(EngineConfig::default())?;
        Ok(SHARED.get_or_init(|| engine))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn thesaurus(&self) -> &Thesaurus {
        &self.thesaurus
    }

    /// Answer `question` from `document`.
    pub fn answer(&self, document: &str, question: &str) -> Answer {
        let ranking = match self.rank(document, question) {
            Outcome::MissingInput => {
                return Answer::not_found(MSG_MISSING_INPUT, 0.0);
            }
            Outcome::NoContent => return Answer::not_found(MSG_NO_CONTENT, 0.0),
            Outcome::Ranked(ranking) => ranking,
        };

        let (best_idx, best_score) = select_best(&ranking.blended);
        tracing::debug!(
            window = best_idx,
            score = best_score,
            "selected best window"
        );

        if best_score < self.config.confidence_floor {
            tracing::debug!(
                floor = self.config.confidence_floor,
                "best score below confidence floor"
            );
            return Answer::not_found(MSG_NO_MATCH, best_score);
        }

        let window = &ranking.windows[best_idx];
        Answer {
            answer: mark_lead(&window.sentences(&ranking.sentences)),
            confidence: round2(best_score.clamp(0.0, 1.0)),
            question_type: Some(ranking.question_type),
            method: Some(METHOD.to_string()),
        }
    }

    /// Score every window without selecting an answer.
    pub fn explain(&self, document: &str, question: &str) -> Explanation {
        match self.rank(document, question) {
            Outcome::Ranked(ranking) => Explanation {
                question_type: ranking.question_type,
                expanded_question: ranking.expanded_question,
                windows: ranking
                    .windows
                    .into_iter()
                    .zip(ranking.scores)
                    .zip(ranking.blended)
                    .map(|((w, scores), blended)| WindowScore {
                        start: w.start,
                        end: w.end,
                        text: w.text,
                        scores,
                        blended,
                    })
                    .collect(),
            },
            Outcome::MissingInput | Outcome::NoContent => Explanation {
                question_type: classify(question),
                expanded_question: self.thesaurus.expand(question).into_owned(),
                windows: Vec::new(),
            },
        }
    }

    fn rank(&self, document: &str, question: &str) -> Outcome {
        if document.trim().is_empty() || question.trim().is_empty() {
            tracing::debug!("empty document or question");
            return Outcome::MissingInput;
        }

        let sentences =
            split_sentences(document, self.config.min_sentence_chars);
        if sentences.is_empty() {
            tracing::debug!("no sentences survived segmentation");
            return Outcome::NoContent;
        }

        let windows = build_windows(&sentences, self.config.window_size);
        let expanded_question = self.thesaurus.expand(question).into_owned();
        let question_type = classify(question);
        tracing::debug!(
            sentences = sentences.len(),
            windows = windows.len(),
            %question_type,
            "segmented document"
        );

        let lexical = lexical::score_windows(&expanded_question, &windows);
        let similarity = ngram::score_windows(&expanded_question, &windows);
        let boosts = self.patterns.score_windows(question_type, &windows);

        let scores: Vec<ScoreVector> = lexical
            .into_iter()
            .zip(similarity)
            .zip(boosts)
            .map(|((lexical, ngram), type_boost)| ScoreVector {
                lexical,
                ngram,
                type_boost,
            })
            .collect();
        let blended: Vec<f64> = scores
            .iter()
            .map(|s| s.blend(&self.config.weights))
            .collect();

        for (i, (s, b)) in scores.iter().zip(&blended).enumerate() {
            tracing::trace!(window = i, ?s, blended = b, "window scores");
        }

        Outcome::Ranked(Ranking {
            sentences,
            windows,
            expanded_question,
            question_type,
            scores,
            blended,
        })
    }
}

/// Index and value of the highest score; the earliest index wins ties.
fn select_best(scores: &[f64]) -> (usize, f64) {
    let mut best = (0, f64::NEG_INFINITY);
    for (i, &score) in scores.iter().enumerate() {
        if score > best.1 {
            best = (i, score);
        }
    }
    if best.1.is_finite() { best } else { (0, 0.0) }
}

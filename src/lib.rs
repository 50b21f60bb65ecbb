//! docanswer - extractive question answering over a single document.
//!
//! Given a document and a question, docanswer splits the document into
//! overlapping three-sentence windows and ranks them by a fixed blend of
//! three explainable signals:
//!
//! - TF-IDF cosine similarity over unigrams and bigrams (weight 0.45)
//! - content-word overlap with the synonym-expanded question (weight 0.25)
//! - a binary boost when the window contains the kind of thing the question
//!   asks for, e.g. a year for a "when" question (weight 0.30)
//!
//! The best window is returned with its lead sentence marked, unless its
//! score falls below the 0.05 confidence floor.
//!
//! # Quick start
//!
//! ```
//! use docanswer::Engine;
//!
//! let engine = Engine::shared().unwrap();
//! let answer = engine.answer(
//!     "Apple was founded in 1976 by Steve Jobs. It is headquartered in \
//!      Cupertino, California. The company makes phones and computers.",
//!     "Who founded Apple?",
//! );
//! println!("{} ({:.2})", answer.answer, answer.confidence);
//! ```

pub mod answer_type;
pub mod classify;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod lexical;
pub mod ngram;
pub mod output;
pub mod segment;
pub mod text_util;
pub mod thesaurus;
pub mod window;

pub use classify::QuestionType;
pub use config::EngineConfig;
pub use engine::{Answer, Engine};
pub use error::{Error, Result};

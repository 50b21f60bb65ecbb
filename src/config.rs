//! Engine tuning knobs.
//!
//! The defaults are the ranking contract: a three-sentence window, a
//! 16-character sentence floor, a 0.05 confidence floor, and the
//! 0.45 / 0.25 / 0.30 blend of n-gram similarity, lexical overlap and
//! answer-type boost. A JSON file can override any subset of them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of consecutive sentences grouped into one window.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Sentences shorter than this many characters are dropped as noise.
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 16;

/// Best blended scores below this are reported as "not found".
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.05;

/// Environment variable consulted when no `--config` path is given.
pub const CONFIG_ENV: &str = "DOCANSWER_CONFIG";

/// Blend weights applied to a window's
/// [`ScoreVector`](crate::engine::ScoreVector).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendWeights {
    pub ngram: f64,
    pub lexical: f64,
    pub type_boost: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            ngram: 0.45,
            lexical: 0.25,
            type_boost: 0.30,
        }
    }
}

impl BlendWeights {
    pub fn sum(&self) -> f64 {
        self.ngram + self.lexical + self.type_boost
    }
}

/// Configuration for an [`Engine`](crate::engine::Engine).
///
/// # Examples
///
/// ```
/// use docanswer::config::{EngineConfig, DEFAULT_WINDOW_SIZE};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.window_size, DEFAULT_WINDOW_SIZE);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum sentences per window.
    pub window_size: usize,
    /// Minimum trimmed sentence length in characters.
    pub min_sentence_chars: usize,
    /// Minimum blended score for an answer to be returned.
    pub confidence_floor: f64,
    pub weights: BlendWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
            confidence_floor: DEFAULT_CONFIDENCE_FLOOR,
            weights: BlendWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            ?config,
            "loaded engine config"
        );
        Ok(config)
    }

    /// Resolve the configuration from, in order of priority:
    /// 1. An explicit path (from --config)
    /// 2. The DOCANSWER_CONFIG environment variable
    /// 3. Built-in defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve_with(explicit, std::env::var(CONFIG_ENV).ok())
    }

    /// [`EngineConfig::resolve`] with the environment value passed in.
    pub fn resolve_with(
        explicit: Option<&Path>,
        env_value: Option<String>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match env_value {
            Some(val) if !val.trim().is_empty() => {
                Self::load(&PathBuf::from(val))
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::Config("window_size must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.confidence_floor) {
            return Err(Error::Config(format!(
                "confidence_floor must be within [0, 1], got {}",
                self.confidence_floor
            )));
        }
        let w = &self.weights;
        if w.ngram < 0.0 || w.lexical < 0.0 || w.type_boost < 0.0 {
            return Err(Error::Config(
                "blend weights must be non-negative".into(),
            ));
        }
        if (w.sum() - 1.0).abs() > 1e-6 {
            return Err(Error::Config(format!(
                "blend weights must sum to 1.0, got {:.6}",
                w.sum()
            )));
        }
        Ok(())
    }
}

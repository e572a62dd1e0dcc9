// ============================================================
// Layer 6 — Search Configuration
// ============================================================
// Every tunable number in the pipeline lives here instead of
// being scattered through the scoring code:
//
//   corpus_dir     — where the extracted .json files live
//   max_words      — selection budget across all returned docs
//   recency_days   — documents older than this are dropped
//   context_words  — snippet radius around a phrase match
//   weights        — quality score weights and caps
//
// Values come from defaults, overridden by environment
// variables (a .env file is honoured). The command line only
// carries the query itself.
//
//   RCA_CORPUS_DIR     default "."
//   RCA_MAX_WORDS      default 24000
//   RCA_RECENCY_DAYS   default 730, at most MAX_RECENCY_DAYS
//   RCA_CONTEXT_WORDS  default 10

use anyhow::{ensure, Context, Result};
use std::{env, path::PathBuf, str::FromStr};

pub const DEFAULT_MAX_WORDS: usize = 24_000;
pub const DEFAULT_RECENCY_DAYS: i64 = 730;
pub const DEFAULT_CONTEXT_WORDS: usize = 10;

/// Longest accepted recency horizon (about a century)
pub const MAX_RECENCY_DAYS: i64 = 36_500;

// ─── Quality Weights ─────────────────────────────────────────────────────────
// The four component weights and the caps each raw signal is
// divided by before being clamped to 1. These were tuned by
// eye on one wiki space; other corpora may want different ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityWeights {
    /// Weight of sentence-length spread
    pub sentence_variation: f64,
    /// Weight of word-length spread
    pub word_variation:     f64,
    /// Weight of distinct-word ratio
    pub info_density:       f64,
    /// Weight of domain-term ratio
    pub tech_terms:         f64,

    /// Sentence-length std dev that earns the full component
    pub sentence_variation_cap: f64,
    /// Word-length std dev that earns the full component
    pub word_variation_cap:     f64,
    /// Multiplier on the domain-term ratio before clamping
    pub tech_term_boost:        f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            sentence_variation:     0.3,
            word_variation:         0.2,
            info_density:           0.3,
            tech_terms:             0.2,
            sentence_variation_cap: 10.0,
            word_variation_cap:     3.0,
            tech_term_boost:        5.0,
        }
    }
}

// ─── Search Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub corpus_dir:    PathBuf,
    pub max_words:     usize,
    pub recency_days:  i64,
    pub context_words: usize,
    pub weights:       QualityWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            corpus_dir:    PathBuf::from("."),
            max_words:     DEFAULT_MAX_WORDS,
            recency_days:  DEFAULT_RECENCY_DAYS,
            context_words: DEFAULT_CONTEXT_WORDS,
            weights:       QualityWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(dir) = lookup("RCA_CORPUS_DIR") {
            cfg.corpus_dir = PathBuf::from(dir);
        }
        if let Some(v) = parse_var::<_, usize>(&lookup, "RCA_MAX_WORDS")? {
            cfg.max_words = v;
        }
        if let Some(v) = parse_var::<_, i64>(&lookup, "RCA_RECENCY_DAYS")? {
            ensure!(
                (0..=MAX_RECENCY_DAYS).contains(&v),
                "RCA_RECENCY_DAYS must be between 0 and {MAX_RECENCY_DAYS}, got {v}"
            );
            cfg.recency_days = v;
        }
        if let Some(v) = parse_var::<_, usize>(&lookup, "RCA_CONTEXT_WORDS")? {
            cfg.context_words = v;
        }

        Ok(cfg)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("{key} must be a valid number, got '{raw}'"))
        })
        .transpose()
}

//! Skill extraction from raw resume text.
//!
//! Extraction never parses document structure. The text is lower-cased once
//! and each vocabulary entry is looked up in it.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a vocabulary entry is matched against resume text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Any contiguous occurrence counts, even inside a longer word
    /// ("Java" matches "JavaScript").
    #[default]
    Substring,
    /// The occurrence must not touch an ASCII letter or digit on either side.
    WordBoundary,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Substring => write!(f, "substring"),
            MatchMode::WordBoundary => write!(f, "word-boundary"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word-boundary" | "word_boundary" | "word" => Ok(MatchMode::WordBoundary),
            other => Err(format!("unknown match mode: {other}")),
        }
    }
}

/// Return the vocabulary entries whose lower-cased form occurs anywhere in
/// the lower-cased `text`, in vocabulary order.
pub fn extract<S: AsRef<str>>(text: &str, vocabulary: &[S]) -> Vec<String> {
    let normalized = text.to_lowercase();
    vocabulary
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|skill| !skill.is_empty() && normalized.contains(&skill.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Decode uploaded bytes as text, replacing invalid UTF-8 sequences.
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

struct Pattern {
    skill: String,
    needle: String,
    bounded: Option<Regex>,
}

/// A vocabulary bound to a match mode, with patterns compiled up front.
pub struct SkillExtractor {
    patterns: Vec<Pattern>,
    mode: MatchMode,
}

impl SkillExtractor {
    pub fn new<S: AsRef<str>>(vocabulary: &[S], mode: MatchMode) -> Self {
        let patterns = vocabulary
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|skill| !skill.is_empty())
            .map(|skill| {
                let needle = skill.to_lowercase();
                let bounded = match mode {
                    MatchMode::Substring => None,
                    MatchMode::WordBoundary => bounded_pattern(&needle),
                };
                Pattern {
                    skill: skill.to_string(),
                    needle,
                    bounded,
                }
            })
            .collect();

        Self { patterns, mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Skills present in `text`, in vocabulary order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let normalized = text.to_lowercase();
        self.patterns
            .iter()
            .filter(|p| match &p.bounded {
                Some(re) => re.is_match(&normalized),
                None => normalized.contains(&p.needle),
            })
            .map(|p| p.skill.clone())
            .collect()
    }

    /// Decode raw upload bytes and extract skills from them.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Vec<String> {
        self.extract(&decode_text(bytes))
    }
}

impl fmt::Debug for SkillExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkillExtractor")
            .field("mode", &self.mode)
            .field("skills", &self.patterns.len())
            .finish()
    }
}

fn bounded_pattern(needle: &str) -> Option<Regex> {
    let pattern = format!(
        "(?:^|[^a-z0-9]){}(?:[^a-z0-9]|$)",
        regex::escape(needle)
    );
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("falling back to substring match for '{needle}': {e}");
            None
        }
    }
}

//! Match scoring and suitability verdicts.
//!
//! A score is the share of required skills a candidate has, as a percentage:
//!
//! score = 100 * |candidate ∩ required| / |required|
//!
//! Required skills are counted as a set, so listing a skill twice does not
//! weigh it double. An empty requirement list scores 0.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Scores at or above this are High.
pub const HIGH_THRESHOLD: f64 = 80.0;
/// Scores at or above this (and below [`HIGH_THRESHOLD`]) are Medium.
pub const MEDIUM_THRESHOLD: f64 = 50.0;

/// Suitability tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Low,
    Medium,
    High,
}

impl Verdict {
    /// Classify a score. Each tier includes its lower bound.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Verdict::High
        } else if score >= MEDIUM_THRESHOLD {
            Verdict::Medium
        } else {
            Verdict::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::High => "High Suitability",
            Verdict::Medium => "Medium Suitability",
            Verdict::Low => "Low Suitability",
        }
    }

    /// CSS class used by the renderers for score cards.
    pub fn css_class(&self) -> &'static str {
        match self {
            Verdict::High => "high-score",
            Verdict::Medium => "medium-score",
            Verdict::Low => "low-score",
        }
    }

    /// Tiers from best to worst.
    pub const ALL: [Verdict; 3] = [Verdict::High, Verdict::Medium, Verdict::Low];
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::High => write!(f, "high"),
            Verdict::Medium => write!(f, "medium"),
            Verdict::Low => write!(f, "low"),
        }
    }
}

/// Percentage of `required_skills` present in `candidate_skills`, in `[0, 100]`.
pub fn score<A: AsRef<str>, B: AsRef<str>>(candidate_skills: &[A], required_skills: &[B]) -> f64 {
    let required: HashSet<&str> = required_skills.iter().map(AsRef::<str>::as_ref).collect();
    if required.is_empty() {
        return 0.0;
    }

    let candidate: HashSet<&str> = candidate_skills.iter().map(AsRef::<str>::as_ref).collect();
    let matched = required.intersection(&candidate).count();

    (100.0 * matched as f64 / required.len() as f64).clamp(0.0, 100.0)
}

/// Label and tier for a score.
pub fn verdict(score: f64) -> (&'static str, Verdict) {
    let tier = Verdict::from_score(score);
    (tier.label(), tier)
}

/// Required skills absent from `extracted`, in required order, without
/// duplicates.
pub fn missing_skills<A: AsRef<str>, B: AsRef<str>>(required: &[A], extracted: &[B]) -> Vec<String> {
    let have: HashSet<&str> = extracted.iter().map(AsRef::<str>::as_ref).collect();
    let mut seen = HashSet::new();
    required
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|s| !have.contains(s) && seen.insert(*s))
        .map(str::to_string)
        .collect()
}

/// Extracted skills that are also required, in extracted order.
pub fn matched_skills<A: AsRef<str>, B: AsRef<str>>(extracted: &[A], required: &[B]) -> Vec<String> {
    let wanted: HashSet<&str> = required.iter().map(AsRef::<str>::as_ref).collect();
    extracted
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|s| wanted.contains(s))
        .map(str::to_string)
        .collect()
}

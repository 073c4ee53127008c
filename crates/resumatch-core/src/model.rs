//! Core data model types for resumatch.
//!
//! A `CandidateRecord` is produced once per analyzed resume and never
//! changes afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::scoring::Verdict;

/// Highest degree shown on a candidate card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "B.Tech")]
    BTech,
    #[serde(rename = "B.E.")]
    BE,
    #[serde(rename = "M.Tech")]
    MTech,
    #[serde(rename = "M.S.")]
    MS,
    #[serde(rename = "Ph.D")]
    PhD,
}

impl Education {
    /// Every degree, in display order.
    pub const ALL: [Education; 5] = [
        Education::BTech,
        Education::BE,
        Education::MTech,
        Education::MS,
        Education::PhD,
    ];
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Education::BTech => write!(f, "B.Tech"),
            Education::BE => write!(f, "B.E."),
            Education::MTech => write!(f, "M.Tech"),
            Education::MS => write!(f, "M.S."),
            Education::PhD => write!(f, "Ph.D"),
        }
    }
}

impl FromStr for Education {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "btech" => Ok(Education::BTech),
            "be" => Ok(Education::BE),
            "mtech" => Ok(Education::MTech),
            "ms" => Ok(Education::MS),
            "phd" => Ok(Education::PhD),
            _ => Err(format!("unknown education: {s}")),
        }
    }
}

/// Identity fields of a candidate.
///
/// Without real resume parsing these are placeholders, see
/// [`crate::placeholder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIdentity {
    pub display_name: String,
    pub email: String,
    pub years_experience: u32,
    pub education: Education,
}

/// A scored resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Name of the uploaded file.
    pub filename: String,
    /// Name shown on the candidate card.
    pub display_name: String,
    /// Contact email.
    pub email: String,
    /// Vocabulary skills found in the resume, in vocabulary order.
    pub extracted_skills: Vec<String>,
    /// Extracted skills that are also required, in extracted order.
    #[serde(default)]
    pub matched_skills: Vec<String>,
    /// Years of experience.
    pub years_experience: u32,
    /// Highest degree.
    pub education: Education,
    /// Match percentage in `[0, 100]`.
    pub score: f64,
    /// Suitability tier derived from `score`.
    pub verdict: Verdict,
    /// Required skills not found in the resume, in required order.
    pub missing_skills: Vec<String>,
}

impl CandidateRecord {
    /// Human-readable verdict label, e.g. "High Suitability".
    pub fn verdict_label(&self) -> &'static str {
        self.verdict.label()
    }

    /// Experience formatted the way cards show it.
    pub fn experience_display(&self) -> String {
        match self.years_experience {
            1 => "1 year".to_string(),
            n => format!("{n} years"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_display_and_parse() {
        assert_eq!(Education::BTech.to_string(), "B.Tech");
        assert_eq!(Education::PhD.to_string(), "Ph.D");
        assert_eq!("M.S.".parse::<Education>().unwrap(), Education::MS);
        assert_eq!("ms".parse::<Education>().unwrap(), Education::MS);
        assert_eq!("B.E.".parse::<Education>().unwrap(), Education::BE);
        assert_eq!("phd".parse::<Education>().unwrap(), Education::PhD);
        assert!("MBA".parse::<Education>().is_err());
    }

    #[test]
    fn education_serializes_with_dotted_names() {
        let json = serde_json::to_string(&Education::MTech).unwrap();
        assert_eq!(json, "\"M.Tech\"");
        let back: Education = serde_json::from_str("\"B.E.\"").unwrap();
        assert_eq!(back, Education::BE);
    }

    #[test]
    fn experience_display_pluralizes() {
        let mut record = CandidateRecord {
            filename: "a.pdf".into(),
            display_name: "A".into(),
            email: "a@example.com".into(),
            extracted_skills: vec![],
            matched_skills: vec![],
            years_experience: 1,
            education: Education::BE,
            score: 0.0,
            verdict: Verdict::Low,
            missing_skills: vec![],
        };
        assert_eq!(record.experience_display(), "1 year");
        record.years_experience = 5;
        assert_eq!(record.experience_display(), "5 years");
        assert_eq!(record.verdict_label(), "Low Suitability");
    }
}

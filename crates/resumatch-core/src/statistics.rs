//! Aggregate statistics and chart data over a set of candidates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::CandidateRecord;
use crate::scoring::Verdict;

/// Default number of histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;
/// Default number of skills in the top-skills chart.
pub const DEFAULT_TOP_SKILLS: usize = 10;

/// One bar of the score histogram. `upper` is exclusive except for the last
/// bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// How often a skill was extracted across all candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFrequency {
    pub skill: String,
    pub count: usize,
}

/// Candidate count per verdict tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl VerdictCounts {
    pub fn get(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::High => self.high,
            Verdict::Medium => self.medium,
            Verdict::Low => self.low,
        }
    }
}

/// Everything the charts and summary tables need.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub candidate_count: usize,
    pub mean_score: f64,
    pub verdicts: VerdictCounts,
    pub histogram: Vec<HistogramBin>,
    pub top_skills: Vec<SkillFrequency>,
}

/// Equal-width histogram of `scores` spanning their min and max.
///
/// When every score is the same the range is widened to `value ± 0.5`.
/// Empty input or zero bins yield no bins.
pub fn score_histogram(scores: &[f64], bins: usize) -> Vec<HistogramBin> {
    if scores.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (mut lo, mut hi) = scores
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
            (lo.min(s), hi.max(s))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &s in scores {
        let idx = (((s - lo) / width).floor() as usize).min(bins - 1);
        histogram[idx].count += 1;
    }

    histogram
}

/// The `n` most frequently extracted skills, most frequent first. Ties keep
/// the order in which skills first appear.
pub fn top_skills(records: &[CandidateRecord], n: usize) -> Vec<SkillFrequency> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut order = 0usize;
    for record in records {
        for skill in &record.extracted_skills {
            counts
                .entry(skill.as_str())
                .and_modify(|(count, _)| *count += 1)
                .or_insert_with(|| {
                    order += 1;
                    (1, order)
                });
        }
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(skill, (count, first))| (skill, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(n)
        .map(|(skill, count, _)| SkillFrequency {
            skill: skill.to_string(),
            count,
        })
        .collect()
}

/// Compute all session statistics.
pub fn compute_session_stats(
    records: &[CandidateRecord],
    histogram_bins: usize,
    top_n: usize,
) -> SessionStats {
    let scores: Vec<f64> = records.iter().map(|r| r.score).collect();
    let mean_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    let mut verdicts = VerdictCounts::default();
    for record in records {
        match record.verdict {
            Verdict::High => verdicts.high += 1,
            Verdict::Medium => verdicts.medium += 1,
            Verdict::Low => verdicts.low += 1,
        }
    }

    SessionStats {
        candidate_count: records.len(),
        mean_score,
        verdicts,
        histogram: score_histogram(&scores, histogram_bins),
        top_skills: top_skills(records, top_n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::score_known_skills;
    use crate::model::{CandidateIdentity, Education};

    fn record(skills: &[&str], required: &[&str]) -> CandidateRecord {
        let identity = CandidateIdentity {
            display_name: "C".into(),
            email: "c@example.com".into(),
            years_experience: 1,
            education: Education::MS,
        };
        let skills = skills.iter().map(|s| s.to_string()).collect();
        score_known_skills("c.pdf", identity, skills, required)
    }

    #[test]
    fn histogram_empty_input() {
        assert!(score_histogram(&[], 10).is_empty());
        assert!(score_histogram(&[50.0], 0).is_empty());
    }

    #[test]
    fn histogram_spans_min_to_max() {
        let bins = score_histogram(&[0.0, 50.0, 100.0, 100.0], 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[9].upper, 100.0);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[5].count, 1);
        // The maximum lands in the last, closed bin.
        assert_eq!(bins[9].count, 2);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 4);
    }

    #[test]
    fn histogram_single_value_widens_range() {
        let bins = score_histogram(&[40.0, 40.0], 4);
        assert_eq!(bins[0].lower, 39.5);
        assert_eq!(bins[3].upper, 40.5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn top_skills_ranks_by_count_then_first_seen() {
        let records = vec![
            record(&["SQL", "Python"], &[]),
            record(&["Docker", "Python"], &[]),
            record(&["Docker", "Python", "AWS"], &[]),
        ];
        let top = top_skills(&records, 3);
        let names: Vec<&str> = top.iter().map(|f| f.skill.as_str()).collect();
        assert_eq!(names, vec!["Python", "Docker", "SQL"]);
        assert_eq!(top[0].count, 3);
        assert_eq!(top[1].count, 2);
    }

    #[test]
    fn session_stats_counts_verdicts() {
        let required = ["Python", "SQL"];
        let records = vec![
            record(&["Python", "SQL"], &required),
            record(&["Python"], &required),
            record(&[], &required),
        ];
        let stats = compute_session_stats(&records, 10, 5);
        assert_eq!(stats.candidate_count, 3);
        assert_eq!(stats.verdicts.get(Verdict::High), 1);
        assert_eq!(stats.verdicts.get(Verdict::Medium), 1);
        assert_eq!(stats.verdicts.get(Verdict::Low), 1);
        assert!((stats.mean_score - 50.0).abs() < f64::EPSILON);
        assert_eq!(stats.top_skills.len(), 2);
    }

    #[test]
    fn session_stats_for_no_candidates() {
        let stats = compute_session_stats(&[], 10, 10);
        assert_eq!(stats.candidate_count, 0);
        assert_eq!(stats.mean_score, 0.0);
        assert!(stats.histogram.is_empty());
        assert!(stats.top_skills.is_empty());
    }
}

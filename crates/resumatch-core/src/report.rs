//! Analysis report types with JSON export and Markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::CandidateRecord;
use crate::scoring::Verdict;
use crate::session::AnalysisSession;
use crate::statistics::{compute_session_stats, SessionStats};

/// A snapshot of a session, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Role the candidates were measured against.
    pub role: String,
    /// Required skills at the time of the snapshot.
    pub required_skills: Vec<String>,
    /// Candidates in session order.
    pub candidates: Vec<CandidateRecord>,
    /// Aggregate statistics and chart data.
    pub stats: SessionStats,
}

impl AnalysisReport {
    /// Snapshot `session` and compute its statistics.
    pub fn from_session(session: &AnalysisSession, histogram_bins: usize, top_n: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            role: session.role().to_string(),
            required_skills: session.required_skills().to_vec(),
            candidates: session.candidates().to_vec(),
            stats: compute_session_stats(session.candidates(), histogram_bins, top_n),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AnalysisReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Candidates ranked by score, best first. Equal scores keep session order.
    pub fn ranked(&self) -> Vec<&CandidateRecord> {
        let mut ranked: Vec<&CandidateRecord> = self.candidates.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Format the report as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## Resume analysis: {}\n\n", self.role));
        md.push_str(&format!(
            "**Required skills:** {}\n\n",
            if self.required_skills.is_empty() {
                "(none)".to_string()
            } else {
                self.required_skills.join(", ")
            }
        ));
        md.push_str(&format!(
            "**Summary:** {} candidates, mean score {:.1}%, {} high / {} medium / {} low\n\n",
            self.stats.candidate_count,
            self.stats.mean_score,
            self.stats.verdicts.get(Verdict::High),
            self.stats.verdicts.get(Verdict::Medium),
            self.stats.verdicts.get(Verdict::Low),
        ));

        if !self.candidates.is_empty() {
            md.push_str("### Candidates\n\n");
            md.push_str("| Candidate | File | Score | Verdict | Matched | Missing |\n");
            md.push_str("|-----------|------|-------|---------|---------|---------|\n");
            for c in &self.candidates {
                md.push_str(&format!(
                    "| {} | {} | {:.1}% | {} | {} | {} |\n",
                    c.display_name,
                    c.filename,
                    c.score,
                    c.verdict_label(),
                    join_or_dash(&c.matched_skills),
                    join_or_dash(&c.missing_skills),
                ));
            }
            md.push('\n');
        }

        if !self.stats.top_skills.is_empty() {
            md.push_str("### Top skills\n\n");
            md.push_str("| Skill | Candidates |\n");
            md.push_str("|-------|------------|\n");
            for f in &self.stats.top_skills {
                md.push_str(&format!("| {} | {} |\n", f.skill, f.count));
            }
        }

        md
    }
}

fn join_or_dash(skills: &[String]) -> String {
    if skills.is_empty() {
        "-".to_string()
    } else {
        skills.join(", ")
    }
}

//! In-memory analysis session.
//!
//! A session holds the selected role, the required skills, and every
//! candidate scored so far. It is owned by the caller and passed by `&mut`
//! into each action; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::analysis::build_record;
use crate::error::AnalysisError;
use crate::extractor::SkillExtractor;
use crate::intake::ResumeFile;
use crate::model::CandidateRecord;
use crate::placeholder::IdentityGenerator;
use crate::samples::sample_records;

/// Ordered candidate list plus the current requirements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSession {
    role: String,
    required_skills: Vec<String>,
    candidates: Vec<CandidateRecord>,
}

impl AnalysisSession {
    pub fn new(role: impl Into<String>, required_skills: Vec<String>) -> Self {
        Self {
            role: role.into(),
            required_skills,
            candidates: Vec::new(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn required_skills(&self) -> &[String] {
        &self.required_skills
    }

    pub fn candidates(&self) -> &[CandidateRecord] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Change the role and required skills for future analyses.
    ///
    /// Candidates already scored keep their scores.
    pub fn set_requirements(&mut self, role: impl Into<String>, required_skills: Vec<String>) {
        self.role = role.into();
        self.required_skills = required_skills;
    }

    /// Score a batch of resumes in upload order and append them.
    ///
    /// Returns the number of records added. An empty batch is rejected with
    /// [`AnalysisError::NoFilesUploaded`] and leaves the session untouched.
    pub fn append_batch(
        &mut self,
        files: &[ResumeFile],
        extractor: &SkillExtractor,
        identities: &mut dyn IdentityGenerator,
    ) -> Result<usize, AnalysisError> {
        if files.is_empty() {
            return Err(AnalysisError::NoFilesUploaded);
        }

        for file in files {
            let identity = identities.next_identity(self.candidates.len() + 1);
            let record = build_record(
                &file.filename,
                &file.bytes,
                &self.required_skills,
                extractor,
                identity,
            );
            tracing::info!(
                "scored {} as {} ({:.1}%, {})",
                record.filename,
                record.display_name,
                record.score,
                record.verdict_label()
            );
            self.candidates.push(record);
        }

        Ok(files.len())
    }

    /// Replace every candidate with `records`.
    pub fn replace_all(&mut self, records: Vec<CandidateRecord>) {
        tracing::debug!(
            "replacing {} candidate(s) with {}",
            self.candidates.len(),
            records.len()
        );
        self.candidates = records;
    }

    /// Replace the candidates with the built-in samples, scored against the
    /// current required skills.
    pub fn load_sample_data(&mut self) {
        let records = sample_records(&self.required_skills);
        self.replace_all(records);
    }

    /// Drop every candidate, keeping the requirements.
    pub fn clear(&mut self) {
        self.candidates.clear();
    }
}

//! Analysis error types.
//!
//! The scoring functions themselves are total and never fail. These errors
//! only come from the boundary: picking a role, editing the required skill
//! list, or asking for an analysis with nothing to analyze.

use thiserror::Error;

/// Errors that can occur while preparing or running an analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// An analysis was requested with zero resumes.
    #[error("no resumes uploaded, add at least one resume to analyze")]
    NoFilesUploaded,

    /// The requested role is not in the skill catalog.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A requested skill is not part of the catalog vocabulary.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),
}

impl AnalysisError {
    /// Returns `true` if this should be shown to the user as a warning
    /// rather than aborting the session.
    pub fn is_warning(&self) -> bool {
        matches!(self, AnalysisError::NoFilesUploaded)
    }
}

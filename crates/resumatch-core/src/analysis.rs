//! Turning one resume into a scored `CandidateRecord`.

use crate::extractor::SkillExtractor;
use crate::model::{CandidateIdentity, CandidateRecord};
use crate::scoring::{matched_skills, missing_skills, score, Verdict};

/// Extract skills from raw resume bytes and score them against
/// `required_skills`.
pub fn build_record<S: AsRef<str>>(
    filename: &str,
    raw_content: &[u8],
    required_skills: &[S],
    extractor: &SkillExtractor,
    identity: CandidateIdentity,
) -> CandidateRecord {
    let extracted = extractor.extract_bytes(raw_content);
    tracing::debug!(
        "{filename}: extracted {} skill(s) in {} mode",
        extracted.len(),
        extractor.mode()
    );
    score_known_skills(filename, identity, extracted, required_skills)
}

/// Score a candidate whose skills are already known.
pub fn score_known_skills<S: AsRef<str>>(
    filename: &str,
    identity: CandidateIdentity,
    extracted_skills: Vec<String>,
    required_skills: &[S],
) -> CandidateRecord {
    let score = score(&extracted_skills, required_skills);
    let verdict = Verdict::from_score(score);
    let matched_skills = matched_skills(&extracted_skills, required_skills);
    let missing_skills = missing_skills(required_skills, &extracted_skills);

    CandidateRecord {
        filename: filename.to_string(),
        display_name: identity.display_name,
        email: identity.email,
        extracted_skills,
        matched_skills,
        years_experience: identity.years_experience,
        education: identity.education,
        score,
        verdict,
        missing_skills,
    }
}

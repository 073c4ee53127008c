//! Built-in sample candidates for demos.

use crate::analysis::score_known_skills;
use crate::model::{CandidateIdentity, CandidateRecord, Education};

struct SampleResume {
    filename: &'static str,
    name: &'static str,
    email: &'static str,
    skills: &'static [&'static str],
    years_experience: u32,
    education: Education,
}

const SAMPLES: [SampleResume; 3] = [
    SampleResume {
        filename: "john_doe.pdf",
        name: "John Doe",
        email: "john.doe@example.com",
        skills: &["Python", "Machine Learning", "Data Analysis", "SQL", "Statistics"],
        years_experience: 5,
        education: Education::MS,
    },
    SampleResume {
        filename: "jane_smith.pdf",
        name: "Jane Smith",
        email: "jane.smith@example.com",
        skills: &["Python", "Data Analysis", "SQL", "Data Visualization"],
        years_experience: 3,
        education: Education::BTech,
    },
    SampleResume {
        filename: "robert_johnson.pdf",
        name: "Robert Johnson",
        email: "robert.j@example.com",
        skills: &["JavaScript", "HTML", "CSS", "React"],
        years_experience: 2,
        education: Education::BE,
    },
];

/// The sample candidates scored against `required_skills`.
pub fn sample_records<S: AsRef<str>>(required_skills: &[S]) -> Vec<CandidateRecord> {
    SAMPLES
        .iter()
        .map(|sample| {
            let identity = CandidateIdentity {
                display_name: sample.name.to_string(),
                email: sample.email.to_string(),
                years_experience: sample.years_experience,
                education: sample.education,
            };
            let skills = sample.skills.iter().map(|s| s.to_string()).collect();
            score_known_skills(sample.filename, identity, skills, required_skills)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SkillCatalog;
    use crate::scoring::Verdict;

    #[test]
    fn samples_against_data_scientist() {
        let required = SkillCatalog::builtin().default_skills("Data Scientist");
        let records = sample_records(&required);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].display_name, "John Doe");
        assert!((records[0].score - 83.333).abs() < 0.01);
        assert_eq!(records[0].verdict, Verdict::High);
        assert_eq!(records[0].missing_skills, vec!["Data Visualization"]);

        assert!((records[1].score - 66.666).abs() < 0.01);
        assert_eq!(records[1].verdict, Verdict::Medium);

        assert_eq!(records[2].score, 0.0);
        assert_eq!(records[2].verdict, Verdict::Low);
        assert_eq!(records[2].missing_skills.len(), 6);
    }

    #[test]
    fn samples_against_frontend() {
        let required = SkillCatalog::builtin().default_skills("Frontend Developer");
        let records = sample_records(&required);
        assert_eq!(records[2].filename, "robert_johnson.pdf");
        assert!((records[2].score - 66.666).abs() < 0.01);
        assert_eq!(records[2].missing_skills, vec!["Angular", "Vue"]);
    }
}

//! End-to-end session tests: intake, extraction, scoring, statistics and
//! rendering, driven through the library crates.

use resumatch_core::catalog::SkillCatalog;
use resumatch_core::extractor::{MatchMode, SkillExtractor};
use resumatch_core::intake::{collect_resumes, ResumeFile};
use resumatch_core::model::Education;
use resumatch_core::placeholder::{FixedIdentityGenerator, SeededIdentityGenerator};
use resumatch_core::report::AnalysisReport;
use resumatch_core::scoring::Verdict;
use resumatch_core::session::AnalysisSession;
use resumatch_core::AnalysisError;
use resumatch_report::html::generate_html;

fn identities() -> FixedIdentityGenerator {
    FixedIdentityGenerator {
        years_experience: 4,
        education: Education::PhD,
    }
}

fn data_scientist_session(catalog: &SkillCatalog) -> AnalysisSession {
    AnalysisSession::new("Data Scientist", catalog.default_skills("Data Scientist"))
}

#[test]
fn uploads_accumulate_across_batches() {
    let catalog = SkillCatalog::builtin();
    let extractor = SkillExtractor::new(catalog.vocabulary(), MatchMode::Substring);
    let mut session = data_scientist_session(&catalog);
    let mut ids = identities();

    let first = vec![ResumeFile::new("a.txt", "Python, SQL, Statistics")];
    let second = vec![
        ResumeFile::new("b.txt", "react and css"),
        ResumeFile::new("c.txt", "Machine Learning, Data Analysis, Data Visualization"),
    ];

    assert_eq!(session.append_batch(&first, &extractor, &mut ids).unwrap(), 1);
    assert_eq!(session.append_batch(&second, &extractor, &mut ids).unwrap(), 2);

    let names: Vec<&str> = session
        .candidates()
        .iter()
        .map(|c| c.display_name.as_str())
        .collect();
    assert_eq!(names, vec!["Candidate 1", "Candidate 2", "Candidate 3"]);

    let verdicts: Vec<Verdict> = session.candidates().iter().map(|c| c.verdict).collect();
    assert_eq!(verdicts, vec![Verdict::Medium, Verdict::Low, Verdict::Medium]);
}

#[test]
fn empty_batch_is_rejected_without_side_effects() {
    let catalog = SkillCatalog::builtin();
    let extractor = SkillExtractor::new(catalog.vocabulary(), MatchMode::Substring);
    let mut session = data_scientist_session(&catalog);
    session.load_sample_data();

    let err = session
        .append_batch(&[], &extractor, &mut identities())
        .unwrap_err();
    assert_eq!(err, AnalysisError::NoFilesUploaded);
    assert_eq!(session.len(), 3);
}

#[test]
fn sample_data_replaces_uploads() {
    let catalog = SkillCatalog::builtin();
    let extractor = SkillExtractor::new(catalog.vocabulary(), MatchMode::Substring);
    let mut session = data_scientist_session(&catalog);

    let files = vec![ResumeFile::new("mine.txt", "python")];
    session
        .append_batch(&files, &extractor, &mut identities())
        .unwrap();
    session.load_sample_data();

    assert_eq!(session.len(), 3);
    assert!(session.candidates().iter().all(|c| c.filename != "mine.txt"));
}

#[test]
fn requirement_changes_only_affect_later_batches() {
    let catalog = SkillCatalog::builtin();
    let extractor = SkillExtractor::new(catalog.vocabulary(), MatchMode::Substring);
    let mut session = data_scientist_session(&catalog);
    let mut ids = identities();

    let files = vec![ResumeFile::new("cv.txt", "python sql")];
    session.append_batch(&files, &extractor, &mut ids).unwrap();

    let required = catalog
        .required_skills("Backend Developer", &["Python"], &["Java", "Node.js", "REST API", "Docker"])
        .unwrap();
    session.set_requirements("Backend Developer", required);
    session.append_batch(&files, &extractor, &mut ids).unwrap();

    let scores: Vec<f64> = session.candidates().iter().map(|c| c.score).collect();
    assert!((scores[0] - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(scores[1], 100.0);
}

#[test]
fn word_boundary_mode_ignores_embedded_skills() {
    let catalog = SkillCatalog::builtin();
    let required = vec!["Java".to_string(), "JavaScript".to_string()];
    let files = vec![ResumeFile::new("cv.txt", "JavaScript only")];

    let mut substring = AnalysisSession::new("Custom", required.clone());
    let extractor = SkillExtractor::new(catalog.vocabulary(), MatchMode::Substring);
    substring
        .append_batch(&files, &extractor, &mut identities())
        .unwrap();
    assert_eq!(substring.candidates()[0].score, 100.0);

    let mut bounded = AnalysisSession::new("Custom", required);
    let extractor = SkillExtractor::new(catalog.vocabulary(), MatchMode::WordBoundary);
    bounded
        .append_batch(&files, &extractor, &mut identities())
        .unwrap();
    assert_eq!(bounded.candidates()[0].score, 50.0);
    assert_eq!(bounded.candidates()[0].missing_skills, vec!["Java"]);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let catalog = SkillCatalog::builtin();
    let extractor = SkillExtractor::new(catalog.vocabulary(), MatchMode::Substring);
    let files: Vec<ResumeFile> = (0..5)
        .map(|i| ResumeFile::new(format!("{i}.txt"), "docker"))
        .collect();

    let run = || {
        let mut session = data_scientist_session(&catalog);
        let mut ids = SeededIdentityGenerator::new(99);
        session.append_batch(&files, &extractor, &mut ids).unwrap();
        session
            .candidates()
            .iter()
            .map(|c| (c.years_experience, c.education))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn files_on_disk_to_html_report() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("one.txt"), "Python, Machine Learning, SQL").unwrap();
    std::fs::write(dir.path().join("two.docx"), b"PK\x03\x04 statistics <b>").unwrap();
    std::fs::write(dir.path().join("skip.png"), b"\x89PNG").unwrap();

    let catalog = SkillCatalog::builtin();
    let extractor = SkillExtractor::new(catalog.vocabulary(), MatchMode::Substring);
    let mut session = data_scientist_session(&catalog);

    let files = collect_resumes(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(files.len(), 2);
    session
        .append_batch(&files, &extractor, &mut identities())
        .unwrap();

    let report = AnalysisReport::from_session(&session, 10, 10);
    assert_eq!(report.stats.candidate_count, 2);
    assert_eq!(report.stats.verdicts.get(Verdict::Medium), 1);
    assert_eq!(report.stats.verdicts.get(Verdict::Low), 1);

    let html = generate_html(&report);
    assert!(html.contains("one.txt"));
    assert!(html.contains("two.docx"));
    assert!(!html.contains("skip.png"));
}

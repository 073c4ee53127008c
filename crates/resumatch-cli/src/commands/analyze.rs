//! The `resumatch analyze` command.

use std::path::PathBuf;

use anyhow::Result;

use resumatch_core::extractor::SkillExtractor;
use resumatch_core::intake::collect_resumes;
use resumatch_core::placeholder::SeededIdentityGenerator;
use resumatch_core::report::AnalysisReport;
use resumatch_core::session::AnalysisSession;

use super::{
    load_setup, print_candidates, print_charts, print_summary, resolve_match_mode,
    resolve_requirements, write_reports,
};

/// Arguments of `resumatch analyze`, as parsed by clap.
pub struct AnalyzeArgs {
    pub files: Vec<PathBuf>,
    pub role: Option<String>,
    pub skills: Option<String>,
    pub add_skill: Vec<String>,
    pub remove_skill: Vec<String>,
    pub with_samples: bool,
    pub match_mode: Option<String>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub config: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let setup = load_setup(args.config.as_deref())?;
    let config = &setup.config;

    let role = args.role.as_deref().unwrap_or(&config.default_role);
    let (role, required) = resolve_requirements(
        &setup.catalog,
        role,
        args.skills.as_deref(),
        &args.add_skill,
        &args.remove_skill,
    )?;

    let mode = resolve_match_mode(args.match_mode.as_deref(), config)?;
    let extractor = SkillExtractor::new(setup.catalog.vocabulary(), mode);
    let mut identities = SeededIdentityGenerator::new(args.seed.unwrap_or(config.seed));

    let mut session = AnalysisSession::new(role, required);
    if args.with_samples {
        session.load_sample_data();
    }

    let files = collect_resumes(&args.files)?;
    // Samples alone are a complete analysis; otherwise there must be files.
    if !(files.is_empty() && args.with_samples) {
        session.append_batch(&files, &extractor, &mut identities)?;
    }

    eprintln!(
        "Analyzing {} resume(s) for {} ({} match)",
        session.len(),
        session.role(),
        mode
    );
    eprintln!("Required skills: {}", session.required_skills().join(", "));
    eprintln!();

    let report = AnalysisReport::from_session(&session, config.histogram_bins, config.top_skills);
    print_candidates(&report);
    print_summary(&report);
    println!();
    print_charts(&report.stats);

    if args.format.is_some() || args.output.is_some() {
        let output = args.output.unwrap_or_else(|| config.output_dir.clone());
        let format = args.format.as_deref().unwrap_or("json");
        write_reports(&report, &output, format)?;
    }

    Ok(())
}

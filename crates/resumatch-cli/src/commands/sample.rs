//! The `resumatch sample` command.

use std::path::PathBuf;

use anyhow::Result;

use resumatch_core::report::AnalysisReport;
use resumatch_core::session::AnalysisSession;

use super::{load_setup, print_candidates, print_charts, print_summary, resolve_requirements, write_reports};

pub fn execute(
    role: Option<String>,
    output: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let setup = load_setup(config_path.as_deref())?;
    let config = &setup.config;

    let role = role.as_deref().unwrap_or(&config.default_role);
    let (role, required) = resolve_requirements(&setup.catalog, role, None, &[], &[])?;

    let mut session = AnalysisSession::new(role, required);
    session.load_sample_data();
    eprintln!("Sample data loaded for {}", session.role());
    eprintln!();

    let report = AnalysisReport::from_session(&session, config.histogram_bins, config.top_skills);
    print_candidates(&report);
    print_summary(&report);
    println!();
    print_charts(&report.stats);

    if format.is_some() || output.is_some() {
        let output = output.unwrap_or_else(|| config.output_dir.clone());
        write_reports(&report, &output, format.as_deref().unwrap_or("json"))?;
    }

    Ok(())
}

//! The `resumatch render` command.

use std::path::PathBuf;

use anyhow::Result;

use resumatch_core::report::AnalysisReport;
use resumatch_report::html::write_html_report;

pub fn execute(report_path: PathBuf, output: PathBuf, format: String) -> Result<()> {
    let report = AnalysisReport::load_json(&report_path)?;

    match format.as_str() {
        "html" => write_html_report(&report, &output)?,
        "markdown" | "md" => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, report.to_markdown())?;
        }
        other => anyhow::bail!("unknown format '{other}', expected html or markdown"),
    }

    println!("Rendered {} to {}", report_path.display(), output.display());
    Ok(())
}

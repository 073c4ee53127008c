pub mod analyze;
pub mod catalog;
pub mod init;
pub mod render;
pub mod sample;
pub mod shell;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::{Cell, Table};

use resumatch_core::catalog::SkillCatalog;
use resumatch_core::AnalysisError;
use resumatch_core::config::{load_config_from, ResumatchConfig};
use resumatch_core::extractor::MatchMode;
use resumatch_core::report::AnalysisReport;
use resumatch_core::scoring::Verdict;
use resumatch_core::statistics::SessionStats;
use resumatch_report::html::write_html_report;

/// Loaded configuration and the catalog it points at.
pub struct Setup {
    pub config: ResumatchConfig,
    pub catalog: SkillCatalog,
}

pub fn load_setup(config_path: Option<&Path>) -> Result<Setup> {
    let config = load_config_from(config_path)?;
    let catalog = config.load_catalog()?;
    tracing::debug!(
        "catalog loaded: {} roles, {} skills",
        catalog.roles().len(),
        catalog.vocabulary().len()
    );
    Ok(Setup { config, catalog })
}

/// Split comma-separated values, dropping blanks.
pub fn split_list<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.as_ref().split(','))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Resolve the role name and its required skills.
///
/// `skills` replaces the role's defaults when given; `add` and `remove`
/// are applied afterwards. Every value may be comma-separated.
pub fn resolve_requirements(
    catalog: &SkillCatalog,
    role: &str,
    skills: Option<&str>,
    add: &[String],
    remove: &[String],
) -> Result<(String, Vec<String>)> {
    let profile = catalog
        .role(role)
        .ok_or_else(|| AnalysisError::UnknownRole(role.to_string()))?;
    let add = split_list(add);
    let remove = split_list(remove);

    let required = match skills {
        Some(list) => {
            let mut required = catalog.resolve_skills(&split_list(&[list]))?;
            for skill in catalog.resolve_skills(&add)? {
                if !required.contains(&skill) {
                    required.push(skill);
                }
            }
            let removed = catalog.resolve_skills(&remove)?;
            required.retain(|s| !removed.contains(s));
            required
        }
        None => catalog.required_skills(&profile.name, &add, &remove)?,
    };

    Ok((profile.name.clone(), required))
}

/// The command-line match mode, falling back to the configured one.
pub fn resolve_match_mode(flag: Option<&str>, config: &ResumatchConfig) -> Result<MatchMode> {
    match flag {
        Some(mode) => mode.parse().map_err(|e: String| anyhow::anyhow!("{}", e)),
        None => Ok(config.match_mode),
    }
}

/// Print one text card per candidate.
pub fn print_candidates(report: &AnalysisReport) {
    if report.candidates.is_empty() {
        println!("No resumes analyzed yet.");
        return;
    }

    for (i, c) in report.candidates.iter().enumerate() {
        println!(
            "{}. {} ({}) - Score: {:.1}% [{}]",
            i + 1,
            c.display_name,
            c.filename,
            c.score,
            c.verdict_label()
        );
        println!(
            "   Experience: {} | Education: {} | Email: {}",
            c.experience_display(),
            c.education,
            c.email
        );
        println!("   Matched: {}", join_or_none(&c.matched_skills));
        if !c.missing_skills.is_empty() {
            println!("   Missing: {}", c.missing_skills.join(", "));
        }
    }
}

/// Print the summary table.
pub fn print_summary(report: &AnalysisReport) {
    let mut table = Table::new();
    table.set_header(vec!["Candidate", "File", "Score", "Verdict", "Missing"]);

    for c in report.ranked() {
        table.add_row(vec![
            Cell::new(&c.display_name),
            Cell::new(&c.filename),
            Cell::new(format!("{:.1}%", c.score)),
            Cell::new(c.verdict_label()),
            Cell::new(c.missing_skills.len()),
        ]);
    }

    println!("\n{table}");
    println!(
        "{} candidate(s), mean score {:.1}% | High: {} Medium: {} Low: {}",
        report.stats.candidate_count,
        report.stats.mean_score,
        report.stats.verdicts.get(Verdict::High),
        report.stats.verdicts.get(Verdict::Medium),
        report.stats.verdicts.get(Verdict::Low),
    );
}

/// Print the score histogram and top skills as text bars.
pub fn print_charts(stats: &SessionStats) {
    if stats.candidate_count == 0 {
        println!("No data to chart.");
        return;
    }

    println!("Distribution of Relevance Scores");
    for bin in &stats.histogram {
        println!(
            "  {:>5.1} - {:>5.1} | {} {}",
            bin.lower,
            bin.upper,
            "#".repeat(bin.count),
            bin.count
        );
    }

    println!("Top Skills in Resumes");
    let width = stats
        .top_skills
        .iter()
        .map(|f| f.skill.len())
        .max()
        .unwrap_or(0);
    for f in &stats.top_skills {
        println!(
            "  {:<width$} | {} {}",
            f.skill,
            "#".repeat(f.count),
            f.count
        );
    }
}

/// Report formats accepted by `--format`, besides `all`.
const REPORT_FORMATS: [&str; 4] = ["json", "html", "markdown", "md"];

/// Write the report in each requested format into `output`.
///
/// Every format is checked before anything is written.
pub fn write_reports(report: &AnalysisReport, output: &Path, format: &str) -> Result<Vec<PathBuf>> {
    let formats: Vec<&str> = if format.trim() == "all" {
        vec!["json", "html", "markdown"]
    } else {
        format
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect()
    };
    anyhow::ensure!(!formats.is_empty(), "no report format given");
    if let Some(fmt) = formats.iter().copied().find(|f| !REPORT_FORMATS.contains(f)) {
        anyhow::bail!("unknown format '{fmt}', expected json, html, markdown or all");
    }

    std::fs::create_dir_all(output)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");

    let mut written = Vec::new();
    for fmt in formats {
        let path = match fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
                path
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(report, &path)?;
                eprintln!("HTML report: {}", path.display());
                path
            }
            _ => {
                let path = output.join(format!("report-{timestamp}.md"));
                std::fs::write(&path, report.to_markdown())?;
                eprintln!("Markdown report: {}", path.display());
                path
            }
        };
        written.push(path);
    }

    Ok(written)
}

fn join_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        "none".to_string()
    } else {
        skills.join(", ")
    }
}

//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined: one card per
//! candidate with matched and missing skill chips, a score histogram, and a
//! top-skills bar chart.

use anyhow::Result;
use std::path::Path;

use resumatch_core::model::CandidateRecord;
use resumatch_core::report::AnalysisReport;
use resumatch_core::statistics::{HistogramBin, SkillFrequency};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML report from an analysis report.
pub fn generate_html(report: &AnalysisReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Resume Relevance Check - {}</title>\n",
        html_escape(&report.role)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1 class=\"main-header\">Resume Relevance Check</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Role: <strong>{}</strong> | {} candidates | {}</p>\n",
        html_escape(&report.role),
        report.stats.candidate_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Job requirements
    html.push_str("<section class=\"requirements\">\n");
    html.push_str("<h2 class=\"section-header\">Job Requirements</h2>\n");
    if report.required_skills.is_empty() {
        html.push_str("<p class=\"meta\">No required skills selected.</p>\n");
    } else {
        html.push_str("<div class=\"highlight\">\n");
        for skill in &report.required_skills {
            html.push_str(&chip(skill, "present-skill"));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");

    // Candidate cards
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2 class=\"section-header\">Analysis Results</h2>\n");
    if report.candidates.is_empty() {
        html.push_str("<p class=\"meta\">No resumes analyzed yet.</p>\n");
    }
    for candidate in &report.candidates {
        html.push_str(&candidate_card(candidate));
    }
    html.push_str("</section>\n");

    // Charts
    if !report.candidates.is_empty() {
        html.push_str("<section class=\"dashboard\">\n");
        html.push_str("<h2 class=\"section-header\">Performance Analytics</h2>\n");
        html.push_str("<div class=\"charts\">\n");
        html.push_str("<figure>\n<figcaption>Distribution of Relevance Scores</figcaption>\n");
        html.push_str(&generate_histogram(&report.stats.histogram));
        html.push_str("</figure>\n");
        html.push_str("<figure>\n<figcaption>Top Skills in Resumes</figcaption>\n");
        html.push_str(&generate_skill_chart(&report.stats.top_skills));
        html.push_str("</figure>\n");
        html.push_str("</div>\n");

        // Sortable overview table
        html.push_str("<table class=\"results-table\" id=\"results\">\n");
        html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Candidate</th><th onclick=\"sortTable(1)\">File</th><th onclick=\"sortTable(2)\">Score</th><th onclick=\"sortTable(3)\">Verdict</th></tr></thead>\n");
        html.push_str("<tbody>\n");
        for c in &report.candidates {
            html.push_str(&format!(
                "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{:.1}%</td><td>{}</td></tr>\n",
                c.verdict.css_class(),
                html_escape(&c.display_name),
                html_escape(&c.filename),
                c.score,
                c.verdict_label()
            ));
        }
        html.push_str("</tbody></table>\n");
        html.push_str("</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    // JavaScript for sorting
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn chip(skill: &str, class: &str) -> String {
    format!(
        "<span class=\"skill-chip {}\">{}</span>\n",
        class,
        html_escape(skill)
    )
}

fn candidate_card(c: &CandidateRecord) -> String {
    let mut card = String::new();

    card.push_str("<details class=\"candidate\" open>\n");
    card.push_str(&format!(
        "<summary>{} - Score: {:.1}%</summary>\n",
        html_escape(&c.display_name),
        c.score
    ));
    card.push_str("<div class=\"columns\">\n<div>\n");
    card.push_str(&format!(
        "<div class=\"score-card {}\"><h3>{:.1}%</h3><p>{}</p></div>\n",
        c.verdict.css_class(),
        c.score,
        c.verdict_label()
    ));
    card.push_str(&format!(
        "<p><strong>File:</strong> {}</p>\n<p><strong>Experience:</strong> {}</p>\n<p><strong>Education:</strong> {}</p>\n<p><strong>Email:</strong> {}</p>\n",
        html_escape(&c.filename),
        c.experience_display(),
        c.education,
        html_escape(&c.email)
    ));
    card.push_str("</div>\n<div>\n");

    card.push_str("<p><strong>Matched Skills:</strong></p>\n");
    if c.matched_skills.is_empty() {
        card.push_str("<p class=\"meta\">None</p>\n");
    }
    for skill in &c.matched_skills {
        card.push_str(&chip(skill, "present-skill"));
    }

    if !c.missing_skills.is_empty() {
        card.push_str("<p><strong>Missing Skills:</strong></p>\n");
        for skill in &c.missing_skills {
            card.push_str(&chip(skill, "missing-skill"));
        }
    }

    card.push_str("</div>\n</div>\n</details>\n");
    card
}

fn generate_histogram(bins: &[HistogramBin]) -> String {
    let chart_height = 200;
    let bar_width = 36;
    let gap = 4;
    let axis = 30;

    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    let width = axis + bins.len() * (bar_width + gap) + gap;
    let height = chart_height + axis;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        width, height
    );

    for (i, bin) in bins.iter().enumerate() {
        let bar_height = bin.count * chart_height / max_count;
        let x = axis + gap + i * (bar_width + gap);
        let y = chart_height - bar_height;

        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#1f77b4\" stroke=\"black\" opacity=\"0.7\"><title>{:.1}–{:.1}%: {}</title></rect>\n",
            x, y, bar_width, bar_height, bin.lower, bin.upper, bin.count
        ));
        if bin.count > 0 {
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" font-size=\"11\" fill=\"currentColor\" text-anchor=\"middle\">{}</text>\n",
                x + bar_width / 2,
                y.saturating_sub(4).max(10),
                bin.count
            ));
        }
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"currentColor\" text-anchor=\"middle\">{:.0}</text>\n",
            x + bar_width / 2,
            chart_height + 14,
            bin.lower
        ));
    }

    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" text-anchor=\"middle\">Relevance Score (%)</text>\n",
        width / 2,
        height - 2
    ));
    svg.push_str("</svg>\n");
    svg
}

fn generate_skill_chart(skills: &[SkillFrequency]) -> String {
    let bar_height = 24;
    let max_width = 300;
    let padding = 8;
    let label_width = 160;

    let max_count = skills.iter().map(|s| s.count).max().unwrap_or(0).max(1);
    let total_height = skills.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, freq) in skills.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = freq.count * max_width / max_count;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"13\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(&freq.skill)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#1f77b4\" rx=\"4\"/>\n",
            label_width, y, width, bar_height
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            freq.count
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --accent: #1f77b4; --panel: #f0f2f6; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --panel: #1f2937; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
.main-header { font-size: 2.5rem; color: var(--accent); margin-bottom: 1rem; }
.section-header { font-size: 1.6rem; color: var(--accent); border-bottom: 2px solid var(--accent); padding-bottom: 0.5rem; margin-top: 2rem; }
.meta { color: #6b7280; }
.highlight { background: var(--panel); padding: 15px; border-radius: 5px; margin: 10px 0; }
.candidate { border: 1px solid var(--border); border-radius: 8px; margin: 1rem 0; padding: 0.5rem 1rem; }
.candidate summary { cursor: pointer; font-weight: bold; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.score-card { text-align: center; padding: 20px; border-radius: 10px; margin: 10px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
.high-score { background-color: #d4edda; color: #155724; }
.medium-score { background-color: #fff3cd; color: #856404; }
.low-score { background-color: #f8d7da; color: #721c24; }
.skill-chip { display: inline-block; padding: 5px 15px; margin: 5px; border-radius: 20px; font-weight: 500; }
.present-skill { background-color: #d4edda; color: #155724; }
.missing-skill { background-color: #f8d7da; color: #721c24; }
.charts { display: flex; flex-wrap: wrap; gap: 2rem; }
figcaption { font-weight: bold; margin-bottom: 0.5rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); cursor: pointer; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('results');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  const numeric = col == 2;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    if (numeric) {
      return asc ? parseFloat(va) - parseFloat(vb) : parseFloat(vb) - parseFloat(va);
    }
    return asc ? va.localeCompare(vb) : vb.localeCompare(va);
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use resumatch_core::catalog::SkillCatalog;
    use resumatch_core::session::AnalysisSession;
    use resumatch_core::statistics::{SessionStats, VerdictCounts};

    fn make_test_report() -> AnalysisReport {
        let required = SkillCatalog::builtin().default_skills("Data Scientist");
        let mut session = AnalysisSession::new("Data Scientist", required);
        session.load_sample_data();
        AnalysisReport::from_session(&session, 10, 10)
    }

    #[test]
    fn html_report_contains_required_elements() {
        let report = make_test_report();
        let html = generate_html(&report);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Data Scientist"));
        assert!(html.contains("John Doe - Score: 83.3%"));
        assert!(html.contains("score-card high-score"));
        assert!(html.contains("score-card low-score"));
        assert!(html.contains("skill-chip missing-skill\">Data Visualization"));
        assert!(html.contains("Distribution of Relevance Scores"));
        assert!(html.contains("Top Skills in Resumes"));
    }

    #[test]
    fn html_report_escapes_untrusted_text() {
        let mut report = make_test_report();
        report.candidates[0].filename = "<script>alert(1)</script>.pdf".into();
        let html = generate_html(&report);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;.pdf"));
    }

    #[test]
    fn empty_report_has_no_charts() {
        let report = AnalysisReport {
            id: uuid::Uuid::nil(),
            created_at: chrono::Utc::now(),
            role: "Frontend Developer".into(),
            required_skills: vec![],
            candidates: vec![],
            stats: SessionStats {
                candidate_count: 0,
                mean_score: 0.0,
                verdicts: VerdictCounts::default(),
                histogram: vec![],
                top_skills: vec![],
            },
        };
        let html = generate_html(&report);
        assert!(html.contains("No resumes analyzed yet."));
        assert!(html.contains("No required skills selected."));
        assert!(!html.contains("Performance Analytics"));
    }

    #[test]
    fn skill_chart_scales_to_most_frequent() {
        let svg = generate_skill_chart(&[
            SkillFrequency {
                skill: "Python".into(),
                count: 4,
            },
            SkillFrequency {
                skill: "SQL".into(),
                count: 2,
            },
        ]);
        assert!(svg.contains("width=\"300\""));
        assert!(svg.contains("width=\"150\""));
        assert!(svg.contains(">Python<"));
    }

    #[test]
    fn histogram_draws_one_bar_per_bin() {
        let bins = vec![
            HistogramBin {
                lower: 0.0,
                upper: 50.0,
                count: 1,
            },
            HistogramBin {
                lower: 50.0,
                upper: 100.0,
                count: 3,
            },
        ];
        let svg = generate_histogram(&bins);
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("Relevance Score (%)"));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_test_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}

//! resumatch-report: HTML rendering of analysis reports.
//!
//! Markdown and JSON output live on `AnalysisReport` in `resumatch-core`.

pub mod html;

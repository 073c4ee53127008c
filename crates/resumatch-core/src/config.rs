//! resumatch configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::{load_catalog, SkillCatalog};
use crate::extractor::MatchMode;
use crate::placeholder::DEFAULT_SEED;
use crate::statistics::{DEFAULT_HISTOGRAM_BINS, DEFAULT_TOP_SKILLS};

/// Top-level resumatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumatchConfig {
    /// Custom catalog TOML. The built-in catalog is used when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Role selected when none is given on the command line.
    #[serde(default = "default_role")]
    pub default_role: String,
    /// How skills are matched against resume text.
    #[serde(default)]
    pub match_mode: MatchMode,
    /// Seed for placeholder candidate identities.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Number of skills shown in the top-skills chart.
    #[serde(default = "default_top_skills")]
    pub top_skills: usize,
    /// Number of bins in the score histogram.
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    /// Output directory for reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_role() -> String {
    "Data Scientist".to_string()
}
fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_top_skills() -> usize {
    DEFAULT_TOP_SKILLS
}
fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./resumatch-results")
}

impl Default for ResumatchConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            default_role: default_role(),
            match_mode: MatchMode::default(),
            seed: default_seed(),
            top_skills: default_top_skills(),
            histogram_bins: default_histogram_bins(),
            output_dir: default_output_dir(),
        }
    }
}

impl ResumatchConfig {
    /// The configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<SkillCatalog> {
        match &self.catalog {
            Some(path) => load_catalog(path),
            None => Ok(SkillCatalog::builtin()),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Expand `${VAR}` in `path`, then anchor it at `base` if it is relative.
fn resolve_path(path: &Path, base: Option<&Path>) -> PathBuf {
    let expanded = PathBuf::from(resolve_env_vars(&path.to_string_lossy()));
    match base {
        Some(base) if expanded.is_relative() => base.join(expanded),
        _ => expanded,
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `resumatch.toml` in the current directory
/// 2. `~/.config/resumatch/config.toml`
///
/// Environment variable overrides: `RESUMATCH_ROLE`, `RESUMATCH_MATCH_MODE`,
/// `RESUMATCH_SEED`.
pub fn load_config() -> Result<ResumatchConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ResumatchConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("resumatch.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let (config, base, output_in_file) = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let table: toml::Table = toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            let output_in_file = table.contains_key("output_dir");
            let config: ResumatchConfig = toml::Value::Table(table)
                .try_into()
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            let base = path.parent().map(Path::to_path_buf);
            (config, base, output_in_file)
        }
        None => (ResumatchConfig::default(), None, false),
    };

    let mut config = apply_env_overrides(config, |name| std::env::var(name).ok())?;

    // Relative paths written in a config file are relative to that file.
    config.catalog = config
        .catalog
        .as_deref()
        .map(|p| resolve_path(p, base.as_deref()));
    let output_base = if output_in_file { base.as_deref() } else { None };
    config.output_dir = resolve_path(&config.output_dir, output_base);

    Ok(config)
}

/// Apply `RESUMATCH_*` overrides.
fn apply_env_overrides(
    mut config: ResumatchConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ResumatchConfig> {
    if let Some(role) = lookup("RESUMATCH_ROLE") {
        config.default_role = role;
    }

    if let Some(mode) = lookup("RESUMATCH_MATCH_MODE") {
        config.match_mode = mode
            .parse()
            .map_err(|e: String| anyhow::anyhow!("RESUMATCH_MATCH_MODE: {e}"))?;
    }

    if let Some(seed) = lookup("RESUMATCH_SEED") {
        config.seed = seed
            .trim()
            .parse()
            .with_context(|| format!("RESUMATCH_SEED is not a number: '{seed}'"))?;
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("resumatch"))
}

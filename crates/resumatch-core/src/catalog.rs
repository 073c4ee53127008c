//! Skill catalog: job roles, their required skills, and the global vocabulary.
//!
//! The built-in catalog covers five roles. A custom catalog can be loaded
//! from a TOML file:
//!
//! ```toml
//! extra_skills = ["Rust", "Go"]
//!
//! [[roles]]
//! name = "Systems Engineer"
//! skills = ["Rust", "C++", "Linux"]
//! ```

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A job role and its default required skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl RoleProfile {
    pub fn new(name: &str, skills: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    extra_skills: Vec<String>,
    #[serde(default)]
    roles: Vec<RoleProfile>,
}

/// Immutable registry of roles and the skill vocabulary derived from them.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    roles: Vec<RoleProfile>,
    extra_skills: Vec<String>,
    /// Union of all role skills and the extra skills, sorted and deduplicated.
    vocabulary: Vec<String>,
}

impl SkillCatalog {
    /// Build a catalog. The vocabulary is the sorted union of every role's
    /// skills and `extra_skills`.
    pub fn new(roles: Vec<RoleProfile>, extra_skills: Vec<String>) -> Self {
        let mut vocabulary: BTreeSet<String> = roles
            .iter()
            .flat_map(|r| r.skills.iter().cloned())
            .collect();
        vocabulary.extend(extra_skills.iter().cloned());

        Self {
            roles,
            extra_skills,
            vocabulary: vocabulary.into_iter().collect(),
        }
    }

    /// The catalog shipped with resumatch.
    pub fn builtin() -> Self {
        let roles = vec![
            RoleProfile::new(
                "Data Scientist",
                &[
                    "Python",
                    "Machine Learning",
                    "Data Analysis",
                    "SQL",
                    "Data Visualization",
                    "Statistics",
                ],
            ),
            RoleProfile::new(
                "Frontend Developer",
                &["JavaScript", "HTML", "CSS", "React", "Angular", "Vue"],
            ),
            RoleProfile::new(
                "Backend Developer",
                &["Python", "Java", "Node.js", "SQL", "REST API", "Docker"],
            ),
            RoleProfile::new(
                "DevOps Engineer",
                &["AWS", "Docker", "Kubernetes", "CI/CD", "Git", "Azure"],
            ),
            RoleProfile::new(
                "Full Stack Developer",
                &[
                    "JavaScript",
                    "Python",
                    "React",
                    "Node.js",
                    "SQL",
                    "HTML",
                    "CSS",
                ],
            ),
        ];

        let extra_skills = [
            "C++",
            "Express",
            "Django",
            "Flask",
            "TensorFlow",
            "PyTorch",
            "Deep Learning",
            "GraphQL",
            "MongoDB",
            "PostgreSQL",
            "MySQL",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self::new(roles, extra_skills)
    }

    /// All roles in declaration order.
    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|r| r.name.as_str())
    }

    /// Look up a role by name. Exact matches win over case-insensitive ones.
    pub fn role(&self, name: &str) -> Option<&RoleProfile> {
        self.roles
            .iter()
            .find(|r| r.name == name)
            .or_else(|| self.roles.iter().find(|r| r.name.eq_ignore_ascii_case(name)))
    }

    /// Sorted, deduplicated list of every known skill.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.vocabulary.binary_search_by(|s| s.as_str().cmp(skill)).is_ok()
    }

    /// The vocabulary spelling of `skill`, matched case-insensitively.
    pub fn canonical(&self, skill: &str) -> Option<&str> {
        let skill = skill.trim();
        if let Ok(idx) = self.vocabulary.binary_search_by(|s| s.as_str().cmp(skill)) {
            return Some(&self.vocabulary[idx]);
        }
        let lower = skill.to_lowercase();
        self.vocabulary
            .iter()
            .find(|v| v.to_lowercase() == lower)
            .map(String::as_str)
    }

    /// Default required skills for a role, restricted to vocabulary members.
    ///
    /// Unknown roles yield an empty list. Skills outside the vocabulary are
    /// dropped without error; `new` always puts role skills in the
    /// vocabulary, so this only matters for catalogs assembled by hand.
    pub fn default_skills(&self, role: &str) -> Vec<String> {
        let Some(profile) = self.role(role) else {
            return Vec::new();
        };

        profile
            .skills
            .iter()
            .filter(|skill| {
                let known = self.contains(skill);
                if !known {
                    tracing::debug!("dropping skill '{skill}' of role '{role}': not in vocabulary");
                }
                known
            })
            .cloned()
            .collect()
    }

    /// Canonicalize a user-supplied skill list against the vocabulary,
    /// dropping duplicates while keeping first-seen order.
    pub fn resolve_skills<S: AsRef<str>>(&self, skills: &[S]) -> Result<Vec<String>, AnalysisError> {
        let mut resolved: Vec<String> = Vec::with_capacity(skills.len());
        for skill in skills {
            let skill = skill.as_ref();
            let canonical = self
                .canonical(skill)
                .ok_or_else(|| AnalysisError::UnknownSkill(skill.trim().to_string()))?;
            if !resolved.iter().any(|s| s == canonical) {
                resolved.push(canonical.to_string());
            }
        }
        Ok(resolved)
    }

    /// Required skills for `role`: its defaults, plus `add`, minus `remove`.
    pub fn required_skills<S: AsRef<str>>(
        &self,
        role: &str,
        add: &[S],
        remove: &[S],
    ) -> Result<Vec<String>, AnalysisError> {
        let profile = self
            .role(role)
            .ok_or_else(|| AnalysisError::UnknownRole(role.to_string()))?;

        let mut required = self.default_skills(&profile.name);
        for skill in self.resolve_skills(add)? {
            if !required.contains(&skill) {
                required.push(skill);
            }
        }

        let removed = self.resolve_skills(remove)?;
        required.retain(|s| !removed.contains(s));

        Ok(required)
    }

    /// Serialize the catalog back to the TOML file layout.
    pub fn to_toml_string(&self) -> Result<String> {
        let file = CatalogFile {
            extra_skills: self.extra_skills.clone(),
            roles: self.roles.clone(),
        };
        toml::to_string_pretty(&file).context("failed to serialize catalog")
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Load a catalog from a TOML file.
pub fn load_catalog(path: &Path) -> Result<SkillCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a catalog from a TOML string.
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<SkillCatalog> {
    let parsed: CatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    if parsed.roles.is_empty() {
        anyhow::bail!("catalog {} defines no roles", source_path.display());
    }

    let trim_all = |skills: Vec<String>| -> Vec<String> {
        skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    };

    let roles = parsed
        .roles
        .into_iter()
        .map(|r| RoleProfile {
            name: r.name.trim().to_string(),
            skills: trim_all(r.skills),
        })
        .collect();

    Ok(SkillCatalog::new(roles, trim_all(parsed.extra_skills)))
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct CatalogWarning {
    /// The role name (if applicable).
    pub role: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a catalog for common mistakes.
pub fn validate_catalog(catalog: &SkillCatalog) -> Vec<CatalogWarning> {
    let mut warnings = Vec::new();

    let mut seen_roles = HashSet::new();
    for role in catalog.roles() {
        if !seen_roles.insert(role.name.to_lowercase()) {
            warnings.push(CatalogWarning {
                role: Some(role.name.clone()),
                message: format!("duplicate role: {}", role.name),
            });
        }
    }

    for role in catalog.roles() {
        if role.skills.is_empty() {
            warnings.push(CatalogWarning {
                role: Some(role.name.clone()),
                message: "role has no required skills, every candidate will score 0".into(),
            });
        }

        let mut seen_skills = HashSet::new();
        for skill in &role.skills {
            if !seen_skills.insert(skill.as_str()) {
                warnings.push(CatalogWarning {
                    role: Some(role.name.clone()),
                    message: format!("skill listed twice: {skill}"),
                });
            }
        }
    }

    // Case-only variants extract the same text twice.
    let mut by_lower: Vec<(String, &str)> = Vec::new();
    for skill in catalog.vocabulary() {
        let lower = skill.to_lowercase();
        if let Some((_, first)) = by_lower.iter().find(|(l, _)| *l == lower) {
            warnings.push(CatalogWarning {
                role: None,
                message: format!("skills '{first}' and '{skill}' differ only in case"),
            });
        } else {
            by_lower.push((lower, skill.as_str()));
        }
    }

    warnings
}

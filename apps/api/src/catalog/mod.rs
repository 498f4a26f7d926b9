//! Skill Catalog: the read-only table of job roles and the extraction vocabulary.
//!
//! Loaded once at startup (built-in JSON or `CATALOG_PATH`) and shared as
//! `Arc<Catalog>`. Nothing mutates it afterwards.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Built-in catalog shipped with the binary.
const DEFAULT_CATALOG_JSON: &str = include_str!("../../data/default_catalog.json");

/// A curated learning resource for one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub link: String,
    pub estimated_hours: u32,
}

/// A job role and everything needed to score it and plan towards it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    pub required_skills: Vec<String>,
    pub demand_score: u8, // 0 – 100
    pub description: String,
    #[serde(default)]
    pub learning_resources: BTreeMap<String, LearningResource>,
    /// Earliest stage first.
    #[serde(default)]
    pub career_path: Vec<String>,
}

/// Ordered role table plus the keyword vocabulary used for skill extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub roles: Vec<Role>,
    pub vocabulary: Vec<String>,
}

impl Catalog {
    /// Parses and validates a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(json).context("Catalog JSON is malformed")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_CATALOG_JSON).context("Built-in catalog is invalid")
    }

    /// Reads a catalog file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid catalog in {}", path.display()))
    }

    /// Loads the configured catalog, falling back to the built-in one.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::builtin()?,
        };
        info!(
            "Catalog loaded: {} roles, {} vocabulary skills",
            catalog.roles.len(),
            catalog.vocabulary.len()
        );
        Ok(catalog)
    }

    /// Looks up a role by its exact name.
    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.name == name)
    }

    fn validate(&self) -> Result<()> {
        if self.roles.is_empty() {
            bail!("Catalog must define at least one role");
        }

        let mut seen = HashSet::new();
        for role in &self.roles {
            if role.name.trim().is_empty() {
                bail!("Catalog contains a role with a blank name");
            }
            if !seen.insert(role.name.as_str()) {
                bail!("Duplicate role name '{}'", role.name);
            }
            if role.demand_score > 100 {
                bail!(
                    "Role '{}' has demand_score {} (must be 0–100)",
                    role.name,
                    role.demand_score
                );
            }
            if let Some(skill) = role.required_skills.iter().find(|s| s.trim().is_empty()) {
                bail!("Role '{}' has a blank required skill '{skill}'", role.name);
            }
            for (skill, resource) in &role.learning_resources {
                if resource.estimated_hours == 0 {
                    bail!(
                        "Role '{}' resource for '{skill}' must estimate at least one hour",
                        role.name
                    );
                }
            }
        }

        if self.vocabulary.iter().any(|s| s.trim().is_empty()) {
            bail!("Vocabulary contains a blank skill");
        }

        Ok(())
    }
}

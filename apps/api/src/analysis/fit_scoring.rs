//! Fit Scoring: pluggable, trait-based scorer that ranks catalog roles against a skill set.
//!
//! Default: `OverlapFitScorer` (skill overlap blended with market demand,
//! pure, deterministic, fully testable).
//!
//! `AppState` holds an `Arc<dyn FitScorer>`, so a substitute scorer or catalog
//! can be injected without touching handlers.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, LearningResource, Role};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One role scored against one skill set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role_name: String,
    pub match_score: f64,    // 0.0 – 100.0, one decimal
    pub demand_score: u8,    // 0 – 100
    pub combined_score: f64, // one decimal
    pub description: String,
    pub required_skills: Vec<String>,
    pub known_skills: Vec<String>,   // required ∩ user, declaration order
    pub missing_skills: Vec<String>, // required − user, declaration order
    pub learning_resources: BTreeMap<String, LearningResource>,
    pub career_path: Vec<String>,
}

/// Qualitative band for a 0–100 score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => ScoreBand::Excellent,
            s if s >= 60.0 => ScoreBand::Good,
            s if s >= 40.0 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

/// Weights for the combined ranking score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill_match: f64,
    pub demand: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.7,
            demand: 0.3,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Ranks every catalog role for a skill set. Implementations must be pure:
/// identical inputs give identical output, in the same order.
///
/// Carried in `AppState` as `Arc<dyn FitScorer>`.
pub trait FitScorer: Send + Sync {
    fn score(&self, user_skills: &BTreeSet<String>, catalog: &Catalog) -> Vec<RoleMatch>;
}

// ────────────────────────────────────────────────────────────────────────────
// OverlapFitScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm:
/// 1. match_score = 100 × |required ∩ user| / |required|, case-insensitive, one decimal
///    (0 when the role lists no skills)
/// 2. combined_score = 0.7 × match_score + 0.3 × demand_score, one decimal
/// 3. Stable sort by combined_score descending; ties keep catalog order
#[derive(Debug, Clone, Default)]
pub struct OverlapFitScorer {
    pub weights: ScoringWeights,
}

impl FitScorer for OverlapFitScorer {
    fn score(&self, user_skills: &BTreeSet<String>, catalog: &Catalog) -> Vec<RoleMatch> {
        let user_lower: HashSet<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();

        let mut matches: Vec<RoleMatch> = catalog
            .roles
            .iter()
            .map(|role| score_role(role, &user_lower, &self.weights))
            .collect();

        // sort_by is stable
        matches.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
        matches
    }
}

/// Scores and ranks `catalog` with the default weights.
pub fn score_roles(user_skills: &BTreeSet<String>, catalog: &Catalog) -> Vec<RoleMatch> {
    OverlapFitScorer::default().score(user_skills, catalog)
}

// ────────────────────────────────────────────────────────────────────────────
// Core overlap algorithm
// ────────────────────────────────────────────────────────────────────────────

fn score_role(role: &Role, user_lower: &HashSet<String>, weights: &ScoringWeights) -> RoleMatch {
    let (known_skills, missing_skills): (Vec<String>, Vec<String>) = role
        .required_skills
        .iter()
        .cloned()
        .partition(|skill| user_lower.contains(&skill.to_lowercase()));

    let match_score = compute_match_score(known_skills.len(), role.required_skills.len());
    let combined_score = round1(
        weights.skill_match * match_score + weights.demand * f64::from(role.demand_score),
    );

    RoleMatch {
        role_name: role.name.clone(),
        match_score,
        demand_score: role.demand_score,
        combined_score,
        description: role.description.clone(),
        required_skills: role.required_skills.clone(),
        known_skills,
        missing_skills,
        learning_resources: role.learning_resources.clone(),
        career_path: role.career_path.clone(),
    }
}

fn compute_match_score(known: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    round1(known as f64 / required as f64 * 100.0)
}

/// Rounds to one decimal place, ties to even, judged on the exact binary
/// value rather than on `value * 10.0` (which can round a near-tie onto a tie).
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

//! Learning Planner: turns a role's missing skills into (skill, resource, hours) items.

use serde::{Deserialize, Serialize};

use crate::analysis::fit_scoring::RoleMatch;

/// Hour estimate for skills without a curated resource.
pub const DEFAULT_ESTIMATED_HOURS: u32 = 30;

/// Study hours assumed per week for the weeks estimate.
pub const HOURS_PER_WEEK: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlanItem {
    pub skill: String,
    pub resource_link: String,
    pub estimated_hours: u32,
}

/// A plan plus its totals. An empty plan means no learning is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPlan {
    pub items: Vec<LearningPlanItem>,
    pub total_hours: u32,
    /// `total_hours / HOURS_PER_WEEK`, truncated.
    pub weeks: u32,
}

impl LearningPlan {
    pub fn for_match(role_match: &RoleMatch) -> Self {
        let items = build_plan(role_match);
        let total_hours = total_hours(&items);
        Self {
            items,
            total_hours,
            weeks: total_hours / HOURS_PER_WEEK,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One item per missing skill, in missing-skill order. Curated resources are
/// used verbatim; anything else gets a search link and the default estimate.
pub fn build_plan(role_match: &RoleMatch) -> Vec<LearningPlanItem> {
    role_match
        .missing_skills
        .iter()
        .map(|skill| match role_match.learning_resources.get(skill) {
            Some(resource) => LearningPlanItem {
                skill: skill.clone(),
                resource_link: resource.link.clone(),
                estimated_hours: resource.estimated_hours,
            },
            None => LearningPlanItem {
                skill: skill.clone(),
                resource_link: fallback_link(skill),
                estimated_hours: DEFAULT_ESTIMATED_HOURS,
            },
        })
        .collect()
}

pub fn total_hours(items: &[LearningPlanItem]) -> u32 {
    items.iter().map(|i| i.estimated_hours).sum()
}

fn fallback_link(skill: &str) -> String {
    format!(
        "https://www.youtube.com/results?search_query={}+tutorial",
        skill.replace(' ', "+")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fit_scoring::score_roles;
    use crate::catalog::{Catalog, LearningResource};
    use std::collections::{BTreeMap, BTreeSet};

    fn make_match(missing: &[&str], resources: &[(&str, &str, u32)]) -> RoleMatch {
        RoleMatch {
            role_name: "Test Role".to_string(),
            match_score: 0.0,
            demand_score: 50,
            combined_score: 15.0,
            description: String::new(),
            required_skills: missing.iter().map(|s| s.to_string()).collect(),
            known_skills: vec![],
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            learning_resources: resources
                .iter()
                .map(|(skill, link, hours)| {
                    (
                        skill.to_string(),
                        LearningResource {
                            link: link.to_string(),
                            estimated_hours: *hours,
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>(),
            career_path: vec![],
        }
    }

    #[test]
    fn test_one_item_per_missing_skill_in_order() {
        let m = make_match(&["SQL", "Power BI", "Tableau"], &[("Tableau", "https://t", 25)]);
        let plan = build_plan(&m);
        assert_eq!(plan.len(), m.missing_skills.len());
        let order: Vec<&str> = plan.iter().map(|i| i.skill.as_str()).collect();
        assert_eq!(order, vec!["SQL", "Power BI", "Tableau"]);
    }

    #[test]
    fn test_curated_resource_used_verbatim() {
        let m = make_match(&["Tableau"], &[("Tableau", "https://t", 25)]);
        let plan = build_plan(&m);
        assert_eq!(
            plan[0],
            LearningPlanItem {
                skill: "Tableau".to_string(),
                resource_link: "https://t".to_string(),
                estimated_hours: 25,
            }
        );
    }

    #[test]
    fn test_fallback_for_uncurated_skill() {
        let m = make_match(&["Power BI"], &[]);
        let plan = build_plan(&m);
        assert_eq!(plan[0].estimated_hours, DEFAULT_ESTIMATED_HOURS);
        assert_eq!(
            plan[0].resource_link,
            "https://www.youtube.com/results?search_query=Power+BI+tutorial"
        );
    }

    #[test]
    fn test_resource_lookup_is_exact_key() {
        let m = make_match(&["tableau"], &[("Tableau", "https://t", 25)]);
        assert_eq!(build_plan(&m)[0].estimated_hours, 30);
    }

    #[test]
    fn test_no_missing_skills_means_empty_plan() {
        let plan = LearningPlan::for_match(&make_match(&[], &[]));
        assert!(plan.is_empty());
        assert_eq!(plan.total_hours, 0);
        assert_eq!(plan.weeks, 0);
    }

    #[test]
    fn test_totals_truncate_weeks() {
        // 25 + 30 + 30 = 85 hours → 2 weeks
        let m = make_match(&["Tableau", "A", "B"], &[("Tableau", "https://t", 25)]);
        let plan = LearningPlan::for_match(&m);
        assert_eq!(plan.total_hours, 85);
        assert_eq!(plan.weeks, 2);
    }

    #[test]
    fn test_data_analyst_plan_from_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let user: BTreeSet<String> = ["Python", "SQL", "Excel"].iter().map(|s| s.to_string()).collect();
        let matches = score_roles(&user, &catalog);
        let analyst = matches.iter().find(|m| m.role_name == "Data Analyst").unwrap();

        let plan = LearningPlan::for_match(analyst);
        // Data Visualization 30, Statistics 50, Tableau 25, then three 30h fallbacks
        assert_eq!(plan.items.len(), 6);
        assert_eq!(plan.total_hours, 195);
        assert_eq!(plan.weeks, 4);
    }

    #[test]
    fn test_full_skill_match_needs_no_plan() {
        let catalog = Catalog::builtin().unwrap();
        let role = catalog.role("Business Analyst").unwrap();
        let user: BTreeSet<String> = role.required_skills.iter().cloned().collect();
        let matches = score_roles(&user, &catalog);
        let analyst = matches.iter().find(|m| m.role_name == "Business Analyst").unwrap();
        assert!(build_plan(analyst).is_empty());
    }
}

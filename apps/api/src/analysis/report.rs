//! Plain-text career report for one role match, served as a download.

use crate::analysis::fit_scoring::RoleMatch;
use crate::analysis::learning_plan::LearningPlan;
use crate::analysis::roadmap::render_roadmap;

/// File name offered for the downloaded report.
pub fn report_file_name(role_name: &str) -> String {
    format!("career_report_{}.txt", role_name.replace(' ', "_"))
}

/// Renders the report. Only formats data the scorer and planner already produced.
pub fn render_report(role_match: &RoleMatch) -> String {
    let mut out = String::new();

    out.push_str("CAREER COMPASS - CAREER ANALYSIS REPORT\n");
    out.push_str("=======================================\n\n");
    out.push_str(&format!("Career Role: {}\n", role_match.role_name));
    out.push_str(&format!("Description: {}\n\n", role_match.description));

    out.push_str("SCORES\n------\n");
    out.push_str(&format!("Skills Match: {:.1}%\n", role_match.match_score));
    out.push_str(&format!("Industry Demand: {}/100\n", role_match.demand_score));
    out.push_str(&format!(
        "Overall Score: {:.1}/100\n\n",
        role_match.combined_score
    ));

    push_skill_list(&mut out, "SKILLS YOU HAVE", "✓", &role_match.known_skills);
    push_skill_list(&mut out, "SKILLS TO LEARN", "○", &role_match.missing_skills);

    out.push_str("LEARNING PLAN\n-------------\n");
    let plan = LearningPlan::for_match(role_match);
    if plan.is_empty() {
        out.push_str("No learning plan needed: every required skill is covered.\n");
    } else {
        for item in &plan.items {
            out.push_str(&format!("\nSkill: {}\n", item.skill));
            out.push_str(&format!("Resource: {}\n", item.resource_link));
            out.push_str(&format!("Estimated Time: {} hours\n", item.estimated_hours));
        }
        out.push_str(&format!(
            "\nTotal Learning Time: {} hours ({} weeks)\n",
            plan.total_hours, plan.weeks
        ));
    }
    out.push('\n');

    out.push_str("CAREER PROGRESSION ROADMAP\n--------------------------\n");
    out.push_str(&format!("{}\n\n", render_roadmap(&role_match.career_path)));
    out.push_str("---\nGenerated by Career Compass\n");

    out
}

fn push_skill_list(out: &mut String, title: &str, marker: &str, skills: &[String]) {
    let heading = format!("{title} ({})", skills.len());
    out.push_str(&format!("{heading}\n{}\n", "-".repeat(heading.chars().count())));
    if skills.is_empty() {
        out.push_str("None\n");
    }
    for skill in skills {
        out.push_str(&format!("{marker} {skill}\n"));
    }
    out.push('\n');
}
